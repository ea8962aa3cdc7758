//! Identity facts of one process and the lines reporting them.
use std::fmt;
use std::str::FromStr;

use crate::error::GreeterError;
use crate::group::GroupTrait;

use mpi::topology::Rank;

pub(crate) const GREETING_PREFIX: &str = "Hello, World! I am rank ";
const SIZE_SEPARATOR: &str = " of ";
const NODE_SEPARATOR: &str = ". Running on node ";

/// Rank, group size and node name of a process.
///
/// Displays as the greeting line, without the trailing newline:
/// `Hello, World! I am rank 0 of 4. Running on node node01`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcessIdentity {
    pub rank: Rank,
    pub size: i32,
    pub host_name: String,
}

impl ProcessIdentity {
    pub fn new(rank: Rank, size: i32, host_name: String) -> ProcessIdentity {
        ProcessIdentity {
            rank,
            size,
            host_name,
        }
    }

    /// Identity of the calling process within `group`.
    pub fn of<G: GroupTrait>(group: &G, host_name: String) -> ProcessIdentity {
        ProcessIdentity::new(group.rank(), group.size(), host_name)
    }
}

impl fmt::Display for ProcessIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}",
            GREETING_PREFIX, self.rank, SIZE_SEPARATOR, self.size, NODE_SEPARATOR, self.host_name
        )
    }
}

impl FromStr for ProcessIdentity {
    type Err = GreeterError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let bad_line = || GreeterError::Parse(line.to_string());

        let rest = line
            .trim_end_matches(&['\r', '\n'][..])
            .strip_prefix(GREETING_PREFIX)
            .ok_or_else(bad_line)?;
        let (rank, rest) = rest.split_once(SIZE_SEPARATOR).ok_or_else(bad_line)?;
        let (size, host_name) = rest.split_once(NODE_SEPARATOR).ok_or_else(bad_line)?;

        Ok(ProcessIdentity {
            rank: rank.parse().map_err(|_| bad_line())?,
            size: size.parse().map_err(|_| bad_line())?,
            host_name: host_name.to_string(),
        })
    }
}

/// Position of a process both in the world group and in its self group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfIdentity {
    pub world_rank: Rank,
    pub world_size: i32,
    pub self_rank: Rank,
    pub self_size: i32,
}

impl SelfIdentity {
    pub fn of<W: GroupTrait, S: GroupTrait>(world: &W, self_group: &S) -> SelfIdentity {
        SelfIdentity {
            world_rank: world.rank(),
            world_size: world.size(),
            self_rank: self_group.rank(),
            self_size: self_group.size(),
        }
    }
}

impl fmt::Display for SelfIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Hello, I am process {} of {} in COMM_WORLD; in COMM_SELF I am process {} of {}",
            self.world_rank, self.world_size, self.self_rank, self.self_size
        )
    }
}

/// Cut `name` down to at most `max_len` bytes without splitting a character.
/// Returns the kept prefix, its length is the reported host-name length.
pub fn truncate_host_name(name: &str, max_len: usize) -> &str {
    if name.len() <= max_len {
        return name;
    }

    let mut end = max_len;
    while !name.is_char_boundary(end) {
        end -= 1;
    }

    &name[..end]
}
