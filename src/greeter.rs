//! The greeter joins the world group, reports who it is and leaves again.
//!
//! Joining and leaving are collective: every process of the run has to call
//! `Greeter::initialize` and `Greeter::finalize` exactly once, in that order.
//! A `Greeter` only exists between the two calls, so the order is enforced by
//! ownership. Dropping a `Greeter` without finalizing still leaves the group.
use std::io::Write;

use crate::error::{GreeterError, Result};
use crate::greeter_config::GreeterConfiguration;
use crate::group::GroupTrait;
use crate::identity::{truncate_host_name, ProcessIdentity, SelfIdentity};
use crate::implementation::communication::mpi_info::{self, MpiGroup};

use mpi::environment::Universe;
use mpi::topology::Rank;

/// A process that has joined the world group.
///
/// # Members
/// * `universe` - MPI universe struct, the group is left when it is dropped
/// * `config` - GreeterConfiguration this process was started with
/// * `joined_at` - MPI wall time at which the group was joined
/// * `finalized` - Set by `finalize`, distinguishes it from an implicit drop
pub struct Greeter {
    universe: Universe,
    config: GreeterConfiguration,
    joined_at: f64,
    finalized: bool,
}

impl Greeter {
    /// Join the default group of all processes launched for this run.
    ///
    /// # Returns
    /// * `Result<Greeter>` - The joined greeter, or
    /// `GreeterError::AlreadyInitialized` if MPI was initialized before in
    /// this process. Launch misconfigurations make the MPI runtime abort the
    /// process before this returns.
    pub fn initialize(config: GreeterConfiguration) -> Result<Greeter> {
        config.validate()?;

        let universe = mpi::initialize().ok_or(GreeterError::AlreadyInitialized)?;
        let joined_at = mpi_info::wall_time();

        // Every rank runs the same library, only the master describes it
        if config.debug && mpi_info::world(&universe).is_master() {
            let ((version, subversion), library) = mpi_info::versions();
            info!("Joined world group with MPI-{}.{}", version, subversion);
            match library {
                Some(library) => debug!("MPI library: {}", library.trim_end()),
                None => debug!("MPI library version is not valid UTF-8"),
            }
        }

        Ok(Greeter {
            universe,
            config,
            joined_at,
            finalized: false,
        })
    }

    /// All processes launched together for this run
    pub fn world(&self) -> MpiGroup {
        mpi_info::world(&self.universe)
    }

    /// The group holding only this process
    pub fn self_group(&self) -> MpiGroup {
        mpi_info::self_group()
    }

    /// Name of the node running this process, truncated to the configured
    /// maximum, and its length in bytes.
    pub fn get_host_name(&self) -> Result<(String, usize)> {
        let name = mpi_info::processor_name()?;
        let truncated = truncate_host_name(&name, self.config.max_host_name_len);

        if truncated.len() < name.len() {
            warn!(
                "Host name {} truncated to {} bytes",
                name, self.config.max_host_name_len
            );
        }

        Ok((truncated.to_string(), truncated.len()))
    }

    /// Rank, size and host name of this process in the world group.
    pub fn identity(&self) -> Result<ProcessIdentity> {
        let (host_name, _) = self.get_host_name()?;

        Ok(ProcessIdentity::of(&self.world(), host_name))
    }

    /// World and self group positions of this process.
    pub fn self_identity(&self) -> SelfIdentity {
        SelfIdentity::of(&self.world(), &self.self_group())
    }

    /// Write the greeting line to `out`, followed by the self group line if
    /// the configuration asks for it.
    pub fn greet<W: Write>(&self, out: &mut W) -> Result<()> {
        let identity = self.identity()?;
        report(out, identity.rank, identity.size, &identity.host_name)?;

        if self.config.show_self {
            writeln!(out, "{}", self.self_identity())?;
            out.flush()?;
        }

        Ok(())
    }

    /// Leave the world group and release the MPI runtime. Collective, every
    /// process must call it.
    pub fn finalize(mut self) {
        if self.config.debug {
            info!(
                "Leaving world group after {:.6}s",
                mpi_info::wall_time() - self.joined_at
            );
        }

        self.finalized = true;
    }
}

impl Drop for Greeter {
    fn drop(&mut self) {
        if !self.finalized {
            warn!("Greeter dropped without finalize, leaving world group");
        }
        // MPI_Finalize runs when `universe` is dropped
    }
}

/// Zero-based position of this process within `group`
pub fn get_rank<G: GroupTrait>(group: &G) -> Rank {
    group.rank()
}

/// Number of processes in `group`
pub fn get_size<G: GroupTrait>(group: &G) -> i32 {
    group.size()
}

/// Write one greeting line and flush it, so lines of different processes are
/// not held back in buffers until exit.
pub fn report<W: Write>(out: &mut W, rank: Rank, size: i32, host_name: &str) -> Result<()> {
    let identity = ProcessIdentity::new(rank, size, host_name.to_string());
    writeln!(out, "{}", identity)?;
    out.flush()?;

    Ok(())
}
