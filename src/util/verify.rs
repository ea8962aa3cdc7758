//! Check the combined output of a run against what every run must satisfy:
//! one line per process, ranks covering `[0, N)` exactly once, the same size
//! on every line and a non-empty host name.
use crate::error::{GreeterError, Result};
use crate::identity::{ProcessIdentity, GREETING_PREFIX};

/// Parse and check all greeting lines of a run started with `expected_size`
/// processes. Lines that are not greetings (self group lines, log output)
/// are skipped, a line starting like a greeting must parse as one. The order
/// of lines does not matter.
///
/// # Returns
/// * `Result<Vec<ProcessIdentity>>` - The identities sorted by rank, a
/// `GreeterError::Parse` for a garbled greeting, or a
/// `GreeterError::Verification` naming the first violation found
pub fn verify_run<'a, I>(lines: I, expected_size: i32) -> Result<Vec<ProcessIdentity>>
where
    I: IntoIterator<Item = &'a str>,
{
    if expected_size < 1 {
        return Err(GreeterError::Verification(format!(
            "a run has at least one process, got size {}",
            expected_size
        )));
    }

    let mut identities = Vec::new();
    for line in lines {
        if line.starts_with(GREETING_PREFIX) {
            identities.push(line.parse::<ProcessIdentity>()?);
        }
    }

    if identities.len() != expected_size as usize {
        return Err(GreeterError::Verification(format!(
            "expected {} greeting lines, found {}",
            expected_size,
            identities.len()
        )));
    }

    let mut seen = vec![false; expected_size as usize];
    for id in &identities {
        if id.size != expected_size {
            return Err(GreeterError::Verification(format!(
                "rank {} reports size {} instead of {}",
                id.rank, id.size, expected_size
            )));
        }

        if id.rank < 0 || id.rank >= expected_size {
            return Err(GreeterError::Verification(format!(
                "rank {} is outside [0, {})",
                id.rank, expected_size
            )));
        }

        if seen[id.rank as usize] {
            return Err(GreeterError::Verification(format!(
                "rank {} reported more than once",
                id.rank
            )));
        }
        seen[id.rank as usize] = true;

        if id.host_name.is_empty() {
            return Err(GreeterError::Verification(format!(
                "rank {} reports an empty host name",
                id.rank
            )));
        }
    }

    identities.sort_by_key(|id| id.rank);

    Ok(identities)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(rank: i32, size: i32, host: &str) -> String {
        ProcessIdentity::new(rank, size, host.to_string()).to_string()
    }

    fn assert_violation(lines: &[String], size: i32, needle: &str) {
        match verify_run(lines.iter().map(|l| l.as_str()), size) {
            Err(GreeterError::Verification(msg)) => {
                assert!(msg.contains(needle), "{:?} does not mention {:?}", msg, needle)
            }
            other => panic!("expected a violation, got {:?}", other),
        }
    }

    #[test]
    fn single_process_run() {
        let lines = vec![line(0, 1, "node01")];
        let ids = verify_run(lines.iter().map(|l| l.as_str()), 1).unwrap();

        assert_eq!(ids, vec![ProcessIdentity::new(0, 1, "node01".to_string())]);
    }

    #[test]
    fn unordered_run_with_other_output() {
        let lines = vec![
            line(2, 4, "node01"),
            "Hello, I am process 2 of 4 in COMM_WORLD; in COMM_SELF I am process 0 of 1".to_string(),
            line(0, 4, "node01"),
            line(3, 4, "node01"),
            "INFO [mpi_greeter::greeter] Joined world group with MPI-3.1".to_string(),
            line(1, 4, "node01"),
        ];
        let ids = verify_run(lines.iter().map(|l| l.as_str()), 4).unwrap();

        let ranks: Vec<i32> = ids.iter().map(|id| id.rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn missing_line() {
        let lines = vec![line(0, 2, "a")];
        assert_violation(&lines, 2, "expected 2 greeting lines, found 1");
    }

    #[test]
    fn duplicate_rank() {
        let lines = vec![line(1, 2, "a"), line(1, 2, "b")];
        assert_violation(&lines, 2, "more than once");
    }

    #[test]
    fn rank_out_of_range() {
        let lines = vec![line(0, 2, "a"), line(2, 2, "a")];
        assert_violation(&lines, 2, "outside");
    }

    #[test]
    fn size_mismatch() {
        let lines = vec![line(0, 2, "a"), line(1, 3, "a")];
        assert_violation(&lines, 2, "reports size 3");
    }

    #[test]
    fn empty_host_name() {
        let lines = vec![line(0, 1, "")];
        assert_violation(&lines, 1, "empty host name");
    }

    #[test]
    fn garbled_greeting_is_a_parse_error() {
        let lines = vec![
            line(0, 2, "a"),
            "Hello, World! I am rank x of 2. Running on node a".to_string(),
        ];

        match verify_run(lines.iter().map(|l| l.as_str()), 2) {
            Err(GreeterError::Parse(bad)) => assert!(bad.contains("rank x")),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn empty_run_is_invalid() {
        assert_violation(&[], 0, "at least one process");
    }
}
