use crate::error::{GreeterError, Result};

use clap::Parser;

/// Maximum host-name length used when none is given. Common MPI
/// implementations define MPI_MAX_PROCESSOR_NAME as 256.
pub const DEFAULT_MAX_HOST_NAME_LEN: usize = 256;

/// Settings for one greeter process, identical on every rank since every
/// rank is started with the same command line.
///
/// * `debug` - Install simple_logger and emit runtime information. The logger
/// writes to stdout, so this interleaves with the greeting lines
/// * `max_host_name_len` - Host names longer than this many bytes are truncated
/// * `show_self` - Also report the identity within the self group
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "mpi-greeter")]
#[command(about = "Print one greeting line per MPI process")]
pub struct GreeterConfiguration {
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Maximum length in bytes of the reported host name
    #[arg(long, default_value_t = DEFAULT_MAX_HOST_NAME_LEN, value_parser = parse_host_name_len)]
    pub max_host_name_len: usize,

    /// Also print the identity of this process within COMM_SELF
    #[arg(long)]
    pub show_self: bool,
}

impl Default for GreeterConfiguration {
    fn default() -> Self {
        GreeterConfiguration {
            debug: false,
            max_host_name_len: DEFAULT_MAX_HOST_NAME_LEN,
            show_self: false,
        }
    }
}

impl GreeterConfiguration {
    pub fn new(debug: bool, max_host_name_len: usize, show_self: bool) -> Result<Self> {
        let config = GreeterConfiguration {
            debug,
            max_host_name_len,
            show_self,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_host_name_len == 0 {
            return Err(GreeterError::InvalidConfiguration(
                "max_host_name_len must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Install the logger if debugging was requested. May only succeed once
    /// per process.
    pub fn init_logging(&self) -> Result<()> {
        if self.debug {
            simple_logger::init_with_level(log::Level::Debug)?;
        }

        Ok(())
    }
}

fn parse_host_name_len(arg: &str) -> std::result::Result<usize, String> {
    let len: usize = arg
        .parse()
        .map_err(|_| format!("cannot parse {} into an integer", arg))?;

    if len == 0 {
        return Err("the host name length must be at least 1".to_string());
    }

    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_runtime_limit() {
        let config = GreeterConfiguration::try_parse_from(&["mpi-greeter"]).unwrap();

        assert_eq!(config, GreeterConfiguration::default());
        assert_eq!(config.max_host_name_len, DEFAULT_MAX_HOST_NAME_LEN);
        assert!(!config.debug);
        assert!(!config.show_self);
    }

    #[test]
    fn flags_are_parsed() {
        let config = GreeterConfiguration::try_parse_from(&[
            "mpi-greeter",
            "--debug",
            "--show-self",
            "--max-host-name-len",
            "16",
        ])
        .unwrap();

        assert!(config.debug);
        assert!(config.show_self);
        assert_eq!(config.max_host_name_len, 16);
    }

    #[test]
    fn zero_length_is_rejected() {
        assert!(GreeterConfiguration::try_parse_from(&[
            "mpi-greeter",
            "--max-host-name-len",
            "0"
        ])
        .is_err());

        match GreeterConfiguration::new(false, 0, false) {
            Err(GreeterError::InvalidConfiguration(_)) => {}
            other => panic!("expected invalid configuration, got {:?}", other),
        }
    }

    #[test]
    fn garbage_length_is_rejected() {
        assert!(GreeterConfiguration::try_parse_from(&[
            "mpi-greeter",
            "--max-host-name-len",
            "lots"
        ])
        .is_err());
    }
}
