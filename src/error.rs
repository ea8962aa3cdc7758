//! Module for handling Errors and Results
use std::io;
use std::result;
use std::string::FromUtf8Error;

use log::SetLoggerError;
use thiserror::Error;

/// Everything that can go wrong while greeting.
#[derive(Debug, Error)]
pub enum GreeterError {
    /// The MPI runtime was already initialized in this process, joining the
    /// group a second time is not allowed.
    #[error("the MPI runtime has already been initialized in this process")]
    AlreadyInitialized,
    #[error("processor name is not valid UTF-8: {0}")]
    HostName(#[from] FromUtf8Error),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("could not write report: {0}")]
    Output(#[from] io::Error),
    #[error("could not install logger: {0}")]
    Logger(#[from] SetLoggerError),
    #[error("not a greeting line: {0:?}")]
    Parse(String),
    #[error("run output is inconsistent: {0}")]
    Verification(String),
}

// Result type which can often have Greeter errors
pub type Result<T> = result::Result<T, GreeterError>;
