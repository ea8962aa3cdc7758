#[macro_use]
extern crate log;
extern crate mpi;
extern crate simple_logger;

pub mod error;
pub mod greeter;
pub mod greeter_config;
pub mod group;
pub mod identity;
pub mod implementation;
pub mod util;

pub use error::{GreeterError, Result};
pub use greeter::{get_rank, get_size, report, Greeter};
pub use greeter_config::{GreeterConfiguration, DEFAULT_MAX_HOST_NAME_LEN};
pub use group::GroupTrait;
pub use identity::{truncate_host_name, ProcessIdentity, SelfIdentity};
pub use implementation::communication::mpi_info::MpiGroup;
pub use util::verify::verify_run;
