//! Launch with `mpiexec -n <N> mpi-greeter`, every process prints one line
//! naming its rank, the number of processes and the node it runs on.

#[macro_use]
extern crate log;

use std::io;
use std::process;

use clap::Parser;
use mpi_greeter::{Greeter, GreeterConfiguration};

fn main() {
    let config = GreeterConfiguration::parse();

    if let Err(e) = config.init_logging() {
        eprintln!("mpi-greeter: {}", e);
        process::exit(1);
    }

    let greeter = match Greeter::initialize(config) {
        Ok(greeter) => greeter,
        Err(e) => {
            error!("Could not join the world group: {}", e);
            eprintln!("mpi-greeter: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let result = greeter.greet(&mut stdout.lock());

    // Leave the group even if reporting failed, the other ranks wait for us
    greeter.finalize();

    if let Err(e) = result {
        eprintln!("mpi-greeter: {}", e);
        process::exit(1);
    }
}
