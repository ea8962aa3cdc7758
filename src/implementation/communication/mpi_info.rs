//! Contains functions for all MPI information used by the greeter,
//! could be replaced with an alternative communication scheme

use crate::error::Result;
use crate::group::GroupTrait;

use mpi::environment::Universe;
use mpi::topology::{Communicator, Rank, SimpleCommunicator};

/// A communicator seen as a group of ranked processes.
pub struct MpiGroup {
    comm: SimpleCommunicator,
}

impl MpiGroup {
    pub fn new(comm: SimpleCommunicator) -> MpiGroup {
        MpiGroup { comm }
    }
}

impl GroupTrait for MpiGroup {
    fn rank(&self) -> Rank {
        Communicator::rank(&self.comm)
    }

    fn size(&self) -> i32 {
        Communicator::size(&self.comm)
    }
}

/// All processes launched together for this run
pub fn world(universe: &Universe) -> MpiGroup {
    MpiGroup::new(universe.world())
}

/// Only the calling process, rank 0 of 1
pub fn self_group() -> MpiGroup {
    MpiGroup::new(SimpleCommunicator::self_comm())
}

/// Name of the node running this process, untruncated
pub fn processor_name() -> Result<String> {
    Ok(mpi::environment::processor_name()?)
}

/// Version of the MPI standard and description of the MPI library, the latter
/// only if it is valid UTF-8
pub fn versions() -> ((i32, i32), Option<String>) {
    (
        mpi::environment::version(),
        mpi::environment::library_version().ok(),
    )
}

/// Seconds since an arbitrary point in the past
pub fn wall_time() -> f64 {
    mpi::environment::time()
}
