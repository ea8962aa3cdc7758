use mpi::topology::Rank;

/// Something whose members can identify themselves by rank, such as an MPI
/// communicator.
pub trait GroupTrait {
    /// Zero-based position of the calling process, unique within the group
    /// and stable for the lifetime of the run.
    fn rank(&self) -> Rank;

    /// Number of processes in the group, the same on every member.
    fn size(&self) -> i32;

    /// Rank 0 is the master of a group.
    fn is_master(&self) -> bool {
        self.rank() == 0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Group with fixed values, stands in for a communicator in unit tests.
    #[derive(Debug, Clone, Copy)]
    pub struct FixedGroup {
        pub rank: Rank,
        pub size: i32,
    }

    impl GroupTrait for FixedGroup {
        fn rank(&self) -> Rank {
            self.rank
        }

        fn size(&self) -> i32 {
            self.size
        }
    }

    #[test]
    fn master_is_rank_zero() {
        assert!(FixedGroup { rank: 0, size: 4 }.is_master());
        assert!(!FixedGroup { rank: 3, size: 4 }.is_master());
    }
}
