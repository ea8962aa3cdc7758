pub mod mpi_info;
