pub mod communication;
