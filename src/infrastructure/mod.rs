pub mod mars;
