pub mod a001_assignment;
