pub mod employee;
pub mod file;
pub mod search;
pub mod stats;
