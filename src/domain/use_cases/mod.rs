pub mod employee;
pub mod feed;
