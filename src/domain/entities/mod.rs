pub mod employee;
pub mod user_view;
