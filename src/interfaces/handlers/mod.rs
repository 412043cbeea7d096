pub mod employees;
pub mod home;
pub mod system;
pub mod users;
