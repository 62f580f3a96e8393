pub mod account;
pub mod assignment;
pub mod bus;
