pub mod config;
pub mod entities;
pub mod error;
pub mod seed;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use store::RosterStore;
