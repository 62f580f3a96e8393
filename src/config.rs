use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            data_dir: env::var("BUSTRACK_DATA_DIR")
                .unwrap_or_else(|_| "./data".to_string())
                .into(),
        }
    }
}
