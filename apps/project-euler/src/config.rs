use std::path::PathBuf;

use crate::data;

/// Settings shared by every solution run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory holding the problem data files (`names.txt`, `matrix.txt`, ...).
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Config {
            data_dir: data_dir.unwrap_or_else(data::default_dir),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(None)
    }
}
