//! General application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_format() -> String {
    "table".to_string()
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given (`table`, `json`, `raw`).
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Where downloaded test files are written.
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            download_dir: default_download_dir(),
        }
    }
}
