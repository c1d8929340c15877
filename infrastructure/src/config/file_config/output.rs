//! Output configuration from TOML (`[output]` section)

use hwhelper_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Terminal output settings for the `ask` and `probe` commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
