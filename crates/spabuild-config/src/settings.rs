//! Global configuration settings shared across profiles.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Default log filter for the CLI when neither flags nor `RUST_LOG` set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}
