//! `cfmeta check` behaviour.

use serde::{Deserialize, Serialize};

const fn default_fail_on_diagnostics() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Exit with status 1 when any function has diagnostics.
    #[serde(default = "default_fail_on_diagnostics")]
    pub fail_on_diagnostics: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            fail_on_diagnostics: default_fail_on_diagnostics(),
        }
    }
}
