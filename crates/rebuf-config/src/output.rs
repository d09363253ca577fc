//! Output destination settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Overwrite input files instead of writing to stdout.
    #[serde(default)]
    pub in_place: bool,
}
