// SPDX-License-Identifier: MPL-2.0
//! Notification kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a notification; determines its accent color and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Operation failed.
    Error,
    /// Something worth attention that did not block the operation.
    Warning,
    /// Neutral information.
    Info,
}

impl Kind {
    /// All kinds, in display order.
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Warning, Kind::Info];

    /// Returns the lowercase name used in config files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(Kind::Success),
            "error" => Ok(Kind::Error),
            "warning" => Ok(Kind::Warning),
            "info" => Ok(Kind::Info),
            other => Err(format!("unknown notification kind: {other}")),
        }
    }
}
