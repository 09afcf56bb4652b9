//! Rules for what counts as an acceptable modpack name.
//!
//! The store checks names before touching the filesystem so that the same
//! name is accepted or rejected regardless of the host platform.

use serde::{Deserialize, Serialize};

use crate::{error::StoreError, ParseSettingError, StrConversion};

pub const MAX_NAME_BYTES: usize = 255;

const FORBIDDEN_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Names that are valid directory names on every common platform
    #[default]
    Portable,
    /// Only rejects names that would point outside the storage folder
    Permissive,
}

impl NamePolicy {
    pub fn validate(&self, name: &str) -> Result<(), StoreError> {
        let invalid = |reason| StoreError::InvalidName {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("name is empty"));
        }
        if name == "." || name == ".." {
            return Err(invalid("name refers to a special directory"));
        }
        if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
            return Err(invalid("name contains a path separator"));
        }
        if *self == NamePolicy::Permissive {
            return Ok(());
        }

        if name.trim().is_empty() {
            return Err(invalid("name is blank"));
        }
        if name.len() > MAX_NAME_BYTES {
            return Err(invalid("name is longer than 255 bytes"));
        }
        if name.chars().any(|c| FORBIDDEN_CHARS.contains(&c)) {
            return Err(invalid("name contains a forbidden character"));
        }
        if name.chars().any(|c| c.is_ascii_control()) {
            return Err(invalid("name contains a control character"));
        }
        if name.ends_with('.') || name.ends_with(' ') {
            return Err(invalid("name ends with a dot or space"));
        }
        let stem = name.split('.').next().unwrap_or(name);
        if RESERVED_NAMES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(stem.trim_end()))
        {
            return Err(invalid("name is reserved on Windows"));
        }
        Ok(())
    }
}

impl std::fmt::Display for NamePolicy {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}
impl StrConversion for NamePolicy {
    fn try_from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "portable" => Some(Self::Portable),
            "permissive" => Some(Self::Permissive),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Portable => "portable",
            Self::Permissive => "permissive",
        }
    }
}
impl std::str::FromStr for NamePolicy {
    type Err = ParseSettingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(value).ok_or_else(|| ParseSettingError::new("name policy", value))
    }
}
