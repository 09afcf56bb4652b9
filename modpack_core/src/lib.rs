use serde::{Deserialize, Serialize};

pub mod error;
pub mod models;
pub mod name;
pub mod session;
pub mod store;
pub mod view;

pub use error::{ParseSettingError, StoreError};
pub use name::NamePolicy;
pub use session::Session;
pub use store::ModpackStore;

pub trait StrConversion: Sized {
    fn try_from_str(value: &str) -> Option<Self>;
    fn as_str(&self) -> &'static str;
}

/// Light/dark mode of the front-end
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
    #[default]
    System,
}

impl Appearance {
    pub const ALL: [Appearance; 3] = [Self::Light, Self::Dark, Self::System];
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}
impl StrConversion for Appearance {
    fn try_from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}
impl std::str::FromStr for Appearance {
    type Err = ParseSettingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(value).ok_or_else(|| ParseSettingError::new("appearance", value))
    }
}

/// Accent color theme
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    #[default]
    Blue,
    Green,
    DarkBlue,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 3] = [Self::Blue, Self::Green, Self::DarkBlue];
}

impl std::fmt::Display for ColorTheme {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}
impl StrConversion for ColorTheme {
    fn try_from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "blue" => Some(Self::Blue),
            "green" => Some(Self::Green),
            "dark-blue" | "dark_blue" | "darkblue" => Some(Self::DarkBlue),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::DarkBlue => "dark-blue",
        }
    }
}
impl std::str::FromStr for ColorTheme {
    type Err = ParseSettingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(value).ok_or_else(|| ParseSettingError::new("color theme", value))
    }
}
