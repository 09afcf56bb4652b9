use std::path::{Path, PathBuf};

use log::info;

use crate::{name::NamePolicy, store::ModpackStore, Appearance, ColorTheme};

pub const DEFAULT_FOLDER_NAME: &str = "Sims4Modpacks";

/// Settings of one run of the manager. Never written back to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub root: PathBuf,
    pub appearance: Appearance,
    pub color_theme: ColorTheme,
    pub name_policy: NamePolicy,
}

impl Session {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Session {
            root: root.into(),
            appearance: Appearance::default(),
            color_theme: ColorTheme::default(),
            name_policy: NamePolicy::default(),
        }
    }

    /// `~/Sims4Modpacks`, or a relative `Sims4Modpacks` when the home directory is unknown
    pub fn default_root() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_FOLDER_NAME))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FOLDER_NAME))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> ModpackStore {
        ModpackStore::with_policy(&self.root, self.name_policy)
    }

    pub fn set_root(&mut self, root: impl Into<PathBuf>) {
        self.root = root.into();
        info!("Storage folder set to {}", self.root.display());
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    pub fn set_color_theme(&mut self, color_theme: ColorTheme) {
        self.color_theme = color_theme;
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Session::default_root())
    }
}
