use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::{error::StoreError, models::modpacks::ModpackDetails, name::NamePolicy};

/// Modpacks stored as the immediate subdirectories of a root directory.
///
/// Every operation goes straight to the filesystem. There is no cached
/// listing, so the store always reflects what is on disk.
#[derive(Debug, Clone)]
pub struct ModpackStore {
    root: PathBuf,
    policy: NamePolicy,
}

impl ModpackStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_policy(root, NamePolicy::default())
    }

    pub fn with_policy(root: impl Into<PathBuf>, policy: NamePolicy) -> Self {
        ModpackStore {
            root: root.into(),
            policy,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> NamePolicy {
        self.policy
    }

    /// Names of all modpacks, sorted. Creates the root directory if it is missing.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        self.ensure_root()?;

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(StoreError::io(&self.root))? {
            let entry = entry.map_err(StoreError::io(&self.root))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => warn!("Skipping non UTF-8 directory name: {}", name.to_string_lossy()),
            }
        }
        names.sort();

        debug!("Found {} modpacks in {}", names.len(), self.root.display());
        Ok(names)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modpack_path(name).is_ok()
    }

    pub fn create(&self, name: &str) -> Result<(), StoreError> {
        self.policy.validate(name)?;
        let path = self.root.join(name);
        if entry_exists(&path)? {
            return Err(StoreError::AlreadyExists(name.to_string()));
        }

        self.ensure_root()?;
        fs::create_dir(&path).map_err(|source| match source.kind() {
            ErrorKind::AlreadyExists => StoreError::AlreadyExists(name.to_string()),
            _ => StoreError::Io {
                path: path.clone(),
                source,
            },
        })?;

        info!("Created modpack {}", name);
        Ok(())
    }

    pub fn rename(&self, old_name: &str, new_name: &str) -> Result<(), StoreError> {
        if old_name == new_name {
            return Ok(());
        }
        let old_path = self.modpack_path(old_name)?;
        self.policy.validate(new_name)?;
        let new_path = self.root.join(new_name);
        if entry_exists(&new_path)? {
            return Err(StoreError::AlreadyExists(new_name.to_string()));
        }

        fs::rename(&old_path, &new_path).map_err(StoreError::io(&old_path))?;

        info!("Renamed modpack {} to {}", old_name, new_name);
        Ok(())
    }

    /// Removes the modpack directory and everything beneath it.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.modpack_path(name)?;
        fs::remove_dir_all(&path).map_err(StoreError::io(&path))?;

        info!("Deleted modpack {}", name);
        Ok(())
    }

    pub fn details(&self, name: &str) -> Result<ModpackDetails, StoreError> {
        let path = self.modpack_path(name)?;
        ModpackDetails::scan(name, &path).map_err(|err| {
            let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| path.clone());
            StoreError::Io {
                path,
                source: err.into(),
            }
        })
    }

    fn modpack_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        // Existing directories may predate the policy, so only block names leaving the root
        if NamePolicy::Permissive.validate(name).is_err() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        let path = self.root.join(name);
        if !path.is_dir() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        Ok(path)
    }

    fn ensure_root(&self) -> Result<(), StoreError> {
        if !self.root.is_dir() {
            debug!("Creating storage folder {}", self.root.display());
        }
        fs::create_dir_all(&self.root).map_err(StoreError::io(&self.root))
    }
}

/// Whether anything (file, directory or dangling link) occupies `path`
fn entry_exists(path: &Path) -> Result<bool, StoreError> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
