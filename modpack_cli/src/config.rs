use std::{
    env::var,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::anyhow;
use log::debug;
use modpack_core::{Appearance, ColorTheme, NamePolicy, ParseSettingError, Session};
use serde::{Deserialize, Serialize};

pub const CONFIG_PATH_VAR: &str = "MODPACKS_CONFIG_PATH";
pub const DIR_VAR: &str = "MODPACKS_DIR";
pub const APPEARANCE_VAR: &str = "MODPACKS_APPEARANCE";
pub const COLOR_THEME_VAR: &str = "MODPACKS_COLOR_THEME";
pub const NAME_POLICY_VAR: &str = "MODPACKS_NAME_POLICY";

/// Contents of `config.toml`. Only read, never written.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq)]
pub struct ConfigFile {
    pub modpacks_dir: Option<String>,
    pub appearance: Option<Appearance>,
    pub color_theme: Option<ColorTheme>,
    pub name_policy: Option<NamePolicy>,
}

/// Values given on the command line, highest priority
#[derive(Default, Debug, Clone)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub appearance: Option<Appearance>,
    pub color_theme: Option<ColorTheme>,
}

pub fn config_path() -> PathBuf {
    var(CONFIG_PATH_VAR).map(PathBuf::from).unwrap_or_else(|_| {
        dirs::config_dir()
            .unwrap_or_default()
            .join("modpack-manager")
            .join("config.toml")
    })
}

/// Reads the config file. A missing file is `None`, a malformed one is an error.
pub fn load_config_file(path: &Path) -> anyhow::Result<Option<ConfigFile>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("No config file at {}", path.display());
            return Ok(None);
        }
        Err(err) => return Err(anyhow!("Failed to read config {}: {}", path.display(), err)),
    };
    let config = toml::from_str::<ConfigFile>(&text)
        .map_err(|err| anyhow!("Invalid config {}: {}", path.display(), err))?;
    debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

/// Builds the session: command line, then environment, then config file, then defaults.
pub fn resolve<F>(
    overrides: &Overrides,
    config_file: Option<&ConfigFile>,
    env: F,
) -> anyhow::Result<Session>
where
    F: Fn(&str) -> Option<String>,
{
    let root = overrides
        .root
        .clone()
        .or_else(|| env(DIR_VAR).map(PathBuf::from))
        .or_else(|| {
            config_file
                .and_then(|x| x.modpacks_dir.clone())
                .map(|dir| expand_home(&dir))
        })
        .unwrap_or_else(Session::default_root);

    let appearance = setting(
        overrides.appearance,
        env(APPEARANCE_VAR),
        config_file.and_then(|x| x.appearance),
    )?;
    let color_theme = setting(
        overrides.color_theme,
        env(COLOR_THEME_VAR),
        config_file.and_then(|x| x.color_theme),
    )?;
    let name_policy = setting(
        None,
        env(NAME_POLICY_VAR),
        config_file.and_then(|x| x.name_policy),
    )?;

    let mut session = Session::new(root);
    session.set_appearance(appearance);
    session.set_color_theme(color_theme);
    session.name_policy = name_policy;
    Ok(session)
}

/// First of command line, environment (parsed leniently) and config file, else the default
fn setting<T>(
    cli: Option<T>,
    env_value: Option<String>,
    file: Option<T>,
) -> Result<T, ParseSettingError>
where
    T: FromStr<Err = ParseSettingError> + Default,
{
    if let Some(value) = cli {
        return Ok(value);
    }
    if let Some(value) = env_value {
        return value.parse();
    }
    Ok(file.unwrap_or_default())
}

/// Loads the config file and environment for this process
pub fn load(overrides: &Overrides) -> anyhow::Result<Session> {
    let config_file = load_config_file(&config_path())?;
    resolve(overrides, config_file.as_ref(), |key| var(key).ok())
}

/// Expands a leading `~` the way a shell would
pub fn expand_home(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') || rest.starts_with('\\') => {
            home.join(&rest[1..])
        }
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn file() -> ConfigFile {
        ConfigFile {
            modpacks_dir: Some("/from/file".to_string()),
            appearance: Some(Appearance::Light),
            color_theme: Some(ColorTheme::Green),
            name_policy: Some(NamePolicy::Permissive),
        }
    }

    #[test]
    fn defaults_without_any_source() {
        let session = resolve(&Overrides::default(), None, env_of(&[])).unwrap();
        assert_eq!(session.root, Session::default_root());
        assert_eq!(session.appearance, Appearance::System);
        assert_eq!(session.color_theme, ColorTheme::Blue);
        assert_eq!(session.name_policy, NamePolicy::Portable);
    }

    #[test]
    fn config_file_over_defaults() {
        let file = file();
        let session = resolve(&Overrides::default(), Some(&file), env_of(&[])).unwrap();
        assert_eq!(session.root, PathBuf::from("/from/file"));
        assert_eq!(session.appearance, Appearance::Light);
        assert_eq!(session.color_theme, ColorTheme::Green);
        assert_eq!(session.name_policy, NamePolicy::Permissive);
    }

    #[test]
    fn env_over_config_file() {
        let file = file();
        let env = env_of(&[
            (DIR_VAR, "/from/env"),
            (APPEARANCE_VAR, "dark"),
            (COLOR_THEME_VAR, "dark-blue"),
            (NAME_POLICY_VAR, "portable"),
        ]);
        let session = resolve(&Overrides::default(), Some(&file), env).unwrap();
        assert_eq!(session.root, PathBuf::from("/from/env"));
        assert_eq!(session.appearance, Appearance::Dark);
        assert_eq!(session.color_theme, ColorTheme::DarkBlue);
        assert_eq!(session.name_policy, NamePolicy::Portable);
    }

    #[test]
    fn command_line_over_env() {
        let overrides = Overrides {
            root: Some(PathBuf::from("/from/cli")),
            appearance: Some(Appearance::System),
            color_theme: Some(ColorTheme::Blue),
        };
        let env = env_of(&[(DIR_VAR, "/from/env"), (APPEARANCE_VAR, "dark")]);
        let session = resolve(&overrides, None, env).unwrap();
        assert_eq!(session.root, PathBuf::from("/from/cli"));
        assert_eq!(session.appearance, Appearance::System);
        assert_eq!(session.color_theme, ColorTheme::Blue);
    }

    #[test]
    fn unknown_setting_is_an_error() {
        let env = env_of(&[(APPEARANCE_VAR, "sepia")]);
        let err = resolve(&Overrides::default(), None, env).unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn missing_config_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config_file(&dir.path().join("config.toml"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn config_file_parses_partial_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "modpacks_dir = \"/srv/packs\"\n").unwrap();
        let config = load_config_file(&path).unwrap().unwrap();
        assert_eq!(config.modpacks_dir.as_deref(), Some("/srv/packs"));
        assert_eq!(config.appearance, None);
    }

    #[test]
    fn config_file_parses_typed_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "appearance = \"dark\"\ncolor_theme = \"dark-blue\"\nname_policy = \"permissive\"\n",
        )
        .unwrap();
        let config = load_config_file(&path).unwrap().unwrap();
        assert_eq!(config.appearance, Some(Appearance::Dark));
        assert_eq!(config.color_theme, Some(ColorTheme::DarkBlue));
        assert_eq!(config.name_policy, Some(NamePolicy::Permissive));
    }

    #[test]
    fn unknown_value_in_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "appearance = \"sepia\"\n").unwrap();
        let err = load_config_file(&path).unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "modpacks_dir = [").unwrap();
        assert!(load_config_file(&path).is_err());
    }

    #[test]
    fn expand_home_only_touches_leading_tilde() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_home("dir~name"), PathBuf::from("dir~name"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~"), home);
            assert_eq!(expand_home("~/Packs"), home.join("Packs"));
        }
    }
}
