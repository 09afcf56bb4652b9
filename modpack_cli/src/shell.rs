use std::fmt;

use clap::Args;
use colored::Colorize;
use inquire::{InquireError, Select, Text};
use log::{error, info};
use modpack_core::{Appearance, ColorTheme};

use crate::{app::App, config::expand_home, modpacks::confirm_delete};

/// Manage modpacks interactively until you quit
#[derive(Args, Debug)]
pub struct ShellCommand {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Rename,
    Delete,
    ToggleDetails,
    ChangeFolder,
    Appearance,
    ColorTheme,
    Quit,
}

impl Action {
    const ALL: [Action; 8] = [
        Self::Add,
        Self::Rename,
        Self::Delete,
        Self::ToggleDetails,
        Self::ChangeFolder,
        Self::Appearance,
        Self::ColorTheme,
        Self::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Self::Add => "Add modpack",
            Self::Rename => "Rename modpack",
            Self::Delete => "Delete modpack",
            Self::ToggleDetails => "Toggle card details",
            Self::ChangeFolder => "Change storage folder",
            Self::Appearance => "Appearance mode",
            Self::ColorTheme => "Color theme",
            Self::Quit => "Quit",
        };
        write!(fmt, "{}", label)
    }
}

/// Outcome of a prompt the user may back out of
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Done,
    Back,
    Quit,
}

impl ShellCommand {
    pub fn run(&mut self, app: &mut App) -> anyhow::Result<()> {
        info!("Storage folder: {}", app.session.root().display());

        loop {
            if let Err(err) = app.refresh() {
                error!("{} {}", "Error:".bright_red(), err);
            }

            let action = match Select::new("What do you want to do?", Action::ALL.to_vec())
                .with_page_size(Action::ALL.len())
                .prompt()
            {
                Ok(action) => action,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(err) => return Err(err.into()),
            };

            match self.perform(app, action) {
                Ok(Step::Quit) => break,
                Ok(Step::Done | Step::Back) => {}
                // Failed actions are reported and the session keeps going
                Err(err) => match err.downcast_ref::<InquireError>() {
                    Some(InquireError::OperationInterrupted) => break,
                    Some(InquireError::NotTTY) => return Err(err),
                    _ => error!("{} {}", "Error:".bright_red(), err),
                },
            }
        }

        info!("Bye!");
        Ok(())
    }

    fn perform(&mut self, app: &mut App, action: Action) -> anyhow::Result<Step> {
        match action {
            Action::Add => {
                let Some(name) = optional(Text::new("Enter new modpack name:").prompt())? else {
                    return Ok(Step::Back);
                };
                return add_modpack(app, &name);
            }
            Action::Rename => {
                let Some(old_name) = pick_modpack(app, "Rename which modpack?")? else {
                    return Ok(Step::Back);
                };
                let prompt = format!("Rename '{}' to:", old_name);
                let Some(new_name) = optional(
                    Text::new(&prompt)
                        .with_initial_value(&old_name)
                        .prompt(),
                )?
                else {
                    return Ok(Step::Back);
                };
                return rename_modpack(app, &old_name, &new_name);
            }
            Action::Delete => {
                let Some(name) = pick_modpack(app, "Delete which modpack?")? else {
                    return Ok(Step::Back);
                };
                if !confirm_delete(&name)? {
                    return Ok(Step::Back);
                }
                return delete_modpack(app, &name);
            }
            Action::ToggleDetails => {
                app.show_details = !app.show_details;
            }
            Action::ChangeFolder => {
                let current = app.session.root().display().to_string();
                let Some(folder) = optional(
                    Text::new("Select modpacks storage folder:")
                        .with_initial_value(&current)
                        .prompt(),
                )?
                else {
                    return Ok(Step::Back);
                };
                return Ok(change_folder(app, &folder));
            }
            Action::Appearance => {
                let current = Appearance::ALL
                    .iter()
                    .position(|x| *x == app.session.appearance)
                    .unwrap_or(0);
                let Some(appearance) = optional(
                    Select::new("Appearance mode:", Appearance::ALL.to_vec())
                        .with_starting_cursor(current)
                        .prompt(),
                )?
                else {
                    return Ok(Step::Back);
                };
                app.session.set_appearance(appearance);
            }
            Action::ColorTheme => {
                let current = ColorTheme::ALL
                    .iter()
                    .position(|x| *x == app.session.color_theme)
                    .unwrap_or(0);
                let Some(color_theme) = optional(
                    Select::new("Color theme:", ColorTheme::ALL.to_vec())
                        .with_starting_cursor(current)
                        .prompt(),
                )?
                else {
                    return Ok(Step::Back);
                };
                app.session.set_color_theme(color_theme);
            }
            Action::Quit => return Ok(Step::Quit),
        }
        Ok(Step::Done)
    }
}

fn add_modpack(app: &mut App, name: &str) -> anyhow::Result<Step> {
    if name.is_empty() {
        return Ok(Step::Back);
    }
    app.session.store().create(name)?;
    info!("[{}] Added {}", "+".green(), name.green());
    Ok(Step::Done)
}

fn rename_modpack(app: &mut App, old_name: &str, new_name: &str) -> anyhow::Result<Step> {
    if new_name.is_empty() || new_name == old_name {
        return Ok(Step::Back);
    }
    app.session.store().rename(old_name, new_name)?;
    info!(
        "[{}] Renamed {} to {}",
        "*".yellow(),
        old_name.yellow(),
        new_name.yellow()
    );
    Ok(Step::Done)
}

fn delete_modpack(app: &mut App, name: &str) -> anyhow::Result<Step> {
    app.session.store().delete(name)?;
    info!("[{}] Deleted {}", "x".red(), name.red());
    Ok(Step::Done)
}

fn change_folder(app: &mut App, folder: &str) -> Step {
    let folder = folder.trim();
    if folder.is_empty() {
        return Step::Back;
    }
    app.session.set_root(expand_home(folder));
    Step::Done
}

/// Turns an escaped prompt into `None`
fn optional<T>(answer: Result<T, InquireError>) -> Result<Option<T>, InquireError> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(err) => Err(err),
    }
}

fn pick_modpack(app: &App, message: &str) -> anyhow::Result<Option<String>> {
    let names = app.session.store().list()?;
    if names.is_empty() {
        info!("No modpacks in {}", app.session.root().display());
        return Ok(None);
    }
    Ok(optional(Select::new(message, names).prompt())?)
}

#[cfg(test)]
mod tests {
    use modpack_core::{Session, StoreError};

    use super::*;

    fn app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Session::new(dir.path().join("packs")), false);
        (dir, app)
    }

    #[test]
    fn add_then_rename_then_delete() {
        let (_dir, mut app) = app();
        assert_eq!(add_modpack(&mut app, "Base").unwrap(), Step::Done);
        assert_eq!(rename_modpack(&mut app, "Base", "Core").unwrap(), Step::Done);
        assert_eq!(app.session.store().list().unwrap(), vec!["Core"]);
        assert_eq!(delete_modpack(&mut app, "Core").unwrap(), Step::Done);
        assert!(app.session.store().list().unwrap().is_empty());
    }

    #[test]
    fn empty_answers_go_back() {
        let (_dir, mut app) = app();
        assert_eq!(add_modpack(&mut app, "").unwrap(), Step::Back);
        assert_eq!(rename_modpack(&mut app, "Base", "").unwrap(), Step::Back);
        assert_eq!(rename_modpack(&mut app, "Base", "Base").unwrap(), Step::Back);
        assert_eq!(change_folder(&mut app, "   "), Step::Back);
        assert!(!app.session.root().exists());
    }

    #[test]
    fn store_errors_reach_the_loop() {
        let (_dir, mut app) = app();
        add_modpack(&mut app, "Base").unwrap();
        let err = add_modpack(&mut app, "Base").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::AlreadyExists(_))
        ));
        let err = delete_modpack(&mut app, "Missing").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::NotFound(_))
        ));
        assert_eq!(app.session.store().list().unwrap(), vec!["Base"]);
    }

    #[test]
    fn change_folder_switches_store() {
        let (dir, mut app) = app();
        add_modpack(&mut app, "Base").unwrap();

        let other = dir.path().join("other");
        let step = change_folder(&mut app, &format!("  {}  ", other.display()));
        assert_eq!(step, Step::Done);
        assert_eq!(app.session.root(), other.as_path());
        assert!(app.session.store().list().unwrap().is_empty());
    }
}
