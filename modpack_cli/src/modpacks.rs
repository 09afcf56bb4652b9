use clap::Args;
use colored::Colorize;
use inquire::Confirm;
use log::info;
use modpack_core::{view::Toolbar, StoreError};

use crate::{app::App, render};

/// Show every modpack as a card
#[derive(Args, Debug)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&mut self, app: &mut App) -> anyhow::Result<()> {
        app.refresh()
    }
}

/// Create a new, empty modpack
#[derive(Args, Debug)]
pub struct AddCommand {
    /// Name of the new modpack
    name: String,
}

impl AddCommand {
    pub fn run(&mut self, app: &mut App) -> anyhow::Result<()> {
        app.session.store().create(&self.name)?;
        info!("[{}] Added {}", "+".green(), self.name.green());
        app.refresh()
    }
}

/// Rename a modpack
#[derive(Args, Debug)]
pub struct RenameCommand {
    /// Current name
    old_name: String,

    /// New name
    new_name: String,
}

impl RenameCommand {
    pub fn run(&mut self, app: &mut App) -> anyhow::Result<()> {
        app.session
            .store()
            .rename(&self.old_name, &self.new_name)?;
        info!(
            "[{}] Renamed {} to {}",
            "*".yellow(),
            self.old_name.yellow(),
            self.new_name.yellow()
        );
        app.refresh()
    }
}

/// Delete a modpack and everything inside it
#[derive(Args, Debug)]
pub struct DeleteCommand {
    /// Name of the modpack to delete
    name: String,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

impl DeleteCommand {
    pub fn run(&mut self, app: &mut App) -> anyhow::Result<()> {
        let store = app.session.store();
        if !store.contains(&self.name) {
            return Err(StoreError::NotFound(self.name.clone()).into());
        }
        if !self.yes && !confirm_delete(&self.name)? {
            info!("Kept {}", self.name);
            return Ok(());
        }
        store.delete(&self.name)?;
        info!("[{}] Deleted {}", "x".red(), self.name.red());
        app.refresh()
    }
}

pub fn confirm_delete(name: &str) -> anyhow::Result<bool> {
    let confirmed = Confirm::new(&format!("Are you sure you want to delete '{}'?", name))
        .with_default(false)
        .with_help_message("The folder and everything inside it will be removed")
        .prompt()?;
    Ok(confirmed)
}

/// Show file count, size and modification time of a modpack
#[derive(Args, Debug)]
pub struct InfoCommand {
    /// Name of the modpack
    name: String,
}

impl InfoCommand {
    pub fn run(&mut self, app: &mut App) -> anyhow::Result<()> {
        let details = app.session.store().details(&self.name)?;
        println!("{}: {}", details.name.bold(), render::describe(&details));
        Ok(())
    }
}

/// Show the appearance and color theme in effect for this run
#[derive(Args, Debug)]
pub struct ThemeCommand {}

impl ThemeCommand {
    pub fn run(&mut self, app: &mut App) -> anyhow::Result<()> {
        let toolbar = Toolbar::from(&app.session);
        println!("{}", render::draw_toolbar(&toolbar));
        Ok(())
    }
}
