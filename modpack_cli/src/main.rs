use std::path::PathBuf;

use app::App;
use clap::{Parser, Subcommand};
use config::Overrides;
use modpack_core::{Appearance, ColorTheme};
use modpacks::{AddCommand, DeleteCommand, InfoCommand, ListCommand, RenameCommand, ThemeCommand};
use shell::ShellCommand;

mod app;
mod config;
mod modpacks;
mod render;
mod shell;

/// Organize modpack folders inside a storage folder
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Storage folder holding the modpacks
    #[arg(short = 'r', long, global = true)]
    root: Option<PathBuf>,

    /// Show file count and size on every card
    #[arg(short = 'd', long, global = true)]
    details: bool,

    /// Appearance mode: light, dark or system
    #[arg(long, global = true)]
    appearance: Option<Appearance>,

    /// Color theme: blue, green or dark-blue
    #[arg(long, global = true)]
    color: Option<ColorTheme>,

    #[command(subcommand)]
    commands: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(alias = "ls")]
    List(ListCommand),
    #[command(alias = "create")]
    Add(AddCommand),
    #[command(alias = "mv")]
    Rename(RenameCommand),
    #[command(alias = "rm")]
    Delete(DeleteCommand),
    Info(InfoCommand),
    Theme(ThemeCommand),
    Shell(ShellCommand),
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    pretty_env_logger::init();

    let args = Args::parse();

    let session = config::load(&Overrides {
        root: args.root,
        appearance: args.appearance,
        color_theme: args.color,
    })?;
    let mut app = App::new(session, args.details);

    match args.commands {
        None => ListCommand {}.run(&mut app),
        Some(Commands::List(mut list)) => list.run(&mut app),
        Some(Commands::Add(mut add)) => add.run(&mut app),
        Some(Commands::Rename(mut rename)) => rename.run(&mut app),
        Some(Commands::Delete(mut delete)) => delete.run(&mut app),
        Some(Commands::Info(mut info)) => info.run(&mut app),
        Some(Commands::Theme(mut theme)) => theme.run(&mut app),
        Some(Commands::Shell(mut shell)) => shell.run(&mut app),
    }
}
