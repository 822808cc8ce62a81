use clap::Parser;
use log::warn;
use std::path::PathBuf;
use std::process;

use subproj::logger::init_logger;
use subproj::options::Overrides;

#[derive(Parser, Debug)]
#[command(name = "subproj")]
#[command(version, about = "Generates Sublime Text project files", long_about = None)]
struct Cli {
    /// Name of the project
    name: String,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run verbosely
    #[arg(short, long)]
    verbose: bool,

    /// Name of a favorite path setting
    #[arg(short, long, value_name = "FAVORITE")]
    favorite: Option<String>,

    /// Path of the folder to include in project
    #[arg(short, long, value_name = "PATH")]
    path: Option<String>,

    /// File to save project as
    #[arg(short = 'j', long = "project-path", value_name = "PATH")]
    project_path: Option<PathBuf>,

    /// Overwrite existing projects
    #[arg(short, long)]
    overwrite: bool,

    /// Open the project upon creation
    #[arg(short = 'n', long)]
    open: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // Historical flag: the output path always derives from project_dir.
    if cli.project_path.is_some() {
        warn!("--project-path is accepted for compatibility but has no effect");
    }

    let overrides = Overrides {
        name: cli.name,
        path: cli.path,
        favorite: cli.favorite,
        overwrite: cli.overwrite,
        open: cli.open,
        verbose: cli.verbose,
    };

    if let Err(e) = subproj::run(cli.config, overrides) {
        eprintln!("{e}");
        process::exit(1);
    }
}
