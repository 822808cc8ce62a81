use crate::errors::ProjectError;
use crate::options::Overrides;
use std::path::PathBuf;

pub mod config;
pub mod errors;
pub mod launcher;
pub mod logger;
pub mod options;
pub mod project;
pub mod template;

/// Runs the full pipeline: load config, resolve options, write the project
/// file, then optionally open it in the editor. Strictly linear, a fatal
/// error at any stage aborts the rest.
pub fn run(config_path: Option<PathBuf>, overrides: Overrides) -> Result<(), ProjectError> {
    let config_path = config_path.unwrap_or_else(config::default_config_path);
    let config = config::load_config(&config_path)?;

    let options = options::resolve(&config, &overrides);
    project::write_project(&options)?;

    if options.open {
        launcher::launch(&options, &config)?;
    }

    Ok(())
}
