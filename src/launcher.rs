use crate::config::Config;
use crate::errors::ProjectError;
use crate::options::Options;
use log::info;
use std::path::Path;
use std::process::Command;

const DEFAULT_BINARY: &str = "/Applications/Sublime Text.app/Contents/SharedSupport/bin/subl";

/// Opens the generated project file in Sublime Text.
///
/// The binary comes from the config, falling back to the standard macOS
/// install location. The child process is spawned with an argument array
/// and not waited on; a launch failure never touches the written file.
pub fn launch(options: &Options, config: &Config) -> Result<(), ProjectError> {
    let binary = config
        .binary
        .as_deref()
        .unwrap_or_else(|| Path::new(DEFAULT_BINARY));

    if !binary.exists() {
        return Err(ProjectError::BinaryNotFound {
            path: binary.to_path_buf(),
        });
    }

    info!("Opening project with {}", binary.display());

    Command::new(binary)
        .arg("--project")
        .arg(&options.project_path)
        .spawn()?;

    Ok(())
}
