use crate::errors::ProjectError;
use crate::options::Options;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The generated document: always exactly one folder entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub folders: Vec<ProjectFolder>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectFolder {
    pub follow_symlinks: bool,
    pub path: String,
}

impl ProjectDocument {
    pub fn for_folder(path: &str) -> Self {
        ProjectDocument {
            folders: vec![ProjectFolder {
                follow_symlinks: true,
                path: path.to_owned(),
            }],
        }
    }
}

/// Serializes the resolved options into the project file.
///
/// Refuses to touch an existing file unless overwrite was requested; the
/// check runs before any write. A source folder that does not exist only
/// warns, generation proceeds.
pub fn write_project(options: &Options) -> Result<(), ProjectError> {
    info!("Creating new Sublime project: {}", options.name);

    let dir_path = options.dir_path.as_deref().unwrap_or_default();
    if !Path::new(dir_path).is_dir() {
        warn!("Looks like {dir_path} doesn't exist...proceeding anyway");
    }
    info!("Adding folder {dir_path}");

    let project_path = &options.project_path;
    if project_path.exists() {
        if !options.overwrite {
            return Err(ProjectError::ProjectExists {
                path: project_path.clone(),
            });
        }
        info!("{} exists; overwriting", project_path.display());
    } else {
        info!("Writing to {}", project_path.display());
    }

    let document = ProjectDocument::for_folder(dir_path);
    let json_string = serde_json::to_string_pretty(&document)?;

    let mut file = File::create(project_path)?;
    write!(file, "{}", json_string)?;

    validate_project_file(project_path)?;
    Ok(())
}

/// Re-parses the freshly written file. A failure here points at a
/// serialization bug, so it is reported but the file stays on disk.
fn validate_project_file(path: &Path) -> Result<(), ProjectError> {
    info!("Checking new project file...");

    let contents = std::fs::read_to_string(path)?;
    match serde_json::from_str::<ProjectDocument>(&contents) {
        Ok(_) => info!("Project file looks okay!"),
        Err(err) => error!("The project file has some bad JSON: {err}"),
    }

    Ok(())
}
