use crate::config::Config;
use crate::template::substitute;
use std::path::PathBuf;

/// Generated project files use the Sublime Text extension.
pub const PROJECT_EXT: &str = ".sublime-project";

/// Raw values collected from the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub name: String,
    pub path: Option<String>,
    pub favorite: Option<String>,
    pub overwrite: bool,
    pub open: bool,
    pub verbose: bool,
}

/// The resolved option set consumed by the writer and the launcher.
/// Built once per invocation, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Options {
    pub name: String,
    pub dir_path: Option<String>,
    pub project_path: PathBuf,
    pub overwrite: bool,
    pub open: bool,
    pub verbose: bool,
}

/// Merges config defaults, the selected favorite and explicit overrides.
///
/// `dir_path` sources are applied in a fixed order regardless of flag order
/// on the command line: config baseline, then favorite, then explicit path.
/// Each later source overrides the previous one outright, and a missing
/// source leaves the previous value in place. An unknown favorite name is
/// not an error.
pub fn resolve(config: &Config, overrides: &Overrides) -> Options {
    let name = overrides.name.as_str();

    let mut dir_path = substitute(config.dir_path.as_deref(), name);

    if let Some(favorite) = &overrides.favorite {
        if let Some(template) = config.dir_path_favorites.get(favorite) {
            dir_path = substitute(Some(template), name);
        }
    }

    if let Some(path) = &overrides.path {
        dir_path = substitute(Some(path), name);
    }

    let project_path = config.project_dir.join(format!("{name}{PROJECT_EXT}"));

    Options {
        name: overrides.name.clone(),
        dir_path,
        project_path,
        overwrite: overrides.overwrite,
        open: overrides.open,
        verbose: overrides.verbose,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_config() -> Config {
        Config {
            project_dir: PathBuf::from("/tmp/projects"),
            dir_path: Some("/src/{NAME}".to_owned()),
            binary: None,
            dir_path_favorites: HashMap::from([("work".to_owned(), "/w/{NAME}".to_owned())]),
        }
    }

    fn overrides_for(name: &str) -> Overrides {
        Overrides {
            name: name.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn baseline_comes_from_config() {
        let options = resolve(&test_config(), &overrides_for("demo"));
        assert_eq!(Some("/src/demo".to_owned()), options.dir_path);
    }

    #[test]
    fn favorite_overrides_baseline() {
        let mut overrides = overrides_for("demo");
        overrides.favorite = Some("work".to_owned());

        let options = resolve(&test_config(), &overrides);
        assert_eq!(Some("/w/demo".to_owned()), options.dir_path);
    }

    #[test]
    fn explicit_path_overrides_favorite_and_baseline() {
        let mut overrides = overrides_for("demo");
        overrides.favorite = Some("work".to_owned());
        overrides.path = Some("/explicit/{NAME}".to_owned());

        let options = resolve(&test_config(), &overrides);
        assert_eq!(Some("/explicit/demo".to_owned()), options.dir_path);
    }

    #[test]
    fn unknown_favorite_keeps_previous_value() {
        let mut overrides = overrides_for("demo");
        overrides.favorite = Some("nope".to_owned());

        let options = resolve(&test_config(), &overrides);
        assert_eq!(Some("/src/demo".to_owned()), options.dir_path);
    }

    #[test]
    fn missing_sources_resolve_to_absent_dir_path() {
        let mut config = test_config();
        config.dir_path = None;

        let options = resolve(&config, &overrides_for("demo"));
        assert_eq!(None, options.dir_path);
    }

    #[test]
    fn project_path_is_name_under_project_dir() {
        let options = resolve(&test_config(), &overrides_for("demo"));
        assert_eq!(
            PathBuf::from("/tmp/projects/demo.sublime-project"),
            options.project_path
        );
    }

    #[test]
    fn flags_default_to_false() {
        let options = resolve(&test_config(), &overrides_for("demo"));
        assert!(!options.overwrite);
        assert!(!options.open);
        assert!(!options.verbose);
    }

    #[test]
    fn flags_carry_through() {
        let mut overrides = overrides_for("demo");
        overrides.overwrite = true;
        overrides.open = true;
        overrides.verbose = true;

        let options = resolve(&test_config(), &overrides);
        assert!(options.overwrite);
        assert!(options.open);
        assert!(options.verbose);
    }
}
