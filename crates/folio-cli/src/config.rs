//! Configuration discovery for the CLI
//!
//! A run uses at most one configuration file. An explicit `--config` path
//! wins; otherwise `folio/config.toml` in the working directory, then the
//! platform config directory. Without any of them the defaults apply.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};

use folio::{FolioError, config::AppConfig};

const LOCAL_CONFIG: &str = "folio/config.toml";

/// Where a configuration file was found.
#[derive(Debug, PartialEq, Eq)]
enum ConfigSource {
    Explicit(PathBuf),
    Local(PathBuf),
    System(PathBuf),
}

impl ConfigSource {
    fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Local(path) | Self::System(path) => path,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Explicit(_) => "explicit",
            Self::Local(_) => "local",
            Self::System(_) => "system",
        }
    }
}

/// Picks the configuration file for this run, if any.
///
/// An explicit path is returned even when it does not exist, so that the
/// caller reports it instead of silently using the defaults.
fn discover(explicit: Option<&Path>) -> Option<ConfigSource> {
    if let Some(path) = explicit {
        return Some(ConfigSource::Explicit(path.to_path_buf()));
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return Some(ConfigSource::Local(local));
    }

    let Some(dirs) = ProjectDirs::from("com", "folio", "folio") else {
        debug!("Could not determine platform-specific config directory");
        return None;
    };
    let system = dirs.config_dir().join("config.toml");
    if system.is_file() {
        return Some(ConfigSource::System(system));
    }
    debug!(path:? = system; "System configuration file not found");
    None
}

/// Loads the application configuration for this run.
///
/// # Errors
///
/// Returns `FolioError::NotFound` when an explicit path does not exist and
/// `FolioError::Config` when the chosen file is not valid configuration.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, FolioError> {
    let explicit_path: Option<&Path> = explicit_path.as_ref().map(AsRef::as_ref);
    let Some(source) = discover(explicit_path) else {
        debug!("No configuration file found, using default configuration");
        return Ok(AppConfig::default());
    };

    info!(path:? = source.path(), source = source.label(); "Loading configuration");
    parse_config_file(source.path())
}

fn parse_config_file(path: &Path) -> Result<AppConfig, FolioError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => FolioError::NotFound(path.to_path_buf()),
        _ => FolioError::Io(err),
    })?;

    let parsed = toml::from_str::<AppConfig>(&content);
    parsed.map_err(|err| FolioError::new_config_error(path, &err, content))
}
