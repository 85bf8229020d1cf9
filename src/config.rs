use crate::error::{GridError, Result};
use directories::UserDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const PLACEHOLDER_EMAIL: &str = "example@email.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub folder: PathBuf,
    pub email: String,
}

impl Config {
    /// Resolve the scan folder and author email.
    ///
    /// Precedence per value: CLI flag, then the `key=value` config file
    /// (loaded into the environment), then a default. On first run the
    /// config file is bootstrapped with `<home>/Repos` and a placeholder
    /// email; failing to write or load it is fatal.
    pub fn load(folder: Option<PathBuf>, email: Option<String>) -> Result<Self> {
        let user_dirs = UserDirs::new()
            .ok_or_else(|| GridError::Config("could not locate the home directory".into()))?;
        let home = user_dirs.home_dir();

        let path = config_file_path(home);
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, default_config_contents(home))?;
        }

        dotenvy::from_path(&path).map_err(|err| {
            GridError::Config(format!("failed to load {}: {err}", path.display()))
        })?;

        let folder = folder
            .or_else(|| env::var("folder").ok().map(PathBuf::from))
            .unwrap_or_else(|| default_folder(home));

        let email = email
            .or_else(|| env::var("email").ok())
            .or_else(global_git_email)
            .unwrap_or_else(|| PLACEHOLDER_EMAIL.to_string());

        Ok(Self { folder, email })
    }
}

fn config_file_path(home: &Path) -> PathBuf {
    home.join(".config").join("commitgrid").join("config")
}

fn default_folder(home: &Path) -> PathBuf {
    home.join("Repos")
}

fn default_config_contents(home: &Path) -> String {
    format!(
        "folder={}\nemail={}\n",
        default_folder(home).display(),
        PLACEHOLDER_EMAIL
    )
}

fn global_git_email() -> Option<String> {
    gix::config::File::from_globals()
        .ok()
        .and_then(|config| config.string("user.email").map(|s| s.to_string()))
}
