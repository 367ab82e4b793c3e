//! Environment file loading

use std::path::PathBuf;

use tracing::debug;

/// Directory holding user-level configuration (~/.library)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".library"))
}

/// Load environment variables from .env files.
///
/// Priority order (highest to lowest):
/// 1. Variables already set in the environment
/// 2. Current directory .env
/// 3. ~/.library/.env
///
/// Returns the files that were loaded. dotenvy never overwrites variables
/// that are already set, so earlier files take precedence.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    match dotenvy::dotenv() {
        Ok(path) => loaded.push(path),
        Err(e) if e.not_found() => {}
        Err(e) => debug!("Failed to load .env from current directory: {}", e),
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => loaded.push(env_file),
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }

    loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_is_under_home() {
        if let (Some(dir), Some(home)) = (config_dir(), dirs::home_dir()) {
            assert_eq!(dir, home.join(".library"));
        }
    }
}
