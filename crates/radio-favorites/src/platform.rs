use std::path::PathBuf;

const APP_DIR: &str = "radio-favorites";

/// Subdirectory of the data dir holding one `<name>.json` per list.
pub const FAVORITES_SUBDIR: &str = "favorites";

/// `~/.local/share/radio-favorites` on Unix (macOS included), the local
/// app-data folder elsewhere.
pub fn data_dir() -> PathBuf {
    #[cfg(unix)]
    let base = dirs::home_dir().map(|home| home.join(".local").join("share"));
    #[cfg(not(unix))]
    let base = dirs::data_local_dir();

    base.unwrap_or_else(std::env::temp_dir).join(APP_DIR)
}

/// `~/.config/radio-favorites` on Unix, the roaming config folder elsewhere.
pub fn config_dir() -> PathBuf {
    #[cfg(unix)]
    let base = dirs::home_dir().map(|home| home.join(".config"));
    #[cfg(not(unix))]
    let base = dirs::config_dir();

    base.unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

pub fn favorites_dir() -> PathBuf {
    data_dir().join(FAVORITES_SUBDIR)
}

pub fn prefs_file() -> PathBuf {
    data_dir().join("prefs.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorites_dir_under_data_dir() {
        let dir = favorites_dir();
        assert!(dir.starts_with(data_dir()));
        assert!(dir.ends_with("radio-favorites/favorites"));
    }

    #[test]
    fn test_prefs_file_under_data_dir() {
        assert_eq!(prefs_file().parent(), Some(data_dir().as_path()));
    }

    #[test]
    fn test_config_dir_is_app_specific() {
        assert!(config_dir().ends_with(APP_DIR));
    }
}
