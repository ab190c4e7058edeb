// ShopTrail platform abstraction
// Provides platform-specific config and data directories for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` to pick the convention at compile time.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
const APP_DIR_NAME: &str = "shoptrail";

#[cfg(not(target_os = "linux"))]
const APP_DIR_NAME: &str = "ShopTrail";

/// Returns the platform-specific configuration directory for ShopTrail.
///
/// - **Linux**: `$XDG_CONFIG_HOME/shoptrail` or `~/.config/shoptrail`
/// - **macOS**: `~/Library/Application Support/ShopTrail`
/// - **Windows**: `%APPDATA%/ShopTrail`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        xdg_dir("XDG_CONFIG_HOME", &[".config"])
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join(APP_DIR_NAME)
    }
    #[cfg(target_os = "windows")]
    {
        roaming_app_data().join(APP_DIR_NAME)
    }
}

/// Returns the platform-specific data directory for ShopTrail.
///
/// - **Linux**: `$XDG_DATA_HOME/shoptrail` or `~/.local/share/shoptrail`
/// - **macOS**: same as the config directory
/// - **Windows**: same as the config directory
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        xdg_dir("XDG_DATA_HOME", &[".local", "share"])
    }
    #[cfg(not(target_os = "linux"))]
    {
        get_config_dir()
    }
}

#[allow(dead_code)]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

#[cfg(target_os = "linux")]
fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join(APP_DIR_NAME),
        _ => fallback
            .iter()
            .fold(home_dir(), |path, part| path.join(part))
            .join(APP_DIR_NAME),
    }
}

#[cfg(target_os = "windows")]
fn roaming_app_data() -> PathBuf {
    PathBuf::from(
        env::var("APPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming")),
    )
}
