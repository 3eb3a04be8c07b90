//! Locations under ~/.dino-runner/ and config file loading.
//!
//! Nothing about a game is persisted; this is only where the optional
//! tuning file and the debug log live.

use crate::core::tuning::Tuning;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = ".dino-runner";
pub const TUNING_FILE: &str = "tuning.json";
pub const LOG_FILE: &str = "dino-runner.log";

/// Get the ~/.dino-runner/ directory path without creating it.
pub fn app_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(APP_DIR))
}

/// Full path for a file in ~/.dino-runner/, creating the directory.
pub fn app_path(filename: &str) -> io::Result<PathBuf> {
    let dir = app_dir()?;
    fs::create_dir_all(&dir)?;
    Ok(dir.join(filename))
}

/// Read and validate a tuning file.
pub fn load_tuning_file(path: &Path) -> io::Result<Tuning> {
    let json = fs::read_to_string(path).map_err(|e| {
        io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
    })?;
    Tuning::from_json(&json).map_err(|e| {
        io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
    })
}

/// Resolve the tuning in effect.
///
/// An explicit path must exist and be valid. Otherwise the default file is
/// used if present, and the built-in values if not.
pub fn resolve_tuning(explicit: Option<&Path>, default_file: Option<&Path>) -> io::Result<Tuning> {
    if let Some(path) = explicit {
        return load_tuning_file(path);
    }
    match default_file {
        Some(path) if path.exists() => load_tuning_file(path),
        _ => Ok(Tuning::default()),
    }
}

/// `--tuning FILE`, else ~/.dino-runner/tuning.json, else defaults.
pub fn load_tuning(explicit: Option<&Path>) -> io::Result<Tuning> {
    let default_file = app_dir().ok().map(|dir| dir.join(TUNING_FILE));
    let tuning = resolve_tuning(explicit, default_file.as_deref())?;
    if tuning != Tuning::default() {
        log::info!("using custom tuning: {:?}", tuning);
    }
    Ok(tuning)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "dino-runner-{}-{}",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).expect("write temp file");
        path
    }

    #[test]
    fn test_app_dir_name() {
        let dir = app_dir().expect("app_dir should succeed");
        assert!(dir.ends_with(".dino-runner"));
    }

    #[test]
    fn test_missing_default_file_gives_defaults() {
        let missing = std::env::temp_dir().join("dino-runner-does-not-exist.json");
        let tuning = resolve_tuning(None, Some(&missing)).unwrap();
        assert_eq!(tuning, Tuning::default());
        assert_eq!(resolve_tuning(None, None).unwrap(), Tuning::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let missing = std::env::temp_dir().join("dino-runner-explicit-missing.json");
        let err = resolve_tuning(Some(&missing), None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("dino-runner-explicit-missing.json"));
    }

    #[test]
    fn test_explicit_file_wins() {
        let explicit = temp_file("explicit.json", r#"{ "max_speed": 12.0 }"#);
        let fallback = temp_file("fallback.json", r#"{ "max_speed": 9.0 }"#);
        let tuning = resolve_tuning(Some(&explicit), Some(&fallback)).unwrap();
        assert!((tuning.max_speed - 12.0).abs() < f64::EPSILON);

        let tuning = resolve_tuning(None, Some(&fallback)).unwrap();
        assert!((tuning.max_speed - 9.0).abs() < f64::EPSILON);

        fs::remove_file(explicit).ok();
        fs::remove_file(fallback).ok();
    }

    #[test]
    fn test_invalid_file_names_field() {
        let path = temp_file("invalid.json", r#"{ "flying_chance": 2.0 }"#);
        let err = resolve_tuning(Some(&path), None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("flying_chance"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        let path = temp_file("malformed.json", "{ not json");
        let err = resolve_tuning(Some(&path), None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_file(path).ok();
    }
}
