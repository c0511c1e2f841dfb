//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (clap handles presence and syntax)
//! - Check the bind address and cache directory before anything starts
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over `ServerConfig` and the filesystem

use std::path::PathBuf;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("host must not be empty")]
    EmptyHost,

    #[error("port must be non-zero")]
    ZeroPort,

    #[error("cache directory {0} does not exist")]
    CacheDirMissing(PathBuf),

    #[error("cache path {0} is not a directory")]
    CacheDirNotDirectory(PathBuf),

    #[error("request timeout must be at least one second")]
    ZeroTimeout,

    #[error("maximum body size must be non-zero")]
    ZeroBodyLimit,
}

/// Check `config` for semantic problems, collecting every error found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }
    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    let cache_dir = &config.storage.cache_dir;
    match std::fs::metadata(cache_dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => errors.push(ValidationError::CacheDirNotDirectory(cache_dir.clone())),
        Err(_) => errors.push(ValidationError::CacheDirMissing(cache_dir.clone())),
    }

    if config.limits.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &std::path::Path) -> ServerConfig {
        let mut config = ServerConfig::default();
        config.storage.cache_dir = dir.to_path_buf();
        config
    }

    #[test]
    fn accepts_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(validate_config(&config_for(dir.path())), Ok(()));
    }

    #[test]
    fn collects_every_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let mut config = config_for(&missing);
        config.listener.host = "  ".to_string();
        config.listener.port = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyHost,
                ValidationError::ZeroPort,
                ValidationError::CacheDirMissing(missing),
            ]
        );
    }

    #[test]
    fn rejects_file_as_cache_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "").unwrap();

        let errors = validate_config(&config_for(&file)).unwrap_err();
        assert_eq!(errors, vec![ValidationError::CacheDirNotDirectory(file)]);
    }
}
