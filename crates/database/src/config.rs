use std::{env, path::PathBuf};

use preparedness::BackendKind;

pub const DEFAULT_EMBEDDED_PATH: &str = "./dev.sqlite";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    Hosted { url: String },
    Embedded { path: PathBuf },
}

/// Selects the backend `connect` opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub backend: BackendConfig,
}

impl DatabaseConfig {
    pub fn hosted(url: impl Into<String>) -> Self {
        Self {
            backend: BackendConfig::Hosted { url: url.into() },
        }
    }

    pub fn embedded(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: BackendConfig::Embedded { path: path.into() },
        }
    }

    /// Uses the hosted backend if `DATABASE_URL` is set, the embedded file
    /// from `DATABASE_FILE` (or `./dev.sqlite`) otherwise.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("DATABASE_URL").ok(), env::var("DATABASE_FILE").ok())
    }

    fn from_vars(url: Option<String>, file: Option<String>) -> Self {
        match url.filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::hosted(url),
            None => {
                let path = file
                    .filter(|file| !file.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_EMBEDDED_PATH.to_owned());
                log::warn!(
                    "DATABASE_URL not set, using local SQLite database at '{}' for development.",
                    path
                );
                Self::embedded(path)
            }
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self.backend {
            BackendConfig::Hosted { .. } => BackendKind::Hosted,
            BackendConfig::Embedded { .. } => BackendKind::Embedded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_string_selects_hosted_backend() {
        let config =
            DatabaseConfig::from_vars(Some("postgres://drrmo@db/preparedness".to_owned()), None);
        assert_eq!(config, DatabaseConfig::hosted("postgres://drrmo@db/preparedness"));
        assert_eq!(config.kind(), BackendKind::Hosted);
    }

    #[test]
    fn missing_connection_string_falls_back_to_embedded() {
        let config = DatabaseConfig::from_vars(None, None);
        assert_eq!(config, DatabaseConfig::embedded(DEFAULT_EMBEDDED_PATH));
        assert_eq!(config.kind(), BackendKind::Embedded);

        let config =
            DatabaseConfig::from_vars(Some(" ".to_owned()), Some("/tmp/a.sqlite".to_owned()));
        assert_eq!(config, DatabaseConfig::embedded("/tmp/a.sqlite"));
    }
}
