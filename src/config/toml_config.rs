use crate::core::{Announcement, ConfigProvider};
use crate::utils::error::{Result, StatusError};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_single_line, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub announcement: Option<AnnouncementConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnouncementConfig {
    pub benchmark_name: Option<String>,
    pub port: Option<u16>,
    pub visit_hint: Option<String>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StatusError::ConfigReadError {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| StatusError::ConfigParseError {
            path: path.display().to_string(),
            source,
        })
    }

    /// Applies the file's overrides on top of the built-in announcement.
    pub fn apply(&self, base: Announcement) -> ResolvedConfig {
        let Some(overrides) = &self.announcement else {
            return ResolvedConfig { announcement: base };
        };

        ResolvedConfig {
            announcement: Announcement {
                benchmark_name: overrides
                    .benchmark_name
                    .clone()
                    .unwrap_or(base.benchmark_name),
                port: overrides.port.unwrap_or(base.port),
                visit_hint: overrides.visit_hint.clone().unwrap_or(base.visit_hint),
            },
        }
    }
}

/// Effective configuration after defaults and file overrides are merged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedConfig {
    pub announcement: Announcement,
}

impl ConfigProvider for ResolvedConfig {
    fn benchmark_name(&self) -> &str {
        &self.announcement.benchmark_name
    }

    fn port(&self) -> u16 {
        self.announcement.port
    }

    fn visit_hint(&self) -> &str {
        &self.announcement.visit_hint
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("benchmark_name", self.benchmark_name())?;
        validate_single_line("benchmark_name", self.benchmark_name())?;
        validate_range("port", self.port(), 1, u16::MAX)?;
        validate_non_empty_string("visit_hint", self.visit_hint())?;
        validate_single_line("visit_hint", self.visit_hint())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
[announcement]
port = 9000
"#,
        )
        .unwrap();

        let resolved = config.apply(Announcement::default());
        assert_eq!(resolved.port(), 9000);
        assert_eq!(resolved.benchmark_name(), "Prisoner's Dilemma Benchmark");
        assert!(resolved.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.apply(Announcement::default()), ResolvedConfig::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: std::result::Result<FileConfig, _> = toml::from_str(
            r#"
[announcement]
host = "0.0.0.0"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let zero_port = FileConfig {
            announcement: Some(AnnouncementConfig {
                port: Some(0),
                ..AnnouncementConfig::default()
            }),
        };
        assert!(zero_port.apply(Announcement::default()).validate().is_err());

        let multi_line = FileConfig {
            announcement: Some(AnnouncementConfig {
                visit_hint: Some("one\ntwo".to_string()),
                ..AnnouncementConfig::default()
            }),
        };
        assert!(multi_line.apply(Announcement::default()).validate().is_err());
    }
}
