use crate::domain::ports::ConfigProvider;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BENCHMARK_NAME: &str = "Prisoner's Dilemma Benchmark";
pub const DEFAULT_PORT: u16 = 7860;
pub const DEFAULT_VISIT_HINT: &str = "Visit the Space URL to access the application";

/// The two lines printed on startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub benchmark_name: String,
    pub port: u16,
    pub visit_hint: String,
}

impl Default for Announcement {
    fn default() -> Self {
        Self {
            benchmark_name: DEFAULT_BENCHMARK_NAME.to_string(),
            port: DEFAULT_PORT,
            visit_hint: DEFAULT_VISIT_HINT.to_string(),
        }
    }
}

impl Announcement {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            benchmark_name: config.benchmark_name().to_string(),
            port: config.port(),
            visit_hint: config.visit_hint().to_string(),
        }
    }

    pub fn startup_line(&self) -> String {
        format!("Starting {}...", self.benchmark_name)
    }

    pub fn port_line(&self) -> String {
        format!("Application is running on port {}. {}", self.port, self.visit_hint)
    }

    pub fn lines(&self) -> [String; 2] {
        [self.startup_line(), self.port_line()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lines() {
        let [first, second] = Announcement::default().lines();
        assert_eq!(first, "Starting Prisoner's Dilemma Benchmark...");
        assert_eq!(
            second,
            "Application is running on port 7860. Visit the Space URL to access the application"
        );
    }

    #[test]
    fn test_custom_port_is_rendered() {
        let announcement = Announcement {
            port: 8080,
            ..Announcement::default()
        };
        assert!(announcement.port_line().contains("8080"));
        assert!(!announcement.port_line().contains("7860"));
    }
}
