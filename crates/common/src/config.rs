use crate::Viewport;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which startup sequence a host runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Build the scene, then acquire the backend. No diagnostics.
    #[default]
    Deferred,
    /// Same sequence, plus capability, expression and backend-kind logging.
    Diagnostic,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deferred => f.write_str("deferred"),
            Self::Diagnostic => f.write_str("diagnostic"),
        }
    }
}

/// Errors from loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Startup options for a demo host.
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub viewport: Viewport,
    pub variant: Variant,
    /// Multisampled rendering (4x) where the backend supports it.
    pub antialias: bool,
    /// Follow host resizes. Off by default: surface and aspect stay at start-time values.
    pub track_resize: bool,
    /// Fail setup on a zero-sized viewport instead of building a degenerate camera.
    pub reject_degenerate_viewport: bool,
    /// Loop time after which the diagnostic variant reports the active backend.
    pub backend_report_delay_ms: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            variant: Variant::default(),
            antialias: true,
            track_resize: false,
            reject_degenerate_viewport: false,
            backend_report_delay_ms: 1000.0,
        }
    }
}

impl DemoConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let cfg = DemoConfig::default();
        assert_eq!(cfg.viewport, Viewport::new(1280, 720));
        assert_eq!(cfg.variant, Variant::Deferred);
        assert!(cfg.antialias);
        assert!(!cfg.track_resize);
        assert_eq!(cfg.backend_report_delay_ms, 1000.0);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = DemoConfig::from_yaml_str(
            "viewport:\n  width: 800\n  height: 600\nvariant: diagnostic\n",
        )
        .unwrap();
        assert_eq!(cfg.viewport, Viewport::new(800, 600));
        assert_eq!(cfg.variant, Variant::Diagnostic);
        assert!(cfg.antialias);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let err = DemoConfig::from_yaml_str("variant: fancy\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "antialias: false").unwrap();
        writeln!(file, "track_resize: true").unwrap();
        let cfg = DemoConfig::load(file.path()).unwrap();
        assert!(!cfg.antialias);
        assert!(cfg.track_resize);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DemoConfig::load(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn yaml_output_parses_back() {
        let cfg = DemoConfig {
            variant: Variant::Diagnostic,
            ..DemoConfig::default()
        };
        let text = cfg.to_yaml().unwrap();
        assert_eq!(DemoConfig::from_yaml_str(&text).unwrap(), cfg);
    }
}
