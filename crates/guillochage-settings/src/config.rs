//! Configuration and settings management for Guillochage
//!
//! Supports JSON and TOML files, chosen by extension. The default location
//! is `<platform config dir>/guillochage/config.toml`.
//!
//! Configuration is organized into sections:
//! - Engine tunables (generation padding, clipping precision, resolution)
//! - Export defaults (SVG margin and outline, DXF arc discretization)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use guillochage_core::Resolution;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Maximum number of entries kept in the recent files list.
pub const MAX_RECENT_FILES: usize = 10;

const CONFIG_DIR_NAME: &str = "guillochage";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Geometry engine tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Generation length as a multiple of the workpiece diagonal (>= 1.2)
    pub generation_padding: f64,
    /// Bisection iterations per boundary crossing (1..=64)
    pub bisection_steps: usize,
    /// Resolution used when a line has none
    pub default_resolution: Resolution,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            generation_padding: 1.5,
            bisection_steps: 12,
            default_resolution: Resolution::Medium,
        }
    }
}

/// Export defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Blank border around the workpiece in SVG files, in millimeters
    pub svg_margin_mm: f64,
    /// Stroke color of the dashed workpiece outline
    pub svg_outline_color: String,
    /// Segments per quarter turn for DXF outlines
    pub dxf_arc_steps: usize,
    /// Where exported files go when no path is given
    pub output_directory: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            svg_margin_mm: 10.0,
            svg_outline_color: "#ddd".to_string(),
            dxf_arc_steps: 12,
            output_directory: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub engine: EngineSettings,
    pub export: ExportSettings,
    /// Recently opened projects, most recent first
    pub recent_files: Vec<PathBuf>,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    if path.extension().is_some_and(|ext| ext == "json") {
        Ok(Format::Json)
    } else if path.extension().is_some_and(|ext| ext == "toml") {
        Ok(Format::Toml)
    } else {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        Err(ConfigError::UnsupportedFormat(ext).into())
    }
}

fn out_of_range(key: &str, value: impl ToString) -> SettingsError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into()
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration file path for this platform.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Loads `path`, or the defaults when the file does not exist yet.
    ///
    /// A file that exists but cannot be used is still an error.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save configuration to a `.json` or `.toml` file, creating its directory
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e)))?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let padding = self.engine.generation_padding;
        if !padding.is_finite() || padding < 1.2 {
            return Err(out_of_range("engine.generation_padding", padding));
        }

        if !(1..=64).contains(&self.engine.bisection_steps) {
            return Err(out_of_range(
                "engine.bisection_steps",
                self.engine.bisection_steps,
            ));
        }

        let margin = self.export.svg_margin_mm;
        if !margin.is_finite() || margin < 0.0 {
            return Err(out_of_range("export.svg_margin_mm", margin));
        }

        if self.export.svg_outline_color.trim().is_empty() {
            warn!("empty SVG outline color");
            return Err(out_of_range("export.svg_outline_color", "\"\""));
        }

        if self.export.dxf_arc_steps == 0 {
            return Err(out_of_range("export.dxf_arc_steps", 0));
        }

        Ok(())
    }

    /// Add a file to the recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}
