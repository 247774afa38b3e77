//! Configuration management for Quill.
//!
//! Parses `quill.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Layout
//!
//! All settings live in the `[build]` section:
//!
//! ```toml
//! [build]
//! source_dir = "src"
//! output_dir = "public"
//! pages_dir = "pages"
//! blog_dir = "blog"
//! template = "templates/base.html"
//! stylesheet = "css/style.css"
//! script = "js/main.js"
//! ```
//!
//! `source_dir` and `output_dir` are relative to the config file. The
//! remaining paths are relative to `source_dir`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quill.toml";

const DEFAULT_SOURCE_DIR: &str = "src";
const DEFAULT_OUTPUT_DIR: &str = "public";
const DEFAULT_PAGES_DIR: &str = "pages";
const DEFAULT_BLOG_DIR: &str = "blog";
const DEFAULT_TEMPLATE: &str = "templates/base.html";
const DEFAULT_STYLESHEET: &str = "css/style.css";
const DEFAULT_SCRIPT: &str = "js/main.js";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build configuration (paths are relative strings from TOML).
    build: BuildConfigRaw,

    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw build configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct BuildConfigRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
    pages_dir: Option<String>,
    blog_dir: Option<String>,
    template: Option<String>,
    stylesheet: Option<String>,
    script: Option<String>,
}

/// Resolved build configuration.
///
/// `source_dir` and `output_dir` are resolved against the config directory.
/// Content paths stay relative to `source_dir`; use the accessor methods to
/// get full paths.
#[derive(Debug, Default)]
pub struct BuildConfig {
    /// Content root.
    pub source_dir: PathBuf,
    /// Generated site root.
    pub output_dir: PathBuf,
    /// Pages directory, relative to `source_dir`.
    pub pages: PathBuf,
    /// Blog directory, relative to `source_dir`.
    pub blog: PathBuf,
    /// Base HTML template, relative to `source_dir`.
    pub template: PathBuf,
    /// Stylesheet, relative to `source_dir`.
    pub stylesheet: PathBuf,
    /// Optional script, relative to `source_dir`.
    pub script: PathBuf,
}

impl BuildConfig {
    /// Pages directory (required at build time).
    #[must_use]
    pub fn pages_dir(&self) -> PathBuf {
        self.source_dir.join(&self.pages)
    }

    /// Blog directory (optional at build time).
    #[must_use]
    pub fn blog_dir(&self) -> PathBuf {
        self.source_dir.join(&self.blog)
    }

    /// Base template file.
    #[must_use]
    pub fn template_path(&self) -> PathBuf {
        self.source_dir.join(&self.template)
    }

    /// Stylesheet file.
    #[must_use]
    pub fn stylesheet_path(&self) -> PathBuf {
        self.source_dir.join(&self.stylesheet)
    }

    /// Script file.
    #[must_use]
    pub fn script_path(&self) -> PathBuf {
        self.source_dir.join(&self.script)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a path field to be non-empty.
fn require_non_empty(value: &Path, field: &str) -> Result<(), ConfigError> {
    if value.as_os_str().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quill.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.build_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.build_resolved.output_dir.clone_from(output_dir);
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let build = &self.build_resolved;
        require_non_empty(&build.pages, "build.pages_dir")?;
        require_non_empty(&build.blog, "build.blog_dir")?;
        require_non_empty(&build.template, "build.template")?;
        require_non_empty(&build.stylesheet, "build.stylesheet")?;
        require_non_empty(&build.script, "build.script")?;

        if build.output_dir == build.source_dir {
            return Err(ConfigError::Validation(
                "build.output_dir must differ from build.source_dir".to_owned(),
            ));
        }

        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            build: BuildConfigRaw::default(),
            build_resolved: BuildConfig::default(),
            config_path: None,
        };
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Resolve raw TOML values against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let raw = &self.build;
        let relative = |value: Option<&str>, default: &str| PathBuf::from(value.unwrap_or(default));

        self.build_resolved = BuildConfig {
            source_dir: config_dir.join(raw.source_dir.as_deref().unwrap_or(DEFAULT_SOURCE_DIR)),
            output_dir: config_dir.join(raw.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)),
            pages: relative(raw.pages_dir.as_deref(), DEFAULT_PAGES_DIR),
            blog: relative(raw.blog_dir.as_deref(), DEFAULT_BLOG_DIR),
            template: relative(raw.template.as_deref(), DEFAULT_TEMPLATE),
            stylesheet: relative(raw.stylesheet.as_deref(), DEFAULT_STYLESHEET),
            script: relative(raw.script.as_deref(), DEFAULT_SCRIPT),
        };
    }
}
