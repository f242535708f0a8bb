//! Configuration types for tillroll.
//!
//! [`Config::load`] reads `~/.config/tillroll/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[decode]
strict              = true
detect_sample_lines = 8

[export]
delimiter = ","
jsonl     = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/tillroll/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub decode: DecodeConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// `[decode]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DecodeConfig {
    /// Fail a whole input on trailing undecodable content. The CLI's
    /// `--lenient` flag overrides this per run.
    #[serde(default = "default_strict")]
    pub strict: bool,
    /// How many leading lines layout detection samples.
    #[serde(default = "default_detect_sample_lines")]
    pub detect_sample_lines: usize,
}

fn default_strict() -> bool { true }
fn default_detect_sample_lines() -> usize { 8 }

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            strict: default_strict(),
            detect_sample_lines: default_detect_sample_lines(),
        }
    }
}

/// `[export]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Single-character field delimiter for the canonical form.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Emit JSONL instead of the delimited form.
    #[serde(default = "default_jsonl")]
    pub jsonl: bool,
}

fn default_delimiter() -> String { ",".to_string() }
fn default_jsonl() -> bool { false }

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            jsonl: default_jsonl(),
        }
    }
}

impl ExportConfig {
    /// The delimiter as a single char.
    ///
    /// Errors when the configured string is not exactly one character or
    /// would collide with characters that occur inside fields (digits,
    /// lowercase letters, `.`, `-`, `:`) or with the horizontal whitespace
    /// the row decoder skips around fields (space, tab).
    pub fn delimiter_char(&self) -> anyhow::Result<char> {
        let mut chars = self.delimiter.chars();
        let (Some(delim), None) = (chars.next(), chars.next()) else {
            anyhow::bail!(
                "export.delimiter must be exactly one character, got {:?}",
                self.delimiter
            );
        };
        let collides = delim.is_ascii_digit()
            || delim.is_ascii_lowercase()
            || matches!(delim, '.' | '-' | ':' | ' ' | '\t');
        if collides {
            anyhow::bail!("export.delimiter {delim:?} collides with characters used inside fields");
        }
        Ok(delim)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/tillroll/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("tillroll")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
