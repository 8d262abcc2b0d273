use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::document::layout::{PageLayout, A4_HEIGHT, A4_WIDTH, DEFAULT_MARGIN, FIRST_LINE_DROP, VALUE_OFFSET};
use crate::document::DEFAULT_TITLE;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory receiving the generated files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Page geometry and title
    #[serde(default)]
    pub document: DocumentConfig,

    /// Email draft settings
    #[serde(default)]
    pub email: EmailConfig,

    /// Open both files with the system viewer after generation
    #[serde(default)]
    pub open_after_export: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Page geometry of the generated PDF
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DocumentConfig {
    /// Title on the first page and the first line of the text file
    #[serde(default = "default_title")]
    pub title: String,

    /// Page width in points
    #[serde(default = "default_page_width")]
    pub page_width: f32,

    /// Page height in points
    #[serde(default = "default_page_height")]
    pub page_height: f32,

    /// Margin in points, applied on every side
    #[serde(default = "default_margin")]
    pub margin: f32,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            page_width: default_page_width(),
            page_height: default_page_height(),
            margin: default_margin(),
        }
    }
}

impl DocumentConfig {
    pub fn page_layout(&self) -> PageLayout {
        PageLayout::new(self.title.clone(), self.page_width, self.page_height, self.margin)
    }
}

/// Subject and body of the pre-filled email draft
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmailConfig {
    #[serde(default = "default_email_subject")]
    pub subject: String,

    #[serde(default = "default_email_body")]
    pub body: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            subject: default_email_subject(),
            body: default_email_body(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("FichasTecnicas")
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_page_width() -> f32 {
    A4_WIDTH
}

fn default_page_height() -> f32 {
    A4_HEIGHT
}

fn default_margin() -> f32 {
    DEFAULT_MARGIN
}

fn default_email_subject() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_email_body() -> String {
    "Segue em anexo a ficha técnica do projeto editorial.".to_string()
}

impl Config {
    /// Load the configuration at `path`, writing a default one there first when
    /// the file does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {:?}", path))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(anyhow!("Output directory must not be empty"));
        }

        let document = &self.document;
        if document.title.trim().is_empty() {
            return Err(anyhow!("Document title must not be empty"));
        }

        if !(document.margin > 0.0) {
            return Err(anyhow!("Page margin must be positive, got {}", document.margin));
        }

        if document.page_height <= 2.0 * document.margin + FIRST_LINE_DROP {
            return Err(anyhow!(
                "Page height {} leaves no room for fields with margin {}",
                document.page_height,
                document.margin
            ));
        }

        if document.page_width <= 2.0 * document.margin + VALUE_OFFSET {
            return Err(anyhow!(
                "Page width {} leaves no room for the value column with margin {}",
                document.page_width,
                document.margin
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            document: DocumentConfig::default(),
            email: EmailConfig::default(),
            open_after_export: false,
            log_level: LogLevel::default(),
        }
    }
}
