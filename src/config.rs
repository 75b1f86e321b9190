use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::document::ConvertError;

/// Tuning knobs for the inference heuristics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConverterConfig {
    /// Number of percentile bands; levels 1..heading_depth-1 can be inferred
    pub heading_depth: u8,
    /// Font sizes below this many points are never headings
    pub min_heading_size: f32,
    /// Leading characters treated as duplicated bullet glyphs in list items
    pub bullet_glyphs: Vec<char>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            heading_depth: 6,
            min_heading_size: 20.0,
            bullet_glyphs: vec![
                '○',        // White circle
                '●',        // Black circle
                '\u{F0B7}', // Symbol font bullet (private use area)
                'o',        // ASCII stand-in
            ],
        }
    }
}

impl ConverterConfig {
    /// Load config from the user's config directory
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                let content = fs::read_to_string(&config_path)?;
                let config: ConverterConfig = toml::from_str(&content)?;
                config.validate()?;
                return Ok(config);
            }
        }

        Ok(ConverterConfig::default())
    }

    /// Save config to the user's config directory
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::get_config_path() {
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }

            let content = toml::to_string_pretty(self)?;
            fs::write(&config_path, content)?;
        }

        Ok(())
    }

    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("doxmark").join("config.toml"))
    }

    pub fn init_default() -> Result<()> {
        ConverterConfig::default().save()
    }

    /// Percentile step between adjacent heading levels
    pub fn heading_step(&self) -> u32 {
        100 / u32::from(self.heading_depth.max(1))
    }

    pub fn validate(&self) -> Result<(), ConvertError> {
        // Levels 1..D-1 must fit h1..h6
        if !(2..=7).contains(&self.heading_depth) {
            return Err(ConvertError::InvalidConfig(format!(
                "heading_depth must be between 2 and 7, got {}",
                self.heading_depth
            )));
        }
        if !self.min_heading_size.is_finite() || self.min_heading_size < 0.0 {
            return Err(ConvertError::InvalidConfig(format!(
                "min_heading_size must be a non-negative number, got {}",
                self.min_heading_size
            )));
        }
        Ok(())
    }
}
