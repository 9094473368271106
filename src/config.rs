//! Configuration for the typography mapper
//!
//! Format: simple key=value pairs, one per line.
//! Lines starting with # are comments.
//!
//! Example:
//! ```text
//! # smartpunct configuration
//! single-quotes = true
//! double-quotes = true
//! en-dash = true
//! em-dash = true
//! sentence-spacing = false
//! exceptions = bout, em, cause, round, twas, tis
//! ```
//!
//! Unlike a lot of editor config, a bad setting here is a hard error:
//! an unknown key or unparsable value rejects the whole config rather
//! than being silently skipped.

use std::fs;
use std::path::Path;

use crate::category::Category;
use crate::error::{ConfigError, Result};

/// Mapper configuration
///
/// A `Config` is an immutable snapshot from the mapper's point of
/// view: changing it means building a new mapper and rescanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Map straight apostrophes to curly single quotes
    pub single_quotes: bool,
    /// Map straight double quotes to curly double quotes
    pub double_quotes: bool,
    /// Map two-hyphen runs to en dashes
    pub en_dash: bool,
    /// Map three-hyphen runs to em dashes
    pub em_dash: bool,
    /// Redisplay single spaces after sentence ends as two spaces
    pub sentence_spacing: bool,
    /// Lexical fragments that force a closing single quote after an
    /// apostrophe (elisions like 'bout, 'tis). Matched in order,
    /// case-insensitively, with a word boundary after the fragment.
    pub exceptions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            single_quotes: true,
            double_quotes: true,
            en_dash: true,
            em_dash: true,
            sentence_spacing: false,
            exceptions: Self::default_exceptions(),
        }
    }
}

impl Config {
    /// The stock exception list: common English elisions
    pub fn default_exceptions() -> Vec<String> {
        ["bout", "em", "cause", "round", "twas", "tis"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Check whether a category is enabled
    pub fn enabled(&self, category: Category) -> bool {
        match category {
            Category::SingleQuote => self.single_quotes,
            Category::DoubleQuote => self.double_quotes,
            Category::EnDash => self.en_dash,
            Category::EmDash => self.em_dash,
            Category::SentenceSpacing => self.sentence_spacing,
        }
    }

    /// Enable or disable a category
    pub fn set_enabled(&mut self, category: Category, enabled: bool) {
        match category {
            Category::SingleQuote => self.single_quotes = enabled,
            Category::DoubleQuote => self.double_quotes = enabled,
            Category::EnDash => self.en_dash = enabled,
            Category::EmDash => self.em_dash = enabled,
            Category::SentenceSpacing => self.sentence_spacing = enabled,
        }
    }

    /// The enabled categories, in rule-priority order
    pub fn enabled_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&category| self.enabled(category))
            .collect()
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config = Config::default();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedLine(line.to_string()))?;
            let key = key.trim().to_lowercase();
            let value = value.trim();

            if key == "exceptions" {
                config.exceptions = parse_exceptions(value)?;
            } else if let Some(category) = Category::from_name(&key) {
                config.set_enabled(category, parse_bool(&key, value)?);
            } else {
                return Err(ConfigError::UnknownKey(key));
            }
        }

        Ok(config)
    }
}

/// Parse a boolean setting, rejecting anything unrecognized
fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Parse a comma-separated exception list
///
/// An empty value clears the list; an empty fragment between commas
/// is an error.
fn parse_exceptions(value: &str) -> Result<Vec<String>> {
    if value.is_empty() {
        return Ok(Vec::new());
    }

    let mut fragments = Vec::new();
    for fragment in value.split(',') {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Err(ConfigError::EmptyFragment);
        }
        fragments.push(fragment.to_string());
    }
    Ok(fragments)
}
