//! Matching engine selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Engines determine how example code blocks are located in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Single regular-expression substitution over the raw text
    #[default]
    Pattern,
    /// CommonMark tokenizer; rewrites only fenced code block info strings
    Markdown,
}

impl Engine {
    /// Lowercase name used on the command line and in config files
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Pattern => "pattern",
            Engine::Markdown => "markdown",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pattern" => Ok(Engine::Pattern),
            "markdown" => Ok(Engine::Markdown),
            _ => Err(format!(
                "Invalid engine: '{}'. Valid engines are: pattern, markdown",
                s
            )),
        }
    }
}
