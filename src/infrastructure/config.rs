//! Configuration management

use crate::domain::{Engine, RewriteRule};
use crate::error::{Result, TwoslashError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Rewrite settings. Every key is optional; unset keys fall back to the
/// defaults of [`RewriteRule`] and [`Engine`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub marker: Option<String>,
    pub from_lang: Option<String>,
    pub to_lang: Option<String>,
    pub engine: Option<Engine>,
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TwoslashError::NotFound(path.to_path_buf())
            } else {
                TwoslashError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Layer `overrides` on top of this config; set keys in `overrides` win.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            marker: overrides.marker.or(self.marker),
            from_lang: overrides.from_lang.or(self.from_lang),
            to_lang: overrides.to_lang.or(self.to_lang),
            engine: overrides.engine.or(self.engine),
        }
    }

    /// Build the validated rewrite rule
    pub fn rule(&self) -> Result<RewriteRule> {
        let defaults = RewriteRule::default();
        RewriteRule::new(
            self.marker.clone().unwrap_or(defaults.marker),
            self.from_lang.clone().unwrap_or(defaults.from_lang),
            self.to_lang.clone().unwrap_or(defaults.to_lang),
        )
    }

    pub fn engine(&self) -> Engine {
        self.engine.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::default();
        assert_eq!(config.rule().unwrap(), RewriteRule::default());
        assert_eq!(config.engine(), Engine::Pattern);
    }

    #[test]
    fn test_load_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("twoslash.toml");
        fs::write(
            &path,
            "marker = \"**Usage:**\"\nto_lang = \"ts twoslash\"\nengine = \"markdown\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.marker.as_deref(), Some("**Usage:**"));
        assert_eq!(config.from_lang, None);
        assert_eq!(config.engine(), Engine::Markdown);

        let rule = config.rule().unwrap();
        assert_eq!(rule.marker, "**Usage:**");
        assert_eq!(rule.from_lang, "typescript");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(&temp.path().join("nope.toml"));

        match result.unwrap_err() {
            TwoslashError::NotFound(_) => {}
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("twoslash.toml");
        fs::write(&path, "lang = \"ts\"\n").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(TwoslashError::TomlDeserialize(_))
        ));
    }

    #[test]
    fn test_load_rejects_unknown_engine() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("twoslash.toml");
        fs::write(&path, "engine = \"regex\"\n").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = Config {
            marker: Some("**Usage:**".to_string()),
            from_lang: Some("ts".to_string()),
            to_lang: None,
            engine: Some(Engine::Markdown),
        };
        let flags = Config {
            from_lang: Some("tsx".to_string()),
            engine: Some(Engine::Pattern),
            ..Config::default()
        };

        let merged = file.merge(flags);
        assert_eq!(merged.marker.as_deref(), Some("**Usage:**"));
        assert_eq!(merged.from_lang.as_deref(), Some("tsx"));
        assert_eq!(merged.to_lang, None);
        assert_eq!(merged.engine(), Engine::Pattern);
    }

    #[test]
    fn test_invalid_rule_is_config_error() {
        let config = Config {
            to_lang: Some("a`b".to_string()),
            ..Config::default()
        };

        assert!(matches!(config.rule(), Err(TwoslashError::Config(_))));
    }
}
