//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: VIEW_HELPERS_, nested keys split on `__`)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/view-helpers/{app_name}/config.toml
//! 4. System directory: /etc/view-helpers/{app_name}/config.toml
//! 5. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const ENV_PREFIX: &str = "VIEW_HELPERS_";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    #[serde(default)]
    pub service: ServiceConfig,

    /// Script initializer configuration
    #[serde(default)]
    pub script: ScriptConfig,

    /// Flash alert configuration
    #[serde(default)]
    pub flash: FlashConfig,
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Application name, used to locate config files
    #[serde(default = "default_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Script initializer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Top-level JavaScript object holding the initializers (e.g. `App`)
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Wrap controller and action calls in existence checks
    #[serde(default)]
    pub guard_undefined: bool,
}

/// Flash alert markup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashConfig {
    /// Generic marker class present on every alert
    #[serde(default = "default_base_class")]
    pub base_class: String,

    /// Classes enabling fade in/out behavior
    #[serde(default = "default_fade_class")]
    pub fade_class: String,

    /// Attribute on the close button naming the alert to dismiss
    #[serde(default = "default_dismiss_attribute")]
    pub dismiss_attribute: String,

    /// Prefix of generated alert element ids
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Close button content, emitted unescaped
    #[serde(default = "default_close_label")]
    pub close_label: String,

    /// Flash key to alert class overrides, merged over the built-in table
    #[serde(default)]
    pub classes: BTreeMap<String, String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            guard_undefined: false,
        }
    }
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            base_class: default_base_class(),
            fade_class: default_fade_class(),
            dismiss_attribute: default_dismiss_attribute(),
            id_prefix: default_id_prefix(),
            close_label: default_close_label(),
            classes: BTreeMap::new(),
        }
    }
}

fn default_name() -> String {
    "view-helpers".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_namespace() -> String {
    "App".to_string()
}

fn default_base_class() -> String {
    "alert".to_string()
}

fn default_fade_class() -> String {
    "fade in".to_string()
}

fn default_dismiss_attribute() -> String {
    "data-dismiss-alert".to_string()
}

fn default_id_prefix() -> String {
    "flash".to_string()
}

fn default_close_label() -> String {
    "&times;".to_string()
}

fn is_js_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}

impl Config {
    /// Load configuration for the application named after the current binary
    pub fn load() -> Result<Self> {
        let app_name = std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(default_name);

        Self::load_for_app(&app_name)
    }

    /// Load configuration for a specific application
    ///
    /// Searches for config files in:
    /// 1. ./config.toml
    /// 2. ~/.config/view-helpers/{app_name}/config.toml
    /// 3. /etc/view-helpers/{app_name}/config.toml
    pub fn load_for_app(app_name: &str) -> Result<Self> {
        let config_paths = Self::find_config_paths(app_name);

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Lowest priority first so later merges win
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that end up verbatim in generated script or markup
    ///
    /// `script.namespace` must be a dotted JavaScript identifier path;
    /// `flash.base_class`, `flash.id_prefix` and `flash.dismiss_attribute`
    /// must be non-empty single tokens; class overrides must be non-empty.
    pub fn validate(&self) -> Result<()> {
        if !self.script.namespace.split('.').all(is_js_identifier) {
            return Err(Error::InvalidConfig(format!(
                "script.namespace {:?} is not a dotted JavaScript identifier",
                self.script.namespace
            )));
        }

        for (field, value) in [
            ("flash.base_class", &self.flash.base_class),
            ("flash.id_prefix", &self.flash.id_prefix),
        ] {
            if !is_token(value) {
                return Err(Error::InvalidConfig(format!(
                    "{field} {value:?} must be non-empty without whitespace"
                )));
            }
        }

        let attribute = &self.flash.dismiss_attribute;
        if !is_token(attribute) || attribute.contains(['"', '\'', '<', '>', '=', '/']) {
            return Err(Error::InvalidConfig(format!(
                "flash.dismiss_attribute {attribute:?} is not a valid attribute name"
            )));
        }

        for (key, class) in &self.flash.classes {
            if key.is_empty() || class.trim().is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "flash.classes entry {key:?} = {class:?} must be non-empty"
                )));
            }
        }

        Ok(())
    }

    /// Find all possible config file paths for an application
    ///
    /// Returns paths in priority order (highest first).
    fn find_config_paths(app_name: &str) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix("view-helpers");
        let config_file_path = Path::new(app_name).join("config.toml");
        if let Ok(path) = xdg_dirs.place_config_file(&config_file_path) {
            paths.push(path);
        }

        paths.push(PathBuf::from("/etc/view-helpers").join(app_name).join("config.toml"));

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.script.namespace, "App");
        assert!(!config.script.guard_undefined);
        assert_eq!(config.flash.base_class, "alert");
        assert_eq!(config.flash.fade_class, "fade in");
        assert_eq!(config.flash.dismiss_attribute, "data-dismiss-alert");
        assert!(config.flash.classes.is_empty());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.script.namespace = "MyApp.pages".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_markup_breaking_values() {
        // each file on its own must fail validation
        let cases = [
            "[script]\nnamespace = \"\"",
            "[script]\nnamespace = \"My App\"",
            "[script]\nnamespace = \"App..pages\"",
            "[script]\nnamespace = \"1App\"",
            "[script]\nnamespace = \"App();\"",
            "[flash]\ndismiss_attribute = \"\"",
            "[flash]\ndismiss_attribute = \"data dismiss\"",
            "[flash]\ndismiss_attribute = \"x=\\\"y\"",
            "[flash]\nid_prefix = \"\"",
            "[flash]\nid_prefix = \"my flash\"",
            "[flash]\nbase_class = \"\"",
            "[flash]\nbase_class = \" \"",
            "[flash.classes]\nnotice = \"\"",
            "[flash.classes]\nnotice = \"  \"",
        ];

        for case in cases {
            Jail::expect_with(|jail| {
                jail.create_file("config.toml", case)?;

                match Config::load_for_app("jail-test") {
                    Err(Error::InvalidConfig(_)) => {}
                    other => panic!("{case:?} loaded as {other:?}"),
                }
                match Config::load_from("config.toml") {
                    Err(Error::InvalidConfig(_)) => {}
                    other => panic!("{case:?} loaded as {other:?}"),
                }
                Ok(())
            });
        }
    }

    #[test]
    fn test_rejects_invalid_value_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("VIEW_HELPERS_FLASH__ID_PREFIX", "a b");

            assert!(matches!(
                Config::load_for_app("jail-test"),
                Err(Error::InvalidConfig(_))
            ));
            Ok(())
        });
    }

    #[test]
    fn test_load_from_file() {
        // Jail serializes access to the process environment
        Jail::expect_with(|_jail| {
            let mut file = tempfile::NamedTempFile::new().map_err(|e| e.to_string())?;
            writeln!(
                file,
                r#"
[script]
namespace = "Dummy"

[flash.classes]
notice = "alert-notice"
"#
            )
            .map_err(|e| e.to_string())?;

            let config = Config::load_from(file.path()).map_err(|e| e.to_string())?;
            assert_eq!(config.script.namespace, "Dummy");
            assert_eq!(
                config.flash.classes.get("notice").map(String::as_str),
                Some("alert-notice")
            );
            assert_eq!(config.flash.base_class, "alert");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
[script]
namespace = "FromFile"
guard_undefined = false
"#,
            )?;
            jail.set_env("VIEW_HELPERS_SCRIPT__NAMESPACE", "FromEnv");
            jail.set_env("VIEW_HELPERS_SCRIPT__GUARD_UNDEFINED", "true");

            let config = Config::load_for_app("jail-test").map_err(|e| e.to_string())?;
            assert_eq!(config.script.namespace, "FromEnv");
            assert!(config.script.guard_undefined);
            Ok(())
        });
    }

    #[test]
    fn test_cwd_config_file_is_loaded() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
[flash]
fade_class = "fade show"
"#,
            )?;

            let config = Config::load_for_app("jail-test").map_err(|e| e.to_string())?;
            assert_eq!(config.flash.fade_class, "fade show");
            assert_eq!(config.flash.id_prefix, "flash");
            Ok(())
        });
    }
}
