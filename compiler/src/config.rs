//! Generator configuration: Java package names, output directories and the
//! irregular-naming tables of the upstream API.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{error::GenError, naming::normalize};

lazy_static! {
    static ref JAVA_PACKAGE: Regex =
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$").unwrap();
    static ref JAVA_IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap();

    /// Replies whose request cannot be derived from the naming convention.
    /// Sub-details (`bridge_domain_sw_if_details`) and details messages not
    /// called details (`l2_fib_table_entry`) are listed here too.
    static ref UNCONVENTIONAL_REPLY_REQUEST: Vec<(&'static str, &'static str)> = vec![
        ("cli_reply",                   "cli_request"),
        ("vnet_summary_stats_reply",    "vnet_get_summary_stats"),
        ("bridge_domain_sw_if_details", "bridge_domain"),
        ("l2_fib_table_entry",          "l2_fib_table"),
    ];

    /// Messages still present in the API dump but disabled upstream.
    static ref IGNORED_MESSAGES: Vec<&'static str> = vec!["is_address_reachable"];

    /// Request/reply structures that double as notifications.
    static ref REUSED_NOTIFICATIONS: Vec<&'static str> =
        vec!["sw_interface_set_flags", "bfd_udp_session_details"];
}

/// Known irregularities of the upstream naming convention. Built once and
/// never mutated while generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NamingOverrides")]
pub struct NamingConfig {
    pub unconventional_reply_request: BTreeMap<String, String>,
    pub ignored:                      Vec<String>,
    pub reused_notifications:         Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        NamingConfig {
            unconventional_reply_request: UNCONVENTIONAL_REPLY_REQUEST
                .iter()
                .map(|(reply, request)| (reply.to_string(), request.to_string()))
                .collect(),
            ignored:              IGNORED_MESSAGES.iter().map(|s| s.to_string()).collect(),
            reused_notifications: REUSED_NOTIFICATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Entries from a config file. They extend the built-in tables.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NamingOverrides {
    unconventional_reply_request: BTreeMap<String, String>,
    ignored:                      Vec<String>,
    reused_notifications:         Vec<String>,
}

impl From<NamingOverrides> for NamingConfig {
    fn from(overrides: NamingOverrides) -> Self {
        let mut naming = NamingConfig::default();
        naming
            .unconventional_reply_request
            .extend(overrides.unconventional_reply_request);
        for name in overrides.ignored {
            if !naming.ignored.contains(&name) {
                naming.ignored.push(name);
            }
        }
        for name in overrides.reused_notifications {
            if !naming.reused_notifications.contains(&name) {
                naming.reused_notifications.push(name);
            }
        }
        naming
    }
}

impl NamingConfig {
    pub fn with_request_for(mut self, reply: &str, request: &str) -> Self {
        self.unconventional_reply_request
            .insert(reply.to_string(), request.to_string());
        self
    }

    pub fn with_ignored(mut self, name: &str) -> Self {
        self.ignored.push(name.to_string());
        self
    }

    pub fn with_reused_notification(mut self, name: &str) -> Self {
        self.reused_notifications.push(name.to_string());
        self
    }

    /// Request name (upstream convention) for an irregular reply, if listed.
    pub fn request_for(&self, reply_name: &str) -> Option<&str> {
        let key = normalize(reply_name);
        self.unconventional_reply_request
            .iter()
            .find(|(reply, _)| normalize(reply) == key)
            .map(|(_, request)| request.as_str())
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        let key = normalize(name);
        self.ignored.iter().any(|n| normalize(n) == key)
    }

    pub fn is_reused_notification(&self, name: &str) -> bool {
        let key = normalize(name);
        self.reused_notifications.iter().any(|n| normalize(n) == key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Package of the hand-written framework interfaces (`JVpp`, `JVppReply`, ...).
    pub base_package:     String,
    /// Package the generated plugin sources belong to.
    pub plugin_package:   String,
    /// Short plugin name, `Core` dispatches through `JVppCore`.
    pub plugin_name:      String,
    pub dto_package:      String,
    pub callback_package: String,
    pub future_package:   String,
    /// Only quoted in generated javadoc.
    pub input_file:       String,
    pub naming:           NamingConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            base_package:     "io.fd.vpp.jvpp".to_string(),
            plugin_package:   "io.fd.vpp.jvpp.core".to_string(),
            plugin_name:      "Core".to_string(),
            dto_package:      "dto".to_string(),
            callback_package: "callback".to_string(),
            future_package:   "future".to_string(),
            input_file:       "vpe.api.json".to_string(),
            naming:           NamingConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(text: &str) -> Result<Self, GenError> {
        let config: GeneratorConfig =
            serde_json::from_str(text).map_err(|e| GenError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GenError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), GenError> {
        let packages = [
            ("base_package", &self.base_package),
            ("plugin_package", &self.plugin_package),
            ("dto_package", &self.dto_package),
            ("callback_package", &self.callback_package),
            ("future_package", &self.future_package),
        ];
        for (key, value) in packages {
            if !JAVA_PACKAGE.is_match(value) {
                return Err(GenError::Config(format!(
                    "{} \"{}\" is not a valid Java package name",
                    key, value
                )));
            }
        }
        if !JAVA_IDENTIFIER.is_match(&self.plugin_name) {
            return Err(GenError::Config(format!(
                "plugin_name \"{}\" is not a valid Java identifier",
                self.plugin_name
            )));
        }
        Ok(())
    }

    /// `io.fd.vpp.jvpp.dto.JVppReply` style reference into a framework package.
    pub fn base_type(&self, sub_package: &str, name: &str) -> String {
        format!("{}.{}.{}", self.base_package, sub_package, name)
    }

    /// Reference to a generated type in the plugin package.
    pub fn plugin_type(&self, sub_package: &str, name: &str) -> String {
        format!("{}.{}.{}", self.plugin_package, sub_package, name)
    }

    pub fn plugin_dto(&self, name: &str) -> String {
        self.plugin_type(&self.dto_package, name)
    }

    pub fn base_dto(&self, name: &str) -> String {
        self.base_type(&self.dto_package, name)
    }
}

/// Directories the three generators write into. All of them must exist
/// before any file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub callback_dir: PathBuf,
    pub dto_dir:      PathBuf,
    pub future_dir:   PathBuf,
}

impl OutputLayout {
    /// One directory per artifact sub-package below `root`.
    pub fn from_root<P: AsRef<Path>>(root: P, config: &GeneratorConfig) -> Self {
        let root = root.as_ref();
        let dir = |package: &str| root.join(package.replace('.', "/"));
        OutputLayout {
            callback_dir: dir(&config.callback_package),
            dto_dir:      dir(&config.dto_package),
            future_dir:   dir(&config.future_package),
        }
    }

    pub fn create_all(&self) -> Result<(), GenError> {
        for dir in [&self.callback_dir, &self.dto_dir, &self.future_dir] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_extend_builtin_tables() {
        let config = GeneratorConfig::from_json(
            r#"{
                "plugin_package": "io.fd.vpp.jvpp.acl",
                "plugin_name": "Acl",
                "naming": {
                    "unconventional_reply_request": {"bar_details": "foo"},
                    "ignored": ["legacy_thing"]
                }
            }"#,
        )
        .expect("config should parse");

        assert_eq!(config.plugin_name, "Acl");
        assert_eq!(config.dto_package, "dto");
        assert_eq!(config.naming.request_for("bar_details"), Some("foo"));
        assert_eq!(config.naming.request_for("cli_reply"), Some("cli_request"));
        assert!(config.naming.is_ignored("legacy_thing"));
        assert!(config.naming.is_ignored("is_address_reachable"));
    }

    #[test]
    fn lookups_ignore_casing() {
        let naming = NamingConfig::default();
        assert!(naming.is_ignored("IsAddressReachable"));
        assert!(naming.is_reused_notification("SwInterfaceSetFlags"));
        assert_eq!(naming.request_for("L2FibTableEntry"), Some("l2_fib_table"));
    }

    #[test]
    fn rejects_invalid_package() {
        let err = GeneratorConfig::from_json(r#"{"dto_package": "1dto"}"#).unwrap_err();
        assert!(matches!(err, GenError::Config(_)));
    }

    #[test]
    fn layout_follows_sub_packages() {
        let config = GeneratorConfig {
            future_package: "future.impl".to_string(),
            ..GeneratorConfig::default()
        };
        let layout = OutputLayout::from_root("/out", &config);
        assert_eq!(layout.dto_dir, PathBuf::from("/out/dto"));
        assert_eq!(layout.future_dir, PathBuf::from("/out/future/impl"));
    }
}
