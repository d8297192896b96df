use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::issues::{Rule, Severity};

pub const CONFIG_FILE_NAME: &str = ".mocklintrc.json";

/// Reporting level for a single rule, mirroring eslint's rule levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

impl RuleLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleLevel::Off => "off",
            RuleLevel::Warn => "warn",
            RuleLevel::Error => "error",
        }
    }

    /// Severity for issues produced under this level, `None` when disabled.
    pub fn severity(self) -> Option<Severity> {
        match self {
            RuleLevel::Off => None,
            RuleLevel::Warn => Some(Severity::Warning),
            RuleLevel::Error => Some(Severity::Error),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_mocks_root")]
    pub mocks_root: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_bundle")]
    pub bundle: String,
    #[serde(default = "default_bundle_name")]
    pub bundle_name: String,
    /// Keys that are allowed to be missing from the bundle, e.g. keys
    /// served from another bundle.
    #[serde(default)]
    pub ignore_keys: Vec<String>,
    #[serde(default = "default_identifier_anchor")]
    pub identifier_anchor: Option<String>,
    #[serde(default = "default_rules")]
    pub rules: BTreeMap<String, RuleLevel>,
}

fn default_mocks_root() -> String {
    "./mocks".to_string()
}

fn default_bundle() -> String {
    "./i18n/login.json".to_string()
}

fn default_bundle_name() -> String {
    "login.properties".to_string()
}

fn default_identifier_anchor() -> Option<String> {
    Some("idp/idx/".to_string())
}

fn default_rules() -> BTreeMap<String, RuleLevel> {
    [Rule::MissingI18nKey, Rule::MissingBundleEntry]
        .iter()
        .map(|rule| (rule.to_string(), RuleLevel::Error))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mocks_root: default_mocks_root(),
            includes: Vec::new(),
            ignores: Vec::new(),
            bundle: default_bundle(),
            bundle_name: default_bundle_name(),
            ignore_keys: Vec::new(),
            identifier_anchor: default_identifier_anchor(),
            rules: default_rules(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid,
    /// or if `rules` names a rule that does not exist.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        for name in self.rules.keys() {
            // Parse errors are always reported as errors
            if !matches!(
                Rule::from_name(name),
                Some(Rule::MissingI18nKey | Rule::MissingBundleEntry)
            ) {
                anyhow::bail!("Unknown rule in 'rules': \"{}\"", name);
            }
        }

        Ok(())
    }

    /// Configured level for `rule`. Rules not listed default to `error`.
    pub fn rule_level(&self, rule: Rule) -> RuleLevel {
        self.rules
            .get(&rule.to_string())
            .copied()
            .unwrap_or(RuleLevel::Error)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
