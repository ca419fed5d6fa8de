//! Agent configuration stored as a TOML file next to the invocation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Known instruction source names, in their default chain order.
const KNOWN_SOURCES: [&str; 3] = ["env", "prompt-dir", "rest-api"];

/// Agent configuration (TOML).
///
/// This file is intended to be edited by humans and must remain stable and
/// automatable. Missing fields default to sensible values; a missing file
/// is equivalent to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AgentConfig {
    /// Agent name used for instruction lookup and fallback registration.
    pub agent_name: String,

    /// Opaque project identifier passed through to instruction sources.
    pub project: String,

    /// Opaque location identifier passed through to instruction sources.
    pub location: String,

    /// Base URL of the remote prompt-template endpoint.
    pub endpoint: String,

    /// Environment variable holding the bearer token for the REST source.
    pub token_env: String,

    /// Environment variable that can override the instruction outright.
    pub instruction_env: String,

    /// Local prompt cache directory for the `prompt-dir` source.
    pub prompt_dir: PathBuf,

    /// Instruction sources, tried in order. Known names: `env`,
    /// `prompt-dir`, `rest-api`.
    pub sources: Vec<String>,

    /// Per-request timeout for remote source attempts, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent_name: "csv_json_converter".to_string(),
            project: String::new(),
            location: "us-central1".to_string(),
            endpoint: "https://us-central1-aiplatform.googleapis.com".to_string(),
            token_env: "CSV_AGENT_TOKEN".to_string(),
            instruction_env: "CSV_AGENT_INSTRUCTION".to_string(),
            prompt_dir: PathBuf::from("prompts"),
            sources: KNOWN_SOURCES.iter().map(|s| s.to_string()).collect(),
            request_timeout_secs: 10,
        }
    }
}

impl AgentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.agent_name.trim().is_empty() {
            return Err(anyhow!("agent_name must be non-empty"));
        }
        if self.sources.is_empty() {
            return Err(anyhow!("sources must list at least one instruction source"));
        }
        for source in &self.sources {
            if !KNOWN_SOURCES.contains(&source.as_str()) {
                return Err(anyhow!(
                    "unknown instruction source {source:?} (known: {})",
                    KNOWN_SOURCES.join(", ")
                ));
            }
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("request_timeout_secs must be > 0"));
        }
        if self.sources.iter().any(|s| s == "rest-api") && self.endpoint.trim().is_empty() {
            return Err(anyhow!("endpoint must be set when the rest-api source is enabled"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AgentConfig::default()`.
pub fn load_config(path: &Path) -> Result<AgentConfig> {
    if !path.exists() {
        let config = AgentConfig::default();
        config.validate()?;
        return Ok(config);
    }
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: AgentConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, config: &AgentConfig) -> Result<()> {
    config.validate()?;
    let mut buf = toml::to_string_pretty(config).context("serialize config toml")?;
    buf.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, &buf)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(config, AgentConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("agent.toml");

        let mut config = AgentConfig::default();
        config.project = "proj-42".to_string();
        config.sources = vec!["env".to_string(), "prompt-dir".to_string()];
        write_config(&path, &config).expect("write");

        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("agent.toml");
        fs::write(&path, "agent_name = \"other_agent\"\n").expect("write");

        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded.agent_name, "other_agent");
        assert_eq!(loaded.location, AgentConfig::default().location);
    }

    #[test]
    fn unknown_source_is_rejected() {
        let config = AgentConfig {
            sources: vec!["carrier-pigeon".to_string()],
            ..AgentConfig::default()
        };
        let err = config.validate().expect_err("invalid");
        assert!(err.to_string().contains("unknown instruction source"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = AgentConfig {
            request_timeout_secs: 0,
            ..AgentConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
