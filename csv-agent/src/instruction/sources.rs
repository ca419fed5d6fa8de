//! Concrete instruction sources: environment override, local prompt
//! directory, and the remote prompt-template REST API.
//!
//! Each source is stateless between attempts. The REST source enforces a
//! per-request timeout so a hung endpoint cannot stall the whole chain.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::instruction::resolver::InstructionSource;
use crate::io::config::AgentConfig;

/// Reads the instruction from an environment variable override.
pub struct EnvSource {
    var: String,
}

impl EnvSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl InstructionSource for EnvSource {
    fn name(&self) -> &str {
        "env"
    }

    fn attempt(&self, _target: &str) -> Result<Option<String>> {
        match env::var(&self.var) {
            Ok(text) if !text.trim().is_empty() => Ok(Some(text)),
            _ => Ok(None),
        }
    }
}

/// Reads `<dir>/<target>.txt` from a local prompt cache directory.
pub struct PromptDirSource {
    dir: PathBuf,
}

impl PromptDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl InstructionSource for PromptDirSource {
    fn name(&self) -> &str {
        "prompt-dir"
    }

    fn attempt(&self, target: &str) -> Result<Option<String>> {
        let path = self.dir.join(format!("{target}.txt"));
        if !path.exists() {
            debug!(path = %path.display(), "no cached prompt file");
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("read prompt {}", path.display()))?;
        Ok(Some(contents))
    }
}

/// Fetches a prompt template over HTTP.
///
/// Expects a JSON body carrying the text under `promptTemplate.text` or a
/// top-level `content` field. The bearer token is read from an environment
/// variable at attempt time, never stored.
pub struct RestApiSource {
    client: reqwest::blocking::Client,
    base_url: String,
    project: String,
    location: String,
    token_var: String,
}

impl RestApiSource {
    pub fn new(
        base_url: impl Into<String>,
        project: impl Into<String>,
        location: impl Into<String>,
        token_var: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            project: project.into(),
            location: location.into(),
            token_var: token_var.into(),
        })
    }

    fn template_url(&self, target: &str) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/promptTemplates/{}",
            self.base_url.trim_end_matches('/'),
            self.project,
            self.location,
            target
        )
    }
}

impl InstructionSource for RestApiSource {
    fn name(&self) -> &str {
        "rest-api"
    }

    #[instrument(skip(self))]
    fn attempt(&self, target: &str) -> Result<Option<String>> {
        let token = env::var(&self.token_var)
            .with_context(|| format!("missing token env var {}", self.token_var))?;
        let url = self.template_url(target);
        debug!(url = %url, "requesting prompt template");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .context("request prompt template")?;
        if !response.status().is_success() {
            return Err(anyhow!(
                "prompt template request returned {}",
                response.status()
            ));
        }

        let body: Value = response.json().context("parse prompt template response")?;
        Ok(extract_instruction_text(&body))
    }
}

/// Pull instruction text out of a prompt-template response body.
pub(crate) fn extract_instruction_text(body: &Value) -> Option<String> {
    let text = body
        .pointer("/promptTemplate/text")
        .or_else(|| body.get("content"))
        .and_then(Value::as_str)?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Build the configured source chain, in configured order.
pub fn build_sources(config: &AgentConfig) -> Result<Vec<Box<dyn InstructionSource>>> {
    let mut sources: Vec<Box<dyn InstructionSource>> = Vec::new();
    for name in &config.sources {
        match name.as_str() {
            "env" => sources.push(Box::new(EnvSource::new(&config.instruction_env))),
            "prompt-dir" => sources.push(Box::new(PromptDirSource::new(&config.prompt_dir))),
            "rest-api" => sources.push(Box::new(RestApiSource::new(
                &config.endpoint,
                &config.project,
                &config.location,
                &config.token_env,
                Duration::from_secs(config.request_timeout_secs),
            )?)),
            other => return Err(anyhow!("unknown instruction source {other:?}")),
        }
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_prompt_template_text() {
        let body = json!({"promptTemplate": {"text": "do the thing"}});
        assert_eq!(
            extract_instruction_text(&body),
            Some("do the thing".to_string())
        );
    }

    #[test]
    fn falls_back_to_content_field() {
        let body = json!({"content": "alternate shape"});
        assert_eq!(
            extract_instruction_text(&body),
            Some("alternate shape".to_string())
        );
    }

    #[test]
    fn blank_or_missing_text_is_no_signal() {
        assert_eq!(extract_instruction_text(&json!({"content": "  "})), None);
        assert_eq!(extract_instruction_text(&json!({"other": "x"})), None);
        assert_eq!(
            extract_instruction_text(&json!({"promptTemplate": {"text": 7}})),
            None
        );
    }

    #[test]
    fn template_url_joins_identifiers() {
        let source = RestApiSource::new(
            "https://example.test/",
            "proj-1",
            "us-central1",
            "UNSET_TOKEN_VAR",
            Duration::from_secs(1),
        )
        .expect("source");
        assert_eq!(
            source.template_url("csv_json_converter"),
            "https://example.test/v1/projects/proj-1/locations/us-central1/promptTemplates/csv_json_converter"
        );
    }

    #[test]
    fn rest_attempt_without_token_is_a_recoverable_error() {
        let source = RestApiSource::new(
            "https://example.test",
            "proj-1",
            "us-central1",
            "CSV_AGENT_TEST_NO_SUCH_TOKEN",
            Duration::from_secs(1),
        )
        .expect("source");
        let err = source.attempt("csv_json_converter").expect_err("no token");
        assert!(err.to_string().contains("missing token env var"));
    }

    #[test]
    fn prompt_dir_source_reads_cached_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("csv_json_converter.txt"), "cached text")
            .expect("write prompt");

        let source = PromptDirSource::new(temp.path());
        assert_eq!(
            source.attempt("csv_json_converter").expect("attempt"),
            Some("cached text".to_string())
        );
        assert_eq!(source.attempt("other_agent").expect("attempt"), None);
    }

    #[test]
    fn unset_env_variable_is_no_signal() {
        // The set path is covered by the CLI integration test, which can
        // pass environment to a child process without mutating its own.
        let source = EnvSource::new("CSV_AGENT_TEST_ENV_SOURCE_UNSET");
        assert_eq!(source.attempt("x").expect("attempt"), None);
    }
}
