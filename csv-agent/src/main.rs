//! CSV to JSON conversion agent CLI.
//!
//! Thin command layer over the library: conversion and analysis results are
//! printed as structured JSON, router reports and resolved instructions as
//! plain text. Failures reach the user as readable messages with stable
//! exit codes, never as raw stack traces.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use csv_agent::agent::build_responder;
use csv_agent::core::NO_DATA;
use csv_agent::core::convert::OutputFormat;
use csv_agent::exit_codes;
use csv_agent::instruction::sources::build_sources;
use csv_agent::instruction::{InstructionResolver, ResolvedInstruction};
use csv_agent::io::config::{AgentConfig, load_config, write_config};
use csv_agent::logging;
use csv_agent::tools::{analyze_csv, csv_to_json};

#[derive(Parser)]
#[command(name = "csv-agent", version, about = "CSV to JSON conversion agent")]
struct Cli {
    /// Path to the agent config file.
    #[arg(long, default_value = "agent.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Convert delimited text (file or stdin) to JSON.
    Convert {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
        /// Output payload shape.
        #[arg(long, value_enum, default_value_t = OutputFormat::Array)]
        format: OutputFormat,
    },
    /// Report structure metadata for delimited text (file or stdin).
    Analyze {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Route a free-form query and print the agent's report.
    Ask {
        /// Query text; reads stdin when omitted.
        input: Option<String>,
    },
    /// Resolve and print the governing instruction text.
    Instruction {
        /// Agent name to resolve; defaults to the configured agent.
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Convert { file, format } => cmd_convert(file.as_deref(), format),
        Command::Analyze { file } => cmd_analyze(file.as_deref()),
        Command::Ask { input } => cmd_ask(&cli.config, input),
        Command::Instruction { name } => cmd_instruction(&cli.config, name.as_deref()),
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if path.exists() && !force {
        println!("config already exists at {}", path.display());
        return Ok(exit_codes::OK);
    }
    write_config(path, &AgentConfig::default())?;
    println!("wrote {}", path.display());
    Ok(exit_codes::OK)
}

fn cmd_convert(file: Option<&Path>, format: OutputFormat) -> Result<i32> {
    let input = read_input(file)?;
    let result = csv_to_json(&input, format);
    print_json(&result)?;
    Ok(outcome_code(result.success, result.error.as_deref()))
}

fn cmd_analyze(file: Option<&Path>) -> Result<i32> {
    let input = read_input(file)?;
    let result = analyze_csv(&input);
    print_json(&result)?;
    Ok(outcome_code(result.success, result.error.as_deref()))
}

fn cmd_ask(config_path: &Path, input: Option<String>) -> Result<i32> {
    let input = match input {
        Some(text) => text,
        None => read_input(None)?,
    };
    let config = load_config(config_path)?;
    let instruction = resolve_instruction(&config, &config.agent_name)?;
    let responder = build_responder(&config.agent_name, instruction, None);
    println!("{}", responder.respond(&input));
    Ok(exit_codes::OK)
}

fn cmd_instruction(config_path: &Path, name: Option<&str>) -> Result<i32> {
    let config = load_config(config_path)?;
    let target = name.unwrap_or(&config.agent_name);
    let resolved = resolve_instruction(&config, target)?;
    println!("{}", resolved.text);
    Ok(exit_codes::OK)
}

fn resolve_instruction(config: &AgentConfig, target: &str) -> Result<ResolvedInstruction> {
    let sources = build_sources(config).context("build instruction sources")?;
    Ok(InstructionResolver::new(sources).resolve(target))
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

/// Serialize a result to pretty-printed JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize result")?;
    println!("{payload}");
    Ok(())
}

/// Structured failures map to stable codes: zero-row tables are
/// distinguishable from malformed input.
fn outcome_code(success: bool, error: Option<&str>) -> i32 {
    if success {
        exit_codes::OK
    } else if error == Some(NO_DATA) {
        exit_codes::NO_DATA
    } else {
        exit_codes::INVALID
    }
}
