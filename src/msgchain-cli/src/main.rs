// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

mod config;
mod handlers;
mod sample;

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;

use msgchain_app::init_logging;
use msgchain_core::{DynResult, MessageManager, ReportFormat};
use msgchain_payload::PayloadPolicy;

use config::RelayConfig;
use handlers::build_default_chain;
use sample::SAMPLE_TRANSMISSION;

const PKG_DESCRIPTION: &str = concat!(env!("CARGO_PKG_NAME"), " - ", env!("CARGO_PKG_DESCRIPTION"));

#[derive(Debug, Parser)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = PKG_DESCRIPTION,
)]
struct Cli {
    /// Path to configuration file
    #[arg(long = "config", short = 'C', value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print example configuration and exit
    #[arg(long = "print-config")]
    print_config: bool,
    /// File with one message per line ("-" reads stdin)
    #[arg(value_name = "INPUT", conflicts_with = "sample")]
    input: Option<PathBuf>,
    /// Classify the built-in sample transmission
    #[arg(long = "sample")]
    sample: bool,
    /// Report format
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<FormatKind>,
    /// How JSON objects without a string "message" field are reported
    #[arg(long = "payload-policy", value_enum)]
    payload_policy: Option<PolicyKind>,
    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "log-level")]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatKind {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyKind {
    Strict,
    Lenient,
}

/// Where messages are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum InputSource {
    Sample,
    Stdin,
    File(PathBuf),
}

/// Resolved configuration after merging config file and CLI arguments.
#[derive(Debug)]
struct ResolvedConfig {
    input: InputSource,
    format: ReportFormat,
    policy: PayloadPolicy,
    log_level: Option<String>,
}

fn resolve_config(cli: &Cli, cfg: &RelayConfig) -> DynResult<ResolvedConfig> {
    let input = if cli.sample {
        InputSource::Sample
    } else {
        match cli.input.clone().or_else(|| cfg.input.path.clone()) {
            Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
            Some(path) => InputSource::File(path),
            None => {
                return Err(
                    "No input specified. Pass INPUT ('-' for stdin), --sample, or set [input].path in config."
                        .into(),
                )
            }
        }
    };

    let format = match cli.format {
        Some(FormatKind::Text) => ReportFormat::Text,
        Some(FormatKind::Json) => ReportFormat::Json,
        None => cfg.output.format,
    };
    let policy = match cli.payload_policy {
        Some(PolicyKind::Strict) => PayloadPolicy::Strict,
        Some(PolicyKind::Lenient) => PayloadPolicy::Lenient,
        None => cfg.payload.policy,
    };
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| cfg.general.log_level.clone());

    Ok(ResolvedConfig {
        input,
        format,
        policy,
        log_level,
    })
}

fn read_input(source: &InputSource) -> DynResult<String> {
    match source {
        InputSource::Sample => Ok(SAMPLE_TRANSMISSION.to_string()),
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        InputSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read input {}: {}", path.display(), e).into()),
    }
}

fn main() -> DynResult<()> {
    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", RelayConfig::example_toml());
        return Ok(());
    }

    let (cfg, config_path) = if let Some(ref path) = cli.config {
        let cfg = RelayConfig::load_from_file(path)?;
        (cfg, Some(path.clone()))
    } else {
        RelayConfig::load_from_default_paths()?
    };
    cfg.validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    let resolved = resolve_config(&cli, &cfg)?;
    init_logging(resolved.log_level.as_deref());

    if let Some(ref path) = config_path {
        info!("Loaded configuration from {}", path.display());
    }
    info!(
        "Starting msgchain (input: {:?}, format: {:?}, payload policy: {:?})",
        resolved.input, resolved.format, resolved.policy
    );

    let chain = build_default_chain(resolved.policy)?;
    let manager = MessageManager::new(chain, resolved.format);

    let input = read_input(&resolved.input)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    manager.dispatch_all(&input, &mut out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["msgchain"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut cfg = RelayConfig::default();
        cfg.input.path = Some(PathBuf::from("from-config.txt"));
        cfg.output.format = ReportFormat::Json;
        cfg.payload.policy = PayloadPolicy::Lenient;
        cfg.general.log_level = Some("warn".to_string());

        let resolved = resolve_config(
            &cli(&["-f", "text", "--payload-policy", "strict", "-l", "debug", "in.txt"]),
            &cfg,
        )
        .unwrap();
        assert_eq!(resolved.input, InputSource::File(PathBuf::from("in.txt")));
        assert_eq!(resolved.format, ReportFormat::Text);
        assert_eq!(resolved.policy, PayloadPolicy::Strict);
        assert_eq!(resolved.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let mut cfg = RelayConfig::default();
        cfg.input.path = Some(PathBuf::from("-"));
        cfg.output.format = ReportFormat::Json;

        let resolved = resolve_config(&cli(&[]), &cfg).unwrap();
        assert_eq!(resolved.input, InputSource::Stdin);
        assert_eq!(resolved.format, ReportFormat::Json);
        assert_eq!(resolved.policy, PayloadPolicy::Strict);
        assert_eq!(resolved.log_level, None);
    }

    #[test]
    fn test_missing_input_is_error() {
        let err = resolve_config(&cli(&[]), &RelayConfig::default()).unwrap_err();
        assert!(err.to_string().contains("No input specified"));
    }

    #[test]
    fn test_sample_flag() {
        let resolved = resolve_config(&cli(&["--sample"]), &RelayConfig::default()).unwrap();
        assert_eq!(resolved.input, InputSource::Sample);
        assert_eq!(read_input(&resolved.input).unwrap(), SAMPLE_TRANSMISSION);
        assert!(Cli::try_parse_from(["msgchain", "--sample", "in.txt"]).is_err());
    }

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("downlink.txt");
        std::fs::write(&path, "VYYR 1 1.5 0\n").unwrap();
        assert_eq!(
            read_input(&InputSource::File(path)).unwrap(),
            "VYYR 1 1.5 0\n"
        );

        let missing = dir.path().join("absent.txt");
        let err = read_input(&InputSource::File(missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read input"));
    }

    #[test]
    fn test_sample_dispatch_end_to_end() {
        let manager = MessageManager::new(
            build_default_chain(PayloadPolicy::Strict).unwrap(),
            ReportFormat::Text,
        );
        let mut out = Vec::new();
        let summary = manager.dispatch_all(SAMPLE_TRANSMISSION, &mut out).unwrap();
        assert_eq!(summary.matched, 4);
        assert_eq!(summary.unrecognized, 1);
        assert_eq!(summary.malformed, 0);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Voyager 1 is 3456123.234 million km away",
                "Voyager 2 is 4013225.909 million km away",
                "UNRECOGNIZED: no registered handler accepts this message: ---FAKE MESSAGE---FAKE MESSAGE---",
                "Orion: Testing",
                "Perseverance: sol 668, 12.5° at the surface, humidity 4, wind 35.92",
            ]
        );
    }
}
