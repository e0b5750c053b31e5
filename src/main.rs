//! Preview CLI: classify a piece of text and print the composed voice
//! directive as JSON, without touching any synthesis engine.

use anyhow::{bail, Context, Result};
use emovox::pipeline::{InstructionSynthesizer, ProfileSelector};
use emovox::EmovoxConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: emovox [--personality NAME] [--context TEXT] [--remote] [--config PATH] <text>";

struct Args {
    text: String,
    personality: String,
    context: Option<String>,
    prefer_remote: bool,
    config_path: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut text = None;
    let mut personality = "kai".to_string();
    let mut context = None;
    let mut prefer_remote = false;
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--personality" => {
                personality = args.next().context("--personality needs a value")?;
            }
            "--context" => {
                context = Some(args.next().context("--context needs a value")?);
            }
            "--remote" => prefer_remote = true,
            "--config" => {
                config_path = Some(PathBuf::from(
                    args.next().context("--config needs a value")?,
                ));
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other => {
                if text.is_some() {
                    bail!("unexpected argument '{}'\n{}", other, USAGE);
                }
                text = Some(other.to_string());
            }
        }
    }

    Ok(Args {
        text: text.with_context(|| USAGE.to_string())?,
        personality,
        context,
        prefer_remote,
        config_path,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let config_path = args
        .config_path
        .unwrap_or_else(EmovoxConfig::default_path);
    let config = EmovoxConfig::load(&config_path);

    let registry = Arc::new(config.build_registry()?);
    let synthesizer = InstructionSynthesizer::new(registry, config.build_classifier());

    let directive = synthesizer
        .classify_and_compose(
            &args.text,
            args.context.as_deref(),
            ProfileSelector::Named(args.personality),
            args.prefer_remote || config.prefer_remote,
        )
        .await?;

    println!("{}", serde_json::to_string_pretty(&directive)?);
    Ok(())
}
