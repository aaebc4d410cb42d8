use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use term_snake::game::{ConfigFile, GameConfig};
use term_snake::modes::HumanMode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "term_snake")]
#[command(version, about = "Snake on a wrap-around field, in the terminal")]
struct Cli {
    /// JSON config file; the flags below take precedence over it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Field side length in cells (default: config file, else terminal height)
    #[arg(long)]
    size: Option<usize>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Disable audio cues
    #[arg(long)]
    mute: bool,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.log_level)?;
    }

    let config = build_config(&cli, terminal_rows)?;
    config.validate().context("Invalid configuration")?;
    tracing::debug!(?config, "Configuration resolved");

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}

fn build_config(cli: &Cli, terminal_rows: impl FnOnce() -> Result<usize>) -> Result<GameConfig> {
    let (mut config, file_size) = match &cli.config {
        Some(path) => {
            let file = ConfigFile::load(path)?;
            (file.game, file.field_size)
        }
        None => (GameConfig::default(), None),
    };

    config.field_size = match cli.size.or(file_size) {
        Some(size) => size,
        None => terminal_rows()?,
    };
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.mute {
        config.sound = false;
    }

    Ok(config)
}

fn terminal_rows() -> Result<usize> {
    let (_, rows) = crossterm::terminal::size().context("Failed to read terminal size")?;
    Ok(rows as usize)
}

fn init_logging(path: &Path, level: Level) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("term_snake_{name}_{}.json", std::process::id()));
        std::fs::write(&path, json).unwrap();
        path
    }

    fn resolve(args: &[&str], rows: usize) -> GameConfig {
        let cli = Cli::parse_from(std::iter::once("term_snake").chain(args.iter().copied()));
        build_config(&cli, || Ok(rows)).unwrap()
    }

    #[test]
    fn test_terminal_height_without_config() {
        let config = resolve(&[], 33);
        assert_eq!(config.field_size, 33);
        assert_eq!(config.tick_interval_ms, 20);
    }

    #[test]
    fn test_config_without_size_uses_terminal_height() {
        let path = write_config("seed_only", r#"{ "seed": 7 }"#);
        let config = resolve(&["--config", path.to_str().unwrap()], 33);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.field_size, 33);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_size_precedence() {
        let path = write_config("sized", r#"{ "field_size": 25, "sound": false }"#);
        let arg = path.to_str().unwrap().to_string();

        let from_file = resolve(&["--config", &arg], 33);
        assert_eq!(from_file.field_size, 25);
        assert!(!from_file.sound);

        let from_flag = resolve(&["--config", &arg, "--size", "12"], 33);
        assert_eq!(from_flag.field_size, 12);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_flags_override_file() {
        let config = resolve(&["--size", "15", "--tick-ms", "50", "--seed", "3", "--mute"], 33);
        assert_eq!(config.field_size, 15);
        assert_eq!(config.tick_interval_ms, 50);
        assert_eq!(config.seed, Some(3));
        assert!(!config.sound);
    }

    #[test]
    fn test_terminal_only_queried_when_needed() {
        let cli = Cli::parse_from(["term_snake", "--size", "15"]);
        let config = build_config(&cli, || anyhow::bail!("no terminal")).unwrap();
        assert_eq!(config.field_size, 15);
    }
}
