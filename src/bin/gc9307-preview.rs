use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::Level;

use gc9307_preview::{manifest_json, BuiltinSet, GeneratedAsset, RenderConfig};

#[derive(Parser, Debug)]
#[command(name = "gc9307-preview", version, about)]
struct Cli {
    /// What to generate (default: every built-in set).
    #[command(subcommand)]
    cmd: Option<Command>,

    /// Repository root that output directories are resolved against.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Print a JSON manifest of generated files to stdout.
    #[arg(long, global = true)]
    manifest: bool,

    /// Encode everything but do not write files.
    #[arg(long, global = true)]
    dry_run: bool,

    /// Log each layout and file at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every built-in set.
    All,
    /// Normal UI previews.
    NormalUi,
    /// Network toast previews.
    NetworkToast,
    /// Action toast previews and click auditions.
    Actions,
    /// Firmware prompt tone auditions.
    Tones,
    /// A custom set described in YAML.
    #[cfg(feature = "config")]
    Custom {
        /// YAML file describing frames and clips.
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    let mut config = RenderConfig::default().with_root(&cli.root);
    if cli.dry_run {
        config = config.dry_run();
    }

    let written = match cli.cmd.unwrap_or(Command::All) {
        Command::All => gc9307_preview::generate_all(&config)?,
        Command::NormalUi => BuiltinSet::NormalUi.generate(&config)?,
        Command::NetworkToast => BuiltinSet::NetworkToast.generate(&config)?,
        Command::Actions => BuiltinSet::Actions.generate(&config)?,
        Command::Tones => BuiltinSet::Tones.generate(&config)?,
        #[cfg(feature = "config")]
        Command::Custom { config: path } => {
            let custom = gc9307_preview::PreviewConfig::load(&path)
                .with_context(|| format!("load preview config '{}'", path.display()))?;
            custom
                .generate(&config)
                .with_context(|| format!("generate custom set '{}'", path.display()))?
        }
    };

    summarize(&written);
    if cli.manifest {
        println!("{}", manifest_json(&written).context("serialize manifest")?);
    }
    Ok(())
}

fn summarize(written: &[GeneratedAsset]) {
    let bytes: usize = written.iter().map(|a| a.bytes).sum();
    tracing::info!("{} files, {} bytes", written.len(), bytes);
}
