use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "goldenframe", version)]
struct Cli {
    /// Log verbosity (written to stderr).
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the original and golden-ratio panels of an image as PNGs.
    Render(RenderArgs),
    /// Print the golden decomposition of a box as JSON.
    Geometry(GeometryArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory for `<stem>.original.png` and `<stem>.golden.png`.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON render config; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config's longest panel side.
    #[arg(long)]
    max_side: Option<f64>,

    /// Treat the input as dropped: refuse it unless its extension names an image type.
    #[arg(long)]
    dropped: bool,
}

#[derive(Parser, Debug)]
struct GeometryArgs {
    #[arg(long)]
    width: f64,

    #[arg(long)]
    height: f64,

    /// Orientation of the original image; defaults to the box's own aspect.
    #[arg(long, value_enum)]
    orientation: Option<OrientationChoice>,

    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrientationChoice {
    Landscape,
    Portrait,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Geometry(args) => cmd_geometry(args),
    }
}

fn load_config(args: &RenderArgs) -> anyhow::Result<goldenframe::RenderConfig> {
    let mut cfg = match &args.config {
        Some(path) => goldenframe::RenderConfig::from_json_path(path)?,
        None => goldenframe::RenderConfig::default(),
    };
    if let Some(max_side) = args.max_side {
        cfg.max_side = max_side;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    let via = if args.dropped {
        goldenframe::UploadVia::Dropped
    } else {
        goldenframe::UploadVia::Picked
    };

    let upload = goldenframe::Upload::from_path(&args.in_path, via)?;
    let mut session = goldenframe::Session::new();
    let ticket = session
        .submit(&upload)
        .with_context(|| format!("refused '{}'", args.in_path.display()))?;
    let outcome = goldenframe::process_image(&upload.bytes, &cfg);
    session.complete(ticket, outcome);

    let presentation = match session.state() {
        goldenframe::SessionState::Presented(p) => p,
        goldenframe::SessionState::Failed(msg) => {
            anyhow::bail!("{}: {msg}", args.in_path.display())
        }
        other => anyhow::bail!("load did not settle (state {other:?})"),
    };

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let stem = file_stem(&args.in_path);
    let original_path = args.out_dir.join(format!("{stem}.original.png"));
    let golden_path = args.out_dir.join(format!("{stem}.golden.png"));
    presentation.original.save_png(&original_path)?;
    presentation.golden.save_png(&golden_path)?;

    for line in presentation.status_lines() {
        println!("{line}");
    }
    eprintln!("wrote {}", original_path.display());
    eprintln!("wrote {}", golden_path.display());
    Ok(())
}

fn cmd_geometry(args: GeometryArgs) -> anyhow::Result<()> {
    let orientation = match args.orientation {
        Some(OrientationChoice::Landscape) => goldenframe::Orientation::Landscape,
        Some(OrientationChoice::Portrait) => goldenframe::Orientation::Portrait,
        None => goldenframe::Orientation::from_dimensions(args.width, args.height),
    };
    let rect = goldenframe::Rect::new(0.0, 0.0, args.width, args.height);
    let decomposition = goldenframe::decompose(rect, orientation)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&decomposition)
    } else {
        serde_json::to_string(&decomposition)
    }
    .context("serialize decomposition")?;
    println!("{json}");
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "image".to_owned())
}
