use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use flipbook::{CompositorConfig, EffectKind, Manifest, Size, SequenceRequest};

#[derive(Parser, Debug)]
#[command(name = "flipbook", version)]
struct Cli {
    /// Log filter (overrides `RUST_LOG`), e.g. `debug` or `flipbook=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a manifest to an animated GIF.
    Render(RenderArgs),
    /// Write one timeline frame as a PNG.
    Frame(FrameArgs),
    /// List recognized effects and their frame counts.
    Effects,
}

#[derive(clap::Args, Debug)]
struct SequenceArgs {
    /// Input manifest JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Compositor config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Normalization width bound (overrides manifest and config).
    #[arg(long)]
    max_width: Option<u32>,

    /// Normalization height bound (overrides manifest and config).
    #[arg(long)]
    max_height: Option<u32>,

    /// Start from the 64x64 legacy profile instead of the defaults.
    #[arg(long)]
    legacy_size: bool,

    /// Generate entries on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    seq: SequenceArgs,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    seq: SequenceArgs,

    /// Timeline frame index (0-based).
    #[arg(long)]
    index: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Effects => cmd_effects(),
    }
}

fn init_logging(level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn load(args: &SequenceArgs) -> anyhow::Result<(SequenceRequest, CompositorConfig)> {
    let mut config = match &args.config {
        Some(path) => CompositorConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => CompositorConfig::default(),
    };
    if args.legacy_size {
        config.max_size = flipbook::config::LEGACY_MAX_SIZE;
    }

    let manifest = Manifest::from_path(&args.in_path)
        .with_context(|| format!("load manifest '{}'", args.in_path.display()))?;
    let mut config = manifest.apply_to(&config);
    config.max_size = Size::new(
        args.max_width.unwrap_or(config.max_size.width),
        args.max_height.unwrap_or(config.max_size.height),
    );
    if args.parallel {
        config.threading.parallel = true;
    }
    if args.threads.is_some() {
        config.threading.threads = args.threads;
    }
    config.validate().context("invalid compositor settings")?;

    let base_dir = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let request = manifest
        .load_request(base_dir, &config)
        .with_context(|| format!("load images for '{}'", args.in_path.display()))?;
    Ok((request, config))
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (request, config) = load(&args.seq)?;
    let timeline = flipbook::assemble(&request, &config)?;
    let bytes = flipbook::encode_gif(&timeline)?;

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("write gif '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} frames, {}x{}, {} ms)",
        args.out.display(),
        timeline.len(),
        timeline.canvas().side,
        timeline.canvas().side,
        timeline.total_duration_ms()
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (request, config) = load(&args.seq)?;
    let timeline = flipbook::assemble(&request, &config)?;
    let frame = timeline.frames().get(args.index).with_context(|| {
        format!(
            "frame index {} out of range (timeline has {} frames)",
            args.index,
            timeline.len()
        )
    })?;

    ensure_parent_dir(&args.out)?;
    frame
        .image()
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_effects() -> anyhow::Result<()> {
    for kind in EffectKind::ALL {
        println!("{:<16} {:>3} frames", kind.name(), kind.frame_count());
    }
    Ok(())
}
