use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pathsplit", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split path data into one path per shape.
    Decompose(PathSource),
    /// Print cluster geometry as JSON.
    Inspect(PathSource),
    /// Split every compound path in an SVG and label unlabeled drawables.
    Analyze(SvgArgs),
    /// Label unlabeled drawables in an SVG.
    AddIds(SvgArgs),
}

#[derive(Args, Debug)]
struct PathSource {
    /// Path data given inline.
    #[arg(long, conflicts_with = "in_path")]
    d: Option<String>,

    /// File holding path data.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Emit a JSON array instead of one path per line.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct SvgArgs {
    /// Input SVG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG (defaults to stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON file with analysis options.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Decompose(src) => cmd_decompose(src),
        Command::Inspect(src) => cmd_inspect(src),
        Command::Analyze(args) => cmd_svg(args, |doc, opts| doc.smart_analyze(opts)),
        Command::AddIds(args) => cmd_svg(args, |doc, opts| doc.add_ids_to_elements(opts)),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_path_data(src: &PathSource) -> anyhow::Result<String> {
    match (&src.d, &src.in_path) {
        (Some(d), _) => Ok(d.clone()),
        (None, Some(p)) => read_text(p),
        (None, None) => anyhow::bail!("either --d or --in is required"),
    }
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))
}

fn cmd_decompose(src: PathSource) -> anyhow::Result<()> {
    let d = read_path_data(&src)?;
    let parts = pathsplit::decompose(d.trim());
    if src.json {
        println!("{}", serde_json::to_string_pretty(&parts)?);
    } else {
        for p in &parts {
            println!("{p}");
        }
    }
    eprintln!("{} shape(s)", parts.len());
    Ok(())
}

fn cmd_inspect(src: PathSource) -> anyhow::Result<()> {
    let d = read_path_data(&src)?;
    let summary = pathsplit::summarize(d.trim());
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn cmd_svg(
    args: SvgArgs,
    run: impl FnOnce(&mut pathsplit::Document, &pathsplit::AnalyzeOpts) -> pathsplit::SplitResult<usize>,
) -> anyhow::Result<()> {
    let opts = match &args.config {
        Some(p) => pathsplit::AnalyzeOpts::from_json(&read_text(p)?)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => pathsplit::AnalyzeOpts::default(),
    };

    let text = read_text(&args.in_path)?;
    let mut doc = pathsplit::parse_svg(&text)
        .with_context(|| format!("parse svg '{}'", args.in_path.display()))?;
    let changes = run(&mut doc, &opts)?;
    let out = doc.to_svg_string();

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, out).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {} ({changes} change(s))", path.display());
        }
        None => {
            println!("{out}");
            eprintln!("{changes} change(s)");
        }
    }
    Ok(())
}
