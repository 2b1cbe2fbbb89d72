use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rasterkit::{ImageManager, ManagerOpts, Session};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "rasterkit", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Seed for mosaic placement (omit for a random seed).
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a command script (stdin when --file is omitted).
    Script(ScriptArgs),
    /// Apply one operation to an image file and write the result.
    Apply(ApplyArgs),
    /// Print per-channel histograms of an image as JSON.
    Histogram(HistogramArgs),
}

#[derive(Args, Debug)]
struct ScriptArgs {
    /// Script file, one command per line.
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ApplyArgs {
    /// Operation name, e.g. `blur`, `brighten`, `mosaic`.
    op: String,

    /// Input image (.ppm, .png, .jpg, .jpeg, .bmp).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image; format from the extension.
    #[arg(long)]
    out: PathBuf,

    /// Integer argument for `brighten` (increment) or `mosaic` (seed count).
    #[arg(long, allow_hyphen_values = true)]
    arg: Option<String>,
}

#[derive(Args, Debug)]
struct HistogramArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,
}

const SOURCE: &str = "input";
const RESULT: &str = "output";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let mut manager = ImageManager::new(ManagerOpts {
        rng_seed: cli.global.seed,
    });
    match cli.cmd {
        Command::Script(args) => cmd_script(&mut manager, args),
        Command::Apply(args) => cmd_apply(&mut manager, args),
        Command::Histogram(args) => cmd_histogram(&mut manager, args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_script(manager: &mut ImageManager, args: ScriptArgs) -> anyhow::Result<()> {
    let input: Box<dyn BufRead> = match &args.file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("open script '{}'", path.display()))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };

    let stdout = std::io::stdout();
    let mut session = Session::new(manager, stdout.lock());
    let summary = session.run(input)?;
    tracing::info!(
        executed = summary.executed,
        failed = summary.failed,
        "script finished"
    );
    eprintln!(
        "{} command(s) ran, {} failed",
        summary.executed, summary.failed
    );
    Ok(())
}

fn cmd_apply(manager: &mut ImageManager, args: ApplyArgs) -> anyhow::Result<()> {
    manager.load(&args.in_path, SOURCE)?;
    let op_args: Vec<&str> = args.arg.as_deref().into_iter().collect();
    manager.transform(&args.op, &op_args, SOURCE, RESULT)?;
    manager.save(RESULT, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_histogram(manager: &mut ImageManager, args: HistogramArgs) -> anyhow::Result<()> {
    manager.load(&args.in_path, SOURCE)?;
    let histogram = manager.histogram(SOURCE)?;
    println!("{}", serde_json::to_string_pretty(&histogram)?);
    Ok(())
}
