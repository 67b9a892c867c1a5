use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tryon", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite a product image onto a model image and write a JPEG.
    Compose(ComposeArgs),
    /// Print the region, style, placement profile and enhanced prompt for an instruction.
    Classify(ClassifyArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Product image (JPEG/PNG/WebP).
    #[arg(long)]
    product: PathBuf,

    /// Model image (JPEG/PNG/WebP).
    #[arg(long)]
    model: PathBuf,

    /// Placement instruction, e.g. "ayakkabıyı modelin ayağına yerleştir".
    #[arg(long)]
    prompt: String,

    /// Output file, or a directory to receive `<prefix>-<timestamp>.jpg`.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Filename prefix used when `--out` is a directory.
    #[arg(long, default_value = "eticaret-urun-gorseli")]
    prefix: String,

    /// JSON file with compositing options; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also print the result as a `data:` URI on stdout.
    #[arg(long)]
    data_uri: bool,
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// Placement instruction.
    #[arg(long)]
    prompt: String,
}

#[derive(serde::Serialize)]
struct ClassifyReport {
    region: Option<tryon::Region>,
    style: Option<tryon::Style>,
    profile: tryon::GeometryProfile,
    enhanced_prompt: String,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Classify(args) => cmd_classify(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_opts(path: &Path) -> anyhow::Result<tryon::CompositeOpts> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let opts: tryon::CompositeOpts = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse config '{}'", path.display()))?;
    opts.validate()?;
    Ok(opts)
}

fn read_image(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))
}

fn resolve_out_path(out: &Path, prefix: &str) -> anyhow::Result<PathBuf> {
    if !out.is_dir() {
        return Ok(out.to_path_buf());
    }
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before unix epoch")?
        .as_millis();
    Ok(out.join(tryon::download_filename(prefix, ts)))
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let opts = match &args.config {
        Some(path) => read_opts(path)?,
        None => tryon::CompositeOpts::default(),
    };

    let product = read_image(&args.product)?;
    let model = read_image(&args.model)?;

    tracing::info!(enhanced = %tryon::enhance_prompt(&args.prompt), "enhanced prompt");

    let req = tryon::CompositeRequest {
        product_image: &product,
        model_image: &model,
        instruction: &args.prompt,
    };
    let encoded = tryon::composite_with_opts(&req, &opts).context("composite images")?;

    let out_path = resolve_out_path(&args.out, &args.prefix)?;
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    std::fs::write(&out_path, &encoded.bytes)
        .with_context(|| format!("write jpeg '{}'", out_path.display()))?;

    if args.data_uri {
        println!("{}", encoded.to_data_uri());
    }
    eprintln!("wrote {}", out_path.display());
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let region = tryon::classify(&args.prompt);
    let report = ClassifyReport {
        region,
        style: tryon::classify_style(&args.prompt),
        profile: tryon::profile_for(region),
        enhanced_prompt: tryon::enhance_prompt(&args.prompt),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serialize classification")?
    );
    Ok(())
}
