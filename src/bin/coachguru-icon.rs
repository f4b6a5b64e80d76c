use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "coachguru-icon", version, about = "Render the CoachGuru app icon")]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the 1024x1024 app icon (the default when no command is given).
    Icon(IconArgs),
    /// Derive favicon.png (256x256) and favicon.ico (48x48) from an existing image.
    Favicons(FaviconArgs),
    /// Derive a circular avatar logo from an existing image.
    Circle(CircleArgs),
    /// Derive the Android and iOS launcher icon sets from an existing image.
    Launcher(LauncherArgs),
}

#[derive(Parser, Debug, Default)]
struct IconArgs {
    /// Output PNG path.
    #[arg(long, default_value = coachguru_icon::DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Font file for the monogram (overrides COACHGURU_ICON_FONT and system fonts).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Print diagnostics about monogram font resolution (family name + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Parser, Debug)]
struct FaviconArgs {
    /// Source image (typically the rendered icon or logo).
    #[arg(long)]
    source: PathBuf,

    /// Existing directory receiving favicon.png and favicon.ico.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct CircleArgs {
    /// Source image.
    #[arg(long)]
    source: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Edge length of the output square in pixels.
    #[arg(long, default_value_t = coachguru_icon::DEFAULT_CIRCLE_SIZE)]
    size: u32,
}

#[derive(Parser, Debug)]
struct LauncherArgs {
    /// Source image.
    #[arg(long)]
    source: PathBuf,

    /// Project root receiving `android/`, `ios/` and `assets/icon/generated/`.
    #[arg(long)]
    out_dir: PathBuf,

    /// Launcher background colour as `#RRGGBB`.
    #[arg(long, default_value = coachguru_icon::DEFAULT_LAUNCHER_BACKGROUND, value_parser = parse_color)]
    background: coachguru_icon::Rgba8,
}

fn parse_color(s: &str) -> Result<coachguru_icon::Rgba8, String> {
    coachguru_icon::Rgba8::from_hex(s).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        None => cmd_icon(IconArgs {
            out: PathBuf::from(coachguru_icon::DEFAULT_OUTPUT),
            ..IconArgs::default()
        }),
        Some(Command::Icon(args)) => cmd_icon(args),
        Some(Command::Favicons(args)) => cmd_favicons(args),
        Some(Command::Circle(args)) => cmd_circle(args),
        Some(Command::Launcher(args)) => cmd_launcher(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_icon(args: IconArgs) -> anyhow::Result<()> {
    let source = coachguru_icon::FontSource::resolve_config(args.font);
    let font = coachguru_icon::resolve_font(&source)
        .with_context(|| format!("resolve monogram font from {source}"))?;

    if args.dump_fonts {
        dump_font_diagnostics(&source, font.as_ref());
    }

    let design = coachguru_icon::IconDesign::coachguru();
    let frame = coachguru_icon::render_icon(&design, font.as_ref())?;
    coachguru_icon::write_png(&frame, &args.out)?;

    println!("CoachGuru app icon generated: {}", args.out.display());
    Ok(())
}

fn cmd_favicons(args: FaviconArgs) -> anyhow::Result<()> {
    let paths = coachguru_icon::write_favicons(&args.source, &args.out_dir)?;
    println!(
        "Favicons generated: {}, {}",
        paths.png.display(),
        paths.ico.display()
    );
    Ok(())
}

fn cmd_circle(args: CircleArgs) -> anyhow::Result<()> {
    coachguru_icon::write_circular_logo(&args.source, &args.out, args.size)?;
    println!(
        "Circular logo generated: {} ({}x{})",
        args.out.display(),
        args.size,
        args.size
    );
    Ok(())
}

fn cmd_launcher(args: LauncherArgs) -> anyhow::Result<()> {
    let written =
        coachguru_icon::write_launcher_icons(&args.source, &args.out_dir, args.background)?;
    println!(
        "Launcher icons generated: {} files under {}",
        written.len(),
        args.out_dir.display()
    );
    Ok(())
}

fn dump_font_diagnostics(
    source: &coachguru_icon::FontSource,
    font: Option<&coachguru_icon::PreparedFont>,
) {
    eprintln!("monogram font diagnostics:");
    eprintln!("  source:  {source}");
    match font {
        Some(f) => {
            eprintln!("  family:  {}", f.family);
            eprintln!("  weight:  {}", f.weight);
            eprintln!("  index:   {}", f.index);
            eprintln!("  sha256:  {}", sha256_hex(&f.bytes));
        }
        None => eprintln!("  (no font found; monogram will be skipped)"),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
