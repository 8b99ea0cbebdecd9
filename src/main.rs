//! IconMill CLI - Fixed-Size PNG Icon Generator
//!
//! Turns one source image into 16x16, 48x48 and 128x128 PNG files under
//! a common base name. Invoked bare it prompts for the three inputs;
//! any of them can be pre-supplied with flags.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing::debug;

use iconmill::{init, interact, IconResizer, ResizeRequest};

const PROMPT_INPUT: &str = "Enter path to source image (e.g. icon.png): ";
const PROMPT_OUTPUT: &str = "Enter output folder path: ";
const PROMPT_BASE: &str = "Enter base filename (without extension): ";
const PROMPT_EXIT: &str = "🎯 Done. Press Enter to exit...";

/// IconMill - Fixed-Size PNG Icon Generator
#[derive(Parser)]
#[command(
    name = "iconmill",
    version,
    about = "Generate 16/48/128 pixel PNG icons from one source image",
    long_about = "IconMill reads a single source image and writes three resized PNG copies \
                  (16x16, 48x48, 128x128) into an output folder, named after a common base \
                  filename. Run it with no arguments for interactive prompts, or pre-supply \
                  any of the three inputs with flags."
)]
struct Cli {
    /// Path to the source image (prompted for when omitted)
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output folder for the generated icons (prompted for when omitted)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Base filename without extension (prompted for when omitted)
    #[arg(short, long, value_name = "NAME")]
    base: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'Q', long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    // Status lines below are the reporting surface; logs stay out of
    // the way unless asked for.
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    std::env::set_var("RUST_LOG", log_level);

    if let Err(e) = init() {
        eprintln!(
            "{}: Failed to initialize logging: {}",
            style("Warning").yellow().bold(),
            e
        );
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();

    println!("{}", style("=== Icon Resizer ===").bold());

    match build_request(&cli, &mut reader, &mut writer) {
        Ok(request) => run(&request),
        Err(e) => println!("❌ {e}"),
    }

    // Terminal UX pause; the outcome never changes the exit code.
    let _ = interact::pause(&mut reader, &mut writer, PROMPT_EXIT);
}

/// Assemble the request from flags, prompting for whatever is missing
fn build_request<R, W>(cli: &Cli, reader: &mut R, writer: &mut W) -> anyhow::Result<ResizeRequest>
where
    R: BufRead,
    W: Write,
{
    let input = match &cli.input {
        Some(path) => path.clone(),
        None => PathBuf::from(
            interact::prompt_line(reader, writer, PROMPT_INPUT)
                .context("reading source image path")?,
        ),
    };

    let output = match &cli.output {
        Some(path) => path.clone(),
        None => PathBuf::from(
            interact::prompt_line(reader, writer, PROMPT_OUTPUT)
                .context("reading output folder path")?,
        ),
    };

    let base = match &cli.base {
        Some(name) => name.clone(),
        None => interact::prompt_line(reader, writer, PROMPT_BASE)
            .context("reading base filename")?,
    };

    Ok(ResizeRequest::new(input, output, base)?)
}

/// Run the pipeline and print the outcome
///
/// Both failure kinds are reported, not fatal; the process exits 0
/// either way.
fn run(request: &ResizeRequest) {
    let resizer = IconResizer::new();

    let result = resizer.resize_and_save(request, |icon| {
        println!("✅ Saved: {}", icon.path.display());
    });

    match result {
        Ok(icons) => debug!("Wrote {} icons", icons.len()),
        Err(e) => println!("❌ {}", e.user_message()),
    }
}
