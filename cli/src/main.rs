//! topdf CLI - plain text to PDF conversion tool

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use topdf::{emit, JsonFormat, Metadata, PageGeometry, Topdf};

#[derive(Parser)]
#[command(name = "topdf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert plain text into a minimal PDF document", long_about = None)]
struct Cli {
    /// Input text file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a text file to PDF
    Convert {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file (input name with .pdf extension if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page size
        #[arg(long, value_enum, default_value = "letter")]
        page_size: PageSize,

        /// Margin in points
        #[arg(long)]
        margin: Option<f32>,

        /// Font size in points
        #[arg(long)]
        font_size: Option<f32>,

        /// Line height (leading) in points
        #[arg(long)]
        leading: Option<f32>,

        /// Document title for the PDF info dictionary
        #[arg(long)]
        title: Option<String>,

        /// Document author for the PDF info dictionary
        #[arg(long)]
        author: Option<String>,
    },

    /// Show how the input would be laid out
    Info {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the pagination plan as JSON
    Json {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageSize {
    /// US Letter (612 x 792 points)
    Letter,
    /// A4 (595 x 842 points)
    A4,
}

impl From<PageSize> for PageGeometry {
    fn from(size: PageSize) -> Self {
        match size {
            PageSize::Letter => PageGeometry::letter(),
            PageSize::A4 => PageGeometry::a4(),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            page_size,
            margin,
            font_size,
            leading,
            title,
            author,
        }) => cmd_convert(
            &input,
            output.as_deref(),
            page_size,
            margin,
            font_size,
            leading,
            title,
            author,
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(
                    &input,
                    cli.output.as_deref(),
                    PageSize::Letter,
                    None,
                    None,
                    None,
                    None,
                    None,
                )
            } else {
                println!("{}", "Usage: topdf <FILE> [OUTPUT]".yellow());
                println!("       topdf --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read input text, from stdin when the path is "-".
fn read_input(input: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = if input == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(input)?
    };

    // Validate at the byte boundary so a binary file fails cleanly.
    let text = std::str::from_utf8(&bytes).map_err(topdf::Error::from)?;
    Ok(text.to_string())
}

fn default_output(input: &Path) -> PathBuf {
    if input == Path::new("-") {
        PathBuf::from("output.pdf")
    } else {
        input.with_extension("pdf")
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    page_size: PageSize,
    margin: Option<f32>,
    font_size: Option<f32>,
    leading: Option<f32>,
    title: Option<String>,
    author: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let output_path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_output(input));

    let mut geometry: PageGeometry = page_size.into();
    if let Some(margin) = margin {
        geometry = geometry.with_margin(margin);
    }
    if let Some(size) = font_size {
        geometry = geometry.with_font_size(size);
    }
    if let Some(leading) = leading {
        geometry = geometry.with_leading(leading);
    }

    let metadata = Metadata {
        title,
        author,
        ..Default::default()
    };

    let result = Topdf::new()
        .with_geometry(geometry)
        .with_metadata(metadata)
        .layout(&text)?;
    let doc = result.document();

    let pb = ProgressBar::new(doc.page_count() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} pages {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Emitting PDF...");
    let bytes = result.to_bytes()?;
    pb.set_position(doc.page_count() as u64);
    pb.finish_with_message("Done!");

    fs::write(&output_path, &bytes)?;

    println!(
        "{} {} ({} pages, {} bytes)",
        "Saved to".green(),
        output_path.display(),
        doc.page_count(),
        bytes.len()
    );

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let result = Topdf::new().layout(&text)?;
    let doc = result.document();
    let bytes = result.to_bytes()?;

    println!("{}", "Layout Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {} x {} pt, {} pt margin",
        "Page".bold(),
        doc.geometry.page_width,
        doc.geometry.page_height,
        doc.geometry.margin
    );
    println!(
        "{}: {} {} pt / {} pt leading",
        "Font".bold(),
        topdf::BASE_FONT,
        doc.geometry.font_size,
        doc.geometry.leading
    );
    println!(
        "{}: {}",
        "Lines per page".bold(),
        doc.geometry.lines_per_page()
    );

    println!();
    println!("{}", "Document".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let words: usize = text.split_whitespace().count();
    println!("{}: {}", "Lines".bold(), doc.line_count());
    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "PDF objects".bold(), doc.object_count());
    println!("{}: {}", "PDF bytes".bold(), bytes.len());

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = topdf::layout_text(&text, &PageGeometry::default())?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = emit::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "topdf".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Plain text to PDF conversion tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/topdf".dimmed());
    println!("License: MIT");
}
