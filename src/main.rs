//! # zpl-label CLI
//!
//! Command-line interface for turning images into ZPL graphic fields.
//!
//! ## Usage
//!
//! ```bash
//! # Print a ^GFA field for each image
//! zpl-label encode logo.png
//!
//! # Wrap each image in a complete label, positioned at 20,20
//! zpl-label encode --label --x 20 --y 20 logo.png stamp.png
//!
//! # Use label settings from a JSON file
//! zpl-label encode --label --config label.json logo.png
//!
//! # Decode a field back into a PNG to check it
//! zpl-label preview field.zpl --png check.png
//!
//! # Show the repeat-count alphabet
//! zpl-label alphabet
//! ```
//!
//! Set `RUST_LOG=debug` for encoding statistics.

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use zpl_label::{
    LabelConfig, Raster, ZplError,
    components::{ComponentExt, Image, Label},
    protocol::{compression, graphics},
    render::binarize,
};

/// zpl-label - ZPL graphic field utility
#[derive(Parser, Debug)]
#[command(name = "zpl-label")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode images as compressed ^GFA graphic fields
    Encode {
        /// Image files to encode (PNG, JPEG, GIF, BMP, ...)
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Field origin x in dots
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        x: i32,

        /// Field origin y in dots
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        y: i32,

        /// Emit a complete label (^XA ... ^XZ) instead of a bare field
        #[arg(long)]
        label: bool,

        /// JSON label configuration
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Override print darkness (0-30)
        #[arg(long)]
        darkness: Option<u8>,

        /// Override print width in dots
        #[arg(long)]
        width: Option<u32>,
    },

    /// Decode a ^GFA field and save it as a PNG
    Preview {
        /// File containing a ^GFA field
        field: PathBuf,

        /// Output PNG path
        #[arg(long, value_name = "FILE")]
        png: PathBuf,
    },

    /// Print the repeat-count alphabet
    Alphabet,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ZplError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            images,
            x,
            y,
            label,
            config,
            darkness,
            width,
        } => {
            let mut label_config = match config {
                Some(path) => LabelConfig::from_json_file(&path)?,
                None => LabelConfig::default(),
            };
            if let Some(darkness) = darkness {
                label_config.darkness = darkness;
            }
            if let Some(width) = width {
                label_config.width_dots = width;
            }
            label_config.validate()?;

            // Each image is encoded independently; output keeps input order
            let outputs: Vec<String> = images
                .par_iter()
                .map(|path| encode_file(path, x, y, label.then_some(label_config)))
                .collect::<Result<_, _>>()?;

            for output in outputs {
                println!("{}", output);
            }
            log::info!("Encoded {} image(s)", images.len());
        }
        Commands::Preview { field, png } => {
            let text = std::fs::read_to_string(&field)?;
            let parsed = graphics::GraphicField::parse(&text)?;
            let bitmap = parsed.decode()?;

            save_png(&png, &bitmap)?;
            log::info!(
                "Decoded {}x{} field ({} ink dots) to {}",
                bitmap.width(),
                bitmap.height(),
                bitmap.ink_count(),
                png.display()
            );
        }
        Commands::Alphabet => {
            for (count, letter) in compression::ALPHABET {
                println!("{:>4}  {}", count, letter);
            }
        }
    }

    Ok(())
}

/// Load one image and encode it as a field, or as a whole label when a
/// config is given.
fn encode_file(
    path: &Path,
    x: i32,
    y: i32,
    label: Option<LabelConfig>,
) -> Result<String, ZplError> {
    let img = image::open(path)
        .map_err(|e| ZplError::Image(format!("Failed to open {}: {}", path.display(), e)))?;

    let field = Image::from_raster(x, y, &img)?;
    log::debug!(
        "{}: {}x{} → {} chars",
        path.display(),
        Raster::width(&img),
        Raster::height(&img),
        field.graphic_field().len()
    );

    Ok(match label {
        Some(config) => Label::with_config(config).child(field).to_zpl(),
        None => field.to_zpl(),
    })
}

/// Save a bitmap as a black and white PNG
fn save_png(path: &Path, bitmap: &binarize::Bitmap) -> Result<(), ZplError> {
    bitmap
        .to_gray_image()
        .save(path)
        .map_err(|e| ZplError::Image(format!("Failed to save PNG: {}", e)))?;

    Ok(())
}
