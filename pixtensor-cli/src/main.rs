use anyhow::{Context, Result};
use clap::Parser;

use pixtensor::PixelTensor;

#[derive(Parser)]
#[command(name = "pixtensor-cli")]
#[command(about = "Decode an image (PNG/JPEG/GIF/BMP/TGA/TIFF/PSD) into an RGBA pixel tensor", long_about = None)]
#[command(version)]
struct Args {
    /// Input image: file path, http(s) URL, or data URI
    #[arg(value_name = "INPUT")]
    input: String,

    /// MIME type hint (e.g. image/tga); overrides the extension or
    /// Content-Type derived hint
    #[arg(short = 't', long = "type", value_name = "MIME")]
    mime: Option<String>,

    /// Print every pixel value, one scanline per row
    #[arg(long, default_value_t)]
    dump: bool,

    /// Verbose output
    #[arg(short, long, default_value_t)]
    verbose: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, default_value_t)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose, args.quiet);

    let tensor = pixtensor::get_pixels(&args.input, args.mime.as_deref())
        .with_context(|| format!("Failed to decode `{}`", args.input))?;

    if !args.quiet {
        if tensor.is_animated() {
            println!(
                "{} frames, {}x{}, RGBA",
                tensor.frame_count(),
                tensor.width(),
                tensor.height()
            );
        } else {
            println!("{}x{}, RGBA", tensor.width(), tensor.height());
        }
    }

    if args.dump {
        dump_pixels(&tensor);
    }

    Ok(())
}

/// Print every frame scanline by scanline, pixels as `r,g,b,a` tuples.
fn dump_pixels(tensor: &PixelTensor) {
    for frame in 0..tensor.frame_count() {
        if tensor.is_animated() {
            println!("frame {frame}:");
        }
        for y in 0..tensor.height() {
            let line: Vec<String> = (0..tensor.width())
                .map(|x| {
                    let [r, g, b, a] = tensor.pixel(frame, x, y);
                    format!("{r},{g},{b},{a}")
                })
                .collect();
            println!("{}", line.join(" "));
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
