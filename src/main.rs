mod error;
mod transform;

use std::path::Path;
use std::process;

use error::PadError;
use transform::PadParams;

const SRC_PATH: &str = "assets/icon/app_icon.png";
const OUT_PATH: &str = "assets/icon/app_icon_fg.png";

fn main() {
    env_logger::init(); // Initialize logger

    if let Err(err) = run() {
        match err {
            // Missing source gets its own message and exit code; the
            // message goes to stdout, naming the path that was checked.
            PadError::MissingSource(path) => {
                println!("Source icon not found: {}", path.display());
                process::exit(2);
            }
            other => {
                eprintln!("Error: {other}");
                process::exit(1);
            }
        }
    }
}

fn run() -> Result<(), PadError> {
    let src_path = Path::new(SRC_PATH);
    let out_path = Path::new(OUT_PATH);

    if !src_path.exists() {
        return Err(PadError::MissingSource(src_path.to_path_buf()));
    }

    let img = image::open(src_path)?;
    log::debug!("loaded {} ({}x{})", src_path.display(), img.width(), img.height());

    let canvas = transform::fit_and_center(&img, PadParams::default());

    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    canvas.save(out_path)?;

    println!("Wrote padded foreground icon to {}", out_path.display());
    Ok(())
}
