use std::io::{self, BufWriter, Write};
use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use outline_palette::colors::{self, COLOR_COUNT};
use outline_palette::markup;

/// Program to generate the badge outline color array for the resource files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    env_logger::init();
    let _args = Args::parse();

    let palette = colors::generate_palette(COLOR_COUNT);
    debug!("generated {} colors", palette.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    markup::render_to(&mut out, &palette).context("failed to write palette to stdout")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
