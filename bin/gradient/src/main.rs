//! Render the gradient between two colors, and a palette built from them,
//! into `out.png`.
//!
//! Usage: `hueshift-gradient [BACKGROUND] [FOREGROUND]`

use anyhow::Context;
use hueshift::{gradient, gradient_n, Palette, Srgb};
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

const WIDTH: u32 = 1020;
const ROW_HEIGHT: u32 = 100;

fn to_pixel(hex: &str) -> anyhow::Result<Rgb<u8>> {
    let c = hex
        .parse::<Srgb>()
        .with_context(|| format!("could not decode {hex}"))?;
    let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Ok(Rgb([byte(c.red), byte(c.green), byte(c.blue)]))
}

fn fill_row(img: &mut RgbImage, row: u32, colors: &[String]) -> anyhow::Result<()> {
    let pixels = colors
        .iter()
        .map(|hex| to_pixel(hex))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for x in 0..WIDTH {
        let index = (x as usize * pixels.len()) / WIDTH as usize;
        for y in row * ROW_HEIGHT..(row + 1) * ROW_HEIGHT {
            img.put_pixel(x, y, pixels[index]);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let background = args.next().unwrap_or_else(|| "#161616".to_owned());
    let foreground = args.next().unwrap_or_else(|| "#ffffff".to_owned());

    let palette = Palette::from_seeds(&background, &foreground)?;
    let rows = [
        gradient(&background, &foreground)?,
        gradient_n(&background, &foreground, 4)?,
        palette.iter().map(|(_, hex)| hex.to_owned()).collect(),
    ];

    let mut img = RgbImage::new(WIDTH, rows.len() as u32 * ROW_HEIGHT);
    for (row, colors) in rows.iter().enumerate() {
        fill_row(&mut img, row as u32, colors)?;
    }

    for (name, hex) in palette.iter() {
        println!("{name}: {hex}");
    }

    img.save("out.png").context("could not write image to out.png")?;
    tracing::info!(%background, %foreground, "wrote out.png");

    Ok(())
}
