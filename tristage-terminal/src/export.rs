//! PNG snapshots and animated GIFs of triptych sequences.
use anyhow::{anyhow, Context, Result};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame as GifFrame, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tristage_core::Triptych;

use crate::label::draw_panel_labels;

/// Colour quantization speed for GIF frames (1 = best, 30 = fastest).
const GIF_SPEED: i32 = 10;

pub fn to_rgb_image(triptych: &Triptych) -> Result<RgbImage> {
    RgbImage::from_raw(
        triptych.width() as u32,
        triptych.height() as u32,
        triptych.as_bytes().to_vec(),
    )
    .ok_or_else(|| anyhow!("triptych buffer does not match its {}x{} size", triptych.width(), triptych.height()))
}

/// The triptych with each panel's caption drawn in.
pub fn labeled_image(triptych: &Triptych) -> Result<RgbImage> {
    let mut image = to_rgb_image(triptych)?;
    draw_panel_labels(&mut image, triptych.height() as u32);
    Ok(image)
}

/// Write one captioned triptych as a PNG.
pub fn save_png(triptych: &Triptych, path: &Path) -> Result<()> {
    let image = labeled_image(triptych)?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write snapshot {}", path.display()))?;
    log::info!("saved snapshot {}", path.display());
    Ok(())
}

/// Write the captioned sequence as a looping GIF at `fps` frames per second.
pub fn save_gif<'a, I>(triptychs: I, path: &Path, fps: u32) -> Result<()>
where
    I: IntoIterator<Item = &'a Triptych>,
{
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), GIF_SPEED);
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = Delay::from_numer_denom_ms(1000, fps.max(1));
    let mut count = 0usize;
    for triptych in triptychs {
        let rgba = DynamicImage::ImageRgb8(labeled_image(triptych)?).to_rgba8();
        encoder
            .encode_frame(GifFrame::from_parts(rgba, 0, 0, delay))
            .with_context(|| format!("failed to encode frame {} of {}", count, path.display()))?;
        count += 1;
    }

    log::info!("saved {} frame animation {}", count, path.display());
    Ok(())
}
