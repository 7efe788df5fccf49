//! Greyscale noise textures and binary PPM (`P6`) encoding.
//!
//! The game loads its block texture from `assets/textures/block.ppm`. This
//! module builds that image in memory (`generate_block_texture`) and writes it
//! with a plain-text header followed by the raw RGB bytes (`write_ppm`).
//!
//! Every pixel is a single value drawn from a uniform integer distribution and
//! repeated across the three channels, so the result is always grey.

use std::fs;
use std::path::Path;

use image::ImageFormat;
use rand::distributions::Uniform;
use rand::{Rng, thread_rng};

/// Default output location, relative to the repository root.
pub const DEFAULT_OUTPUT: &str = "assets/textures/block.ppm";

/// Width and height of the block texture.
pub const BLOCK_SIZE: usize = 16;

/// Maximum channel value declared in the header.
pub const MAX_VALUE: u16 = 255;

/// Inclusive range of grey values used for noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseRange {
    pub min: u8,
    pub max: u8,
}

impl Default for NoiseRange {
    fn default() -> Self {
        Self { min: 180, max: 250 }
    }
}

impl NoiseRange {
    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// An RGB image, row-major, three bytes per pixel, no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Pixmap {
    /// The `P6` header: format tag, dimensions and max value, each line
    /// newline-terminated.
    pub fn header(&self) -> String {
        format!("P6\n{} {}\n{}\n", self.width, self.height, MAX_VALUE)
    }

    /// Header bytes followed immediately by the raster.
    pub fn encode(&self) -> Vec<u8> {
        let header = self.header();
        let mut out = Vec::with_capacity(header.len() + self.data.len());
        out.extend_from_slice(header.as_bytes());
        out.extend_from_slice(&self.data);
        out
    }

    /// Decode a PNM file into an RGB pixmap.
    ///
    /// Any PNM flavor the `image` crate understands is accepted; use
    /// `verify_ppm` to also require the exact `P6` layout written here.
    pub fn decode(bytes: &[u8]) -> Result<Pixmap, String> {
        let img = image::load_from_memory_with_format(bytes, ImageFormat::Pnm)
            .map_err(|e| format!("failed to decode PPM: {e}"))?
            .into_rgb8();
        Ok(Pixmap {
            width: img.width() as usize,
            height: img.height() as usize,
            data: img.into_raw(),
        })
    }

    /// Iterate over `[r, g, b]` triples in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(3)
    }

    /// True when every pixel is grey and its value lies in `range`.
    pub fn is_grey_within(&self, range: NoiseRange) -> bool {
        self.pixels()
            .all(|px| px[0] == px[1] && px[1] == px[2] && range.contains(px[0]))
    }
}

/// Build a `width` x `height` greyscale noise image with values drawn from
/// `range` using `rng`.
///
/// Fails when `range.min > range.max` or the raster size overflows `usize`.
pub fn generate_noise<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    range: NoiseRange,
    rng: &mut R,
) -> Result<Pixmap, String> {
    if range.min > range.max {
        return Err(format!(
            "invalid noise range: min {} is above max {}",
            range.min, range.max
        ));
    }
    let pixels = width
        .checked_mul(height)
        .filter(|n| n.checked_mul(3).is_some())
        .ok_or_else(|| format!("image dimensions overflow: {}x{}", width, height))?;
    let data = grey_noise(pixels, Uniform::new_inclusive(range.min, range.max), rng);
    Ok(Pixmap {
        width,
        height,
        data,
    })
}

/// The 16x16 block texture with the default grey range.
pub fn generate_block_texture() -> Pixmap {
    let range = NoiseRange::default();
    let dist = Uniform::new_inclusive(range.min, range.max);
    Pixmap {
        width: BLOCK_SIZE,
        height: BLOCK_SIZE,
        data: grey_noise(BLOCK_SIZE * BLOCK_SIZE, dist, &mut thread_rng()),
    }
}

fn grey_noise<R: Rng + ?Sized>(pixels: usize, dist: Uniform<u8>, rng: &mut R) -> Vec<u8> {
    let mut data = Vec::with_capacity(pixels * 3);
    for _ in 0..pixels {
        let v = rng.sample(dist);
        data.extend_from_slice(&[v, v, v]);
    }
    data
}

/// Create or overwrite `path` with the encoded image. The parent directory
/// must already exist.
pub fn write_ppm(pixmap: &Pixmap, path: &Path) -> Result<(), String> {
    fs::write(path, pixmap.encode())
        .map_err(|e| format!("failed to write {}: {}", path.display(), e))
}

/// Read `path` back and check it is exactly what `write_ppm` produces for a
/// grey-noise image: the `P6` header, a raster with no trailing bytes, and
/// every pixel grey within `range`.
pub fn verify_ppm(path: &Path, range: NoiseRange) -> Result<Pixmap, String> {
    let bytes = fs::read(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let pixmap = Pixmap::decode(&bytes)?;
    if bytes != pixmap.encode() {
        return Err(format!(
            "{} does not start with header {:?} followed by the raw raster",
            path.display(),
            pixmap.header()
        ));
    }
    if !pixmap.is_grey_within(range) {
        return Err(format!(
            "{} contains pixels outside [{}, {}] or non-grey pixels",
            path.display(),
            range.min,
            range.max
        ));
    }
    Ok(pixmap)
}
