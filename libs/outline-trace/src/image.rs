//! # Luminance Image
//!
//! Grayscale view of a decoded photo. Pixel `(x, y)` has `y` pointing down.

use crate::error::{TraceError, TraceResult};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Byte layout of an 8-bit color buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 4 bytes per pixel; alpha is ignored
    #[default]
    Rgba8,
    /// 3 bytes per pixel
    Rgb8,
}

impl PixelFormat {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba8 => 4,
            Self::Rgb8 => 3,
        }
    }

    /// Expected buffer length for an image of this format.
    pub const fn buffer_size(self, width: u32, height: u32) -> usize {
        width as usize * height as usize * self.bytes_per_pixel()
    }
}

/// Rec. 601 luma of an 8-bit color.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// Row-major grayscale image in `0.0..=255.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct LuminanceImage {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl LuminanceImage {
    /// Converts an 8-bit color buffer.
    ///
    /// # Errors
    ///
    /// - [`TraceError::EmptyImage`] if either dimension is zero
    /// - [`TraceError::BufferSize`] if `bytes` does not match the dimensions
    pub fn from_bytes(
        width: u32,
        height: u32,
        bytes: &[u8],
        format: PixelFormat,
    ) -> TraceResult<Self> {
        if width == 0 || height == 0 {
            return Err(TraceError::EmptyImage);
        }
        let expected = format.buffer_size(width, height);
        if bytes.len() != expected {
            return Err(TraceError::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }

        let data = bytes
            .chunks_exact(format.bytes_per_pixel())
            .map(|px| luma(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_rgba(width: u32, height: u32, bytes: &[u8]) -> TraceResult<Self> {
        Self::from_bytes(width, height, bytes, PixelFormat::Rgba8)
    }

    pub fn from_rgb(width: u32, height: u32, bytes: &[u8]) -> TraceResult<Self> {
        Self::from_bytes(width, height, bytes, PixelFormat::Rgb8)
    }

    /// Builds an image by sampling `f(x, y)` at every pixel.
    ///
    /// # Errors
    ///
    /// [`TraceError::EmptyImage`] if either dimension is zero.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> f64) -> TraceResult<Self> {
        if width == 0 || height == 0 {
            return Err(TraceError::EmptyImage);
        }
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Luminance at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Coordinates of every pixel darker than `threshold`, row by row.
    pub fn foreground(&self, threshold: f64) -> Vec<DVec2> {
        let width = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, &gray)| gray < threshold)
            .map(|(i, _)| DVec2::new((i % width) as f64, (i / width) as f64))
            .collect()
    }
}
