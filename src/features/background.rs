//! Blurred background image behind the slider
//!
//! Decoding and blurring run on the blocking pool; the view only ever sees
//! a ready RGBA handle or nothing. Without a configured image a generated
//! backdrop is blurred instead.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use iced::widget::image::Handle;
use image::{DynamicImage, Rgba, RgbaImage};

/// Longest edge the image is scaled down to before blurring
const MAX_EDGE: u32 = 1280;

/// Built-in backdrop size, same aspect as the default window
const BACKDROP_WIDTH: u32 = 400;
const BACKDROP_HEIGHT: u32 = 600;

/// Soft color spots over the backdrop gradient: relative center, radius as a
/// fraction of the width, linear RGB
const BACKDROP_SPOTS: [([f32; 2], f32, [f32; 3]); 3] = [
    ([0.2, 0.2], 0.7, [0.95, 0.45, 0.35]),
    ([0.85, 0.55], 0.6, [0.3, 0.75, 0.95]),
    ([0.3, 0.9], 0.75, [0.85, 0.35, 0.75]),
];

/// RGBA pixels ready for upload
#[derive(Debug, Clone)]
pub struct BlurredImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl BlurredImage {
    pub fn into_handle(self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.pixels)
    }
}

/// Scale down and blur an already decoded image
pub fn blur(image: &DynamicImage, sigma: f32) -> BlurredImage {
    let image = if image.width().max(image.height()) > MAX_EDGE {
        image.resize(MAX_EDGE, MAX_EDGE, image::imageops::FilterType::Triangle)
    } else {
        image.clone()
    };

    let blurred = if sigma > 0.0 { image.blur(sigma) } else { image };
    let rgba = blurred.to_rgba8();
    let (width, height) = rgba.dimensions();

    BlurredImage {
        width,
        height,
        pixels: rgba.into_raw(),
    }
}

/// Generated wallpaper used when no image is configured
pub fn default_backdrop(sigma: f32) -> BlurredImage {
    let (width, height) = (BACKDROP_WIDTH, BACKDROP_HEIGHT);
    let aspect = height as f32 / width as f32;

    let image = RgbaImage::from_fn(width, height, |x, y| {
        let u = x as f32 / width as f32;
        let v = y as f32 / height as f32;
        // Deep blue at the top, violet at the bottom
        let mut color = [0.1 + 0.2 * v, 0.12 + 0.05 * v, 0.35 + 0.15 * v];

        for ([cx, cy], radius, spot) in BACKDROP_SPOTS {
            let distance = (u - cx).hypot((v - cy) * aspect);
            let weight = (1.0 - distance / radius).clamp(0.0, 1.0).powi(2);
            for (channel, target) in color.iter_mut().zip(spot) {
                *channel += (target - *channel) * weight;
            }
        }

        let [r, g, b] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        Rgba([r, g, b, 255])
    });

    blur(&DynamicImage::ImageRgba8(image), sigma)
}

/// Decode and blur the image at `path`
pub fn load_blurred(path: &Path, sigma: f32) -> Result<BlurredImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to open background image {}", path.display()))?;
    Ok(blur(&image, sigma))
}

/// Async wrapper for `Task::perform`
///
/// `None` as path selects the generated backdrop. Failures are logged here
/// and turn into `None` so the view falls back to a solid color.
pub async fn load(path: Option<PathBuf>, sigma: f32) -> Option<Handle> {
    let result = tokio::task::spawn_blocking(move || match path {
        Some(path) => load_blurred(&path, sigma),
        None => Ok(default_backdrop(sigma)),
    })
        .await
        .context("Background loader panicked")
        .and_then(|result| result);

    match result {
        Ok(image) => {
            tracing::info!("Background ready: {}x{}", image.width, image.height);
            Some(image.into_handle())
        }
        Err(e) => {
            tracing::warn!("Background unavailable: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(size: u32) -> DynamicImage {
        let image = RgbaImage::from_fn(size, size, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        DynamicImage::ImageRgba8(image)
    }

    #[test]
    fn test_blur_smooths_pixels() {
        let blurred = blur(&checkerboard(16), 2.0);
        assert_eq!((blurred.width, blurred.height), (16, 16));
        assert_eq!(blurred.pixels.len(), 16 * 16 * 4);

        let center = ((8 * 16 + 8) * 4) as usize;
        let red = blurred.pixels[center];
        assert!(red > 64 && red < 192, "red = {red}");
    }

    #[test]
    fn test_zero_sigma_keeps_pixels() {
        let image = checkerboard(4);
        let blurred = blur(&image, 0.0);
        assert_eq!(blurred.pixels, image.to_rgba8().into_raw());
    }

    #[test]
    fn test_large_images_are_scaled_down() {
        let image = DynamicImage::new_rgba8(MAX_EDGE * 2, MAX_EDGE);
        let blurred = blur(&image, 0.0);
        assert_eq!(blurred.width, MAX_EDGE);
        assert_eq!(blurred.height, MAX_EDGE / 2);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let error = load_blurred(Path::new("/definitely/not/here.png"), 1.0).unwrap_err();
        assert!(format!("{error:#}").contains("here.png"));
    }

    #[test]
    fn test_default_backdrop_is_opaque_and_varied() {
        let backdrop = default_backdrop(10.0);
        assert_eq!((backdrop.width, backdrop.height), (BACKDROP_WIDTH, BACKDROP_HEIGHT));
        assert_eq!(
            backdrop.pixels.len(),
            (BACKDROP_WIDTH * BACKDROP_HEIGHT * 4) as usize
        );
        assert!(backdrop.pixels.chunks_exact(4).all(|pixel| pixel[3] == 255));

        let pixel = |x: u32, y: u32| {
            let start = ((y * BACKDROP_WIDTH + x) * 4) as usize;
            &backdrop.pixels[start..start + 3]
        };
        assert_ne!(pixel(80, 120), pixel(340, 330));
        assert_ne!(pixel(200, 10), pixel(200, 590));
    }

    #[tokio::test]
    async fn test_async_load_falls_back_to_none() {
        let missing = Some(PathBuf::from("/definitely/not/here.png"));
        assert!(load(missing, 1.0).await.is_none());
    }

    #[tokio::test]
    async fn test_async_load_without_path_uses_backdrop() {
        assert!(load(None, 2.0).await.is_some());
    }
}
