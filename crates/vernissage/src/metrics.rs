//! Image metrics preprocessing.
//!
//! Derives world-unit footprints for a batch of source images. Each image is
//! processed independently: an image whose pixel dimensions are invalid is
//! excluded with a warning and the batch continues. Because exclusions can
//! leave holes, every prepared image records the position of its source in
//! the original input sequence, keeping title and caption lookups valid.

use log::warn;
use serde::Deserialize;

use vernissage_core::footprint::Footprint;

/// A source image description as supplied by the host application.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceImage {
    pixel_width: u32,
    pixel_height: u32,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    caption: Option<String>,
}

impl SourceImage {
    /// Creates a source image from its pixel dimensions.
    pub fn new(pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            pixel_width,
            pixel_height,
            title: None,
            caption: None,
        }
    }

    /// Sets the display title (builder style).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the display caption (builder style).
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Returns the pixel width of the source image
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    /// Returns the pixel height of the source image
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Returns the display title, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the display caption, if any
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

/// A source image with its derived footprint, ready for planning.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    source_index: usize,
    footprint: Footprint,
    title: Option<String>,
    caption: Option<String>,
}

impl PreparedImage {
    /// Returns the position of the source in the original input sequence
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// Returns the derived world-unit footprint
    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// Returns the display title, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the display caption, if any
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

/// Derives footprints for a batch of source images.
///
/// Each image is scaled so its longer pixel side measures `long_side` world
/// units. Images with invalid pixel dimensions are skipped with a warning;
/// the remaining images keep their original indices.
pub fn prepare_images(images: &[SourceImage], long_side: f64) -> Vec<PreparedImage> {
    images
        .iter()
        .enumerate()
        .filter_map(|(source_index, image)| {
            match Footprint::from_pixel_dimensions(
                image.pixel_width(),
                image.pixel_height(),
                long_side,
            ) {
                Ok(footprint) => Some(PreparedImage {
                    source_index,
                    footprint,
                    title: image.title.clone(),
                    caption: image.caption.clone(),
                }),
                Err(err) => {
                    warn!(source_index, err:err; "Skipping image with invalid dimensions");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_prepare_keeps_input_order() {
        let images = vec![
            SourceImage::new(1600, 1200),
            SourceImage::new(900, 1400),
            SourceImage::new(800, 800),
        ];

        let prepared = prepare_images(&images, 3.0);

        assert_eq!(prepared.len(), 3);
        assert_eq!(prepared[0].source_index(), 0);
        assert_eq!(prepared[1].source_index(), 1);
        assert_eq!(prepared[2].source_index(), 2);
        assert_approx_eq!(f64, prepared[1].footprint().height(), 3.0);
    }

    #[test]
    fn test_invalid_image_is_skipped_not_fatal() {
        let images = vec![
            SourceImage::new(1600, 1200),
            SourceImage::new(0, 1400),
            SourceImage::new(800, 800),
        ];

        let prepared = prepare_images(&images, 3.0);

        // The invalid image drops out but the survivors keep their
        // original indices for metadata lookups.
        assert_eq!(prepared.len(), 2);
        assert_eq!(prepared[0].source_index(), 0);
        assert_eq!(prepared[1].source_index(), 2);
    }

    #[test]
    fn test_metadata_carried_through() {
        let images = vec![
            SourceImage::new(1600, 1200)
                .with_title("Dawn")
                .with_caption("Oil on canvas"),
        ];

        let prepared = prepare_images(&images, 3.0);

        assert_eq!(prepared[0].title(), Some("Dawn"));
        assert_eq!(prepared[0].caption(), Some("Oil on canvas"));
    }

    #[test]
    fn test_empty_batch() {
        let prepared = prepare_images(&[], 3.0);
        assert!(prepared.is_empty());
    }
}
