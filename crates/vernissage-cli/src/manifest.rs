//! Exhibit manifest loading.
//!
//! An exhibit manifest is a TOML file listing the images to hang, in the
//! order they should be considered for placement:
//!
//! ```toml
//! title = "Spring Salon"
//!
//! [[images]]
//! pixel_width = 1600
//! pixel_height = 1200
//! title = "Harbor at Dawn"
//! caption = "Oil on canvas"
//! ```

use std::{fs, path::Path};

use log::debug;
use serde::Deserialize;

use vernissage::metrics::SourceImage;

use crate::error::CliError;

/// An exhibit: a titled, ordered list of images to hang.
#[derive(Debug, Clone, Deserialize)]
pub struct Exhibit {
    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    images: Vec<SourceImage>,
}

impl Exhibit {
    /// Returns the exhibit title, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the images in manifest order
    pub fn images(&self) -> &[SourceImage] {
        &self.images
    }

    /// Load an exhibit manifest from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] if the file cannot be read or is not a valid
    /// manifest.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)?;
        let exhibit: Exhibit = toml::from_str(&content).map_err(|err| CliError::Manifest {
            path: path.display().to_string(),
            err,
        })?;

        debug!(
            path = path.display().to_string(),
            images_len = exhibit.images.len();
            "Manifest loaded"
        );

        Ok(exhibit)
    }
}
