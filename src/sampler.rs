//! Per-source sampling with single-slot result reuse.

use std::path::Path;

use dominant_color::{Extractor, Rgb};
use image::RgbaImage;

use crate::error::SourceError;
use crate::source;

/// Samples sources for their dominant color, remembering the most recent
/// one so repeated requests for it skip the pixel scan entirely.
///
/// The memo holds exactly one entry, keyed by source identity (the path, or
/// a caller-chosen key for in-memory images). Pointing the sampler at a new
/// source evicts the old entry; alternating between two sources rescans
/// every time. `None` results are remembered the same way as colors.
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    extractor: Extractor,
    max_dim: Option<u32>,
    last: Option<(String, Option<Rgb>)>,
}

impl Sampler {
    /// Create a sampler with the default extraction configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the extractor configuration.
    #[inline]
    pub fn extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Downscale sources whose longest side exceeds `limit` before
    /// scanning. 0 disables downscaling.
    #[inline]
    pub fn max_dim(mut self, limit: u32) -> Self {
        self.max_dim = Some(limit);
        self
    }

    /// Dominant color of the image file at `path`, memoized by path.
    pub fn sample_path(&mut self, path: &Path) -> Result<Option<Rgb>, SourceError> {
        let key = path.to_string_lossy().into_owned();
        if let Some(hit) = self.cached(&key) {
            return Ok(hit);
        }
        let img = source::open_image(path)?;
        let color = self.scan(&img);
        Ok(self.record(key, color))
    }

    /// Dominant color of an already-decoded image, memoized by `key`.
    pub fn sample_image(&mut self, key: &str, img: &RgbaImage) -> Option<Rgb> {
        if let Some(hit) = self.cached(key) {
            return hit;
        }
        let color = self.scan(img);
        self.record(key.to_owned(), color)
    }

    /// Drop the memo so the next request rescans its source.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    fn cached(&self, key: &str) -> Option<Option<Rgb>> {
        match &self.last {
            Some((cached_key, color)) if cached_key == key => {
                tracing::debug!(source = %key, "Reusing cached dominant color");
                Some(*color)
            }
            _ => None,
        }
    }

    fn record(&mut self, key: String, color: Option<Rgb>) -> Option<Rgb> {
        tracing::debug!(
            source = %key,
            color = ?color.map(|c| c.to_hex()),
            "Sampled dominant color"
        );
        self.last = Some((key, color));
        color
    }

    fn scan(&self, img: &RgbaImage) -> Option<Rgb> {
        match self
            .max_dim
            .and_then(|limit| source::shrink_for_sampling(img, limit))
        {
            Some(shrunk) => self.extractor.extract(source::samples(&shrunk)),
            None => self.extractor.extract(source::samples(img)),
        }
    }
}
