//! Fits a figure's line segments into a target viewport.

use crate::turtle::LineSegment;
use glam::DVec2;
use std::fmt;

/// Target drawing area for [`fit`](Viewport::fit), with an optional inset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    padding: f64,
}

impl Viewport {
    /// Creates a viewport of `width` × `height` with a `padding` inset on
    /// every side.
    ///
    /// Dimensions must be finite and positive, padding finite and
    /// non-negative, and the padding must leave room for the figure
    /// (`max(width, height) − 2·padding > 0`).
    pub fn new(width: f64, height: f64, padding: f64) -> Result<Self, FitError> {
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
            return Err(FitError::InvalidViewport { width, height });
        }
        if !padding.is_finite() || padding < 0.0 || width.max(height) - 2.0 * padding <= 0.0 {
            return Err(FitError::InvalidPadding(padding));
        }
        Ok(Self {
            width,
            height,
            padding,
        })
    }

    /// Rescales and translates `segments` so the figure fills the viewport.
    ///
    /// The bounding box of every endpoint is translated so its minimum corner
    /// sits at the origin, then uniformly scaled by the inverse of its longer
    /// side, putting coordinates in `[0, 1]` along that axis. With a positive
    /// padding each coordinate `v` is then remapped to
    /// `padding + v · (max(width, height) − 2·padding)`; with zero padding the
    /// normalized coordinates are returned as-is.
    ///
    /// A figure whose endpoints all coincide has no extent to scale by and is
    /// rejected rather than dividing by zero, as is an empty segment list.
    pub fn fit(&self, segments: &[LineSegment]) -> Result<Vec<LineSegment>, FitError> {
        let first = match segments.first() {
            Some(seg) => seg,
            None => return Err(FitError::NoSegments),
        };

        let mut min = first.from.min(first.to);
        let mut max = first.from.max(first.to);
        for seg in segments {
            min = min.min(seg.from).min(seg.to);
            max = max.max(seg.from).max(seg.to);
        }

        let extent = max - min;
        let max_extent = extent.x.max(extent.y);
        if max_extent <= 0.0 {
            return Err(FitError::ZeroExtent);
        }

        let scale = 1.0 / max_extent;
        let remap = |point: DVec2| -> DVec2 {
            let normalized = (point - min) * scale;
            if self.padding > 0.0 {
                let figure_size = self.width.max(self.height) - 2.0 * self.padding;
                normalized * figure_size + DVec2::splat(self.padding)
            } else {
                normalized
            }
        };

        Ok(segments
            .iter()
            .map(|seg| LineSegment::new(remap(seg.from), remap(seg.to)))
            .collect())
    }
}

/// Rejected fitting input.
#[derive(Clone, Debug, PartialEq)]
pub enum FitError {
    /// A viewport dimension was non-positive or non-finite.
    InvalidViewport { width: f64, height: f64 },
    /// The padding was negative, non-finite, or left no room for the figure.
    InvalidPadding(f64),
    /// Every endpoint of the figure coincides, so there is no extent to
    /// normalize by.
    ZeroExtent,
    /// There were no segments to fit.
    NoSegments,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::InvalidViewport { width, height } => {
                write!(f, "viewport {width}x{height} is not positive and finite")
            }
            FitError::InvalidPadding(p) => {
                write!(f, "padding {p} leaves no room for the figure")
            }
            FitError::ZeroExtent => write!(f, "figure has zero extent, nothing to scale"),
            FitError::NoSegments => write!(f, "no segments to fit"),
        }
    }
}

impl std::error::Error for FitError {}
