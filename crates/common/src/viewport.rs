use serde::{Deserialize, Serialize};

/// Output dimensions in physical pixels.
///
/// Passed explicitly into bootstrap instead of queried from the host, so the
/// scene can be built without a display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Rejected viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ViewportError {
    #[error("degenerate viewport {width}x{height}")]
    Degenerate { width: u32, height: u32 },
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. Unguarded: a zero height gives `inf` (or `NaN` for 0x0).
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the viewport unchanged if both dimensions are non-zero.
    pub fn validate(self) -> Result<Self, ViewportError> {
        if self.is_degenerate() {
            return Err(ViewportError::Degenerate {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_800_by_600() {
        let vp = Viewport::new(800, 600);
        assert!((vp.aspect() - 1.333_333_3).abs() < 1e-6);
    }

    #[test]
    fn zero_height_aspect_is_infinite() {
        assert!(Viewport::new(800, 0).aspect().is_infinite());
        assert!(Viewport::new(0, 0).aspect().is_nan());
        assert_eq!(Viewport::new(0, 600).aspect(), 0.0);
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        assert!(Viewport::new(800, 600).validate().is_ok());
        let err = Viewport::new(0, 600).validate().unwrap_err();
        assert_eq!(
            err,
            ViewportError::Degenerate {
                width: 0,
                height: 600
            }
        );
        assert!(err.to_string().contains("0x600"));
    }
}
