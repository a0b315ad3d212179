//! Style parameters for region overlay rendering.

use serde::{Deserialize, Serialize};

use crate::error::{InspectError, InspectResult};

/// How a region boundary is drawn onto the canvas.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Stroke width of the boundary edges in pixels
    pub line_width: f32,
    /// Radius of the filled vertex markers in pixels
    pub point_radius: f32,
    /// Connect the last boundary point back to the first
    pub close_path: bool,
    /// Anti-aliased rasterization; disable for exact binary pixel coverage
    pub antialias: bool,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            point_radius: 3.0,
            close_path: true,
            antialias: true,
        }
    }
}

impl OverlayStyle {
    /// Reject degenerate stroke/marker sizes before any pixel is touched.
    pub fn validate(&self) -> InspectResult<()> {
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(InspectError::InvalidArgument(format!(
                "line_width must be positive, got {}",
                self.line_width
            )));
        }
        if !(self.point_radius.is_finite() && self.point_radius > 0.0) {
            return Err(InspectError::InvalidArgument(format!(
                "point_radius must be positive, got {}",
                self.point_radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_valid() {
        let style = OverlayStyle::default();
        assert!(style.validate().is_ok());
        assert_eq!(style.line_width, 2.0);
        assert_eq!(style.point_radius, 3.0);
        assert!(style.close_path);
    }

    #[test]
    fn test_validate_rejects_degenerate_params() {
        let mut style = OverlayStyle::default();
        style.line_width = 0.0;
        assert!(matches!(
            style.validate(),
            Err(InspectError::InvalidArgument(_))
        ));

        let mut style = OverlayStyle::default();
        style.point_radius = -3.0;
        assert!(matches!(
            style.validate(),
            Err(InspectError::InvalidArgument(_))
        ));

        let mut style = OverlayStyle::default();
        style.line_width = f32::NAN;
        assert!(style.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let style: OverlayStyle = serde_json::from_str(r#"{"line_width": 1.5}"#).unwrap();
        assert_eq!(style.line_width, 1.5);
        assert_eq!(style.point_radius, 3.0);
        assert!(style.close_path);
        assert!(style.antialias);
    }
}
