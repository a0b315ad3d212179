//! Region boundary drawing onto a raster canvas.

use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use inspect_common::{Color, InspectError, InspectResult, OverlayStyle, Region};

/// Draw a region's outer boundary and vertex markers onto `canvas`.
///
/// Every boundary point gets a filled circular marker of
/// `style.point_radius`, drawn in boundary order (later markers may overlap
/// earlier ones). With two or more points the boundary is stroked with
/// `style.line_width`, as a closed polygon when `style.close_path` is set
/// and as an open polyline otherwise. A single point yields a lone marker
/// and no edges.
///
/// Points are taken to be in the canvas's own pixel space; no scaling or
/// rotation is applied. The fill is opaque, so fully covered pixels end up
/// exactly `color`.
///
/// All preconditions are checked before any pixel is touched: on error the
/// canvas is unchanged. Fails with `InvalidRegion` when `region.outer` is
/// empty and `InvalidArgument` when a style parameter is degenerate.
pub fn draw_outer(
    canvas: &mut Pixmap,
    region: &Region,
    color: Color,
    style: &OverlayStyle,
) -> InspectResult<()> {
    style.validate()?;
    if region.outer.is_empty() {
        return Err(InspectError::InvalidRegion(
            "region boundary has no points".to_string(),
        ));
    }

    // Identity transform: f64 boundary coordinates to the f32 surface space.
    let points: Vec<(f32, f32)> = region.outer.iter().map(|p| p.to_surface()).collect();

    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = style.antialias;

    // Vertex markers, in boundary order
    for &(x, y) in &points {
        let mut pb = PathBuilder::new();
        pb.push_circle(x, y, style.point_radius);
        if let Some(path) = pb.finish() {
            canvas.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    // Connecting edges; a single marker with no edges is valid output
    if points.len() >= 2 {
        let mut stroke = Stroke::default();
        stroke.width = style.line_width;
        stroke.line_cap = LineCap::Round;
        stroke.line_join = LineJoin::Round;

        let mut pb = PathBuilder::new();
        pb.move_to(points[0].0, points[0].1);
        for &(x, y) in &points[1..] {
            pb.line_to(x, y);
        }
        if style.close_path {
            pb.close();
        }

        if let Some(path) = pb.finish() {
            canvas.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    Ok(())
}
