use super::Vec2;

/// Pixel-space bounds of the drawing surface within the window.
///
/// `left`/`top` locate the surface's top-left corner in window coordinates;
/// for a surface filling the whole window both are zero.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SurfaceBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Per-axis factor converting a length in logical pixels into an NDC extent.
///
/// NDC spans 2 units across the surface, so `x = 2 / width` and
/// `y = 2 / height`. Shape sizes are specified in pixels and multiplied by
/// this during tessellation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelScale {
    pub x: f32,
    pub y: f32,
}

impl SurfaceBounds {
    #[inline]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Bounds for a surface filling the window, origin at the window corner.
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Converts a window pixel position into NDC.
    ///
    /// Centers the origin and flips the Y axis (pixel space is top-down,
    /// NDC is bottom-up). Pixels inside the bounds land in [-1, 1]; pixels
    /// outside extrapolate past it, which callers may rely on for drags
    /// leaving the surface.
    #[inline]
    pub fn to_ndc(&self, pixel_x: f32, pixel_y: f32) -> Vec2 {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        Vec2::new(
            ((pixel_x - self.left) - half_w) / half_w,
            (half_h - (pixel_y - self.top)) / half_h,
        )
    }

    /// The pixel→NDC scale for these bounds.
    #[inline]
    pub fn pixel_scale(&self) -> PixelScale {
        PixelScale {
            x: 2.0 / self.width,
            y: 2.0 / self.height,
        }
    }
}

/// Cell-space dimensions of the picture grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridSize {
    pub width: f32,
    pub height: f32,
}

impl GridSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Converts a grid cell position into NDC.
///
/// Both axes divide by the *larger* grid dimension, so the grid keeps its
/// aspect ratio instead of stretching to fill the surface: for a wide grid,
/// x spans the full [-1, 1] while y stops short of it.
#[inline]
pub fn grid_to_ndc(cell_x: f32, cell_y: f32, grid: GridSize) -> Vec2 {
    let scale = if grid.width > grid.height {
        grid.width
    } else {
        grid.height
    };
    Vec2::new(
        (cell_x / scale) * 2.0 - 1.0,
        (cell_y / scale) * 2.0 - 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    // ── to_ndc ────────────────────────────────────────────────────────────

    #[test]
    fn center_maps_to_origin() {
        let b = SurfaceBounds::from_size(400.0, 400.0);
        assert!(close(b.to_ndc(200.0, 200.0), Vec2::zero()));
    }

    #[test]
    fn corners_map_to_unit_extremes() {
        let b = SurfaceBounds::from_size(400.0, 300.0);
        // Top-left pixel corner is (-1, +1): NDC y points up.
        assert!(close(b.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0)));
        assert!(close(b.to_ndc(400.0, 300.0), Vec2::new(1.0, -1.0)));
        assert!(close(b.to_ndc(400.0, 0.0), Vec2::new(1.0, 1.0)));
        assert!(close(b.to_ndc(0.0, 300.0), Vec2::new(-1.0, -1.0)));
    }

    #[test]
    fn interior_pixels_stay_in_unit_range() {
        let b = SurfaceBounds::from_size(640.0, 480.0);
        for px in [0.0, 1.0, 160.0, 320.0, 639.0, 640.0] {
            for py in [0.0, 1.0, 120.0, 240.0, 479.0, 480.0] {
                let p = b.to_ndc(px, py);
                assert!(p.x >= -1.0 - EPS && p.x <= 1.0 + EPS, "x out of range: {p:?}");
                assert!(p.y >= -1.0 - EPS && p.y <= 1.0 + EPS, "y out of range: {p:?}");
            }
        }
    }

    #[test]
    fn offset_bounds_subtract_before_normalizing() {
        // A 400×400 surface whose top-left corner sits at window (50, 20).
        let b = SurfaceBounds::new(50.0, 20.0, 400.0, 400.0);
        assert!(close(b.to_ndc(250.0, 220.0), Vec2::zero()));
        assert!(close(b.to_ndc(50.0, 20.0), Vec2::new(-1.0, 1.0)));
    }

    #[test]
    fn y_axis_flips() {
        let b = SurfaceBounds::from_size(400.0, 400.0);
        // A pixel above center has positive NDC y.
        assert!(b.to_ndc(200.0, 100.0).y > 0.0);
        assert!(b.to_ndc(200.0, 300.0).y < 0.0);
    }

    // ── pixel_scale ───────────────────────────────────────────────────────

    #[test]
    fn pixel_scale_matches_surface_extent() {
        let s = SurfaceBounds::from_size(400.0, 400.0).pixel_scale();
        // 10 px on a 400 px surface is 10/200 NDC units.
        assert!((10.0 * s.x - 0.05).abs() < EPS);
        assert!((10.0 * s.y - 0.05).abs() < EPS);
    }

    #[test]
    fn pixel_scale_is_per_axis() {
        let s = SurfaceBounds::from_size(800.0, 400.0).pixel_scale();
        assert!((s.x - 0.0025).abs() < EPS);
        assert!((s.y - 0.005).abs() < EPS);
    }

    // ── grid_to_ndc ───────────────────────────────────────────────────────

    #[test]
    fn grid_origin_maps_to_lower_left() {
        let g = GridSize::new(22.0, 12.0);
        assert!(close(grid_to_ndc(0.0, 0.0, g), Vec2::new(-1.0, -1.0)));
    }

    #[test]
    fn wide_grid_shares_the_x_scale() {
        // W ≥ H: cell (W, H) maps to (1, 2H/W − 1).
        let g = GridSize::new(22.0, 12.0);
        let p = grid_to_ndc(22.0, 12.0, g);
        assert!(close(p, Vec2::new(1.0, 2.0 * 12.0 / 22.0 - 1.0)));
    }

    #[test]
    fn tall_grid_shares_the_y_scale() {
        let g = GridSize::new(4.0, 10.0);
        let p = grid_to_ndc(4.0, 10.0, g);
        assert!(close(p, Vec2::new(2.0 * 4.0 / 10.0 - 1.0, 1.0)));
    }

    #[test]
    fn square_grid_spans_both_axes() {
        let g = GridSize::new(8.0, 8.0);
        assert!(close(grid_to_ndc(8.0, 8.0, g), Vec2::new(1.0, 1.0)));
        assert!(close(grid_to_ndc(4.0, 4.0, g), Vec2::zero()));
    }
}
