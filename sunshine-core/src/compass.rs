//! Geometry for the wind compass: a disc with a needle pointing along the wind bearing.

/// Size a compass edge is allowed to take, as offered by the surrounding layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    Exactly(u32),
    AtMost(u32),
    Unspecified(u32),
}

/// Preferred edge length when the layout lets the compass wrap its content.
pub const WRAP_CONTENT_SIZE: u32 = 100;

pub fn measure(spec: MeasureSpec) -> u32 {
    match spec {
        MeasureSpec::Exactly(size) | MeasureSpec::Unspecified(size) => size,
        MeasureSpec::AtMost(size) => size.min(WRAP_CONTENT_SIZE),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassGeometry {
    pub center: Point,
    pub radius: u32,
    pub needle_end: Point,
}

impl CompassGeometry {
    /// Lay out a compass of `width` x `height` with the needle at `direction_deg`
    /// (clockwise from north, screen y growing downwards).
    pub fn new(width: u32, height: u32, direction_deg: f64) -> Self {
        let radius = width.min(height) / 2;
        let center = Point { x: f64::from(width / 2), y: f64::from(height / 2) };

        let radians = direction_deg.to_radians();
        let r = f64::from(radius);
        let needle_end = Point {
            x: center.x + radians.sin() * r,
            y: center.y - radians.cos() * r,
        };

        Self { center, radius, needle_end }
    }

    pub fn measured(width: MeasureSpec, height: MeasureSpec, direction_deg: f64) -> Self {
        Self::new(measure(width), measure(height), direction_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn wrap_content_is_capped() {
        assert_eq!(measure(MeasureSpec::AtMost(300)), 100);
        assert_eq!(measure(MeasureSpec::AtMost(64)), 64);
        assert_eq!(measure(MeasureSpec::Exactly(300)), 300);
        assert_eq!(measure(MeasureSpec::Unspecified(0)), 0);
    }

    #[test]
    fn radius_follows_shorter_edge() {
        let geometry = CompassGeometry::new(200, 80, 0.0);
        assert_eq!(geometry.radius, 40);
        assert_eq!(geometry.center, Point { x: 100.0, y: 40.0 });
    }

    #[test]
    fn needle_points_along_bearing() {
        let north = CompassGeometry::new(100, 100, 0.0);
        assert!(close(north.needle_end, Point { x: 50.0, y: 0.0 }));

        let east = CompassGeometry::new(100, 100, 90.0);
        assert!(close(east.needle_end, Point { x: 100.0, y: 50.0 }));

        let south = CompassGeometry::new(100, 100, 180.0);
        assert!(close(south.needle_end, Point { x: 50.0, y: 100.0 }));
    }

    #[test]
    fn measured_layout_uses_wrap_size() {
        let geometry =
            CompassGeometry::measured(MeasureSpec::AtMost(500), MeasureSpec::AtMost(500), 270.0);
        assert_eq!(geometry.radius, 50);
        assert!(close(geometry.needle_end, Point { x: 0.0, y: 50.0 }));
    }
}
