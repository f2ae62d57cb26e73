/// Axis-aligned bounding box used to center the mesh and place the camera
use nalgebra::Point3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
    pub center: Point3<f32>,
    /// Largest extent across the three axes
    pub size: f32,
}

impl BoundingBox {
    /// Scan all points for their extents. Returns `None` for an empty slice.
    pub fn from_points(points: &[Point3<f32>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let (min, max) = rest.iter().fold((*first, *first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        });

        let center = nalgebra::center(&min, &max);
        let extent = max - min;

        Some(Self {
            min,
            max,
            center,
            size: extent.max(),
        })
    }

    pub fn contains(&self, point: &Point3<f32>) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_bounds() {
        assert!(BoundingBox::from_points(&[]).is_none());
    }

    #[test]
    fn test_bounds_contain_every_point() {
        let points = vec![
            Point3::new(1.0, -2.0, 3.5),
            Point3::new(-4.0, 0.5, 0.0),
            Point3::new(2.25, 7.0, -1.0),
            Point3::new(0.0, 0.0, 0.0),
        ];
        let bbox = BoundingBox::from_points(&points).unwrap();

        assert_eq!(bbox.min, Point3::new(-4.0, -2.0, -1.0));
        assert_eq!(bbox.max, Point3::new(2.25, 7.0, 3.5));
        for p in &points {
            assert!(bbox.contains(p));
        }
    }

    #[test]
    fn test_center_is_midpoint() {
        let points = vec![Point3::new(-1.0, 2.0, 10.0), Point3::new(3.0, 6.0, 11.0)];
        let bbox = BoundingBox::from_points(&points).unwrap();

        for i in 0..3 {
            assert_eq!(bbox.center[i], (bbox.min[i] + bbox.max[i]) / 2.0);
        }
    }

    #[test]
    fn test_size_is_largest_extent() {
        let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 5.0, 2.0)];
        let bbox = BoundingBox::from_points(&points).unwrap();
        assert!((bbox.size - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_point() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let bbox = BoundingBox::from_points(&[p]).unwrap();
        assert_eq!(bbox.min, p);
        assert_eq!(bbox.max, p);
        assert_eq!(bbox.center, p);
        assert_eq!(bbox.size, 0.0);
    }
}
