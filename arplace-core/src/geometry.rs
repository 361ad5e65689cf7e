//! Ray and plane geometry for drag translation

use crate::types::{Point3f, Vector3f};

/// A ray cast from the viewpoint through a screen position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3f,
    pub direction: Vector3f,
}

impl Ray {
    pub fn new(origin: Point3f, direction: Vector3f) -> Self {
        Self { origin, direction }
    }
}

/// A horizontal plane at a fixed height, `y = height`
///
/// Drag translation intersects the pointer ray with the plane through the
/// object's current height so the object slides without leaving the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPlane {
    pub height: f32,
}

impl HorizontalPlane {
    pub fn at_height(height: f32) -> Self {
        Self { height }
    }

    /// Intersect a ray with the plane
    ///
    /// Returns `None` when the ray is parallel to the plane or the
    /// intersection lies behind the ray origin.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Point3f> {
        let denom = ray.direction.y;
        if denom.abs() < 1e-8 {
            return None;
        }
        let t = (self.height - ray.origin.y) / denom;
        if t < 0.0 {
            return None;
        }
        Some(ray.origin + ray.direction * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ray_hits_ground_plane() {
        let plane = HorizontalPlane::at_height(0.0);
        let ray = Ray::new(
            Point3f::new(0.0, 2.0, 0.0),
            Vector3f::new(1.0, -1.0, 0.0).normalize(),
        );
        let hit = plane.intersect_ray(&ray).unwrap();
        assert_relative_eq!(hit.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(hit.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(hit.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn parallel_ray_misses() {
        let plane = HorizontalPlane::at_height(0.0);
        let ray = Ray::new(Point3f::new(0.0, 1.0, 0.0), Vector3f::new(1.0, 0.0, 0.0));
        assert!(plane.intersect_ray(&ray).is_none());
    }

    #[test]
    fn intersection_behind_origin_misses() {
        let plane = HorizontalPlane::at_height(0.0);
        let ray = Ray::new(
            Point3f::new(0.0, 1.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
        );
        assert!(plane.intersect_ray(&ray).is_none());
    }

    #[test]
    fn plane_above_origin_is_reachable() {
        let plane = HorizontalPlane::at_height(1.5);
        let ray = Ray::new(Point3f::origin(), Vector3f::new(0.0, 1.0, 0.0));
        let hit = plane.intersect_ray(&ray).unwrap();
        assert_relative_eq!(hit.y, 1.5);
    }
}
