//! Pose updates from live pointer positions

use arplace_core::{HorizontalPlane, ObjectTransform, Ray, Vector2f};

use crate::gesture::{pointer_angle, pointer_distance, PinchBaseline};

/// Translate the object along the horizontal plane it rests on
///
/// The pointer ray is intersected with the plane through the object's
/// current height; a hit overwrites the horizontal coordinates and leaves
/// the height unchanged. A ray parallel to the plane (or pointing away from
/// it) leaves the position untouched for this frame.
pub fn apply_drag(object: &mut ObjectTransform, ray: &Ray) {
    let plane = HorizontalPlane::at_height(object.position.y);
    if let Some(hit) = plane.intersect_ray(ray) {
        object.position.x = hit.x;
        object.position.z = hit.z;
    }
}

/// Apply one pinch/rotate move event against the gesture baseline
///
/// Scale follows the ratio of live to initial pointer distance, clamped to
/// the allowed range; a zero-length baseline skips the scale update. Yaw
/// follows the angle delta with inverted sign to match screen-vs-world
/// handedness. Both updates are independent and both run on every event.
pub fn apply_pinch(
    object: &mut ObjectTransform,
    baseline: &PinchBaseline,
    p0: Vector2f,
    p1: Vector2f,
) {
    let distance = pointer_distance(p0, p1);
    if baseline.initial_distance > 0.0 {
        let factor = distance / baseline.initial_distance;
        object.set_scale_clamped(baseline.initial_scale * factor);
    }

    let angle = pointer_angle(p0, p1);
    let rotation_change = angle - baseline.initial_angle;
    object.yaw = baseline.initial_yaw - rotation_change;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use arplace_core::{Point3f, Vector3f, MAX_SCALE};

    fn baseline(distance: f32, scale: f32, angle: f32, yaw: f32) -> PinchBaseline {
        PinchBaseline {
            initial_distance: distance,
            initial_scale: scale,
            initial_angle: angle,
            initial_yaw: yaw,
        }
    }

    #[test]
    fn drag_overwrites_horizontal_coordinates() {
        let mut object = ObjectTransform {
            position: Point3f::new(0.0, 0.4, -1.0),
            ..Default::default()
        };
        let ray = Ray::new(
            Point3f::new(1.0, 2.4, -3.0),
            Vector3f::new(0.0, -1.0, 0.0),
        );
        apply_drag(&mut object, &ray);
        assert_relative_eq!(object.position.x, 1.0);
        assert_relative_eq!(object.position.y, 0.4);
        assert_relative_eq!(object.position.z, -3.0);
    }

    #[test]
    fn drag_with_parallel_ray_leaves_position() {
        let mut object = ObjectTransform {
            position: Point3f::new(0.5, 0.0, -1.0),
            ..Default::default()
        };
        let ray = Ray::new(Point3f::new(0.0, 1.0, 0.0), Vector3f::new(0.0, 0.0, -1.0));
        apply_drag(&mut object, &ray);
        assert_relative_eq!(object.position.x, 0.5);
        assert_relative_eq!(object.position.z, -1.0);
    }

    #[test]
    fn pinch_scales_by_distance_ratio() {
        let mut object = ObjectTransform::default();
        let b = baseline(40.0, 1.0, std::f32::consts::PI, 0.0);
        apply_pinch(
            &mut object,
            &b,
            Vector2f::new(90.0, 200.0),
            Vector2f::new(170.0, 200.0),
        );
        assert_relative_eq!(object.scale, 2.0);
        assert_relative_eq!(object.yaw, 0.0);
    }

    #[test]
    fn pinch_scale_is_clamped() {
        let mut object = ObjectTransform::default();
        let b = baseline(40.0, 1.0, std::f32::consts::PI, 0.0);
        apply_pinch(
            &mut object,
            &b,
            Vector2f::new(0.0, 200.0),
            Vector2f::new(800.0, 200.0),
        );
        assert_relative_eq!(object.scale, MAX_SCALE);
    }

    #[test]
    fn zero_baseline_distance_skips_scale() {
        let mut object = ObjectTransform {
            scale: 1.5,
            ..Default::default()
        };
        let b = baseline(0.0, 1.5, 0.0, 0.0);
        apply_pinch(
            &mut object,
            &b,
            Vector2f::new(0.0, 0.0),
            Vector2f::new(100.0, 0.0),
        );
        assert_relative_eq!(object.scale, 1.5);
    }

    #[test]
    fn rotation_inverts_angle_delta() {
        let mut object = ObjectTransform::default();
        let b = baseline(100.0, 1.0, 0.0, 0.5);
        // Pointer pair rotates by +90 degrees on screen.
        apply_pinch(
            &mut object,
            &b,
            Vector2f::new(0.0, 100.0),
            Vector2f::new(0.0, 0.0),
        );
        assert_relative_eq!(object.yaw, 0.5 - std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn pitch_and_roll_are_never_touched() {
        // Yaw is the only rotation channel the transform carries; a pinch
        // must leave position untouched as well.
        let mut object = ObjectTransform {
            position: Point3f::new(1.0, 2.0, 3.0),
            ..Default::default()
        };
        let b = baseline(10.0, 1.0, 0.0, 0.0);
        apply_pinch(
            &mut object,
            &b,
            Vector2f::new(0.0, 0.0),
            Vector2f::new(20.0, 0.0),
        );
        assert_relative_eq!(object.position.x, 1.0);
        assert_relative_eq!(object.position.y, 2.0);
        assert_relative_eq!(object.position.z, 3.0);
    }
}
