//! Unit tests for gs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EntityId, EventId, ReservationId};

    #[test]
    fn index_roundtrip() {
        let id = EntityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(EntityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(EntityId(0) < EntityId(1));
        assert!(ReservationId(100) > ReservationId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(EntityId::INVALID.0, u64::MAX);
        assert_eq!(ReservationId::INVALID.0, u64::MAX);
        assert_eq!(EventId::INVALID.0, u64::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(EntityId(7).to_string(), "EntityId(7)");
    }
}

#[cfg(test)]
mod shape {
    use crate::shape::{circle, rectangle};
    use crate::Shape;

    #[test]
    fn rectangle_points_and_aabb() {
        let pts = rectangle(2.0, 4.0, 2);
        assert_eq!(pts, vec![(1.0, 2.0), (-1.0, 2.0), (-1.0, -2.0), (1.0, -2.0)]);
        let shape = Shape::new(pts).unwrap();
        let aabb = shape.aabb();
        assert_eq!(aabb.min_x, -1.0);
        assert_eq!(aabb.max_x, 1.0);
        assert_eq!(aabb.min_y, -2.0);
        assert_eq!(aabb.max_y, 2.0);
    }

    #[test]
    fn unit_square_aabb_is_one_by_one() {
        let shape = Shape::new(rectangle(1.0, 1.0, 2)).unwrap();
        assert_eq!(shape.aabb().width(), 1.0);
        assert_eq!(shape.aabb().height(), 1.0);
    }

    #[test]
    fn circle_has_requested_point_count() {
        let pts = circle(3.0, 6, 2);
        assert_eq!(pts.len(), 6);
        // First point lies on the positive x-axis at the given radius.
        assert_eq!(pts[0], (3.0, 0.0));
    }

    #[test]
    fn degenerate_shape_rejected() {
        assert!(Shape::new(vec![(0.0, 0.0), (1.0, 0.0)]).is_err());
    }

    #[test]
    fn aabb_translate() {
        let shape = Shape::new(rectangle(2.0, 2.0, 2)).unwrap();
        let moved = shape.aabb().translated(5.0, -3.0);
        assert_eq!(moved.min_x, 4.0);
        assert_eq!(moved.min_y, -4.0);
    }
}

#[cfg(test)]
mod route {
    use crate::RouteDelta;

    #[test]
    fn positive_time_shift_is_valid() {
        assert!(RouteDelta::new(1.0, 0.0, 2.0).is_valid());
    }

    #[test]
    fn non_positive_time_shift_is_invalid() {
        assert!(!RouteDelta::new(1.0, 0.0, 0.0).is_valid());
        assert!(!RouteDelta::new(1.0, 0.0, -1.0).is_valid());
    }
}

#[cfg(test)]
mod rng {
    use crate::{EntityId, EntityRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = EntityRng::new(12345, EntityId(0));
        let mut r2 = EntityRng::new(12345, EntityId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_entities_differ() {
        let mut r0 = EntityRng::new(1, EntityId(0));
        let mut r1 = EntityRng::new(1, EntityId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent entities should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = EntityRng::new(0, EntityId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn normal_is_deterministic_and_finite() {
        let mut r1 = EntityRng::new(7, EntityId(3));
        let mut r2 = EntityRng::new(7, EntityId(3));
        let a = r1.normal(0.0, 1.0);
        let b = r2.normal(0.0, 1.0);
        assert_eq!(a, b);
        assert!(a.is_finite());
    }
}
