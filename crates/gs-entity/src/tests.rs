//! Unit tests for gs-entity.

use gs_core::{shape::rectangle, EntityId, RouteDelta, Shape};
use gs_spatial::CellIndex;

use crate::{waypoints_to_deltas, Entity, EntityBuilder, EntityError};

fn unit_square_entity(id: u64, name: &str, x: f64, y: f64) -> Entity {
    EntityBuilder::new(name)
        .shape(Shape::new(rectangle(1.0, 1.0, 2)).unwrap())
        .position(x, y)
        .build(EntityId(id))
}

#[cfg(test)]
mod plan_route {
    use super::*;

    #[test]
    fn empty_route_reserves_to_horizon_with_no_collision() {
        let mut grid = CellIndex::new(10, 10);
        let mut e = unit_square_entity(0, "a", 5.0, 5.0);
        let outcome = e.plan_route(0.0, 100.0, vec![], false, &mut grid).unwrap();
        assert!(!outcome.has_collision());
        // No real deltas, so the route "ends" immediately even though the
        // terminal filler still reserves the footprint out to max_time.
        assert_eq!(outcome.route_end_time, 0.0);
        assert!(!e.in_route(0.0));
        assert!(!e.in_route(100.0));
    }

    #[test]
    fn already_routed_is_rejected() {
        let mut grid = CellIndex::new(10, 10);
        let mut e = unit_square_entity(0, "a", 5.0, 5.0);
        e.plan_route(0.0, 100.0, vec![RouteDelta::new(1.0, 0.0, 5.0)], false, &mut grid).unwrap();
        let err = e
            .plan_route(1.0, 100.0, vec![RouteDelta::new(1.0, 0.0, 5.0)], false, &mut grid)
            .unwrap_err();
        assert!(matches!(err, EntityError::AlreadyRouted(_)));
    }

    #[test]
    fn non_positive_time_shift_is_rejected() {
        let mut grid = CellIndex::new(10, 10);
        let mut e = unit_square_entity(0, "a", 5.0, 5.0);
        let err = e
            .plan_route(0.0, 100.0, vec![RouteDelta::new(1.0, 0.0, 0.0)], false, &mut grid)
            .unwrap_err();
        assert!(matches!(err, EntityError::InvalidSegment(_)));
    }

    #[test]
    fn starting_strictly_after_the_horizon_is_rejected() {
        let mut grid = CellIndex::new(10, 10);
        let mut e = unit_square_entity(0, "a", 5.0, 5.0);
        let err = e.plan_route(100.5, 100.0, vec![], false, &mut grid).unwrap_err();
        assert!(matches!(err, EntityError::HorizonExceeded));
    }

    #[test]
    fn starting_exactly_at_the_horizon_is_allowed() {
        // P5 is strict: no event fires past max_time, but one scheduled
        // exactly on it is still legal.
        let mut grid = CellIndex::new(10, 10);
        let mut e = unit_square_entity(0, "a", 5.0, 5.0);
        let outcome = e.plan_route(100.0, 100.0, vec![], false, &mut grid).unwrap();
        assert_eq!(outcome.route_end_time, 100.0);
    }

    #[test]
    fn two_entities_head_on_detect_a_collision() {
        let mut grid = CellIndex::new(10, 10);
        let mut a = unit_square_entity(0, "a", 5.0, 3.0);
        let mut b = unit_square_entity(1, "b", 3.0, 5.0);

        let outcome_a = a
            .plan_route(0.0, 1000.0, vec![RouteDelta::new(0.0, 4.0, 1.0)], false, &mut grid)
            .unwrap();
        assert!(!outcome_a.has_collision());

        let outcome_b = b
            .plan_route(0.0, 1000.0, vec![RouteDelta::new(4.0, 0.0, 1.0)], false, &mut grid)
            .unwrap();
        assert!(outcome_b.has_collision());
        assert_eq!(outcome_b.collisions[0].0, EntityId(0));
    }

    #[test]
    fn raise_on_collision_rolls_back_reservations() {
        let mut grid = CellIndex::new(10, 10);
        let mut a = unit_square_entity(0, "a", 5.0, 5.0);
        a.plan_route(0.0, 1000.0, vec![], false, &mut grid).unwrap();

        let mut b = unit_square_entity(1, "b", 5.0, 5.0);
        let err = b.plan_route(0.0, 1000.0, vec![], true, &mut grid).unwrap_err();
        assert!(matches!(err, EntityError::CollisionForbidden(_)));

        // b's reservations must have been rolled back: a third entity can
        // still take the same cell without tripping a's collision with b.
        let mut c = unit_square_entity(2, "c", 20.0, 20.0);
        let outcome_c = c.plan_route(0.0, 1000.0, vec![], false, &mut grid).unwrap();
        assert!(!outcome_c.has_collision());
    }

    #[test]
    fn terminal_filler_is_omitted_when_route_reaches_the_horizon_exactly() {
        let mut grid = CellIndex::new(10, 10);
        let mut e = unit_square_entity(0, "a", 5.0, 5.0);
        let outcome = e.plan_route(0.0, 10.0, vec![RouteDelta::new(1.0, 0.0, 10.0)], false, &mut grid).unwrap();
        assert_eq!(outcome.route_end_time, 10.0);
    }
}

#[cfg(test)]
mod realize_route {
    use super::*;

    #[test]
    fn realize_partway_through_a_segment_prorates_and_records_history() {
        let mut grid = CellIndex::new(10, 10);
        let mut e = unit_square_entity(0, "a", 0.0, 0.0);
        e.plan_route(0.0, 100.0, vec![RouteDelta::new(10.0, 0.0, 10.0)], false, &mut grid).unwrap();

        let should_replan = e.realize_route(5.0, false);
        assert!(should_replan);
        assert_eq!(e.x, 5.0);
        assert_eq!(e.y, 0.0);
        assert_eq!(e.history().len(), 1);
        assert_eq!(e.history()[0].time_shift, 5.0);
        assert_eq!(e.history()[0].x_shift, 5.0);
    }

    #[test]
    fn static_entity_ignores_collision_triggered_realization() {
        let mut grid = CellIndex::new(10, 10);
        let mut e = EntityBuilder::new("wall")
            .shape(Shape::new(rectangle(1.0, 1.0, 2)).unwrap())
            .position(5.0, 5.0)
            .static_entity()
            .build(EntityId(0));
        e.plan_route(0.0, 100.0, vec![], false, &mut grid).unwrap();

        let should_replan = e.realize_route(50.0, true);
        assert!(!should_replan);
        assert_eq!(e.x, 5.0);
        assert!(e.history().is_empty());
    }

    #[test]
    fn static_entity_does_realize_non_collision_firings() {
        let mut grid = CellIndex::new(10, 10);
        let mut e = EntityBuilder::new("wall")
            .shape(Shape::new(rectangle(1.0, 1.0, 2)).unwrap())
            .position(5.0, 5.0)
            .static_entity()
            .build(EntityId(0));
        e.plan_route(0.0, 100.0, vec![], false, &mut grid).unwrap();

        assert!(e.realize_route(100.0, false));
    }
}

#[cfg(test)]
mod waypoints {
    use super::*;

    #[test]
    fn converts_absolute_waypoints_to_relative_deltas() {
        let deltas = waypoints_to_deltas(0.0, 0.0, &[(3.0, 0.0, 1.0), (3.0, 4.0, 1.0)]);
        assert_eq!(deltas.len(), 2);
        assert_eq!(deltas[0], RouteDelta::new(3.0, 0.0, 1.0));
        assert_eq!(deltas[1], RouteDelta::new(0.0, 4.0, 1.0));
    }

    #[test]
    fn first_waypoint_is_relative_to_the_starting_position() {
        let deltas = waypoints_to_deltas(5.0, 5.0, &[(8.0, 5.0, 2.0)]);
        assert_eq!(deltas[0], RouteDelta::new(3.0, 0.0, 2.0));
    }
}
