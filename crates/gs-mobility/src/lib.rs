//! `gs-mobility` — waypoint timing: turning a polyline into timed route
//! segments.
//!
//! # Crate layout
//!
//! | Module             | Contents                                           |
//! |---------------------|----------------------------------------------------|
//! | [`waypoint_timing`] | cornering speed caps, accel/cruise/decel partitioning |
//! | [`error`]           | `MobilityError`, `MobilityResult<T>`               |
//!
//! # Movement model
//!
//! Waypoint timing is a pure function of geometry, not a stateful engine:
//! given a start point, a list of waypoints, a top speed, and a symmetric
//! acceleration, [`waypoint_timing::acceleration_waypoint_time_approximation`]
//! returns the `(x, y, time_shift)` triples of every accelerate/cruise/
//! decelerate partition needed to traverse the path without exceeding either
//! the top speed or each corner's angle-derived cornering speed. The caller
//! (an entity behavior, a demo harness) is responsible for turning those
//! triples into [`gs_core::RouteDelta`]s and handing them to an entity's
//! route planner.

pub mod error;
pub mod waypoint_timing;


pub use error::{MobilityError, MobilityResult};
pub use waypoint_timing::{
    acceleration_waypoint_time_approximation, angle, distance, max_corner_speeds, partition_distance,
    waypoint_route_deltas, DistancePartition,
};
