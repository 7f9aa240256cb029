//! Waypoint-timing: turns a polyline of waypoints into timed route segments
//! that respect a maximum speed, a symmetric acceleration, and reduced
//! cornering speed at sharp turns.
//!
//! Ported line-for-line from the cornering/acceleration model of the
//! original Python helpers: corner speed is capped by the angle at each
//! interior waypoint, then each leg is greedily split into an accelerate /
//! cruise / decelerate partition given the entry speed and the (already
//! angle-clamped) exit speed.

use gs_core::RouteDelta;

use crate::{MobilityError, MobilityResult};

/// Euclidean distance between two points.
pub fn distance(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    ((p1.0 - p2.0).powi(2) + (p1.1 - p2.1).powi(2)).sqrt()
}

/// Interior angle at `p2` of the path `p1 -> p2 -> p3`, in degrees.
///
/// Returns `0.0` if either leg has zero length (the turn is undefined).
pub fn angle(p1: (f64, f64), p2: (f64, f64), p3: (f64, f64)) -> f64 {
    let v1 = (p1.0 - p2.0, p1.1 - p2.1);
    let v2 = (p3.0 - p2.0, p3.1 - p2.1);
    if v1 == (0.0, 0.0) || v2 == (0.0, 0.0) {
        return 0.0;
    }
    let mag1 = (v1.0.powi(2) + v1.1.powi(2)).sqrt();
    let mag2 = (v2.0.powi(2) + v2.1.powi(2)).sqrt();
    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let cos_theta = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos_theta.acos() / std::f64::consts::PI * 180.0
}

/// Distance covered while accelerating at a constant rate between two speeds
/// (direction-agnostic: braking from `end_speed` to `start_speed` covers the
/// same distance).
pub fn acceleration_distance(start_speed: f64, end_speed: f64, acceleration: f64) -> f64 {
    if start_speed == end_speed {
        return 0.0;
    }
    let (lo, hi) = if start_speed > end_speed { (end_speed, start_speed) } else { (start_speed, end_speed) };
    (hi.powi(2) - lo.powi(2)) / (2.0 * acceleration.abs())
}

/// Speed reached after covering `distance` at constant acceleration from
/// `start_speed`. `distance` may be negative (braking) as long as the
/// result stays non-negative for the inputs the caller actually passes.
pub fn end_speed(start_speed: f64, distance: f64, acceleration: f64) -> f64 {
    if acceleration == 0.0 || distance == 0.0 {
        return start_speed;
    }
    (start_speed.powi(2) + 2.0 * acceleration * distance).sqrt()
}

/// Per-waypoint speed cap: `0.0` at the first and last waypoint, an
/// angle-dependent fraction of `max_speed` at each interior corner, then
/// walked backward so no corner demands more braking than the following
/// leg's distance can provide.
pub fn max_corner_speeds(waypoints: &[(f64, f64)], max_speed: f64, acceleration: f64) -> MobilityResult<Vec<f64>> {
    if acceleration <= 0.0 {
        return Err(MobilityError::NonPositiveAcceleration(acceleration));
    }
    if max_speed <= 0.0 {
        return Err(MobilityError::NonPositiveMaxSpeed(max_speed));
    }
    let n = waypoints.len();
    let mut speeds = vec![0.0; n];
    for idx in 1..n.saturating_sub(1) {
        let a = angle(waypoints[idx - 1], waypoints[idx], waypoints[idx + 1]);
        speeds[idx] = if a > 178.0 {
            max_speed
        } else if a > 170.0 {
            max_speed * 0.8
        } else if a > 160.0 {
            max_speed * 0.6
        } else if a > 150.0 {
            max_speed * 0.4
        } else if a > 140.0 {
            max_speed * 0.2
        } else {
            max_speed * 0.1
        };
    }
    for idx in (0..n.saturating_sub(1)).rev() {
        let leg_distance = distance(waypoints[idx], waypoints[idx + 1]);
        let reachable = end_speed(speeds[idx + 1], leg_distance, acceleration);
        speeds[idx] = speeds[idx].min(reachable);
    }
    Ok(speeds)
}

/// One phase (accelerate, cruise, or decelerate) of a leg, given as the
/// fraction of the leg's distance at which the phase ends and the time it
/// takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistancePartition {
    pub end_pct: f64,
    pub time: f64,
}

/// Splits one leg of `distance` into up to three timed partitions given the
/// entry speed, the speed cap at the far end (`max_end_speed`, from
/// [`max_corner_speeds`]), the global `max_speed`, and `acceleration`.
///
/// Returns the partitions (sorted by `end_pct`) and the speed actually
/// reached at the end of the leg.
pub fn partition_distance(
    distance: f64,
    start_speed: f64,
    max_end_speed: f64,
    max_speed: f64,
    acceleration: f64,
) -> MobilityResult<(Vec<DistancePartition>, f64)> {
    if acceleration <= 0.0 {
        return Err(MobilityError::NonPositiveAcceleration(acceleration));
    }
    let max_speed_possible = end_speed(start_speed, distance, acceleration);
    let max_end_speed = max_end_speed.min(max_speed_possible);
    let peak_speed = (((2.0 * acceleration * distance + start_speed.powi(2) + max_end_speed.powi(2)) / 2.0).sqrt()).min(max_speed);
    let reached_speed = max_end_speed.min(peak_speed);

    let mut partitions = Vec::new();
    let mut accel_end_pct = 0.0;
    let mut cruise_end_pct = 1.0;

    if peak_speed > start_speed {
        let accel_time = (peak_speed - start_speed) / acceleration;
        let accel_dist = acceleration_distance(start_speed, peak_speed, acceleration);
        accel_end_pct = accel_dist / distance;
        partitions.push(DistancePartition { end_pct: accel_end_pct, time: accel_time });
    }
    if peak_speed > max_end_speed {
        let decel_time = (peak_speed - max_end_speed) / acceleration;
        let decel_dist = acceleration_distance(peak_speed, max_end_speed, acceleration);
        cruise_end_pct = (distance - decel_dist) / distance;
        partitions.push(DistancePartition { end_pct: 1.0, time: decel_time });
    }
    if peak_speed == max_speed {
        let cruise_dist = (cruise_end_pct - accel_end_pct) * distance;
        let cruise_time = cruise_dist / peak_speed;
        partitions.push(DistancePartition { end_pct: cruise_end_pct, time: cruise_time });
    }
    partitions.sort_by(|a, b| a.end_pct.total_cmp(&b.end_pct));
    Ok((partitions, reached_speed))
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Approximates the time it takes to travel a polyline starting at
/// `(start_x, start_y)` through `waypoints`, honoring cornering speed limits
/// and a symmetric acceleration, rounding each partition's duration to
/// `round_time_to` decimal places.
///
/// Returns one `(x, y, time_shift)` triple per accelerate/cruise/decelerate
/// partition of every leg — directly usable as absolute waypoints for an
/// entity's route deltas.
pub fn acceleration_waypoint_time_approximation(
    start_x: f64,
    start_y: f64,
    waypoints: &[(f64, f64)],
    max_speed: f64,
    acceleration: f64,
    round_time_to: i32,
) -> MobilityResult<Vec<(f64, f64, f64)>> {
    if waypoints.is_empty() {
        return Err(MobilityError::EmptyRoute);
    }
    if max_speed <= 0.0 {
        return Err(MobilityError::NonPositiveMaxSpeed(max_speed));
    }

    let mut all_points = Vec::with_capacity(waypoints.len() + 1);
    all_points.push((start_x, start_y));
    all_points.extend_from_slice(waypoints);

    let waypoint_speeds = max_corner_speeds(&all_points, max_speed, acceleration)?;

    let mut out = Vec::new();
    let mut current_speed = 0.0;
    for idx in 0..all_points.len() - 1 {
        let start_point = all_points[idx];
        let end_point = all_points[idx + 1];
        let leg_distance = distance(start_point, end_point);
        let (partitions, reached_speed) = partition_distance(
            leg_distance,
            current_speed,
            waypoint_speeds[idx + 1],
            max_speed,
            acceleration,
        )?;
        current_speed = reached_speed;
        for partition in &partitions {
            out.push((
                start_point.0 + (end_point.0 - start_point.0) * partition.end_pct,
                start_point.1 + (end_point.1 - start_point.1) * partition.end_pct,
                round_to(partition.time, round_time_to),
            ));
        }
    }
    Ok(out)
}

/// [`acceleration_waypoint_time_approximation`], converted into the relative
/// [`RouteDelta`]s an entity's route planner expects.
pub fn waypoint_route_deltas(
    start_x: f64,
    start_y: f64,
    waypoints: &[(f64, f64)],
    max_speed: f64,
    acceleration: f64,
    round_time_to: i32,
) -> MobilityResult<Vec<RouteDelta>> {
    let triples = acceleration_waypoint_time_approximation(start_x, start_y, waypoints, max_speed, acceleration, round_time_to)?;
    let mut prev = (start_x, start_y);
    let mut out = Vec::with_capacity(triples.len());
    for (x, y, time_shift) in triples {
        out.push(RouteDelta::new(x - prev.0, y - prev.1, time_shift));
        prev = (x, y);
    }
    Ok(out)
}
