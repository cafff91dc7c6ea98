//! Reference distance metrics in the shape the evaluator consumes.
//!
//! [`nearest_distance`](crate::nearest_distance) accepts any
//! `Fn(Point, f32, f32) -> f64`; deployments normally plug in whatever their
//! spatial context supplies. The two metrics here cover the common
//! geographic and planar conventions and keep the crate testable on its own.

use crate::point::Point;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters, treating `x` as longitude and `y` as
/// latitude in degrees.
pub fn haversine(query: Point, x: f32, y: f32) -> f64 {
    let lat1 = query.y.to_radians();
    let lat2 = (y as f64).to_radians();
    let delta_lat = (y as f64 - query.y).to_radians();
    let delta_lng = (x as f64 - query.x).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Planar distance for cartesian point sets.
pub fn euclidean(query: Point, x: f32, y: f32) -> f64 {
    let dx = x as f64 - query.x;
    let dy = y as f64 - query.y;
    dx.hypot(dy)
}
