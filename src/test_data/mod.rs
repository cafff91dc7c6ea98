//! Shared point fixtures used by unit and scenario tests.

use crate::point::Point;

/// City coordinates as (longitude, latitude) degrees.
pub const CITIES: &[Point] = &[
    Point { x: -0.1276, y: 51.5072 },  // London
    Point { x: 2.3522, y: 48.8566 },   // Paris
    Point { x: -74.006, y: 40.7128 },  // New York
    Point { x: 151.2093, y: -33.8688 },// Sydney
    Point { x: 36.8219, y: -1.2921 },  // Nairobi
    Point { x: 139.6917, y: 35.6895 }, // Tokyo
];
