use crate::codec::{check_stride, read_point, POINT_STRIDE};
use crate::error::CodecError;
use crate::point::Point;

/// Minimum metric distance from `query` to any point in the encoded set.
///
/// Scans the blob pair by pair in encoded order without materializing an
/// intermediate vector; this is the hot path when scoring many documents per
/// query. An empty set yields `Ok(None)` rather than a sentinel distance:
/// choosing a fallback value is caller policy, not codec behavior.
///
/// The metric must be deterministic and side-effect free; it receives the
/// query point and the narrowed f32 coordinates of each encoded point.
pub fn nearest_distance<F>(
    query: Point,
    bytes: &[u8],
    metric: F,
) -> Result<Option<f64>, CodecError>
where
    F: Fn(Point, f32, f32) -> f64,
{
    check_stride(bytes)?;
    let mut min_dist: Option<f64> = None;
    for chunk in bytes.chunks_exact(POINT_STRIDE) {
        let (x, y) = read_point(chunk);
        let dist = metric(query, x, y);
        if min_dist.map_or(true, |min| dist < min) {
            min_dist = Some(dist);
        }
    }
    Ok(min_dist)
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use super::nearest_distance;
    use crate::codec::encode;
    use crate::error::CodecError;
    use crate::metric;
    use crate::point::Point;
    use crate::test_data::CITIES;

    #[test]
    fn test_minimum_matches_per_point_scan() {
        let bytes = encode(CITIES).unwrap();
        let berlin = Point::new(13.405, 52.52);
        let expected = CITIES
            .iter()
            .map(|p| metric::haversine(berlin, p.x as f32, p.y as f32))
            .fold(f64::MAX, f64::min);
        let actual = nearest_distance(berlin, &bytes, metric::haversine)
            .unwrap()
            .unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_visits_every_point_once() {
        let bytes = encode(CITIES).unwrap();
        let calls = Cell::new(0usize);
        let counting = |q: Point, x: f32, y: f32| {
            calls.set(calls.get() + 1);
            metric::euclidean(q, x, y)
        };
        nearest_distance(Point::new(0.0, 0.0), &bytes, counting).unwrap();
        assert_eq!(CITIES.len(), calls.get());
    }

    #[test]
    fn test_empty_set_has_no_distance() {
        let result = nearest_distance(Point::new(10.0, 10.0), &[], metric::haversine).unwrap();
        assert_eq!(None, result);
    }

    #[test]
    fn test_propagates_format_error() {
        let result = nearest_distance(Point::new(0.0, 0.0), &[1, 2, 3], metric::euclidean);
        assert_eq!(Err(CodecError::Format { len: 3 }), result);
    }
}
