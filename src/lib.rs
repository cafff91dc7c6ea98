//! Binary encoding for multi-valued point fields.
//!
//! A document field holding many 2-D points is packed into a single
//! canonical byte blob: fixed 8-byte stride, coordinates narrowed to f32 and
//! written big-endian, points sorted by `(x, y)` so any permutation of the
//! same multiset encodes to identical bytes. Scoring scans the blob directly
//! to find the distance from a query point to the nearest encoded point,
//! without materializing per-point objects.

mod codec;
mod distance;
mod error;
mod point;

pub mod metric;
pub mod test_data;

pub use codec::{decode, encode, POINT_STRIDE};
pub use distance::nearest_distance;
pub use error::CodecError;
pub use point::Point;
