use byteorder::{BigEndian, ByteOrder};
use log::trace;

use crate::error::CodecError;
use crate::point::Point;

/// Bytes per encoded point: two big-endian f32 fields, x then y.
pub const POINT_STRIDE: usize = 2 * 4;

/// Packs a collection of points into the canonical byte encoding.
///
/// The input order carries no meaning: a working copy is stable-sorted by
/// [`Point::canonical_cmp`], so every permutation of the same multiset of
/// points produces byte-identical output. Coordinates are narrowed from f64
/// to f32 with the platform's round-to-nearest conversion before packing;
/// the precision loss is intentional and reproducible.
///
/// An empty slice encodes to an empty vector.
pub fn encode(points: &[Point]) -> Result<Vec<u8>, CodecError> {
    let len = points
        .len()
        .checked_mul(POINT_STRIDE)
        .ok_or(CodecError::Allocation {
            points: points.len(),
        })?;
    let mut sorted = points.to_vec();
    if sorted.len() > 1 {
        sorted.sort_by(Point::canonical_cmp);
    }
    let mut bytes = vec![0u8; len];
    let mut offset = 0;
    for point in &sorted {
        BigEndian::write_f32(&mut bytes[offset..offset + 4], point.x as f32);
        BigEndian::write_f32(&mut bytes[offset + 4..offset + 8], point.y as f32);
        offset += POINT_STRIDE;
    }
    trace!("encoded {} points into {} bytes", sorted.len(), bytes.len());
    Ok(bytes)
}

/// Unpacks an encoded point set into the flat coordinate sequence
/// `[x0, y0, x1, y1, ...]`, preserving the canonical sort order.
pub fn decode(bytes: &[u8]) -> Result<Vec<f32>, CodecError> {
    check_stride(bytes)?;
    Ok(bytes.chunks_exact(4).map(BigEndian::read_f32).collect())
}

pub(crate) fn check_stride(bytes: &[u8]) -> Result<(), CodecError> {
    if bytes.len() % POINT_STRIDE != 0 {
        return Err(CodecError::Format { len: bytes.len() });
    }
    Ok(())
}

pub(crate) fn read_point(chunk: &[u8]) -> (f32, f32) {
    (
        BigEndian::read_f32(&chunk[..4]),
        BigEndian::read_f32(&chunk[4..]),
    )
}
