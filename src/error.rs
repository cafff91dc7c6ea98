use thiserror::Error;

/// Errors surfaced by the codec and the distance evaluator.
///
/// These are always returned to the immediate caller; nothing in this crate
/// repairs malformed bytes or substitutes fallback values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Encoded bytes whose length is not a whole number of points.
    #[error("encoded point set has length {len}, not a multiple of the point stride")]
    Format { len: usize },

    /// Point count whose encoded size overflows addressable memory.
    #[error("cannot size an encoding buffer for {points} points")]
    Allocation { points: usize },
}
