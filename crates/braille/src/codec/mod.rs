//! Mode-aware encoder and decoder.
//!
//! Both directions are a single left-to-right pass driven by [`Mode`]. The
//! mode is local to one call; the symbol tables are read-only statics, so any
//! number of callers may translate concurrently.
//!
//! The directions handle bad input differently. The encoder is fail-fast and
//! rejects the whole input on the first unsupported character. The decoder is
//! best-effort and substitutes [`UNKNOWN`] for cells it cannot read.

mod decode;
mod encode;
mod mode;

pub use decode::{decode, decode_cells};
pub use encode::{encode, encode_cells};
pub use mode::{Mode, Reading};

/// Placeholder emitted for a cell that matches no table entry.
pub const UNKNOWN: char = '?';
