//! Portable fallbacks, compiled only for the aliases bound to them.
//!
//! Every fallback builds on the 1.70 floor and behaves like its standard
//! counterpart.

#[cfg(any(test, csv_alias_lazy = "bundled"))]
mod lazy;

#[cfg(any(test, csv_alias_trim_ascii = "bundled"))]
mod trim;

#[cfg(any(test, csv_alias_utf8_chunks = "bundled"))]
mod utf8;

#[cfg(any(test, csv_alias_lazy = "bundled"))]
pub use lazy::Lazy;

#[cfg(any(test, csv_alias_trim_ascii = "bundled"))]
pub use trim::{trim_ascii, trim_ascii_end, trim_ascii_start};

#[cfg(any(test, csv_alias_utf8_chunks = "bundled"))]
pub use utf8::{utf8_chunks, Utf8Chunk, Utf8Chunks};
