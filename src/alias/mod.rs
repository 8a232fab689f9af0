//! # Layer 1: Canonical Aliases
//!
//! Each canonical name is bound by the build script to exactly one
//! candidate, in precedence order:
//!
//! 1. an external source (`CSV_COMPAT_EXTERNAL`),
//! 2. the standard library, when the capability level provides it,
//! 3. the bundled portable fallback (feature `bundled`).
//!
//! The other candidates are cfg'd out and never compiled.
//!
//! | Alias | Standard | Bundled |
//! |-------|----------|---------|
//! | `Lazy` | `std::sync::LazyLock` | [`OnceLock`](std::sync::OnceLock)-based `Lazy` |
//! | `trim_ascii*` | `<[u8]>::trim_ascii*` | byte scan |
//! | `Utf8Chunks` | `core::str::Utf8Chunks` | `core::str::from_utf8` loop |

#[cfg(any(
    test,
    csv_alias_lazy = "bundled",
    csv_alias_trim_ascii = "bundled",
    csv_alias_utf8_chunks = "bundled"
))]
#[cfg_attr(test, allow(dead_code, unused_imports))]
mod bundled;

#[cfg(any(csv_alias_trim_ascii = "standard", csv_alias_utf8_chunks = "standard"))]
mod standard;

#[cfg(csv_external)]
mod external;

// Lazy

#[cfg(csv_alias_lazy = "external")]
pub use self::external::Lazy;

#[cfg(csv_alias_lazy = "standard")]
pub use std::sync::LazyLock as Lazy;

#[cfg(csv_alias_lazy = "bundled")]
pub use self::bundled::Lazy;

// trim_ascii

#[cfg(csv_alias_trim_ascii = "external")]
pub use self::external::{trim_ascii, trim_ascii_end, trim_ascii_start};

#[cfg(csv_alias_trim_ascii = "standard")]
pub use self::standard::{trim_ascii, trim_ascii_end, trim_ascii_start};

#[cfg(csv_alias_trim_ascii = "bundled")]
pub use self::bundled::{trim_ascii, trim_ascii_end, trim_ascii_start};

// Utf8Chunks

#[cfg(csv_alias_utf8_chunks = "external")]
pub use self::external::{utf8_chunks, Utf8Chunk, Utf8Chunks};

#[cfg(csv_alias_utf8_chunks = "standard")]
pub use core::str::{Utf8Chunk, Utf8Chunks};
#[cfg(csv_alias_utf8_chunks = "standard")]
pub use self::standard::utf8_chunks;

#[cfg(csv_alias_utf8_chunks = "bundled")]
pub use self::bundled::{utf8_chunks, Utf8Chunk, Utf8Chunks};
