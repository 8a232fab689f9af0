//! # csv-compat
//!
//! Build-time capability detection and compatibility aliases for the csv
//! parser.
//!
//! Call sites use one stable name per construct. Which implementation that
//! name refers to is decided once, by the build script, from the toolchain
//! and the build configuration. Candidates that lose are never compiled.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Plan (build script + library)                           |
//! |  - Signals -> CapabilityLevel, alias bindings, token expansions   |
//! +-------------------------------------------------------------------+
//!                 |  cargo:rustc-cfg                  |
//!                 v                                   v
//! +--------------------------------+  +-------------------------------+
//! |  Layer 1: Canonical aliases    |  |  Layer 2: Conditional keywords|
//! |  Lazy, trim_ascii, Utf8Chunks  |  |  if_const!, const_value!,     |
//! |                                |  |  const_fn!                    |
//! +--------------------------------+  +-------------------------------+
//! ```
//!
//! ## Build configuration
//!
//! | Input | Effect |
//! |-------|--------|
//! | `$RUSTC -vV` | Compiler identity and version; unknown means `legacy` |
//! | `CSV_COMPAT_STD` | Declared level (`legacy`, `modern`, `latest` or `1.80`); may lower, never raise, a known rustc's level |
//! | `CSV_COMPAT_EXTERNAL` | Path list of Rust files providing canonical names; highest precedence |
//! | feature `bundled` | Portable fallbacks below the preferred level (default) |
//!
//! ## Quick Start
//!
//! ```
//! use csv_compat::{trim_ascii, utf8_chunks, Lazy};
//!
//! static HEADER: Lazy<Vec<&'static str>> = Lazy::new(|| vec!["id", "name"]);
//!
//! assert_eq!(trim_ascii(b"  name \t"), b"name");
//! assert_eq!(HEADER.len(), 2);
//!
//! let field: String = utf8_chunks(b"caf\xe9")
//!     .map(|chunk| chunk.valid())
//!     .collect();
//! assert_eq!(field, "caf");
//! ```

// =============================================================================
// Layer 0: Plan
// =============================================================================
pub mod plan;

// =============================================================================
// Layer 1: Canonical Aliases
// =============================================================================
pub mod alias;

// =============================================================================
// Layer 2: Conditional Keywords
// =============================================================================
mod keywords;

mod report;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use alias::{trim_ascii, trim_ascii_end, trim_ascii_start, utf8_chunks, Lazy, Utf8Chunk, Utf8Chunks};
pub use plan::COMPAT_VERSION;
pub use report::{BuildReport, REPORT};

#[doc(hidden)]
pub mod __private {
    pub use macros::qualify;

    /// Fails to compile for types with interior mutability or drop glue.
    pub const fn assert_plain_data<T: Copy + Sync>() {}
}
