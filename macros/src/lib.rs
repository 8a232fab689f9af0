//! Procedural macros for the csv-compat capability layer.
//!
//! | Macro | Purpose |
//! |-------|---------|
//! | `qualify!` | Apply `const` or `#[inline]` to a run of functions |
//!
//! Nothing here reads build signals. The library's `const_fn!` picks the
//! qualifier from its own cfg and forwards to `qualify!`.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod qualify;

/// Apply a constancy qualifier to one or more functions.
///
/// The first token is the qualifier, the rest are `fn` items (free functions
/// or methods).
///
/// ```ignore
/// // pub const fn width(&self) -> usize { self.width }
/// qualify! { const pub fn width(&self) -> usize { self.width } }
///
/// // #[inline] pub fn width(&self) -> usize { self.width }
/// qualify! { inline pub fn width(&self) -> usize { self.width } }
/// ```
#[proc_macro]
pub fn qualify(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as qualify::QualifyInput);
    qualify::expand(input).into()
}
