//! # Layer 2: Conditional Keywords
//!
//! Stable spellings for version-gated constructs. Each macro is defined
//! twice under mutually exclusive cfgs set by the build script, so only the
//! chosen expansion exists in the compiled crate.
//!
//! | Macro | Optimal | Degraded |
//! |-------|---------|----------|
//! | [`if_const!`] | `if const { cond } { .. }` | `if cond { .. }` |
//! | [`const_value!`] | `const NAME: T = v;` | `static NAME: T = v;` |
//! | [`const_fn!`] | `const fn` | `#[inline] fn` |
//!
//! The degraded forms behave identically at runtime; they only give up
//! compile-time evaluation. `const_value!` accepts plain data only, so a
//! `const` and a `static` of the same value cannot be told apart.

// =============================================================================
// if_const!
// =============================================================================

/// Branch on a condition that is known at compile time.
///
/// The condition may mention generic parameters of the enclosing function.
///
/// ```
/// use csv_compat::if_const;
///
/// fn lanes<T>() -> usize {
///     if_const!(core::mem::size_of::<T>() > 8 => { 2 } else { 1 })
/// }
///
/// assert_eq!(lanes::<u128>(), 2);
/// assert_eq!(lanes::<u8>(), 1);
/// ```
#[cfg(csv_token_if_const = "optimal")]
#[macro_export]
macro_rules! if_const {
    ($cond:expr => $then:block else $otherwise:block) => {
        if const { $cond } $then else $otherwise
    };
    ($cond:expr => $then:block) => {
        if const { $cond } $then
    };
}

/// Branch on a condition that is known at compile time.
///
/// The condition may mention generic parameters of the enclosing function.
///
/// ```
/// use csv_compat::if_const;
///
/// fn lanes<T>() -> usize {
///     if_const!(core::mem::size_of::<T>() > 8 => { 2 } else { 1 })
/// }
///
/// assert_eq!(lanes::<u128>(), 2);
/// assert_eq!(lanes::<u8>(), 1);
/// ```
#[cfg(csv_token_if_const = "degraded")]
#[macro_export]
macro_rules! if_const {
    ($cond:expr => $then:block else $otherwise:block) => {
        if $cond $then else $otherwise
    };
    ($cond:expr => $then:block) => {
        if $cond $then
    };
}

// =============================================================================
// const_value!
// =============================================================================

/// Declare immutable global values.
///
/// Values must be plain data: every type is checked for `Copy + Sync`, which
/// rules out cells, atomics and locks. Read them by name only. The degraded
/// form is a `static`, so the values cannot appear in patterns or array
/// lengths.
///
/// ```
/// csv_compat::const_value! {
///     /// Field separator.
///     pub DELIMITER: u8 = b',';
///     QUOTE: u8 = b'"';
/// }
///
/// assert_eq!(DELIMITER, b',');
/// assert_eq!(QUOTE, b'"');
/// ```
///
/// Shared mutable state is rejected in either form:
///
/// ```compile_fail
/// use std::sync::atomic::AtomicUsize;
///
/// csv_compat::const_value! {
///     ROWS_READ: AtomicUsize = AtomicUsize::new(0);
/// }
/// ```
#[cfg(csv_token_const_value = "optimal")]
#[macro_export]
macro_rules! const_value {
    ($($(#[$meta:meta])* $vis:vis $name:ident: $ty:ty = $value:expr;)*) => {
        $(
            $(#[$meta])* $vis const $name: $ty = $value;
            const _: () = $crate::__private::assert_plain_data::<$ty>();
        )*
    };
}

/// Declare immutable global values.
///
/// Values must be plain data: every type is checked for `Copy + Sync`, which
/// rules out cells, atomics and locks. Read them by name only. The degraded
/// form is a `static`, so the values cannot appear in patterns or array
/// lengths.
///
/// ```
/// csv_compat::const_value! {
///     /// Field separator.
///     pub DELIMITER: u8 = b',';
///     QUOTE: u8 = b'"';
/// }
///
/// assert_eq!(DELIMITER, b',');
/// assert_eq!(QUOTE, b'"');
/// ```
///
/// Shared mutable state is rejected in either form:
///
/// ```compile_fail
/// use std::sync::atomic::AtomicUsize;
///
/// csv_compat::const_value! {
///     ROWS_READ: AtomicUsize = AtomicUsize::new(0);
/// }
/// ```
#[cfg(csv_token_const_value = "degraded")]
#[macro_export]
macro_rules! const_value {
    ($($(#[$meta:meta])* $vis:vis $name:ident: $ty:ty = $value:expr;)*) => {
        $(
            $(#[$meta])* $vis static $name: $ty = $value;
            const _: () = $crate::__private::assert_plain_data::<$ty>();
        )*
    };
}

// =============================================================================
// const_fn!
// =============================================================================

/// Mark functions or methods `const` where the toolchain can evaluate them.
///
/// Works in item and impl-item position and accepts several functions.
/// Callers must not depend on const evaluation of these functions; the
/// degraded form is an ordinary `#[inline]` function.
///
/// ```
/// struct Cursor(usize);
///
/// impl Cursor {
///     csv_compat::const_fn! {
///         pub fn advance(&mut self, by: usize) -> usize {
///             self.0 += by;
///             self.0
///         }
///     }
/// }
///
/// let mut cursor = Cursor(1);
/// assert_eq!(cursor.advance(2), 3);
/// ```
#[cfg(csv_token_const_fn = "optimal")]
#[macro_export]
macro_rules! const_fn {
    ($($item:tt)*) => {
        $crate::__private::qualify! { const $($item)* }
    };
}

/// Mark functions or methods `const` where the toolchain can evaluate them.
///
/// Works in item and impl-item position and accepts several functions.
/// Callers must not depend on const evaluation of these functions; the
/// degraded form is an ordinary `#[inline]` function.
///
/// ```
/// struct Cursor(usize);
///
/// impl Cursor {
///     csv_compat::const_fn! {
///         pub fn advance(&mut self, by: usize) -> usize {
///             self.0 += by;
///             self.0
///         }
///     }
/// }
///
/// let mut cursor = Cursor(1);
/// assert_eq!(cursor.advance(2), 3);
/// ```
#[cfg(csv_token_const_fn = "degraded")]
#[macro_export]
macro_rules! const_fn {
    ($($item:tt)*) => {
        $crate::__private::qualify! { inline $($item)* }
    };
}
