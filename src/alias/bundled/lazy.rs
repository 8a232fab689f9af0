use std::fmt;
use std::ops::Deref;
use std::sync::{Mutex, OnceLock, PoisonError};

/// A value initialized on first access.
///
/// Mirrors `std::sync::LazyLock`: the initializer runs at most once, other
/// threads block until it finishes, and a panicking initializer poisons the
/// instance so later accesses panic as well.
pub struct Lazy<T, F = fn() -> T> {
    cell: OnceLock<T>,
    init: Mutex<Option<F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    pub const fn new(init: F) -> Self {
        Self {
            cell: OnceLock::new(),
            init: Mutex::new(Some(init)),
        }
    }

    pub fn force(this: &Self) -> &T {
        this.cell.get_or_init(|| {
            let init = this
                .init
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            match init {
                Some(init) => init(),
                None => panic!("Lazy instance has previously been poisoned"),
            }
        })
    }
}

impl<T, F: FnOnce() -> T> Deref for Lazy<T, F> {
    type Target = T;

    fn deref(&self) -> &T {
        Self::force(self)
    }
}

impl<T: Default> Default for Lazy<T> {
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Lazy");
        match self.cell.get() {
            Some(value) => tuple.field(value),
            None => tuple.field(&format_args!("<uninit>")),
        };
        tuple.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use super::*;

    #[test]
    fn initializes_once_across_threads() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        static VALUE: Lazy<usize> = Lazy::new(|| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            42
        });

        let handles: Vec<_> = (0..8).map(|_| thread::spawn(|| *VALUE)).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 42);
        }
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn accepts_consuming_closures() {
        let owned = String::from("delimiter");
        let lazy = Lazy::new(move || owned);
        assert_eq!(lazy.as_str(), "delimiter");
    }

    #[test]
    fn debug_shows_state() {
        let lazy: Lazy<u8> = Lazy::new(|| 7);
        assert_eq!(format!("{lazy:?}"), "Lazy(<uninit>)");
        Lazy::force(&lazy);
        assert_eq!(format!("{lazy:?}"), "Lazy(7)");
    }

    #[test]
    fn panicking_initializer_poisons() {
        let lazy: Lazy<u8> = Lazy::new(|| panic!("boom"));
        let first = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| *lazy));
        assert!(first.is_err());
        let second = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| *lazy));
        assert!(second.is_err());
    }
}
