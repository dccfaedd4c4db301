//! Transformations over the contained value which carry absence through
//! without calling the callback.
//!
//! The `apply` pair wraps the callback's plain result, the `bind` pair
//! returns the callback's own `Optional` as is.

use crate::Optional;

pub fn apply<T, U>(f: impl FnOnce(T) -> U, o: Optional<T>) -> Optional<U> {
    match o.into_inner() {
        Some(value) => Optional::of(f(value)),
        None => Optional::empty(),
    }
}

/// Like [`apply`], but `f` only borrows the value.
pub fn apply_ref<T, U>(f: impl FnOnce(&T) -> U, o: &Optional<T>) -> Optional<U> {
    match o.as_ref() {
        Some(value) => Optional::of(f(value)),
        None => Optional::empty(),
    }
}

pub fn bind<T, U>(f: impl FnOnce(T) -> Optional<U>, o: Optional<T>) -> Optional<U> {
    match o.into_inner() {
        Some(value) => f(value),
        None => Optional::empty(),
    }
}

pub fn bind_ref<T, U>(f: impl FnOnce(&T) -> Optional<U>, o: &Optional<T>) -> Optional<U> {
    match o.as_ref() {
        Some(value) => f(value),
        None => Optional::empty(),
    }
}
