#[doc(inline)]
pub use optional_impl::*;

mod combinators;
mod optional;

pub use combinators::{apply, apply_ref, bind, bind_ref};
pub use optional::Optional;

#[doc(hidden)]
pub mod private {
    use crate::Wrapper;

    /// Stands in for the field type when checking a `#[fields(Path)]` wrapper.
    pub enum Slot {}

    pub const fn assert_wrapper<W: Wrapper<Slot>>() {}
}

/// A type that can stand in for [`Optional`] as a `#[fields(Path)]` wrapper:
/// it is either holding a `T` or empty, and says which as an `Optional`.
pub trait Wrapper<T>: Sized {
    fn missing() -> Self;
    fn into_optional(self) -> Optional<T>;
}

impl<T> Wrapper<T> for Optional<T> {
    fn missing() -> Self {
        Optional::empty()
    }

    fn into_optional(self) -> Optional<T> {
        self
    }
}

impl<T> Wrapper<T> for Option<T> {
    fn missing() -> Self {
        None
    }

    fn into_optional(self) -> Optional<T> {
        self.into()
    }
}
