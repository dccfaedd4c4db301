/// A value that may or may not be present.
///
/// Unlike a reference, an `Optional` owns its value and is copied along with
/// it, so two copies never observe each other's changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    pub const fn of(value: T) -> Self {
        Self(Some(value))
    }

    pub const fn empty() -> Self {
        Self(None)
    }

    /// Copies the referent if there is one.
    pub fn of_ref(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        Self(value.cloned())
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics if the value is missing. Reading a missing value is treated as
    /// a bug in the caller, use [`get_or_default`](Self::get_or_default) when
    /// absence is expected.
    #[track_caller]
    pub fn get_or_panic(self) -> T {
        match self.0 {
            Some(value) => value,
            None => panic!("get_or_panic called on missing Optional"),
        }
    }

    pub fn get_or_default(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// Borrows the stored value mutably; writes through it are seen by later
    /// reads of this same `Optional`.
    pub fn as_mut(&mut self) -> Option<&mut T> {
        self.0.as_mut()
    }

    /// Returns a fresh copy of the value which shares nothing with `self`.
    pub fn boxed_copy(&self) -> Option<Box<T>>
    where
        T: Clone,
    {
        self.0.as_ref().map(|value| Box::new(value.clone()))
    }

    pub fn as_ref(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}
