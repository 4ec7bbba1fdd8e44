//! Reference-identity values

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A shared value compared by identity rather than by contents.
///
/// Two `Identity` handles are equal only when they point at the same
/// allocation, so a round trip through a unit proves the unit handed back
/// the very object it was given.
pub struct Identity<T: ?Sized>(Arc<T>);

impl<T> Identity<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl<T: ?Sized> Identity<T> {
    /// Whether both handles point at the same allocation
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Identity<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for Identity<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<T: ?Sized> Eq for Identity<T> {}

impl<T: ?Sized> Deref for Identity<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> From<Arc<T>> for Identity<T> {
    fn from(value: Arc<T>) -> Self {
        Self(value)
    }
}

/// Prints an identity tag (`Identity<Type>@address`) rather than contents.
impl<T: ?Sized> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Identity<{}>@{:p}",
            std::any::type_name::<T>(),
            Arc::as_ptr(&self.0) as *const ()
        )
    }
}
