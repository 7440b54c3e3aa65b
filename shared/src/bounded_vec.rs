use thiserror::Error;

/// Errors that can occur when pushing into a `BoundedVec`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// The list already holds `capacity` items
    #[error("BoundedVec is full (capacity {capacity}). Flush it before pushing more items")]
    Full { capacity: usize },
}

/// A list with a fixed maximum length.
///
/// Never grows past its capacity: callers check `is_full()`, flush the
/// contents somewhere with `take()`, and continue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedVec<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedVec<T> {
    /// # Panics
    ///
    /// Panics if `capacity` is zero, since such a list could never accept an item.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "BoundedVec capacity must be at least 1");
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn push(&mut self, item: T) -> Result<(), CapacityError> {
        if self.is_full() {
            return Err(CapacityError::Full {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Moves the contents out, leaving an empty list with the same capacity
    pub fn take(&mut self) -> Self {
        let items = std::mem::replace(&mut self.items, Vec::with_capacity(self.capacity));
        Self {
            items,
            capacity: self.capacity,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<'a, T> IntoIterator for &'a BoundedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
