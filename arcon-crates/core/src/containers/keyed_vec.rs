use std::marker::PhantomData;
use std::ops::Index;
use std::ops::IndexMut;

/// Structure for storing elements of type `Value`, the structure can only be indexed by structures
/// of type `Key`.
///
/// This is the arena in which the solver keeps its variables and directed constraints; all
/// cross-references between them are keys into a [`KeyedVec`] rather than pointers.
#[derive(Debug, Hash, PartialEq, Eq)]
pub struct KeyedVec<Key, Value> {
    /// [PhantomData] to ensure that the [KeyedVec] is bound to the structure
    key: PhantomData<Key>,
    /// Storage of the elements of type `Value`
    elements: Vec<Value>,
}

impl<Key, Value: Clone> Clone for KeyedVec<Key, Value> {
    fn clone(&self) -> Self {
        Self {
            key: PhantomData,
            elements: self.elements.clone(),
        }
    }
}

impl<Key, Value> Default for KeyedVec<Key, Value> {
    fn default() -> Self {
        Self {
            key: PhantomData,
            elements: Vec::default(),
        }
    }
}

impl<Key: StorageKey, Value> KeyedVec<Key, Value> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Add a new value to the vector.
    ///
    /// Returns the key for the inserted value.
    pub fn push(&mut self, value: Value) -> Key {
        self.elements.push(value);

        Key::create_from_index(self.elements.len() - 1)
    }

    /// Returns the value stored for `key`, or [`None`] if the key was never handed out by this
    /// vector.
    pub fn get(&self, key: Key) -> Option<&Value> {
        self.elements.get(key.index())
    }

    pub fn get_mut(&mut self, key: Key) -> Option<&mut Value> {
        self.elements.get_mut(key.index())
    }

    /// Iterate over the values in the vector.
    pub fn iter(&self) -> impl Iterator<Item = &'_ Value> {
        self.elements.iter()
    }

    /// Iterate over the keys of the vector in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = Key> {
        (0..self.elements.len()).map(Key::create_from_index)
    }

    /// Borrow the element at `read` immutably and the (different) element at `write` mutably at
    /// the same time.
    ///
    /// Panics if both keys refer to the same element.
    pub(crate) fn read_write(&mut self, read: Key, write: Key) -> (&Value, &mut Value) {
        let read = read.index();
        let write = write.index();
        assert_ne!(read, write, "cannot borrow the same element twice");

        if read < write {
            let (left, right) = self.elements.split_at_mut(write);
            (&left[read], &mut right[0])
        } else {
            let (left, right) = self.elements.split_at_mut(read);
            (&right[0], &mut left[write])
        }
    }
}

impl<Key: StorageKey, Value: Clone> KeyedVec<Key, Value> {
    /// Grows the vector with `default_value` until `key` is a valid index.
    pub(crate) fn accomodate(&mut self, key: Key, default_value: Value) {
        if key.index() >= self.elements.len() {
            self.elements.resize(key.index() + 1, default_value);
        }
    }
}

impl<Key: StorageKey, Value> Index<Key> for KeyedVec<Key, Value> {
    type Output = Value;

    fn index(&self, index: Key) -> &Self::Output {
        &self.elements[index.index()]
    }
}

impl<Key: StorageKey, Value> Index<&Key> for KeyedVec<Key, Value> {
    type Output = Value;

    fn index(&self, index: &Key) -> &Self::Output {
        &self.elements[index.index()]
    }
}

impl<Key: StorageKey, Value> IndexMut<Key> for KeyedVec<Key, Value> {
    fn index_mut(&mut self, index: Key) -> &mut Self::Output {
        &mut self.elements[index.index()]
    }
}

impl<Key: StorageKey, Value> FromIterator<Value> for KeyedVec<Key, Value> {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self {
            key: PhantomData,
            elements: iter.into_iter().collect(),
        }
    }
}

impl StorageKey for usize {
    fn index(&self) -> usize {
        *self
    }

    fn create_from_index(index: usize) -> Self {
        index
    }
}

/// A simple trait which requires that the structures implementing this trait can generate an index.
pub trait StorageKey: Clone {
    fn index(&self) -> usize;

    fn create_from_index(index: usize) -> Self;
}
