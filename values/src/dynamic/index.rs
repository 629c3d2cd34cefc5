use core::ops::{Index, IndexMut};

use crate::dynamic::Value;

/// Hard read of an array element. Same as [`Value::at`].
impl Index<usize> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, index: usize) -> &Value {
        self.at(index)
    }
}

/// Write access to an array element.
///
/// Null is promoted to an empty Array, and an index past the end grows the
/// array, filling the gap with Null. Any other kind panics.
impl IndexMut<usize> for Value {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Value {
        self.at_or_grow(index)
    }
}

/// Hard read of an object entry. Same as [`Value::at_key`].
impl Index<&str> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, key: &str) -> &Value {
        self.at_key(key)
    }
}

/// Write access to an object entry. Same as [`Value::at_key_mut`].
impl IndexMut<&str> for Value {
    #[track_caller]
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.at_key_mut(key)
    }
}
