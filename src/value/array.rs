// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! The array type: an insertion-ordered mapping from hashable values to
//! arbitrary values.

use std::collections::HashMap;
use std::rc::Rc;

use super::Value;

/// Why a value could not be used as an array key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyError {
    /// The key evaluated to NaN.
    Nan,
    /// The key's type has no stable identity to hash on.
    Unhashable(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum ArrayKey {
    Nil,
    Bool(bool),
    Int(i64),
    FloatBits(u64),
    Str(Rc<str>),
}

impl ArrayKey {
    fn from_value(value: &Value) -> Result<Self, KeyError> {
        match value {
            Value::Nil => Ok(Self::Nil),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Int(i) => Ok(Self::Int(*i)),
            Value::Float(f) => {
                if f.is_nan() {
                    Err(KeyError::Nan)
                } else {
                    Ok(Self::FloatBits(f.to_bits()))
                }
            }
            Value::String(s) => Ok(Self::Str(Rc::clone(s))),
            other => Err(KeyError::Unhashable(other.type_name())),
        }
    }
}

/// An insertion-ordered array: Sparkling's single compound data type, used
/// both as a list (integer keys) and as a map (arbitrary hashable keys).
#[derive(Clone, Debug, Default)]
pub struct Array {
    entries: Vec<(Value, Value)>,
    index: HashMap<ArrayKey, usize>,
}

impl Array {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        let key = ArrayKey::from_value(key).ok()?;
        self.index.get(&key).map(|&i| &self.entries[i].1)
    }

    /// Binds `key` to `value`, replacing any existing binding in place so
    /// iteration order is preserved for updates.
    pub fn set(&mut self, key: Value, value: Value) -> Result<(), KeyError> {
        let array_key = ArrayKey::from_value(&key)?;
        if let Some(&i) = self.index.get(&array_key) {
            self.entries[i] = (key, value);
        } else {
            self.index.insert(array_key, self.entries.len());
            self.entries.push((key, value));
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Value, Value)> {
        self.entries.iter()
    }
}
