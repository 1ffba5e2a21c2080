// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! The VM-wide global symbol table.

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::value::Value;

/// String-keyed mapping of global names to values, shared by every program a
/// `Vm` runs. Lives for as long as the `Vm` does.
#[derive(Default)]
pub(crate) struct GlobalTable {
    entries: HashMap<Rc<str>, Value>,
}

impl GlobalTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self, name: &str) -> Option<Value> {
        self.entries.get(name).cloned()
    }

    /// `GLBVAL`: binds `name` to `value`, refusing to overwrite an existing
    /// non-nil binding.
    pub(crate) fn define(&mut self, name: Rc<str>, value: Value) -> Result<(), RuntimeError> {
        if let Some(existing) = self.entries.get(&name) {
            if !existing.is_nil() {
                return Err(RuntimeError::Redefinition { name: name.to_string() });
            }
        }
        self.entries.insert(name, value);
        Ok(())
    }

    /// Unconditional bind, used by the host API (`add_library_functions`,
    /// `add_library_values`) which is allowed to replace bindings freely.
    pub(crate) fn set(&mut self, name: impl Into<Rc<str>>, value: Value) {
        self.entries.insert(name.into(), value);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&Rc<str>, &Value)> {
        self.entries.iter()
    }
}
