// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Callable values: script functions, their closures, and native functions.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::Value;
use crate::bytecode::Program;
use crate::error::RuntimeError;
use crate::vm::Vm;

/// A function compiled from Sparkling source, not yet closed over anything.
///
/// Every script function keeps a back-reference to the [`Program`] that owns
/// its bytecode and local symbol table; a top-level program is simply the
/// script function whose `entry` is that program's first instruction.
#[derive(Clone)]
pub struct ScriptFn {
    pub name: Rc<str>,
    pub entry: u32,
    pub decl_argc: u8,
    pub nregs: u8,
    pub program: Rc<Program>,
}

impl fmt::Debug for ScriptFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptFn")
            .field("name", &self.name)
            .field("entry", &self.entry)
            .field("decl_argc", &self.decl_argc)
            .field("nregs", &self.nregs)
            .finish_non_exhaustive()
    }
}

/// A script function paired with the values it captured from enclosing
/// scopes at the moment the `CLOSURE` instruction ran.
///
/// Each upvalue is its own cell rather than a plain [`Value`]: `STUPVAL`
/// writes through it, and every call to this same closure instance observes
/// the write, which is what gives closed-over locals their mutable,
/// shared-by-reference behavior.
#[derive(Clone, Debug)]
pub struct ClosureFn {
    pub proto: Rc<ScriptFn>,
    pub upvalues: Vec<Rc<RefCell<Value>>>,
}

/// The signature every native function is called with: the host VM (so it
/// can read/write its own context or re-enter the interpreter) and the
/// already-marshaled argument slice.
pub type NativeCallback = dyn Fn(&mut Vm, &[Value]) -> Result<Value, RuntimeError>;

/// A function implemented in host (Rust) code.
#[derive(Clone)]
pub struct NativeFn {
    pub name: Rc<str>,
    callback: Rc<NativeCallback>,
}

impl NativeFn {
    pub fn new(
        name: impl Into<Rc<str>>,
        callback: impl Fn(&mut Vm, &[Value]) -> Result<Value, RuntimeError> + 'static,
    ) -> Self {
        Self { name: name.into(), callback: Rc::new(callback) }
    }

    pub fn call(&self, vm: &mut Vm, args: &[Value]) -> Result<Value, RuntimeError> {
        (self.callback)(vm, args)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Any callable Sparkling value.
#[derive(Clone, Debug)]
pub enum Function {
    Script(ScriptFn),
    Closure(ClosureFn),
    Native(NativeFn),
}

impl Function {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Script(f) => &f.name,
            Self::Closure(c) => &c.proto.name,
            Self::Native(n) => &n.name,
        }
    }

    #[must_use]
    pub fn decl_argc(&self) -> u8 {
        match self {
            Self::Script(f) => f.decl_argc,
            Self::Closure(c) => c.proto.decl_argc,
            Self::Native(_) => 0,
        }
    }

    /// Entry point, declared arity, register count and owning program for
    /// anything that isn't a native function.
    #[must_use]
    pub(crate) fn script_entry(&self) -> Option<(u32, u8, u8, Rc<Program>)> {
        match self {
            Self::Script(f) => Some((f.entry, f.decl_argc, f.nregs, Rc::clone(&f.program))),
            Self::Closure(c) => {
                Some((c.proto.entry, c.proto.decl_argc, c.proto.nregs, Rc::clone(&c.proto.program)))
            }
            Self::Native(_) => None,
        }
    }
}
