// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # Sparkling VM
//!
//! Execution core for the Sparkling scripting language.
//!
//! This crate provides:
//! - the value model (nil, bool, int, float, string, array, function, host
//!   data, unresolved symbol stubs)
//! - a relocatable, geometrically-growing call stack of interleaved frame
//!   headers and registers
//! - global and per-program symbol tables, the latter populated lazily
//! - a uniform call protocol for host and script callers, including
//!   variadic argument routing
//! - the bytecode dispatch loop (arithmetic, control flow, arrays, closures,
//!   upvalues)
//! - the host embedding API (`Vm::new`, `Vm::call`, `Vm::stacktrace`, ...)
//!
//! The compiler, lexer/parser, AST validator, standard library and
//! command-line driver are out of scope: this crate only executes bytecode
//! something else produced.

mod bytecode;
mod config;
mod error;
mod stack;
mod symtab;
mod value;
mod vm;

#[cfg(test)]
mod stack_test;

pub use bytecode::{ConstKind, Opcode, Program, UpvalSource};
pub use config::VmConfig;
pub use error::{RuntimeError, VmError};
pub use stack::StackTrace;
pub use value::{Array, ClosureFn, Function, KeyError, NativeFn, ScriptFn, Value};
pub use vm::{Vm, VmResult};

/// Crate version, exposed for hosts that want to report it in diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
