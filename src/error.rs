// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Runtime error kinds and the formatted error the host observes.

use std::fmt;

/// The distinguishable causes of a runtime error, one per row of the error
/// table. Each carries enough detail to reproduce the formatted message.
#[derive(Clone, Debug, PartialEq)]
pub enum RuntimeError {
    /// An operand to an arithmetic, bitwise, comparison, concat, indexing,
    /// negation or logical instruction had the wrong type.
    TypeError { expected: &'static str, got: &'static str, op: &'static str },
    /// `LDSYM` resolved a stub whose name has no live global binding.
    UnresolvedSymbol { name: String },
    /// `GLBVAL` tried to bind a name that is already bound to a non-nil value.
    Redefinition { name: String },
    /// A string index was outside `[0, len)` after normalization.
    StringIndexOutOfBounds { index: i64, len: usize },
    /// `NTHARG` requested a vararg beyond `extra_argc`.
    VarargOutOfBounds { index: i64, extra_argc: usize },
    /// `CALL` targeted a register that does not hold a function.
    NotCallable { got: &'static str },
    /// An array key evaluated to NaN.
    NanKey,
    /// `LT`/`LE`/`GT`/`GE` was asked to order two values that aren't both
    /// numbers or both strings.
    Uncomparable { left: &'static str, right: &'static str },
    /// Integer `DIV` or `MOD` by zero.
    DivisionByZero,
    /// Integer `DIV` or `MOD` of `i64::MIN` by `-1`: the mathematical result
    /// does not fit in `i64`.
    IntegerOverflow { op: &'static str },
    /// `SHL`/`SHR` shift amount was negative or at least the operand width.
    ShiftAmountOutOfRange { amount: i64 },
    /// The dispatch loop decoded an opcode it does not recognize.
    IllegalInstruction { opcode: u8 },
    /// A native function returned a nonzero error code.
    NativeError { name: String, code: i32 },
    /// A native function reported an error explicitly via `set_error_message`.
    HostError { message: String },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeError { expected, got, op } => {
                write!(f, "{op}: expected {expected}, got {got}")
            }
            Self::UnresolvedSymbol { name } => {
                write!(f, "global `{name}' does not exist or it is nil")
            }
            Self::Redefinition { name } => write!(f, "re-definition of global `{name}'"),
            Self::StringIndexOutOfBounds { index, len } => write!(
                f,
                "character at normalized index {index} is out of bounds for string of length {len}"
            ),
            Self::VarargOutOfBounds { index, extra_argc } => write!(
                f,
                "argument index {index} is out of bounds for {extra_argc} extra argument(s)"
            ),
            Self::NotCallable { got } => {
                write!(f, "attempt to call a non-function value of type {got}")
            }
            Self::NanKey => write!(f, "array key must not be NaN"),
            Self::Uncomparable { left, right } => write!(
                f,
                "ordered comparison of uncomparable values of type {left} and {right}"
            ),
            Self::DivisionByZero => write!(f, "attempted to divide by zero"),
            Self::IntegerOverflow { op } => {
                write!(f, "integer overflow in {op}: i64::MIN / -1 does not fit in i64")
            }
            Self::ShiftAmountOutOfRange { amount } => {
                write!(f, "shift amount {amount} is out of range")
            }
            Self::IllegalInstruction { opcode } => {
                write!(f, "illegal instruction 0x{opcode:02x}")
            }
            Self::NativeError { name, code } => {
                write!(f, "native function `{name}' returned error code {code}")
            }
            Self::HostError { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// The formatted, prefixed error the host reads back through
/// [`crate::Vm::last_error_message`].
///
/// Carries the un-prefixed [`RuntimeError`] alongside the fully formatted
/// message so hosts that want to match on the kind still can.
#[derive(Clone, Debug, PartialEq)]
pub struct VmError {
    pub kind: RuntimeError,
    message: String,
}

impl VmError {
    pub(crate) fn at_address(kind: RuntimeError, ip: u32) -> Self {
        let message = format!("runtime error at address 0x{ip:08x}: {kind}");
        Self { kind, message }
    }

    pub(crate) fn in_native_code(kind: RuntimeError) -> Self {
        let message = format!("runtime error in native code: {kind}");
        Self { kind, message }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for VmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for VmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
