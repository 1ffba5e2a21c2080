// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tunables for constructing a [`crate::Vm`].

/// Configuration for a [`crate::Vm`] instance.
///
/// Mirrors the handful of knobs the reference workspace exposes per-process
/// (initial heap size, growth policy), just sized for a stack of register
/// slots rather than a fixed arena.
#[derive(Clone, Copy, Debug)]
pub struct VmConfig {
    /// Number of slots the stack is allocated with up front.
    pub initial_stack_capacity: usize,
    /// Multiplier applied to stack capacity whenever it must grow.
    pub stack_growth_factor: usize,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self { initial_stack_capacity: 8, stack_growth_factor: 2 }
    }
}

impl VmConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_initial_stack_capacity(mut self, capacity: usize) -> Self {
        self.initial_stack_capacity = capacity.max(1);
        self
    }

    #[must_use]
    pub fn with_stack_growth_factor(mut self, factor: usize) -> Self {
        self.stack_growth_factor = factor.max(2);
        self
    }
}
