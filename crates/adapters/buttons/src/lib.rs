//! # solid-adapter-buttons
//!
//! Controls that implement only the gesture ports they need.
//!
//! | Control | `SingleTap` | `DoubleTap` | `LongTap` |
//! |---------|:-----------:|:-----------:|:---------:|
//! | [`FullButton`] | yes | yes | yes |
//! | [`BasicButton`] | yes | — | — |
//!
//! A basic button has no double tap, and saying otherwise does not compile:
//!
//! ```compile_fail
//! use solid_adapter_buttons::BasicButton;
//! use solid_adapter_console::MemoryConsole;
//! use solid_app::ports::DoubleTap;
//!
//! BasicButton::new(MemoryConsole::new()).double_tap();
//! ```
//!
//! ```compile_fail
//! use solid_adapter_buttons::BasicButton;
//! use solid_adapter_console::MemoryConsole;
//! use solid_app::ports::LongTap;
//!
//! BasicButton::new(MemoryConsole::new()).long_tap();
//! ```
//!
//! ## Dependency rule
//!
//! Depends on `solid-app` (port traits) only.

use solid_app::ports::{Console, DoubleTap, LongTap, SingleTap};

/// A button that supports every gesture.
pub struct FullButton<C> {
    console: C,
}

impl<C: Console> FullButton<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> SingleTap for FullButton<C> {
    fn single_tap(&self) {
        self.console.write_line("Single Tap");
    }
}

impl<C: Console> DoubleTap for FullButton<C> {
    fn double_tap(&self) {
        self.console.write_line("Double Tap");
    }
}

impl<C: Console> LongTap for FullButton<C> {
    fn long_tap(&self) {
        self.console.write_line("Long Tap");
    }
}

/// A button that only knows single taps.
pub struct BasicButton<C> {
    console: C,
}

impl<C: Console> BasicButton<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> SingleTap for BasicButton<C> {
    fn single_tap(&self) {
        self.console.write_line("Single Tap Protocol");
    }
}
