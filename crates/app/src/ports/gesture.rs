//! Gesture ports — one trait per kind of tap.
//!
//! A control implements only the gestures it supports. Asking a control for
//! a gesture it does not declare is rejected by the compiler.

/// A control that reacts to a single tap.
pub trait SingleTap {
    fn single_tap(&self);
}

/// A control that reacts to a double tap.
pub trait DoubleTap {
    fn double_tap(&self);
}

/// A control that reacts to a long press.
pub trait LongTap {
    fn long_tap(&self);
}
