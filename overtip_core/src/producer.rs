// Copyright 2026 the Overtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

/// A configurable value that is either a constant or computed per datum.
///
/// The tooltip's direction, offset, and markup can each be set to a plain
/// value or to a function of `(datum, index)`. Both forms normalize to this
/// tagged union at the configuration boundary, so callers of [`Producer::call`]
/// never branch on which was supplied.
///
/// ```
/// use overtip_core::{Direction, Producer};
///
/// let fixed: Producer<(), Direction> = Direction::South.into();
/// assert_eq!(fixed.call(&(), 0), Direction::South);
///
/// let computed = Producer::computed(|_d: &u32, i| {
///     if i == 0 { Direction::North } else { Direction::East }
/// });
/// assert_eq!(computed.call(&7, 1), Direction::East);
/// ```
pub enum Producer<D, V> {
    /// A fixed value, cloned on every call.
    Constant(V),
    /// A function of the datum and its index.
    Computed(Box<dyn Fn(&D, usize) -> V>),
}

impl<D, V: Clone> Producer<D, V> {
    /// Wraps a fixed value.
    pub fn constant(value: V) -> Self {
        Self::Constant(value)
    }

    /// Wraps a per-datum function.
    pub fn computed(f: impl Fn(&D, usize) -> V + 'static) -> Self {
        Self::Computed(Box::new(f))
    }

    /// Produces the value for `(datum, index)`.
    pub fn call(&self, datum: &D, index: usize) -> V {
        match self {
            Self::Constant(v) => v.clone(),
            Self::Computed(f) => f(datum, index),
        }
    }
}

impl<D, V: Clone> From<V> for Producer<D, V> {
    fn from(value: V) -> Self {
        Self::Constant(value)
    }
}

impl<D, V: fmt::Debug> fmt::Debug for Producer<D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_clones_value() {
        let p: Producer<u32, &str> = Producer::constant("hello");
        assert_eq!(p.call(&1, 0), "hello");
        assert_eq!(p.call(&2, 9), "hello");
    }

    #[test]
    fn computed_sees_datum_and_index() {
        let p = Producer::computed(|d: &usize, i| *d + i);
        assert_eq!(p.call(&10, 3), 13);
    }

    #[test]
    fn from_value_wraps_as_constant() {
        let p: Producer<(), i32> = 5.into();
        assert!(matches!(p, Producer::Constant(5)));
    }
}
