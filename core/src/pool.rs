//! Object pooling utilities for allocation reuse.
//!
//! Two tools live here:
//!
//! - [`Pooled<T>`], a container that keeps the allocation of a single value
//!   alive while the value is not in use. Releasing clears the value but keeps
//!   its memory (e.g. `Vec` capacity) for the next activation.
//! - [`ObjectPool`], a typed free-list cache. Instances are checked out by
//!   concrete type, released back when done, and handed out again on the next
//!   checkout of the same type. Scratch arrays are keyed by element type and
//!   requested size and reclaimed in bulk.
//!
//! # Motivation
//!
//! A render graph declares and executes the same kinds of objects every frame
//! (pass records, pass data, small scratch arrays). Allocating them anew each
//! frame churns the heap. The pool keeps released instances around so a
//! steady-state frame performs no allocations for them.
//!
//! # Example
//!
//! ```
//! use framegraph_core::pool::{ObjectPool, Poolable, Pooled};
//!
//! #[derive(Debug, Default)]
//! struct Buffer {
//!     data: Vec<u8>,
//! }
//!
//! impl Poolable for Buffer {
//!     fn new_empty() -> Self {
//!         Self::default()
//!     }
//!     fn reset(&mut self) {
//!         self.data.clear();
//!     }
//! }
//!
//! let mut pooled = Pooled::<Buffer>::default(); // starts as Pooled
//! let buf = pooled.activate();
//! buf.data.extend_from_slice(&[1, 2, 3]);
//! pooled.release();
//! assert!(pooled.inner().data.capacity() >= 3);
//!
//! let mut pool = ObjectPool::new();
//! let mut buffer = pool.checkout::<Buffer>();
//! buffer.data.push(7);
//! buffer.reset();
//! pool.release(buffer);
//! assert_eq!(pool.free_count::<Buffer>(), 1);
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Trait for types that can be pooled and reused.
///
/// Implementors must be able to create an empty instance and clear their
/// contents while preserving allocated capacity.
pub trait Poolable {
    /// Create a new empty instance for pool initialization.
    fn new_empty() -> Self;

    /// Reset the value to an empty state, preserving allocated capacity.
    ///
    /// For example, call `Vec::clear()` rather than replacing with a new `Vec`.
    fn reset(&mut self);
}

/// A container that preserves allocations across active/pooled transitions.
///
/// `Pooled<T>` is an enum with two states:
/// - [`Active`](Pooled::Active) — the value contains valid data and is in use
/// - [`Pooled`](Pooled::Pooled) — the value is cleared but its allocation is preserved
#[derive(Debug)]
pub enum Pooled<T: Poolable> {
    /// The value is active and contains valid data.
    Active(T),
    /// The value is cleared but its allocation is preserved for reuse.
    Pooled(T),
}

impl<T: Poolable> Pooled<T> {
    /// Create a new `Pooled` in active state with the given value.
    pub fn new(value: T) -> Self {
        Self::Active(value)
    }

    /// Check if the value is active (contains valid data).
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Check if the value is pooled (cleared, available for reuse).
    pub fn is_pooled(&self) -> bool {
        matches!(self, Self::Pooled(_))
    }

    /// Get a reference to the active value.
    ///
    /// Returns `None` if the value is pooled.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Active(t) => Some(t),
            Self::Pooled(_) => None,
        }
    }

    /// Get a mutable reference to the active value.
    ///
    /// Returns `None` if the value is pooled.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Active(t) => Some(t),
            Self::Pooled(_) => None,
        }
    }

    /// Release the value back to the pool.
    ///
    /// Clears the value but preserves its allocation. If already pooled,
    /// this is a no-op.
    pub fn release(&mut self) {
        if matches!(self, Self::Active(_)) {
            let taken = std::mem::replace(self, Self::Pooled(T::new_empty()));
            if let Self::Active(mut t) = taken {
                t.reset();
                *self = Self::Pooled(t);
            }
        }
    }

    /// Activate the pooled value for reuse.
    ///
    /// Transitions from pooled to active state and returns a mutable reference
    /// to the (cleared) value for the caller to fill in. If already active,
    /// returns the existing value.
    pub fn activate(&mut self) -> &mut T {
        if matches!(self, Self::Pooled(_)) {
            let taken = std::mem::replace(self, Self::Active(T::new_empty()));
            if let Self::Pooled(t) = taken {
                *self = Self::Active(t);
            }
        }
        match self {
            Self::Active(t) => t,
            _ => unreachable!(),
        }
    }

    /// Get a reference to the inner value regardless of state.
    pub fn inner(&self) -> &T {
        match self {
            Self::Active(t) | Self::Pooled(t) => t,
        }
    }
}

impl<T: Poolable> Default for Pooled<T> {
    fn default() -> Self {
        Self::Pooled(T::new_empty())
    }
}

/// Key of a scratch array free list: element type and requested size.
type TempArrayKey = (TypeId, usize);

/// Typed free-list cache for reusable instances and scratch arrays.
///
/// Checkouts hand out a previously released instance of the same concrete
/// type when one is available and construct a fresh one otherwise. There are
/// no identity or ordering guarantees between checkouts, and released
/// instances are stored as-is: callers reset state before releasing (or after
/// checking out) when it matters.
#[derive(Debug, Default)]
pub struct ObjectPool {
    /// Released instances, keyed by concrete type.
    free: HashMap<TypeId, Vec<Box<dyn Any>>>,
    /// Released scratch arrays, keyed by element type and size.
    free_arrays: HashMap<TempArrayKey, Vec<Box<dyn Any>>>,
    /// Scratch arrays handed out since the last bulk release.
    temp_in_use: Vec<(TempArrayKey, Box<dyn Any>)>,
    /// Instances currently checked out.
    outstanding: usize,
}

impl ObjectPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check out an instance of `T`.
    ///
    /// Returns a previously released instance if one is available, otherwise
    /// a new `T::default()`.
    pub fn checkout<T: Default + 'static>(&mut self) -> Box<T> {
        self.outstanding += 1;
        let recycled = self
            .free
            .get_mut(&TypeId::of::<T>())
            .and_then(|list| list.pop());

        match recycled.map(|any| any.downcast::<T>()) {
            Some(Ok(instance)) => instance,
            // The free list is keyed by `TypeId`, so a mismatched downcast cannot happen.
            Some(Err(_)) | None => Box::default(),
        }
    }

    /// Return an instance to the free list of its concrete type.
    pub fn release<T: 'static>(&mut self, instance: Box<T>) {
        self.outstanding = self.outstanding.saturating_sub(1);
        self.free
            .entry(TypeId::of::<T>())
            .or_default()
            .push(instance);
    }

    /// Check out a scratch array for `size` elements of `T`.
    ///
    /// The returned vector is empty with room for at least `size` elements.
    /// It stays owned by the pool and is reclaimed by
    /// [`release_all_temp_arrays`](Self::release_all_temp_arrays).
    pub fn temp_array<T: 'static>(&mut self, size: usize) -> &mut Vec<T> {
        let key = (TypeId::of::<T>(), size);
        let recycled = self.free_arrays.get_mut(&key).and_then(|list| list.pop());

        let array: Box<dyn Any> = match recycled {
            Some(array) => array,
            None => Box::new(Vec::<T>::with_capacity(size)),
        };
        self.temp_in_use.push((key, array));

        let (_, array) = self
            .temp_in_use
            .last_mut()
            .expect("temp array was just pushed");
        let array = array
            .downcast_mut::<Vec<T>>()
            .expect("temp array free lists are keyed by element type");
        array.clear();
        array
    }

    /// Reclaim every scratch array handed out since the last call.
    pub fn release_all_temp_arrays(&mut self) {
        for (key, array) in self.temp_in_use.drain(..) {
            self.free_arrays.entry(key).or_default().push(array);
        }
    }

    /// Number of released instances of `T` waiting for reuse.
    pub fn free_count<T: 'static>(&self) -> usize {
        self.free.get(&TypeId::of::<T>()).map_or(0, Vec::len)
    }

    /// Number of released scratch arrays of `T` with the given size.
    pub fn free_temp_array_count<T: 'static>(&self, size: usize) -> usize {
        self.free_arrays
            .get(&(TypeId::of::<T>(), size))
            .map_or(0, Vec::len)
    }

    /// Number of instances checked out and not yet released.
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Number of scratch arrays handed out since the last bulk release.
    pub fn temp_arrays_in_use(&self) -> usize {
        self.temp_in_use.len()
    }

    /// Drop every cached instance and scratch array.
    pub fn clear(&mut self) {
        log::trace!(
            "ObjectPool: dropping {} cached instances and {} scratch arrays",
            self.free.values().map(Vec::len).sum::<usize>(),
            self.free_arrays.values().map(Vec::len).sum::<usize>() + self.temp_in_use.len()
        );
        self.free.clear();
        self.free_arrays.clear();
        self.temp_in_use.clear();
    }
}
