//! Bounded effect queue for `no_std` environments.
//!
//! A FIFO built on `critical-section` and `heapless::Deque`. Every operation
//! runs inside one critical section, so the producer (request handler) and the
//! consumer (render loop) may live in different tasks or interrupt contexts.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::config::QUEUE_CAPACITY;
use crate::effect::EffectCommand;

/// Error returned when trying to push into a full queue.
///
/// Gives the rejected value back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryPushError<T>(pub T);

/// A bounded, thread-safe FIFO queue.
///
/// A full queue rejects new values instead of evicting old ones.
pub struct EffectQueue<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

/// Queue of pending effect commands
pub type CommandQueue = EffectQueue<EffectCommand, QUEUE_CAPACITY>;

impl<T, const SIZE: usize> EffectQueue<T, SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a producer handle for this queue.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { queue: self }
    }

    /// Get a consumer handle for this queue.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { queue: self }
    }

    /// Try to append a value at the tail.
    ///
    /// Returns `Err(TryPushError(value))` if the queue is full.
    pub fn try_push(&self, value: T) -> Result<(), TryPushError<T>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(TryPushError)
        })
    }

    /// Append a value at the tail.
    ///
    /// Returns `false` and drops the value if the queue is full.
    pub fn push(&self, value: T) -> bool {
        self.try_push(value).is_ok()
    }

    /// Remove and return the head value, if any.
    pub fn pop(&self) -> Option<T> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }

    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_empty())
    }

    pub fn is_full(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_full())
    }

    /// Number of values currently queued
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub const fn capacity(&self) -> usize {
        SIZE
    }
}

impl<T, const SIZE: usize> Default for EffectQueue<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A producer handle for an [`EffectQueue`].
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    queue: &'a EffectQueue<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    /// Try to append a value at the tail.
    ///
    /// Returns `Err(TryPushError(value))` if the queue is full.
    pub fn try_push(&self, value: T) -> Result<(), TryPushError<T>> {
        self.queue.try_push(value)
    }

    /// Whether the next push would be rejected
    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }
}

/// A consumer handle for an [`EffectQueue`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    queue: &'a EffectQueue<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    /// Remove and return the head value, if any.
    pub fn pop(&self) -> Option<T> {
        self.queue.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
