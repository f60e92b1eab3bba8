#![cfg_attr(not(test), no_std)]

//! Synchronous FIFO engine.
//!
//! Models a single-clock, fixed-capacity hardware FIFO as a plain data
//! structure: one call to [`SyncFifo::step`] is one clock edge. Write and
//! read requests are sampled together and resolved atomically within that
//! edge, so a driver owns time explicitly instead of relying on an implicit
//! clock.
//!
//! Overflow and underflow are not errors. A write against a full queue and a
//! read against an empty queue are silently absorbed, exactly like the
//! hardware they stand in for; callers that care should check
//! [`SyncFifo::is_full`] / [`SyncFifo::is_empty`] first.
//!
//! ```
//! use fifo_core::SyncFifo;
//!
//! let mut fifo = SyncFifo::<u8, 8>::new().unwrap();
//! fifo.step(true, false, 0xa5);
//! assert_eq!(fifo.step(false, true, 0), Some(0xa5));
//! assert!(fifo.is_empty());
//! ```

mod error;
mod fifo;

pub use error::Error;
pub use fifo::SyncFifo;
