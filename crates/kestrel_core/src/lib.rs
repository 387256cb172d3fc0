//! # KESTREL Core
//!
//! Allocation primitives shared by the KESTREL crates.
//!
//! ## Architecture Rules
//!
//! 1. **Released storage is recycled, never freed** - pools keep their slots
//! 2. **Handles, not pointers** - callers hold `SlotId`s, the pool owns the data
//! 3. **O(1) everything** - insert, release and lookup never scan
//!
//! ## Example
//!
//! ```rust
//! use kestrel_core::SlotPool;
//!
//! let mut pool: SlotPool<u32> = SlotPool::with_capacity(4);
//! let id = pool.insert(7);
//! assert_eq!(pool.release(id), Some(7));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod memory;

pub use memory::{SlotId, SlotPool};
