//! # Memory Management
//!
//! Recycling pools for values that are created and discarded every frame.
//!
//! ## Design Philosophy
//!
//! A pool grows to the high-water mark of live values and then stays there:
//! - Released slots go to a free list
//! - The next insert overwrites a free slot in place
//! - Steady-state traffic performs no heap allocation

mod pool;

pub use pool::{SlotId, SlotPool};
