//! # Event Queue
//!
//! FIFO of pending input events with recycled payload storage.
//!
//! ```text
//! push(Mouse) ──► mouse pool ──┐
//!                              ├──► order: [M0, K0, M1, ...] ──► front / pop
//! push(Key)   ──► key pool ────┘
//! ```
//!
//! Cursor movement produces a mouse event on every polled frame. Payloads
//! are parked in one [`SlotPool`] per payload shape, and the order ring
//! only holds tagged slot references. A popped slot goes back to the
//! pool its tag names, so the next event of the same kind reuses it in
//! place and the two shapes never share a slot.

use std::collections::VecDeque;

use kestrel_core::{SlotId, SlotPool};

use crate::event::{Event, KeyEvent, MouseEvent, SystemEvent};

/// Tagged reference into the payload pools.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Mouse(SlotId),
    Keyboard(SlotId),
    /// System events have no payload and live inline.
    System(SystemEvent),
}

/// Recycling pool capacities, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecycleStats {
    /// Mouse payload slots, live or free.
    pub mouse: usize,
    /// Keyboard payload slots, live or free.
    pub keyboard: usize,
}

/// FIFO queue of [`Event`]s.
///
/// Insertion order is arrival order. `count()` is always the number of
/// pushed, not yet popped events.
#[derive(Debug)]
pub struct EventQueue {
    /// Temporal order of pending events.
    order: VecDeque<Slot>,
    /// Mouse payload storage.
    mouse_pool: SlotPool<MouseEvent>,
    /// Keyboard payload storage.
    key_pool: SlotPool<KeyEvent>,
}

impl EventQueue {
    /// Slots pre-allocated per payload shape by [`EventQueue::new`].
    pub const DEFAULT_CAPACITY: usize = 32;

    /// Creates a queue with [`Self::DEFAULT_CAPACITY`] slots per shape.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a queue with `capacity` pre-allocated slots per shape.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity * 2),
            mouse_pool: SlotPool::with_capacity(capacity),
            key_pool: SlotPool::with_capacity(capacity),
        }
    }

    /// Appends an event at the tail. O(1) amortized.
    pub fn push(&mut self, event: Event) {
        let slot = match event {
            Event::Mouse(mouse) => Slot::Mouse(self.mouse_pool.insert(mouse)),
            Event::Keyboard(key) => Slot::Keyboard(self.key_pool.insert(key)),
            Event::System(system) => Slot::System(system),
        };
        self.order.push_back(slot);
    }

    /// Removes the oldest event and returns it. Does nothing on an empty queue.
    pub fn pop(&mut self) -> Option<Event> {
        let slot = self.order.pop_front()?;
        let event = match slot {
            Slot::Mouse(id) => self.mouse_pool.release(id).map(Event::Mouse),
            Slot::Keyboard(id) => self.key_pool.release(id).map(Event::Keyboard),
            Slot::System(system) => Some(Event::System(system)),
        };
        debug_assert!(event.is_some(), "queued slot was not live");
        event
    }

    /// Returns the oldest event.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Check [`Self::is_empty`] first or use
    /// [`Self::peek_front`].
    #[must_use]
    pub fn front(&self) -> Event {
        match self.order.front() {
            Some(&slot) => self.resolve(slot),
            None => panic!("EventQueue::front called on an empty queue"),
        }
    }

    /// Returns the newest event.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[must_use]
    pub fn back(&self) -> Event {
        match self.order.back() {
            Some(&slot) => self.resolve(slot),
            None => panic!("EventQueue::back called on an empty queue"),
        }
    }

    /// Returns the oldest event, or None if the queue is empty.
    #[must_use]
    pub fn peek_front(&self) -> Option<Event> {
        self.order.front().map(|&slot| self.resolve(slot))
    }

    /// Returns the number of pending events.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no event is pending.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drops every pending event. Payload slots stay allocated.
    pub fn clear(&mut self) {
        self.order.clear();
        self.mouse_pool.clear();
        self.key_pool.clear();
    }

    /// Returns the capacity of each recycling pool.
    #[must_use]
    pub fn recycled_slots(&self) -> RecycleStats {
        RecycleStats {
            mouse: self.mouse_pool.capacity(),
            keyboard: self.key_pool.capacity(),
        }
    }

    fn resolve(&self, slot: Slot) -> Event {
        match slot {
            Slot::Mouse(id) => match self.mouse_pool.get(id) {
                Some(&mouse) => Event::Mouse(mouse),
                None => unreachable!("queued mouse slot {} is not live", id.index()),
            },
            Slot::Keyboard(id) => match self.key_pool.get(id) {
                Some(&key) => Event::Keyboard(key),
                None => unreachable!("queued key slot {} is not live", id.index()),
            },
            Slot::System(system) => Event::System(system),
        }
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventAction;

    fn mouse(action: EventAction, x: i32, y: i32) -> Event {
        Event::Mouse(MouseEvent::with_action(action, x, y))
    }

    fn key(action: EventAction, code: u32) -> Event {
        Event::Keyboard(KeyEvent::with_action(action, code))
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = EventQueue::new();
        queue.push(mouse(EventAction::CursorMove, 1, 1));
        queue.push(key(EventAction::KeyPress, 65));
        queue.push(mouse(EventAction::LButtonDown, 2, 2));

        assert_eq!(queue.count(), 3);
        assert_eq!(queue.front(), mouse(EventAction::CursorMove, 1, 1));
        assert_eq!(queue.back(), mouse(EventAction::LButtonDown, 2, 2));

        assert_eq!(queue.pop(), Some(mouse(EventAction::CursorMove, 1, 1)));
        assert_eq!(queue.front(), key(EventAction::KeyPress, 65));
        assert_eq!(queue.pop(), Some(key(EventAction::KeyPress, 65)));
        assert_eq!(queue.pop(), Some(mouse(EventAction::LButtonDown, 2, 2)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut queue = EventQueue::new();
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.count(), 0);
        assert!(queue.peek_front().is_none());
    }

    #[test]
    fn test_count_tracks_pushes_minus_effective_pops() {
        let mut queue = EventQueue::with_capacity(1);
        let mut expected = 0_usize;

        for step in 0..200_u32 {
            if step % 3 == 2 {
                if queue.pop().is_some() {
                    expected -= 1;
                }
            } else if step % 2 == 0 {
                queue.push(mouse(EventAction::CursorMove, 0, 0));
                expected += 1;
            } else {
                queue.push(key(EventAction::KeyRelease, step));
                expected += 1;
            }
            assert_eq!(queue.count(), expected);
            assert_eq!(queue.is_empty(), expected == 0);
        }

        for _ in 0..500 {
            let _ = queue.pop();
        }
        assert_eq!(queue.count(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_recycled_mouse_slot_reads_back_new_payload() {
        let mut queue = EventQueue::with_capacity(0);
        queue.push(mouse(EventAction::LButtonDown, 10, 20));
        queue.pop();
        queue.push(mouse(EventAction::CursorMove, 30, 40));

        assert_eq!(queue.front(), mouse(EventAction::CursorMove, 30, 40));
        assert_eq!(queue.recycled_slots().mouse, 1);
    }

    #[test]
    fn test_pools_do_not_cross_contaminate() {
        let mut queue = EventQueue::with_capacity(0);
        queue.push(mouse(EventAction::LButtonDown, 5, 6));
        queue.push(key(EventAction::KeyPress, 87));
        queue.pop();
        queue.pop();

        // A freed mouse slot must not be handed to a key event and vice versa
        queue.push(key(EventAction::KeyRelease, 83));
        queue.push(mouse(EventAction::RButtonDown, 7, 8));

        assert_eq!(queue.pop(), Some(key(EventAction::KeyRelease, 83)));
        assert_eq!(queue.pop(), Some(mouse(EventAction::RButtonDown, 7, 8)));
        assert_eq!(
            queue.recycled_slots(),
            RecycleStats {
                mouse: 1,
                keyboard: 1
            }
        );
    }

    #[test]
    fn test_cursor_churn_does_not_grow_pool() {
        let mut queue = EventQueue::with_capacity(2);
        for i in 0..1_000 {
            queue.push(mouse(EventAction::CursorMove, i, i));
            queue.pop();
        }
        assert_eq!(queue.recycled_slots().mouse, 2);
    }

    #[test]
    fn test_system_events_pass_through() {
        let mut queue = EventQueue::new();
        queue.push(Event::System(SystemEvent::with_action(EventAction::WindowResize)));
        assert_eq!(queue.front().action(), EventAction::WindowResize);
        queue.pop();
        assert!(queue.is_empty());
    }

    #[test]
    #[should_panic(expected = "empty queue")]
    fn test_front_on_empty_panics() {
        let queue = EventQueue::new();
        let _ = queue.front();
    }
}
