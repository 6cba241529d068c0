use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone)]
struct ScheduledEvent<E> {
    due: Instant,
    event: E,
}

/// FIFO of pending events plus a list of events due at a later instant.
pub struct EventQueue<E> {
    queue: VecDeque<E>,
    scheduled: Vec<ScheduledEvent<E>>,
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            scheduled: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: E) {
        self.queue.push_back(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = E>) {
        self.queue.extend(events);
    }

    pub fn emit_at(&mut self, event: E, due: Instant) {
        self.scheduled.push(ScheduledEvent { due, event });
    }

    /// Drops scheduled events matching `predicate`.
    pub fn cancel_scheduled(&mut self, mut predicate: impl FnMut(&E) -> bool) {
        self.scheduled.retain(|scheduled| !predicate(&scheduled.event));
    }

    pub fn next_ready(&mut self, now: Instant) -> Option<E> {
        self.move_due_to_queue(now);
        self.queue.pop_front()
    }

    pub fn drain_ready(&mut self, now: Instant) -> Vec<E> {
        self.move_due_to_queue(now);
        self.queue.drain(..).collect()
    }

    pub fn has_scheduled(&self) -> bool {
        !self.scheduled.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty() && self.scheduled.is_empty()
    }

    fn move_due_to_queue(&mut self, now: Instant) {
        let mut remaining = Vec::with_capacity(self.scheduled.len());
        let mut due = Vec::new();
        for scheduled in self.scheduled.drain(..) {
            if scheduled.due <= now {
                due.push(scheduled);
            } else {
                remaining.push(scheduled);
            }
        }
        due.sort_by_key(|scheduled| scheduled.due);
        self.scheduled = remaining;
        self.queue.extend(due.into_iter().map(|scheduled| scheduled.event));
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::EventQueue;
    use std::time::{Duration, Instant};

    #[test]
    fn immediate_events_drain_in_order() {
        let mut queue = EventQueue::new();
        queue.emit(1);
        queue.emit(2);
        assert_eq!(queue.drain_ready(Instant::now()), vec![1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn scheduled_events_wait_until_due() {
        let now = Instant::now();
        let mut queue = EventQueue::new();
        queue.emit_at("late", now + Duration::from_millis(200));
        queue.emit_at("early", now + Duration::from_millis(100));

        assert_eq!(queue.next_ready(now), None);
        assert!(queue.has_scheduled());
        assert_eq!(
            queue.drain_ready(now + Duration::from_millis(250)),
            vec!["early", "late"]
        );
    }

    #[test]
    fn cancel_removes_matching_scheduled_events() {
        let now = Instant::now();
        let mut queue = EventQueue::new();
        queue.emit_at(1, now);
        queue.emit_at(2, now);
        queue.cancel_scheduled(|event| *event == 1);
        assert_eq!(queue.drain_ready(now), vec![2]);
    }
}
