/// Input event types the engine understands.
/// Generic — no page-specific semantics.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The cursor moved to viewport coordinates (x, y).
    PointerMove { x: f32, y: f32 },
}

/// A queue of input events.
/// DOM listeners write events into the queue; effects read them each frame
/// and the runner clears the queue after the tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from a DOM listener).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Drop all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_clear() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerMove { x: 11.0, y: 21.0 });
        assert_eq!(q.len(), 2);
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    fn iter_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 1.0, y: 0.0 });
        q.push(InputEvent::PointerMove { x: 2.0, y: 0.0 });
        let xs: Vec<f32> = q
            .iter()
            .map(|e| match e {
                InputEvent::PointerMove { x, .. } => *x,
            })
            .collect();
        assert_eq!(xs, vec![1.0, 2.0]);
    }
}
