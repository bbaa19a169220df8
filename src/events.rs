use azalea::BlockPos;

// ============================================================
// BLOCK INTERACT EVENTS — The host tells us we touched a block
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// Breaking the target block
    Break,
    /// Right clicking the target block, either placing against it or using it
    Use,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockInteractEvent {
    pos: BlockPos,
    kind: InteractionKind,
}

impl BlockInteractEvent {
    pub fn new(pos: BlockPos, kind: InteractionKind) -> Self {
        Self { pos, kind }
    }

    /// Position of the block interacted with
    pub fn pos(&self) -> BlockPos {
        self.pos
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }
}

type Listener = Box<dyn FnMut(&BlockInteractEvent)>;

/// Observers of block interactions, called in subscription order.
#[derive(Default)]
pub struct InteractionListeners {
    listeners: Vec<Listener>,
}

impl InteractionListeners {
    pub fn subscribe(&mut self, listener: impl FnMut(&BlockInteractEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn dispatch(&mut self, event: &BlockInteractEvent) {
        tracing::trace!("[EVENTS] {:?} at {:?} -> {} listeners", event.kind, event.pos, self.listeners.len());
        for listener in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_accessors() {
        let pos = BlockPos::new(1, 64, -3);
        let event = BlockInteractEvent::new(pos, InteractionKind::Break);
        assert_eq!(event.pos(), pos);
        assert_eq!(event.kind(), InteractionKind::Break);
        assert_ne!(event, BlockInteractEvent::new(pos, InteractionKind::Use));
    }

    #[test]
    fn test_dispatch_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = InteractionListeners::default();
        assert!(listeners.is_empty());

        let first = Rc::clone(&seen);
        listeners.subscribe(move |e: &BlockInteractEvent| first.borrow_mut().push(("first", e.kind())));
        let second = Rc::clone(&seen);
        listeners.subscribe(move |e: &BlockInteractEvent| second.borrow_mut().push(("second", e.kind())));
        assert_eq!(listeners.len(), 2);

        listeners.dispatch(&BlockInteractEvent::new(BlockPos::new(0, 0, 0), InteractionKind::Use));
        listeners.dispatch(&BlockInteractEvent::new(BlockPos::new(0, 1, 0), InteractionKind::Break));

        assert_eq!(
            *seen.borrow(),
            vec![
                ("first", InteractionKind::Use),
                ("second", InteractionKind::Use),
                ("first", InteractionKind::Break),
                ("second", InteractionKind::Break),
            ]
        );
    }

    #[test]
    fn test_listener_can_count_breaks() {
        let breaks = Rc::new(RefCell::new(0u32));
        let mut listeners = InteractionListeners::default();
        let counter = Rc::clone(&breaks);
        listeners.subscribe(move |e: &BlockInteractEvent| {
            if e.kind() == InteractionKind::Break {
                *counter.borrow_mut() += 1;
            }
        });
        for y in 0..3 {
            listeners.dispatch(&BlockInteractEvent::new(BlockPos::new(0, y, 0), InteractionKind::Break));
        }
        listeners.dispatch(&BlockInteractEvent::new(BlockPos::new(0, 5, 0), InteractionKind::Use));
        assert_eq!(*breaks.borrow(), 3);
    }
}
