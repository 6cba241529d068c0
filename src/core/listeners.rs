use indexmap::IndexMap;

pub type Listener<E> = Box<dyn FnMut(&E) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Observer list owned by a single widget. Listeners run in subscription
/// order. After `dispose` the registry stays empty for good.
pub struct Listeners<E> {
    next_id: u64,
    entries: IndexMap<SubscriptionId, Listener<E>>,
    disposed: bool,
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: IndexMap::new(),
            disposed: false,
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&E) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        if self.disposed {
            log::warn!("listener subscribed after dispose; it will never be called");
            return id;
        }
        self.entries.insert(id, Box::new(listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.entries.shift_remove(&id).is_some()
    }

    pub fn dispatch(&mut self, event: &E) {
        for listener in self.entries.values_mut() {
            listener(event);
        }
    }

    pub fn dispose(&mut self) {
        self.entries.clear();
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}
