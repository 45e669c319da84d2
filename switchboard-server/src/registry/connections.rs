use std::collections::HashMap;

use switchboard_core::PeerId;

/// Display names of live sessions.
///
/// An entry exists for every session from connect to disconnect; the name
/// inside stays `None` until the session's first named join. Only the
/// relay task touches this, so a plain map is enough.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    names: HashMap<PeerId, Option<String>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or overwrites) the name bound to `id`.
    pub fn register(&mut self, id: PeerId, display_name: Option<String>) {
        self.names.insert(id, display_name);
    }

    pub fn name_of(&self, id: &PeerId) -> Option<&str> {
        self.names.get(id).and_then(|name| name.as_deref())
    }

    /// Forgets `id` entirely. No-op when absent.
    pub fn remove(&mut self, id: &PeerId) {
        self.names.remove(id);
    }
}
