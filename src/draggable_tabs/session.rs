use super::types::TabId;

/// The single in-flight drag gesture of a store.
#[derive(Debug, Default)]
pub(super) struct DragSession {
    active_id: Option<TabId>,
    /// The pass the drop was applied in. Cleared at the end of a later pass, once the new
    /// layout has been painted with the dropped tab hidden.
    completing_since: Option<u64>,
}

impl DragSession {
    pub(super) fn active_id(&self) -> Option<TabId> {
        self.active_id
    }

    pub(super) fn is_completing(&self) -> bool {
        self.completing_since.is_some()
    }

    /// Returns the gesture this one replaced, if any.
    pub(super) fn start(&mut self, tab: TabId) -> Option<TabId> {
        self.completing_since = None;
        self.active_id.replace(tab).filter(|prev| *prev != tab)
    }

    pub(super) fn abort(&mut self) {
        self.active_id = None;
        self.completing_since = None;
    }

    pub(super) fn complete(&mut self, pass: u64) {
        self.completing_since = Some(pass);
    }

    /// Clear a completed gesture at the end of a pass that rendered after the drop.
    pub(super) fn end_pass(&mut self, pass: u64) -> Option<TabId> {
        let since = self.completing_since?;
        if pass <= since {
            return None;
        }
        self.completing_since = None;
        self.active_id.take()
    }

    /// The visibility rule of a rendered tab.
    pub(super) fn hides(&self, tab: TabId, being_dragged: bool) -> bool {
        being_dragged || (self.is_completing() && self.active_id == Some(tab))
    }
}
