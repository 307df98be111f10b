use std::collections::VecDeque;

use egui::{Id, Response, Ui};

mod debug;
mod drop_apply;
mod integrity;
mod island_view;
mod options;
mod phase;
mod session;
mod tab_view;
mod types;

#[cfg(test)]
mod model_tests;

pub use options::DraggableTabsOptions;
pub use phase::RenderPhase;
pub use types::{DragError, DropOutcome, DropTarget, Island, IslandId, Tab, TabId};

use session::DragSession;
use tab_view::{TabViewCx, ViewEvent};
use types::PendingDrop;

/// How the host draws tab content and reacts to tab-level actions.
pub trait TabBehavior<Content> {
    /// Show the content panel of the active tab of an island.
    fn content_ui(&mut self, ui: &mut Ui, tab: &mut Tab<Content>);

    /// The close button of `tab` was clicked.
    ///
    /// Return `true` to have the store remove the tab (see [`DraggableTabs::close_tab`]).
    /// The default keeps the tab: closing is the host's call.
    fn on_close(&mut self, _tab: &Tab<Content>) -> bool {
        false
    }
}

/// A row of islands whose tabs can be reordered and moved between islands by dragging.
///
/// The store owns the islands, the id of the tab currently being dragged, and a transient
/// "drag completing" flag. Every mutation is synchronous; the only deferred step is clearing
/// the gesture at the end of the pass after a drop, so the new layout is painted once with the
/// dropped tab still hidden.
#[derive(Debug)]
pub struct DraggableTabs<Content> {
    pub options: DraggableTabsOptions,

    id: Id,
    islands: Vec<Island<Content>>,
    session: DragSession,
    phase: RenderPhase,
    pass: u64,

    pending_drop: Option<PendingDrop>,
    pending_drag_stop: Option<TabId>,

    debug_log: VecDeque<String>,
}

impl<Content> DraggableTabs<Content> {
    /// `id` must be unique among the stores shown in one egui context.
    pub fn new(id: impl Into<Id>, islands: Vec<Island<Content>>) -> Self {
        Self::new_with_options(id, islands, DraggableTabsOptions::default())
    }

    pub fn new_with_options(
        id: impl Into<Id>,
        islands: Vec<Island<Content>>,
        options: DraggableTabsOptions,
    ) -> Self {
        Self {
            phase: options.initial_phase(),
            options,
            id: id.into(),
            islands,
            session: DragSession::default(),
            pass: 0,
            pending_drop: None,
            pending_drag_stop: None,
            debug_log: VecDeque::new(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn islands(&self) -> &[Island<Content>] {
        &self.islands
    }

    pub fn island(&self, island: IslandId) -> Option<&Island<Content>> {
        self.islands.iter().find(|i| i.id == island)
    }

    /// Replace every island at once. Nothing is validated.
    pub fn set_islands(&mut self, islands: Vec<Island<Content>>) {
        self.islands = islands;
    }

    /// Consume the store, handing the islands back.
    pub fn into_islands(self) -> Vec<Island<Content>> {
        self.islands
    }

    /// Make `tab` the shown tab of `island`. Does nothing if the island is unknown.
    ///
    /// The tab is trusted to belong to the island.
    pub fn set_active_tab(&mut self, island: IslandId, tab: TabId) {
        if let Some(island) = self.islands.iter_mut().find(|i| i.id == island) {
            island.active_tab = Some(tab);
        }
    }

    /// The tab currently engaged in a drag gesture.
    pub fn active_id(&self) -> Option<TabId> {
        self.session.active_id()
    }

    /// True from a drop until the end of the next pass.
    pub fn is_drag_completing(&self) -> bool {
        self.session.is_completing()
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Whether a tab must be painted invisible (keeping its slot in the strip).
    ///
    /// `being_dragged` is true for the tab that the pointer is physically dragging.
    pub fn is_tab_hidden(&self, tab: TabId, being_dragged: bool) -> bool {
        self.session.hides(tab, being_dragged)
    }

    /// Begin a drag gesture. A gesture that is already in flight is replaced.
    pub fn on_drag_start(&mut self, tab: TabId) {
        if let Some(previous) = self.session.start(tab) {
            log::debug!("drag start {tab:?} replaces in-flight drag of {previous:?}");
            self.debug_log_event(format!("drag_start tab={tab:?} replaced={previous:?}"));
        } else {
            self.debug_log_event(format!("drag_start tab={tab:?}"));
        }
    }

    /// Finish a drag gesture, moving `dragged` according to `target`.
    ///
    /// On `Ok` the gesture stays "completing" until the next pass ends.
    ///
    /// # Errors
    ///
    /// A [`DragError`] when there is no target, or when the dragged tab or the target is not in
    /// any island. The islands are untouched then, and the gesture is cleared immediately.
    pub fn on_drag_end(
        &mut self,
        dragged: TabId,
        target: Option<DropTarget>,
    ) -> Result<DropOutcome, DragError> {
        match drop_apply::apply_drop(&mut self.islands, dragged, target) {
            Ok(outcome) => {
                log::debug!("drop {dragged:?} on {target:?}: {outcome:?}");
                self.debug_log_event(format!(
                    "drag_end tab={dragged:?} target={target:?} outcome={outcome:?}"
                ));
                self.session.complete(self.pass);
                self.check_integrity("drag_end");
                Ok(outcome)
            }
            Err(err) => {
                log::debug!("drop of {dragged:?} declined: {err}");
                self.debug_log_event(format!("drag_end tab={dragged:?} ABORT {err}"));
                self.session.abort();
                Err(err)
            }
        }
    }

    /// Remove a tab from its island, repairing the island's active tab.
    pub fn close_tab(&mut self, tab: TabId) -> Option<Tab<Content>> {
        let removed = drop_apply::remove_tab(&mut self.islands, tab);
        if removed.is_some() {
            self.debug_log_event(format!("close tab={tab:?}"));
            if self.session.active_id() == Some(tab) {
                self.session.abort();
            }
            self.check_integrity("close");
        }
        removed
    }

    /// Invariant violations of the current islands; empty when everything is consistent.
    pub fn integrity_issues(&self) -> Vec<String> {
        integrity::islands_integrity_issues(&self.islands)
    }

    /// Start of a UI pass.
    ///
    /// [`Self::ui`] calls this for you; call it yourself only when driving the store by hand.
    pub fn begin_pass(&mut self) {
        self.pass = self.pass.wrapping_add(1);
    }

    /// End of a UI pass: settles a drop made in an earlier pass, applies the drop observed while
    /// rendering this one, and enables interaction.
    pub fn end_pass(&mut self) {
        if let Some(settled) = self.session.end_pass(self.pass) {
            self.debug_log_event(format!("drag settled tab={settled:?}"));
        }

        if let Some(pending) = self.pending_drop.take() {
            self.pending_drag_stop = None;
            self.finish_observed_drag(pending.tab, Some(pending.target));
        } else if let Some(tab) = self.pending_drag_stop.take() {
            self.finish_observed_drag(tab, None);
        }
        self.phase = self.phase.after_pass();
    }

    /// A drag seen by the renderer has ended. Nobody awaits the result, so it is only logged.
    fn finish_observed_drag(&mut self, tab: TabId, target: Option<DropTarget>) {
        if let Err(err) = self.on_drag_end(tab, target) {
            log::trace!("drag of {tab:?} ended without a move: {err}");
        }
    }

    /// Show all islands side by side, filling the available space.
    pub fn ui(&mut self, ui: &mut Ui, behavior: &mut dyn TabBehavior<Content>) {
        self.begin_pass();

        let island_ids: Vec<IslandId> = self.islands.iter().map(|i| i.id).collect();
        if !island_ids.is_empty() {
            ui.columns(island_ids.len(), |columns| {
                for (column, island) in columns.iter_mut().zip(&island_ids) {
                    self.show_island(column, *island, behavior);
                }
            });
        }

        self.end_pass();
        if self.session.is_completing() {
            ui.ctx().request_repaint();
        }
    }

    /// Show a single island in the available space of `ui`.
    ///
    /// Returns `None` (and logs a warning) when no island has this id; nothing is drawn then.
    /// Events are applied right away, except for drops, which wait for [`Self::end_pass`].
    pub fn show_island(
        &mut self,
        ui: &mut Ui,
        island: IslandId,
        behavior: &mut dyn TabBehavior<Content>,
    ) -> Option<Response> {
        let Some(index) = self.islands.iter().position(|i| i.id == island) else {
            log::warn!("show_island: island {island:?} not found, rendering nothing");
            self.debug_log_event(format!("show_island MISSING island={island:?}"));
            return None;
        };

        let mut events = Vec::new();
        let cx = TabViewCx {
            store_id: self.id,
            phase: self.phase,
            session: &self.session,
            options: &self.options,
        };
        let response =
            island_view::island_ui(ui, &cx, &mut self.islands[index], behavior, &mut events);

        for event in events {
            self.handle_view_event(island, event, behavior);
        }
        Some(response)
    }

    fn handle_view_event(
        &mut self,
        island: IslandId,
        event: ViewEvent,
        behavior: &mut dyn TabBehavior<Content>,
    ) {
        match event {
            ViewEvent::Clicked(tab) => self.set_active_tab(island, tab),
            ViewEvent::CloseClicked(tab) => {
                let remove = self
                    .islands
                    .iter()
                    .flat_map(|i| &i.tabs)
                    .find(|t| t.id == tab)
                    .is_some_and(|t| behavior.on_close(t));
                if remove {
                    self.close_tab(tab);
                }
            }
            ViewEvent::DragStarted(tab) => self.on_drag_start(tab),
            ViewEvent::DragStopped(tab) => self.pending_drag_stop = Some(tab),
            ViewEvent::DroppedOn { dragged, target } => {
                self.queue_drop(dragged, DropTarget::Tab(target));
            }
            ViewEvent::DroppedOnIsland { dragged, island } => {
                self.queue_drop(dragged, DropTarget::Island(island));
            }
        }
    }

    fn queue_drop(&mut self, tab: TabId, target: DropTarget) {
        // The first target to take the payload wins; tabs are visited before their island.
        if self.pending_drop.is_none() {
            self.pending_drop = Some(PendingDrop { tab, target });
        }
    }
}
