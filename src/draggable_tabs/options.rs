/// Options for [`super::DraggableTabs`].
#[derive(Clone, Debug)]
pub struct DraggableTabsOptions {
    /// Skip the static first pass and render interactive tabs right away.
    ///
    /// Useful in tests and when the store is created after the host UI is already running.
    pub start_interactive: bool,

    /// Minimum width of one tab in the strip, in points.
    pub tab_min_width: f32,

    /// Height of an island's tab strip, in points.
    pub tab_strip_height: f32,

    /// If true, record drag decisions in a small ring buffer (see [`super::DraggableTabs::debug_log`]).
    pub debug_event_log: bool,

    /// Maximum number of debug log lines to keep (ring buffer).
    pub debug_event_log_capacity: usize,

    /// If true, check the island invariants after every applied drop and log violations.
    pub debug_integrity: bool,

    /// If true, panic on integrity issues (debug-only).
    pub debug_integrity_panic: bool,
}

impl Default for DraggableTabsOptions {
    fn default() -> Self {
        Self {
            start_interactive: false,
            tab_min_width: 72.0,
            tab_strip_height: 28.0,
            debug_event_log: false,
            debug_event_log_capacity: 200,
            debug_integrity: false,
            debug_integrity_panic: false,
        }
    }
}

impl DraggableTabsOptions {
    pub(crate) fn initial_phase(&self) -> super::RenderPhase {
        if self.start_interactive {
            super::RenderPhase::Interactive
        } else {
            super::RenderPhase::Static
        }
    }
}
