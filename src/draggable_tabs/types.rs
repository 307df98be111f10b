/// Identifies a [`Tab`]. Unique across every island of one store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabId(pub u64);

impl From<u64> for TabId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Identifies an [`Island`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IslandId(pub u64);

impl From<u64> for IslandId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One draggable unit of content.
///
/// `content` belongs to the caller: the store moves it around together with the tab but never
/// reads or mutates it. It is handed back to [`super::TabBehavior::content_ui`] when the tab is
/// the active one of its island.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tab<Content> {
    pub id: TabId,
    pub title: String,
    /// A short glyph (e.g. an emoji or icon-font codepoint) shown before the title.
    pub icon: Option<String>,
    /// Shows a "dirty" dot instead of the close button while not hovered.
    pub is_modified: bool,
    pub content: Content,
}

impl<Content> Tab<Content> {
    pub fn new(id: impl Into<TabId>, title: impl Into<String>, content: Content) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: None,
            is_modified: false,
            content,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn modified(mut self, is_modified: bool) -> Self {
        self.is_modified = is_modified;
        self
    }
}

/// An ordered container of tabs (a dockable pane).
///
/// The order of `tabs` is the visual left-to-right order of the tab strip.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Island<Content> {
    pub id: IslandId,
    pub tabs: Vec<Tab<Content>>,
    /// Must name a tab in `tabs` whenever it is set.
    pub active_tab: Option<TabId>,
}

impl<Content> Island<Content> {
    /// Create an island whose first tab (if any) is active.
    pub fn new(id: impl Into<IslandId>, tabs: Vec<Tab<Content>>) -> Self {
        let active_tab = tabs.first().map(|t| t.id);
        Self {
            id: id.into(),
            tabs,
            active_tab,
        }
    }

    #[must_use]
    pub fn with_active(mut self, tab: impl Into<TabId>) -> Self {
        self.active_tab = Some(tab.into());
        self
    }

    pub fn tab_index(&self, tab: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab)
    }

    pub fn contains_tab(&self, tab: TabId) -> bool {
        self.tab_index(tab).is_some()
    }

    /// The tab named by `active_tab`, if it is still present.
    pub fn active(&self) -> Option<&Tab<Content>> {
        let active = self.active_tab?;
        self.tabs.iter().find(|t| t.id == active)
    }

    /// Ordered tab ids, i.e. the sortable scope of this island's tab strip.
    pub fn tab_ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id).collect()
    }
}

/// What the pointer was over when a drag gesture ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// Over another tab of some island's strip.
    Tab(TabId),
    /// Over an island's strip background or body, not over a tab.
    Island(IslandId),
}

/// What a successful drop did to the island list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dragged tab already sat at the target position.
    Unchanged,
    /// The tab moved within one island.
    Reordered {
        island: IslandId,
        from: usize,
        to: usize,
    },
    /// The tab moved to the end of another island and became its active tab.
    Moved {
        from_island: IslandId,
        to_island: IslandId,
    },
}

/// Why a drop was declined. The islands are never modified when this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragError {
    /// The gesture ended over nothing droppable.
    NoTarget,
    /// No island holds the dragged tab (stale id).
    UnknownTab(TabId),
    /// No island matches the drop target (stale id).
    UnknownTarget(DropTarget),
}

impl std::fmt::Display for DragError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTarget => write!(f, "drag ended without a drop target"),
            Self::UnknownTab(tab) => write!(f, "dragged tab {} is not in any island", tab.0),
            Self::UnknownTarget(DropTarget::Tab(tab)) => {
                write!(f, "drop target tab {} is not in any island", tab.0)
            }
            Self::UnknownTarget(DropTarget::Island(island)) => {
                write!(f, "drop target island {} does not exist", island.0)
            }
        }
    }
}

impl std::error::Error for DragError {}

/// The egui drag-and-drop payload carried by an interactive tab.
#[derive(Clone, Copy, Debug)]
pub(super) struct TabPayload {
    /// Id of the owning store, so two stores on screen never accept each other's tabs.
    pub(super) store_id: egui::Id,
    pub(super) tab: TabId,
}

/// A drop observed while rendering, applied once the pass has rendered every island.
#[derive(Clone, Copy, Debug)]
pub(super) struct PendingDrop {
    pub(super) tab: TabId,
    pub(super) target: DropTarget,
}
