use std::collections::BTreeMap;

use crate::draggable_tabs::{Island, IslandId, Tab, TabId};

/// Builds the initial islands of a [`crate::DraggableTabs`] from code, handing out ids that are
/// unique across the whole collection.
///
/// ```
/// use egui_islands::IslandsBuilder;
///
/// let mut builder = IslandsBuilder::new();
/// let editor = builder.add_island();
/// let tools = builder.add_island();
/// builder.push(editor, "main.rs", "fn main() {}").icon = Some("🦀".to_owned());
/// let readme = builder.push(editor, "README.md", "# Hello").id;
/// builder.push(tools, "Terminal", "$");
/// builder.set_active(editor, readme);
///
/// let islands = builder.finish();
/// assert_eq!(islands.len(), 2);
/// assert_eq!(islands[0].active_tab, Some(readme));
/// ```
pub struct IslandsBuilder<Content> {
    next_island: u64,
    next_tab: u64,
    islands: BTreeMap<IslandId, Island<Content>>,
}

impl<Content> Default for IslandsBuilder<Content> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Content> IslandsBuilder<Content> {
    pub fn new() -> Self {
        Self {
            next_island: 1,
            next_tab: 1,
            islands: BTreeMap::new(),
        }
    }

    /// Add an empty island to the right of the existing ones.
    #[must_use]
    pub fn add_island(&mut self) -> IslandId {
        let id = IslandId(self.next_island);
        self.next_island = self.next_island.saturating_add(1);
        self.islands.insert(id, Island::new(id, Vec::new()));
        id
    }

    /// Append a tab to `island`. The first tab of an island becomes its active tab.
    pub fn push(
        &mut self,
        island: IslandId,
        title: impl Into<String>,
        content: Content,
    ) -> &mut Tab<Content> {
        let id = TabId(self.next_tab);
        self.next_tab = self.next_tab.saturating_add(1);

        let island = self
            .islands
            .entry(island)
            .or_insert_with(|| Island::new(island, Vec::new()));
        if island.active_tab.is_none() {
            island.active_tab = Some(id);
        }
        island.tabs.push(Tab::new(id, title, content));
        let last = island.tabs.len() - 1;
        &mut island.tabs[last]
    }

    /// Make `tab` the active tab of `island`. Ignored unless the island holds that tab.
    pub fn set_active(&mut self, island: IslandId, tab: TabId) {
        if let Some(island) = self.islands.get_mut(&island) {
            if island.contains_tab(tab) {
                island.active_tab = Some(tab);
            }
        }
    }

    /// Islands in creation order.
    pub fn finish(self) -> Vec<Island<Content>> {
        self.islands.into_values().collect()
    }
}
