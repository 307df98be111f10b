use ahash::HashSet;

use super::types::{IslandId, Island, TabId};

pub(super) fn islands_integrity_issues<Content>(islands: &[Island<Content>]) -> Vec<String> {
    let mut issues: Vec<String> = Vec::new();

    let mut island_ids: HashSet<IslandId> = HashSet::default();
    let mut tab_ids: HashSet<TabId> = HashSet::default();

    for island in islands {
        if !island_ids.insert(island.id) {
            issues.push(format!("integrity: duplicate island {:?}", island.id));
        }

        for tab in &island.tabs {
            if !tab_ids.insert(tab.id) {
                issues.push(format!(
                    "integrity: tab {:?} appears more than once (seen again in island {:?})",
                    tab.id, island.id
                ));
            }
        }

        if let Some(active) = island.active_tab {
            if !island.contains_tab(active) {
                issues.push(format!(
                    "integrity: island {:?} active {active:?} not in tabs={:?}",
                    island.id,
                    island.tab_ids()
                ));
            }
        }
    }

    issues
}
