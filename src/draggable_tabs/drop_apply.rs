use super::types::{DragError, DropOutcome, DropTarget, Island, TabId};

/// Move `items[from]` to index `to`, shifting everything in between by one.
///
/// `to` is the index the element ends up at, i.e. it is interpreted after the removal.
pub(super) fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}

/// `(island index, tab index)` of the tab with this id.
pub(super) fn locate_tab<Content>(islands: &[Island<Content>], tab: TabId) -> Option<(usize, usize)> {
    islands
        .iter()
        .enumerate()
        .find_map(|(island_index, island)| Some((island_index, island.tab_index(tab)?)))
}

/// Index of the island a drop target resolves to.
pub(super) fn locate_target<Content>(
    islands: &[Island<Content>],
    target: DropTarget,
) -> Option<usize> {
    match target {
        DropTarget::Tab(tab) => locate_tab(islands, tab).map(|(island_index, _)| island_index),
        DropTarget::Island(island) => islands.iter().position(|i| i.id == island),
    }
}

/// Resolve a finished drag gesture into one mutation of `islands`.
///
/// Every lookup happens before anything is touched, so an `Err` leaves `islands` exactly as it was.
pub(super) fn apply_drop<Content>(
    islands: &mut [Island<Content>],
    dragged: TabId,
    target: Option<DropTarget>,
) -> Result<DropOutcome, DragError> {
    let target = target.ok_or(DragError::NoTarget)?;
    let (source_index, from) = locate_tab(islands, dragged).ok_or(DragError::UnknownTab(dragged))?;
    let target_index = locate_target(islands, target).ok_or(DragError::UnknownTarget(target))?;

    if source_index == target_index {
        let island = &mut islands[source_index];
        let to = match target {
            DropTarget::Tab(tab) => island.tab_index(tab).unwrap_or(from),
            // Dropped on the island itself: send the tab to the end of the strip.
            DropTarget::Island(_) => island.tabs.len().saturating_sub(1),
        };
        if from == to {
            return Ok(DropOutcome::Unchanged);
        }
        array_move(&mut island.tabs, from, to);
        return Ok(DropOutcome::Reordered {
            island: island.id,
            from,
            to,
        });
    }

    let source = &mut islands[source_index];
    let tab = source.tabs.remove(from);
    if source.active_tab == Some(dragged) {
        source.active_tab = source.tabs.first().map(|t| t.id);
    }
    let from_island = source.id;

    let target_island = &mut islands[target_index];
    target_island.tabs.push(tab);
    target_island.active_tab = Some(dragged);

    Ok(DropOutcome::Moved {
        from_island,
        to_island: target_island.id,
    })
}

/// Remove a tab from whichever island holds it.
///
/// When the removed tab was active, the tab that slides into its place becomes active, or the
/// new last tab if it was at the end.
pub(super) fn remove_tab<Content>(
    islands: &mut [Island<Content>],
    tab: TabId,
) -> Option<super::types::Tab<Content>> {
    let (island_index, index) = locate_tab(islands, tab)?;
    let island = &mut islands[island_index];
    let removed = island.tabs.remove(index);
    if island.active_tab == Some(tab) {
        island.active_tab = island
            .tabs
            .get(index)
            .or_else(|| island.tabs.last())
            .map(|t| t.id);
    }
    Some(removed)
}
