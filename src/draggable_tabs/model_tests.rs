use super::{DraggableTabs, DragError, DropOutcome, DropTarget, Island, IslandId, Tab, TabId};

fn assert_islands_ok(store: &DraggableTabs<()>) {
    let issues = store.integrity_issues();
    assert!(
        issues.is_empty(),
        "island integrity failed:\n{}",
        issues.join("\n")
    );
}

fn island(id: u64, tabs: &[u64]) -> Island<()> {
    Island::new(id, tabs.iter().map(|&t| Tab::new(t, format!("tab {t}"), ())).collect())
}

fn order(store: &DraggableTabs<()>, island: u64) -> Vec<u64> {
    store
        .island(IslandId(island))
        .map(|i| i.tabs.iter().map(|t| t.id.0).collect())
        .unwrap_or_default()
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed ^ 0x15_1A_4D_15_1A_4D_15_1A)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005u64)
            .wrapping_add(1442695040888963407u64);
        self.0 >> 11
    }

    fn next_usize(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        (self.next_u64() as usize) % upper
    }
}

#[test]
fn reorder_within_island_moves_past_several_siblings() {
    let mut store = DraggableTabs::new("t", vec![island(1, &[1, 2, 3, 4])]);
    store.on_drag_start(TabId(2));
    let outcome = store.on_drag_end(TabId(2), Some(DropTarget::Tab(TabId(4))));
    assert!(matches!(outcome, Ok(DropOutcome::Reordered { from: 1, to: 3, .. })));
    assert_eq!(order(&store, 1), vec![1, 3, 4, 2]);
    assert_islands_ok(&store);
}

#[test]
fn move_across_islands_conserves_tabs_and_repairs_active() {
    let mut store = DraggableTabs::new(
        "t",
        vec![island(1, &[1, 2]).with_active(1u64), island(2, &[3]).with_active(3u64)],
    );
    store.on_drag_start(TabId(1));
    store
        .on_drag_end(TabId(1), Some(DropTarget::Tab(TabId(3))))
        .expect("drop must apply");

    assert_eq!(order(&store, 1), vec![2]);
    assert_eq!(order(&store, 2), vec![3, 1]);
    assert_eq!(store.islands()[0].active_tab, Some(TabId(2)));
    assert_eq!(store.islands()[1].active_tab, Some(TabId(1)));
    let total: usize = store.islands().iter().map(|i| i.tabs.len()).sum();
    assert_eq!(total, 3);
    assert_islands_ok(&store);
}

#[test]
fn unknown_target_is_reported_and_changes_nothing() {
    let mut store = DraggableTabs::new("t", vec![island(1, &[1, 2]), island(2, &[3])]);
    let before = store.islands().to_vec();

    store.on_drag_start(TabId(1));
    let err = store.on_drag_end(TabId(1), Some(DropTarget::Tab(TabId(42))));
    assert_eq!(err, Err(DragError::UnknownTarget(DropTarget::Tab(TabId(42)))));
    assert_eq!(store.islands(), before.as_slice());
    assert_eq!(store.active_id(), None);
    assert!(!store.is_drag_completing());
}

#[test]
fn drop_without_target_aborts_gesture() {
    let mut store = DraggableTabs::new("t", vec![island(1, &[1, 2])]);
    store.on_drag_start(TabId(2));
    assert_eq!(store.on_drag_end(TabId(2), None), Err(DragError::NoTarget));
    assert_eq!(store.active_id(), None);
    assert_eq!(order(&store, 1), vec![1, 2]);
}

#[test]
fn same_position_reorder_is_idempotent() {
    let mut store = DraggableTabs::new("t", vec![island(1, &[1, 2, 3])]);
    for _ in 0..3 {
        store.on_drag_start(TabId(3));
        assert_eq!(
            store.on_drag_end(TabId(3), Some(DropTarget::Tab(TabId(3)))),
            Ok(DropOutcome::Unchanged)
        );
    }
    assert_eq!(order(&store, 1), vec![1, 2, 3]);
}

#[test]
fn completing_flag_lasts_through_next_pass() {
    let mut store = DraggableTabs::new("t", vec![island(1, &[1, 2]), island(2, &[3])]);
    store.begin_pass();
    store.on_drag_start(TabId(2));
    assert_eq!(store.active_id(), Some(TabId(2)));
    assert!(!store.is_tab_hidden(TabId(2), false));

    store
        .on_drag_end(TabId(2), Some(DropTarget::Island(IslandId(2))))
        .expect("drop must apply");
    assert!(store.is_drag_completing());
    assert!(store.is_tab_hidden(TabId(2), false));
    assert!(!store.is_tab_hidden(TabId(1), false));
    store.end_pass();
    assert!(store.is_drag_completing(), "still the same pass");

    store.begin_pass();
    assert!(store.is_drag_completing(), "the next pass paints the new layout first");
    assert!(store.is_tab_hidden(TabId(2), false));
    store.end_pass();
    assert!(!store.is_drag_completing());
    assert_eq!(store.active_id(), None);
    assert!(!store.is_tab_hidden(TabId(2), false));
}

#[test]
fn second_drag_start_replaces_first() {
    let mut store = DraggableTabs::new("t", vec![island(1, &[1, 2, 3])]);
    store.on_drag_start(TabId(1));
    store.on_drag_start(TabId(3));
    assert_eq!(store.active_id(), Some(TabId(3)));

    store
        .on_drag_end(TabId(3), Some(DropTarget::Tab(TabId(1))))
        .expect("drop must apply");
    assert_eq!(order(&store, 1), vec![3, 1, 2]);
}

#[test]
fn set_active_tab_ignores_unknown_island() {
    let mut store = DraggableTabs::new("t", vec![island(1, &[1, 2])]);
    store.set_active_tab(IslandId(1), TabId(2));
    assert_eq!(store.islands()[0].active_tab, Some(TabId(2)));

    let before = store.islands().to_vec();
    store.set_active_tab(IslandId(9), TabId(1));
    assert_eq!(store.islands(), before.as_slice());
}

#[test]
fn stale_ids_after_set_islands_degrade_to_noop() {
    let mut store = DraggableTabs::new("t", vec![island(1, &[1, 2]), island(2, &[3])]);
    store.on_drag_start(TabId(1));
    store.set_islands(vec![island(5, &[7, 8])]);

    assert_eq!(
        store.on_drag_end(TabId(1), Some(DropTarget::Tab(TabId(8)))),
        Err(DragError::UnknownTab(TabId(1)))
    );
    assert_eq!(order(&store, 5), vec![7, 8]);
}

#[test]
fn close_tab_repairs_active_and_clears_gesture() {
    let mut store = DraggableTabs::new("t", vec![island(1, &[1, 2, 3]).with_active(3u64)]);
    store.on_drag_start(TabId(3));
    let closed = store.close_tab(TabId(3));
    assert_eq!(closed.map(|t| t.id), Some(TabId(3)));
    assert_eq!(store.islands()[0].active_tab, Some(TabId(2)));
    assert_eq!(store.active_id(), None);
    assert!(store.close_tab(TabId(3)).is_none());
    assert_islands_ok(&store);
}

#[test]
fn random_drags_keep_active_tab_invariant() {
    for seed in 0..32u64 {
        let mut rng = Rng::new(seed);
        let island_count = 1 + rng.next_usize(4);
        let mut next_tab = 1;
        let islands: Vec<Island<()>> = (0..island_count as u64)
            .map(|island_id| {
                let tab_count = rng.next_usize(5);
                let tabs: Vec<u64> = (0..tab_count)
                    .map(|_| {
                        next_tab += 1;
                        next_tab
                    })
                    .collect();
                island(island_id, &tabs)
            })
            .collect();
        let total = next_tab - 1;

        let mut store = DraggableTabs::new(egui::Id::new(("random", seed)), islands);
        assert_islands_ok(&store);

        for _step in 0..200 {
            store.begin_pass();
            // Tab ids are 2..=next_tab; pick a few past the end to exercise stale ids.
            let dragged = TabId(2 + rng.next_usize(total as usize + 2) as u64);
            let target = match rng.next_usize(4) {
                0 => None,
                1 => Some(DropTarget::Island(IslandId(rng.next_usize(island_count + 1) as u64))),
                _ => Some(DropTarget::Tab(TabId(2 + rng.next_usize(total as usize + 2) as u64))),
            };

            let before = store.islands().to_vec();
            store.on_drag_start(dragged);
            let result = store.on_drag_end(dragged, target);
            if result.is_err() || result == Ok(DropOutcome::Unchanged) {
                assert_eq!(store.islands(), before.as_slice(), "seed={seed}");
            }
            if rng.next_usize(6) == 0 {
                let tab = TabId(2 + rng.next_usize(total as usize) as u64);
                if let Some(island) = store.islands().iter().find(|i| i.contains_tab(tab)) {
                    let island = island.id;
                    store.set_active_tab(island, tab);
                }
            }
            store.end_pass();

            assert_islands_ok(&store);
            let count: usize = store.islands().iter().map(|i| i.tabs.len()).sum();
            assert_eq!(count as u64, total, "seed={seed}");
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn islands_survive_json_and_ron() {
    let islands = vec![
        Island::new(
            1u64,
            vec![
                Tab::new(1u64, "main.rs", "fn main() {}".to_owned()).with_icon("R"),
                Tab::new(2u64, "Cargo.toml", String::new()).modified(true),
            ],
        )
        .with_active(2u64),
        Island::new(2u64, vec![]),
    ];

    let json = serde_json::to_string(&islands).expect("json serialize");
    let from_json: Vec<Island<String>> = serde_json::from_str(&json).expect("json deserialize");
    assert_eq!(from_json, islands);

    let ron = ron::to_string(&islands).expect("ron serialize");
    let from_ron: Vec<Island<String>> = ron::from_str(&ron).expect("ron deserialize");
    assert_eq!(from_ron, islands);
}
