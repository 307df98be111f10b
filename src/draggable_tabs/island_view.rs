use egui::{Id, Pos2, Rect, Response, Sense, Stroke, Ui, UiBuilder};
use itertools::{Itertools as _, Position};

use super::TabBehavior;
use super::tab_view::{ViewEvent, TabViewCx, tab_ui};
use super::types::{Island, IslandId, TabPayload};

pub(super) fn island_egui_id(store_id: Id, island: IslandId) -> Id {
    store_id.with(("egui_islands_island", island.0))
}

/// Draw one island: its tab strip on top, the active tab's content below.
///
/// The whole island rect is a drop zone; releasing a tab over it (but not over another tab)
/// reports [`ViewEvent::DroppedOnIsland`].
pub(super) fn island_ui<Content>(
    ui: &mut Ui,
    cx: &TabViewCx<'_>,
    island: &mut Island<Content>,
    behavior: &mut dyn TabBehavior<Content>,
    events: &mut Vec<ViewEvent>,
) -> Response {
    let island_rect = ui.available_rect_before_wrap();

    // Interacted first so that it sits below the tabs and never steals their clicks.
    let zone = ui.interact(
        island_rect,
        island_egui_id(cx.store_id, island.id),
        Sense::hover(),
    );

    let strip_rect = Rect::from_min_size(
        island_rect.min,
        egui::vec2(island_rect.width(), cx.options.tab_strip_height),
    );
    ui.painter()
        .rect_filled(strip_rect, 0.0, ui.visuals().extreme_bg_color);

    ui.scope_builder(UiBuilder::new().max_rect(strip_rect), |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for (position, tab) in island.tabs.iter().with_position() {
                let is_active = island.active_tab == Some(tab.id);
                let response = tab_ui(ui, cx, tab, is_active, events);
                if !matches!(position, Position::Last | Position::Only) {
                    let x = response.rect.right();
                    let y = response.rect.y_range().shrink(6.0);
                    ui.painter()
                        .vline(x, y, ui.visuals().widgets.noninteractive.bg_stroke);
                }
            }
        });
    });

    let body_rect = Rect::from_min_max(Pos2::new(island_rect.left(), strip_rect.bottom()), island_rect.max);
    let active = island.active_tab;
    if let Some(tab) = active.and_then(|active| island.tabs.iter_mut().find(|t| t.id == active)) {
        ui.scope_builder(UiBuilder::new().max_rect(body_rect), |ui| {
            ui.set_clip_rect(body_rect.intersect(ui.clip_rect()));
            behavior.content_ui(ui, tab);
        });
    }

    if cx.phase.is_interactive() {
        if let Some(payload) = zone.dnd_release_payload::<TabPayload>() {
            if payload.store_id == cx.store_id {
                events.push(ViewEvent::DroppedOnIsland {
                    dragged: payload.tab,
                    island: island.id,
                });
            }
        }
        let hovered_by_drop = zone
            .dnd_hover_payload::<TabPayload>()
            .is_some_and(|p| p.store_id == cx.store_id);
        if hovered_by_drop {
            let stroke = Stroke::new(1.0, ui.visuals().selection.stroke.color);
            ui.painter()
                .rect_stroke(island_rect.shrink(0.5), 0.0, stroke, egui::StrokeKind::Inside);
        }
    }

    ui.advance_cursor_after_rect(island_rect);
    zone
}
