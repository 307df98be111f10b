use std::sync::Arc;

use egui::{
    Align2, Color32, CornerRadius, FontId, Galley, Id, LayerId, Order, Painter, Pos2, Rect,
    Response, Sense, Stroke, TextStyle, Ui, Vec2, Visuals,
};

use super::RenderPhase;
use super::options::DraggableTabsOptions;
use super::session::DragSession;
use super::types::{IslandId, Tab, TabId, TabPayload};

const H_PADDING: f32 = 8.0;
const GAP: f32 = 6.0;
const CLOSE_SIZE: f32 = 14.0;

/// Something the user did to a tab or island during this pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ViewEvent {
    Clicked(TabId),
    CloseClicked(TabId),
    DragStarted(TabId),
    DragStopped(TabId),
    /// Another (or the same) tab was released over this one.
    DroppedOn { dragged: TabId, target: TabId },
    /// A tab was released over an island, outside any tab.
    DroppedOnIsland { dragged: TabId, island: IslandId },
}

/// Everything a tab needs to know about its surroundings to draw itself.
pub(super) struct TabViewCx<'a> {
    pub(super) store_id: Id,
    pub(super) phase: RenderPhase,
    pub(super) session: &'a DragSession,
    pub(super) options: &'a DraggableTabsOptions,
}

pub(super) fn tab_egui_id(store_id: Id, tab: TabId) -> Id {
    store_id.with(("egui_islands_tab", tab.0))
}

/// Draw one tab of a strip.
///
/// The static and interactive variants allocate the same rect and paint the same shapes; the
/// interactive one additionally senses drags and carries a [`TabPayload`] while dragged.
pub(super) fn tab_ui<Content>(
    ui: &mut Ui,
    cx: &TabViewCx<'_>,
    tab: &Tab<Content>,
    is_active: bool,
    events: &mut Vec<ViewEvent>,
) -> Response {
    let font_id = TextStyle::Button.resolve(ui.style());
    let text_color = if is_active {
        ui.visuals().strong_text_color()
    } else {
        ui.visuals().text_color()
    };

    let title_galley = ui
        .painter()
        .layout_no_wrap(tab.title.clone(), font_id.clone(), text_color);
    let icon_galley = tab
        .icon
        .as_ref()
        .map(|icon| ui.painter().layout_no_wrap(icon.clone(), font_id.clone(), text_color));

    let icon_width = icon_galley.as_ref().map_or(0.0, |g| g.size().x + GAP);
    let width = (H_PADDING + icon_width + title_galley.size().x + GAP + CLOSE_SIZE + H_PADDING)
        .max(cx.options.tab_min_width);
    let size = Vec2::new(width, cx.options.tab_strip_height);

    let id = tab_egui_id(cx.store_id, tab.id);
    let (_, rect) = ui.allocate_space(size);
    let sense = if cx.phase.is_interactive() {
        Sense::click_and_drag()
    } else {
        Sense::click()
    };
    let response = ui.interact(rect, id, sense);

    let close_response = ui.interact(close_rect(rect), id.with("close"), Sense::click());

    let mut being_dragged = false;
    if cx.phase.is_interactive() {
        if response.drag_started() {
            events.push(ViewEvent::DragStarted(tab.id));
        }
        if response.dragged() {
            being_dragged = true;
            response.dnd_set_drag_payload(TabPayload {
                store_id: cx.store_id,
                tab: tab.id,
            });
        }
        if response.drag_stopped() {
            events.push(ViewEvent::DragStopped(tab.id));
        }
        if let Some(payload) = response.dnd_release_payload::<TabPayload>() {
            if payload.store_id == cx.store_id {
                events.push(ViewEvent::DroppedOn {
                    dragged: payload.tab,
                    target: tab.id,
                });
            }
        }
    }

    if close_response.clicked() {
        events.push(ViewEvent::CloseClicked(tab.id));
    } else if response.clicked() {
        events.push(ViewEvent::Clicked(tab.id));
    }

    let hidden = cx.session.hides(tab.id, being_dragged);
    let look = TabLook {
        font_id,
        icon: icon_galley,
        title: title_galley,
        is_active,
        is_modified: tab.is_modified,
        hovered: response.hovered() || close_response.hovered(),
        close_hovered: close_response.hovered(),
    };

    if ui.is_rect_visible(rect) && !hidden {
        look.paint(ui.painter(), ui.visuals(), rect);

        let hovered_by_drop = cx.phase.is_interactive()
            && response
                .dnd_hover_payload::<TabPayload>()
                .is_some_and(|p| p.store_id == cx.store_id && p.tab != tab.id);
        if hovered_by_drop {
            let stroke = Stroke::new(2.0, ui.visuals().selection.stroke.color);
            ui.painter().vline(rect.left() + 1.0, rect.y_range(), stroke);
        }
    }

    if being_dragged {
        paint_ghost(ui, id, rect, look);
    }

    response
}

/// The strip keeps an empty slot for a dragged tab; this copy follows the pointer instead.
fn paint_ghost(ui: &Ui, id: Id, rect: Rect, look: TabLook) {
    let delta = ui.ctx().input(|i| {
        let origin = i.pointer.press_origin()?;
        let pos = i.pointer.interact_pos()?;
        Some(pos - origin)
    });
    if let Some(delta) = delta {
        let painter = ui.ctx().layer_painter(LayerId::new(Order::Tooltip, id));
        let ghost = TabLook {
            is_active: true,
            hovered: true,
            close_hovered: false,
            ..look
        };
        ghost.paint(&painter, ui.visuals(), rect.translate(delta));
    }
}

struct TabLook {
    font_id: FontId,
    icon: Option<Arc<Galley>>,
    title: Arc<Galley>,
    is_active: bool,
    is_modified: bool,
    hovered: bool,
    close_hovered: bool,
}

impl TabLook {
    fn paint(&self, painter: &Painter, visuals: &Visuals, rect: Rect) {
        let fill = if self.is_active {
            visuals.widgets.active.weak_bg_fill
        } else if self.hovered {
            visuals.widgets.hovered.weak_bg_fill
        } else {
            Color32::TRANSPARENT
        };
        painter.rect_filled(rect.shrink(1.0), CornerRadius::same(4), fill);

        let mut x = rect.left() + H_PADDING;
        if let Some(icon) = &self.icon {
            let pos = Pos2::new(x, rect.center().y - icon.size().y / 2.0);
            x += icon.size().x + GAP;
            painter.galley(pos, icon.clone(), visuals.text_color());
        }
        let pos = Pos2::new(x, rect.center().y - self.title.size().y / 2.0);
        painter.galley(pos, self.title.clone(), visuals.text_color());

        let close_center = close_rect(rect).center();
        if self.is_modified && !self.hovered {
            painter.circle_filled(close_center, 3.5, visuals.text_color());
        } else if self.hovered || self.is_active {
            let color = if self.close_hovered {
                visuals.strong_text_color()
            } else {
                visuals.weak_text_color()
            };
            painter.text(
                close_center,
                Align2::CENTER_CENTER,
                "×",
                self.font_id.clone(),
                color,
            );
        }
    }
}

fn close_rect(tab_rect: Rect) -> Rect {
    Rect::from_center_size(
        Pos2::new(
            tab_rect.right() - H_PADDING - CLOSE_SIZE / 2.0,
            tab_rect.center().y,
        ),
        Vec2::splat(CLOSE_SIZE),
    )
}
