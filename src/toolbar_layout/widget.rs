use egui::{Align, Id, Layout, Pos2, Rect, Response, Sense, Ui, UiBuilder, Vec2};

use super::{ToolbarConstants, ToolbarLayout, ToolbarMeasurements, compute_toolbar_layout};

/// Natural section widths seen during the previous pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct MeasuredSections {
    left: f32,
    workspace: f32,
    right: f32,
}

/// A toolbar row that lays out its sections with [`compute_toolbar_layout`].
///
/// Section widths are measured while drawing and fed into the next pass; when any of them
/// changes, a repaint is requested so the layout converges right away.
#[derive(Clone, Debug)]
pub struct AdaptiveToolbar {
    id: Id,
    constants: ToolbarConstants,
    height: f32,
}

/// Result of [`AdaptiveToolbar::show`].
pub struct ToolbarResponse {
    pub layout: ToolbarLayout,
    pub response: Response,
}

impl AdaptiveToolbar {
    pub fn new(id_salt: impl std::hash::Hash) -> Self {
        Self {
            id: Id::new(id_salt),
            constants: ToolbarConstants::default(),
            height: 32.0,
        }
    }

    #[must_use]
    pub fn constants(mut self, constants: ToolbarConstants) -> Self {
        self.constants = constants;
        self
    }

    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Draw the toolbar across the available width of `ui`.
    ///
    /// `progress` receives the computed layout so it can draw a compact variant when
    /// [`ToolbarLayout::progress_collapsed`] is set.
    pub fn show(
        self,
        ui: &mut Ui,
        left: impl FnOnce(&mut Ui),
        workspace: impl FnOnce(&mut Ui),
        progress: impl FnOnce(&mut Ui, &ToolbarLayout),
        right: impl FnOnce(&mut Ui),
    ) -> ToolbarResponse {
        let (rect, response) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), self.height),
            Sense::hover(),
        );

        let previous: MeasuredSections = ui
            .ctx()
            .data(|d| d.get_temp(self.id))
            .unwrap_or_default();
        let layout = compute_toolbar_layout(
            &ToolbarMeasurements {
                total: rect.width(),
                left: previous.left,
                workspace: previous.workspace,
                right: previous.right,
            },
            &self.constants,
        );

        let measured = MeasuredSections {
            left: section(ui, rect, 0.0, rect.width(), Layout::left_to_right(Align::Center), left),
            workspace: section(
                ui,
                rect,
                layout.workspace_x,
                layout.workspace_width,
                Layout::left_to_right(Align::Center),
                workspace,
            ),
            right: section(
                ui,
                rect,
                rect.width() - previous.right,
                previous.right,
                Layout::left_to_right(Align::Center),
                right,
            ),
        };
        section(
            ui,
            rect,
            layout.progress_x,
            layout.progress_width,
            Layout::left_to_right(Align::Center),
            |ui| progress(ui, &layout),
        );

        if measured != previous {
            ui.ctx().data_mut(|d| d.insert_temp(self.id, measured));
            ui.ctx().request_repaint();
        }

        ToolbarResponse { layout, response }
    }
}

/// Draw one section starting `x` points into `toolbar`, clipped to `width`.
///
/// Returns the width the contents used, which can exceed `width` (the excess is clipped).
fn section(
    ui: &mut Ui,
    toolbar: Rect,
    x: f32,
    width: f32,
    layout: Layout,
    add_contents: impl FnOnce(&mut Ui),
) -> f32 {
    let min = Pos2::new(toolbar.left() + x, toolbar.top());
    let max_rect = Rect::from_min_max(min, toolbar.max);
    let clip = Rect::from_min_size(min, Vec2::new(width.max(0.0), toolbar.height()));

    let inner = ui.scope_builder(UiBuilder::new().max_rect(max_rect).layout(layout), |ui| {
        ui.set_clip_rect(clip.intersect(ui.clip_rect()));
        add_contents(ui);
    });
    inner.response.rect.width()
}
