//! Draggable multi-island tab strips and an adaptive IDE toolbar for [`egui`].
//!
//! See [`DraggableTabs`] for the tabs and [`AdaptiveToolbar`] for the toolbar.

#![forbid(unsafe_code)]

pub mod draggable_tabs;
pub mod island_builder;
pub mod toolbar_layout;

pub use draggable_tabs::{
    DragError, DraggableTabs, DraggableTabsOptions, DropOutcome, DropTarget, Island, IslandId,
    RenderPhase, Tab, TabBehavior, TabId,
};
pub use island_builder::IslandsBuilder;
pub use toolbar_layout::{
    compute_toolbar_layout, AdaptiveToolbar, ToolbarConstants, ToolbarLayout,
    ToolbarMeasurements, ToolbarResponse,
};
