//! Positioning of a three-section IDE toolbar from measured widths.
//!
//! The toolbar has a left button cluster, a "workspace" widget that tries to sit in the middle,
//! a progress indicator, and a right button cluster:
//!
//! ```text
//! | left |        [ workspace ]        [ progress ] | right |
//! ```
//!
//! Centering the workspace is best effort. When the centered workspace would run into the
//! progress indicator's minimum width, the progress indicator collapses and the workspace is
//! right-aligned against it instead.

mod widget;

pub use widget::{AdaptiveToolbar, ToolbarResponse};

/// Widths of the toolbar and its sections, in points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToolbarMeasurements {
    /// Width of the whole toolbar.
    pub total: f32,
    /// Width of the left-anchored button cluster.
    pub left: f32,
    /// Natural width of the workspace widget.
    pub workspace: f32,
    /// Width of the right-anchored button cluster.
    pub right: f32,
}

/// Size limits of the progress indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolbarConstants {
    /// Below this much free space the progress indicator collapses.
    pub progress_min_width: f32,
    pub progress_max_width: f32,
    pub progress_collapsed_width: f32,
}

impl Default for ToolbarConstants {
    fn default() -> Self {
        Self {
            progress_min_width: 80.0,
            progress_max_width: 240.0,
            progress_collapsed_width: 24.0,
        }
    }
}

/// Where the middle sections go. The left cluster always starts at `0`, the right one at
/// `total - right`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToolbarLayout {
    pub workspace_x: f32,
    /// Equal to the measured workspace width unless the toolbar is too narrow to fit it.
    pub workspace_width: f32,
    pub progress_x: f32,
    pub progress_width: f32,
    pub progress_collapsed: bool,
}

impl ToolbarLayout {
    pub fn workspace_right(&self) -> f32 {
        self.workspace_x + self.workspace_width
    }

    pub fn progress_right(&self) -> f32 {
        self.progress_x + self.progress_width
    }
}

/// Lay out the middle sections of a toolbar.
///
/// Pure function of its inputs; call it again whenever any measured width changes.
pub fn compute_toolbar_layout(
    measurements: &ToolbarMeasurements,
    constants: &ToolbarConstants,
) -> ToolbarLayout {
    let ToolbarMeasurements {
        total,
        left,
        workspace,
        right,
    } = *measurements;

    let right_limit = total - right;

    let centered_x = ((total - workspace) / 2.0).max(left);
    let centered_right = centered_x + workspace;

    let progress_collapsed = centered_right > right_limit - constants.progress_min_width;
    let progress_width = if progress_collapsed {
        constants.progress_collapsed_width
    } else {
        constants.progress_max_width.min(right_limit - centered_right)
    };
    let progress_x = right_limit - progress_width;

    let workspace_x = if progress_collapsed {
        (progress_x - workspace).max(left)
    } else {
        centered_x
    };
    let workspace_width = workspace.min((progress_x - workspace_x).max(0.0));

    ToolbarLayout {
        workspace_x,
        workspace_width,
        progress_x,
        progress_width,
        progress_collapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(total: f32, left: f32, workspace: f32, right: f32) -> ToolbarLayout {
        compute_toolbar_layout(
            &ToolbarMeasurements {
                total,
                left,
                workspace,
                right,
            },
            &ToolbarConstants::default(),
        )
    }

    #[test]
    fn roomy_toolbar_centers_workspace() {
        let l = layout(1200.0, 150.0, 200.0, 120.0);
        assert!(!l.progress_collapsed);
        assert_eq!(l.workspace_x, 500.0);
        assert_eq!(l.workspace_width, 200.0);
        assert_eq!(l.progress_width, 240.0);
        assert_eq!(l.progress_x, 1200.0 - 120.0 - 240.0);
    }

    #[test]
    fn progress_shrinks_before_collapsing() {
        // Centered workspace ends at 600; 160 points remain before the right cluster.
        let l = layout(1000.0, 100.0, 200.0, 240.0);
        assert!(!l.progress_collapsed);
        assert_eq!(l.progress_width, 160.0);
        assert_eq!(l.progress_x, 600.0);
        assert_eq!(l.workspace_right(), 600.0);
    }

    #[test]
    fn wide_workspace_collapses_progress_and_right_aligns() {
        let constants = ToolbarConstants::default();
        // Centered right edge would be 800 > 1000 - 150 - 80.
        let l = layout(1000.0, 100.0, 600.0, 150.0);
        assert!(l.progress_collapsed);
        assert_eq!(l.progress_width, constants.progress_collapsed_width);
        assert_eq!(l.progress_x, 1000.0 - 150.0 - 24.0);
        assert_eq!(l.workspace_x, 1000.0 - 150.0 - 24.0 - 600.0);
    }

    #[test]
    fn workspace_is_pushed_right_of_left_cluster() {
        let l = layout(1000.0, 480.0, 100.0, 0.0);
        assert!(!l.progress_collapsed);
        assert_eq!(l.workspace_x, 480.0);
        assert!(l.workspace_right() <= l.progress_x);
    }

    #[test]
    fn sections_never_overlap() {
        const EPS: f32 = 1e-2;
        let c = ToolbarConstants::default();
        let mut seed = 0x7001_BA2u64;
        let mut next = |upper: f32| {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((seed >> 33) as f32 / (1u64 << 31) as f32) * upper
        };

        for _ in 0..5000 {
            let left = next(600.0);
            let right = next(600.0);
            let total = left + right + c.progress_min_width + next(1400.0);
            let workspace = next(1600.0);
            let l = layout(total, left, workspace, right);

            let ctx = format!("total={total} left={left} workspace={workspace} right={right} -> {l:?}");
            assert!(l.workspace_x >= left, "{ctx}");
            assert!(l.workspace_right() <= l.progress_x + EPS, "{ctx}");
            assert!(l.progress_right() <= total - right + EPS, "{ctx}");
            assert!(l.workspace_width >= 0.0, "{ctx}");
            if l.progress_collapsed {
                assert_eq!(l.progress_width, c.progress_collapsed_width, "{ctx}");
            } else {
                assert!(l.progress_width >= c.progress_min_width - EPS, "{ctx}");
                assert!(l.progress_width <= c.progress_max_width, "{ctx}");
                assert!((l.workspace_width - workspace).abs() <= EPS, "{ctx}");
            }

            let ideal_right = (total + workspace) / 2.0;
            if ideal_right > total - right - c.progress_min_width + EPS {
                assert!(l.progress_collapsed, "{ctx}");
            }
        }
    }
}
