/// Which variant of the tab renderer is in use.
///
/// The drag machinery needs a laid-out, interactive context. Before the first pass has finished
/// there is nothing to hit-test against, so tabs are painted without drag sensing. Both variants
/// allocate the exact same geometry, so flipping from one to the other never shifts the layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderPhase {
    /// Plain tab views: clicks still select tabs, nothing can be dragged.
    #[default]
    Static,
    /// Tabs register as drag sources and islands as drop zones.
    Interactive,
}

impl RenderPhase {
    pub fn is_interactive(self) -> bool {
        self == Self::Interactive
    }

    /// One-way transition: `Static` becomes `Interactive` once the first pass has ended.
    pub(super) fn after_pass(self) -> Self {
        match self {
            Self::Static | Self::Interactive => Self::Interactive,
        }
    }
}
