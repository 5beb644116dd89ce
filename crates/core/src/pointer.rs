/// Where the pointer pip sits relative to the item row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerOrientation {
    /// The pip is drawn on top pointing up, at content above the toolbar;
    /// the item row renders below it.
    AboveContent,

    /// The item row renders on top and the pip hangs below it pointing
    /// down, at content below the toolbar.
    #[default]
    BelowContent,
}

impl PointerOrientation {
    /// Returns the opposite orientation.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::AboveContent => Self::BelowContent,
            Self::BelowContent => Self::AboveContent,
        }
    }

    /// Returns `true` if the pip points up.
    pub fn points_up(self) -> bool {
        matches!(self, Self::AboveContent)
    }
}
