//! Report how input reached the toolbar.

/// The status of an input after being processed by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The input was **NOT** handled and should fall through to the
    /// default handling of the host.
    Ignored,

    /// The input was handled and processed by the toolbar.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use ayah_toolbar_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// ```
    #[must_use]
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }

    /// Returns `true` if the input was captured.
    pub fn is_captured(self) -> bool {
        matches!(self, Status::Captured)
    }
}
