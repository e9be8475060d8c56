/// Which of the two presentations is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Orthographic top-down floor plan.
    #[default]
    Plan2D,
    /// Perspective first-person walkthrough.
    FirstPerson3D,
}

impl ViewMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Plan2D => Self::FirstPerson3D,
            Self::FirstPerson3D => Self::Plan2D,
        }
    }

    /// Whether the walkthrough camera is live.
    #[must_use]
    pub fn is_first_person(self) -> bool {
        self == Self::FirstPerson3D
    }
}
