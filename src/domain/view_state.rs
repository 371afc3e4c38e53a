use super::QueryFailure;

/// Render state of a scoped view.
///
/// `Loading` and `Failed` keep the data from the last successful load of the
/// same scope so the view can keep showing it.
#[derive(Debug)]
pub enum ViewState<T> {
    Idle,
    Loading { previous: Option<T> },
    Success(T),
    Failed { error: QueryFailure, previous: Option<T> },
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> ViewState<T> {
    /// Data the view should render, if any.
    pub fn displayed(&self) -> Option<&T> {
        match self {
            Self::Idle => None,
            Self::Loading { previous } | Self::Failed { previous, .. } => {
                previous.as_ref()
            }
            Self::Success(data) => Some(data),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error(&self) -> Option<&QueryFailure> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Moves into `Loading`, keeping the displayed data only when `keep` is
    /// set.
    pub(crate) fn begin_loading(&mut self, keep: bool) {
        let previous = match std::mem::take(self) {
            Self::Success(data) if keep => Some(data),
            Self::Loading { previous } | Self::Failed { previous, .. }
                if keep =>
            {
                previous
            }
            _ => None,
        };
        *self = Self::Loading { previous };
    }

    pub(crate) fn succeed(&mut self, data: T) {
        *self = Self::Success(data);
    }

    pub(crate) fn fail(&mut self, error: QueryFailure) {
        let previous = match std::mem::take(self) {
            Self::Success(data) => Some(data),
            Self::Loading { previous } | Self::Failed { previous, .. } => {
                previous
            }
            Self::Idle => None,
        };
        *self = Self::Failed { error, previous };
    }
}
