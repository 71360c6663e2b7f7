//! Three-way load state consumed by a single render dispatch in each page.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ViewState<T> {
    /// Collapse a fetch result, rendering the error with `describe`.
    pub fn from_result<E>(result: Result<T, E>, describe: impl FnOnce(E) -> String) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Error(describe(e)),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
