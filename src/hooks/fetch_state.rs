use crate::models::error::AppError;
use std::rc::Rc;

/// Lifecycle of a page-level request: `Loading` until it settles into data or an error.
#[derive(Clone, PartialEq, Debug)]
pub enum FetchState<T> {
    Loading,
    Loaded(Rc<T>),
    Error(AppError),
}

impl<T> FetchState<T> {
    /// Returns true if the state is loading
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub const fn error(&self) -> Option<&AppError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }
}

impl<T> From<Result<T, AppError>> for FetchState<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::Loaded(Rc::new(data)),
            Err(e) => Self::Error(e),
        }
    }
}
