//! Remote Data Lifecycle
//!
//! Tagged state for a single page-scoped fetch, so every branch a view can
//! be in is explicit and rendered deliberately.

use crate::api::ApiError;

/// Lifecycle of one backend request owned by a page
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteData<T> {
    /// Nothing requested yet
    Idle,
    /// Request in flight
    Loading,
    /// Response parsed successfully
    Loaded(T),
    /// Request failed; holds the display message
    Failed(String),
}

impl<T> RemoteData<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            RemoteData::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for RemoteData<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => RemoteData::Loaded(value),
            Err(error) => RemoteData::Failed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_result_becomes_loaded() {
        let data: RemoteData<u32> = Ok(7).into();
        assert_eq!(data, RemoteData::Loaded(7));
        assert_eq!(data.loaded(), Some(&7));
    }

    #[test]
    fn err_result_becomes_failed_with_message() {
        let data: RemoteData<u32> = Err(ApiError::Status(500)).into();
        match data {
            RemoteData::Failed(message) => assert!(message.contains("500")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn only_loading_reports_loading() {
        assert!(RemoteData::<u32>::Loading.is_loading());
        assert!(!RemoteData::<u32>::Idle.is_loading());
        assert!(!RemoteData::Loaded(1).is_loading());
        assert!(!RemoteData::<u32>::Failed("x".to_string()).is_loading());
    }
}
