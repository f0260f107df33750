//! Lifecycle of a remotely loaded value

/// State of data fetched from the movie service
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    NotLoaded,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    /// A fetch should be (re)issued: never tried, or the last try failed
    pub fn needs_fetch(&self) -> bool {
        matches!(self, LoadState::NotLoaded | LoadState::Failed(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Loaded items, or an empty slice in every other state
    pub fn items(&self) -> &[T] {
        self.loaded().map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_fetch() {
        assert!(LoadState::<Vec<u8>>::NotLoaded.needs_fetch());
        assert!(LoadState::<Vec<u8>>::Failed("x".into()).needs_fetch());
        assert!(!LoadState::<Vec<u8>>::Loading.needs_fetch());
        assert!(!LoadState::Loaded(vec![1u8]).needs_fetch());
    }

    #[test]
    fn test_items_empty_unless_loaded() {
        assert!(LoadState::<Vec<u8>>::Loading.items().is_empty());
        assert_eq!(LoadState::Loaded(vec![1u8, 2]).items(), &[1, 2]);
    }

    #[test]
    fn test_error_accessor() {
        let state: LoadState<()> = LoadState::Failed("boom".into());
        assert_eq!(state.error(), Some("boom"));
        assert_eq!(LoadState::<()>::Loading.error(), None);
    }
}
