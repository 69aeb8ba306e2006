//! Load State
//!
//! Explicit lifecycle of data fetched by a page.

/// Data owned by a page, from mount to render.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_counts_as_loading() {
        assert!(LoadState::<u8>::default().is_loading());
        assert!(LoadState::<u8>::Loading.is_loading());
        assert!(!LoadState::Ready(1u8).is_loading());
        assert!(!LoadState::<u8>::Error("x".into()).is_loading());
    }

    #[test]
    fn test_ready_accessors() {
        let mut state = LoadState::Ready(vec![1]);
        state.ready_mut().unwrap().push(2);
        assert_eq!(state.ready(), Some(&vec![1, 2]));
        assert_eq!(LoadState::<Vec<u8>>::Loading.ready(), None);
    }
}
