/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_state_accessors() {
        let state: FetchState<i32> = FetchState::Success(7);
        assert_eq!(state.data(), Some(&7));
        assert!(!state.is_loading());
        assert!(FetchState::<i32>::Loading.is_loading());
        assert!(FetchState::<i32>::default().data().is_none());
    }
}
