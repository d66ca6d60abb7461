/// Load state of a remote collection. `Loading` is distinct from
/// `Ready(empty)`: the former renders a loading indicator, the latter an
/// explicit empty-state message.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(Vec<T>),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The fetched records, or an empty slice while still loading.
    pub fn records(&self) -> &[T] {
        match self {
            LoadState::Loading => &[],
            LoadState::Ready(records) => records,
        }
    }

    /// True only after a fetch resolved to an empty collection.
    pub fn is_empty(&self) -> bool {
        matches!(self, LoadState::Ready(records) if records.is_empty())
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_is_not_the_empty_state() {
        let state: LoadState<String> = LoadState::Loading;
        assert!(state.is_loading());
        assert!(!state.is_empty());
        assert_eq!(state.records(), &[] as &[String]);
    }

    #[test]
    fn ready_and_empty_is_the_empty_state() {
        let state: LoadState<String> = LoadState::Ready(Vec::new());
        assert!(!state.is_loading());
        assert!(state.is_empty());
    }
}
