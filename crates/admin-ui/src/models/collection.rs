//! Page-local snapshot of a remote collection

use std::cell::RefCell;
use std::rc::Rc;

/// What a list page shows: the last fetched records, a loading flag and at
/// most one error banner.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    /// A batch mutation (uploads) is in flight
    pub busy: bool,
    pub banner: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            busy: false,
            banner: None,
        }
    }
}

/// Somewhere a workflow can write page state between awaits.
///
/// Pages hand in their signal; tests use a shared cell.
pub trait CollectionStore<T> {
    fn update(&mut self, f: impl FnOnce(&mut CollectionState<T>));
}

impl<T> CollectionStore<T> for Rc<RefCell<CollectionState<T>>> {
    fn update(&mut self, f: impl FnOnce(&mut CollectionState<T>)) {
        f(&mut self.borrow_mut());
    }
}

impl<T> CollectionState<T> {
    /// Initial state of a page that fetches on mount
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the snapshot with a fresh listing
    pub fn finish_load(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
    }

    /// A failed listing shows nothing rather than a stale snapshot
    pub fn fail_load(&mut self, banner: impl Into<String>) {
        self.items.clear();
        self.loading = false;
        self.banner = Some(banner.into());
    }

    /// Replaces any banner already shown
    pub fn show_banner(&mut self, banner: impl Into<String>) {
        self.banner = Some(banner.into());
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cycle() {
        let mut state = CollectionState::<u32>::loading();
        assert!(state.loading);

        state.finish_load(vec![1, 2]);
        assert!(!state.loading);
        assert_eq!(state.items, vec![1, 2]);
        assert_eq!(state.banner, None);
    }

    #[test]
    fn test_failed_load_clears_items_and_sets_one_banner() {
        let mut state = CollectionState::<u32>::default();
        state.finish_load(vec![7]);
        state.show_banner("Failed to delete course");

        state.begin_load();
        state.fail_load("Failed to load courses");

        assert!(state.is_empty());
        assert!(!state.loading);
        assert_eq!(state.banner.as_deref(), Some("Failed to load courses"));

        state.dismiss_banner();
        assert_eq!(state.banner, None);
    }
}
