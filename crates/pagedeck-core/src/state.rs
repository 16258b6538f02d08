use crate::error::{Error, Result};

/// Notification payload for page-cursor changes
///
/// `to` is always the clamped resting index; subscribers never observe an
/// out-of-range intermediate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    /// Index before the change
    pub from: usize,
    /// Index after the change
    pub to: usize,
}

/// Handle returned by [`PageState::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type ChangeFn = Box<dyn FnMut(PageChange)>;

/// Page cursor over a fixed, ordered list of page models
///
/// Owns the deck's pages and the "current page" index, and keeps the index
/// valid at all times: direct writes are clamped into `[0, len - 1]` and
/// relative navigation is a no-op at the boundaries. Invalid input is never
/// an error at runtime; the single construction-time rule is that a deck
/// must contain at least one page, so a constructed state always has a
/// current page.
///
/// Views subscribe for change notifications instead of sharing a mutable
/// cell; gesture handlers call the navigation methods.
pub struct PageState<T> {
    pages: Vec<T>,
    index: usize,
    next_subscriber: u64,
    subscribers: Vec<(SubscriberId, ChangeFn)>,
}

impl<T> PageState<T> {
    /// Create a state positioned on the first page
    ///
    /// Returns [`Error::EmptyDeck`] for an empty page list; every other
    /// operation on a constructed state is infallible.
    pub fn new(pages: Vec<T>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyDeck);
        }
        Ok(Self {
            pages,
            index: 0,
            next_subscriber: 0,
            subscribers: Vec::new(),
        })
    }

    /// Current page index, always in `[0, page_count - 1]`
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of pages, always at least 1
    #[inline]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All pages in navigation order
    pub fn pages(&self) -> &[T] {
        &self.pages
    }

    /// The currently selected page model
    pub fn current(&self) -> &T {
        // index is maintained in range by every mutation path
        &self.pages[self.index]
    }

    /// Page at an arbitrary index
    pub fn get(&self, index: usize) -> Option<&T> {
        self.pages.get(index)
    }

    /// Whether the cursor is on the first page
    #[inline]
    pub fn is_first_page(&self) -> bool {
        self.index == 0
    }

    /// Whether the cursor is on the last page
    #[inline]
    pub fn is_last_page(&self) -> bool {
        self.index == self.pages.len() - 1
    }

    /// Direct cursor write with clamp-on-write semantics
    ///
    /// Any integer is accepted; the stored value becomes
    /// `min(max(0, value), page_count - 1)`. Subscribers are notified once
    /// with the clamped final value, and only if the resting index actually
    /// changed.
    pub fn set_index(&mut self, value: isize) {
        let max = self.pages.len() as isize - 1;
        let clamped = value.clamp(0, max) as usize;
        self.apply(clamped);
    }

    /// Advance to the next page; no-op on the last page
    pub fn show_next_page(&mut self) {
        if !self.is_last_page() {
            self.apply(self.index + 1);
        }
    }

    /// Go back to the previous page; no-op on the first page
    pub fn show_previous_page(&mut self) {
        if !self.is_first_page() {
            self.apply(self.index - 1);
        }
    }

    /// Register a change listener, called after every effective index change
    pub fn subscribe(&mut self, f: impl FnMut(PageChange) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a listener; returns false if the id was already gone
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Commit a new (already validated) index and notify subscribers
    fn apply(&mut self, to: usize) {
        if to == self.index {
            return;
        }
        let change = PageChange {
            from: self.index,
            to,
        };
        self.index = to;
        for (_, f) in &mut self.subscribers {
            f(change);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PageState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageState")
            .field("pages", &self.pages)
            .field("index", &self.index)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_empty_deck_rejected() {
        let state = PageState::<u32>::new(Vec::new());
        assert!(matches!(state, Err(Error::EmptyDeck)));
    }

    #[test]
    fn test_starts_on_first_page() {
        let state = PageState::new(vec![0, 1, 2, 3, 4]).unwrap();
        assert_eq!(state.index(), 0);
        assert!(state.is_first_page());
        assert!(!state.is_last_page());
        assert_eq!(*state.current(), 0);
    }

    #[test]
    fn test_previous_at_first_page_is_noop() {
        let mut state = PageState::new(vec![0, 1, 2, 3, 4]).unwrap();
        state.show_previous_page();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_next_saturates_at_last_page() {
        let mut state = PageState::new(vec![0, 1, 2, 3, 4]).unwrap();
        state.show_previous_page();
        assert_eq!(state.index(), 0);

        let mut seen = Vec::new();
        for _ in 0..8 {
            state.show_next_page();
            seen.push(state.index());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 4, 4, 4, 4]);
        assert!(!state.is_first_page());
        assert!(state.is_last_page());
    }

    #[test]
    fn test_set_index_clamps_both_ends() {
        let mut state = PageState::new(vec![0, 1, 2, 3, 4]).unwrap();
        state.set_index(-5);
        assert_eq!(state.index(), 0);
        state.set_index(999);
        assert_eq!(state.index(), 4);
        state.set_index(2);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_single_page_is_both_first_and_last() {
        let mut state = PageState::new(vec!["only"]).unwrap();
        assert!(state.is_first_page());
        assert!(state.is_last_page());
        state.show_next_page();
        state.show_previous_page();
        state.set_index(7);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_index_stays_in_range_under_mixed_calls() {
        let mut state = PageState::new(vec![0, 1, 2]).unwrap();
        state.set_index(100);
        state.show_next_page();
        state.set_index(-3);
        state.show_previous_page();
        state.show_next_page();
        state.set_index(1);
        assert!(state.index() < state.page_count());
    }

    #[test]
    fn test_subscriber_sees_clamped_value_once() {
        let seen: Rc<RefCell<Vec<PageChange>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut state = PageState::new(vec![0, 1, 2, 3, 4]).unwrap();
        state.subscribe(move |change| sink.borrow_mut().push(change));

        state.set_index(999);
        let changes = seen.borrow().clone();
        assert_eq!(changes, vec![PageChange { from: 0, to: 4 }]);
    }

    #[test]
    fn test_noops_do_not_notify() {
        let count = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&count);

        let mut state = PageState::new(vec![0, 1]).unwrap();
        state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.show_previous_page(); // already first
        state.set_index(0); // clamps to current value
        state.set_index(-9); // same
        assert_eq!(*count.borrow(), 0);

        state.show_next_page();
        state.show_next_page(); // already last
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&count);

        let mut state = PageState::new(vec![0, 1, 2]).unwrap();
        let id = state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.show_next_page();
        assert_eq!(*count.borrow(), 1);

        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));

        state.show_next_page();
        assert_eq!(*count.borrow(), 1);
    }
}
