//! Route resolution and view swapping.
//!
//! The [`Router`] owns the current [`Location`] as its navigation context.
//! Views are mounted and unmounted through a [`ViewHost`], so the swap
//! order can be observed without a DOM.

use crate::models::{Location, RouteTable, ViewId};

/// Receiver of view lifecycle calls.
pub trait ViewHost {
    fn mount(&mut self, view: ViewId);
    fn unmount(&mut self, view: ViewId);
}

/// Hash router holding one active view at a time.
#[derive(Clone, Debug)]
pub struct Router {
    table: RouteTable,
    location: Location,
    mounted: Option<ViewId>,
    /// Visited locations, oldest first; the last entry is the current one.
    history: Vec<Location>,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            location: Location::root(),
            mounted: None,
            history: Vec::new(),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// View currently mounted, if any.
    pub fn mounted(&self) -> Option<ViewId> {
        self.mounted
    }

    /// Number of history entries the user has walked through.
    ///
    /// Returning to the entry before the current one is treated as going
    /// back and pops the current entry.
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    fn record(&mut self, location: &Location) {
        let len = self.history.len();
        if len >= 2 && self.history[len - 2] == *location {
            self.history.pop();
        } else if self.history.last() != Some(location) {
            self.history.push(location.clone());
        }
    }

    /// Look up the view for a path or URL hash.
    pub fn resolve(&self, path: &str) -> Option<ViewId> {
        self.table.lookup(Location::from_hash(path).path())
    }

    /// Move to `path` and swap the mounted view to match it.
    ///
    /// The previous view is unmounted before the next one is mounted.
    /// Returns the view active after navigation.
    pub fn navigate<H: ViewHost>(&mut self, path: &str, host: &mut H) -> Option<ViewId> {
        let location = Location::from_hash(path);
        self.record(&location);
        self.location = location;

        let next = self.resolve(self.location.path());
        if next == self.mounted {
            return next;
        }

        match next {
            Some(view) => log::debug!("route {} -> {:?}", self.location.path(), view),
            None => log::warn!("no route for {}", self.location.path()),
        }

        if let Some(previous) = self.mounted.take() {
            host.unmount(previous);
        }
        if let Some(view) = next {
            host.mount(view);
            self.mounted = Some(view);
        }
        next
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouteTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Event {
        Mount(ViewId),
        Unmount(ViewId),
    }

    /// Records lifecycle calls and tracks the live view count.
    #[derive(Default)]
    struct RecordingHost {
        events: Vec<Event>,
        live: Vec<ViewId>,
        max_live: usize,
    }

    impl ViewHost for RecordingHost {
        fn mount(&mut self, view: ViewId) {
            self.events.push(Event::Mount(view));
            self.live.push(view);
            self.max_live = self.max_live.max(self.live.len());
        }

        fn unmount(&mut self, view: ViewId) {
            self.events.push(Event::Unmount(view));
            self.live.retain(|v| *v != view);
        }
    }

    #[test]
    fn test_resolve_known_paths() {
        let router = Router::default();
        assert_eq!(router.resolve("#/calc-vacation"), Some(ViewId::Vacation));
        assert_eq!(router.resolve("#/calc-sick-leave"), Some(ViewId::SickLeave));
        assert_eq!(router.resolve("/calc-vacation"), Some(ViewId::Vacation));
    }

    #[test]
    fn test_resolve_unknown_path() {
        let router = Router::default();
        assert_eq!(router.resolve("#/unknown"), None);
        assert_eq!(router.resolve("#/"), None);
        assert_eq!(router.resolve(""), None);
    }

    #[test]
    fn test_navigate_swaps_single_view() {
        let mut router = Router::default();
        let mut host = RecordingHost::default();

        assert_eq!(router.navigate("#/calc-vacation", &mut host), Some(ViewId::Vacation));
        assert_eq!(router.navigate("#/calc-sick-leave", &mut host), Some(ViewId::SickLeave));

        assert_eq!(
            host.events,
            vec![
                Event::Mount(ViewId::Vacation),
                Event::Unmount(ViewId::Vacation),
                Event::Mount(ViewId::SickLeave),
            ]
        );
        assert_eq!(host.max_live, 1);
        assert_eq!(host.live, vec![ViewId::SickLeave]);
        assert_eq!(router.mounted(), Some(ViewId::SickLeave));
        assert_eq!(router.location().path(), "/calc-sick-leave");
    }

    #[test]
    fn test_navigate_same_view_does_not_remount() {
        let mut router = Router::default();
        let mut host = RecordingHost::default();

        router.navigate("#/calc-vacation", &mut host);
        router.navigate("#/calc-vacation?x=1", &mut host);
        router.navigate("#/calc-vacation/", &mut host);

        assert_eq!(host.events, vec![Event::Mount(ViewId::Vacation)]);
        assert_eq!(router.history_depth(), 1);
    }

    #[test]
    fn test_navigate_unknown_unmounts() {
        let mut router = Router::default();
        let mut host = RecordingHost::default();

        router.navigate("#/calc-vacation", &mut host);
        assert_eq!(router.navigate("#/unknown", &mut host), None);

        assert_eq!(router.mounted(), None);
        assert!(host.live.is_empty());
        assert_eq!(router.location().path(), "/unknown");

        // Back to a known route mounts again
        router.navigate("#/calc-sick-leave", &mut host);
        assert_eq!(host.live, vec![ViewId::SickLeave]);
        assert_eq!(router.history_depth(), 3);
    }

    #[test]
    fn test_history_depth_follows_back_navigation() {
        let mut router = Router::default();
        let mut host = RecordingHost::default();

        router.navigate("#/calc-vacation", &mut host);
        assert_eq!(router.history_depth(), 1);
        router.navigate("#/calc-sick-leave", &mut host);
        assert_eq!(router.history_depth(), 2);

        // Back to the start entry
        router.navigate("#/calc-vacation", &mut host);
        assert_eq!(router.history_depth(), 1);
        assert_eq!(router.mounted(), Some(ViewId::Vacation));

        router.navigate("#/calc-sick-leave", &mut host);
        router.navigate("#/unknown", &mut host);
        router.navigate("#/calc-sick-leave", &mut host);
        assert_eq!(router.history_depth(), 2);
    }

    #[test]
    fn test_navigate_unknown_from_start_mounts_nothing() {
        let mut router = Router::default();
        let mut host = RecordingHost::default();

        assert_eq!(router.navigate("#/nope", &mut host), None);
        assert!(host.events.is_empty());
    }
}
