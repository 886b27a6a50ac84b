//! Static route table mapping hash paths to calculator views.

use crate::config::configured_routes;
use crate::core::error::RouteError;

/// Identifier of a renderable view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    /// Vacation pay calculator.
    Vacation,
    /// Sick-leave benefit calculator.
    SickLeave,
}

impl ViewId {
    /// Human-readable title shown in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Self::Vacation => "Vacation pay",
            Self::SickLeave => "Sick leave",
        }
    }
}

/// Association between a hash path and a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: ViewId,
}

impl Route {
    pub const fn new(path: &'static str, view: ViewId) -> Self {
        Self { path, view }
    }
}

/// Ordered, immutable set of routes with unique paths.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from a literal list of routes.
    ///
    /// Every path must start with `/` and appear only once.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        for (i, route) in routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(RouteError::InvalidPath(route.path.to_string()));
            }
            if routes[..i].iter().any(|r| r.path == route.path) {
                return Err(RouteError::DuplicatePath(route.path.to_string()));
            }
        }
        Ok(Self { routes })
    }

    /// Exact-match lookup of an already normalized path.
    pub fn lookup(&self, path: &str) -> Option<ViewId> {
        self.routes.iter().find(|r| r.path == path).map(|r| r.view)
    }

    /// Routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn first(&self) -> Option<&Route> {
        self.routes.first()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: configured_routes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes() {
        let table = RouteTable::default();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("/calc-vacation"), Some(ViewId::Vacation));
        assert_eq!(table.lookup("/calc-sick-leave"), Some(ViewId::SickLeave));
        assert_eq!(table.lookup("/unknown"), None);
        assert_eq!(table.lookup("/"), None);
    }

    #[test]
    fn test_default_routes_are_distinct() {
        let table = RouteTable::default();
        assert!(RouteTable::new(table.iter().copied().collect()).is_ok());
        assert_ne!(
            table.lookup("/calc-vacation"),
            table.lookup("/calc-sick-leave")
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = RouteTable::default();
        assert_eq!(table.lookup("/Calc-Vacation"), None);
        assert_eq!(table.lookup("calc-vacation"), None);
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = RouteTable::new(vec![
            Route::new("/a", ViewId::Vacation),
            Route::new("/a", ViewId::SickLeave),
        ]);
        assert_eq!(result, Err(RouteError::DuplicatePath("/a".to_string())));
    }

    #[test]
    fn test_relative_path_rejected() {
        let result = RouteTable::new(vec![Route::new("a", ViewId::Vacation)]);
        assert_eq!(result, Err(RouteError::InvalidPath("a".to_string())));
    }

    #[test]
    fn test_declaration_order() {
        let table = RouteTable::default();
        assert_eq!(table.first().map(|r| r.view), Some(ViewId::Vacation));
        let views: Vec<_> = table.iter().map(|r| r.view).collect();
        assert_eq!(views, vec![ViewId::Vacation, ViewId::SickLeave]);
    }
}
