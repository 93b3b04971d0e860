//! Client-side route table: three static paths, three views.
//!
//! There is deliberately no catch-all: an unknown path resolves to `None`
//! and the embedding application decides what to do with it.

/// The three navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    DataSources,
    Tasks,
}

/// Static path-to-view table; order is irrelevant, paths are exact.
pub const ROUTES: [(&str, View); 3] = [
    ("/", View::Home),
    ("/datasource", View::DataSources),
    ("/task", View::Tasks),
];

/// Resolve a path to its view, or `None` for any path not in the table.
pub fn resolve(path: &str) -> Option<View> {
    ROUTES.iter().find(|(p, _)| *p == path).map(|(_, view)| *view)
}
