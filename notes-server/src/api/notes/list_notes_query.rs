use serde::Deserialize;

/// Query parameters for listing notes.
///
/// `sortBy` accepts `title` or `createdAt`; anything else falls back to
/// newest-first. `sortOrder` accepts `asc`, any other value sorts
/// descending.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotesQuery {
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}
