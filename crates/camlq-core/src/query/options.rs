use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Scope
///
/// Folder recursion scope written into the executor's view attributes.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Scope {
    Recursive,
    RecursiveAll,
    FilesOnly,
}

///
/// QueryOptions
///
/// Scalar executor options. Deserializable so callers can keep them in
/// configuration; missing keys take the defaults.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct QueryOptions {
    pub scope: Option<Scope>,
    pub view_fields_only: bool,

    /// Zero leaves the row count to the executor.
    pub row_limit: u32,
}

impl QueryOptions {
    /// Render the `ViewAttributes` value, present only when a scope is set.
    #[must_use]
    pub fn view_attributes(&self) -> Option<String> {
        self.scope.map(|scope| format!("Scope=\"{scope}\""))
    }
}

///
/// ExecutorOptions
///
/// Everything the external query executor reads from an assembled query.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ExecutorOptions {
    pub query: String,
    pub view_fields: Option<String>,
    pub view_attributes: Option<String>,
    pub view_fields_only: bool,
    pub row_limit: u32,
}
