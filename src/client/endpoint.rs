use crate::model::FilterKind;

/// The API calls the browser makes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Search(String),
    Random,
    Lookup(String),
    List(FilterKind),
    Filter(FilterKind, String),
}

impl Endpoint {
    /// Path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Search(_) => "search.php",
            Endpoint::Random => "random.php",
            Endpoint::Lookup(_) => "lookup.php",
            Endpoint::List(_) => "list.php",
            Endpoint::Filter(..) => "filter.php",
        }
    }

    /// The single query parameter, if the endpoint takes one
    pub fn query(&self) -> Option<(&'static str, &str)> {
        match self {
            Endpoint::Search(term) => Some(("s", term.as_str())),
            Endpoint::Random => None,
            Endpoint::Lookup(id) => Some(("i", id.as_str())),
            Endpoint::List(kind) => Some((kind.query_key(), "list")),
            Endpoint::Filter(kind, value) => Some((kind.query_key(), value.as_str())),
        }
    }
}
