pub const SEARCH_PARAM: &str = "search";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Navigate(String),
    EmptyQuery,
}

/// `encodeURIComponent` leaves these unescaped; `urlencoding` does not.
const URI_COMPONENT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encoding with the `encodeURIComponent` character set.
pub fn encode_uri_component(text: &str) -> String {
    URI_COMPONENT_MARKS
        .iter()
        .fold(urlencoding::encode(text).into_owned(), |encoded, (escape, mark)| {
            encoded.replace(escape, mark)
        })
}

/// Where a search from `current_path` should go. The query is trimmed and
/// percent-encoded (space becomes `%20`).
pub fn search_target(current_path: &str, query: &str) -> SearchOutcome {
    let query = query.trim();
    if query.is_empty() {
        return SearchOutcome::EmptyQuery;
    }

    SearchOutcome::Navigate(format!(
        "{}?{}={}",
        current_path,
        SEARCH_PARAM,
        encode_uri_component(query)
    ))
}
