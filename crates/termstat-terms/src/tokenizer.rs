/// Split an identifier into its sub-words: first on underscores (snake_case),
/// then on camelCase / PascalCase boundaries. Sub-words keep their original
/// case; empty snake segments contribute nothing.
///
/// Examples:
///   "maxRetryCount" -> ["max", "Retry", "Count"]
///   "http_server_addr" -> ["http", "server", "addr"]
///   "__init__" -> ["init"]
pub fn split_identifier(ident: &str) -> Vec<&str> {
    ident.split('_').flat_map(split_camel_case).collect()
}

/// Split a string on camelCase / PascalCase boundaries.
///
/// A boundary falls before an uppercase character that follows a lowercase
/// one, or that is itself followed by a lowercase one. Runs of capitals stay
/// together as an acronym until the last capital, which starts the next word.
///
/// Examples:
///   "insertBreak" -> ["insert", "Break"]
///   "FileInfo" -> ["File", "Info"]
///   "HTTPServer" -> ["HTTP", "Server"]
pub fn split_camel_case(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut start = 0;

    for i in 1..chars.len() {
        let (offset, curr) = chars[i];
        if !curr.is_uppercase() {
            continue;
        }

        let prev_lower = chars[i - 1].1.is_lowercase();
        let next_lower = chars.get(i + 1).is_some_and(|(_, c)| c.is_lowercase());

        if prev_lower || next_lower {
            if start < offset {
                parts.push(&s[start..offset]);
            }
            start = offset;
        }
    }

    if start < s.len() {
        parts.push(&s[start..]);
    }

    parts
}
