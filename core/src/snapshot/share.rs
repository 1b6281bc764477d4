//! Share link helpers for the `?c=` query parameter

/// Query parameter that carries the snapshot token
pub const SHARE_PARAM: &str = "c";

/// Build the query string fragment for a token (`c=<token>`)
pub fn share_query(token: &str) -> String {
    format!("{SHARE_PARAM}={token}")
}

/// Extract the snapshot token from a full share URL or a bare query string.
///
/// Returns None if the parameter is absent or empty. Percent-escapes of the
/// base64 alphabet (`%2B`, `%2F`, `%3D`) are undone so tokens copied from
/// the browser address bar decode as-is.
pub fn token_from_url(input: &str) -> Option<String> {
    let without_fragment = input.split('#').next().unwrap_or_default();
    let query = match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None => without_fragment,
    };

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SHARE_PARAM)
        .map(|(_, value)| unescape_base64(value))
        .filter(|token| !token.is_empty())
}

fn unescape_base64(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let decoded = match rest.get(pos..pos + 3).map(str::to_ascii_uppercase).as_deref() {
            Some("%2B") => Some('+'),
            Some("%2F") => Some('/'),
            Some("%3D") => Some('='),
            _ => None,
        };
        match decoded {
            Some(c) => {
                out.push(c);
                rest = &rest[pos + 3..];
            }
            // Not an escape we undo: keep the '%' and rescan after it
            None => {
                out.push('%');
                rest = &rest[pos + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}
