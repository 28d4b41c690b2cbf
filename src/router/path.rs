use std::borrow::Cow;

const SLASH: char = '/';

/// Trims whitespace and every leading/trailing slash, then puts back exactly one leading slash.
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_matches(SLASH);
    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push(SLASH);
    out.push_str(trimmed);
    out
}

/// Joins a base path and a pattern, skipping the base when it is the root.
pub fn join(base: &str, pattern: &str) -> String {
    if base == "/" {
        normalize(pattern)
    } else {
        normalize(&format!("{}{}", base, pattern))
    }
}

/// Cuts the query string and fragment off a request target.
pub fn strip_query(uri: &str) -> &str {
    match uri.find(|c| c == '?' || c == '#') {
        Some(i) => &uri[..i],
        None => uri,
    }
}

/// Decodes `+` as a space and `%XX` escapes. Invalid UTF-8 is replaced lossily.
pub fn decode(path: &str) -> Cow<'_, str> {
    if !path.contains(|c| c == '%' || c == '+') {
        return Cow::Borrowed(path);
    }
    let plus_decoded = path.replace('+', " ");
    match urlencoding::decode_binary(plus_decoded.as_bytes()) {
        Cow::Borrowed(_) => Cow::Owned(plus_decoded),
        Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
    }
}

/// The path a dispatch matches against: query stripped, normalized, decoded.
pub fn request_path(uri: &str) -> String {
    let normalized = normalize(strip_query(uri));
    decode(&normalized).into_owned()
}
