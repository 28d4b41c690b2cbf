use smallvec::SmallVec;

use super::error::RouterError;

pub(super) type MethodSet = SmallVec<[Box<str>; 2]>;

/// Anything that names one or more HTTP methods.
pub trait IntoMethods {
    fn into_methods(self) -> Vec<String>;
}

impl IntoMethods for &str {
    fn into_methods(self) -> Vec<String> {
        vec![self.to_owned()]
    }
}

impl IntoMethods for String {
    fn into_methods(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoMethods for &[&str] {
    fn into_methods(self) -> Vec<String> {
        self.iter().map(|&m| m.to_owned()).collect()
    }
}

impl<const N: usize> IntoMethods for [&str; N] {
    fn into_methods(self) -> Vec<String> {
        self.iter().map(|&m| m.to_owned()).collect()
    }
}

impl IntoMethods for Vec<String> {
    fn into_methods(self) -> Vec<String> {
        self
    }
}

#[cfg(feature = "http-router")]
impl IntoMethods for http::Method {
    fn into_methods(self) -> Vec<String> {
        vec![self.as_str().to_owned()]
    }
}

/// Uppercases and deduplicates method tokens.
pub(super) fn method_set(methods: impl IntoMethods) -> Result<MethodSet, RouterError> {
    let mut set = MethodSet::new();
    for m in methods.into_methods() {
        let m = m.trim();
        if m.is_empty() || !m.bytes().all(is_tchar) {
            return Err(RouterError::InvalidMethod(m.into()));
        }
        let m: Box<str> = m.to_ascii_uppercase().into();
        if !set.contains(&m) {
            set.push(m);
        }
    }
    if set.is_empty() {
        return Err(RouterError::NoMethods);
    }
    Ok(set)
}

pub(super) fn accepts(set: &MethodSet, method: &str) -> bool {
    set.iter().any(|m| m.eq_ignore_ascii_case(method))
}

// token characters of RFC 7230
fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}
