use std::ops::Deref;

use smallvec::SmallVec;

use super::error::DispatchError;

/// What an action (or a hook) hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output<T> {
    Emit(T),
    /// The action ran but has nothing to send.
    Empty,
}

impl<T> Output<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Emit(t) => Some(t),
            Self::Empty => None,
        }
    }
}

impl<T> From<Option<T>> for Output<T> {
    fn from(x: Option<T>) -> Self {
        match x {
            Some(t) => Self::Emit(t),
            None => Self::Empty,
        }
    }
}

/// The emitted values of one dispatch, in registration order.
///
/// Holds at most one value unless multimatch is on. An empty set means a route
/// matched and ran without producing anything.
#[derive(Debug)]
pub struct Outputs<T> {
    buf: SmallVec<[T; 1]>,
    recovered: Option<DispatchError>,
}

impl<T> Outputs<T> {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
            recovered: None,
        }
    }

    pub(super) fn recovered(miss: DispatchError, output: Output<T>) -> Self {
        let mut this = Self::new();
        this.push(output);
        this.recovered = Some(miss);
        this
    }

    pub(super) fn push(&mut self, output: Output<T>) {
        if let Output::Emit(t) = output {
            self.buf.push(t);
        }
    }

    /// Set when a not-found or method-not-allowed hook produced these outputs.
    pub fn recovered_from(&self) -> Option<&DispatchError> {
        self.recovered.as_ref()
    }

    pub fn into_first(self) -> Option<T> {
        self.buf.into_iter().next()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.buf.into_vec()
    }
}

impl<T> Deref for Outputs<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<T> IntoIterator for Outputs<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; 1]>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}
