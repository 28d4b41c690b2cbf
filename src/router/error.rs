use smallvec::SmallVec;

use super::RouteId;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("invalid constraint for parameter {name:?}: {constraint:?}")]
    InvalidConstraint {
        name: Box<str>,
        constraint: Box<str>,
        #[source]
        source: regex::Error,
    },

    #[error("invalid default constraint: {constraint:?}")]
    InvalidDefaultConstraint {
        constraint: Box<str>,
        #[source]
        source: regex::Error,
    },

    #[error("pattern can not be compiled")]
    InvalidPattern {
        #[source]
        source: regex::Error,
    },

    #[error("route must accept at least one method")]
    NoMethods,

    #[error("invalid method token: {0:?}")]
    InvalidMethod(Box<str>),

    #[error("no route with id {0}")]
    UnknownRoute(RouteId),
}

/// A request the router could not hand to any action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("404 Not Found: {path}")]
    NotFound { path: String },

    #[error("405 Method Not Allowed: {method} {path}")]
    MethodNotAllowed {
        path: String,
        method: String,
        allowed: SmallVec<[Box<str>; 4]>,
    },
}

impl DispatchError {
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::MethodNotAllowed { .. } => 405,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path } | Self::MethodNotAllowed { path, .. } => path,
        }
    }

    /// Methods accepted by the routes whose pattern matched the path.
    pub fn allowed(&self) -> &[Box<str>] {
        match self {
            Self::NotFound { .. } => &[],
            Self::MethodNotAllowed { allowed, .. } => allowed,
        }
    }
}
