mod config;
mod core;
mod error;
mod imp;
mod method;
mod output;
mod params;
mod path;
mod tokenize;

pub use self::config::RouterConfig;
pub use self::error::{DispatchError, RouterError};
pub use self::imp::RouteMut;
pub use self::method::IntoMethods;
pub use self::output::{Output, Outputs};
pub use self::params::Params;
pub use self::path::normalize;
pub use self::tokenize::{tokenize, DEFAULT_CONSTRAINT};

use self::method::MethodSet;

use std::collections::HashMap;
use std::fmt;

use regex::Regex;

pub trait Action<T> {
    fn call(&self, params: &Params<'_>) -> Output<T>;
}

impl<T, F> Action<T> for F
where
    F: Fn(&Params<'_>) -> Output<T>,
{
    fn call(&self, params: &Params<'_>) -> Output<T> {
        (self)(params)
    }
}

type BoxAction<T> = Box<dyn Action<T> + Send + Sync>;
type NotFoundHook<T> = Box<dyn Fn(&str) -> Output<T> + Send + Sync>;
type NotAllowedHook<T> = Box<dyn Fn(&str, &str) -> Output<T> + Send + Sync>;

/// An ordered route table with its dispatcher.
///
/// Routes are tried in registration order. Registration needs `&mut self` and dispatch
/// only `&self`, so a router shared across threads is frozen.
pub struct Router<T> {
    config: RouterConfig,
    routes: Vec<Route<T>>,
    prefix: String,
    not_found: Option<NotFoundHook<T>>,
    method_not_allowed: Option<NotAllowedHook<T>>,
}

pub struct Route<T> {
    pattern: Box<str>,
    methods: MethodSet,
    names: Vec<Box<str>>,
    constraints: HashMap<Box<str>, Box<str>>,
    matcher: Regex,
    action: BoxAction<T>,
}

/// Position of a route in its router's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(usize);

impl RouteId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl<T> Route<T> {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|m| &**m)
    }

    pub fn params(&self) -> &[Box<str>] {
        &self.names
    }

    pub fn constraint(&self, name: &str) -> Option<&str> {
        self.constraints.get(name).map(|c| &**c)
    }

    pub fn constraints(&self) -> impl Iterator<Item = (&str, &str)> {
        self.constraints.iter().map(|(k, v)| (&**k, &**v))
    }

    /// The anchored regex this route is matched with, base path included.
    pub fn matcher(&self) -> &str {
        self.matcher.as_str()
    }
}

impl<T> fmt::Debug for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("methods", &self.methods)
            .field("constraints", &self.constraints)
            .field("matcher", &self.matcher.as_str())
            .finish()
    }
}

impl<T> fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .field("routes", &self.routes)
            .field("not_found", &self.not_found.is_some())
            .field("method_not_allowed", &self.method_not_allowed.is_some())
            .finish()
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}
