//! A small HTTP request router.
//!
//! Routes are `{name}` patterns registered in order; a request is matched against them
//! one by one with anchored regexes, and the first route whose path and method both
//! match runs.
//!
//! ```
//! use trail_router::{Output, Params, Router};
//!
//! let mut router = Router::new();
//! router
//!     .get("/items/{id}", |p: &Params<'_>| Output::Emit(format!("item {}", p[0])))
//!     .with("id", r"\d+");
//!
//! let out = router.dispatch("GET", "/items/7").unwrap();
//! assert_eq!(out.into_first().unwrap(), "item 7");
//! assert_eq!(router.dispatch("GET", "/items/x").unwrap_err().status(), 404);
//! ```

#![forbid(unsafe_code)]

mod router;
mod router_macro;

pub use self::router::{
    normalize, tokenize, Action, DispatchError, IntoMethods, Output, Outputs, Params, Route,
    RouteId, RouteMut, Router, RouterConfig, RouterError, DEFAULT_CONSTRAINT,
};

#[cfg(feature = "http-router")]
mod http_router;

#[cfg(feature = "http-router")]
pub use http::Method;

#[cfg(feature = "hyper-service")]
mod hyper_service;

#[cfg(feature = "hyper-service")]
pub use self::hyper_service::RouterService;
