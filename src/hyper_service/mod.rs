#![forbid(unsafe_code)]

mod service;

pub use self::service::RouterService;

type Request = hyper::Request<hyper::Body>;
type Response = hyper::Response<hyper::Body>;
