use super::{Request, Response};
use crate::router::{DispatchError, Outputs, Router};

use std::convert::Infallible;
use std::future::{ready, Ready};
use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;
use hyper::Body;
use tracing::debug;

/// Serves a frozen [`Router`] over hyper.
///
/// Every emitted output is written to the body in order. Hook output keeps the
/// 404 / 405 status of the miss it recovered from; an unhandled miss answers with the
/// bare status code as body.
pub struct RouterService<T> {
    router: Arc<Router<T>>,
}

impl<T> Clone for RouterService<T> {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
        }
    }
}

impl<T> From<Router<T>> for RouterService<T> {
    fn from(router: Router<T>) -> Self {
        Self::new(Arc::new(router))
    }
}

impl<T> RouterService<T> {
    pub fn new(router: Arc<Router<T>>) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &Router<T> {
        &self.router
    }
}

impl<T: AsRef<[u8]>> RouterService<T> {
    pub fn respond<B>(&self, req: &http::Request<B>) -> Response {
        let res = match self.router.dispatch_request(req) {
            Ok(outputs) => from_outputs(outputs),
            Err(miss) => from_miss(&miss, Body::from(miss.status().to_string())),
        };
        debug!(
            method = %req.method(),
            path = req.uri().path(),
            status = res.status().as_u16(),
            "request served"
        );
        res
    }
}

impl<T> Router<T> {
    pub fn into_service(self) -> RouterService<T> {
        RouterService::from(self)
    }
}

impl<T: AsRef<[u8]>> Service<Request> for RouterService<T> {
    type Response = Response;
    type Error = Infallible;
    type Future = Ready<Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        ready(Ok(self.respond(&req)))
    }
}

fn from_outputs<T: AsRef<[u8]>>(outputs: Outputs<T>) -> Response {
    let mut buf: Vec<u8> = Vec::new();
    for out in outputs.iter() {
        buf.extend_from_slice(out.as_ref());
    }
    match outputs.recovered_from() {
        Some(miss) => from_miss(miss, Body::from(buf)),
        None => Response::new(Body::from(buf)),
    }
}

fn from_miss(miss: &DispatchError, body: Body) -> Response {
    let mut res = Response::new(body);
    *res.status_mut() = miss.status_code();
    res.headers_mut().extend(miss.headers());
    res
}
