use crate::router::{DispatchError, Outputs, Router};

use http::header::{HeaderValue, ALLOW};
use http::{HeaderMap, Request, StatusCode};

impl<T> Router<T> {
    /// Dispatches on the method and URI path of an `http::Request`.
    pub fn dispatch_request<B>(&self, req: &Request<B>) -> Result<Outputs<T>, DispatchError> {
        self.dispatch(req.method().as_str(), req.uri().path())
    }
}

impl DispatchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Headers a response for this error should carry: `Allow` on a 405.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let allowed = self.allowed();
        if allowed.is_empty() {
            return headers;
        }
        let value = allowed.join(", ");
        if let Ok(v) = HeaderValue::from_str(&value) {
            headers.insert(ALLOW, v);
        }
        headers
    }
}
