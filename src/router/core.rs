use super::error::DispatchError;
use super::method::accepts;
use super::output::Outputs;
use super::params::Params;
use super::path::request_path;
use super::{Route, Router};

use smallvec::SmallVec;
use tracing::{debug, trace};

type SmallStrBuffer<'a> = SmallVec<[&'a str; 8]>;

impl<T> Router<T> {
    /// Matches `method` and `uri` against the table and runs the matching action(s).
    ///
    /// Misses are handed to the not-found / method-not-allowed hooks when they are set,
    /// and returned as a [`DispatchError`] otherwise.
    pub fn dispatch(&self, method: &str, uri: &str) -> Result<Outputs<T>, DispatchError> {
        match self.resolve(method, uri) {
            Ok(outputs) => Ok(outputs),
            Err(miss) => self.recover(miss),
        }
    }

    /// Like [`dispatch`](Router::dispatch), without running the hooks.
    pub fn resolve(&self, method: &str, uri: &str) -> Result<Outputs<T>, DispatchError> {
        let path = request_path(uri);
        let multimatch = self.config.multimatch;

        let mut outputs = Outputs::new();
        let mut invoked = false;
        let mut allowed: SmallVec<[Box<str>; 4]> = SmallVec::new();

        for route in &self.routes {
            let values = match capture(route, &path) {
                Some(v) => v,
                None => continue,
            };

            if !accepts(&route.methods, method) {
                trace!(route = %route.pattern, method, "path matched, method did not");
                for m in &route.methods {
                    if !allowed.contains(m) {
                        allowed.push(m.clone());
                    }
                }
                continue;
            }

            trace!(route = %route.pattern, method, "route matched");
            let params = Params::new(&route.names, values);
            outputs.push(route.action.call(&params));
            invoked = true;

            if !multimatch {
                break;
            }
        }

        if invoked {
            debug!(method, path = %path, outputs = outputs.len(), "dispatched");
            return Ok(outputs);
        }

        let miss = if allowed.is_empty() {
            DispatchError::NotFound { path }
        } else {
            DispatchError::MethodNotAllowed {
                path,
                method: method.to_owned(),
                allowed,
            }
        };
        debug!(method, error = %miss, "no route invoked");
        Err(miss)
    }

    fn recover(&self, miss: DispatchError) -> Result<Outputs<T>, DispatchError> {
        let output = match (&miss, &self.not_found, &self.method_not_allowed) {
            (DispatchError::NotFound { path }, Some(hook), _) => hook(path.as_str()),
            (DispatchError::MethodNotAllowed { path, method, .. }, _, Some(hook)) => {
                hook(path.as_str(), method.as_str())
            }
            _ => return Err(miss),
        };
        Ok(Outputs::recovered(miss, output))
    }
}

/// Structural match of one route. Group 0 is the whole match and is skipped.
fn capture<'p, T>(route: &Route<T>, path: &'p str) -> Option<SmallStrBuffer<'p>> {
    let caps = route.matcher.captures(path)?;
    Some(
        caps.iter()
            .skip(1)
            .map(|m| m.map_or("", |m| m.as_str()))
            .collect(),
    )
}
