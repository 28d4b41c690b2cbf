use super::config::RouterConfig;
use super::error::RouterError;
use super::method::{method_set, IntoMethods};
use super::output::Output;
use super::params::Params;
use super::path::{join, normalize};
use super::tokenize::{compile, placeholders, strip_group, tokenize};
use super::{Route, RouteId, Router};

use std::collections::HashMap;

use regex::Regex;
use tracing::{debug, warn};

impl<T> Router<T> {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Panics if the configured default constraint is not a valid regex.
    pub fn with_config(config: RouterConfig) -> Self {
        match Self::try_with_config(config) {
            Ok(router) => router,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_with_config(mut config: RouterConfig) -> Result<Self, RouterError> {
        check_default(&config.default_constraint)?;
        config.base_path = normalize(&config.base_path);
        Ok(Self {
            config,
            routes: Vec::new(),
            prefix: String::new(),
            not_found: None,
            method_not_allowed: None,
        })
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    pub fn route(&self, id: RouteId) -> Option<&Route<T>> {
        self.routes.get(id.0)
    }

    pub fn add<F>(
        &mut self,
        methods: impl IntoMethods,
        pattern: &str,
        action: F,
    ) -> RouteMut<'_, T>
    where
        F: Fn(&Params<'_>) -> Output<T> + Send + Sync + 'static,
    {
        let pattern_display = format!("{}{}", self.prefix, pattern);
        match self.insert_route(methods, pattern, Box::new(action)) {
            Ok(id) => RouteMut { router: self, id },
            Err(e) => panic!("{}: pattern = {:?}", e, pattern_display),
        }
    }

    pub fn try_add<F>(
        &mut self,
        methods: impl IntoMethods,
        pattern: &str,
        action: F,
    ) -> Result<RouteMut<'_, T>, RouterError>
    where
        F: Fn(&Params<'_>) -> Output<T> + Send + Sync + 'static,
    {
        let id = self.insert_route(methods, pattern, Box::new(action))?;
        Ok(RouteMut { router: self, id })
    }

    /// Registers routes under `prefix`.
    ///
    /// The prefix is glued to each pattern as is, before normalization. Scopes do not
    /// nest: a scope opened inside `f` replaces the prefix and clears it when it ends.
    pub fn scope(&mut self, prefix: &str, f: impl FnOnce(&mut Router<T>)) -> &mut Self {
        self.prefix = prefix.to_owned();
        f(self);
        self.prefix.clear();
        self
    }

    /// Attaches constraints to a route registered earlier.
    pub fn constrain<'c>(
        &mut self,
        id: RouteId,
        constraints: impl IntoIterator<Item = (&'c str, &'c str)>,
    ) -> Result<&mut Self, RouterError> {
        let case_insensitive = self.config.case_insensitive;
        let base = self.config.base_path.as_str();
        let default = self.config.default_constraint.as_str();
        let route = self
            .routes
            .get_mut(id.0)
            .ok_or(RouterError::UnknownRoute(id))?;

        let mut staged = route.constraints.clone();
        for (name, constraint) in constraints {
            check_fragment(name, constraint)?;
            if !route.names.iter().any(|n| &**n == name) {
                warn!(
                    route = %route.pattern,
                    param = name,
                    "constraint does not name a parameter of this route"
                );
            }
            staged.insert(name.into(), constraint.into());
        }

        let matcher = build_matcher(&route.pattern, &staged, base, default, case_insensitive)?;
        debug!(route = %route.pattern, matcher = matcher.as_str(), "constraints attached");
        route.constraints = staged;
        route.matcher = matcher;
        Ok(self)
    }

    pub fn set_default_constraint(&mut self, constraint: &str) -> &mut Self {
        if let Err(e) = self.try_set_default_constraint(constraint) {
            panic!("{}", e);
        }
        self
    }

    /// Replaces the default constraint and recompiles every route.
    ///
    /// On error nothing changes.
    pub fn try_set_default_constraint(
        &mut self,
        constraint: &str,
    ) -> Result<&mut Self, RouterError> {
        check_default(constraint)?;

        let base = self.config.base_path.as_str();
        let case_insensitive = self.config.case_insensitive;
        let matchers = self
            .routes
            .iter()
            .map(|r| {
                build_matcher(&r.pattern, &r.constraints, base, constraint, case_insensitive)
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (route, matcher) in self.routes.iter_mut().zip(matchers) {
            route.matcher = matcher;
        }
        self.config.default_constraint = constraint.to_owned();
        debug!(constraint, "default constraint changed");
        Ok(self)
    }

    pub fn on_not_found(
        &mut self,
        hook: impl Fn(&str) -> Output<T> + Send + Sync + 'static,
    ) -> &mut Self {
        self.not_found = Some(Box::new(hook));
        self
    }

    pub fn on_method_not_allowed(
        &mut self,
        hook: impl Fn(&str, &str) -> Output<T> + Send + Sync + 'static,
    ) -> &mut Self {
        self.method_not_allowed = Some(Box::new(hook));
        self
    }
}

macro_rules! define_method {
    ($name:ident, $method:literal) => {
        pub fn $name<F>(&mut self, pattern: &str, action: F) -> RouteMut<'_, T>
        where
            F: Fn(&Params<'_>) -> Output<T> + Send + Sync + 'static,
        {
            self.add($method, pattern, action)
        }
    };
}

impl<T> Router<T> {
    define_method!(get, "GET");
    define_method!(post, "POST");
    define_method!(put, "PUT");
    define_method!(patch, "PATCH");
    define_method!(delete, "DELETE");
    define_method!(head, "HEAD");
    define_method!(options, "OPTIONS");

    pub fn any<F>(&mut self, methods: &[&str], pattern: &str, action: F) -> RouteMut<'_, T>
    where
        F: Fn(&Params<'_>) -> Output<T> + Send + Sync + 'static,
    {
        self.add(methods, pattern, action)
    }
}

impl<T> Router<T> {
    fn insert_route(
        &mut self,
        methods: impl IntoMethods,
        pattern: &str,
        action: super::BoxAction<T>,
    ) -> Result<RouteId, RouterError> {
        let methods = method_set(methods)?;
        let pattern: Box<str> = if self.prefix.is_empty() {
            normalize(pattern).into()
        } else {
            normalize(&format!("{}{}", self.prefix, pattern)).into()
        };

        let constraints = HashMap::new();
        let matcher = build_matcher(
            &pattern,
            &constraints,
            &self.config.base_path,
            &self.config.default_constraint,
            self.config.case_insensitive,
        )?;
        let names: Vec<Box<str>> = placeholders(&pattern).map(Box::from).collect();

        let id = RouteId(self.routes.len());
        debug!(
            id = id.0,
            route = %pattern,
            methods = ?methods,
            matcher = matcher.as_str(),
            "route registered"
        );

        self.routes.push(Route {
            pattern,
            methods,
            names,
            constraints,
            matcher,
            action,
        });
        Ok(id)
    }
}

/// Borrow of a freshly registered route, for attaching constraints.
pub struct RouteMut<'r, T> {
    router: &'r mut Router<T>,
    id: RouteId,
}

impl<'r, T> RouteMut<'r, T> {
    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn route(&self) -> &Route<T> {
        &self.router.routes[self.id.0]
    }

    pub fn with(self, name: &str, constraint: &str) -> Self {
        self.with_all([(name, constraint)])
    }

    pub fn try_with(self, name: &str, constraint: &str) -> Result<Self, RouterError> {
        self.try_with_all([(name, constraint)])
    }

    pub fn with_all<'c>(self, constraints: impl IntoIterator<Item = (&'c str, &'c str)>) -> Self {
        let pattern = self.route().pattern.clone();
        match self.try_with_all(constraints) {
            Ok(this) => this,
            Err(e) => panic!("{}: pattern = {:?}", e, pattern),
        }
    }

    pub fn try_with_all<'c>(
        self,
        constraints: impl IntoIterator<Item = (&'c str, &'c str)>,
    ) -> Result<Self, RouterError> {
        self.router.constrain(self.id, constraints)?;
        Ok(self)
    }
}

fn build_matcher(
    pattern: &str,
    constraints: &HashMap<Box<str>, Box<str>>,
    base: &str,
    default: &str,
    case_insensitive: bool,
) -> Result<Regex, RouterError> {
    let full = join(base, pattern);
    let body = tokenize(&full, |name| constraints.get(name).map(|c| &**c), default);
    compile(&body, case_insensitive).map_err(|source| RouterError::InvalidPattern { source })
}

fn check_fragment(name: &str, constraint: &str) -> Result<(), RouterError> {
    match Regex::new(strip_group(constraint.trim())) {
        Ok(_) => Ok(()),
        Err(source) => Err(RouterError::InvalidConstraint {
            name: name.into(),
            constraint: constraint.into(),
            source,
        }),
    }
}

fn check_default(constraint: &str) -> Result<(), RouterError> {
    match Regex::new(strip_group(constraint.trim())) {
        Ok(_) => Ok(()),
        Err(source) => Err(RouterError::InvalidDefaultConstraint {
            constraint: constraint.into(),
            source,
        }),
    }
}
