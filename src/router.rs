use crate::config::Config;
use crate::error::InsertError;
use crate::group::Group;
use crate::handler::Handler;
use crate::path::join_paths;
use crate::route::Route;
use crate::tree::{self, Match, Tree};

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace, warn};

/// The method tokens a registration applies to.
///
/// Built from a single method or from a list of them:
///
/// ```
/// use routetrie::Methods;
///
/// let one = Methods::from("GET");
/// let many = Methods::from(["GET", "HEAD"]);
/// assert_eq!(many.iter().collect::<Vec<_>>(), ["GET", "HEAD"]);
/// # let _ = one;
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Methods(Vec<String>);

impl Methods {
    /// Iterates over the method tokens.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns `true` if no method was given.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Methods {
    fn from(method: &str) -> Self {
        Self(vec![method.to_owned()])
    }
}

impl From<String> for Methods {
    fn from(method: String) -> Self {
        Self(vec![method])
    }
}

impl From<&[&str]> for Methods {
    fn from(methods: &[&str]) -> Self {
        Self(methods.iter().map(|m| (*m).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Methods {
    fn from(methods: [&str; N]) -> Self {
        Self(methods.iter().map(|m| (*m).to_owned()).collect())
    }
}

impl From<Vec<&str>> for Methods {
    fn from(methods: Vec<&str>) -> Self {
        Self(methods.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<String>> for Methods {
    fn from(methods: Vec<String>) -> Self {
        Self(methods)
    }
}

/// A table of route tries, one per HTTP method.
///
/// Every registration pairs a set of methods and a pattern with a handler
/// chain. Tries are created the first time a method is registered, so
/// [`Router::at`] returns `None` for methods nothing was registered under.
///
/// ```
/// use routetrie::{Handler, Router};
///
/// let mut router: Router<Vec<String>> = Router::new();
/// router.get("/users/:id", [Handler::with_params(|out: &mut Vec<String>, params| {
///     out.push(format!("user {}", params.get("id").unwrap_or_default()));
/// })])?;
///
/// let matched = router.at("GET", "/users/42").unwrap();
/// let mut out = Vec::new();
/// matched.value.dispatch(&mut out, &matched.params);
/// assert_eq!(out, ["user 42"]);
///
/// assert!(router.at("POST", "/users/42").is_none());
/// # Ok::<(), routetrie::InsertError>(())
/// ```
pub struct Router<C> {
    trees: HashMap<String, Tree<Route<C>>>,
    config: Config,
}

impl<C> Default for Router<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Router<C> {
    /// Creates an empty router with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty router.
    pub fn with_config(config: Config) -> Self {
        Self {
            trees: HashMap::new(),
            config,
        }
    }

    /// The configuration this router was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registers a handler chain under `pattern` for every method in
    /// `methods`.
    ///
    /// The last handler of the chain is the target, the ones before it are
    /// middlewares. Registering the same pattern again for a method replaces
    /// its chain. On error, no tree is modified.
    pub fn register(
        &mut self,
        methods: impl Into<Methods>,
        pattern: &str,
        chain: impl IntoIterator<Item = Handler<C>>,
    ) -> Result<(), InsertError> {
        let methods = methods.into();
        let result = self.try_register(&methods, pattern, chain);
        if let Err(err) = &result {
            warn!(pattern, error = %err, "route rejected");
        }
        result
    }

    fn try_register(
        &mut self,
        methods: &Methods,
        pattern: &str,
        chain: impl IntoIterator<Item = Handler<C>>,
    ) -> Result<(), InsertError> {
        if methods.is_empty() {
            return Err(InsertError::InvalidMethod {
                method: String::new(),
            });
        }

        if let Some(method) = methods.iter().find(|m| !self.config.accepts_method(m)) {
            return Err(InsertError::InvalidMethod {
                method: method.to_owned(),
            });
        }

        if !pattern.starts_with('/') {
            return Err(InsertError::MissingLeadingSlash {
                pattern: pattern.to_owned(),
            });
        }

        let route = Route::new(chain)?;
        let segments = tree::compile(pattern)?;

        for method in methods.iter() {
            let tree = self.trees.entry(method.to_owned()).or_default();
            let replaced =
                tree.insert_segments(pattern.to_owned(), segments.clone(), route.clone());

            if replaced.is_some() {
                debug!(method, pattern, "route overwritten");
            }

            if self.config.debug {
                debug!(method, pattern, handlers = route.handler_count(), "route registered");
            } else {
                trace!(method, pattern, handlers = route.handler_count(), "route registered");
            }
        }

        Ok(())
    }

    method_shortcuts! {
        get => "GET",
        post => "POST",
        put => "PUT",
        delete => "DELETE",
        patch => "PATCH",
        head => "HEAD",
        options => "OPTIONS",
        trace => "TRACE",
    }

    /// Registers a handler chain for every method in [`Config::methods`].
    pub fn any(
        &mut self,
        pattern: &str,
        chain: impl IntoIterator<Item = Handler<C>>,
    ) -> Result<(), InsertError> {
        let methods = Methods::from(self.config.methods.clone());
        self.register(methods, pattern, chain)
    }

    /// Opens a group of routes sharing the path prefix `prefix` and the
    /// given middlewares.
    ///
    /// ```
    /// use routetrie::{Handler, Router};
    ///
    /// type Log = Vec<&'static str>;
    ///
    /// let mut router: Router<Log> = Router::new();
    /// let mut api = router.group("/api", [Handler::context(|log: &mut Log| log.push("auth"))]);
    /// api.get("/users/:id", [Handler::context(|log: &mut Log| log.push("user"))])?;
    ///
    /// let matched = router.at("GET", "/api/users/7").unwrap();
    /// let mut log = Vec::new();
    /// matched.value.dispatch(&mut log, &matched.params);
    /// assert_eq!(log, ["auth", "user"]);
    /// # Ok::<(), routetrie::InsertError>(())
    /// ```
    pub fn group(
        &mut self,
        prefix: &str,
        middlewares: impl IntoIterator<Item = Handler<C>>,
    ) -> Group<'_, C> {
        let base = join_paths("/", prefix);
        Group::new(self, base, middlewares.into_iter().collect())
    }

    /// Finds the route registered for `method` that matches `path`.
    ///
    /// Returns `None` if the method has no routes or no pattern matches.
    pub fn at<'t, 'p>(&'t self, method: &str, path: &'p str) -> Option<Match<'t, 'p, Route<C>>> {
        self.trees.get(method)?.at(path)
    }

    /// Returns the methods, sorted, that have a route matching `path`.
    pub fn allowed(&self, path: &str) -> Vec<&str> {
        let mut allowed: Vec<&str> = self
            .trees
            .iter()
            .filter(|(_, tree)| tree.at(path).is_some())
            .map(|(method, _)| method.as_str())
            .collect();
        allowed.sort_unstable();
        allowed
    }

    /// Returns the methods, sorted, that have at least one route.
    pub fn methods(&self) -> Vec<&str> {
        let mut methods: Vec<&str> = self.trees.keys().map(String::as_str).collect();
        methods.sort_unstable();
        methods
    }

    /// Returns the trie for `method`.
    pub fn tree(&self, method: &str) -> Option<&Tree<Route<C>>> {
        self.trees.get(method)
    }

    /// Moves every route of `other` into this router.
    ///
    /// Routes of `other` replace routes registered here under the same
    /// method and pattern. Nothing is moved unless every route of `other` is
    /// acceptable to this router's configuration; `other` is dropped on
    /// error.
    pub fn merge(&mut self, other: Router<C>) -> Result<(), InsertError> {
        if let Some(method) = other
            .methods()
            .into_iter()
            .find(|m| !self.config.accepts_method(m))
        {
            return Err(InsertError::InvalidMethod {
                method: method.to_owned(),
            });
        }

        let mut routes = Vec::new();
        for (method, tree) in other.trees {
            for (pattern, route) in tree.into_routes() {
                let segments = tree::compile(&pattern)?;
                routes.push((method.clone(), pattern, segments, route));
            }
        }

        for (method, pattern, segments, route) in routes {
            debug!(method = %method, pattern = %pattern, "route merged");
            self.trees
                .entry(method)
                .or_default()
                .insert_segments(pattern, segments, route);
        }

        Ok(())
    }
}

/// Dumps every trie, methods in sorted order.
impl<C> fmt::Display for Router<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for method in self.methods() {
            writeln!(f, "{}", method)?;
            for line in self.trees[method].to_string().lines() {
                writeln!(f, "  {}", line)?;
            }
        }

        Ok(())
    }
}

impl<C> fmt::Debug for Router<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("methods", &self.methods())
            .field("config", &self.config)
            .finish()
    }
}
