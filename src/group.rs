use crate::error::InsertError;
use crate::handler::Handler;
use crate::path::join_paths;
use crate::router::{Methods, Router};

/// A set of routes sharing a path prefix and leading middlewares.
///
/// Patterns registered through a group are joined onto its base path, and
/// the group's middlewares run before the chain given at registration.
/// Groups nest; a child inherits the base path and middlewares of its
/// parent.
///
/// ```
/// use routetrie::{Handler, Router};
///
/// let mut router: Router<()> = Router::new();
/// let mut v1 = router.group("/v1", []);
/// let mut admin = v1.group("admin", []);
/// admin.post("/users/:id/ban", [Handler::plain(|| {})])?;
///
/// assert!(router.at("POST", "/v1/admin/users/3/ban").is_some());
/// # Ok::<(), routetrie::InsertError>(())
/// ```
pub struct Group<'r, C> {
    router: &'r mut Router<C>,
    base: String,
    middlewares: Vec<Handler<C>>,
}

impl<'r, C> Group<'r, C> {
    pub(crate) fn new(
        router: &'r mut Router<C>,
        base: String,
        middlewares: Vec<Handler<C>>,
    ) -> Self {
        Self {
            router,
            base,
            middlewares,
        }
    }

    /// The absolute path every pattern of this group is joined onto.
    pub fn base_path(&self) -> &str {
        &self.base
    }

    /// The middlewares prepended to every chain registered here.
    pub fn middlewares(&self) -> &[Handler<C>] {
        &self.middlewares
    }

    /// Appends a middleware. Routes registered before the call are unaffected.
    pub fn middleware(&mut self, handler: Handler<C>) -> &mut Self {
        self.middlewares.push(handler);
        self
    }

    /// Opens a nested group under `relative`.
    pub fn group(
        &mut self,
        relative: &str,
        middlewares: impl IntoIterator<Item = Handler<C>>,
    ) -> Group<'_, C> {
        let base = join_paths(&self.base, relative);
        let middlewares = self.middlewares.iter().cloned().chain(middlewares).collect();
        Group::new(&mut *self.router, base, middlewares)
    }

    /// Registers a chain under the group's base path joined with `relative`.
    ///
    /// The chain given here must hold at least the target handler; the
    /// group's middlewares alone never form a route.
    pub fn register(
        &mut self,
        methods: impl Into<Methods>,
        relative: &str,
        chain: impl IntoIterator<Item = Handler<C>>,
    ) -> Result<(), InsertError> {
        let chain: Vec<_> = chain.into_iter().collect();
        if chain.is_empty() {
            return Err(InsertError::EmptyChain);
        }

        let pattern = join_paths(&self.base, relative);
        let chain = self.middlewares.iter().cloned().chain(chain);
        self.router.register(methods, &pattern, chain)
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

    /// Registers a chain for every configured method.
    pub fn any(
        &mut self,
        relative: &str,
        chain: impl IntoIterator<Item = Handler<C>>,
    ) -> Result<(), InsertError> {
        let methods = Methods::from(self.router.config().methods.clone());
        self.register(methods, relative, chain)
    }
}
