//! Handlers and the adapters that build them.
//!
//! A handler is any callable over a caller-owned context `C`. The adapter
//! used to construct it records how the underlying function wants to be
//! called, so the router never inspects function types at runtime.
use crate::params::Params;

use std::fmt;
use std::sync::Arc;

/// The calling convention of the function wrapped by a [`Handler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    /// `Fn()`
    Plain,
    /// `Fn(&mut C)`
    Context,
    /// `Fn(&mut C, &Params)`
    Params,
}

type HandlerFn<C> = dyn Fn(&mut C, &Params<'_, '_>) + Send + Sync;

/// A type-erased, cheaply clonable route handler.
///
/// ```
/// use routetrie::{Handler, HandlerKind, Params};
///
/// let greet = Handler::with_params(|out: &mut String, params: &Params| {
///     out.push_str(params.get("name").unwrap_or("stranger"));
/// });
/// assert_eq!(greet.kind(), HandlerKind::Params);
///
/// let mut out = String::new();
/// greet.call(&mut out, &Params::new());
/// assert_eq!(out, "stranger");
/// ```
pub struct Handler<C> {
    kind: HandlerKind,
    f: Arc<HandlerFn<C>>,
}

impl<C: 'static> Handler<C> {
    /// Wraps a function that takes no arguments.
    pub fn plain<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::from_fn(HandlerKind::Plain, move |_, _| f())
    }

    /// Wraps a function that only needs the context.
    pub fn context<F>(f: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        Self::from_fn(HandlerKind::Context, move |ctx, _| f(ctx))
    }

    /// Wraps a function that takes the context and the bound parameters.
    pub fn with_params<F>(f: F) -> Self
    where
        F: Fn(&mut C, &Params<'_, '_>) + Send + Sync + 'static,
    {
        Self::from_fn(HandlerKind::Params, f)
    }

    fn from_fn<F>(kind: HandlerKind, f: F) -> Self
    where
        F: Fn(&mut C, &Params<'_, '_>) + Send + Sync + 'static,
    {
        Self { kind, f: Arc::new(f) }
    }
}

impl<C> Handler<C> {
    /// Returns the calling convention this handler was built with.
    pub fn kind(&self) -> HandlerKind {
        self.kind
    }

    /// Invokes the handler.
    pub fn call(&self, ctx: &mut C, params: &Params<'_, '_>) {
        (self.f)(ctx, params)
    }

    /// Returns `true` if both handles wrap the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl<C> Clone for Handler<C> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            f: Arc::clone(&self.f),
        }
    }
}

impl<C> fmt::Debug for Handler<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").field("kind", &self.kind).finish()
    }
}
