use crate::error::InsertError;
use crate::handler::{Handler, HandlerKind};
use crate::params::Params;

use std::fmt;

/// The handler chain registered for a (method, pattern) pair.
///
/// The chain is never empty: it holds zero or more middlewares followed by
/// the target handler.
pub struct Route<C> {
    middlewares: Vec<Handler<C>>,
    target: Handler<C>,
}

impl<C> Route<C> {
    /// Builds a route from a chain whose last handler is the target.
    pub fn new(chain: impl IntoIterator<Item = Handler<C>>) -> Result<Self, InsertError> {
        let mut middlewares: Vec<_> = chain.into_iter().collect();
        let target = middlewares.pop().ok_or(InsertError::EmptyChain)?;

        Ok(Self {
            middlewares,
            target,
        })
    }

    /// The final handler of the chain.
    pub fn target(&self) -> &Handler<C> {
        &self.target
    }

    /// The handlers that run before the target.
    pub fn middlewares(&self) -> &[Handler<C>] {
        &self.middlewares
    }

    /// The calling convention of the target.
    pub fn kind(&self) -> HandlerKind {
        self.target.kind()
    }

    /// Iterates over the whole chain, target last.
    pub fn handlers(&self) -> impl Iterator<Item = &Handler<C>> {
        self.middlewares.iter().chain(Some(&self.target))
    }

    /// Returns the number of handlers in the chain.
    pub fn handler_count(&self) -> usize {
        self.middlewares.len() + 1
    }

    /// Invokes every handler of the chain in order.
    pub fn dispatch(&self, ctx: &mut C, params: &Params<'_, '_>) {
        for handler in self.handlers() {
            handler.call(ctx, params);
        }
    }
}

impl<C> Clone for Route<C> {
    fn clone(&self) -> Self {
        Self {
            middlewares: self.middlewares.clone(),
            target: self.target.clone(),
        }
    }
}

impl<C> fmt::Debug for Route<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("kind", &self.kind())
            .field("handlers", &self.handler_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_is_rejected() {
        let chain: Vec<Handler<()>> = Vec::new();
        assert_eq!(Route::new(chain).err(), Some(InsertError::EmptyChain));
    }

    #[test]
    fn dispatch_runs_chain_in_order() {
        let route = Route::new([
            Handler::context(|log: &mut Vec<&'static str>| log.push("auth")),
            Handler::context(|log: &mut Vec<&'static str>| log.push("logger")),
            Handler::plain(|| {}),
            Handler::with_params(|log: &mut Vec<&'static str>, _: &Params| log.push("target")),
        ])
        .unwrap();

        assert_eq!(route.handler_count(), 4);
        assert_eq!(route.middlewares().len(), 3);
        assert_eq!(route.kind(), HandlerKind::Params);

        let mut log = Vec::new();
        route.dispatch(&mut log, &Params::new());
        assert_eq!(log, ["auth", "logger", "target"]);
    }
}
