//! A per-method HTTP route trie with named, wildcard and inline-regex
//! captures.
//!
//! ```rust
//! use routetrie::{Handler, Router};
//!
//! let mut router: Router<String> = Router::new();
//! router.get("/", [Handler::context(|out: &mut String| out.push_str("Welcome!"))])?;
//! router.get("/users/:id", [Handler::with_params(|out: &mut String, params| {
//!     out.push_str(params.get("id").unwrap_or_default())
//! })])?;
//!
//! let matched = router.at("GET", "/users/978").unwrap();
//! assert_eq!(matched.pattern, "/users/:id");
//! assert_eq!(matched.params.get("id"), Some("978"));
//!
//! let mut out = String::new();
//! matched.value.dispatch(&mut out, &matched.params);
//! assert_eq!(out, "978");
//! # Ok::<(), routetrie::InsertError>(())
//! ```
//!
//! ## Parameters
//!
//! Along with static text, a pattern can contain captures:
//!
//! ```text
//!  Syntax            Type
//!  :name             named parameter
//!  *name             wildcard parameter
//!  (:name)           bracketed named parameter
//!  (:name[0-9]+)     named parameter constrained by a regex
//!  (*name)           bracketed wildcard parameter
//! ```
//!
//! Named parameters match anything up to the next `/`, or up to the literal
//! text that follows them in the pattern:
//!
//! ```rust
//! # use routetrie::Tree;
//! let mut m = Tree::new();
//! m.insert("/users/:id", true)?;
//! m.insert("/files/:name.:ext", true)?;
//!
//! assert_eq!(m.at("/users/1").unwrap().params.get("id"), Some("1"));
//! assert_eq!(m.at("/users/23").unwrap().params.get("id"), Some("23"));
//! assert!(m.at("/users").is_none());
//! assert!(m.at("/users/1/edit").is_none());
//!
//! let matched = m.at("/files/report.pdf").unwrap();
//! assert_eq!(matched.params.get("name"), Some("report"));
//! assert_eq!(matched.params.get("ext"), Some("pdf"));
//! # Ok::<(), routetrie::InsertError>(())
//! ```
//!
//! Wildcard parameters match anything, `/` included. When literal text
//! follows a wildcard, the longest value that lets the rest of the pattern
//! match is bound:
//!
//! ```rust
//! # use routetrie::Tree;
//! let mut m = Tree::new();
//! m.insert("/static/*path", true)?;
//! m.insert("/repos/*name/edit", true)?;
//!
//! assert_eq!(m.at("/static/js/app.js").unwrap().params.get("path"), Some("js/app.js"));
//! assert_eq!(m.at("/repos/a/b/edit").unwrap().params.get("name"), Some("a/b"));
//! assert!(m.at("/static/").is_none());
//! # Ok::<(), routetrie::InsertError>(())
//! ```
//!
//! A regex constraint must match the whole captured value:
//!
//! ```rust
//! # use routetrie::Tree;
//! let mut m = Tree::new();
//! m.insert("/posts/(:id[0-9]+)", "by id")?;
//! m.insert("/posts/:slug", "by slug")?;
//!
//! assert_eq!(*m.at("/posts/42").unwrap().value, "by id");
//! assert_eq!(*m.at("/posts/42abc").unwrap().value, "by slug");
//! # Ok::<(), routetrie::InsertError>(())
//! ```
//!
//! ## Routing Priority
//!
//! Static text is always tried before captures, longer text before shorter,
//! and captures in the order they were registered. When a branch fails, the
//! matcher backtracks into the next candidate:
//!
//! ```rust
//! # use routetrie::Tree;
//! let mut m = Tree::new();
//! m.insert("/users/:id", "user")?;
//! m.insert("/users/new", "new user")?;
//! m.insert("/users/:id/edit", "edit user")?;
//!
//! assert_eq!(*m.at("/users/new").unwrap().value, "new user");
//! assert_eq!(*m.at("/users/newer").unwrap().value, "user");
//! assert_eq!(*m.at("/users/new/edit").unwrap().value, "edit user");
//! # Ok::<(), routetrie::InsertError>(())
//! ```

#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod config;
mod error;
mod group;
mod handler;
mod params;
mod path;
mod route;
mod router;
mod tree;

pub mod pattern;

pub use config::{Config, DEFAULT_METHODS};
pub use error::InsertError;
pub use group::Group;
pub use handler::{Handler, HandlerKind};
pub use params::{Params, ParamsIter};
pub use route::Route;
pub use router::{Methods, Router};
pub use tree::{Match, Tree};
