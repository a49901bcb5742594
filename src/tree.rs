//! The routing trie.
//!
//! Nodes live in a single arena and refer to their children by index. Each
//! node holds one [`Segment`]; patterns that share a leading run of segments
//! share the nodes for it. Siblings are kept in priority order, which is also
//! the order the matcher tries them in:
//!
//! 1. static segments before captures,
//! 2. longer static text before shorter,
//! 3. captures in registration order.
use crate::error::InsertError;
use crate::params::Params;
use crate::pattern::{self, Segment};

use std::cmp::Reverse;
use std::fmt;
use std::mem;

type NodeId = usize;

const ROOT: NodeId = 0;

struct Node<T> {
    segment: Segment,
    children: Vec<NodeId>,
    value: Option<T>,
    // The pattern as registered, set on terminal nodes.
    pattern: Option<String>,
}

impl<T> Node<T> {
    fn new(segment: Segment) -> Self {
        Self {
            segment,
            children: Vec::new(),
            value: None,
            pattern: None,
        }
    }
}

/// A successful match consisting of the registered value and the
/// parameters bound from the path.
#[derive(Debug)]
pub struct Match<'t, 'p, V> {
    /// The value stored under the matched pattern.
    pub value: &'t V,
    /// The pattern the value was registered with.
    pub pattern: &'t str,
    /// The bound parameters, in pattern order.
    pub params: Params<'t, 'p>,
}

/// A trie of route patterns for a single method.
///
/// ```
/// use routetrie::Tree;
///
/// let mut tree = Tree::new();
/// tree.insert("/users/:id", "user")?;
/// tree.insert("/users/new", "new user")?;
///
/// let matched = tree.at("/users/42").unwrap();
/// assert_eq!(*matched.value, "user");
/// assert_eq!(matched.params.get("id"), Some("42"));
///
/// assert_eq!(*tree.at("/users/new").unwrap().value, "new user");
/// # Ok::<(), routetrie::InsertError>(())
/// ```
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Segment::Static(String::new()))],
        }
    }

    /// Inserts a value under `pattern`.
    ///
    /// Inserting a pattern that is already present replaces its value.
    pub fn insert(&mut self, pattern: impl Into<String>, value: T) -> Result<(), InsertError> {
        let pattern = pattern.into();
        let segments = compile(&pattern)?;
        self.insert_segments(pattern, segments, value);
        Ok(())
    }

    // Walks the already-compiled segments, creating missing nodes. Returns the
    // value previously stored under the pattern.
    pub(crate) fn insert_segments(
        &mut self,
        pattern: String,
        segments: Vec<Segment>,
        value: T,
    ) -> Option<T> {
        let mut current = ROOT;

        for segment in segments {
            let existing = self.nodes[current]
                .children
                .iter()
                .copied()
                .find(|&child| self.nodes[child].segment == segment);

            current = match existing {
                Some(child) => child,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(Node::new(segment));
                    self.nodes[current].children.push(id);
                    self.sort_children(current);
                    id
                }
            };
        }

        let node = &mut self.nodes[current];
        node.pattern = Some(pattern);
        node.value.replace(value)
    }

    fn sort_children(&mut self, parent: NodeId) {
        let mut children = mem::take(&mut self.nodes[parent].children);
        // stable, so ties keep registration order
        children.sort_by_key(|&child| priority(&self.nodes[child].segment));
        self.nodes[parent].children = children;
    }

    /// Matches `path` against the tree.
    ///
    /// Returns `None` if no registered pattern matches.
    pub fn at<'t, 'p>(&'t self, path: &'p str) -> Option<Match<'t, 'p, T>> {
        let mut params = Params::new();
        let id = self.first_child(ROOT, path, &mut params)?;
        let node = &self.nodes[id];

        Some(Match {
            value: node.value.as_ref()?,
            pattern: node.pattern.as_deref().unwrap_or_default(),
            params,
        })
    }

    /// Returns the number of registered patterns.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|node| node.value.is_some()).count()
    }

    /// Returns `true` if no pattern has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the registered patterns and their values.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &T)> {
        self.nodes
            .iter()
            .filter_map(|node| Some((node.pattern.as_deref()?, node.value.as_ref()?)))
    }

    pub(crate) fn into_routes(self) -> impl Iterator<Item = (String, T)> {
        self.nodes
            .into_iter()
            .filter_map(|node| Some((node.pattern?, node.value?)))
    }

    // Tries the children of `id` in priority order; the first to match wins.
    fn first_child<'t, 'p>(
        &'t self,
        id: NodeId,
        path: &'p str,
        params: &mut Params<'t, 'p>,
    ) -> Option<NodeId> {
        self.nodes[id]
            .children
            .iter()
            .find_map(|&child| self.descend(child, path, params))
    }

    // Matches a single node, rolling back any bindings if it fails.
    fn descend<'t, 'p>(
        &'t self,
        id: NodeId,
        path: &'p str,
        params: &mut Params<'t, 'p>,
    ) -> Option<NodeId> {
        let len = params.len();
        let found = self.match_node(id, path, params);
        if found.is_none() {
            params.truncate(len);
        }
        found
    }

    fn match_node<'t, 'p>(
        &'t self,
        id: NodeId,
        path: &'p str,
        params: &mut Params<'t, 'p>,
    ) -> Option<NodeId> {
        let node = &self.nodes[id];

        match &node.segment {
            Segment::Static(prefix) => {
                let rest = path.strip_prefix(prefix.as_str())?;
                if rest.is_empty() {
                    return node.value.is_some().then_some(id);
                }
                self.first_child(id, rest, params)
            }
            Segment::Named(name) => self.match_param(id, name, None, path, params),
            Segment::Regex { name, regex, .. } => {
                self.match_param(id, name, Some(regex), path, params)
            }
            Segment::Wildcard(name) => self.match_wildcard(id, name, path, params),
        }
    }

    // A named parameter stops at the first '/'. With children, it ends at the
    // leftmost occurrence of a child's text inside that span.
    fn match_param<'t, 'p>(
        &'t self,
        id: NodeId,
        name: &'t str,
        regex: Option<&regex::Regex>,
        path: &'p str,
        params: &mut Params<'t, 'p>,
    ) -> Option<NodeId> {
        let end = path.find('/').unwrap_or(path.len());
        let accepts = |value: &str| match regex {
            _ if value.is_empty() => false,
            Some(re) => re.is_match(value),
            None => true,
        };

        for &child in &self.nodes[id].children {
            let Some(anchor) = self.anchor(child) else {
                continue;
            };

            let Some(split) = path
                .match_indices(anchor)
                .map(|(i, _)| i)
                .find(|&i| i > 0)
            else {
                continue;
            };

            if split > end || !accepts(&path[..split]) {
                continue;
            }

            params.push(name, &path[..split]);
            if let Some(found) = self.descend(child, &path[split..], params) {
                return Some(found);
            }
            params.truncate(params.len() - 1);
        }

        if end == path.len() && self.nodes[id].value.is_some() && accepts(path) {
            params.push(name, path);
            return Some(id);
        }

        None
    }

    // A wildcard spans '/' freely. With children, it ends at an occurrence of
    // a child's text, rightmost first; otherwise it takes the whole remainder.
    fn match_wildcard<'t, 'p>(
        &'t self,
        id: NodeId,
        name: &'t str,
        path: &'p str,
        params: &mut Params<'t, 'p>,
    ) -> Option<NodeId> {
        for &child in &self.nodes[id].children {
            let Some(anchor) = self.anchor(child) else {
                continue;
            };

            for (split, _) in path.rmatch_indices(anchor) {
                if split == 0 {
                    continue;
                }

                params.push(name, &path[..split]);
                if let Some(found) = self.descend(child, &path[split..], params) {
                    return Some(found);
                }
                params.truncate(params.len() - 1);
            }
        }

        if !path.is_empty() && self.nodes[id].value.is_some() {
            params.push(name, path);
            return Some(id);
        }

        None
    }

    // The literal text of a static node, bounding the capture before it.
    fn anchor(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id].segment {
            Segment::Static(text) => Some(text),
            _ => None,
        }
    }

    /// Verifies that every sibling list is in priority order.
    ///
    /// Returns the first misordered pair as `(found, expected)`.
    #[doc(hidden)]
    pub fn check_priorities(&self) -> Result<(), (String, String)> {
        for node in &self.nodes {
            for pair in node.children.windows(2) {
                let (a, b) = (&self.nodes[pair[0]].segment, &self.nodes[pair[1]].segment);
                if priority(a) > priority(b) {
                    return Err((a.to_string(), b.to_string()));
                }
            }
        }

        Ok(())
    }

    fn fmt_children(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        for &child in &self.nodes[id].children {
            let node = &self.nodes[child];
            let next = node
                .children
                .iter()
                .map(|&id| &self.nodes[id].segment)
                .find(|segment| segment.extends_name());
            let segment = node.segment.render(next);
            write!(f, "{:indent$}{}", "", segment, indent = depth * 2)?;
            if let Some(pattern) = &node.pattern {
                write!(f, "  -> {}", pattern)?;
            }
            writeln!(f)?;
            self.fmt_children(f, child, depth + 1)?;
        }

        Ok(())
    }
}

/// Renders the trie one segment per line, indented by depth. Terminal nodes
/// show the pattern that ends there.
impl<T> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_children(f, ROOT, 0)
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.routes()).finish()
    }
}

// Parses and validates a pattern without touching any tree.
pub(crate) fn compile(pattern: &str) -> Result<Vec<Segment>, InsertError> {
    if !pattern.starts_with('/') {
        return Err(InsertError::MissingLeadingSlash {
            pattern: pattern.to_owned(),
        });
    }

    let segments = pattern::parse(pattern)?;
    pattern::validate(&segments)?;
    Ok(segments)
}

fn priority(segment: &Segment) -> (u8, Reverse<usize>) {
    match segment {
        Segment::Static(text) => (0, Reverse(text.len())),
        _ => (1, Reverse(0)),
    }
}
