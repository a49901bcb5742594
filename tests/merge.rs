use routetrie::{Config, Handler, InsertError, Router};

fn value(name: &'static str) -> Handler<Vec<&'static str>> {
    Handler::context(move |out: &mut Vec<&'static str>| out.push(name))
}

fn run(router: &Router<Vec<&'static str>>, method: &str, path: &str) -> Option<&'static str> {
    let matched = router.at(method, path)?;
    let mut out = Vec::new();
    matched.value.dispatch(&mut out, &matched.params);
    out.pop()
}

#[test]
fn merge_ok() {
    let mut root = Router::new();
    assert!(root.get("/foo", [value("foo")]).is_ok());
    assert!(root.get("/bar/:id", [value("bar")]).is_ok());

    let mut child = Router::new();
    assert!(child.get("/baz", [value("baz")]).is_ok());
    assert!(child.post("/xyz/:id", [value("xyz")]).is_ok());

    assert!(root.merge(child).is_ok());

    assert_eq!(run(&root, "GET", "/foo"), Some("foo"));
    assert_eq!(run(&root, "GET", "/bar/1"), Some("bar"));
    assert_eq!(run(&root, "GET", "/baz"), Some("baz"));
    assert_eq!(run(&root, "POST", "/xyz/2"), Some("xyz"));
    assert_eq!(root.methods(), ["GET", "POST"]);
}

#[test]
fn merge_overwrites() {
    let mut root = Router::new();
    assert!(root.get("/foo", [value("root")]).is_ok());

    let mut child = Router::new();
    assert!(child.get("/foo", [value("child")]).is_ok());

    assert_eq!(root.merge(child), Ok(()));
    assert_eq!(run(&root, "GET", "/foo"), Some("child"));
    assert_eq!(root.tree("GET").unwrap().len(), 1);
}

#[test]
fn merge_rejects_foreign_methods() {
    let mut root = Router::new();
    assert!(root.get("/foo", [value("foo")]).is_ok());

    let mut child = Router::with_config(Config {
        allow_custom_methods: true,
        ..Config::default()
    });
    assert!(child.register("m-search", "/bar", [value("bar")]).is_ok());

    assert_eq!(
        root.merge(child),
        Err(InsertError::InvalidMethod {
            method: "m-search".into()
        })
    );
    assert_eq!(root.methods(), ["GET"]);
    assert_eq!(run(&root, "GET", "/bar"), None);
}

#[test]
fn merge_checks_every_method_first() {
    let mut root = Router::new();
    assert!(root.get("/foo", [value("foo")]).is_ok());

    let mut child = Router::with_config(Config {
        allow_custom_methods: true,
        ..Config::default()
    });
    for method in ["DELETE", "GET", "POST", "m-search", "PUT"] {
        assert!(child.register(method, "/bar", [value("bar")]).is_ok());
    }

    assert_eq!(
        root.merge(child),
        Err(InsertError::InvalidMethod {
            method: "m-search".into()
        })
    );
    assert_eq!(root.methods(), ["GET"]);
    assert_eq!(root.tree("GET").unwrap().len(), 1);
    for method in ["DELETE", "GET", "POST", "PUT"] {
        assert_eq!(run(&root, method, "/bar"), None, "{}", method);
    }
}
