use routetrie::{Config, Handler, InsertError, Router};

struct InsertTest(Vec<(Vec<&'static str>, &'static str, Result<(), InsertError>)>);

impl InsertTest {
    fn run(self) {
        self.run_with(Config::default())
    }

    fn run_with(self, config: Config) {
        let mut router: Router<()> = Router::with_config(config);
        for (methods, route, expected) in self.0 {
            let got = router.register(methods.clone(), route, [Handler::plain(|| {})]);
            assert_eq!(got, expected, "{:?} {}", methods, route);
        }
    }
}

fn invalid_method(method: &str) -> InsertError {
    InsertError::InvalidMethod {
        method: method.into(),
    }
}

#[test]
fn methods() {
    InsertTest(vec![
        (vec!["GET"], "/", Ok(())),
        (vec!["GET", "POST"], "/users", Ok(())),
        (vec!["PURGE"], "/cache", Ok(())),
        (vec![], "/", Err(invalid_method(""))),
        (vec!["get"], "/", Err(invalid_method("get"))),
        (vec!["GET", "Post"], "/", Err(invalid_method("Post"))),
        (vec!["M-SEARCH"], "/", Err(invalid_method("M-SEARCH"))),
        (vec![""], "/", Err(invalid_method(""))),
    ])
    .run()
}

#[test]
fn custom_methods() {
    let config = Config {
        allow_custom_methods: true,
        ..Config::default()
    };

    InsertTest(vec![
        (vec!["M-SEARCH"], "/", Ok(())),
        (vec!["purge"], "/", Ok(())),
        (vec!["GET /"], "/", Err(invalid_method("GET /"))),
    ])
    .run_with(config)
}

#[test]
fn leading_slash() {
    InsertTest(vec![
        (vec!["GET"], "users", Err(InsertError::MissingLeadingSlash { pattern: "users".into() })),
        (vec!["GET"], "", Err(InsertError::MissingLeadingSlash { pattern: "".into() })),
        (vec!["GET"], "/users", Ok(())),
    ])
    .run()
}

#[test]
fn method_checked_before_pattern() {
    InsertTest(vec![
        (vec!["get"], "users", Err(invalid_method("get"))),
        (vec!["get"], "/:a:b", Err(invalid_method("get"))),
    ])
    .run()
}

#[test]
fn malformed_patterns() {
    InsertTest(vec![
        (vec!["GET"], "/(:id", Err(InsertError::UnclosedBracket { position: 1 })),
        (vec!["GET"], "/files/*", Err(InsertError::UnnamedParam)),
        (vec!["GET"], "/(:a.b)", Ok(())),
        (
            vec!["GET"],
            "/:a*b",
            Err(InsertError::AdjacentParams {
                first: ":a".into(),
                second: "*b".into(),
            }),
        ),
    ])
    .run()
}

#[test]
fn reregistration() {
    InsertTest(vec![
        (vec!["GET"], "/users/:id", Ok(())),
        (vec!["GET"], "/users/:id", Ok(())),
        (vec!["GET", "GET"], "/users/:id", Ok(())),
        (vec!["POST"], "/users/:id", Ok(())),
    ])
    .run()
}

#[test]
fn empty_chain() {
    let mut router: Router<()> = Router::new();

    assert_eq!(router.get("/", []), Err(InsertError::EmptyChain));
    assert_eq!(
        router.get("users", []),
        Err(InsertError::MissingLeadingSlash {
            pattern: "users".into()
        })
    );
    assert_eq!(router.get("/:a:b", []), Err(InsertError::EmptyChain));
    assert!(router.methods().is_empty());
}

#[test]
fn error_messages() {
    assert_eq!(
        invalid_method("get").to_string(),
        "HTTP method \"get\" is invalid"
    );
    assert_eq!(
        InsertError::EmptyChain.to_string(),
        "there must be at least one handler"
    );
}
