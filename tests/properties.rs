use proptest::prelude::*;
use routetrie::pattern::{parse, render};
use routetrie::Tree;

fn literal() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

// One '/'-led piece of a route, carrying the concrete text a request would
// put in each capture. No value contains the text that follows it.
#[derive(Clone, Debug)]
enum Piece {
    Literal(String),
    Named(String),
    Bracketed { value: String, suffix: String },
    Digits(String),
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        literal().prop_map(Piece::Literal),
        "[a-z0-9_.-]{1,8}".prop_map(Piece::Named),
        ("[0-9]{1,6}", "[a-z]{1,4}").prop_map(|(value, suffix)| Piece::Bracketed { value, suffix }),
        "[0-9]{1,6}".prop_map(Piece::Digits),
    ]
}

// A route with an optional trailing wildcard, as (pattern, path, params).
fn route() -> impl Strategy<Value = (String, String, Vec<(String, String)>)> {
    (
        prop::collection::vec(piece(), 1..5),
        prop::option::of("[a-z0-9]{1,5}(/[a-z0-9]{1,5}){0,3}"),
    )
        .prop_map(|(pieces, tail)| {
            let mut pattern = String::new();
            let mut path = String::new();
            let mut params = Vec::new();

            for (i, piece) in pieces.into_iter().enumerate() {
                let name = format!("p{}", i);
                match piece {
                    Piece::Literal(text) => {
                        pattern += &format!("/{}", text);
                        path += &format!("/{}", text);
                    }
                    Piece::Named(value) => {
                        pattern += &format!("/:{}", name);
                        path += &format!("/{}", value);
                        params.push((name, value));
                    }
                    Piece::Bracketed { value, suffix } => {
                        pattern += &format!("/(:{}){}", name, suffix);
                        path += &format!("/{}{}", value, suffix);
                        params.push((name, value));
                    }
                    Piece::Digits(value) => {
                        pattern += &format!("/(:{}[0-9]+)", name);
                        path += &format!("/{}", value);
                        params.push((name, value));
                    }
                }
            }

            if let Some(rest) = tail {
                pattern += "/*rest";
                path += &format!("/{}", rest);
                params.push(("rest".to_owned(), rest));
            }

            (pattern, path, params)
        })
}

proptest! {
    #[test]
    fn parse_is_deterministic_and_lossless((pattern, _, _) in route()) {
        let first = parse(&pattern).unwrap();
        let second = parse(&pattern).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(render(&first), pattern);
    }

    #[test]
    fn filled_pattern_matches_itself((pattern, path, expected) in route()) {
        let mut tree = Tree::new();
        tree.insert(pattern.as_str(), ()).unwrap();

        let matched = tree.at(&path).unwrap();
        prop_assert_eq!(matched.pattern, pattern.as_str());

        let params: Vec<(String, String)> = matched
            .params
            .iter()
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect();
        prop_assert_eq!(params, expected);
    }

    #[test]
    fn named_params_bind_each_segment(values in prop::collection::vec("[a-z0-9_.-]{1,8}", 1..6)) {
        let pattern: String = (0..values.len()).map(|i| format!("/:p{}", i)).collect();
        let path: String = values.iter().map(|v| format!("/{}", v)).collect();

        let mut tree = Tree::new();
        tree.insert(pattern.as_str(), ()).unwrap();

        let matched = tree.at(&path).unwrap();
        prop_assert_eq!(matched.pattern, pattern.as_str());
        prop_assert_eq!(matched.params.len(), values.len());
        for (i, value) in values.iter().enumerate() {
            let key = format!("p{}", i);
            prop_assert_eq!(matched.params.get(&key), Some(value.as_str()));
        }
    }

    #[test]
    fn static_wins_over_named(name in literal(), static_first in any::<bool>()) {
        let fixed = format!("/{}", name);

        let mut tree = Tree::new();
        if static_first {
            tree.insert(fixed.as_str(), "static").unwrap();
            tree.insert("/:any", "dynamic").unwrap();
        } else {
            tree.insert("/:any", "dynamic").unwrap();
            tree.insert(fixed.as_str(), "static").unwrap();
        }

        prop_assert_eq!(*tree.at(&fixed).unwrap().value, "static");
        let other = format!("{}x", fixed);
        prop_assert_eq!(*tree.at(&other).unwrap().value, "dynamic");
        prop_assert!(tree.check_priorities().is_ok());
    }

    #[test]
    fn wildcard_takes_remainder(parts in prop::collection::vec("[a-z0-9]{1,5}", 1..5)) {
        let rest = parts.join("/");
        let path = format!("/files/{}", rest);

        let mut tree = Tree::new();
        tree.insert("/files/*rest", ()).unwrap();

        let matched = tree.at(&path).unwrap();
        prop_assert_eq!(matched.params.get("rest"), Some(rest.as_str()));
    }
}
