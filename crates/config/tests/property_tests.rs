//! Property-based tests for parsing and typed reads.
//!
//! Test coverage:
//! - Integer assignments read back unchanged through every wide accessor.
//! - String assignments lose exactly one layer of enclosing quotes.
//! - Nested blocks always produce the joined dotted key.
//! - Integer-looking elements are always rejected in string arrays.

use proptest::prelude::*;
use tide_config::{ConfigError, TideLoader};

const ORIGIN: &str = "/nonexistent/property.tide";

fn hermetic() -> TideLoader {
    TideLoader::new().with_env_vars(Vec::<(&str, &str)>::new())
}

/// Identifiers usable as block or field names.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,12}"
        .prop_map(String::from)
        .prop_filter("import is a keyword", |s| s != "import")
}

/// String contents without quotes, newlines or leading/trailing whitespace.
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_:=.,/-]([a-zA-Z0-9 _:=.,/-]{0,20}[a-zA-Z0-9_:=.,/-])?".prop_map(String::from)
}

proptest! {
    #[test]
    fn integer_reads_back(n in any::<i64>()) {
        let store = hermetic()
            .load_str(&format!("value: integer = {n}\n"), ORIGIN)
            .unwrap();
        prop_assert_eq!(store.get_int64("value").unwrap(), n);
        prop_assert_eq!(store.get_int("value").unwrap() as i64, n);
    }

    #[test]
    fn int32_matches_range(n in any::<i64>()) {
        let store = hermetic()
            .load_str(&format!("value: integer = {n}\n"), ORIGIN)
            .unwrap();
        match i32::try_from(n) {
            Ok(small) => prop_assert_eq!(store.get_int32("value").unwrap(), small),
            Err(_) => prop_assert!(
                matches!(store.get_int32("value"), Err(ConfigError::Conversion { .. })),
                "expected conversion error"
            ),
        }
    }

    #[test]
    fn quoted_string_loses_one_layer(text in text_strategy()) {
        let source = format!("a: string = \"{text}\"\nb: string = {text}\nc: string = \"\"{text}\"\"\n");
        let store = hermetic().load_str(&source, ORIGIN).unwrap();
        prop_assert_eq!(store.get_string("a").unwrap(), text.clone());
        prop_assert_eq!(store.get_string("b").unwrap(), text.clone());
        prop_assert_eq!(store.get_string("c").unwrap(), format!("\"{text}\""));
    }

    #[test]
    fn nested_blocks_join_keys(
        blocks in proptest::collection::vec(ident_strategy(), 0..5),
        field in ident_strategy(),
    ) {
        let mut source = String::new();
        for block in &blocks {
            source.push_str(&format!("{block} {{\n"));
        }
        source.push_str(&format!("{field}: string = v\n"));
        for _ in &blocks {
            source.push_str("}\n");
        }

        let store = hermetic()
            .with_strict_blocks(true)
            .load_str(&source, ORIGIN)
            .unwrap();

        let mut expected = blocks.clone();
        expected.push(field);
        prop_assert_eq!(store.get_string(&expected.join(".")).unwrap(), "v");
    }

    #[test]
    fn numeric_string_array_rejected(
        words in proptest::collection::vec("[a-z]{1,8}", 0..4),
        n in any::<i32>(),
    ) {
        let mut elements = words;
        elements.push(n.to_string());
        let source = format!("list: array[string] = [{}]\n", elements.join(", "));
        prop_assert!(
            matches!(
                hermetic().load_str(&source, ORIGIN),
                Err(ConfigError::Validation { .. })
            ),
            "expected validation error"
        );
    }
}
