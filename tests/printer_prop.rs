//! Printer property tests
//!
//! Invariants of readable / unreadable over generated values.

use etl_lisp::{Value, SENTINEL};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::boolean),
        any::<i64>().prop_map(Value::integer),
        "[a-z][a-z0-9-]{0,8}".prop_map(Value::symbol),
        "[a-z][a-z0-9-]{0,8}".prop_map(Value::keyword),
    ]
}

fn unescape(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next()? {
                'n' => out.push('\n'),
                other => out.push(other),
            }
        } else {
            out.push(ch);
        }
    }
    Some(out)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn scalars_print_identically_both_ways(value in scalar_strategy()) {
        prop_assert_eq!(value.readable(), value.unreadable());
    }

    #[test]
    fn escaped_strings_unescape_to_the_original(text in "[a-z\"\\\\\n ]{0,24}") {
        let value = Value::string(text.clone());
        prop_assert_eq!(unescape(&value.readable()), Some(text.clone()));
        prop_assert_eq!(value.unreadable(), text);
    }

    #[test]
    fn list_and_vector_differ_only_in_brackets(
        items in proptest::collection::vec(scalar_strategy(), 0..8)
    ) {
        let list = Value::list(items.clone()).readable();
        let vector = Value::vector(items).readable();
        prop_assert_eq!(&list[1..list.len() - 1], &vector[1..vector.len() - 1]);
        prop_assert!(list.starts_with('[') && list.ends_with(']'));
        prop_assert!(vector.starts_with('(') && vector.ends_with(')'));
    }

    #[test]
    fn map_prints_keys_in_insertion_order(
        keys in proptest::collection::vec("[a-z]{1,6}", 0..8)
    ) {
        let mut unique: Vec<String> = Vec::new();
        for key in keys {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }
        let entries: Vec<(String, Value)> = unique
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), Value::integer(i as i64)))
            .collect();
        let expected: Vec<String> = unique
            .iter()
            .enumerate()
            .map(|(i, key)| format!("{} {}", key, i))
            .collect();
        prop_assert_eq!(
            Value::map(entries).unreadable(),
            format!("{{{}}}", expected.join(" "))
        );
    }

    #[test]
    fn keyword_iff_sentinel_and_more(text in "\u{029E}?[a-z]{0,4}") {
        let value = Value::string(text.clone());
        let expected = text.starts_with(SENTINEL) && text.chars().count() > 1;
        prop_assert_eq!(value.is_keyword(), expected);
    }
}
