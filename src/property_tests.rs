//! Property-based tests for the query specification invariants.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use proptest::prelude::*;
use serde_json::Value;

use crate::query::QuerySpec;

/// Generate whitespace-only strings (including empty)
fn blank_string() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\r')], 0..8)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generate query text with at least one non-whitespace character
fn non_blank_text() -> impl Strategy<Value = String> {
    ("[ \t]*", "[a-zA-Z@*=]{1,20}", "[ \t]*")
        .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
}

/// Generate distinct parameter names of the conventional `@name` shape
fn unique_param_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,8}", 0..10)
        .prop_map(|names| names.into_iter().map(|n| format!("@{n}")).collect())
}

proptest! {
    /// Blank query text is always rejected at construction
    #[test]
    fn prop_blank_query_text_always_fails(text in blank_string()) {
        prop_assert!(QuerySpec::new(text).is_err());
    }

    /// Non-blank query text always constructs, and the text survives intact
    #[test]
    fn prop_non_blank_query_text_always_succeeds(text in non_blank_text()) {
        let spec = QuerySpec::new(text.clone()).unwrap();
        prop_assert_eq!(spec.text(), text.as_str());
    }

    /// n unique names yield exactly n descriptors, preserving insertion order
    #[test]
    fn prop_build_where_params_is_order_preserving(names in unique_param_names()) {
        let mut spec = QuerySpec::new("SELECT * FROM c").unwrap();
        for (i, name) in names.iter().enumerate() {
            spec = spec.with_param(name.clone(), Value::from(i as i64));
        }

        let params = spec.build_where_params();
        prop_assert_eq!(params.len(), names.len());
        for (i, (param, name)) in params.iter().zip(names.iter()).enumerate() {
            prop_assert_eq!(&param.name, name);
            prop_assert_eq!(&param.value, &Value::from(i as i64));
        }
    }

    /// Re-adding a name replaces its value without growing the list
    #[test]
    fn prop_duplicate_names_keep_mapping_semantics(
        names in unique_param_names(),
        replay in 0usize..10,
    ) {
        prop_assume!(!names.is_empty());
        let replay_index = replay % names.len();

        let mut spec = QuerySpec::new("SELECT * FROM c").unwrap();
        for name in &names {
            spec = spec.with_param(name.clone(), "first");
        }
        spec = spec.with_param(names[replay_index].clone(), "second");

        let params = spec.build_where_params();
        prop_assert_eq!(params.len(), names.len());
        prop_assert_eq!(&params[replay_index].name, &names[replay_index]);
        prop_assert_eq!(&params[replay_index].value, &Value::from("second"));
    }
}
