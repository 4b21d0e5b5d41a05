//! Property-based tests using proptest
//!
//! These tests verify the sort validation and query encoding invariants
//! that every list URL in the client depends on, using randomized inputs.

use std::collections::BTreeMap;

use proptest::prelude::*;

use guardctl::resource::query::{build_list_url, encode_query, SortEncoder, SORT_KEY_VALUES};
use guardctl::resource::ListParams;

/// Generate one of the service's valid sort keys
fn arb_valid_key() -> impl Strategy<Value = String> {
    prop_oneof!["id", "status", "name", "created_at"].prop_map(String::from)
}

/// Generate a valid sort direction
fn arb_valid_dir() -> impl Strategy<Value = String> {
    prop_oneof!["asc", "desc"].prop_map(String::from)
}

/// Generate a key that is guaranteed to be outside the allowed set
fn arb_invalid_key() -> impl Strategy<Value = String> {
    "[a-z]{3,10}".prop_filter("must not collide with a valid key", |k| {
        !SORT_KEY_VALUES.contains(&k.as_str())
    })
}

/// Generate a filter mapping with alphanumeric keys and values
fn arb_filters() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-z]{1,6}", "[a-z0-9]{0,6}", 0..8)
}

mod sort_validation {
    use super::*;

    proptest! {
        /// Any combination of valid keys and directions formats cleanly
        #[test]
        fn valid_entries_always_format(
            entries in prop::collection::vec((arb_valid_key(), prop::option::of(arb_valid_dir())), 1..5)
        ) {
            let spec = entries
                .iter()
                .map(|(key, dir)| match dir {
                    Some(dir) => format!("{key}:{dir}"),
                    None => key.clone(),
                })
                .collect::<Vec<_>>()
                .join(",");

            let formatted = SortEncoder::default().format_sort(&spec);
            prop_assert!(formatted.is_ok());
            prop_assert_eq!(formatted.unwrap().unwrap(), spec);
        }

        /// One invalid key anywhere in the sort input fails it entirely
        #[test]
        fn any_invalid_key_fails(
            valid in prop::collection::vec(arb_valid_key(), 0..3),
            invalid in arb_invalid_key()
        ) {
            let mut entries = valid;
            entries.push(invalid);
            let spec = entries.join(",");
            prop_assert!(SortEncoder::default().format_sort(&spec).is_err());
        }

        /// A direction outside asc/desc fails even on a valid key
        #[test]
        fn any_invalid_direction_fails(
            key in arb_valid_key(),
            dir in "[a-z]{3,10}"
        ) {
            prop_assume!(dir != "asc" && dir != "desc");
            let spec = format!("{key}:{dir}");
            prop_assert!(SortEncoder::default().format_sort(&spec).is_err());
        }
    }
}

mod query_encoding {
    use super::*;

    proptest! {
        /// Output keys are in lexicographic order no matter how the input
        /// pairs were ordered
        #[test]
        fn keys_come_out_sorted(filters in arb_filters()) {
            let mut pairs: Vec<(String, String)> = filters.into_iter().collect();
            pairs.reverse();

            let encoded = encode_query(pairs);
            let keys: Vec<&str> = encoded
                .split('&')
                .filter(|p| !p.is_empty())
                .map(|p| p.split('=').next().unwrap())
                .collect();

            let mut sorted = keys.clone();
            sorted.sort_unstable();
            prop_assert_eq!(keys, sorted);
        }

        /// Insertion order never changes the encoded string
        #[test]
        fn encoding_is_order_independent(filters in arb_filters()) {
            let forward: Vec<(String, String)> = filters.clone().into_iter().collect();
            let mut backward = forward.clone();
            backward.reverse();
            prop_assert_eq!(encode_query(forward), encode_query(backward));
        }

        /// Keys with empty values never appear in the output
        #[test]
        fn falsy_values_are_dropped(filters in arb_filters()) {
            let empty_keys: Vec<String> = filters
                .iter()
                .filter(|(_, v)| v.is_empty())
                .map(|(k, _)| k.clone())
                .collect();

            let encoded = encode_query(filters);
            for key in empty_keys {
                let needle = format!("{}=", key);
                prop_assert!(!encoded.contains(&needle));
            }
        }

        /// Encoding only truthy pairs is the identity on the pair set
        #[test]
        fn truthy_pairs_round_trip(filters in arb_filters()) {
            let encoded = encode_query(filters.clone());
            let decoded: BTreeMap<String, String> = encoded
                .split('&')
                .filter(|p| !p.is_empty())
                .map(|p| {
                    let (k, v) = p.split_once('=').unwrap();
                    (k.to_string(), v.to_string())
                })
                .collect();

            let truthy: BTreeMap<String, String> = filters
                .into_iter()
                .filter(|(_, v)| !v.is_empty())
                .collect();
            prop_assert_eq!(decoded, truthy);
        }
    }
}

mod list_urls {
    use super::*;

    proptest! {
        /// Every generated URL starts with the collection path and carries
        /// a query string only when parameters survive
        #[test]
        fn url_shape_is_stable(
            filters in arb_filters(),
            detailed in any::<bool>(),
            limit in prop::option::of(0u32..100),
            sort_key in prop::option::of(arb_valid_key())
        ) {
            let params = ListParams {
                filters: filters.clone(),
                limit,
                sort_key: sort_key.clone(),
                ..Default::default()
            };
            let url = build_list_url(&SortEncoder::default(), "plans", detailed, &params).unwrap();

            let prefix = if detailed { "/plans/detail" } else { "/plans" };
            prop_assert!(url.starts_with(prefix));

            let has_truthy_filter = filters.values().any(|v| !v.is_empty());
            let has_params = has_truthy_filter
                || limit.map(|l| l > 0).unwrap_or(false)
                || sort_key.is_some();
            prop_assert_eq!(url.contains('?'), has_params);
        }

        /// An invalid sort key poisons the build before any path exists
        #[test]
        fn invalid_sort_key_fails_the_build(invalid in arb_invalid_key()) {
            let params = ListParams {
                sort: Some(invalid),
                ..Default::default()
            };
            prop_assert!(build_list_url(&SortEncoder::default(), "plans", false, &params).is_err());
        }
    }
}
