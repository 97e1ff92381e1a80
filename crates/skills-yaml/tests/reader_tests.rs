//! Integration tests for the restricted YAML reader.

use pretty_assertions::assert_eq;
use rstest::rstest;
use skills_yaml::{Mapping, YamlValue, parse};

fn object(pairs: &[(&str, YamlValue)]) -> YamlValue {
    YamlValue::Map(pairs.iter().cloned().collect())
}

#[rstest]
#[case("key: \"value\"", "value")]
#[case("key: 'value'", "value")]
#[case("key: value", "value")]
#[case("key:   spaced value  ", "spaced value")]
#[case("key: \"mismatched'", "\"mismatched'")]
#[case("key: 42", "42")]
fn test_scalar_values(#[case] input: &str, #[case] expected: &str) {
    let map = parse(input);
    assert_eq!(map.get_str("key"), Some(expected));
}

#[test]
fn test_inline_array() {
    let map = parse("key: [a, b, c]");
    assert_eq!(map.get("key"), Some(&YamlValue::scalar_list(["a", "b", "c"])));
}

#[test]
fn test_inline_array_strips_quotes() {
    let map = parse("paths: [\"src/auth/\", 'src/middleware/']");
    assert_eq!(
        map.get("paths"),
        Some(&YamlValue::scalar_list(["src/auth/", "src/middleware/"]))
    );
}

#[test]
fn test_block_list_of_scalars() {
    let input = r#"
description: "Auth module"
tracked_paths:
  - "src/auth/"
  - 'src/middleware/'
last_updated: "2024-01-01"
"#;
    let map = parse(input);
    assert_eq!(map.get_str("description"), Some("Auth module"));
    assert_eq!(
        map.get("tracked_paths"),
        Some(&YamlValue::scalar_list(["src/auth/", "src/middleware/"]))
    );
    assert_eq!(map.get_str("last_updated"), Some("2024-01-01"));
}

#[test]
fn test_empty_brackets_open_a_list() {
    let map = parse("deps: []\n  - core\n  - fs");
    assert_eq!(map.get("deps"), Some(&YamlValue::scalar_list(["core", "fs"])));
}

#[test]
fn test_empty_list_without_items() {
    let map = parse("deps:\nname: x");
    assert_eq!(map.get("deps"), Some(&YamlValue::List(vec![])));
    assert_eq!(map.get_str("name"), Some("x"));
}

#[test]
fn test_block_list_of_objects() {
    let input = "items:\n  - name: foo\n    tags: [x, y]\n  - name: bar";
    let map = parse(input);

    let expected = YamlValue::List(vec![
        object(&[
            ("name", YamlValue::scalar("foo")),
            ("tags", YamlValue::scalar_list(["x", "y"])),
        ]),
        object(&[("name", YamlValue::scalar("bar"))]),
    ]);
    assert_eq!(map.get("items"), Some(&expected));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_object_properties_strip_quotes() {
    let input = "modules:\n  - name: \"auth\"\n    description: 'Login flow'\n    owner: team-a";
    let map = parse(input);
    let first = map.get("modules").unwrap().as_list().unwrap()[0]
        .as_map()
        .unwrap()
        .clone();

    assert_eq!(first.get_str("name"), Some("auth"));
    assert_eq!(first.get_str("description"), Some("Login flow"));
    assert_eq!(first.get_str("owner"), Some("team-a"));
}

#[test]
fn test_scalar_item_after_object_is_dropped() {
    let input = "items:\n  - name: foo\n  - stray";
    let map = parse(input);
    let items = map.get("items").unwrap().as_list().unwrap();
    assert_eq!(items.len(), 1);
}

#[test]
fn test_scalars_then_objects_are_kept_in_order() {
    let input = "items:\n  - plain\n  - name: foo";
    let map = parse(input);
    let items = map.get("items").unwrap().as_list().unwrap();
    assert_eq!(items[0], YamlValue::scalar("plain"));
    assert_eq!(items[1], object(&[("name", YamlValue::scalar("foo"))]));
}

#[rstest]
#[case(": no key")]
#[case("??? garbage")]
#[case("   indented: without object")]
#[case("# a comment")]
fn test_malformed_lines_are_skipped(#[case] bad: &str) {
    let input = format!("before: 1\n{bad}\nafter: 2");
    let map = parse(&input);

    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["before", "after"]);
    assert_eq!(map.get_str("after"), Some("2"));
}

#[test]
fn test_orphan_list_items_are_dropped() {
    let map = parse("- lonely\nkey: value");
    assert_eq!(map.len(), 1);
    assert_eq!(map.get_str("key"), Some("value"));
}

#[test]
fn test_items_after_scalar_key_join_the_open_list() {
    // The list cursor is only moved by list-shaped keys.
    let input = "paths:\n  - a\ntitle: Auth\n  - b";
    let map = parse(input);

    assert_eq!(map.get("paths"), Some(&YamlValue::scalar_list(["a", "b"])));
    assert_eq!(map.get_str("title"), Some("Auth"));
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["paths", "title"]);
}

#[test]
fn test_new_list_key_supersedes_cursor() {
    let input = "first:\n  - a\nsecond:\n  - b\n  - c";
    let map = parse(input);

    assert_eq!(map.get("first"), Some(&YamlValue::scalar_list(["a"])));
    assert_eq!(map.get("second"), Some(&YamlValue::scalar_list(["b", "c"])));
}

#[test]
fn test_sibling_empty_lists_collect_items_on_the_latest() {
    let input = "first:\nsecond:\n  - a\n  - b";
    let map = parse(input);

    assert_eq!(map.get("first"), Some(&YamlValue::List(vec![])));
    assert_eq!(map.get("second"), Some(&YamlValue::scalar_list(["a", "b"])));
}

#[test]
fn test_duplicate_key_last_wins_in_first_position() {
    let map = parse("a: 1\nb: 2\na: 3");
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(map.get_str("a"), Some("3"));
}

#[test]
fn test_redefined_list_key_drops_pending_list() {
    let map = parse("paths:\n  - a\npaths: none");
    assert_eq!(map.get_str("paths"), Some("none"));
}

#[test]
fn test_serializes_in_source_order() {
    let map = parse("zeta: 1\nalpha: [x]\nitems:\n  - name: n");
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"zeta":"1","alpha":["x"],"items":[{"name":"n"}]}"#);
}

#[test]
fn test_crlf_input() {
    let map = parse("a: 1\r\nlist:\r\n  - x\r\n");
    assert_eq!(map.get_str("a"), Some("1"));
    assert_eq!(map.get("list"), Some(&YamlValue::scalar_list(["x"])));
}

#[test]
fn test_mapping_collects_from_iterator() {
    let map: Mapping = [("a", "1"), ("b", "2")].into_iter().collect();
    assert_eq!(map.len(), 2);
}
