//! Path resolution scenarios: soft reads, auto-vivifying writes, and
//! removal through nested structure.

use seqmap::{SeqMap, Value, path};

#[test]
fn test_get_by_index_with_default() {
    let map = SeqMap::from_values([2, 1, 3]);

    assert_eq!(map.get_as::<i64>(1u64), Some(1));
    assert_eq!(map.get(3u64), None);
    assert_eq!(map.get_or(3u64, &Value::Int(4)), &Value::Int(4));
}

#[test]
fn test_nested_get_and_overlong_path() {
    let mut map = SeqMap::new();
    map.set(path!("name", "name2"), "name3");

    assert_eq!(map.get_as::<&str>(path!("name", "name2")), Some("name3"));
    // The same path plus a non-existent segment resolves to the default
    assert_eq!(
        map.get_or(path!("name", "name2", "name3"), &Value::Null),
        &Value::Null
    );
}

#[test]
fn test_get_through_list_levels() {
    // [[11, 22]]: two integer segments descend two list levels
    let map = SeqMap::from_values([SeqMap::from_values([11, 22])]);

    assert_eq!(map.get_as::<i64>(path!(0, 1)), Some(22));
    assert_eq!(map.get(path!(0, 2)), None);
    assert_eq!(map.get(path!(1, 0)), None);
}

#[test]
fn test_dot_notation_equivalence() {
    let mut map = SeqMap::new();
    map.set("user.profile.name", "Alice");

    assert_eq!(
        map.get_as::<&str>(path!("user", "profile", "name")),
        Some("Alice")
    );
    assert_eq!(map.get_as::<&str>("user.profile.name"), Some("Alice"));
}

#[test]
fn test_set_builds_missing_structure() {
    let mut map = SeqMap::new();
    map.set(path!("name", "name2"), "name3");

    // Sibling write under an existing container
    map.set(path!("name", "name3"), "name5");
    assert_eq!(map.get_as::<&str>(path!("name", "name2")), Some("name3"));
    assert_eq!(map.get_as::<&str>(path!("name", "name3")), Some("name5"));

    // Deep write through a fresh branch
    map.set(path!("name", "name4", "deep"), "name6");
    let branch = map.get(path!("name", "name4")).unwrap().as_map().unwrap();
    assert_eq!(branch.len(), 1);
}

#[test]
fn test_set_then_get_round_trip() {
    let mut map = SeqMap::new();
    map.set(path!("a", "b", "c", "d"), 42);

    assert_eq!(map.get_as::<i64>(path!("a", "b", "c", "d")), Some(42));
    // Every created intermediate holds exactly the next path step
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(path!("a")).unwrap().as_map().unwrap().len(), 1);
    assert_eq!(map.get(path!("a", "b")).unwrap().as_map().unwrap().len(), 1);
}

#[test]
fn test_has_prefix_absence() {
    let mut map = SeqMap::new();
    map.set(path!("a0", "a1"), "a2");

    assert!(map.has(path!("a0", "a1")));
    assert!(!map.has(path!("a0", "a2")));
    assert!(!map.has(path!("a0", "a1", "a2")));
    assert!(!map.has(path!("missing", "a1")));
}

#[test]
fn test_remove_scenarios() {
    // Removing the only entry of a list view
    let mut list = SeqMap::from_values([0]);
    list.remove(0u64);
    assert!(list.is_empty());

    // Single-key remove does not reach into nesting
    let mut map = SeqMap::new();
    map.set(path!("a0", "a1"), "a2");
    map.remove("a1");
    assert!(map.has(path!("a0", "a1")));

    // Removing the root key drops the whole subtree
    map.remove("a0");
    assert!(map.is_empty());
}

#[test]
fn test_remove_never_vivifies() {
    let mut map = SeqMap::new();
    map.set("present", 1);

    let before = map.clone();
    map.remove(path!("missing", "deep", "deeper"));
    map.remove(path!("present", "not_a_container"));
    assert_eq!(map, before);
}

#[test]
fn test_chained_mutation() {
    let mut map = SeqMap::new();
    map.set("a", 1).set("b", 2).set(path!("c", "d"), 3);

    assert_eq!(map.len(), 3);
    assert_eq!(map.get_as::<i64>(path!("c", "d")), Some(3));
}
