//! Construction-boundary tests: containers from and to the external
//! serialization collaborator.

use seqmap::{SeqMap, Value};

#[test]
fn test_list_json_round_trip() {
    let map = SeqMap::from_values([1, 2, 3]);
    let json = map.to_json().unwrap();
    assert_eq!(json, "[1,2,3]");

    let back = SeqMap::from_json(&json).unwrap();
    assert_eq!(back, map);
}

#[test]
fn test_object_json_round_trip_preserves_order() {
    let map: SeqMap = [("ccc", 3), ("aaa", 1), ("bbb", 2)].into_iter().collect();
    let json = map.to_json().unwrap();
    assert_eq!(json, r#"{"ccc":3,"aaa":1,"bbb":2}"#);

    let back = SeqMap::from_json(&json).unwrap();
    let keys: Vec<String> = back.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, ["ccc", "aaa", "bbb"]);
}

#[test]
fn test_nested_json_decode_then_path_access() {
    let back = SeqMap::from_json(r#"{"user":{"name":"Alice","tags":["a","b"]}}"#).unwrap();

    assert_eq!(back.get_as::<&str>("user.name"), Some("Alice"));
    assert_eq!(back.get_as::<&str>("user.tags.0"), Some("a"));
    assert!(back.get("user.tags").unwrap().as_map().unwrap().is_list());
}

#[test]
fn test_scalar_kinds_round_trip() {
    let mut map = SeqMap::new();
    map.set("null", Value::Null);
    map.set("flag", true);
    map.set("int", -7);
    map.set("float", 1.25);
    map.set("text", "hi");

    let back = SeqMap::from_json(&map.to_json().unwrap()).unwrap();
    assert_eq!(back, map);
}

#[test]
fn test_from_deserialized_json_value() {
    let json: serde_json::Value =
        serde_json::from_str(r#"{"items":[{"id":1},{"id":2}]}"#).unwrap();
    let map = SeqMap::from(json);

    let ids = map
        .get("items")
        .and_then(Value::as_map)
        .map(|items| items.column("id"))
        .unwrap();
    assert_eq!(ids.sum(), Value::Int(3));
}

#[test]
fn test_into_json_value() {
    let mut map = SeqMap::new();
    map.set("a", 1);
    map.set("list", SeqMap::from_values([1, 2]));

    let json = serde_json::Value::from(&map);
    assert!(json.is_object());
    // A nested list view surfaces as a JSON array
    assert!(json["list"].is_array());
    assert_eq!(json["list"][1], serde_json::json!(2));
}
