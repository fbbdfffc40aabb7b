//! Reordering operations: reverse, natural and comparator sorts, and the
//! lexicographic multi-field sort.

use seqmap::{SeqMap, SortOrder, Value, path};

#[test]
fn test_reverse_keeps_key_pairings() {
    let map = SeqMap::from_values([2, 3, 4, 1]);
    let reversed = map.reverse();

    assert_eq!(
        reversed.to_vec(),
        [Value::Int(1), Value::Int(4), Value::Int(3), Value::Int(2)]
    );
    // Keys travel with their values instead of being re-indexed
    assert_eq!(reversed.get_as::<i64>(3u64), Some(1));
    assert_eq!(reversed.get_as::<i64>(0u64), Some(2));
}

#[test]
fn test_reverse_round_trip() {
    let map: SeqMap = [("b", 1), ("a", 2), ("c", 3)].into_iter().collect();
    assert_eq!(map.reverse().reverse(), map);
}

#[test]
fn test_sort_natural() {
    let sorted = SeqMap::from_values([1, 3, 2]).sort();
    assert!(sorted.is_list());
    assert_eq!(sorted.to_vec(), [Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_sort_discards_keys() {
    let map: SeqMap = [("z", 3), ("y", 1), ("x", 2)].into_iter().collect();
    let sorted = map.sort();

    assert!(sorted.is_list());
    assert_eq!(sorted.to_vec(), [Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_sort_mixed_numbers() {
    let map = SeqMap::from_values([Value::Float(2.5), Value::Int(2), Value::Int(3)]);
    let sorted = map.sort();
    assert_eq!(
        sorted.to_vec(),
        [Value::Int(2), Value::Float(2.5), Value::Int(3)]
    );
}

#[test]
fn test_sort_by_comparator() {
    let mut rows = SeqMap::new();
    rows.set(path!(0, "a"), 2);
    rows.set(path!(1, "a"), 1);
    rows.set(path!(2, "a"), 3);

    let sorted = rows.sort_by(|left, right| {
        let field = |v: &Value| {
            v.as_map()
                .and_then(|m| m.get_as::<i64>("a"))
                .unwrap_or_default()
        };
        field(left).cmp(&field(right))
    });

    assert_eq!(sorted.get_as::<i64>(path!(0, "a")), Some(1));
    assert_eq!(sorted.get_as::<i64>(path!(2, "a")), Some(3));
}

#[test]
fn test_sort_by_is_stable() {
    let map = SeqMap::from_values(["bb", "a", "cc", "d"]);
    // Sorting by length only: equal-length entries keep their relative order
    let sorted = map.sort_by(|left, right| {
        left.as_text_or_empty()
            .len()
            .cmp(&right.as_text_or_empty().len())
    });

    assert_eq!(
        sorted.to_vec(),
        [
            Value::Text("a".into()),
            Value::Text("d".into()),
            Value::Text("bb".into()),
            Value::Text("cc".into())
        ]
    );
}

#[test]
fn test_sort_by_fields_cascades() {
    let mut rows = SeqMap::new();
    rows.set(path!(0, "a"), 2).set(path!(0, "b"), 3).set(path!(0, "c"), 3);
    rows.set(path!(1, "a"), 1).set(path!(1, "b"), 2).set(path!(1, "c"), 2);
    rows.set(path!(2, "a"), 1).set(path!(2, "b"), 3).set(path!(2, "c"), 1);

    let sorted = rows.sort_by_fields([
        ("a", SortOrder::Asc),
        ("b", SortOrder::Desc),
        ("c", SortOrder::Asc),
    ]);

    let column_c: Vec<i64> = sorted
        .values()
        .map(|row| row.as_map().unwrap().get_as::<i64>("c").unwrap())
        .collect();
    assert_eq!(column_c, [1, 2, 3]);

    let column_a: Vec<i64> = sorted
        .values()
        .map(|row| row.as_map().unwrap().get_as::<i64>("a").unwrap())
        .collect();
    assert_eq!(column_a, [1, 1, 2]);
}

#[test]
fn test_sort_by_fields_missing_treated_as_zero() {
    let mut rows = SeqMap::new();
    rows.set(path!(0, "a"), 5);
    rows.set(path!(1, "b"), 1); // no "a" field
    rows.set(path!(2, "a"), -3);

    let sorted = rows.sort_by_fields([("a", SortOrder::Asc)]);

    // -3 < missing (0) < 5
    assert_eq!(sorted.get_as::<i64>(path!(0, "a")), Some(-3));
    assert_eq!(sorted.get_as::<i64>(path!(1, "b")), Some(1));
    assert_eq!(sorted.get_as::<i64>(path!(2, "a")), Some(5));
}

#[test]
fn test_min_max() {
    let map = SeqMap::from_values([2, 3, 4, 1]);
    assert_eq!(map.min(), Some(&Value::Int(1)));
    assert_eq!(map.max(), Some(&Value::Int(4)));

    assert_eq!(SeqMap::new().min(), None);
    assert_eq!(SeqMap::new().max(), None);
}

#[test]
fn test_min_max_mixed_kinds() {
    let map = SeqMap::from_values([
        Value::Text("z".into()),
        Value::Int(99),
        Value::Null,
        Value::Bool(true),
    ]);
    // Natural order ranks kinds: null < bool < numbers < text
    assert_eq!(map.min(), Some(&Value::Null));
    assert_eq!(map.max(), Some(&Value::Text("z".into())));
}
