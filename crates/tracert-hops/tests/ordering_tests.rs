use std::collections::HashMap;
use tracert_hops::{
    aggregate_hops, flatten, hop_sequence, order_keys, ordered_keys, FlattenError, OrderError,
};
use tracert_model::{TopoRecord, TracertResponse};

fn sample_map() -> HashMap<u32, Vec<&'static str>> {
    HashMap::from([(3, vec!["a"]), (1, vec!["b", "c"]), (10, vec!["d"])])
}

#[test]
fn numeric_order_then_flatten() {
    let map = sample_map();
    let keys = ordered_keys(&map, false).unwrap();
    assert_eq!(keys, vec![1, 3, 10]);

    let records: Vec<&str> = flatten(&map, &keys).unwrap().into_iter().copied().collect();
    assert_eq!(records, vec!["b", "c", "a", "d"]);
}

#[test]
fn string_keys_from_json_sort_numerically() {
    let map: HashMap<String, Vec<String>> =
        serde_json::from_str(r#"{"3":["a"],"1":["b","c"],"10":["d"]}"#).unwrap();

    let keys = ordered_keys(&map, false).unwrap();
    assert_eq!(keys, vec!["1", "3", "10"]);

    let records: Vec<&String> = flatten(&map, &keys).unwrap();
    assert_eq!(records, vec!["b", "c", "a", "d"]);
}

#[test]
fn ordering_contains_every_key_once() {
    let keys = vec![42_u32, 7, 19, 1, 255, 64, 2];

    let asc = order_keys(keys.iter().copied(), false).unwrap();
    let desc = order_keys(keys.iter().copied(), true).unwrap();

    let mut expected = keys.clone();
    expected.sort_unstable();
    assert_eq!(asc, expected);

    expected.reverse();
    assert_eq!(desc, expected);
}

#[test]
fn flatten_length_is_sum_of_buckets() {
    let map: HashMap<u32, Vec<u32>> = (1..=12)
        .map(|ttl| (ttl * 3, (0..ttl).collect()))
        .collect();

    let keys = ordered_keys(&map, true).unwrap();
    let records = flatten(&map, &keys).unwrap();
    let expected: usize = keys.iter().map(|key| map[key].len()).sum();
    assert_eq!(records.len(), expected);
}

#[test]
fn flatten_places_earlier_buckets_first() {
    let map = HashMap::from([
        (5_u32, vec!["e1", "e2", "e3"]),
        (2, vec!["b1", "b2"]),
        (9, vec!["i1"]),
    ]);
    let keys = [9_u32, 2, 5];

    let records: Vec<&str> = flatten(&map, &keys).unwrap().into_iter().copied().collect();
    let last_b = records.iter().rposition(|r| r.starts_with('b')).unwrap();
    let first_e = records.iter().position(|r| r.starts_with('e')).unwrap();
    assert!(last_b < first_e);
    assert_eq!(records[0], "i1");
}

#[test]
fn absent_key_fails_flatten() {
    let map = sample_map();
    assert_eq!(
        flatten(&map, &[1_u32, 4]).unwrap_err(),
        FlattenError::MissingKey {
            key: "4".to_string()
        }
    );
}

#[test]
fn non_numeric_key_fails_ordering() {
    let map: HashMap<String, Vec<u8>> = HashMap::from([
        ("1".to_string(), vec![1]),
        ("hop".to_string(), vec![2]),
    ]);
    assert_eq!(
        ordered_keys(&map, false).unwrap_err(),
        OrderError::InvalidKeyKind {
            key: "hop".to_string()
        }
    );
}

#[test]
fn tracert_result_flattens_hop_by_hop() {
    let text = include_str!("fixtures/tracert_result_1.json");
    let response: TracertResponse = serde_json::from_str(text).unwrap();
    let hops = response.data.unwrap();

    let sequence = hop_sequence(&hops, false).unwrap();
    let ids: Vec<i64> = sequence.iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![1, 2, 4, 7, 9]);

    let reversed = hop_sequence(&hops, true).unwrap();
    let ttls: Vec<u32> = reversed.iter().map(|record| record.ttl).collect();
    assert_eq!(ttls, vec![10, 3, 2, 1, 1]);
    assert_eq!(reversed[3].res_addr, "192.168.1.1");
}

#[test]
fn aggregated_records_round_trip_through_sequence() {
    let records: Vec<TopoRecord> = [(4, "x"), (1, "y"), (4, "z"), (2, "w")]
        .into_iter()
        .map(|(ttl, name)| TopoRecord {
            ttl,
            name: name.to_string(),
            ..TopoRecord::default()
        })
        .collect();

    let map = aggregate_hops(records);
    let names: Vec<&str> = hop_sequence(&map, false)
        .unwrap()
        .into_iter()
        .map(|record| record.name.as_str())
        .collect();
    assert_eq!(names, vec!["y", "w", "x", "z"]);
}
