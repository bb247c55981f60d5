use crate::error::{FlattenError, HopsError};
use crate::order::{order_keys, NumericKey};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Concatenates the buckets of `map` in the order given by `keys`.
///
/// Records keep their bucket order, so every record of an earlier key lands
/// before every record of a later one. A key missing from `map` is an error.
pub fn flatten<'a, 'k, K, Q, R, I>(
    map: &'a HashMap<K, Vec<R>>,
    keys: I,
) -> Result<Vec<&'a R>, FlattenError>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + Display + ?Sized + 'k,
    I: IntoIterator<Item = &'k Q>,
{
    let mut records = Vec::new();
    for key in keys {
        let bucket = map.get(key).ok_or_else(|| FlattenError::MissingKey {
            key: key.to_string(),
        })?;
        records.extend(bucket.iter());
    }
    Ok(records)
}

/// Same as [`flatten`] but clones the records out of the map.
pub fn flatten_owned<'k, K, Q, R, I>(
    map: &HashMap<K, Vec<R>>,
    keys: I,
) -> Result<Vec<R>, FlattenError>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + Display + ?Sized + 'k,
    I: IntoIterator<Item = &'k Q>,
    R: Clone,
{
    Ok(flatten(map, keys)?.into_iter().cloned().collect())
}

/// Orders the map's own keys and flattens it: the hop-by-hop view of a trace.
pub fn hop_sequence<K, R>(map: &HashMap<K, Vec<R>>, desc: bool) -> Result<Vec<&R>, HopsError>
where
    K: NumericKey + Hash + Eq,
{
    let keys = order_keys(map.keys(), desc)?;
    let records = flatten(map, keys)?;
    tracing::debug!(
        buckets = map.len(),
        records = records.len(),
        desc,
        "flattened hop map"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_caller_key_order() {
        let map = HashMap::from([(1_u32, vec!["b", "c"]), (3, vec!["a"]), (10, vec!["d"])]);
        let out = flatten(&map, &[10_u32, 1, 3]).unwrap();
        assert_eq!(out, vec![&"d", &"b", &"c", &"a"]);
    }

    #[test]
    fn missing_key_is_reported() {
        let map = HashMap::from([(1_u32, vec!["b"])]);
        let err = flatten(&map, &[1_u32, 2]).unwrap_err();
        assert_eq!(
            err,
            FlattenError::MissingKey {
                key: "2".to_string()
            }
        );
    }

    #[test]
    fn string_keyed_map_flattens_owned() {
        let map = HashMap::from([
            ("2".to_string(), vec![20]),
            ("1".to_string(), vec![10, 11]),
        ]);
        let out = flatten_owned(&map, &["1".to_string(), "2".to_string()]).unwrap();
        assert_eq!(out, vec![10, 11, 20]);
    }

    #[test]
    fn hop_sequence_orders_then_flattens() {
        let map = HashMap::from([
            ("10".to_string(), vec!["d"]),
            ("2".to_string(), vec!["b", "c"]),
            ("1".to_string(), vec!["a"]),
        ]);
        let asc: Vec<&str> = hop_sequence(&map, false).unwrap().into_iter().copied().collect();
        assert_eq!(asc, vec!["a", "b", "c", "d"]);

        let desc: Vec<&str> = hop_sequence(&map, true).unwrap().into_iter().copied().collect();
        assert_eq!(desc, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn hop_sequence_rejects_non_numeric_keys() {
        let map = HashMap::from([("x".to_string(), vec![1])]);
        assert!(matches!(
            hop_sequence(&map, false),
            Err(HopsError::Order(_))
        ));
    }
}
