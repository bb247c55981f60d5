use std::collections::HashMap;
use tracert_model::{HopKey, HopMap, TopoRecord};

/// A record that knows which hop it was observed at.
pub trait HopRecord {
    fn hop_key(&self) -> HopKey;
}

impl HopRecord for TopoRecord {
    fn hop_key(&self) -> HopKey {
        self.ttl
    }
}

/// Appends `record` to the bucket of its ttl, creating the bucket on first use.
pub fn push_hop<R: HopRecord>(map: &mut HopMap<R>, record: R) {
    map.entry(record.hop_key()).or_default().push(record);
}

/// Groups records by ttl, keeping arrival order inside each bucket.
pub fn aggregate_hops<I, R>(records: I) -> HopMap<R>
where
    I: IntoIterator<Item = R>,
    R: HopRecord,
{
    let mut map: HopMap<R> = HashMap::new();
    for record in records {
        push_hop(&mut map, record);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topo(ttl: HopKey, name: &str) -> TopoRecord {
        TopoRecord {
            ttl,
            name: name.to_string(),
            ..TopoRecord::default()
        }
    }

    #[test]
    fn buckets_keep_arrival_order() {
        let map = aggregate_hops(vec![
            topo(2, "wh-01"),
            topo(1, "wh-01"),
            topo(2, "sh-02"),
            topo(2, "bj-03"),
        ]);

        assert_eq!(map.len(), 2);
        let names: Vec<&str> = map[&2].iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["wh-01", "sh-02", "bj-03"]);
        assert!(map.values().all(|bucket| !bucket.is_empty()));
    }
}
