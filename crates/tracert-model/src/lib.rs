//! Shared data structures for the traceroute aggregation dashboard.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Name of a set of measurement nodes sharing an origin label.
pub type Group = String;

/// Hop index (ttl) of one traceroute step.
pub type HopKey = u32;

/// Records observed at each ttl, across every reporting node.
///
/// Every present key maps to a non-empty bucket; keys need not be contiguous.
pub type HopMap<R = TopoRecord> = HashMap<HopKey, Vec<R>>;

/// Group label the aggregator reads as "every group".
pub const ALL_GROUPS: &str = "All";

/// One responding address seen by one node at one ttl.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TopoRecord {
    pub id: i64,
    pub domain: String,
    pub ttl: HopKey,
    pub dst_ip: String,
    pub res_addr: String,
    pub name: String,
    pub session: String,
    pub mean_latency: f64,
    pub recv_cnt: u64,
    pub country: String,
    pub region: String,
    pub city: String,
    pub isp: String,
    pub tracert_time: Option<DateTime<FixedOffset>>,
    pub insert_time: Option<DateTime<FixedOffset>>,
}

/// Response envelope shared by every `/api` endpoint.
///
/// A `null` or missing `data` decodes to `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: serde_json::Value,
    pub data: Option<T>,
    pub req_time: i64,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            code: 0,
            message: serde_json::Value::Null,
            data: None,
            req_time: 0,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            message: serde_json::Value::String("success".to_string()),
            data: Some(data),
            req_time: 0,
        }
    }
}

/// Payload of `GET /api/nodes`.
pub type NodesResponse = ApiResponse<Vec<Group>>;

/// Payload of `POST /api/tracert`.
pub type TracertResponse = ApiResponse<HopMap<TopoRecord>>;

/// The option currently checked in the group selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    All,
    Group(Group),
}

impl Selection {
    pub fn group(&self) -> &str {
        match self {
            Selection::All => ALL_GROUPS,
            Selection::Group(name) => name,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group())
    }
}

/// Body of the hop data request issued after a group is picked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceParams {
    pub dst: String,
    pub group: Group,
    /// For a single group: how many of its nodes to use. For `All`, a
    /// negative value asks for `|node_num|` nodes from every group.
    #[serde(rename = "node-num")]
    pub node_num: i32,
}

impl TraceParams {
    pub fn for_selection(dst: &str, selection: &Selection, node_num: i32) -> Self {
        Self {
            dst: dst.to_string(),
            group: selection.group().to_string(),
            node_num,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_response_treats_null_and_missing_data_as_none() {
        let null: NodesResponse = serde_json::from_str(r#"{"code":200,"data":null}"#).unwrap();
        assert_eq!(null.data, None);

        let missing: NodesResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.data, None);

        let listed: NodesResponse =
            serde_json::from_str(r#"{"data":["east","west"],"req_time":1700000000}"#).unwrap();
        assert_eq!(
            listed.data,
            Some(vec!["east".to_string(), "west".to_string()])
        );
        assert_eq!(listed.req_time, 1_700_000_000);
    }

    #[test]
    fn success_envelope_carries_data() {
        let response = NodesResponse::success(vec!["east".to_string()]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], 200);
        assert_eq!(json["message"], "success");
        assert_eq!(json["data"][0], "east");
    }

    #[test]
    fn nodes_response_rejects_non_list_data() {
        let parsed: Result<NodesResponse, _> = serde_json::from_str(r#"{"data":"east"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn tracert_response_accepts_string_ttl_keys() {
        let json = r#"{
            "code": 200,
            "message": "success",
            "data": {
                "10": [{"ttl": 10, "res_addr": "1.1.1.1", "mean_latency": 12.5}],
                "1": [{"ttl": 1, "res_addr": "192.168.1.1", "name": "wh-01",
                       "tracert_time": "2022-05-01T10:00:00+08:00"}]
            }
        }"#;

        let response: TracertResponse = serde_json::from_str(json).unwrap();
        let hops = response.data.unwrap();
        assert_eq!(hops.len(), 2);
        assert_eq!(hops[&10][0].res_addr, "1.1.1.1");
        assert_eq!(hops[&1][0].name, "wh-01");
        assert!(hops[&1][0].tracert_time.is_some());
        assert!(hops[&10][0].tracert_time.is_none());
    }

    #[test]
    fn trace_params_follow_selection() {
        let all = TraceParams::for_selection("1.1.1.1", &Selection::All, -2);
        assert_eq!(all.group, "All");
        assert_eq!(Selection::All.to_string(), "All");
        assert_eq!(all.node_num, -2);

        let east = TraceParams::for_selection("1.1.1.1", &Selection::Group("east".into()), 3);
        assert_eq!(east.group, "east");

        let json = serde_json::to_value(&east).unwrap();
        assert_eq!(json["node-num"], 3);
    }
}
