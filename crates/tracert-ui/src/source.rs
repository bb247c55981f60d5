use crate::error::SourceError;
use tracert_model::NodesResponse;

/// Where the group selector gets the list of known groups from.
#[allow(async_fn_in_trait)]
pub trait NodeSource {
    async fn fetch_nodes(&self) -> Result<NodesResponse, SourceError>;
}

/// Decodes a `/api/nodes` body. A `data` field that is not a list of
/// strings is a decode error; a `null` body or a `null` or missing `data`
/// is "no groups".
pub fn decode_nodes(text: &str) -> Result<NodesResponse, SourceError> {
    serde_json::from_str::<Option<NodesResponse>>(text)
        .map(Option::unwrap_or_default)
        .map_err(|err| SourceError::Decode(err.to_string()))
}
