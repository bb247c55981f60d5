//! Hop aggregation, key ordering and flattening.

pub mod aggregate;
pub mod error;
pub mod flatten;
pub mod order;

pub use aggregate::{aggregate_hops, push_hop, HopRecord};
pub use error::{FlattenError, HopsError, OrderError};
pub use flatten::{flatten, flatten_owned, hop_sequence};
pub use order::{order_keys, ordered_keys, NumericKey, NumericValue};
