//! Core registro types.
//!
//! These types enforce invariants at construction time, ensuring invalid
//! states are unrepresentable.

mod gateway_url;
mod record_id;

pub use gateway_url::GatewayUrl;
pub use record_id::RecordId;
