use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk form of the tallies: option name to count.
pub type Snapshot = BTreeMap<String, u64>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteRequest {
    #[serde(default)]
    pub editor: String,
    #[serde(default)]
    pub turnstile: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteTally {
    pub editors: Vec<String>,
    pub votes: Vec<u64>,
    pub total: u64,
}
