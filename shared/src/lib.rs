pub mod catalog;
pub mod client_info;
pub mod error;
pub mod marker;
pub mod models;
pub mod tally;

pub use catalog::{Catalog, EDITORS};
pub use client_info::ClientInfo;
pub use error::{Result, VotingError};
pub use marker::{VoterState, VOTED_COOKIE, VOTED_MAX_AGE_DAYS, VOTED_VALUE};
pub use models::*;
pub use tally::Tally;

#[cfg(test)]
mod tests;
