pub mod captcha;
pub mod catchers;
pub mod config;
pub mod error;
pub mod ledger;
pub mod routes;
pub mod store;

pub use shared::{Catalog, ClientInfo, Tally, VoteRequest, VoteTally, VoterState};

use std::path::Path;

use rocket::figment::Provider;
use rocket::fs::FileServer;
use rocket::{catchers, routes, Build, Rocket};

use crate::catchers::{bad_request, internal_error, not_found};
use crate::routes::{cast_vote, delete_votes, get_votes, patch_votes, put_votes, AppState};

/// Assembles the server: the vote API under `/api` and static files for everything else.
pub fn build_rocket<P: Provider>(figment: P, state: AppState, static_dir: &Path) -> Rocket<Build> {
    rocket::custom(figment)
        .manage(state)
        .mount(
            "/api",
            routes![get_votes, cast_vote, put_votes, patch_votes, delete_votes],
        )
        .mount("/", FileServer::from(static_dir))
        .register("/", catchers![bad_request, not_found, internal_error])
}
