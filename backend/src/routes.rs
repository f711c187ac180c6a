use rocket::http::{Cookie, CookieJar, SameSite};
use rocket::serde::json::{self, Json};
use rocket::{delete, get, patch, post, put, State};
use shared::{ClientInfo, VoteRequest, VoteTally, VoterState, VOTED_COOKIE, VOTED_MAX_AGE_DAYS, VOTED_VALUE};
use tracing::{debug, instrument, Span};

use crate::captcha::TokenVerifier;
use crate::error::ApiError;
use crate::ledger::VoteLedger;

pub struct AppState {
    pub ledger: VoteLedger,
    pub verifier: Box<dyn TokenVerifier>,
}

impl AppState {
    pub fn new(ledger: VoteLedger, verifier: impl TokenVerifier + 'static) -> Self {
        Self {
            ledger,
            verifier: Box::new(verifier),
        }
    }
}

fn voted_cookie() -> Cookie<'static> {
    Cookie::build((VOTED_COOKIE, VOTED_VALUE))
        .path("/")
        .max_age(time::Duration::days(VOTED_MAX_AGE_DAYS))
        .http_only(false)
        .same_site(SameSite::Lax)
        .build()
}

#[get("/votes")]
pub fn get_votes(state: &State<AppState>) -> Json<VoteTally> {
    Json(state.ledger.tallies())
}

#[instrument(skip(state, cookies, client, request), fields(editor))]
#[post("/votes", data = "<request>")]
pub async fn cast_vote(
    state: &State<AppState>,
    cookies: &CookieJar<'_>,
    client: ClientInfo,
    request: Result<Json<VoteRequest>, json::Error<'_>>,
) -> Result<Json<VoteTally>, ApiError> {
    let marker = cookies.get(VOTED_COOKIE).map(|cookie| cookie.value());
    if VoterState::from_marker(marker).has_voted() {
        debug!("Rejecting vote from client that already voted");
        return Err(ApiError::AlreadyVoted);
    }

    let request = request
        .map_err(|e| {
            debug!("Rejecting malformed vote payload: {}", e);
            ApiError::InvalidRequest
        })?
        .into_inner();
    Span::current().record("editor", request.editor.as_str());

    if !state.verifier.verify(&request.turnstile, client.remote_ip()).await {
        return Err(ApiError::InvalidToken);
    }

    let tally = state.ledger.record(&request.editor)?;

    cookies.add(voted_cookie());
    Ok(Json(tally))
}

#[put("/votes")]
pub fn put_votes() -> ApiError {
    ApiError::MethodNotAllowed
}

#[patch("/votes")]
pub fn patch_votes() -> ApiError {
    ApiError::MethodNotAllowed
}

#[delete("/votes")]
pub fn delete_votes() -> ApiError {
    ApiError::MethodNotAllowed
}
