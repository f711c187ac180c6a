use rocket::http::Status;
use rocket::response::Responder;
use shared::VotingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("already voted")]
    AlreadyVoted,
    #[error("invalid request")]
    InvalidRequest,
    #[error("invalid turnstile token")]
    InvalidToken,
    #[error("unknown editor")]
    UnknownEditor,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::AlreadyVoted => Status::Forbidden,
            ApiError::InvalidRequest => Status::BadRequest,
            ApiError::InvalidToken => Status::Forbidden,
            ApiError::UnknownEditor => Status::BadRequest,
            ApiError::MethodNotAllowed => Status::MethodNotAllowed,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }
}

impl From<VotingError> for ApiError {
    fn from(e: VotingError) -> Self {
        match e {
            VotingError::UnknownOption(_) => ApiError::UnknownEditor,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();

        rocket::Response::build_from(self.to_string().respond_to(req)?)
            .status(status)
            .ok()
    }
}
