/// Network identity of the caller, as passed on to the verification service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip: Option<String>,
}

impl ClientInfo {
    pub fn remote_ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }
}

#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for ClientInfo {
        type Error = ();

        /// Uses Rocket's configured `ip_header` (default `X-Real-IP`), then the peer
        /// address. Other forwarding headers are caller-controlled and ignored.
        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            Outcome::Success(ClientInfo {
                ip: req.client_ip().map(|ip| ip.to_string()),
            })
        }
    }
}
