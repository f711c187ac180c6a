use rocket::{catch, Request};

#[catch(400)]
pub fn bad_request(_req: &Request) -> &'static str {
    "bad request"
}

#[catch(404)]
pub fn not_found(req: &Request) -> &'static str {
    match req.uri().path().segments().next() {
        Some("api") => "unknown api route",
        _ => "404 page not found",
    }
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> &'static str {
    "internal server error"
}
