use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

pub const SITEVERIFY_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";
pub const VERIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Decides whether a challenge token came from a human.
#[rocket::async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str, remote_ip: Option<&str>) -> bool;
}

#[derive(Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Turnstile siteverify client. Fails closed: no secret means no vote passes.
pub struct CaptchaVerifier {
    secret: Option<String>,
    endpoint: String,
    client: Client,
}

impl CaptchaVerifier {
    pub fn new(secret: Option<String>) -> Result<Self, reqwest::Error> {
        Self::with_endpoint(secret, SITEVERIFY_URL)
    }

    pub fn with_endpoint(
        secret: Option<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let secret = secret.filter(|s| !s.trim().is_empty());
        if secret.is_none() {
            warn!("CaptchaVerifier created without a secret - all tokens will be rejected");
        }

        Ok(Self {
            secret,
            endpoint: endpoint.into(),
            client: Client::builder().timeout(VERIFY_TIMEOUT).build()?,
        })
    }
}

#[rocket::async_trait]
impl TokenVerifier for CaptchaVerifier {
    async fn verify(&self, token: &str, remote_ip: Option<&str>) -> bool {
        let Some(secret) = &self.secret else {
            warn!("Captcha verification refused - TURNSTILE_SECRET not configured");
            return false;
        };

        if token.trim().is_empty() {
            warn!("Empty captcha token received");
            return false;
        }

        let mut form = vec![("secret", secret.as_str()), ("response", token)];
        if let Some(ip) = remote_ip.filter(|ip| !ip.is_empty()) {
            form.push(("remoteip", ip));
        }

        let response = match self.client.post(&self.endpoint).form(&form).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Turnstile verification error: {}", e);
                return false;
            }
        };

        match response.json::<SiteVerifyResponse>().await {
            Ok(result) => {
                if !result.success {
                    warn!("Turnstile verification failed: {:?}", result.error_codes);
                }
                result.success
            }
            Err(e) => {
                warn!("Undecodable Turnstile response: {}", e);
                false
            }
        }
    }
}
