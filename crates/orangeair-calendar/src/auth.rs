// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service-account authentication against the Google OAuth token endpoint.
//!
//! A short-lived RS256 assertion signed with the service account's private
//! key is exchanged for a bearer access token. The token is reused until a
//! minute before it expires; calendar data itself is never cached.

use std::time::{Duration, Instant};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use orangeair_core::OrangeairError;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;
use tracing::debug;

use crate::types::{ApiErrorResponse, AssertionClaims, ServiceAccountKey, TokenResponse};

/// Read-only calendar scope requested for every token.
pub const CALENDAR_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";

/// Lifetime of the signed assertion (the maximum Google accepts).
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Tokens are refreshed this long before their reported expiry.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

struct CachedToken {
    token: SecretString,
    expires_at: Instant,
}

/// Issues and caches access tokens for one service account.
pub struct TokenProvider {
    http: reqwest::Client,
    client_email: String,
    token_uri: String,
    key_id: Option<String>,
    encoding_key: EncodingKey,
    cached: Mutex<Option<CachedToken>>,
    last_failure: Mutex<Option<String>>,
}

impl TokenProvider {
    /// Parses the private key up front so a malformed key fails at startup.
    pub fn new(http: reqwest::Client, key: &ServiceAccountKey) -> Result<Self, OrangeairError> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.expose_secret().as_bytes())
            .map_err(|e| OrangeairError::CalendarAuth {
                message: format!("service account private key is not a valid RSA PEM: {e}"),
            })?;

        Ok(Self {
            http,
            client_email: key.client_email.clone(),
            token_uri: key.token_uri.clone(),
            key_id: key.private_key_id.clone(),
            encoding_key,
            cached: Mutex::new(None),
            last_failure: Mutex::new(None),
        })
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// Returns a valid access token, exchanging a new assertion if needed.
    pub async fn access_token(&self) -> Result<SecretString, OrangeairError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref()
            && token.expires_at > Instant::now() + EXPIRY_MARGIN
        {
            return Ok(SecretString::from(token.token.expose_secret().to_owned()));
        }

        let fresh = match self.exchange().await {
            Ok(fresh) => {
                *self.last_failure.lock().await = None;
                fresh
            }
            Err(e) => {
                *self.last_failure.lock().await = Some(e.to_string());
                return Err(e);
            }
        };
        let token = SecretString::from(fresh.token.expose_secret().to_owned());
        *cached = Some(fresh);
        Ok(token)
    }

    /// Whether a token is cached and still usable. Never contacts the network.
    #[cfg(test)]
    async fn has_valid_token(&self) -> bool {
        self.cached
            .lock()
            .await
            .as_ref()
            .is_some_and(|t| t.expires_at > Instant::now() + EXPIRY_MARGIN)
    }

    /// Error of the most recent token exchange, cleared by the next success.
    pub async fn last_failure(&self) -> Option<String> {
        self.last_failure.lock().await.clone()
    }

    fn sign_assertion(&self) -> Result<String, OrangeairError> {
        let now = chrono::Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: CALENDAR_READONLY_SCOPE,
            aud: &self.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key_id.clone();

        jsonwebtoken::encode(&header, &claims, &self.encoding_key).map_err(|e| {
            OrangeairError::CalendarAuth {
                message: format!("failed to sign service account assertion: {e}"),
            }
        })
    }

    async fn exchange(&self) -> Result<CachedToken, OrangeairError> {
        let assertion = self.sign_assertion()?;
        debug!(client_email = %self.client_email, "exchanging service account assertion");

        let response = self
            .http
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| OrangeairError::Calendar {
                message: format!("token request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message().to_string())
                .unwrap_or(body);
            return Err(OrangeairError::CalendarAuth {
                message: format!("token endpoint returned {status}: {detail}"),
            });
        }

        let token: TokenResponse =
            response
                .json()
                .await
                .map_err(|e| OrangeairError::CalendarAuth {
                    message: format!("token endpoint returned an unreadable body: {e}"),
                })?;

        debug!(expires_in = token.expires_in, "access token issued");
        Ok(CachedToken {
            token: SecretString::from(token.access_token),
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        })
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}
