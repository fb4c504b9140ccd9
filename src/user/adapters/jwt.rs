//! HS256 JSON Web Token adapter for the token provider port.

use crate::user::{
    domain::UserId,
    ports::{TokenProvider, TokenProviderError},
};
use async_trait::async_trait;
use chrono::Duration;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Registered claims carried by issued tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the user identifier.
    pub sub: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at time in Unix seconds.
    pub iat: i64,
    /// Expiry time in Unix seconds.
    pub exp: i64,
}

/// Signs and validates access tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct JwtTokenProvider<C>
where
    C: Clock + Send + Sync,
{
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
    issuer: String,
    clock: Arc<C>,
}

impl<C> JwtTokenProvider<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a provider signing with `secret`, issuing tokens valid for
    /// `ttl`.
    #[must_use]
    pub fn new(secret: &[u8], ttl: Duration, issuer: impl Into<String>, clock: Arc<C>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
            issuer: issuer.into(),
            clock,
        }
    }

    /// Returns the issuer placed in the `iss` claim.
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Validates a token and returns the user it was issued to.
    ///
    /// Expiry is checked against the provider clock rather than the system
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`TokenProviderError::Invalid`] for malformed or badly signed
    /// tokens, [`TokenProviderError::WrongIssuer`],
    /// [`TokenProviderError::Expired`], or
    /// [`TokenProviderError::InvalidSubject`] when the subject is not a user
    /// identifier.
    pub fn validate(&self, token: &str) -> Result<UserId, TokenProviderError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.set_issuer(&[self.issuer.as_str()]);

        let data =
            decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|err| {
                match err.kind() {
                    ErrorKind::InvalidIssuer => TokenProviderError::WrongIssuer,
                    _ => TokenProviderError::Invalid(err.to_string()),
                }
            })?;
        let claims = data.claims;

        if claims.exp <= self.clock.utc().timestamp() {
            return Err(TokenProviderError::Expired);
        }
        if claims.sub.is_empty() {
            return Err(TokenProviderError::InvalidSubject(claims.sub));
        }
        UserId::parse(&claims.sub).map_err(|_| TokenProviderError::InvalidSubject(claims.sub))
    }

    fn claims_for(&self, user_id: UserId) -> AccessClaims {
        let issued_at = self.clock.utc();
        AccessClaims {
            sub: user_id.to_string(),
            iss: self.issuer.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        }
    }
}

impl<C> fmt::Debug for JwtTokenProvider<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenProvider")
            .field("ttl", &self.ttl)
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<C> TokenProvider for JwtTokenProvider<C>
where
    C: Clock + Send + Sync,
{
    async fn generate(&self, user_id: UserId) -> Result<String, TokenProviderError> {
        let claims = self.claims_for(user_id);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|err| TokenProviderError::Signing(err.to_string()))
    }
}
