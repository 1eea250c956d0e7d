use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use sparestock_core::OperatorId;

use crate::claims::{OperatorClaims, TokenValidationError, validate_claims};

/// Session token lifetime: one warehouse shift.
const TOKEN_LIFETIME_HOURS: i64 = 8;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is malformed or has an invalid signature")]
    Invalid,

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// HS256 JWT codec: issues and verifies operator session tokens with a shared
/// secret.
pub struct Hs256TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Hs256TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a signed token for an operator, valid from `now` for one shift.
    pub fn issue(
        &self,
        operator_id: OperatorId,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = OperatorClaims {
            sub: operator_id,
            username: username.to_string(),
            issued_at: now,
            expires_at: now + Duration::hours(TOKEN_LIFETIME_HOURS),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| TokenError::Invalid)
    }

    /// Verify signature and claim window, returning the decoded claims.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<OperatorClaims, TokenError> {
        // The claim window is validated explicitly below against the caller's
        // clock, so the library's registered-claim checks are disabled.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<OperatorClaims>(token, &self.decoding, &validation)
            .map_err(|_| TokenError::Invalid)?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}
