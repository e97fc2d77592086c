/**
 * Token Service
 *
 * Issues and verifies signed, time-limited identity tokens (HS256 JWT).
 *
 * A token carries exactly three claims: the subject id, the issue time and
 * the absolute expiry. Tokens are stateless: nothing is persisted, there is
 * no refresh and no revocation list, so a token stays valid until its own
 * expiry.
 *
 * The signing secret is injected through [`TokenService::new`]; nothing here
 * reads the environment.
 */

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, get_current_timestamp, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Why a token was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenRejected {
    #[error("bad signature")]
    BadSignature,
    #[error("expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// Why a token could not be issued
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("token expiry overflows the clock")]
    ExpiryOverflow,
    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Signs and verifies identity tokens with a server-held secret
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl TokenService {
    /// Create a token service
    ///
    /// # Arguments
    /// * `secret` - HMAC secret shared by issue and verify
    /// * `ttl_secs` - lifetime of issued tokens in seconds
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }

    /// Issue a token for `subject`, valid from now for the configured TTL
    pub fn issue(&self, subject: Uuid) -> Result<String, IssueError> {
        self.issue_at(subject, get_current_timestamp())
    }

    /// Issue a token as if it had been signed at `issued_at` (Unix seconds)
    pub fn issue_at(&self, subject: Uuid, issued_at: u64) -> Result<String, IssueError> {
        let exp = issued_at
            .checked_add(self.ttl_secs)
            .ok_or(IssueError::ExpiryOverflow)?;
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at,
            exp,
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify a token and return its subject
    ///
    /// # Errors
    ///
    /// * `BadSignature` - signed with another secret or tampered with
    /// * `Expired` - the expiry is in the past
    /// * `Malformed` - anything else (not a JWT, bad claims, subject not a UUID)
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenRejected> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => TokenRejected::BadSignature,
            ErrorKind::ExpiredSignature => TokenRejected::Expired,
            _ => TokenRejected::Malformed,
        })?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| TokenRejected::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 3600)
    }

    #[test]
    fn test_issue_then_verify() {
        let user_id = Uuid::new_v4();
        let token = service().issue(user_id).unwrap();
        assert!(!token.is_empty());
        assert_eq!(service().verify(&token), Ok(user_id));
    }

    #[test]
    fn test_claims_carry_expiry() {
        let token = service().issue_at(Uuid::new_v4(), 1_000).unwrap();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        let claims = decode::<Claims>(&token, &DecodingKey::from_secret(b"test-secret"), &validation)
            .unwrap()
            .claims;

        assert_eq!(claims.iat, 1_000);
        assert_eq!(claims.exp, 4_600);
    }

    #[test]
    fn test_expired_token() {
        let issued = get_current_timestamp() - 7200;
        let token = service().issue_at(Uuid::new_v4(), issued).unwrap();
        assert_eq!(service().verify(&token), Err(TokenRejected::Expired));
    }

    #[test]
    fn test_foreign_secret() {
        let token = TokenService::new("other-secret", 3600).issue(Uuid::new_v4()).unwrap();
        assert_eq!(service().verify(&token), Err(TokenRejected::BadSignature));
    }

    #[test]
    fn test_expiry_overflow_is_an_error() {
        let service = TokenService::new("test-secret", u64::MAX);
        assert!(matches!(service.issue(Uuid::new_v4()), Err(IssueError::ExpiryOverflow)));
    }

    #[test]
    fn test_verify_invalid_token() {
        assert_eq!(service().verify("invalid.token.here"), Err(TokenRejected::Malformed));
        assert_eq!(service().verify(""), Err(TokenRejected::Malformed));
    }

    #[test]
    fn test_subject_must_be_uuid() {
        let claims = Claims {
            sub: "not-a-uuid".into(),
            iat: get_current_timestamp(),
            exp: get_current_timestamp() + 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert_eq!(service().verify(&token), Err(TokenRejected::Malformed));
    }
}
