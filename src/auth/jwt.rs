use crate::types::{AppError, Claims, Result, TokenResponse};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Authentication service for bearer-token management and password hashing.
///
/// Provides secure password hashing using Argon2id and token
/// generation/verification using HS256.
pub struct AuthService {
    jwt_secret: String,
    token_expiry: i64,
}

impl AuthService {
    /// Creates a new AuthService with the given configuration.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for signing tokens (should be at least 32 chars)
    /// * `token_expiry` - Token validity in seconds
    pub fn new(jwt_secret: String, token_expiry: i64) -> Self {
        Self {
            jwt_secret,
            token_expiry,
        }
    }

    /// Hashes a password using Argon2id with a fresh random salt.
    ///
    /// Returns a PHC-formatted hash string.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Storage(format!("Failed to hash password: {}", e)))
    }

    /// Verifies a password against an Argon2 hash.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Storage(format!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Issues a signed token carrying `username` as the identity claim.
    pub fn issue_token(&self, username: &str) -> Result<TokenResponse> {
        let claims = Claims {
            sub: username.to_string(),
            exp: (Utc::now() + Duration::seconds(self.token_expiry)).timestamp() as usize,
            iat: Utc::now().timestamp() as usize,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Storage(format!("Failed to sign token: {}", e)))?;

        Ok(TokenResponse {
            token,
            expires_in: self.token_expiry,
        })
    }

    /// Verifies a token and returns its claims.
    ///
    /// Malformed, signature-invalid, and expired tokens all fail with
    /// `Forbidden`.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| AppError::Forbidden(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> AuthService {
        AuthService::new(
            "test-secret-key-that-is-at-least-32-chars".to_string(),
            3600, // 1 hour
        )
    }

    #[test]
    fn test_password_hashing() {
        let service = create_test_service();
        let password = "test_password_123";

        let hash = service
            .hash_password(password)
            .expect("should hash password");

        // Hash should not equal the original password
        assert_ne!(hash, password);

        // Hash should be in PHC format (starts with $argon2)
        assert!(hash.starts_with("$argon2"), "hash should be in PHC format");
    }

    #[test]
    fn test_password_verification_success() {
        let service = create_test_service();
        let password = "secure_password_456";

        let hash = service
            .hash_password(password)
            .expect("should hash password");
        let is_valid = service
            .verify_password(password, &hash)
            .expect("should verify");

        assert!(is_valid, "correct password should verify successfully");
    }

    #[test]
    fn test_password_verification_failure() {
        let service = create_test_service();
        let password = "correct_password";
        let wrong_password = "wrong_password";

        let hash = service
            .hash_password(password)
            .expect("should hash password");
        let is_valid = service
            .verify_password(wrong_password, &hash)
            .expect("should verify");

        assert!(!is_valid, "wrong password should fail verification");
    }

    #[test]
    fn test_token_issue() {
        let service = create_test_service();

        let issued = service.issue_token("alice").expect("should issue token");

        assert!(!issued.token.is_empty(), "token should not be empty");
        assert_eq!(
            issued.expires_in, 3600,
            "expires_in should match configured expiry"
        );
    }

    #[test]
    fn test_token_verification_success() {
        let service = create_test_service();

        let issued = service.issue_token("bob").expect("should issue token");
        let claims = service
            .verify_token(&issued.token)
            .expect("should verify token");

        assert_eq!(claims.sub, "bob", "subject should match username");
    }

    #[test]
    fn test_token_verification_invalid_token() {
        let service = create_test_service();

        let result = service.verify_token("invalid.token.here");

        assert!(result.is_err(), "invalid token should fail verification");
    }

    #[test]
    fn test_token_verification_wrong_secret() {
        let service1 = AuthService::new("secret-one-that-is-32-chars-long".to_string(), 3600);
        let service2 = AuthService::new("secret-two-that-is-32-chars-long".to_string(), 3600);

        let issued = service1.issue_token("carol").expect("should issue");
        let result = service2.verify_token(&issued.token);

        assert!(result.is_err(), "token from different secret should fail");
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative expiry puts exp in the past, beyond the default 60s leeway.
        let service =
            AuthService::new("test-secret-key-that-is-at-least-32-chars".to_string(), -300);

        let issued = service.issue_token("dave").expect("should issue");
        let result = service.verify_token(&issued.token);

        assert!(result.is_err(), "expired token should fail verification");
        assert!(
            matches!(result, Err(AppError::Forbidden(_))),
            "expiry should map to Forbidden"
        );
    }

    #[test]
    fn test_claims_expiration() {
        let service = create_test_service();
        let issued = service.issue_token("erin").expect("should issue");
        let claims = service.verify_token(&issued.token).expect("should verify");

        let now = chrono::Utc::now().timestamp() as usize;

        // iat should be around now
        assert!(
            claims.iat <= now && claims.iat >= now - 5,
            "iat should be current timestamp"
        );

        // exp should be iat + token_expiry (3600 seconds)
        let expected_exp = claims.iat + 3600;
        assert!(
            claims.exp >= expected_exp - 5 && claims.exp <= expected_exp + 5,
            "exp should be iat + 3600 seconds"
        );
    }
}
