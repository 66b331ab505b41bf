use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an access token.
///
/// Built fresh at every login and never stored server-side; possession of a
/// validly signed encoding is the only state that matters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email address of the subject
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user with expiration attached at issuance.
    ///
    /// # Arguments
    /// * `subject` - Unique user identifier
    /// * `email` - Email address of the user
    /// * `ttl_hours` - Hours until the token expires
    ///
    /// # Returns
    /// Claims with sub, email, iat, and exp set
    pub fn new(subject: impl ToString, email: impl Into<String>, ttl_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(ttl_hours);

        Self {
            sub: subject.to_string(),
            email: email.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the claims are expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new("user123", "alice@example.com", 24);

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let mut claims = Claims::new("user123", "alice@example.com", 24);
        claims.exp = 1000;

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
