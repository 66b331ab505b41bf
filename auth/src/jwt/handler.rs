use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// JWT token handler for encoding and decoding access tokens.
///
/// Uses HS256 (HMAC with SHA-256) under a symmetric secret shared by the
/// issuing and validating sides. Validation is self-contained: nothing beyond
/// the secret and the token itself is consulted.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode
    ///
    /// # Returns
    /// Compact JWT string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a signed token.
    ///
    /// # Arguments
    /// * `token` - Compact JWT string to validate
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed
    /// * `InvalidSignature` - Signature does not match the payload
    /// * `Expired` - Token expiration time has passed
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::new(self.algorithm);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::Malformed,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> JwtHandler {
        JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!")
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = handler();
        let claims = Claims::new("user123", "alice@example.com", 24);

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let handler = handler();

        let result = handler.decode("not.a.token");
        assert_eq!(result, Err(JwtError::Malformed));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let issuing = handler();
        let validating = JwtHandler::new(b"different_secret_32_bytes_long_key!!");

        let claims = Claims::new("user123", "alice@example.com", 24);
        let token = issuing.encode(&claims).expect("Failed to encode token");

        let result = validating.decode(&token);
        assert_eq!(result, Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = handler();

        // Expired two hours ago, well past any validation leeway
        let mut claims = Claims::new("user123", "alice@example.com", 24);
        claims.exp = claims.iat - 7200;

        let token = handler.encode(&claims).expect("Failed to encode token");
        let result = handler.decode(&token);
        assert_eq!(result, Err(JwtError::Expired));
    }

    #[test]
    fn test_tampered_payload_never_validates() {
        let handler = handler();
        let claims = Claims::new("user123", "alice@example.com", 24);
        let token = handler.encode(&claims).expect("Failed to encode token");

        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);

        // Flip one character of the payload segment
        let mut payload: Vec<u8> = parts[1].bytes().collect();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        let tampered = format!(
            "{}.{}.{}",
            parts[0],
            String::from_utf8(payload).unwrap(),
            parts[2]
        );

        let result = handler.decode(&tampered);
        assert!(matches!(
            result,
            Err(JwtError::InvalidSignature) | Err(JwtError::Malformed)
        ));
    }

    #[test]
    fn test_two_tokens_for_same_subject_both_validate() {
        let handler = handler();

        let first_claims = Claims::new("user123", "alice@example.com", 24);
        let mut second_claims = first_claims.clone();
        second_claims.iat += 1;
        second_claims.exp += 1;

        let first = handler.encode(&first_claims).expect("Failed to encode");
        let second = handler.encode(&second_claims).expect("Failed to encode");

        assert_ne!(first, second);
        assert!(handler.decode(&first).is_ok());
        assert!(handler.decode(&second).is_ok());
    }
}
