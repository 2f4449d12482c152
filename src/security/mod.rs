use base64::{Engine as _, engine::general_purpose};
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng, RngCore};
use sha2::{Sha256, Digest};

const JWT_SECRET_BYTES: usize = 32;
const WS_TOKEN_LEN: usize = 32;

/// Generate a JWT signing secret: 256 bits from the OS RNG, hex-encoded (64 chars)
pub fn generate_jwt_secret() -> String {
    let mut bytes = [0u8; JWT_SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Generate a WebSocket token of 32 characters drawn from [A-Za-z0-9]
pub fn generate_ws_token() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(WS_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Hash a secret for logging, so generated values can be correlated without exposing them
pub fn fingerprint(secret: &str) -> String {
    let mut hasher = <Sha256 as Digest>::new();
    hasher.update(secret.as_bytes());
    general_purpose::STANDARD.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_jwt_secret_is_64_hex_chars() {
        let secret = generate_jwt_secret();
        assert_eq!(secret.len(), 64);
        assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hex::decode(&secret).unwrap().len(), 32);
    }

    #[test]
    fn test_jwt_secrets_do_not_repeat() {
        let secrets: HashSet<String> = (0..100).map(|_| generate_jwt_secret()).collect();
        assert_eq!(secrets.len(), 100, "Every generated secret should be unique");
    }

    #[test]
    fn test_ws_token_alphabet_and_length() {
        for _ in 0..50 {
            let token = generate_ws_token();
            assert_eq!(token.chars().count(), 32);
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric()), "Unexpected char in {}", token);
        }
    }

    #[test]
    fn test_fingerprint_stable_and_hides_secret() {
        let secret = generate_jwt_secret();
        let fp = fingerprint(&secret);

        assert_eq!(fp, fingerprint(&secret));
        assert!(!fp.contains(&secret));
        assert_ne!(fp, fingerprint("something-else"));
    }
}
