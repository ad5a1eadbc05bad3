use rand::{distr::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

/// Length of issued bearer tokens.
pub const TOKEN_LENGTH: usize = 48;

/// Generates a random alphanumeric bearer token.
pub fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Hex encoded SHA-256 digest of a token. Only digests are stored.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
