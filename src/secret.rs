use base64::{engine::general_purpose, Engine as _};
use rand::{rngs::OsRng, RngCore};

use crate::error::Result;

/// JWT signing secrets are 256-bit symmetric keys.
pub const SECRET_LEN: usize = 32;

/// Fill a fixed buffer from the operating system's secure random source.
pub fn generate_secret_bytes() -> Result<[u8; SECRET_LEN]> {
    let mut key = [0u8; SECRET_LEN];
    OsRng.try_fill_bytes(&mut key)?;
    Ok(key)
}

/// Generate a base64-encoded (standard alphabet, with padding) JWT secret.
pub fn generate_jwt_secret() -> Result<String> {
    let key = generate_secret_bytes()?;
    tracing::debug!("generated {} random bytes", SECRET_LEN);
    Ok(general_purpose::STANDARD.encode(key))
}
