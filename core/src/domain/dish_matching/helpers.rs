use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the photo bytes.
pub fn image_digest(image_data: &[u8]) -> String {
    hex::encode(Sha256::digest(image_data))
}
