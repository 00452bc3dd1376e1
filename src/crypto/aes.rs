//! AES-256-GCM envelope codec
//!
//! Produces the envelope shared with the PHP, Python and JavaScript runtimes:
//!
//! | bytes     | contents            |
//! |-----------|---------------------|
//! | `[0:16]`  | IV (random per call)|
//! | `[16:32]` | GCM tag             |
//! | `[32:]`   | ciphertext          |
//!
//! The whole blob is then encoded with the codec's [`Encoding`]. The IV is
//! 16 bytes rather than GCM's usual 12 because that is what `openssl_encrypt`
//! emits for `aes-256-gcm` in the other runtimes.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{AeadInPlace, KeyInit, OsRng};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Key, Nonce, Tag};

use crate::error::{PolyCryptoError, PolyResult};

use super::encoding::Encoding;
use super::key::{AesKey, DEFAULT_ITERATIONS};

/// AES-256-GCM with a 128-bit IV
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Size of the IV in bytes
pub const IV_SIZE: usize = 16;

/// Size of the GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// Bytes preceding the ciphertext in every envelope
pub const HEADER_SIZE: usize = IV_SIZE + TAG_SIZE;

/// Encrypts and decrypts envelopes with a fixed key and output encoding
///
/// # Example
///
/// ```rust
/// use poly_crypto::crypto::PolyAes;
///
/// let key = "C639A572E14D5075C526FDDD43E4ECF6B095EA17783D32EF3D2710AF9F359DD4";
/// let codec = PolyAes::with_key(key)?;
/// let encrypted = codec.encrypt_string("I love encryption")?;
/// assert_eq!(codec.decrypt_string(&encrypted)?, "I love encryption");
/// # Ok::<(), poly_crypto::PolyCryptoError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PolyAes {
    key: AesKey,
    encoding: Encoding,
}

impl PolyAes {
    /// Build a codec from an existing key, using base64 output
    pub fn new(key: AesKey) -> Self {
        Self {
            key,
            encoding: Encoding::default(),
        }
    }

    /// Build a codec from a 64-character hex key
    pub fn with_key(hex_key: &str) -> PolyResult<Self> {
        Ok(Self::new(AesKey::from_hex(hex_key)?))
    }

    /// Build a codec from a password and salt with the default iteration count
    pub fn with_password(password: &str, salt: &str) -> PolyResult<Self> {
        Self::with_password_iterations(password, salt, DEFAULT_ITERATIONS)
    }

    /// Build a codec from a password and salt with an explicit iteration count
    pub fn with_password_iterations(
        password: &str,
        salt: &str,
        iterations: u32,
    ) -> PolyResult<Self> {
        Ok(Self::new(AesKey::derive(password, salt, iterations)?))
    }

    /// Return this codec with a different output encoding
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Change the output encoding in place
    pub fn set_encoding(&mut self, encoding: Encoding) -> &mut Self {
        self.encoding = encoding;
        self
    }

    /// Current output encoding
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Encrypt bytes into an encoded envelope
    ///
    /// A fresh random IV is drawn on every call, so encrypting the same
    /// plaintext twice yields different output.
    pub fn encrypt(&self, plaintext: &[u8]) -> PolyResult<Vec<u8>> {
        let envelope = self.seal(plaintext)?;
        tracing::debug!(
            encoding = %self.encoding,
            envelope_len = envelope.len(),
            "encrypted envelope"
        );
        Ok(self.encoding.encode(&envelope))
    }

    /// Decode and decrypt an envelope
    ///
    /// # Errors
    ///
    /// - [`PolyCryptoError::MalformedEnvelope`] if the input does not decode
    ///   under the current encoding or is shorter than IV + tag
    /// - [`PolyCryptoError::AuthenticationFailed`] if the tag does not verify
    pub fn decrypt(&self, encoded: &[u8]) -> PolyResult<Vec<u8>> {
        let envelope = self.encoding.decode(encoded)?;
        self.open(&envelope)
    }

    /// Encrypt a string, returning the encoded envelope as text
    ///
    /// Fails with [`PolyCryptoError::InvalidEncoding`] when the codec is set
    /// to `bin`, since raw bytes are not text.
    pub fn encrypt_string(&self, plaintext: &str) -> PolyResult<String> {
        self.require_text_encoding()?;
        let encoded = self.encrypt(plaintext.as_bytes())?;
        String::from_utf8(encoded).map_err(|_| PolyCryptoError::InvalidEncoding)
    }

    /// Decrypt a text envelope into a UTF-8 string
    pub fn decrypt_string(&self, encoded: &str) -> PolyResult<String> {
        self.require_text_encoding()?;
        let plaintext = self.decrypt(encoded.as_bytes())?;
        String::from_utf8(plaintext).map_err(|_| PolyCryptoError::InvalidUtf8)
    }

    fn require_text_encoding(&self) -> PolyResult<()> {
        if self.encoding.is_text() {
            Ok(())
        } else {
            Err(PolyCryptoError::InvalidEncoding)
        }
    }

    fn cipher(&self) -> Aes256Gcm16 {
        Aes256Gcm16::new(Key::<Aes256Gcm16>::from_slice(self.key.as_bytes()))
    }

    /// IV ‖ tag ‖ ciphertext, unencoded
    fn seal(&self, plaintext: &[u8]) -> PolyResult<Vec<u8>> {
        let mut iv = [0u8; IV_SIZE];
        OsRng.fill_bytes(&mut iv);

        let mut buffer = plaintext.to_vec();
        let tag = self
            .cipher()
            .encrypt_in_place_detached(Nonce::<U16>::from_slice(&iv), b"", &mut buffer)
            .map_err(|_| PolyCryptoError::MalformedEnvelope("plaintext too long".to_string()))?;

        let mut envelope = Vec::with_capacity(HEADER_SIZE + buffer.len());
        envelope.extend_from_slice(&iv);
        envelope.extend_from_slice(tag.as_slice());
        envelope.extend_from_slice(&buffer);
        Ok(envelope)
    }

    fn open(&self, envelope: &[u8]) -> PolyResult<Vec<u8>> {
        if envelope.len() < HEADER_SIZE {
            return Err(PolyCryptoError::MalformedEnvelope(format!(
                "expected at least {} bytes, got {}",
                HEADER_SIZE,
                envelope.len()
            )));
        }

        let (iv, rest) = envelope.split_at(IV_SIZE);
        let (tag, ciphertext) = rest.split_at(TAG_SIZE);

        let mut buffer = ciphertext.to_vec();
        self.cipher()
            .decrypt_in_place_detached(
                Nonce::<U16>::from_slice(iv),
                b"",
                &mut buffer,
                Tag::from_slice(tag),
            )
            .map_err(|_| {
                tracing::debug!(envelope_len = envelope.len(), "GCM tag verification failed");
                PolyCryptoError::AuthenticationFailed
            })?;

        Ok(buffer)
    }
}
