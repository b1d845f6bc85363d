//! Algorand 바이트 서명 검증 (Ed25519)
//!
//! - 주소: base32(공개키 32바이트 || SHA-512/256(공개키) 마지막 4바이트), 패딩 없음 58자
//! - 서명: base64 인코딩된 64바이트 Ed25519 서명
//! - 서명 대상: `"MX" || message`

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use data_encoding::BASE32_NOPAD;
use ed25519_dalek::{Signature, VerifyingKey};
use log::debug;
use sha2::{Digest, Sha512_256};

use super::{SignatureError, Verifier};

pub const PLATFORM: &str = "Algorand";

/// 임의 바이트 서명 도메인 구분 접두사
pub const BYTES_PREFIX: &[u8] = b"MX";

const PUBLIC_KEY_LEN: usize = 32;
const CHECKSUM_LEN: usize = 4;
const SIGNATURE_LEN: usize = 64;

/// Algorand 서명 검증기
#[derive(Debug, Clone, Copy, Default)]
pub struct AlgorandVerifier;

impl AlgorandVerifier {
    pub fn new() -> Self {
        Self
    }

    fn check(message: &[u8], signature: &str, address: &str) -> Result<(), SignatureError> {
        let key = decode_address(address)?;

        let sig_bytes = BASE64
            .decode(signature.trim())
            .map_err(|e| SignatureError::Encoding(e.to_string()))?;
        let sig_array: [u8; SIGNATURE_LEN] =
            sig_bytes
                .try_into()
                .map_err(|b: Vec<u8>| SignatureError::Length {
                    expected: SIGNATURE_LEN,
                    actual: b.len(),
                })?;
        let sig = Signature::from_bytes(&sig_array);

        key.verify_strict(&prefixed(message), &sig)
            .map_err(|e| SignatureError::Encoding(e.to_string()))
    }
}

impl Verifier for AlgorandVerifier {
    fn verify(&self, message: &[u8], signature: &str, signer: &str) -> bool {
        match Self::check(message, signature, signer) {
            Ok(()) => true,
            Err(e) => {
                debug!("Algorand 서명 검증 실패: {}", e);
                false
            }
        }
    }
}

/// `"MX"` 접두사를 붙인 서명 대상 바이트
pub fn prefixed(message: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(BYTES_PREFIX.len() + message.len());
    bytes.extend_from_slice(BYTES_PREFIX);
    bytes.extend_from_slice(message);
    bytes
}

/// 주소 → Ed25519 공개키 (체크섬 검증 포함)
pub fn decode_address(address: &str) -> Result<VerifyingKey, SignatureError> {
    let raw = BASE32_NOPAD
        .decode(address.trim().as_bytes())
        .map_err(|e| SignatureError::Address(e.to_string()))?;

    if raw.len() != PUBLIC_KEY_LEN + CHECKSUM_LEN {
        return Err(SignatureError::Address(format!("디코딩 길이 {}바이트", raw.len())));
    }

    let (public_key, checksum) = raw.split_at(PUBLIC_KEY_LEN);
    if checksum != address_checksum(public_key) {
        return Err(SignatureError::Checksum);
    }

    let mut key_bytes = [0u8; PUBLIC_KEY_LEN];
    key_bytes.copy_from_slice(public_key);
    VerifyingKey::from_bytes(&key_bytes).map_err(|_| SignatureError::PublicKey)
}

/// Ed25519 공개키 → 주소
pub fn encode_address(public_key: &[u8; PUBLIC_KEY_LEN]) -> String {
    let mut raw = Vec::with_capacity(PUBLIC_KEY_LEN + CHECKSUM_LEN);
    raw.extend_from_slice(public_key);
    raw.extend_from_slice(&address_checksum(public_key));
    BASE32_NOPAD.encode(&raw)
}

fn address_checksum(public_key: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha512_256::digest(public_key);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
    checksum
}
