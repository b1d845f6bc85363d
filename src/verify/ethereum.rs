//! Ethereum 개인 메시지 서명 검증 (secp256k1)
//!
//! 1. EIP-191 접두사 `"\x19Ethereum Signed Message:\n" + len(message)`를 붙여 Keccak-256 해시
//! 2. 65바이트 서명 (r || s || v)에서 공개키 복구
//! 3. Keccak-256(공개키)의 마지막 20바이트 = 주소
//! 4. 주소 비교는 대소문자 무시, `0x` 접두사 선택

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use log::debug;
use sha3::{Digest, Keccak256};

use super::{SignatureError, Verifier};

pub const PLATFORM: &str = "Ethereum";

const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";
const SIGNATURE_LEN: usize = 65;

/// Ethereum 서명 검증기
#[derive(Debug, Clone, Copy, Default)]
pub struct EthereumVerifier;

impl EthereumVerifier {
    pub fn new() -> Self {
        Self
    }

    /// 서명자 주소 복구
    pub fn recover_address(message: &[u8], signature: &str) -> Result<[u8; 20], SignatureError> {
        let bytes = decode_hex(signature)?;
        if bytes.len() != SIGNATURE_LEN {
            return Err(SignatureError::Length {
                expected: SIGNATURE_LEN,
                actual: bytes.len(),
            });
        }

        let v = bytes[64];
        let recovery_byte = match v {
            0 | 27 => 0,
            1 | 28 => 1,
            other => return Err(SignatureError::RecoveryId(other)),
        };
        let mut recovery_id = RecoveryId::from_byte(recovery_byte).ok_or(SignatureError::RecoveryId(v))?;

        let mut sig = Signature::from_slice(&bytes[..64])
            .map_err(|e| SignatureError::Encoding(e.to_string()))?;

        // high-S 서명은 low-S로 정규화하고 y 패리티를 뒤집는다
        if let Some(normalized) = sig.normalize_s() {
            sig = normalized;
            recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
        }

        let hash = personal_message_hash(message);
        let key = VerifyingKey::recover_from_prehash(&hash, &sig, recovery_id)
            .map_err(|_| SignatureError::RecoveryFailed)?;

        Ok(address_of(&key))
    }
}

impl Verifier for EthereumVerifier {
    fn verify(&self, message: &[u8], signature: &str, signer: &str) -> bool {
        let claimed = match parse_address(signer) {
            Ok(address) => address,
            Err(e) => {
                debug!("Ethereum 주소 파싱 실패 ({}): {}", signer, e);
                return false;
            }
        };

        match Self::recover_address(message, signature) {
            Ok(recovered) => recovered == claimed,
            Err(e) => {
                debug!("Ethereum 서명 복구 실패: {}", e);
                false
            }
        }
    }
}

/// EIP-191 개인 메시지 해시
pub fn personal_message_hash(message: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(PERSONAL_MESSAGE_PREFIX);
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message);
    hasher.finalize().into()
}

/// 공개키 → 20바이트 주소
pub fn address_of(key: &VerifyingKey) -> [u8; 20] {
    let point = key.to_encoded_point(false);
    // 0x04 접두사 제외
    let hash = Keccak256::digest(&point.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// `0x` 접두사 포함 소문자 16진수 주소
pub fn format_address(address: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(address))
}

fn parse_address(raw: &str) -> Result<[u8; 20], SignatureError> {
    let bytes = decode_hex(raw).map_err(|e| SignatureError::Address(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| SignatureError::Address(format!("주소 길이 {}바이트", b.len())))
}

fn decode_hex(raw: &str) -> Result<Vec<u8>, SignatureError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).map_err(|e| SignatureError::Encoding(e.to_string()))
}
