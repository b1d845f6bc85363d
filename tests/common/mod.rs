//! 통합 테스트 공용 헬퍼
#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ed25519_dalek::Signer;
use serde_json::{json, Value};

use order_intake::db::init_database;
use order_intake::intake::{canonicalize, Payload};
use order_intake::verify::{algorand, ethereum};
use order_intake::{IntakePipeline, VerifierRegistry};

/// 인메모리 DB + 기본 플랫폼 파이프라인
pub async fn test_pipeline() -> IntakePipeline {
    let pool = init_database("sqlite::memory:", 1).await.unwrap();
    IntakePipeline::new(pool, VerifierRegistry::with_default_platforms())
}

pub struct EthSigner {
    key: k256::ecdsa::SigningKey,
}

impl EthSigner {
    pub fn from_seed(seed: u8) -> Self {
        Self {
            key: k256::ecdsa::SigningKey::from_slice(&[seed; 32]).unwrap(),
        }
    }

    pub fn address(&self) -> String {
        ethereum::format_address(&ethereum::address_of(self.key.verifying_key()))
    }

    pub fn sign(&self, message: &[u8]) -> String {
        let hash = ethereum::personal_message_hash(message);
        let (sig, recovery_id) = self.key.sign_prehash_recoverable(&hash).unwrap();
        let mut bytes = sig.to_bytes().to_vec();
        bytes.push(27 + recovery_id.to_byte());
        format!("0x{}", hex::encode(bytes))
    }
}

pub struct AlgoSigner {
    key: ed25519_dalek::SigningKey,
}

impl AlgoSigner {
    pub fn from_seed(seed: u8) -> Self {
        Self {
            key: ed25519_dalek::SigningKey::from_bytes(&[seed; 32]),
        }
    }

    pub fn address(&self) -> String {
        algorand::encode_address(self.key.verifying_key().as_bytes())
    }

    pub fn sign(&self, message: &[u8]) -> String {
        BASE64.encode(self.key.sign(&algorand::prefixed(message)).to_bytes())
    }
}

/// 페이로드 JSON (서명 전)
pub fn payload_json(sender_pk: &str, receiver_pk: &str, platform: &str) -> Value {
    json!({
        "sender_pk": sender_pk,
        "receiver_pk": receiver_pk,
        "buy_currency": "Ethereum",
        "sell_currency": "Algorand",
        "buy_amount": 51,
        "sell_amount": "257.5",
        "platform": platform
    })
}

/// 페이로드의 정규화 메시지
pub fn canonical_of(payload: &Value) -> String {
    let payload: Payload = serde_json::from_value(payload.clone()).unwrap();
    canonicalize(&payload)
}

pub fn signed_eth_submission(signer: &EthSigner) -> Value {
    let payload = payload_json(&signer.address(), "RECEIVER", "Ethereum");
    let sig = signer.sign(canonical_of(&payload).as_bytes());
    json!({ "sig": sig, "payload": payload })
}

pub fn signed_algo_submission(signer: &AlgoSigner) -> Value {
    let payload = payload_json(&signer.address(), "0xreceiver", "Algorand");
    let sig = signer.sign(canonical_of(&payload).as_bytes());
    json!({ "sig": sig, "payload": payload })
}
