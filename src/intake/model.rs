use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::db::models::OrderRecord;

/// 접수 요청 (서명 + 페이로드)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub sig: String,
    pub payload: Payload,
}

/// 서명 대상 거래 주문 필드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub sender_pk: String,
    pub receiver_pk: String,
    pub buy_currency: String,
    pub sell_currency: String,
    pub buy_amount: Amount,
    pub sell_amount: Amount,
    pub platform: Platform,
}

/// 수량 값
///
/// 이 서비스는 수량을 해석하지 않는다. 수신된 JSON 토큰(숫자 또는 문자열)을
/// 그대로 보관했다가 정규화 시 같은 형태로 다시 기록한다.
/// 숫자는 `arbitrary_precision`으로 원문 텍스트를 유지한다 (`1e-07`, 큰 정수 등).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Number(serde_json::Number),
    Text(String),
}

impl Amount {
    /// 저장용 텍스트 (따옴표 없음)
    pub fn as_text(&self) -> String {
        match self {
            Amount::Number(n) => n.to_string(),
            Amount::Text(s) => s.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(n) => Ok(Amount::Number(n)),
            serde_json::Value::String(s) => Ok(Amount::Text(s)),
            other => Err(de::Error::custom(format!(
                "수량은 숫자 또는 문자열이어야 합니다: {}",
                other
            ))),
        }
    }
}

/// 서명 플랫폼 태그
///
/// 지원 여부는 검증기 레지스트리가 결정하므로 임의의 문자열을 허용한다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Platform(pub String);

impl Platform {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Platform {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

/// 주문 조회 응답 항목 (platform 없음)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderView {
    pub sender_pk: String,
    pub receiver_pk: String,
    pub buy_currency: String,
    pub sell_currency: String,
    pub buy_amount: String,
    pub sell_amount: String,
    pub signature: String,
}

impl From<OrderRecord> for OrderView {
    fn from(record: OrderRecord) -> Self {
        Self {
            sender_pk: record.sender_pk,
            receiver_pk: record.receiver_pk,
            buy_currency: record.buy_currency,
            sell_currency: record.sell_currency,
            buy_amount: record.buy_amount,
            sell_amount: record.sell_amount,
            signature: record.signature,
        }
    }
}

/// 접수 처리 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStage {
    Received,
    StructurallyValid,
    RejectedStructure,
    Verified,
    RejectedSignature,
    Persisted,
}
