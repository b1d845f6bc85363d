use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::intake::model::Submission;

/// 주문 DB 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct OrderRecord {
    pub id: i64,
    pub sender_pk: String,
    pub receiver_pk: String,
    pub buy_currency: String,
    pub sell_currency: String,
    pub buy_amount: String,
    pub sell_amount: String,
    pub signature: String,
}

/// 저장 전 주문 (id 미할당)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub sender_pk: String,
    pub receiver_pk: String,
    pub buy_currency: String,
    pub sell_currency: String,
    pub buy_amount: String,
    pub sell_amount: String,
    pub signature: String,
}

impl NewOrder {
    /// 검증 통과한 접수 요청에서 생성 (platform 제외)
    pub fn from_submission(submission: &Submission) -> Self {
        let payload = &submission.payload;
        Self {
            sender_pk: payload.sender_pk.clone(),
            receiver_pk: payload.receiver_pk.clone(),
            buy_currency: payload.buy_currency.clone(),
            sell_currency: payload.sell_currency.clone(),
            buy_amount: payload.buy_amount.as_text(),
            sell_amount: payload.sell_amount.as_text(),
            signature: submission.sig.clone(),
        }
    }
}

/// 거부 로그 DB 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LogRecord {
    pub id: i64,
    pub logtime: DateTime<Utc>,
    pub message: String,
}
