//! 접수 파이프라인
//!
//! 요청 하나당 상태 전이:
//! RECEIVED → STRUCTURALLY_VALID | REJECTED_STRUCTURE → VERIFIED | REJECTED_SIGNATURE → PERSISTED
//!
//! 모든 요청은 주문 1건 또는 거부 로그 1건 중 정확히 하나로 끝난다.
//! 저장 실패만 `IntakeError`로 전파된다.

use log::{debug, info, warn};
use serde_json::Value;
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

use super::canonical::canonicalize;
use super::model::{IntakeStage, OrderView, Submission};
use super::validator::{validate, Structure};
use crate::db::models::{LogRecord, NewOrder};
use crate::db::repository::{LogRepository, OrderRepository};
use crate::error::IntakeError;
use crate::verify::VerifierRegistry;

/// 주문 접수 파이프라인
#[derive(Debug, Clone)]
pub struct IntakePipeline {
    orders: OrderRepository,
    logs: LogRepository,
    registry: VerifierRegistry,
}

impl IntakePipeline {
    pub fn new(pool: SqlitePool, registry: VerifierRegistry) -> Self {
        Self {
            orders: OrderRepository::new(pool.clone()),
            logs: LogRepository::new(pool),
            registry,
        }
    }

    /// 요청 future와 분리된 태스크에서 `process` 실행
    ///
    /// 호출자가 취소되거나 연결이 끊겨도 태스크는 끝까지 실행되어
    /// 주문 또는 거부 로그 중 하나를 반드시 남긴다.
    pub async fn submit(self: Arc<Self>, raw: Value) -> Result<bool, IntakeError> {
        tokio::spawn(async move { self.process(&raw).await }).await?
    }

    /// `reject_unparsed`의 분리 실행 버전
    pub async fn submit_unparsed(self: Arc<Self>, body: String) -> Result<bool, IntakeError> {
        tokio::spawn(async move { self.reject_unparsed(&body).await }).await?
    }

    /// 접수 요청 처리
    ///
    /// `Ok(true)`: 주문 저장됨, `Ok(false)`: 거부 로그 저장됨.
    pub async fn process(&self, raw: &Value) -> Result<bool, IntakeError> {
        let intake_id = Uuid::new_v4();
        trace_stage(intake_id, IntakeStage::Received);

        // 1. 구조 검증
        if let Structure::Invalid { missing } = validate(raw) {
            warn!("[{}] 필수 키 누락: {}", intake_id, missing.join(", "));
            return self.reject_structure(intake_id, raw).await;
        }

        let submission: Submission = match serde_json::from_value(raw.clone()) {
            Ok(submission) => submission,
            Err(e) => {
                warn!("[{}] 필드 타입 오류: {}", intake_id, e);
                return self.reject_structure(intake_id, raw).await;
            }
        };
        trace_stage(intake_id, IntakeStage::StructurallyValid);

        // 2. 정규화
        let canonical = canonicalize(&submission.payload);
        debug!("[{}] 정규화 메시지: {}", intake_id, canonical);

        // 3. 서명 검증
        let verdict = self.registry.dispatch(
            submission.payload.platform.as_str(),
            canonical.as_bytes(),
            &submission.sig,
            &submission.payload.sender_pk,
        );

        // 4/5. 영속화
        if verdict.accepted {
            trace_stage(intake_id, IntakeStage::Verified);
            let order_id = self.orders.save(&NewOrder::from_submission(&submission)).await?;
            trace_stage(intake_id, IntakeStage::Persisted);
            info!(
                "[{}] 주문 접수: order_id={}, platform={}, sender={}",
                intake_id, order_id, verdict.platform, submission.payload.sender_pk
            );
            Ok(true)
        } else {
            trace_stage(intake_id, IntakeStage::RejectedSignature);
            let log_id = self.logs.save(&canonical).await?;
            trace_stage(intake_id, IntakeStage::Persisted);
            info!(
                "[{}] 서명 검증 실패: log_id={}, platform={}",
                intake_id, log_id, verdict.platform
            );
            Ok(false)
        }
    }

    /// JSON으로 해석되지 않는 요청 본문 기록
    pub async fn reject_unparsed(&self, body: &str) -> Result<bool, IntakeError> {
        let intake_id = Uuid::new_v4();
        trace_stage(intake_id, IntakeStage::Received);
        warn!("[{}] JSON 파싱 실패", intake_id);

        trace_stage(intake_id, IntakeStage::RejectedStructure);
        let log_id = self.logs.save(body).await?;
        trace_stage(intake_id, IntakeStage::Persisted);
        info!("[{}] 구조 오류 기록: log_id={}", intake_id, log_id);

        Ok(false)
    }

    /// 주문 목록 조회 (삽입 순서, platform 없음)
    pub async fn list_orders(&self) -> Result<Vec<OrderView>, IntakeError> {
        let orders = self.orders.find_all().await?;
        Ok(orders.into_iter().map(OrderView::from).collect())
    }

    /// 거부 로그 조회 (감사용)
    pub async fn list_logs(&self) -> Result<Vec<LogRecord>, IntakeError> {
        Ok(self.logs.find_all().await?)
    }

    async fn reject_structure(&self, intake_id: Uuid, raw: &Value) -> Result<bool, IntakeError> {
        trace_stage(intake_id, IntakeStage::RejectedStructure);
        let log_id = self.logs.save(&raw.to_string()).await?;
        trace_stage(intake_id, IntakeStage::Persisted);
        info!("[{}] 구조 오류 기록: log_id={}", intake_id, log_id);
        Ok(false)
    }
}

fn trace_stage(intake_id: Uuid, stage: IntakeStage) {
    debug!("[{}] 단계: {:?}", intake_id, stage);
}
