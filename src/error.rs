//! 접수 파이프라인 오류 정의
//!
//! 구조 오류와 서명 검증 실패는 오류가 아니라 `false` 판정으로 처리된다.
//! 호출자에게 전파되는 것은 저장 실패와 접수 태스크 실패뿐이다.

/// 접수 파이프라인 오류
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// 저장소 쓰기/읽기 실패: 접수 결과가 기록되지 않음
    #[error("저장소 오류: {0}")]
    Persistence(#[from] sqlx::Error),

    /// 분리된 접수 태스크가 패닉 또는 취소로 종료됨
    #[error("접수 태스크 실패: {0}")]
    Task(#[from] tokio::task::JoinError),
}
