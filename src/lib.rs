//! 서명된 거래 주문 접수 서비스
//!
//! 구조 검증 → 정규화 → 플랫폼별 서명 검증 → 영속화(주문 또는 거부 로그)

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod intake;
pub mod server;
pub mod verify;

pub use config::ServerConfig;
pub use error::IntakeError;
pub use intake::pipeline::IntakePipeline;
pub use verify::VerifierRegistry;
