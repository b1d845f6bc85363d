//! 플랫폼별 서명 검증
//!
//! 플랫폼 태그 → 검증기 매핑으로 디스패치한다.
//! 등록되지 않은 태그는 항상 거부된다 (fail-closed).

pub mod algorand;
pub mod ethereum;

use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

pub use algorand::AlgorandVerifier;
pub use ethereum::EthereumVerifier;

/// 서명 검증기
///
/// 구현체는 가변 상태를 가지지 않아야 하며 여러 요청에서 동시에 호출된다.
pub trait Verifier: Send + Sync {
    /// `message`에 대한 `signature`가 `signer`의 것인지 확인
    fn verify(&self, message: &[u8], signature: &str, signer: &str) -> bool;
}

impl<F> Verifier for F
where
    F: Fn(&[u8], &str, &str) -> bool + Send + Sync,
{
    fn verify(&self, message: &[u8], signature: &str, signer: &str) -> bool {
        self(message, signature, signer)
    }
}

/// 검증기 내부 디코딩 오류 (호출자에게는 `false`로만 드러남)
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("서명 인코딩 오류: {0}")]
    Encoding(String),

    #[error("서명 길이 오류: 예상 {expected}, 실제 {actual}")]
    Length { expected: usize, actual: usize },

    #[error("복구 ID 오류: {0}")]
    RecoveryId(u8),

    #[error("공개키 복구 실패")]
    RecoveryFailed,

    #[error("주소 형식 오류: {0}")]
    Address(String),

    #[error("주소 체크섬 불일치")]
    Checksum,

    #[error("공개키 오류")]
    PublicKey,
}

/// 디스패치 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub accepted: bool,
    pub platform: String,
}

/// 플랫폼 태그별 검증기 레지스트리
#[derive(Clone, Default)]
pub struct VerifierRegistry {
    verifiers: HashMap<String, Arc<dyn Verifier>>,
}

impl VerifierRegistry {
    /// 빈 레지스트리 (모든 플랫폼 거부)
    pub fn new() -> Self {
        Self::default()
    }

    /// Ethereum, Algorand 검증기가 등록된 레지스트리
    pub fn with_default_platforms() -> Self {
        let mut registry = Self::new();
        registry.register(ethereum::PLATFORM, Arc::new(EthereumVerifier::new()));
        registry.register(algorand::PLATFORM, Arc::new(AlgorandVerifier::new()));
        registry
    }

    /// 새 플랫폼 등록
    ///
    /// 이미 등록된 태그는 교체하지 않고 `false`를 반환한다.
    pub fn register(&mut self, platform: impl Into<String>, verifier: Arc<dyn Verifier>) -> bool {
        let platform = platform.into();
        if self.verifiers.contains_key(&platform) {
            warn!("이미 등록된 플랫폼: {}", platform);
            return false;
        }
        debug!("검증기 등록: {}", platform);
        self.verifiers.insert(platform, verifier);
        true
    }

    /// 등록된 플랫폼 목록 (정렬됨)
    pub fn platforms(&self) -> Vec<&str> {
        let mut platforms: Vec<&str> = self.verifiers.keys().map(String::as_str).collect();
        platforms.sort_unstable();
        platforms
    }

    /// 플랫폼에 맞는 검증기로 서명 확인
    pub fn dispatch(&self, platform: &str, message: &[u8], signature: &str, signer: &str) -> Verdict {
        let accepted = match self.verifiers.get(platform) {
            Some(verifier) => verifier.verify(message, signature, signer),
            None => {
                warn!("지원하지 않는 플랫폼: {:?}", platform);
                false
            }
        };

        Verdict {
            accepted,
            platform: platform.to_string(),
        }
    }
}

impl std::fmt::Debug for VerifierRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifierRegistry")
            .field("platforms", &self.platforms())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_platforms() {
        let registry = VerifierRegistry::with_default_platforms();
        assert_eq!(registry.platforms(), vec!["Algorand", "Ethereum"]);
        assert!(!registry.platforms().contains(&"ethereum"));
    }

    #[test]
    fn test_unknown_platform_fails_closed() {
        let mut registry = VerifierRegistry::new();
        registry.register("Always", Arc::new(|_: &[u8], _: &str, _: &str| true));

        let verdict = registry.dispatch("Bitcoin", b"msg", "sig", "pk");
        assert_eq!(
            verdict,
            Verdict { accepted: false, platform: "Bitcoin".to_string() }
        );
        assert!(registry.dispatch("Always", b"msg", "sig", "pk").accepted);
    }

    #[test]
    fn test_register_does_not_replace_existing() {
        let mut registry = VerifierRegistry::new();
        assert!(registry.register("Test", Arc::new(|_: &[u8], _: &str, _: &str| false)));
        assert!(!registry.register("Test", Arc::new(|_: &[u8], _: &str, _: &str| true)));

        assert!(!registry.dispatch("Test", b"msg", "sig", "pk").accepted);
    }

    #[test]
    fn test_closure_receives_arguments() {
        let mut registry = VerifierRegistry::new();
        registry.register(
            "Echo",
            Arc::new(|message: &[u8], signature: &str, signer: &str| {
                message == b"hello" && signature == "sig" && signer == "me"
            }),
        );

        assert!(registry.dispatch("Echo", b"hello", "sig", "me").accepted);
        assert!(!registry.dispatch("Echo", b"hello", "sig", "you").accepted);
    }
}
