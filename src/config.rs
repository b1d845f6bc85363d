use log::warn;
use std::env;
use std::str::FromStr;

/// 서버 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub rest_port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rest_port: 5002,
            database_url: "sqlite://orders.db?mode=rwc".into(),
            max_connections: 5,
        }
    }
}

impl ServerConfig {
    /// 환경 변수에서 설정 로드
    ///
    /// `.env`는 `main`에서 먼저 로드된다.
    ///
    /// - `INTAKE_PORT`
    /// - `DATABASE_URL`
    /// - `DATABASE_MAX_CONNECTIONS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            rest_port: parse_var("INTAKE_PORT", defaults.rest_port),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", defaults.max_connections),
        }
    }
}

/// 파싱 실패 시 기본값 사용
fn parse_var<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("환경 변수 {}={} 파싱 실패, 기본값 {} 사용", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.rest_port, 5002);
        assert_eq!(config.max_connections, 5);
        assert!(config.database_url.starts_with("sqlite://"));
    }

    #[test]
    fn test_parse_var_fallback() {
        env::set_var("INTAKE_TEST_BAD_PORT", "not-a-port");
        assert_eq!(parse_var("INTAKE_TEST_BAD_PORT", 5002u16), 5002);

        env::set_var("INTAKE_TEST_GOOD_PORT", " 8088 ");
        assert_eq!(parse_var("INTAKE_TEST_GOOD_PORT", 5002u16), 8088);

        assert_eq!(parse_var("INTAKE_TEST_MISSING", 7u32), 7);
    }
}
