use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use log::info;
use sqlx::sqlite::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::create_api_router;
use crate::config::ServerConfig;
use crate::db::init_database;
use crate::intake::pipeline::IntakePipeline;
use crate::verify::VerifierRegistry;

/// 서버 상태
#[derive(Clone)]
pub struct ServerState {
    pub pipeline: Arc<IntakePipeline>,
}

impl ServerState {
    pub fn new(pool: SqlitePool, registry: VerifierRegistry) -> Self {
        Self {
            pipeline: Arc::new(IntakePipeline::new(pool, registry)),
        }
    }
}

/// 레이어가 적용된 애플리케이션 라우터
pub fn build_app(state: ServerState) -> Router {
    create_api_router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 서버 시작
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    info!("주문 접수 서버 시작 중...");

    let pool = init_database(&config.database_url, config.max_connections)
        .await
        .context("데이터베이스 초기화 실패")?;

    let registry = VerifierRegistry::with_default_platforms();
    info!("지원 플랫폼: {:?}", registry.platforms());

    let app = build_app(ServerState::new(pool, registry));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.rest_port))
        .await
        .with_context(|| format!("포트 {} 바인딩 실패", config.rest_port))?;

    info!("서버가 성공적으로 시작되었습니다!");
    info!("REST API: http://localhost:{}", config.rest_port);

    axum::serve(listener, app).await.context("REST 서버 오류")?;

    Ok(())
}
