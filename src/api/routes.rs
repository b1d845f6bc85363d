use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::*;
use crate::server::ServerState;

/// API 라우터 생성
pub fn create_api_router() -> Router<ServerState> {
    Router::new()
        // 주문 접수
        .route("/trade", post(submit_trade))
        // 주문 목록
        .route("/order_book", get(get_order_book))
}
