use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
};
use log::error;

use crate::api::models::ErrorResponse;
use crate::error::IntakeError;
use crate::intake::model::OrderView;
use crate::server::ServerState;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// 주문 접수 핸들러
///
/// 본문이 JSON이 아니어도 거부 로그를 남기고 `false`를 반환한다.
/// 저장 실패는 `false`가 아닌 500 응답이다.
pub async fn submit_trade(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<bool>, ApiError> {
    // 요청이 취소되어도 처리가 끝나도록 분리된 태스크에서 실행
    let pipeline = state.pipeline.clone();
    let result = match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(raw) => pipeline.submit(raw).await,
        Err(_) => {
            pipeline
                .submit_unparsed(String::from_utf8_lossy(&body).into_owned())
                .await
        }
    };

    result.map(Json).map_err(internal_error)
}

/// 주문 목록 조회 핸들러
pub async fn get_order_book(
    State(state): State<ServerState>,
) -> Result<Json<Vec<OrderView>>, ApiError> {
    state
        .pipeline
        .list_orders()
        .await
        .map(Json)
        .map_err(internal_error)
}

fn internal_error(err: IntakeError) -> ApiError {
    error!("요청 처리 실패: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::from(&err)),
    )
}
