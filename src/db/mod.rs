pub mod models;
pub mod repository;

use log::info;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Error as SqlxError;

pub use repository::{LogRepository, OrderRepository};

/// SQLite 데이터베이스 초기화 및 연결
pub async fn init_database(database_url: &str, max_connections: u32) -> Result<SqlitePool, SqlxError> {
    info!("🗄️  SQLite 데이터베이스 초기화 중: {}", database_url);

    // 연결 풀 생성
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    // 테이블 생성
    create_tables(&pool).await?;

    info!("✅ 데이터베이스 초기화 완료");

    Ok(pool)
}

/// 필요한 테이블 생성
///
/// 두 테이블 모두 추가 전용이다. 주문 테이블에는 platform 컬럼이 없다.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), SqlxError> {
    // 검증된 주문 테이블
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            sender_pk TEXT NOT NULL,
            receiver_pk TEXT NOT NULL,
            buy_currency TEXT NOT NULL,
            sell_currency TEXT NOT NULL,
            buy_amount TEXT NOT NULL,
            sell_amount TEXT NOT NULL,
            signature TEXT NOT NULL
        )"
    )
    .execute(pool)
    .await?;

    // 거부 로그 테이블
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            logtime DATETIME NOT NULL,
            message TEXT NOT NULL
        )"
    )
    .execute(pool)
    .await?;

    info!("📋 테이블 생성 완료");

    Ok(())
}
