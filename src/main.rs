use log::info;

use order_intake::server::start_server;
use order_intake::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    info!("설정 로드 완료: {:?}", config);

    start_server(config).await
}
