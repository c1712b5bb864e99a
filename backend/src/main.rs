//! # 타임시트 서버 진입점
//!
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 읽기
//! 4. 데모 데이터로 채운 인메모리 저장소와 Mock API 생성
//! 5. 라우터 조립 (프론트엔드 빌드가 있으면 함께 서빙)
//! 6. HTTP 서버 시작

use std::{path::Path, sync::Arc};

use anyhow::Result;
use timesheet_backend::{
    config::Config,
    db::MemoryStore,
    routes::{self, AppState},
    services::MockApi,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 봅니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timesheet_backend=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env()?;
    tracing::info!("Starting timesheet server on {}:{}", config.host, config.port);

    // ── 4단계: 데모 데이터 저장소와 Mock API 생성 ──
    let api = MockApi::new(
        Arc::new(MemoryStore::seeded()),
        config.latency(),
        config.demo_account(),
    );
    tracing::info!(
        "Mock API ready: {} entries, {}ms latency",
        api.entry_count()?,
        config.api_latency_ms
    );

    // ── 5단계: 라우터 조립 ──
    // 핸들러는 State<AppState>로 같은 Mock API를 공유합니다.
    let state = AppState { api };

    let static_dir = Path::new(&config.static_dir);
    let app = if static_dir.exists() {
        tracing::info!("Serving frontend static files from {}", config.static_dir);
        routes::app(state, Some(static_dir))
    } else {
        tracing::warn!("Frontend dist directory not found, serving API only");
        routes::app(state, None)
    };

    // ── 6단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
