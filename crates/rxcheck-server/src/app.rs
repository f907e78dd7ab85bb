use anyhow::{Context, Result};
use rxcheck_api::{create_router, AppState};
use rxcheck_config::{AppConfig, DatabaseConfig};
use rxcheck_rules::{ensure_schema, reference_rules, InteractionService};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use tracing::info;

/// 连接数据库并确保表结构存在
pub async fn connect_database(config: &DatabaseConfig) -> Result<Arc<DatabaseConnection>> {
    let db = Database::connect(config.url.as_str())
        .await
        .with_context(|| format!("Failed to connect to database {}", config.url))?;
    ensure_schema(&db).await?;

    info!(url = %config.url, "Database connected");
    Ok(Arc::new(db))
}

/// 初始化数据库表结构
pub async fn init_db(config: &AppConfig) -> Result<()> {
    connect_database(&config.database).await?;
    Ok(())
}

/// 写入内置参考规则，返回写入条数
pub async fn seed(config: &AppConfig) -> Result<usize> {
    let db = connect_database(&config.database).await?;
    let service = InteractionService::open(db, &config.history.path);
    Ok(service.store().seed(reference_rules()).await?)
}

/// 构建 API 状态：数据库、可选的参考规则、历史文件
pub async fn build_state(config: &AppConfig) -> Result<AppState> {
    let db = connect_database(&config.database).await?;
    let service = Arc::new(InteractionService::open(db, &config.history.path));

    if config.database.seed_on_start {
        service.store().seed(reference_rules()).await?;
    }

    service
        .history()
        .ensure()
        .await
        .with_context(|| format!("Failed to prepare history file {}", config.history.path))?;

    Ok(AppState::new(service))
}

/// 启动 HTTP 服务，直到收到 Ctrl-C
pub async fn serve(config: AppConfig) -> Result<()> {
    let state = build_state(&config).await?;
    let app = create_router(state, &config.cors.allowed_origins);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
