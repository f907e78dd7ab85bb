use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement};
use tracing::info;

const CREATE_RULES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS rules (
    id TEXT PRIMARY KEY,
    a TEXT NOT NULL,
    b TEXT NOT NULL,
    severity TEXT NOT NULL,
    description TEXT NOT NULL
)
"#;

// 行内总是归一化后的组合，(a, b) 上的唯一索引即保证组合与顺序无关地唯一
const CREATE_PAIR_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS ux_rules_pair ON rules (a, b)";

/// 创建表结构（可重复执行）
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    for sql in [CREATE_RULES_TABLE, CREATE_PAIR_INDEX] {
        db.execute(Statement::from_string(backend, sql.to_string()))
            .await?;
    }

    info!("Rules schema ready");
    Ok(())
}
