use crate::{
    normalize_pair, HistoryEntry, HistoryLog, InteractionCheck, RuleStore, Result,
};
use sea_orm::DatabaseConnection;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// 相互作用查询服务
///
/// 统一入口：规则库 + 查询历史
pub struct InteractionService {
    /// 规则库
    store: Arc<RuleStore>,

    /// 查询历史
    history: Arc<HistoryLog>,
}

impl InteractionService {
    pub fn new(store: Arc<RuleStore>, history: Arc<HistoryLog>) -> Self {
        Self { store, history }
    }

    /// 由数据库连接和历史文件路径创建
    pub fn open<P: AsRef<Path>>(db: Arc<DatabaseConnection>, history_path: P) -> Self {
        Self::new(
            Arc::new(RuleStore::new(db)),
            Arc::new(HistoryLog::new(history_path)),
        )
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// 查询两种药物之间是否存在已知相互作用，并记录到历史
    ///
    /// 历史写入失败只记日志，不影响查询结果。
    pub async fn check(&self, drug_a: &str, drug_b: &str) -> Result<InteractionCheck> {
        let pair = normalize_pair(drug_a, drug_b);
        let rule = self.store.find_by_pair(&pair).await?;
        let severity = rule.as_ref().map(|r| r.severity);

        if let Err(e) = self.history.append(&HistoryEntry::new(&pair, severity)).await {
            warn!(pair = %pair, error = %e, "Failed to record history entry");
        }

        info!(pair = %pair, found = rule.is_some(), "Interaction checked");
        Ok(InteractionCheck { pair, rule })
    }

    /// 最近的查询历史
    pub async fn recent_history(&self, limit: i64) -> Result<Vec<HistoryEntry>> {
        self.history.recent(limit).await
    }
}
