use crate::db::rule;
use crate::{normalize_pair, DrugPair, NewRule, Rule, RuleError, Result, Severity};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr, Statement,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 规则库
///
/// 对 `rules` 表的增删改查。所有按组合的访问都先归一化，
/// 因此 `(a, b)` 与 `(b, a)` 命中同一条规则。
pub struct RuleStore {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl RuleStore {
    /// 创建新的规则库
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 按药物组合查找规则
    pub async fn lookup(&self, drug_a: &str, drug_b: &str) -> Result<Option<Rule>> {
        let pair = normalize_pair(drug_a, drug_b);
        self.find_by_pair(&pair).await
    }

    /// 按已归一化的组合查找规则
    pub async fn find_by_pair(&self, pair: &DrugPair) -> Result<Option<Rule>> {
        let model = rule::Entity::find()
            .filter(rule::Column::A.eq(pair.a.as_str()))
            .filter(rule::Column::B.eq(pair.b.as_str()))
            .one(&*self.db)
            .await?;

        debug!(pair = %pair, found = model.is_some(), "Rule lookup");
        model.map(Rule::try_from).transpose()
    }

    /// 检查组合是否已有规则
    pub async fn exists_for_pair(&self, drug_a: &str, drug_b: &str) -> Result<bool> {
        let pair = normalize_pair(drug_a, drug_b);
        self.pair_exists(&pair).await
    }

    async fn pair_exists(&self, pair: &DrugPair) -> Result<bool> {
        let count = rule::Entity::find()
            .filter(rule::Column::A.eq(pair.a.as_str()))
            .filter(rule::Column::B.eq(pair.b.as_str()))
            .count(&*self.db)
            .await?;
        Ok(count > 0)
    }

    /// 列出所有规则（按 ID 升序）
    pub async fn list(&self) -> Result<Vec<Rule>> {
        let models = rule::Entity::find()
            .order_by_asc(rule::Column::Id)
            .all(&*self.db)
            .await?;

        debug!(count = models.len(), "Rules listed");
        models.into_iter().map(Rule::try_from).collect()
    }

    /// 获取规则
    pub async fn get(&self, rule_id: &str) -> Result<Option<Rule>> {
        let model = rule::Entity::find_by_id(rule_id.to_string())
            .one(&*self.db)
            .await?;
        model.map(Rule::try_from).transpose()
    }

    /// 新建规则
    ///
    /// # 错误
    /// * `ValidationError` - 药物名称为空
    /// * `PairExists` - 该组合（与顺序无关）已有规则
    /// * `Conflict` - 数据库拒绝写入（ID 重复或并发写入同一组合）
    pub async fn create(&self, new_rule: NewRule) -> Result<Rule> {
        let pair = normalize_pair(&new_rule.a, &new_rule.b);
        if pair.has_blank() {
            return Err(RuleError::validation("Drug names cannot be empty"));
        }

        let id = match new_rule.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => pair.default_rule_id(),
        };

        if self.pair_exists(&pair).await? {
            return Err(RuleError::PairExists(pair.to_string()));
        }
        if self.get(&id).await?.is_some() {
            return Err(RuleError::Conflict(format!("rule id already exists: {}", id)));
        }

        let rule = Rule {
            id,
            a: pair.a,
            b: pair.b,
            severity: new_rule.severity,
            description: new_rule.description,
        };

        let active_model: rule::ActiveModel = rule.clone().into();
        rule::Entity::insert(active_model)
            .exec_without_returning(&*self.db)
            .await
            .map_err(conflict_or_database)?;

        info!(
            rule_id = %rule.id,
            pair = %rule.pair(),
            severity = %rule.severity,
            "Rule created"
        );
        Ok(rule)
    }

    /// 更新规则的严重程度和描述，组合本身不可修改
    pub async fn update(&self, rule_id: &str, severity: Severity, description: &str) -> Result<()> {
        let result = rule::Entity::update_many()
            .col_expr(rule::Column::Severity, Expr::value(severity.as_str()))
            .col_expr(rule::Column::Description, Expr::value(description))
            .filter(rule::Column::Id.eq(rule_id))
            .exec(&*self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(RuleError::NotFound(rule_id.to_string()));
        }

        info!(rule_id = %rule_id, severity = %severity, "Rule updated");
        Ok(())
    }

    /// 删除规则
    pub async fn delete(&self, rule_id: &str) -> Result<()> {
        let result = rule::Entity::delete_by_id(rule_id.to_string())
            .exec(&*self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(RuleError::NotFound(rule_id.to_string()));
        }

        info!(rule_id = %rule_id, "Rule deleted");
        Ok(())
    }

    /// 数据库连通性检查
    pub async fn ping(&self) -> Result<()> {
        let backend = self.db.get_database_backend();
        self.db
            .execute(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    /// 写入参考规则
    ///
    /// 已存在的 ID 会被覆盖；组合已被其他 ID 占用时跳过。
    /// 返回实际写入的条数。
    pub async fn seed(&self, rules: Vec<NewRule>) -> Result<usize> {
        let mut written = 0;

        for new_rule in rules {
            let pair = normalize_pair(&new_rule.a, &new_rule.b);
            let id = new_rule.id.unwrap_or_else(|| pair.default_rule_id());
            let rule = Rule {
                id: id.clone(),
                a: pair.a.clone(),
                b: pair.b.clone(),
                severity: new_rule.severity,
                description: new_rule.description,
            };
            let active_model: rule::ActiveModel = rule.into();

            let outcome = if self.get(&id).await?.is_some() {
                active_model.update(&*self.db).await.map(|_| ())
            } else if self.pair_exists(&pair).await? {
                warn!(rule_id = %id, pair = %pair, "Seed skipped, pair held by another rule");
                continue;
            } else {
                rule::Entity::insert(active_model)
                    .exec_without_returning(&*self.db)
                    .await
                    .map(|_| ())
            };

            match outcome.map_err(conflict_or_database) {
                Ok(()) => written += 1,
                Err(RuleError::Conflict(msg)) => {
                    warn!(rule_id = %id, error = %msg, "Seed skipped on conflict");
                }
                Err(err) => return Err(err),
            }
        }

        info!(count = written, "Reference rules seeded");
        Ok(written)
    }
}

fn conflict_or_database(err: DbErr) -> RuleError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => RuleError::Conflict(msg),
        _ => RuleError::DatabaseError(err),
    }
}
