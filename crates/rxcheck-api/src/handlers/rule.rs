use crate::{error::ApiError, error::Result, models::*, state::AppState};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use rxcheck_rules::{NewRule, Severity};
use tracing::{debug, info};

/// 列出所有规则
pub async fn list_rules(State(state): State<AppState>) -> Result<Json<Vec<RuleResponse>>> {
    debug!("Listing rules");

    let rules = state.service.store().list().await?;

    let response: Vec<RuleResponse> = rules.into_iter()
        .map(RuleResponse::from)
        .collect();

    Ok(Json(response))
}

/// 获取规则
pub async fn get_rule(
    State(state): State<AppState>,
    Path(rule_id): Path<String>,
) -> Result<Json<RuleResponse>> {
    debug!(rule_id = %rule_id, "Getting rule");

    let rule = state.service.store().get(&rule_id).await?
        .ok_or_else(|| ApiError::RuleNotFound("Rule not found".to_string()))?;

    Ok(Json(RuleResponse::from(rule)))
}

/// 新建规则
pub async fn create_rule(
    State(state): State<AppState>,
    Json(req): Json<CreateRuleRequest>,
) -> Result<Json<OkResponse>> {
    info!(a = %req.a, b = %req.b, severity = %req.severity, "Creating rule");

    let severity: Severity = req.severity.parse()?;
    let mut new_rule = NewRule::new(req.a, req.b, severity, req.description);
    new_rule.id = req.id;

    let rule = state.service.store().create(new_rule).await?;

    Ok(Json(OkResponse::created(rule.id)))
}

/// 更新规则（严重程度与描述）
pub async fn update_rule(
    State(state): State<AppState>,
    Path(rule_id): Path<String>,
    Query(query): Query<UpdateRuleQuery>,
) -> Result<Json<OkResponse>> {
    info!(rule_id = %rule_id, severity = %query.severity, "Updating rule");

    // 先校验严重程度，规则不存在时也返回 400
    let severity: Severity = query.severity.parse()?;
    state.service.store()
        .update(&rule_id, severity, &query.description)
        .await?;

    Ok(Json(OkResponse::ok()))
}

/// 删除规则
pub async fn delete_rule(
    State(state): State<AppState>,
    Path(rule_id): Path<String>,
) -> Result<Json<OkResponse>> {
    info!(rule_id = %rule_id, "Deleting rule");

    state.service.store().delete(&rule_id).await?;

    Ok(Json(OkResponse::ok()))
}
