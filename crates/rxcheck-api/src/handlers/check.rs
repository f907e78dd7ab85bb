use crate::{error::Result, models::*, state::AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use rxcheck_rules::HistoryEntry;
use tracing::debug;

/// 查询药物相互作用
pub async fn check_interaction(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<CheckResponse>> {
    debug!(drug_a = %req.drug_a, drug_b = %req.drug_b, "Checking interaction");

    let check = state.service.check(&req.drug_a, &req.drug_b).await?;

    Ok(Json(CheckResponse::from(check)))
}

/// 获取查询历史
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntry>>> {
    let limit = query.limit();
    debug!(limit, "Getting query history");

    let entries = state.service.recent_history(limit).await?;

    Ok(Json(entries))
}
