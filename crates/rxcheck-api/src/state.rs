use rxcheck_rules::InteractionService;
use std::sync::Arc;

/// API 应用状态
#[derive(Clone)]
pub struct AppState {
    /// 相互作用查询服务
    pub service: Arc<InteractionService>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(service: Arc<InteractionService>) -> Self {
        Self { service }
    }
}
