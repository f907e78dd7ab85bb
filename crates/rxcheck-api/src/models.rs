use rxcheck_rules::{DrugPair, InteractionCheck, Rule, Severity};
use serde::{Deserialize, Serialize};

const NOT_FOUND_MESSAGE: &str = "No known interaction in local DB.";
const ADD_RULE_ENDPOINT: &str = "POST /rules";
const ADD_RULE_NOTE: &str = "Pairs are order-independent; inputs are stored alphabetically.";
const EXAMPLE_DESCRIPTION: &str = "Describe the interaction here...";

/// 相互作用查询请求
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub drug_a: String,
    pub drug_b: String,
}

/// 相互作用查询响应
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggest_add: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_to_add: Option<HowToAdd>,
}

/// 未命中时提示如何新增规则
#[derive(Debug, Serialize)]
pub struct HowToAdd {
    pub endpoint: String,
    pub body_example: RuleBodyExample,
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct RuleBodyExample {
    pub a: String,
    pub b: String,
    pub severity: Severity,
    pub description: String,
}

impl HowToAdd {
    fn for_pair(pair: DrugPair) -> Self {
        Self {
            endpoint: ADD_RULE_ENDPOINT.to_string(),
            body_example: RuleBodyExample {
                a: pair.a,
                b: pair.b,
                severity: Severity::Moderate,
                description: EXAMPLE_DESCRIPTION.to_string(),
            },
            note: ADD_RULE_NOTE.to_string(),
        }
    }
}

impl From<InteractionCheck> for CheckResponse {
    fn from(check: InteractionCheck) -> Self {
        match check.rule {
            Some(rule) => Self {
                found: true,
                severity: Some(rule.severity),
                description: Some(rule.description),
                message: None,
                suggest_add: None,
                how_to_add: None,
            },
            None => Self {
                found: false,
                severity: None,
                description: None,
                message: Some(NOT_FOUND_MESSAGE.to_string()),
                suggest_add: Some(true),
                how_to_add: Some(HowToAdd::for_pair(check.pair)),
            },
        }
    }
}

/// 规则创建请求
///
/// `severity` 以字符串接收，由处理函数校验，非法值返回 400。
#[derive(Debug, Deserialize)]
pub struct CreateRuleRequest {
    pub id: Option<String>,
    pub a: String,
    pub b: String,
    pub severity: String,
    pub description: String,
}

/// 规则更新参数（查询字符串）
#[derive(Debug, Deserialize)]
pub struct UpdateRuleQuery {
    pub severity: String,
    pub description: String,
}

/// 历史查询参数
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

impl HistoryQuery {
    pub const DEFAULT_LIMIT: i64 = 50;

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT)
    }
}

/// 规则响应
#[derive(Debug, Serialize)]
pub struct RuleResponse {
    pub id: String,
    pub a: String,
    pub b: String,
    pub severity: Severity,
    pub description: String,
}

impl From<Rule> for RuleResponse {
    fn from(rule: Rule) -> Self {
        Self {
            id: rule.id,
            a: rule.a,
            b: rule.b,
            severity: rule.severity,
            description: rule.description,
        }
    }
}

/// 写操作确认
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true, id: None }
    }

    pub fn created(id: String) -> Self {
        Self { ok: true, id: Some(id) }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub db: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rxcheck_rules::normalize_pair;

    #[test]
    fn test_miss_suggests_adding_normalized_pair() {
        let check = InteractionCheck {
            pair: normalize_pair("Zoloft", "Ondansetron"),
            rule: None,
        };
        let json = serde_json::to_value(CheckResponse::from(check)).unwrap();

        assert_eq!(json["found"], false);
        assert_eq!(json["suggest_add"], true);
        assert!(json.get("severity").is_none());
        assert_eq!(json["how_to_add"]["endpoint"], "POST /rules");
        assert_eq!(json["how_to_add"]["body_example"]["a"], "ondansetron");
        assert_eq!(json["how_to_add"]["body_example"]["b"], "zoloft");
        assert_eq!(json["how_to_add"]["body_example"]["severity"], "moderate");
    }

    #[test]
    fn test_hit_omits_suggestion() {
        let rule = Rule {
            id: "r1".to_string(),
            a: "aspirin".to_string(),
            b: "ibuprofen".to_string(),
            severity: Severity::Major,
            description: "bleeding".to_string(),
        };
        let check = InteractionCheck {
            pair: rule.pair(),
            rule: Some(rule),
        };
        let json = serde_json::to_value(CheckResponse::from(check)).unwrap();

        assert_eq!(json["found"], true);
        assert_eq!(json["severity"], "major");
        assert!(json.get("suggest_add").is_none());
        assert!(json.get("how_to_add").is_none());
    }
}
