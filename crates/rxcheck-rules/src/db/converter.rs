use super::rule;
use crate::{Rule, RuleError, Severity};
use sea_orm::ActiveValue::Set;

/// Rule 模型与数据库实体的转换
impl From<Rule> for rule::ActiveModel {
    fn from(rule: Rule) -> Self {
        Self {
            id: Set(rule.id),
            a: Set(rule.a),
            b: Set(rule.b),
            severity: Set(rule.severity.as_str().to_string()),
            description: Set(rule.description),
        }
    }
}

/// 库中的严重程度不合法时报错，而不是静默回退
impl TryFrom<rule::Model> for Rule {
    type Error = RuleError;

    fn try_from(model: rule::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            severity: model.severity.parse::<Severity>()?,
            id: model.id,
            a: model.a,
            b: model.b,
            description: model.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(severity: &str) -> rule::Model {
        rule::Model {
            id: "ibuprofen_aspirin".to_string(),
            a: "aspirin".to_string(),
            b: "ibuprofen".to_string(),
            severity: severity.to_string(),
            description: "GI bleeding risk".to_string(),
        }
    }

    #[test]
    fn test_rule_to_active_model() {
        let rule = Rule::try_from(model("major")).unwrap();
        let active: rule::ActiveModel = rule.into();
        assert_eq!(active.severity.unwrap(), "major");
        assert_eq!(active.a.unwrap(), "aspirin");
    }

    #[test]
    fn test_model_with_unknown_severity_is_rejected() {
        let result = Rule::try_from(model("catastrophic"));
        assert!(matches!(result, Err(RuleError::InvalidSeverity(_))));
    }
}
