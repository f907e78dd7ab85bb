use crate::{RuleError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 相互作用严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// 禁忌
    Contraindicated,
    /// 严重
    Major,
    /// 中等
    Moderate,
    /// 轻微
    Minor,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Contraindicated,
        Severity::Major,
        Severity::Moderate,
        Severity::Minor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Contraindicated => "contraindicated",
            Severity::Major => "major",
            Severity::Moderate => "moderate",
            Severity::Minor => "minor",
        }
    }
}

impl FromStr for Severity {
    type Err = RuleError;

    /// 只接受小写的标准取值，不做大小写归一
    fn from_str(s: &str) -> Result<Self> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| RuleError::InvalidSeverity(s.to_string()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 归一化后的药物组合
///
/// 两个名称均已去除首尾空白并转为小写，且 `a <= b`。
/// 只能通过 [`crate::normalize_pair`] 构造。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrugPair {
    pub a: String,
    pub b: String,
}

impl DrugPair {
    pub(crate) fn new_unchecked(a: String, b: String) -> Self {
        Self { a, b }
    }

    /// 未指定 ID 时使用的默认规则 ID：`{a}_{b}`
    pub fn default_rule_id(&self) -> String {
        format!("{}_{}", self.a, self.b)
    }

    /// 任一名称为空
    pub fn has_blank(&self) -> bool {
        self.a.is_empty() || self.b.is_empty()
    }
}

impl fmt::Display for DrugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.a, self.b)
    }
}

/// 相互作用规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// 规则 ID
    pub id: String,

    /// 药物 A（归一化后，按字母序在前）
    pub a: String,

    /// 药物 B（归一化后，按字母序在后）
    pub b: String,

    /// 严重程度
    pub severity: Severity,

    /// 描述
    pub description: String,
}

impl Rule {
    pub fn pair(&self) -> DrugPair {
        DrugPair::new_unchecked(self.a.clone(), self.b.clone())
    }
}

/// 新建规则的输入
///
/// `a`/`b` 为原始输入，写入前会被归一化。
#[derive(Debug, Clone)]
pub struct NewRule {
    pub id: Option<String>,
    pub a: String,
    pub b: String,
    pub severity: Severity,
    pub description: String,
}

impl NewRule {
    pub fn new(
        a: impl Into<String>,
        b: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            a: a.into(),
            b: b.into(),
            severity,
            description: description.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// 一次查询的历史记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub drug_a: String,
    pub drug_b: String,
    pub found: bool,
    pub severity: Option<Severity>,
    /// 秒级精度，`Z` 结尾
    #[serde(serialize_with = "serialize_ts")]
    pub ts: DateTime<Utc>,
}

fn serialize_ts<S>(ts: &DateTime<Utc>, s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true))
}

impl HistoryEntry {
    pub fn new(pair: &DrugPair, severity: Option<Severity>) -> Self {
        Self {
            drug_a: pair.a.clone(),
            drug_b: pair.b.clone(),
            found: severity.is_some(),
            severity,
            ts: Utc::now(),
        }
    }
}

/// 相互作用查询结果
#[derive(Debug, Clone)]
pub struct InteractionCheck {
    /// 归一化后的查询组合
    pub pair: DrugPair,

    /// 命中的规则
    pub rule: Option<Rule>,
}

impl InteractionCheck {
    pub fn found(&self) -> bool {
        self.rule.is_some()
    }
}
