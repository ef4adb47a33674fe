use chrono::{DateTime, Utc};

/// 持久化的短链接记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub id: String,
    pub url: String,
    /// 提交者地址，仅作记录
    pub origin: String,
    pub created_at: DateTime<Utc>,
}

impl LinkRecord {
    pub fn new(
        id: impl Into<String>,
        url: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            origin: origin.into(),
            created_at: Utc::now(),
        }
    }
}

/// `insert_if_absent` 的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// 违反唯一约束：返回已占用该 URL（优先）或该 id 的记录
    Conflict(LinkRecord),
}
