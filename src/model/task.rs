use std::fmt;

use chrono::NaiveDate;

/// 任务数据
///
/// Immutable once built. The name is taken verbatim; rejecting empty names is
/// the job of [`TaskList::add`](super::TaskList::add).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// 任务名称 (用户输入，如 "Buy milk")
    name: String,
    /// 创建日期
    date_created: NaiveDate,
}

impl Task {
    pub fn new(name: impl Into<String>, date_created: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date_created,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_created(&self) -> NaiveDate {
        self.date_created
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (created on {})", self.name, self.date_created)
    }
}
