use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Deserializer, Serialize, de};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};

use crate::error::{TaskError, TaskResult, messages};

/// Task status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "tarefa_status")]
#[strum(ascii_case_insensitive)]
pub enum TaskStatus {
    /// Task not started
    #[default]
    #[serde(rename = "pendente")]
    #[strum(serialize = "pendente")]
    #[sea_orm(string_value = "pendente")]
    Pending,
    /// Task in progress
    #[serde(rename = "em_andamento")]
    #[strum(serialize = "em_andamento")]
    #[sea_orm(string_value = "em_andamento")]
    InProgress,
    /// Task finished
    #[serde(rename = "finalizado")]
    #[strum(serialize = "finalizado")]
    #[sea_orm(string_value = "finalizado")]
    Done,
}

impl TaskStatus {
    /// Map a numeric ordinal (0, 1, 2) onto a status.
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Pending),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    pub fn ordinal(self) -> i64 {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Parse a status given either by label (case-insensitive) or by ordinal.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(ordinal) => Self::from_ordinal(ordinal),
            Err(_) => raw.parse().ok(),
        }
    }
}

/// Task entity - represents a stored task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Identifier assigned by the database
    pub id: i32,
    /// Task title
    #[serde(rename = "titulo")]
    pub title: String,
    /// Optional task description
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    /// Date (and time) the task is scheduled for
    #[serde(rename = "data")]
    pub date: NaiveDateTime,
    /// Task status
    pub status: TaskStatus,
}

impl Task {
    /// Overwrite every mutable field. The id never changes.
    pub fn overwrite(&mut self, changes: NewTask) {
        self.title = changes.title;
        self.description = changes.description;
        self.date = changes.date;
        self.status = changes.status;
    }
}

/// Request body for creating or replacing a task
///
/// Any `id` in the body is ignored; the path parameter addresses the task.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TaskInput {
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    /// Accepts `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`
    #[serde(rename = "data", default, deserialize_with = "deserialize_date")]
    #[schema(value_type = Option<String>, example = "2024-01-01T00:00:00")]
    pub date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: TaskStatus,
}

impl TaskInput {
    /// Check the date is present and not the unset sentinel.
    pub fn into_new_task(self) -> TaskResult<NewTask> {
        let date = self
            .date
            .filter(|date| !is_unset_date(date))
            .ok_or_else(|| TaskError::Validation(messages::EMPTY_DATE.to_string()))?;

        Ok(NewTask {
            title: self.title,
            description: self.description,
            date,
            status: self.status,
        })
    }
}

/// Validated task fields, ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDateTime,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleQuery {
    /// Substring searched for in the title
    #[serde(default)]
    pub titulo: String,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateQuery {
    /// Day to match, `YYYY-MM-DD` (a time component is ignored)
    pub data: String,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusQuery {
    /// Status label (`pendente`, `em_andamento`, `finalizado`) or ordinal (0-2)
    pub status: String,
}

/// `0001-01-01T00:00:00` stands for "no date" and is rejected like a missing one.
pub fn is_unset_date(date: &NaiveDateTime) -> bool {
    date.year() == 1
        && date.ordinal() == 1
        && date.num_seconds_from_midnight() == 0
        && date.nanosecond() == 0
}

/// Parse `YYYY-MM-DDTHH:MM:SS[.fff]`, a bare `YYYY-MM-DD` (midnight), or an RFC 3339
/// timestamp with `Z` or an offset, which is converted to UTC.
pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| raw.parse::<NaiveDate>().ok().map(|day| day.and_time(NaiveTime::MIN)))
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|stamp| stamp.naive_utc()))
}

/// Half-open range `[day 00:00, next day 00:00)` covering every time of `day`.
pub fn day_bounds(day: NaiveDate) -> (NaiveDateTime, Option<NaiveDateTime>) {
    let start = day.and_time(NaiveTime::MIN);
    let end = day.succ_opt().map(|next| next.and_time(NaiveTime::MIN));
    (start, end)
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date_time(value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("{}: {value}", messages::INVALID_DATE))),
    }
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<TaskStatus, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawStatus {
        Ordinal(i64),
        Label(String),
    }

    let status = match RawStatus::deserialize(deserializer) {
        Ok(RawStatus::Ordinal(ordinal)) => TaskStatus::from_ordinal(ordinal),
        Ok(RawStatus::Label(label)) => TaskStatus::parse(&label),
        Err(_) => None,
    };

    status.ok_or_else(|| de::Error::custom(messages::INVALID_TASK_STATUS))
}
