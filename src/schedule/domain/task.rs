//! Task records extracted from project files.

use super::ProjectFormat;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single task reported by a project file reader.
///
/// Every field is optional because project files routinely omit values
/// (blank rows, summary tasks without dates, unnamed milestones). Missing
/// values serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTask {
    id: Option<i64>,
    name: Option<String>,
    outline_level: Option<i64>,
    start: Option<NaiveDateTime>,
    finish: Option<NaiveDateTime>,
}

impl ScheduleTask {
    /// Creates a task with no field values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the task identifier.
    #[must_use]
    pub const fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the task name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the outline level.
    #[must_use]
    pub const fn with_outline_level(mut self, outline_level: i64) -> Self {
        self.outline_level = Some(outline_level);
        self
    }

    /// Sets the scheduled start.
    #[must_use]
    pub const fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the scheduled finish.
    #[must_use]
    pub const fn with_finish(mut self, finish: NaiveDateTime) -> Self {
        self.finish = Some(finish);
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the outline level.
    #[must_use]
    pub const fn outline_level(&self) -> Option<i64> {
        self.outline_level
    }

    /// Returns the scheduled start.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    /// Returns the scheduled finish.
    #[must_use]
    pub const fn finish(&self) -> Option<NaiveDateTime> {
        self.finish
    }
}

/// Decoded project file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    format: ProjectFormat,
    tasks: Vec<ScheduleTask>,
}

impl ProjectFile {
    /// Creates a project file from tasks in reader order.
    #[must_use]
    pub const fn new(format: ProjectFormat, tasks: Vec<ScheduleTask>) -> Self {
        Self { format, tasks }
    }

    /// Returns the format the file was decoded from.
    #[must_use]
    pub const fn format(&self) -> ProjectFormat {
        self.format
    }

    /// Returns the tasks in reader order.
    #[must_use]
    pub fn tasks(&self) -> &[ScheduleTask] {
        &self.tasks
    }

    /// Consumes the file and returns its tasks.
    #[must_use]
    pub fn into_tasks(self) -> Vec<ScheduleTask> {
        self.tasks
    }
}
