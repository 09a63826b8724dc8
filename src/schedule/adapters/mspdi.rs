//! Microsoft Project XML (MSPDI) task reader.

use crate::schedule::{
    domain::{ProjectFile, ProjectFormat, ScheduleTask},
    ports::{ProjectReadError, ProjectReadResult, ProjectReader},
};
use chrono::NaiveDateTime;
use quick_xml::{Reader, events::Event};

const FORMAT: ProjectFormat = ProjectFormat::Mspdi;

/// Reads `Project/Tasks/Task` elements from an MSPDI document.
///
/// Tasks are returned in document order, including the project summary task
/// (UID 0) when the file carries one.
#[derive(Debug, Clone, Copy, Default)]
pub struct MspdiReader;

impl MspdiReader {
    /// Creates an MSPDI reader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProjectReader for MspdiReader {
    fn read(&self, bytes: &[u8]) -> ProjectReadResult<ProjectFile> {
        let mut reader = Reader::from_reader(bytes);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut path: Vec<Vec<u8>> = Vec::new();
        let mut current: Option<TaskFields> = None;
        let mut text = String::new();
        let mut tasks = Vec::new();
        let mut saw_root = false;

        loop {
            match reader
                .read_event_into(&mut buf)
                .map_err(|err| ProjectReadError::malformed(FORMAT, err.to_string()))?
            {
                Event::Start(element) => {
                    path.push(element.local_name().as_ref().to_vec());
                    saw_root = saw_root || is_project_root(&path);
                    if is_task_path(&path) {
                        current = Some(TaskFields::default());
                    }
                    text.clear();
                }
                Event::Empty(element) => {
                    path.push(element.local_name().as_ref().to_vec());
                    saw_root = saw_root || is_project_root(&path);
                    if is_task_path(&path) {
                        tasks.push(ScheduleTask::new());
                    }
                    path.pop();
                }
                Event::Text(content) => {
                    let unescaped = content
                        .unescape()
                        .map_err(|err| ProjectReadError::malformed(FORMAT, err.to_string()))?;
                    text.push_str(&unescaped);
                }
                Event::CData(content) => {
                    let raw = std::str::from_utf8(&content)
                        .map_err(|_| ProjectReadError::Encoding { format: FORMAT })?;
                    text.push_str(raw);
                }
                Event::End(_) => {
                    if let Some(field) = task_field_name(&path) {
                        if let Some(fields) = current.as_mut() {
                            fields.assign(field, text.trim());
                        }
                    } else if is_task_path(&path) {
                        if let Some(fields) = current.take() {
                            tasks.push(fields.into_task()?);
                        }
                    }
                    path.pop();
                    text.clear();
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !saw_root {
            return Err(ProjectReadError::malformed(
                FORMAT,
                "document has no Project root element",
            ));
        }

        Ok(ProjectFile::new(FORMAT, tasks))
    }
}

fn is_project_root(path: &[Vec<u8>]) -> bool {
    matches!(path, [root] if root.as_slice() == b"Project")
}

fn is_task_path(path: &[Vec<u8>]) -> bool {
    matches!(
        path,
        [root, tasks, task]
            if root.as_slice() == b"Project"
                && tasks.as_slice() == b"Tasks"
                && task.as_slice() == b"Task"
    )
}

fn task_field_name(path: &[Vec<u8>]) -> Option<&[u8]> {
    match path {
        [parent @ .., field] if is_task_path(parent) => Some(field.as_slice()),
        _ => None,
    }
}

/// Raw text of the task fields the service reports.
#[derive(Debug, Default)]
struct TaskFields {
    id: Option<String>,
    name: Option<String>,
    outline_level: Option<String>,
    start: Option<String>,
    finish: Option<String>,
}

impl TaskFields {
    fn assign(&mut self, field: &[u8], value: &str) {
        if value.is_empty() {
            return;
        }
        let slot = match field {
            b"ID" => &mut self.id,
            b"Name" => &mut self.name,
            b"OutlineLevel" => &mut self.outline_level,
            b"Start" => &mut self.start,
            b"Finish" => &mut self.finish,
            _ => return,
        };
        *slot = Some(value.to_owned());
    }

    fn into_task(self) -> ProjectReadResult<ScheduleTask> {
        let mut task = ScheduleTask::new();
        if let Some(id) = self.id {
            task = task.with_id(parse_integer("ID", &id)?);
        }
        if let Some(name) = self.name {
            task = task.with_name(name);
        }
        if let Some(level) = self.outline_level {
            task = task.with_outline_level(parse_integer("OutlineLevel", &level)?);
        }
        if let Some(start) = self.start {
            task = task.with_start(parse_timestamp("Start", &start)?);
        }
        if let Some(finish) = self.finish {
            task = task.with_finish(parse_timestamp("Finish", &finish)?);
        }
        Ok(task)
    }
}

fn parse_integer(field: &str, value: &str) -> ProjectReadResult<i64> {
    value.parse().map_err(|_| {
        ProjectReadError::malformed(FORMAT, format!("task {field} '{value}' is not an integer"))
    })
}

fn parse_timestamp(field: &str, value: &str) -> ProjectReadResult<NaiveDateTime> {
    value.parse().map_err(|_| {
        ProjectReadError::malformed(FORMAT, format!("task {field} '{value}' is not a timestamp"))
    })
}
