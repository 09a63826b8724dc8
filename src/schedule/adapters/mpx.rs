//! MPX exchange format task reader.
//!
//! MPX is a delimited text format made of numbered records. Only the records
//! needed for task extraction are interpreted:
//!
//! - `MPX` header, whose fourth character is the field delimiter
//! - `12` date and time settings
//! - `60` task model, mapping columns to field numbers
//! - `70` task
//!
//! Every other record is skipped.

use crate::schedule::{
    domain::{ProjectFile, ProjectFormat, ScheduleTask},
    ports::{ProjectReadError, ProjectReadResult, ProjectReader},
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const FORMAT: ProjectFormat = ProjectFormat::Mpx;
const UTF8_BOM: &str = "\u{feff}";

const RECORD_HEADER: &str = "MPX";
const RECORD_DATE_TIME_SETTINGS: &str = "12";
const RECORD_TASK_MODEL: &str = "60";
const RECORD_TASK: &str = "70";

const FIELD_NAME: u32 = 1;
const FIELD_OUTLINE_LEVEL: u32 = 3;
const FIELD_START: u32 = 50;
const FIELD_FINISH: u32 = 51;
const FIELD_ID: u32 = 90;

/// Reads task records from an MPX file.
#[derive(Debug, Clone, Copy, Default)]
pub struct MpxReader;

impl MpxReader {
    /// Creates an MPX reader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProjectReader for MpxReader {
    fn read(&self, bytes: &[u8]) -> ProjectReadResult<ProjectFile> {
        let text = decode_text(bytes);
        let body = text.strip_prefix(UTF8_BOM).unwrap_or(&text);
        if !body.starts_with(RECORD_HEADER) {
            return Err(ProjectReadError::malformed(FORMAT, "missing MPX header record"));
        }
        let delimiter = body
            .chars()
            .nth(RECORD_HEADER.len())
            .filter(|ch| !ch.is_whitespace() && *ch != '"')
            .ok_or_else(|| ProjectReadError::malformed(FORMAT, "missing field delimiter"))?;

        let mut settings = DateTimeSettings::default();
        let mut model: Option<TaskModel> = None;
        let mut tasks = Vec::new();

        for record in split_records(body, delimiter)? {
            let Some((record_type, fields)) = record.split_first() else {
                continue;
            };
            match record_type.trim() {
                RECORD_DATE_TIME_SETTINGS => settings = DateTimeSettings::from_fields(fields),
                RECORD_TASK_MODEL => model = Some(TaskModel::from_fields(fields)?),
                RECORD_TASK => {
                    let task_model = model.as_ref().ok_or_else(|| {
                        ProjectReadError::malformed(
                            FORMAT,
                            "task record appears before the task model record",
                        )
                    })?;
                    tasks.push(task_model.build_task(fields, &settings)?);
                }
                _ => {}
            }
        }

        Ok(ProjectFile::new(FORMAT, tasks))
    }
}

/// Decodes UTF-8 text, falling back to Latin-1 for ANSI code page files.
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => bytes.iter().copied().map(char::from).collect(),
    }
}

/// Splits MPX text into records of fields, honouring quoted fields and
/// doubled-quote escapes.
fn split_records(text: &str, delimiter: char) -> ProjectReadResult<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() && !field_was_quoted => {
                in_quotes = true;
                field_was_quoted = true;
            }
            '\r' => {}
            '\n' => {
                if !record.is_empty() || !field.is_empty() || field_was_quoted {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                field_was_quoted = false;
            }
            _ if ch == delimiter => {
                record.push(std::mem::take(&mut field));
                field_was_quoted = false;
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(ProjectReadError::malformed(FORMAT, "unterminated quoted field"));
    }
    if !record.is_empty() || !field.is_empty() || field_was_quoted {
        record.push(field);
        records.push(record);
    }
    Ok(records)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

/// Date and time conventions declared by record `12`.
#[derive(Debug, Clone)]
struct DateTimeSettings {
    order: DateOrder,
    date_separator: char,
    time_separator: char,
    am_text: String,
    pm_text: String,
}

impl Default for DateTimeSettings {
    fn default() -> Self {
        Self {
            order: DateOrder::MonthDayYear,
            date_separator: '/',
            time_separator: ':',
            am_text: "am".to_owned(),
            pm_text: "pm".to_owned(),
        }
    }
}

impl DateTimeSettings {
    /// Field positions: date order, time format, default time, date
    /// separator, time separator, AM text, PM text.
    fn from_fields(fields: &[String]) -> Self {
        let defaults = Self::default();
        let order = match fields.first().map(|value| value.trim()) {
            Some("1") => DateOrder::DayMonthYear,
            Some("2") => DateOrder::YearMonthDay,
            _ => DateOrder::MonthDayYear,
        };
        let separator_at = |index: usize, fallback: char| {
            fields
                .get(index)
                .and_then(|value| value.chars().next())
                .unwrap_or(fallback)
        };
        let text_at = |index: usize, fallback: &str| {
            fields
                .get(index)
                .map(|value| value.trim().to_lowercase())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.to_owned())
        };

        Self {
            order,
            date_separator: separator_at(3, defaults.date_separator),
            time_separator: separator_at(4, defaults.time_separator),
            am_text: text_at(5, &defaults.am_text),
            pm_text: text_at(6, &defaults.pm_text),
        }
    }

    fn parse(&self, field: &str, value: &str) -> ProjectReadResult<NaiveDateTime> {
        let invalid = || {
            ProjectReadError::malformed(FORMAT, format!("task {field} '{value}' is not a date"))
        };
        let mut parts = value.split_whitespace();
        let date_text = parts.next().ok_or_else(invalid)?;
        let time_text: String = parts.collect();

        let date = self.parse_date(date_text).ok_or_else(invalid)?;
        let time = if time_text.is_empty() {
            NaiveTime::MIN
        } else {
            self.parse_time(&time_text).ok_or_else(invalid)?
        };
        Ok(date.and_time(time))
    }

    fn parse_date(&self, text: &str) -> Option<NaiveDate> {
        let numbers: Vec<u32> = text
            .split(self.date_separator)
            .map(|part| part.trim().parse().ok())
            .collect::<Option<_>>()?;
        let [first, second, third] = numbers.as_slice() else {
            return None;
        };
        let (year, month, day) = match self.order {
            DateOrder::MonthDayYear => (*third, *first, *second),
            DateOrder::DayMonthYear => (*third, *second, *first),
            DateOrder::YearMonthDay => (*first, *second, *third),
        };
        NaiveDate::from_ymd_opt(expand_year(year)?, month, day)
    }

    fn parse_time(&self, text: &str) -> Option<NaiveTime> {
        let lowered = text.to_lowercase();
        let (clock, meridiem) = if let Some(rest) = lowered.strip_suffix(&self.pm_text) {
            (rest.trim(), Some(true))
        } else if let Some(rest) = lowered.strip_suffix(&self.am_text) {
            (rest.trim(), Some(false))
        } else {
            (lowered.trim(), None)
        };

        let numbers: Vec<u32> = clock
            .split(self.time_separator)
            .map(|part| part.trim().parse().ok())
            .collect::<Option<_>>()?;
        let (hour, minute, second) = match numbers.as_slice() {
            [hour] => (*hour, 0, 0),
            [hour, minute] => (*hour, *minute, 0),
            [hour, minute, second] => (*hour, *minute, *second),
            _ => return None,
        };
        let hour_of_day = match meridiem {
            Some(true) if hour < 12 => hour + 12,
            Some(false) if hour == 12 => 0,
            _ => hour,
        };
        NaiveTime::from_hms_opt(hour_of_day, minute, second)
    }
}

/// Expands two-digit years the way `%y` does: 00-68 map to 20xx and 69-99
/// to 19xx.
fn expand_year(year: u32) -> Option<i32> {
    let full = match year {
        0..=68 => year + 2000,
        69..=99 => year + 1900,
        _ => year,
    };
    i32::try_from(full).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskColumn {
    Id,
    Name,
    OutlineLevel,
    Start,
    Finish,
}

impl TaskColumn {
    const fn from_field_number(number: u32) -> Option<Self> {
        match number {
            FIELD_ID => Some(Self::Id),
            FIELD_NAME => Some(Self::Name),
            FIELD_OUTLINE_LEVEL => Some(Self::OutlineLevel),
            FIELD_START => Some(Self::Start),
            FIELD_FINISH => Some(Self::Finish),
            _ => None,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::OutlineLevel => "Outline Level",
            Self::Start => "Start",
            Self::Finish => "Finish",
        }
    }
}

/// Column layout declared by record `60`.
#[derive(Debug, Clone)]
struct TaskModel {
    columns: Vec<Option<TaskColumn>>,
}

impl TaskModel {
    /// A field number of zero terminates the model.
    fn from_fields(fields: &[String]) -> ProjectReadResult<Self> {
        let mut columns = Vec::with_capacity(fields.len());
        for value in fields {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                columns.push(None);
                continue;
            }
            let number: u32 = trimmed.parse().map_err(|_| {
                ProjectReadError::malformed(
                    FORMAT,
                    format!("task model field number '{trimmed}' is not numeric"),
                )
            })?;
            if number == 0 {
                break;
            }
            columns.push(TaskColumn::from_field_number(number));
        }
        Ok(Self { columns })
    }

    fn build_task(
        &self,
        fields: &[String],
        settings: &DateTimeSettings,
    ) -> ProjectReadResult<ScheduleTask> {
        let mut task = ScheduleTask::new();
        for (column, value) in self.columns.iter().zip(fields) {
            let Some(kind) = *column else {
                continue;
            };
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            let label = kind.label();
            task = match kind {
                TaskColumn::Id => task.with_id(parse_integer(label, trimmed)?),
                TaskColumn::Name => task.with_name(value.as_str()),
                TaskColumn::OutlineLevel => {
                    task.with_outline_level(parse_integer(label, trimmed)?)
                }
                TaskColumn::Start => task.with_start(settings.parse(label, trimmed)?),
                TaskColumn::Finish => task.with_finish(settings.parse(label, trimmed)?),
            };
        }
        Ok(task)
    }
}

fn parse_integer(field: &str, value: &str) -> ProjectReadResult<i64> {
    value.parse().map_err(|_| {
        ProjectReadError::malformed(FORMAT, format!("task {field} '{value}' is not an integer"))
    })
}
