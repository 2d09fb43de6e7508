//! CSV input collaborator.
//!
//! Loads the three planning-run inputs: one groups file and one workshops
//! file per discipline. The first line of each file is a header and is
//! discarded; fields are trimmed and blank lines skipped.
//!
//! Groups file columns:
//! `teacher, (unused), grade, name, roster, art ranks ×4, science ranks ×4,
//! priority IDs` — the roster is comma-separated, priority IDs are
//! space-separated with `0`/empty as a no-entry sentinel.
//!
//! Workshops file columns:
//! `"ID - Name", "min-max" grade range, session offered ×4 (y/n), capacity,
//! room` — grade tokens accept `K` for kindergarten (grade 0).

mod error;

pub use error::LoadError;

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::models::{Discipline, Group, Workshop, NUM_SESSIONS};

const GROUP_FIELDS: usize = 14;
const WORKSHOP_FIELDS: usize = 8;
const PREFS_PER_DISCIPLINE: usize = 4;

/// Parses a grade token: `K` (any case) maps to 0.
pub fn parse_grade(token: &str) -> Option<i32> {
    if token.eq_ignore_ascii_case("k") {
        return Some(0);
    }
    token.parse().ok()
}

/// Loads group records from a CSV file.
pub fn load_groups(path: &Path) -> Result<Vec<Group>, LoadError> {
    let mut groups = Vec::new();
    for (line, record) in read_records(path)? {
        require_fields(&record, GROUP_FIELDS, line)?;

        let grade_token = record[2].trim();
        let grade = parse_grade(grade_token).ok_or_else(|| LoadError::InvalidGrade {
            token: grade_token.to_string(),
            line,
        })?;

        let students = split_list(&record[4], ',');
        let art = ranked_ids(&record, 5);
        let science = ranked_ids(&record, 5 + PREFS_PER_DISCIPLINE);
        let priority: Vec<String> = split_list(&record[13], ' ')
            .into_iter()
            .filter(|id| id != "0")
            .collect();

        groups.push(
            Group::new(record[0].trim(), record[3].trim(), grade)
                .with_students(students)
                .with_preferences(Discipline::Art, art)
                .with_preferences(Discipline::Science, science)
                .with_priority_ids(priority),
        );
    }
    debug!(count = groups.len(), path = %path.display(), "loaded groups");
    Ok(groups)
}

/// Loads workshop records from a CSV file, stamping each with a discipline.
pub fn load_workshops(path: &Path, discipline: Discipline) -> Result<Vec<Workshop>, LoadError> {
    let mut workshops = Vec::new();
    for (line, record) in read_records(path)? {
        require_fields(&record, WORKSHOP_FIELDS, line)?;

        let composite = record[0].trim();
        let (id, name) = composite
            .split_once('-')
            .ok_or_else(|| LoadError::MissingIdSeparator {
                value: composite.to_string(),
                line,
            })?;

        let range = record[1].trim();
        let (min_grade, max_grade) = range
            .split_once('-')
            .and_then(|(min, max)| Some((parse_grade(min.trim())?, parse_grade(max.trim())?)))
            .ok_or_else(|| LoadError::InvalidGradeRange {
                value: range.to_string(),
                line,
            })?;

        let capacity_field = record[6].trim();
        let capacity: u32 = capacity_field
            .parse()
            .map_err(|_| LoadError::InvalidCapacity {
                value: capacity_field.to_string(),
                line,
            })?;

        let mut offered = [false; NUM_SESSIONS];
        for (session, slot) in offered.iter_mut().enumerate() {
            *slot = record[2 + session].trim().eq_ignore_ascii_case("y");
        }

        workshops.push(
            Workshop::new(id.trim(), name.trim(), discipline)
                .with_grade_range(min_grade, max_grade)
                .with_capacity(capacity, offered)
                .with_room(record[7].trim()),
        );
    }
    debug!(
        count = workshops.len(),
        %discipline,
        path = %path.display(),
        "loaded workshops"
    );
    Ok(workshops)
}

/// Opens a CSV file and yields `(line, record)` pairs past the header.
fn read_records(path: &Path) -> Result<Vec<(usize, StringRecord)>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|source| LoadError::Csv {
            path: path.display().to_string(),
            source,
        })?;
        // Line 1 is the header
        let line = idx + 2;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        records.push((line, record));
    }
    Ok(records)
}

fn require_fields(record: &StringRecord, expected: usize, line: usize) -> Result<(), LoadError> {
    if record.len() < expected {
        return Err(LoadError::ShortRecord {
            line,
            expected,
            got: record.len(),
        });
    }
    Ok(())
}

fn split_list(field: &str, separator: char) -> Vec<String> {
    field
        .split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn ranked_ids(record: &StringRecord, start: usize) -> Vec<String> {
    (start..start + PREFS_PER_DISCIPLINE)
        .map(|col| record[col].trim())
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}
