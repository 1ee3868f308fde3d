//! In-app record of what happened during this session: sign-ins, saves and
//! failed calls, tagged with who was signed in at the time.

use std::collections::VecDeque;

use chrono::{Local, NaiveTime};
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn class(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Success => "success",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub at: NaiveTime,
    pub level: LogLevel,
    pub message: String,
    /// Display name of the signed-in user, if any.
    pub actor: Option<String>,
}

/// Oldest entries are dropped past this many.
const MAX_ENTRIES: usize = 200;

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    pub visible: bool,
    pub errors_only: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, actor: Option<String>) {
        self.push_at(Local::now().time(), level, message.into(), actor);
    }

    fn push_at(&mut self, at: NaiveTime, level: LogLevel, message: String, actor: Option<String>) {
        self.entries.push_back(LogEntry {
            at,
            level,
            message,
            actor,
        });
        while self.entries.len() > MAX_ENTRIES {
            self.entries.pop_front();
        }
    }

    /// Newest first, honouring the errors-only switch.
    pub fn shown(&self) -> Vec<LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !self.errors_only || e.level == LogLevel::Error)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level == LogLevel::Error)
            .count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(
    log: &mut Signal<ActivityLog>,
    level: LogLevel,
    message: &str,
    actor: Option<String>,
) {
    log.write().push(level, message, actor);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_newest_first_and_error_filter() {
        let mut log = ActivityLog::default();
        log.push_at(at(9, 0), LogLevel::Success, "Signed in".into(), Some("Ana".into()));
        log.push_at(at(9, 5), LogLevel::Error, "Failed to load appointments".into(), None);
        log.push_at(at(9, 6), LogLevel::Info, "Signed out".into(), None);

        let shown = log.shown();
        assert_eq!(shown[0].message, "Signed out");
        assert_eq!(shown[2].actor.as_deref(), Some("Ana"));
        assert_eq!(log.error_count(), 1);

        log.errors_only = true;
        let shown = log.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].at, at(9, 5));
    }

    #[test]
    fn test_oldest_entries_are_dropped() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 5 {
            log.push_at(at(8, 0), LogLevel::Info, format!("event {i}"), None);
        }
        assert_eq!(log.len(), MAX_ENTRIES);
        assert_eq!(log.shown().last().map(|e| e.message.clone()), Some("event 5".to_string()));
        log.clear();
        assert!(log.is_empty());
    }
}
