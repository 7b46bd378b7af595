#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use homeshell_core::{
    Alert, Clock, ConfirmPrompt, Dialogs, MemoryRecordStore, RecordStore, StoreError, StoreResult,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Dialog double answering confirmations from a script; unscripted prompts
/// are cancelled.
#[derive(Default)]
pub struct ScriptedDialogs {
    answers: VecDeque<bool>,
    pub prompts: Vec<ConfirmPrompt>,
    pub alerts: Vec<Alert>,
}

impl ScriptedDialogs {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn push_answer(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&mut self, prompt: ConfirmPrompt) -> bool {
        self.prompts.push(prompt);
        self.answers.pop_front().unwrap_or(false)
    }

    fn alert(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }
}

/// Clock frozen at one instant unless advanced.
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn at(year: i32, month: u32, day: u32) -> Self {
        Self {
            now: Cell::new(Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now.set(self.now.get() + Duration::seconds(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Memory store whose reads or writes can be switched to fail.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryRecordStore,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
    pub writes: RefCell<Vec<String>>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for FlakyStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(StoreError::Unavailable("read refused".to_string()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::Unavailable("write refused".to_string()));
        }
        self.writes.borrow_mut().push(key.to_string());
        self.inner.set(key, value)
    }
}
