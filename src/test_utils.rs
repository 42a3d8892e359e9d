use crate::client::Fetcher;
use crate::model::Item;
use async_trait::async_trait;
use log::{Level, Log, Metadata, Record};
use simple_error::{SimpleError, SimpleResult};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::time::Instant;

/// Logger that keeps every record it sees.
#[derive(Default)]
pub struct Capture {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Capture {
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().expect("capture poisoned").clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|(_, line)| line.contains(needle))
    }
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines
            .lock()
            .expect("capture poisoned")
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Fetcher that plays back queued outcomes, then keeps failing with `fallback`.
pub struct Scripted {
    outcomes: Mutex<VecDeque<Result<Vec<Item>, String>>>,
    fallback: String,
    calls: Mutex<Vec<Instant>>,
}

impl Scripted {
    pub fn new(outcomes: Vec<Result<Vec<Item>, String>>) -> Self {
        Scripted {
            outcomes: Mutex::new(outcomes.into()),
            fallback: "API returned status code 503".to_string(),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn failing(message: &str) -> Self {
        Scripted {
            fallback: message.to_string(),
            ..Scripted::new(vec![])
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls poisoned").len()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().expect("calls poisoned").clone()
    }
}

#[async_trait]
impl Fetcher for Scripted {
    async fn fetch(&self) -> SimpleResult<Vec<Item>> {
        self.calls.lock().expect("calls poisoned").push(Instant::now());
        let next = self.outcomes.lock().expect("outcomes poisoned").pop_front();
        match next {
            Some(Ok(items)) => Ok(items),
            Some(Err(msg)) => Err(SimpleError::new(msg)),
            None => Err(SimpleError::new(self.fallback.clone())),
        }
    }
}

/// Fetcher whose request never completes.
pub struct Hang;

#[async_trait]
impl Fetcher for Hang {
    async fn fetch(&self) -> SimpleResult<Vec<Item>> {
        std::future::pending().await
    }
}

pub fn item(id: i64, title: &str) -> Item {
    Item {
        user_id: 1,
        id,
        title: title.to_string(),
        body: format!("body {}", id),
    }
}
