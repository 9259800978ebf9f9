use super::channel::Reading;
use super::sensor::Warning;
use std::sync::{Arc, Mutex, PoisonError};

/// Where readings, warnings and lifecycle banners are displayed.
pub trait Console: Send {
    fn reading(&mut self, reading: &Reading);
    fn warning(&mut self, warning: &Warning);
    fn banner(&mut self, text: &str);
}

/// Line-oriented output on standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stdout;

impl Console for Stdout {
    fn reading(&mut self, reading: &Reading) {
        println!("Sensor: {} Value: {}", reading.sensor_name, reading.value)
    }

    fn warning(&mut self, warning: &Warning) {
        println!("[WARNING] {warning}")
    }

    fn banner(&mut self, text: &str) {
        println!("{text}")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Line {
    Reading(Reading),
    Warning(Warning),
    Banner(String),
}

/// Records every displayed line in order. Clones share the same record.
#[derive(Clone, Debug, Default)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<Line>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<Line> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn readings(&self) -> Vec<Reading> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                Line::Reading(reading) => Some(reading),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<Warning> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                Line::Warning(warning) => Some(warning),
                _ => None,
            })
            .collect()
    }

    fn record(&self, line: Line) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}

impl Console for MemoryConsole {
    fn reading(&mut self, reading: &Reading) {
        self.record(Line::Reading(reading.clone()));
    }

    fn warning(&mut self, warning: &Warning) {
        self.record(Line::Warning(warning.clone()));
    }

    fn banner(&mut self, text: &str) {
        self.record(Line::Banner(text.to_owned()));
    }
}
