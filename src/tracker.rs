//! One calculation request from start to finish.

use chrono::{Local, NaiveDate};

use crate::calculator;
use crate::error::Result;
use crate::models::{EmissionFactors, InputRecord, LogEntry};
use crate::report::Report;
use crate::store::LogStore;

/// Outcome of [`Tracker::evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Calculation {
    /// Nothing was submitted yet.
    Pending,
    Ready(Box<Report>),
}

/// Holds the factor table and the log for the lifetime of the program.
pub struct Tracker {
    factors: EmissionFactors,
    store: LogStore,
}

impl Tracker {
    pub fn new(factors: EmissionFactors, store: LogStore) -> Self {
        Self { factors, store }
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    /// Calculate and log `input` as of today.
    pub fn evaluate(&self, input: Option<InputRecord>) -> Result<Calculation> {
        self.evaluate_on(input, Local::now().date_naive())
    }

    /// Calculate `input`, build the report from the current history, then
    /// append the new total to the log dated `date`.
    pub fn evaluate_on(&self, input: Option<InputRecord>, date: NaiveDate) -> Result<Calculation> {
        let Some(input) = input else {
            return Ok(Calculation::Pending);
        };
        let report = self.report(&input)?;

        self.store.append(LogEntry {
            name: input.name.clone(),
            date,
            total_co2: report.breakdown.total,
            goal: input.goal,
        })?;

        Ok(Calculation::Ready(Box::new(report)))
    }

    /// Calculate `input` and build its report without touching the log.
    pub fn report(&self, input: &InputRecord) -> Result<Report> {
        input.validate()?;
        let breakdown = calculator::calculate(input, &self.factors)?;

        let history = if self.store.path().exists() {
            Some(self.store.load()?)
        } else {
            None
        };

        Ok(Report::build(input, breakdown, history.as_deref()))
    }
}
