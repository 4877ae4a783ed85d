use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::domain::market_data::Asset;

/// Direction of a binary-option style signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum SignalDirection {
    #[strum(serialize = "CALL")]
    #[serde(rename = "CALL")]
    Call,
    #[strum(serialize = "PUT")]
    #[serde(rename = "PUT")]
    Put,
}

/// Settled outcome of a signal, when known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalOutcome {
    #[strum(serialize = "win")]
    Win,
    #[strum(serialize = "loss")]
    Loss,
}

/// Domain entity - freshly emitted signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub direction: SignalDirection,
    pub asset: Asset,
    /// Percent, 70..=99
    pub confidence: u8,
    pub estimated_profit: f64,
}

/// One row of the signal history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub time: NaiveTime,
    pub direction: SignalDirection,
    pub asset: Asset,
    pub result: Option<SignalOutcome>,
    pub profit: Option<f64>,
}

impl SignalRecord {
    pub fn from_signal(signal: &Signal, time: NaiveTime) -> Self {
        Self {
            time,
            direction: signal.direction,
            asset: signal.asset.clone(),
            result: None,
            profit: None,
        }
    }

    /// `HH:MM:SS`, as shown in the history panel
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}

/// Bounded history, newest record first
#[derive(Debug, Clone, PartialEq)]
pub struct SignalHistory {
    records: VecDeque<SignalRecord>,
    capacity: usize,
}

impl SignalHistory {
    pub fn new(capacity: usize) -> Self {
        Self { records: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, record: SignalRecord) {
        if self.capacity == 0 {
            return;
        }
        self.records.push_front(record);
        self.records.truncate(self.capacity);
    }

    pub fn latest(&self) -> Option<&SignalRecord> {
        self.records.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignalRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Settle the record at `index` (0 = newest)
    pub fn settle(&mut self, index: usize, outcome: SignalOutcome, profit: f64) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.result = Some(outcome);
                record.profit = Some(profit);
                true
            }
            None => false,
        }
    }

    /// Share of settled records that won, if any are settled
    pub fn win_rate(&self) -> Option<f64> {
        let settled: Vec<_> = self.records.iter().filter_map(|r| r.result).collect();
        if settled.is_empty() {
            return None;
        }
        let wins = settled.iter().filter(|o| **o == SignalOutcome::Win).count();
        Some(wins as f64 / settled.len() as f64)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
