use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Optimal,
    Infeasible,
    Error,
}

/// One stock piece and the cuts assigned to it, in the order they were made.
/// Waste stays derivable as `stock - sum(cuts)`; it is never folded into the
/// cut list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingPattern {
    pub stock: f64,
    pub cuts: Vec<f64>,
}

impl CuttingPattern {
    pub fn used(&self) -> f64 {
        self.cuts.iter().sum()
    }

    pub fn waste(&self) -> f64 {
        self.stock - self.used()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub status: Status,
    pub message: Option<String>,
    pub patterns: Vec<CuttingPattern>,
    pub total_stock: f64,
    pub total_used: f64,
    pub waste: f64,
    pub efficiency: f64,
    /// Unmet quantity per required size, aligned with the request. All zero
    /// when the status is optimal.
    pub remaining_pieces: Vec<u32>,
}

impl Solution {
    pub fn infeasible(message: String, remaining_pieces: Vec<u32>) -> Self {
        Self {
            status: Status::Infeasible,
            message: Some(message),
            patterns: vec![],
            total_stock: 0.0,
            total_used: 0.0,
            waste: 0.0,
            efficiency: 0.0,
            remaining_pieces,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: Status::Error,
            message: Some(message),
            patterns: vec![],
            total_stock: 0.0,
            total_used: 0.0,
            waste: 0.0,
            efficiency: 0.0,
            remaining_pieces: vec![],
        }
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
