use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::first_fit;
use crate::types::{CuttingPattern, Solution, Status};
use crate::validate::{self, InvalidInput};

pub struct Solver {
    stock: Vec<f64>,
    required: Vec<f64>,
    min_quantities: Vec<f64>,
}

impl Solver {
    pub fn new(stock: Vec<f64>, required: Vec<f64>, min_quantities: Vec<f64>) -> Self {
        Self {
            stock,
            required,
            min_quantities,
        }
    }

    /// Validation failure aborts with no partial result; infeasible and
    /// internal-error outcomes come back as status values on the solution.
    pub fn solve(&self) -> Result<Solution, InvalidInput> {
        validate::validate(&self.stock, &self.required, &self.min_quantities)?;

        let solution = panic::catch_unwind(AssertUnwindSafe(|| self.run()))
            .unwrap_or_else(|payload| Solution::error(panic_message(payload.as_ref())));
        Ok(solution)
    }

    fn run(&self) -> Solution {
        // Quantities are validated whole numbers; demand bookkeeping is
        // integer so repeated decrements stay exact.
        let min_quantities: Vec<u32> = self.min_quantities.iter().map(|&q| q as u32).collect();

        let mut demand = min_quantities.clone();
        let patterns = first_fit::allocate(&self.stock, &self.required, &mut demand);

        // Feasibility is judged by recounting the produced cuts, not by the
        // allocator's own counters.
        let remaining = unmet_quantities(&patterns, &self.required, &min_quantities);
        if remaining.iter().any(|&r| r > 0) {
            let message = infeasible_message(&self.stock, &self.required, &remaining);
            return Solution::infeasible(message, remaining);
        }

        report(&self.stock, patterns, min_quantities.len())
    }
}

/// Cuts of each required size across all patterns, counted by value equality
/// on the length, subtracted from the minimums.
fn unmet_quantities(
    patterns: &[CuttingPattern],
    required: &[f64],
    min_quantities: &[u32],
) -> Vec<u32> {
    required
        .iter()
        .zip(min_quantities)
        .map(|(&size, &min)| {
            let cut = patterns
                .iter()
                .flat_map(|p| &p.cuts)
                .filter(|&&c| c == size)
                .count() as u64;
            u64::from(min).saturating_sub(cut) as u32
        })
        .collect()
}

fn infeasible_message(stock: &[f64], required: &[f64], remaining: &[u32]) -> String {
    let max_stock = stock.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    for (&size, &left) in required.iter().zip(remaining) {
        if left > 0 && size > max_stock {
            return format!(
                "required size {size} is larger than the largest stock length {max_stock}"
            );
        }
    }
    "could not meet all requirements with the given stock lengths".to_string()
}

fn report(stock: &[f64], patterns: Vec<CuttingPattern>, required_count: usize) -> Solution {
    let total_stock: f64 = stock.iter().sum();
    let total_used: f64 = patterns.iter().map(|p| p.used()).sum();
    let waste = total_stock - total_used;
    let efficiency = round2(total_used / total_stock * 100.0);

    Solution {
        status: Status::Optimal,
        message: None,
        patterns,
        total_stock,
        total_used,
        waste,
        efficiency,
        remaining_pieces: vec![0; required_count],
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "internal error".to_string()
    }
}
