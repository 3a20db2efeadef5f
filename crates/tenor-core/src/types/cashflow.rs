//! Cash flow schedule for flat-rate analytics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A single cash flow at a time measured in years from valuation.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::CashFlow;
///
/// let cf = CashFlow::new(0.5, 2.5);
/// assert_eq!(cf.time(), 0.5);
/// assert_eq!(cf.amount(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Time to payment in years
    time: f64,
    /// Cash flow amount
    amount: f64,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(time: f64, amount: f64) -> Self {
        Self { time, amount }
    }

    /// Returns the payment time in years.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the cash flow amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.4}y: {:.6}", self.time, self.amount)
    }
}

impl From<(f64, f64)> for CashFlow {
    fn from((time, amount): (f64, f64)) -> Self {
        Self::new(time, amount)
    }
}

/// An ordered, immutable schedule of cash flows.
///
/// Validated on construction:
///
/// - every time and amount is finite
/// - every time is strictly positive
/// - times are strictly increasing
///
/// The empty schedule is allowed; it prices to zero.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::CashFlowSchedule;
///
/// let schedule = CashFlowSchedule::new(vec![1.0, 2.0, 3.0], vec![10.0, 10.0, 110.0]).unwrap();
/// assert_eq!(schedule.maturity(), Some(3.0));
/// assert_eq!(schedule.total(), 130.0);
///
/// assert!(CashFlowSchedule::new(vec![2.0, 1.0], vec![10.0, 110.0]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CashFlow>", into = "Vec<CashFlow>")]
pub struct CashFlowSchedule {
    /// Cash flows ordered by time
    cash_flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Creates a schedule from parallel slices of times and amounts.
    pub fn new(times: Vec<f64>, amounts: Vec<f64>) -> CoreResult<Self> {
        if times.len() != amounts.len() {
            return Err(CoreError::invalid_schedule(format!(
                "times and amounts must have same length ({} vs {})",
                times.len(),
                amounts.len()
            )));
        }

        let cash_flows = times
            .into_iter()
            .zip(amounts)
            .map(|(t, a)| CashFlow::new(t, a))
            .collect();

        Self::from_cash_flows(cash_flows)
    }

    /// Creates a schedule from already-paired cash flows.
    pub fn from_cash_flows(cash_flows: Vec<CashFlow>) -> CoreResult<Self> {
        let mut previous: Option<f64> = None;

        for (i, cf) in cash_flows.iter().enumerate() {
            if !cf.time.is_finite() || !cf.amount.is_finite() {
                return Err(CoreError::invalid_schedule(format!(
                    "cash flow {i} is not finite ({cf})"
                )));
            }
            if cf.time <= 0.0 {
                return Err(CoreError::invalid_schedule(format!(
                    "cash flow {i} has non-positive time {}",
                    cf.time
                )));
            }
            if let Some(prev) = previous {
                if cf.time <= prev {
                    return Err(CoreError::invalid_schedule(format!(
                        "times must be strictly increasing: {} follows {}",
                        cf.time, prev
                    )));
                }
            }
            previous = Some(cf.time);
        }

        Ok(Self { cash_flows })
    }

    /// Creates an empty schedule.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the cash flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// Returns true if there are no cash flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlow> {
        self.cash_flows.iter()
    }

    /// Returns the payment times.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.cash_flows.iter().map(|cf| cf.time).collect()
    }

    /// Returns the cash flow amounts.
    #[must_use]
    pub fn amounts(&self) -> Vec<f64> {
        self.cash_flows.iter().map(|cf| cf.amount).collect()
    }

    /// Returns the undiscounted sum of all cash flows.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cash_flows.iter().map(|cf| cf.amount).sum()
    }

    /// Returns the time of the last cash flow.
    #[must_use]
    pub fn maturity(&self) -> Option<f64> {
        self.cash_flows.last().map(|cf| cf.time)
    }

    /// Returns true if no flow is negative and at least one is positive.
    ///
    /// Price is strictly decreasing in the rate for such schedules.
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        self.cash_flows.iter().all(|cf| cf.amount >= 0.0)
            && self.cash_flows.iter().any(|cf| cf.amount > 0.0)
    }
}

impl TryFrom<Vec<CashFlow>> for CashFlowSchedule {
    type Error = CoreError;

    fn try_from(cash_flows: Vec<CashFlow>) -> CoreResult<Self> {
        Self::from_cash_flows(cash_flows)
    }
}

impl From<CashFlowSchedule> for Vec<CashFlow> {
    fn from(schedule: CashFlowSchedule) -> Self {
        schedule.cash_flows
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.iter()
    }
}

impl fmt::Display for CashFlowSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cf) in self.cash_flows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", cf.time, cf.amount)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_accessors() {
        let schedule =
            CashFlowSchedule::new(vec![1.0, 2.0, 3.0], vec![10.0, 10.0, 110.0]).unwrap();

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.times(), vec![1.0, 2.0, 3.0]);
        assert_eq!(schedule.amounts(), vec![10.0, 10.0, 110.0]);
        assert_eq!(schedule.total(), 130.0);
        assert_eq!(schedule.maturity(), Some(3.0));
        assert!(schedule.is_non_negative());
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = CashFlowSchedule::empty();
        assert!(schedule.is_empty());
        assert_eq!(schedule.maturity(), None);
        assert_eq!(schedule.total(), 0.0);
        assert!(!schedule.is_non_negative());

        let built = CashFlowSchedule::new(vec![], vec![]).unwrap();
        assert_eq!(built, schedule);
    }

    #[test]
    fn test_mismatched_lengths() {
        let result = CashFlowSchedule::new(vec![0.5, 1.0], vec![2.5]);
        assert!(matches!(result, Err(CoreError::InvalidSchedule { .. })));
    }

    #[test]
    fn test_unsorted_times_rejected() {
        let result = CashFlowSchedule::new(vec![1.0, 3.0, 2.0], vec![5.0, 5.0, 105.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_times_rejected() {
        let result = CashFlowSchedule::new(vec![1.0, 1.0], vec![5.0, 105.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_time_rejected() {
        assert!(CashFlowSchedule::new(vec![0.0, 1.0], vec![5.0, 105.0]).is_err());
        assert!(CashFlowSchedule::new(vec![-1.0], vec![100.0]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(CashFlowSchedule::new(vec![f64::NAN], vec![100.0]).is_err());
        assert!(CashFlowSchedule::new(vec![1.0], vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn test_mixed_signs_not_non_negative() {
        let schedule = CashFlowSchedule::new(vec![1.0, 2.0], vec![-100.0, 110.0]).unwrap();
        assert!(!schedule.is_non_negative());
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let schedule = CashFlowSchedule::new(vec![0.5, 1.0], vec![2.5, 102.5]).unwrap();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: CashFlowSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);

        let bad = r#"[{"time": 2.0, "amount": 1.0}, {"time": 1.0, "amount": 1.0}]"#;
        assert!(serde_json::from_str::<CashFlowSchedule>(bad).is_err());
    }

    #[test]
    fn test_display() {
        let schedule = CashFlowSchedule::new(vec![1.0, 2.0], vec![5.0, 105.0]).unwrap();
        assert_eq!(schedule.to_string(), "[(1, 5), (2, 105)]");
    }
}
