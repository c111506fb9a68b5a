//! Funding progress and panel state.

use log::warn;

/// Percentage of the goal reached: `raised / needed * 100`.
///
/// A zero goal yields `0.0` instead of NaN or infinity. Results outside
/// `[0, 100]` are returned unchanged.
pub fn progress_percent(raised: f64, needed: f64) -> f64 {
    if needed == 0.0 {
        warn!("Funding goal reads as zero; reporting 0% progress");
        return 0.0;
    }
    (raised / needed) * 100.0
}

/// One consistent pair of chain reads and the progress derived from them.
///
/// Both amounts are the raw integers returned by the contract. No decimal
/// scaling is applied to either, although the panel labels them as ETH.
/// Whether the contract stores wei or whole ETH for the goal is unresolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundingSnapshot {
    pub funds_raised: f64,
    pub funds_needed: f64,
    pub progress_percent: f64,
}

impl FundingSnapshot {
    pub fn new(funds_raised: f64, funds_needed: f64) -> Self {
        Self {
            funds_raised,
            funds_needed,
            progress_percent: progress_percent(funds_raised, funds_needed),
        }
    }
}

/// Transient state behind the funding panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FundingState {
    /// Raw text of the amount field, unvalidated
    pub amount_input: String,
    pub funds_raised: f64,
    pub funds_needed: f64,
    pub progress_percent: f64,
}

impl Default for FundingState {
    fn default() -> Self {
        Self {
            amount_input: String::new(),
            funds_raised: 0.0,
            funds_needed: 1.0,
            progress_percent: 0.0,
        }
    }
}

impl FundingState {
    /// Replace all chain-derived fields at once. The amount field is kept.
    pub fn apply(&mut self, snapshot: FundingSnapshot) {
        self.funds_raised = snapshot.funds_raised;
        self.funds_needed = snapshot.funds_needed;
        self.progress_percent = snapshot.progress_percent;
    }

    pub fn with_snapshot(mut self, snapshot: FundingSnapshot) -> Self {
        self.apply(snapshot);
        self
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount_input = amount.into();
        self
    }

    pub fn clear_amount(&mut self) {
        self.amount_input.clear();
    }
}
