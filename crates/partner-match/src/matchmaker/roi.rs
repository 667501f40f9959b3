//! Partnership ROI estimator.
//!
//! A deterministic projection over seven numeric inputs. Monthly figures
//! are constant; the schedule accumulates them over the contract term.

use serde::{Deserialize, Serialize};

/// Estimator inputs. Margin is a percentage, costs and deal size are
/// currency amounts. MDF allocation is collected for reporting but does
/// not enter the projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiInputs {
    pub average_deal_size: f64,
    pub partner_margin: f64,
    pub monthly_deal_volume: f64,
    pub enablement_cost: f64,
    pub onboarding_cost: f64,
    pub mdf_allocation: f64,
    pub contract_duration_months: u32,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            average_deal_size: 10_000.0,
            partner_margin: 20.0,
            monthly_deal_volume: 5.0,
            enablement_cost: 5_000.0,
            onboarding_cost: 2_000.0,
            mdf_allocation: 10_000.0,
            contract_duration_months: 12,
        }
    }
}

/// One row of the cumulative projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiMonth {
    pub month: u32,
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
}

/// Projection summary plus the month-by-month schedule. Headline figures
/// are rounded to cents; the schedule keeps raw accumulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiProjection {
    pub monthly_revenue: f64,
    pub monthly_costs: f64,
    pub monthly_profit: f64,
    pub break_even_months: u32,
    pub roi_12_months: f64,
    pub schedule: Vec<RoiMonth>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoiError {
    #[error("contract duration must be at least one month")]
    InvalidDuration,
    #[error("{field} must be a finite, non-negative amount")]
    InvalidInput { field: &'static str },
    #[error("monthly profit of {monthly_profit:.2} never recovers the initial costs")]
    BreakEvenUndefined { monthly_profit: f64 },
}

pub fn estimate(inputs: &RoiInputs) -> Result<RoiProjection, RoiError> {
    validate(inputs)?;

    let duration = inputs.contract_duration_months;
    let initial_costs = inputs.enablement_cost + inputs.onboarding_cost;

    let monthly_revenue =
        inputs.average_deal_size * inputs.partner_margin / 100.0 * inputs.monthly_deal_volume;
    let monthly_costs = initial_costs / f64::from(duration);
    let monthly_profit = monthly_revenue - monthly_costs;

    if monthly_profit <= 0.0 {
        return Err(RoiError::BreakEvenUndefined { monthly_profit });
    }

    let break_even_months = (initial_costs / monthly_profit).ceil() as u32;

    let twelve_month_revenue = monthly_revenue * 12.0;
    let twelve_month_costs = initial_costs + monthly_costs * 12.0;
    let roi_12_months = (twelve_month_revenue - twelve_month_costs) / twelve_month_costs * 100.0;

    let mut schedule = Vec::with_capacity(duration as usize);
    let mut cumulative_revenue = 0.0;
    let mut cumulative_costs = initial_costs;
    for month in 1..=duration {
        cumulative_revenue += monthly_revenue;
        cumulative_costs += monthly_costs;
        schedule.push(RoiMonth {
            month,
            revenue: cumulative_revenue,
            costs: cumulative_costs,
            profit: cumulative_revenue - cumulative_costs,
        });
    }

    Ok(RoiProjection {
        monthly_revenue: round_cents(monthly_revenue),
        monthly_costs: round_cents(monthly_costs),
        monthly_profit: round_cents(monthly_profit),
        break_even_months,
        roi_12_months: round_cents(roi_12_months),
        schedule,
    })
}

fn validate(inputs: &RoiInputs) -> Result<(), RoiError> {
    if inputs.contract_duration_months == 0 {
        return Err(RoiError::InvalidDuration);
    }

    let amounts = [
        ("average_deal_size", inputs.average_deal_size),
        ("partner_margin", inputs.partner_margin),
        ("monthly_deal_volume", inputs.monthly_deal_volume),
        ("enablement_cost", inputs.enablement_cost),
        ("onboarding_cost", inputs.onboarding_cost),
        ("mdf_allocation", inputs.mdf_allocation),
    ];
    for (field, amount) in amounts {
        if !amount.is_finite() || amount < 0.0 {
            return Err(RoiError::InvalidInput { field });
        }
    }

    Ok(())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
