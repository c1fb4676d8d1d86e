use chrono::NaiveDate;

use super::calendar::{months_after, on_cadence};
use super::numeric::{effective_monthly_rate, money, percent, tenths};
use super::types::{
    CompoundInterestInput, CompoundInterestResult, EmergencyBalancePoint, EmergencyFundInput,
    EmergencyFundResult, GoalTimelineInput, GoalTimelineResult, Horizon, MonthBalancePoint,
    PortfolioPoint, SavingsRateInput, SavingsRateResult, YearBalancePoint,
};

const MIN_GROWTH_YEARS: f64 = 1.0;
const MAX_GROWTH_YEARS: f64 = 100.0;
const EMERGENCY_MONTH_CAP: u32 = 600;
const FI_YEAR_CAP: u32 = 100;
const GOAL_MONTH_CAP: u32 = 1200;

/// Lump sum plus monthly contributions, compounded at the chosen frequency
/// and normalized to an equivalent monthly step.
pub fn run_compound_interest(
    input: &CompoundInterestInput,
    as_of: NaiveDate,
) -> CompoundInterestResult {
    let principal = input.principal;
    let years = input.years.clamp(MIN_GROWTH_YEARS, MAX_GROWTH_YEARS);
    let months = (years * 12.0).floor() as u32;
    let monthly_rate =
        effective_monthly_rate(percent(input.rate), input.compound.periods_per_year());

    let mut balance = principal;
    let mut total_contrib = 0.0;
    let mut timeline = Vec::with_capacity((months / 12) as usize);

    for month in 1..=months {
        balance += input.contrib;
        total_contrib += input.contrib;
        balance *= 1.0 + monthly_rate;

        if month % 12 == 0 {
            timeline.push(YearBalancePoint {
                year: month / 12,
                balance: money(balance),
                date: months_after(as_of, month),
            });
        }
    }

    let final_balance = money(balance);
    CompoundInterestResult {
        final_balance,
        total_contrib: money(total_contrib),
        total_growth: money(final_balance - principal - total_contrib),
        timeline,
    }
}

pub fn run_emergency_fund(input: &EmergencyFundInput) -> EmergencyFundResult {
    let target = input.monthly_expenses * input.months_buffer;
    let still_needed = (target - input.current_saved).max(0.0);
    let total_sinking_funds: f64 = input.categories.iter().map(|fund| fund.target).sum();
    let monthly_rate = percent(input.interest_rate) / 12.0;

    if still_needed <= 0.0 {
        return EmergencyFundResult {
            target_amount: money(target),
            still_needed: 0.0,
            months_to_goal: Horizon::Reached(0),
            total_sinking_funds: money(total_sinking_funds),
            timeline: vec![EmergencyBalancePoint {
                month: 0,
                emergency_balance: money(input.current_saved),
            }],
        };
    }

    let mut balance = input.current_saved;
    let mut month = 0;
    let mut timeline = Vec::new();

    while balance < target && month < EMERGENCY_MONTH_CAP {
        month += 1;
        balance += input.monthly_savings;
        if monthly_rate > 0.0 {
            balance *= 1.0 + monthly_rate;
        }
        if on_cadence(month, 12, 3) {
            timeline.push(EmergencyBalancePoint {
                month,
                emergency_balance: money(balance),
            });
        }
    }

    let months_to_goal = if input.monthly_savings > 0.0 && balance >= target {
        Horizon::Reached(month)
    } else {
        Horizon::Unreachable
    };

    EmergencyFundResult {
        target_amount: money(target),
        still_needed: money(still_needed),
        months_to_goal,
        total_sinking_funds: money(total_sinking_funds),
        timeline,
    }
}

/// Years until the portfolio covers annual expenses at the withdrawal rate.
pub fn run_savings_rate(input: &SavingsRateInput) -> SavingsRateResult {
    let monthly_savings = (input.net_income - input.monthly_expenses).max(0.0);
    let savings_rate = if input.net_income > 0.0 {
        monthly_savings / input.net_income * 100.0
    } else {
        0.0
    };
    let withdrawal_rate = percent(input.withdrawal_rate);
    let target = if withdrawal_rate > 0.0 {
        input.monthly_expenses * 12.0 / withdrawal_rate
    } else {
        0.0
    };
    let monthly_return = percent(input.annual_return) / 12.0;

    let mut portfolio = input.current_investments;
    if target > 0.0 && portfolio >= target {
        return SavingsRateResult {
            savings_rate: tenths(savings_rate),
            years_to_fi: Horizon::Reached(0),
            target_portfolio: money(target),
            monthly_savings: money(monthly_savings),
            timeline: vec![PortfolioPoint {
                year: 0,
                portfolio: money(portfolio),
            }],
        };
    }

    let mut year = 0;
    let mut timeline = Vec::new();
    while portfolio < target && year < FI_YEAR_CAP {
        for _ in 0..12 {
            portfolio += monthly_savings;
            if monthly_return > 0.0 {
                portfolio *= 1.0 + monthly_return;
            }
        }
        year += 1;
        timeline.push(PortfolioPoint {
            year,
            portfolio: money(portfolio),
        });
    }

    let years_to_fi = if monthly_savings > 0.0 && portfolio >= target {
        Horizon::Reached(year)
    } else {
        Horizon::Unreachable
    };

    SavingsRateResult {
        savings_rate: tenths(savings_rate),
        years_to_fi,
        target_portfolio: money(target),
        monthly_savings: money(monthly_savings),
        timeline,
    }
}

pub fn run_goal_timeline(input: &GoalTimelineInput, as_of: NaiveDate) -> GoalTimelineResult {
    let target = input.target_amount;
    let start = input.start_amount;

    if target <= 0.0 || start >= target {
        let timeline = if target > 0.0 {
            vec![MonthBalancePoint {
                month: 0,
                balance: money(start),
            }]
        } else {
            Vec::new()
        };
        return GoalTimelineResult {
            months_to_goal: 0,
            goal_reached: true,
            goal_date: as_of,
            total_contributions: 0.0,
            total_growth: 0.0,
            timeline,
        };
    }

    let monthly_return = percent(input.annual_return) / 12.0;
    let step_frequency = input.step_up_frequency.max(1.0);
    let mut contribution = input.monthly_contribution;
    let mut balance = start;
    let mut total_contributions = 0.0;
    let mut month = 0;
    let mut timeline = vec![MonthBalancePoint {
        month: 0,
        balance: money(balance),
    }];

    while balance < target && month < GOAL_MONTH_CAP {
        month += 1;
        if input.step_up_enabled && f64::from(month) % step_frequency == 0.0 {
            contribution += input.step_up_amount;
        }
        balance += contribution;
        total_contributions += contribution;
        if monthly_return > 0.0 {
            balance *= 1.0 + monthly_return;
        }
        if on_cadence(month, 12, 3) {
            timeline.push(MonthBalancePoint {
                month,
                balance: money(balance),
            });
        }
    }

    GoalTimelineResult {
        months_to_goal: month,
        goal_reached: balance >= target,
        goal_date: months_after(as_of, month),
        total_contributions: money(total_contributions),
        total_growth: money(balance - start - total_contributions).max(0.0),
        timeline,
    }
}
