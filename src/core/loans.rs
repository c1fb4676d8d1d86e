use chrono::NaiveDate;

use super::calendar::{months_after, on_cadence};
use super::numeric::{amortized_payment, money, percent};
use super::types::{
    CreditCardInput, CreditCardResult, CumulativeSavingsPoint, ExtraPaymentInput,
    ExtraPaymentResult, Horizon, MonthBalancePoint, RefinanceInput, RefinanceResult,
    UNREACHABLE_SENTINEL,
};

const REFINANCE_TIMELINE_MONTHS: f64 = 240.0;
const PAYOFF_MONTH_CAP: u32 = 600;
/// Longest baseline schedule simulated.
const BASELINE_MONTH_CAP: u32 = 6000;

pub fn run_refinance_breakeven(input: &RefinanceInput) -> RefinanceResult {
    let principal = input.current_balance;
    if principal <= 0.0 {
        return RefinanceResult {
            breakeven_months: Horizon::Reached(0),
            current_payment: 0.0,
            new_payment: 0.0,
            monthly_savings: 0.0,
            lifetime_interest_saved: 0.0,
            net_benefit: 0.0,
            timeline: Vec::new(),
        };
    }

    let current_payment =
        amortized_payment(principal, percent(input.current_apr), input.current_term_months);
    let new_payment = amortized_payment(principal, percent(input.new_apr), input.new_term_months);
    let monthly_savings = current_payment - new_payment;

    let current_interest = current_payment * input.current_term_months - principal;
    let new_interest = new_payment * input.new_term_months - principal;
    let lifetime_interest_saved = current_interest - new_interest;
    let net_benefit = lifetime_interest_saved - input.closing_costs;

    let breakeven_months = if monthly_savings > 0.0 {
        let months = (input.closing_costs / monthly_savings).ceil().max(0.0);
        if months < f64::from(UNREACHABLE_SENTINEL) {
            Horizon::Reached(months as u32)
        } else {
            Horizon::Unreachable
        }
    } else {
        Horizon::Unreachable
    };

    let horizon = input
        .current_term_months
        .max(input.new_term_months)
        .min(REFINANCE_TIMELINE_MONTHS);
    let mut timeline = Vec::new();
    if horizon >= 0.0 {
        let mut cumulative = -input.closing_costs;
        for month in 0..=horizon.floor() as u32 {
            if month > 0 {
                cumulative += monthly_savings;
            }
            if on_cadence(month, 24, 6) {
                timeline.push(CumulativeSavingsPoint {
                    month,
                    cumulative_savings: money(cumulative),
                });
            }
        }
    }

    RefinanceResult {
        breakeven_months,
        current_payment: money(current_payment),
        new_payment: money(new_payment),
        monthly_savings: money(monthly_savings),
        lifetime_interest_saved: money(lifetime_interest_saved),
        net_benefit: money(net_benefit),
        timeline,
    }
}

/// Runs the loan's original schedule against one carrying extra principal
/// and reports the months and interest the extra saves.
pub fn run_extra_payment(input: &ExtraPaymentInput, as_of: NaiveDate) -> ExtraPaymentResult {
    let principal = input.loan_balance;
    let term = input.remaining_months.floor();
    if principal <= 0.0 || term < 1.0 {
        return ExtraPaymentResult {
            months_saved: 0,
            interest_saved: 0.0,
            original_payment: 0.0,
            new_payoff_date: as_of,
            total_savings: 0.0,
            timeline: Vec::new(),
        };
    }

    let annual_rate = percent(input.apr);
    let monthly_rate = annual_rate / 12.0;
    let payment = amortized_payment(principal, annual_rate, term);
    let baseline_months = term.min(f64::from(BASELINE_MONTH_CAP)) as u32;

    let mut baseline_balance = principal;
    let mut baseline_interest = 0.0;
    for _ in 1..=baseline_months {
        let interest = baseline_balance * monthly_rate;
        baseline_balance -= payment - interest;
        baseline_interest += interest;
        if baseline_balance <= 0.0 {
            break;
        }
    }

    let mut balance = principal;
    let mut interest_paid = 0.0;
    let mut month = 0;
    let mut timeline = Vec::new();
    while balance > 0.0 && month < PAYOFF_MONTH_CAP {
        month += 1;
        let interest = balance * monthly_rate;
        let principal_paid = (payment - interest
            + input.payment_type.extra_for_month(month, input.extra_payment))
        .min(balance);
        balance -= principal_paid;
        interest_paid += interest;

        if on_cadence(month, 12, 6) {
            timeline.push(MonthBalancePoint {
                month,
                balance: money(balance.max(0.0)),
            });
        }
    }

    let interest_saved = money((baseline_interest - interest_paid).max(0.0));
    ExtraPaymentResult {
        months_saved: (term as u32).saturating_sub(month),
        interest_saved,
        original_payment: money(payment),
        new_payoff_date: months_after(as_of, month),
        total_savings: interest_saved,
        timeline,
    }
}

pub fn run_credit_card_minimum(input: &CreditCardInput, as_of: NaiveDate) -> CreditCardResult {
    let opening = input.balance;
    if opening <= 0.0 {
        return CreditCardResult {
            months_to_payoff: 0,
            paid_off: true,
            total_interest: 0.0,
            total_paid: 0.0,
            payoff_date: as_of,
            timeline: Vec::new(),
        };
    }

    let monthly_rate = percent(input.apr) / 12.0;
    let minimum_rate = percent(input.minimum_percent);
    let mut balance = opening;
    let mut total_interest = 0.0;
    let mut month = 0;
    let mut timeline = Vec::new();

    while balance > 0.0 && month < PAYOFF_MONTH_CAP {
        month += 1;
        // Minimum is assessed on the balance after this month's interest.
        let interest = balance * monthly_rate;
        balance += interest;
        total_interest += interest;

        let payment = input
            .minimum_type
            .minimum_payment(balance, minimum_rate, input.minimum_fixed)
            .min(balance);
        balance -= payment;

        if on_cadence(month, 12, 6) || balance <= 0.0 {
            timeline.push(MonthBalancePoint {
                month,
                balance: money(balance.max(0.0)),
            });
        }
    }

    CreditCardResult {
        months_to_payoff: month,
        paid_off: balance <= 0.0,
        total_interest: money(total_interest),
        total_paid: money(opening + total_interest),
        payoff_date: months_after(as_of, month),
        timeline,
    }
}
