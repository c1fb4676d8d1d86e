use super::numeric::{money, tenths};
use super::types::{
    BudgetSplitInput, BudgetSplitResult, CategoryAmount, DebtToIncomeInput, DebtToIncomeResult,
    RiskLevel,
};

/// Ceiling on total debt payments as a share of gross income.
const TARGET_DTI: f64 = 0.36;

pub fn run_budget_split(input: &BudgetSplitInput) -> BudgetSplitResult {
    let factor = input.pay_frequency.per_period_factor();
    let share = |pct: f64| money(input.take_home_pay * pct / 100.0 * factor);

    let needs_amount = share(input.needs_percent);
    let wants_amount = share(input.wants_percent);
    let savings_amount = share(input.savings_percent);

    BudgetSplitResult {
        needs_amount,
        wants_amount,
        savings_amount,
        total_percent: tenths(input.needs_percent + input.wants_percent + input.savings_percent),
        timeline: vec![
            CategoryAmount::new("Needs", needs_amount),
            CategoryAmount::new("Wants", wants_amount),
            CategoryAmount::new("Savings", savings_amount),
        ],
    }
}

pub fn run_debt_to_income(input: &DebtToIncomeInput) -> DebtToIncomeResult {
    let income = input.gross_income;
    if income <= 0.0 {
        return DebtToIncomeResult {
            total_dti: 0.0,
            housing_dti: 0.0,
            risk_level: RiskLevel::NoIncome,
            max_additional_debt: 0.0,
            timeline: Vec::new(),
        };
    }

    let payments = [
        ("Housing", input.housing_payment),
        ("Car Payments", input.car_payments),
        ("Credit Cards", input.credit_cards),
        ("Student Loans", input.student_loans),
        ("Other Debts", input.other_debts),
    ];
    let total_payments: f64 = payments.iter().map(|(_, amount)| amount).sum();
    let total_dti = total_payments / income * 100.0;

    DebtToIncomeResult {
        total_dti: tenths(total_dti),
        housing_dti: tenths(input.housing_payment / income * 100.0),
        risk_level: RiskLevel::from_ratio(total_dti),
        max_additional_debt: money((income * TARGET_DTI - total_payments).max(0.0)),
        timeline: payments
            .iter()
            .filter(|(_, amount)| *amount > 0.0)
            .map(|(category, amount)| CategoryAmount::new(category, money(*amount)))
            .collect(),
    }
}
