use std::cmp::Ordering;

use chrono::NaiveDate;

use super::calendar::months_after;
use super::numeric::{money, percent};
use super::types::{
    DebtBalance, DebtPayoffInput, DebtPayoffResult, DebtScheduleEntry, PayoffStrategy,
    TotalBalancePoint,
};

/// Iteration cap, 300 years of months.
const SAFETY_LIMIT: u32 = 3600;
const HARD_STOP_MONTH: u32 = 6000;

#[derive(Debug, Clone)]
struct WorkingDebt {
    name: String,
    balance: f64,
    apr: f64,
    min: f64,
}

impl WorkingDebt {
    fn is_active(&self) -> bool {
        self.balance > 0.0
    }
}

fn compare(strategy: PayoffStrategy, a: &WorkingDebt, b: &WorkingDebt) -> Ordering {
    match strategy {
        PayoffStrategy::Snowball => a.balance.total_cmp(&b.balance),
        PayoffStrategy::Avalanche => b.apr.total_cmp(&a.apr),
    }
}

/// Indices of debts that still carry a balance, in payoff priority order.
/// Ties keep input order.
fn rank_active(debts: &[WorkingDebt], strategy: PayoffStrategy) -> Vec<usize> {
    let mut order: Vec<usize> = (0..debts.len()).filter(|&i| debts[i].is_active()).collect();
    order.sort_by(|&a, &b| compare(strategy, &debts[a], &debts[b]));
    order
}

fn accrue_interest(debts: &mut [WorkingDebt]) -> f64 {
    let mut accrued = 0.0;
    for debt in debts.iter_mut().filter(|d| d.is_active()) {
        let interest = debt.balance * percent(debt.apr) / 12.0;
        debt.balance += interest;
        accrued += interest;
    }
    accrued
}

/// Pays each ranked debt its minimum out of `pool`; returns what is left.
fn pay_minimums(debts: &mut [WorkingDebt], order: &[usize], mut pool: f64) -> f64 {
    for &index in order {
        let debt = &mut debts[index];
        if !debt.is_active() {
            continue;
        }
        let payment = debt.min.min(debt.balance).min(pool);
        debt.balance -= payment;
        pool -= payment;
    }
    pool
}

/// Greedy waterfall: the leftover pool clears the top-ranked debt before
/// moving on. Whatever survives every balance is dropped for the month.
fn roll_over(debts: &mut [WorkingDebt], strategy: PayoffStrategy, mut pool: f64) {
    let order = rank_active(debts, strategy);
    let mut cursor = 0;
    while pool > 0.0 && cursor < order.len() {
        let debt = &mut debts[order[cursor]];
        let payment = debt.balance.min(pool);
        debt.balance -= payment;
        pool -= payment;
        if !debt.is_active() {
            cursor += 1;
        }
    }
}

fn snapshot(month: u32, debts: &[WorkingDebt]) -> DebtScheduleEntry {
    DebtScheduleEntry {
        month,
        debts: debts
            .iter()
            .map(|d| DebtBalance {
                name: d.name.clone(),
                balance: money(d.balance),
            })
            .collect(),
        total_balance: money(debts.iter().map(|d| d.balance).sum()),
    }
}

pub fn run_debt_payoff(input: &DebtPayoffInput, as_of: NaiveDate) -> DebtPayoffResult {
    let strategy = input.strategy;
    let extra = input.extra.max(0.0);
    let mut debts: Vec<WorkingDebt> = input
        .debts
        .iter()
        .map(|d| WorkingDebt {
            name: d.name.clone(),
            balance: d.balance.max(0.0),
            apr: d.apr.max(0.0),
            min: d.min.max(0.0),
        })
        .filter(WorkingDebt::is_active)
        .collect();

    if debts.is_empty() {
        return DebtPayoffResult::default();
    }

    let mut schedule = Vec::new();
    let mut month = 0;
    let mut total_interest = 0.0;

    while debts.iter().any(WorkingDebt::is_active) && month < SAFETY_LIMIT {
        month += 1;
        total_interest += accrue_interest(&mut debts);

        let order = rank_active(&debts, strategy);
        let pool = extra
            + order
                .iter()
                .map(|&i| debts[i].min.min(debts[i].balance))
                .sum::<f64>();
        let leftover = pay_minimums(&mut debts, &order, pool);
        roll_over(&mut debts, strategy, leftover);

        schedule.push(snapshot(month, &debts));

        if month > HARD_STOP_MONTH {
            break;
        }
    }

    let timeline = schedule
        .iter()
        .map(|entry| TotalBalancePoint {
            month: entry.month,
            total_balance: entry.total_balance,
        })
        .collect();

    DebtPayoffResult {
        months: month,
        total_interest: money(total_interest),
        debt_free_date: Some(months_after(as_of, month)),
        schedule,
        timeline,
    }
}
