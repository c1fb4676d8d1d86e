use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::allocation::{run_budget_split, run_debt_to_income};
use super::debt::run_debt_payoff;
use super::growth::{
    run_compound_interest, run_emergency_fund, run_goal_timeline, run_savings_rate,
};
use super::loans::{run_credit_card_minimum, run_extra_payment, run_refinance_breakeven};
use crate::error::{FincalcError, Result};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Calculator {
    CompoundInterest,
    DebtPayoff,
    EmergencyFund,
    SavingsRate,
    GoalTimeline,
    RefinanceBreakeven,
    BudgetSplitter,
    ExtraPayment,
    CreditCardMinimum,
    DebtToIncome,
}

impl Calculator {
    pub const ALL: [Calculator; 10] = [
        Calculator::CompoundInterest,
        Calculator::DebtPayoff,
        Calculator::EmergencyFund,
        Calculator::SavingsRate,
        Calculator::GoalTimeline,
        Calculator::RefinanceBreakeven,
        Calculator::BudgetSplitter,
        Calculator::ExtraPayment,
        Calculator::CreditCardMinimum,
        Calculator::DebtToIncome,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Calculator::CompoundInterest => "compound-interest",
            Calculator::DebtPayoff => "debt-payoff",
            Calculator::EmergencyFund => "emergency-fund",
            Calculator::SavingsRate => "savings-rate",
            Calculator::GoalTimeline => "goal-timeline",
            Calculator::RefinanceBreakeven => "refinance-breakeven",
            Calculator::BudgetSplitter => "budget-splitter",
            Calculator::ExtraPayment => "extra-payment",
            Calculator::CreditCardMinimum => "credit-card-minimum",
            Calculator::DebtToIncome => "debt-to-income",
        }
    }

    /// Registry name used by older front-ends.
    pub fn legacy_name(self) -> &'static str {
        match self {
            Calculator::CompoundInterest => "computeCompoundInterest",
            Calculator::DebtPayoff => "computeDebtPayoff",
            Calculator::EmergencyFund => "computeEmergencyFund",
            Calculator::SavingsRate => "computeSavingsRate",
            Calculator::GoalTimeline => "computeGoalTimeline",
            Calculator::RefinanceBreakeven => "computeRefinanceBreakeven",
            Calculator::BudgetSplitter => "computeBudgetSplitter",
            Calculator::ExtraPayment => "computeExtraPayment",
            Calculator::CreditCardMinimum => "computeCreditCardMinimum",
            Calculator::DebtToIncome => "computeDebtToIncome",
        }
    }

    /// Runs this calculator over a loosely-typed input record.
    ///
    /// Never fails on the input itself: missing or malformed fields fall
    /// back to their defaults. Errors only surface from serializing the
    /// result.
    pub fn compute(self, input: &Value, as_of: NaiveDate) -> Result<Value> {
        debug!(calculator = self.id(), %as_of, "running calculation");
        match self {
            Calculator::CompoundInterest => {
                to_record(run_compound_interest(&parse_input(self, input), as_of))
            }
            Calculator::DebtPayoff => to_record(run_debt_payoff(&parse_input(self, input), as_of)),
            Calculator::EmergencyFund => to_record(run_emergency_fund(&parse_input(self, input))),
            Calculator::SavingsRate => to_record(run_savings_rate(&parse_input(self, input))),
            Calculator::GoalTimeline => {
                to_record(run_goal_timeline(&parse_input(self, input), as_of))
            }
            Calculator::RefinanceBreakeven => {
                to_record(run_refinance_breakeven(&parse_input(self, input)))
            }
            Calculator::BudgetSplitter => to_record(run_budget_split(&parse_input(self, input))),
            Calculator::ExtraPayment => {
                to_record(run_extra_payment(&parse_input(self, input), as_of))
            }
            Calculator::CreditCardMinimum => {
                to_record(run_credit_card_minimum(&parse_input(self, input), as_of))
            }
            Calculator::DebtToIncome => to_record(run_debt_to_income(&parse_input(self, input))),
        }
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Calculator {
    type Err = FincalcError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Calculator::ALL
            .into_iter()
            .find(|calc| {
                calc.id().eq_ignore_ascii_case(wanted) || calc.legacy_name() == wanted
            })
            .ok_or_else(|| FincalcError::UnknownCalculator(wanted.to_string()))
    }
}

fn parse_input<T: DeserializeOwned + Default>(calculator: Calculator, input: &Value) -> T {
    if !input.is_object() {
        if !input.is_null() {
            warn!(calculator = calculator.id(), "input record is not an object; using defaults");
        }
        return T::default();
    }
    serde_json::from_value(input.clone()).unwrap_or_else(|err| {
        warn!(calculator = calculator.id(), %err, "input record rejected; using defaults");
        T::default()
    })
}

fn to_record<R: Serialize>(result: R) -> Result<Value> {
    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};
    use serde_json::json;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
    }

    #[test]
    fn ids_and_legacy_names_round_trip() {
        for calc in Calculator::ALL {
            assert_eq!(calc.id().parse::<Calculator>().expect("id parses"), calc);
            assert_eq!(calc.legacy_name().parse::<Calculator>().expect("legacy parses"), calc);
        }
        assert!(matches!(
            "mortgage".parse::<Calculator>(),
            Err(FincalcError::UnknownCalculator(name)) if name == "mortgage"
        ));
    }

    #[test]
    fn every_calculator_accepts_an_empty_record() {
        for calc in Calculator::ALL {
            let output = calc.compute(&json!({}), as_of()).expect("computes");
            assert!(output.is_object(), "{calc} should return a record");
            assert!(output.get("timeline").is_some(), "{calc} should expose a timeline");
        }
    }

    #[test]
    fn every_calculator_tolerates_non_object_input() {
        for calc in Calculator::ALL {
            for input in [json!(null), json!([1, 2, 3]), json!("text"), json!(42)] {
                assert!(calc.compute(&input, as_of()).is_ok());
            }
        }
    }

    #[test]
    fn compute_uses_wire_field_names() {
        let output = Calculator::CompoundInterest
            .compute(
                &json!({ "principal": "1000", "contrib": 100, "rate": 5, "years": 2, "compound": "annual" }),
                as_of(),
            )
            .expect("computes");
        assert!(output["finalBalance"].is_number());
        assert_eq!(output["timeline"][0]["year"], json!(1));
        assert_eq!(output["timeline"][1]["date"], json!("2027-01-01"));

        let output = Calculator::SavingsRate
            .compute(&json!({ "netIncome": 5000, "monthlyExpenses": 5000, "withdrawalRate": 4 }), as_of())
            .expect("computes");
        assert_eq!(output["yearsToFI"], json!(999));

        let output = Calculator::DebtToIncome
            .compute(&json!({ "grossIncome": 6000, "housingPayment": 1500, "otherDebts": 500 }), as_of())
            .expect("computes");
        assert_eq!(output["totalDTI"], json!(33.3));
        assert_eq!(output["riskLevel"], json!("Good - Low Risk"));

        let output = Calculator::DebtPayoff
            .compute(&json!({ "debts": [] }), as_of())
            .expect("computes");
        assert_eq!(output["debtFreeDate"], Value::Null);
        assert_eq!(output["months"], json!(0));
    }

    #[test]
    fn compute_is_idempotent() {
        let input = json!({
            "strategy": "avalanche",
            "extra": 150,
            "debts": [
                { "name": "Card", "balance": 4200, "apr": 22.9, "min": 95 },
                { "name": "Car", "balance": 11800, "apr": 5.4, "min": 310 }
            ]
        });
        let first = Calculator::DebtPayoff.compute(&input, as_of()).expect("computes");
        let second = Calculator::DebtPayoff.compute(&input, as_of()).expect("computes");
        assert_eq!(
            serde_json::to_string(&first).expect("serializes"),
            serde_json::to_string(&second).expect("serializes")
        );
    }

    fn numbers_in(value: &Value, out: &mut Vec<f64>) {
        match value {
            Value::Number(n) => out.extend(n.as_f64()),
            Value::Array(items) => items.iter().for_each(|item| numbers_in(item, out)),
            Value::Object(fields) => fields.values().for_each(|item| numbers_in(item, out)),
            _ => {}
        }
    }

    fn has_at_most_two_decimals(value: f64) -> bool {
        let cents = value * 100.0;
        (cents - cents.round()).abs() <= 1e-4
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(24))]

        #[test]
        fn prop_result_scalars_have_at_most_two_decimals(
            amount in 1u32..100_000,
            monthly in 0u32..3_000,
            rate_bp in 0u32..1_200,
            years in 1u32..40,
            term in 1u32..360,
        ) {
            let amount = f64::from(amount);
            let monthly = f64::from(monthly);
            let rate = f64::from(rate_bp) / 100.0;
            let records = [
                (Calculator::CompoundInterest, json!({
                    "principal": amount, "contrib": monthly, "rate": rate,
                    "years": years, "compound": "daily"
                })),
                (Calculator::DebtPayoff, json!({
                    "strategy": "avalanche", "extra": monthly,
                    "debts": [
                        { "balance": amount, "apr": rate, "min": amount * rate / 1_200.0 + 60.0 },
                        { "balance": amount / 3.0, "apr": rate / 2.0, "min": amount * rate / 7_200.0 + 40.0 }
                    ]
                })),
                (Calculator::EmergencyFund, json!({
                    "monthlyExpenses": monthly, "monthsBuffer": 6, "currentSaved": amount / 7.0,
                    "monthlySavings": monthly / 3.0, "interestRate": rate
                })),
                (Calculator::SavingsRate, json!({
                    "netIncome": monthly * 2.0, "monthlyExpenses": monthly, "currentInvestments": amount,
                    "annualReturn": rate, "withdrawalRate": 4
                })),
                (Calculator::GoalTimeline, json!({
                    "targetAmount": amount * 3.0, "startAmount": amount / 9.0,
                    "monthlyContribution": monthly, "annualReturn": rate
                })),
                (Calculator::RefinanceBreakeven, json!({
                    "currentBalance": amount, "currentAPR": rate + 1.0, "currentTermMonths": term,
                    "newAPR": rate, "newTermMonths": term, "closingCosts": monthly
                })),
                (Calculator::BudgetSplitter, json!({
                    "takeHomePay": amount / 13.0, "needsPercent": 50, "wantsPercent": 30,
                    "savingsPercent": 20, "payFrequency": "biweekly"
                })),
                (Calculator::ExtraPayment, json!({
                    "loanBalance": amount, "apr": rate, "remainingMonths": term,
                    "extraPayment": monthly / 5.0, "paymentType": "annual"
                })),
                (Calculator::CreditCardMinimum, json!({
                    "balance": amount / 10.0, "apr": rate, "minimumType": "percent",
                    "minimumPercent": 3, "minimumFixed": 25
                })),
                (Calculator::DebtToIncome, json!({
                    "grossIncome": amount / 11.0, "housingPayment": monthly / 3.0, "carPayments": 312.5
                })),
            ];
            for (calc, record) in records {
                let output = calc.compute(&record, as_of()).expect("computes");
                let mut numbers = Vec::new();
                numbers_in(&output, &mut numbers);
                for value in numbers {
                    prop_assert!(
                        has_at_most_two_decimals(value),
                        "{} reported {} with more than two decimals",
                        calc,
                        value
                    );
                }
            }
        }
    }
}
