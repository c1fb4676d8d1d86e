use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::numeric::{de_choice, de_flag, de_list, de_number, normalize_choice};

/// Wire value reported for a goal that cannot be reached.
pub const UNREACHABLE_SENTINEL: u32 = 999;

/// A duration that may never complete.
///
/// Serializes as a bare integer; `Unreachable` becomes
/// [`UNREACHABLE_SENTINEL`] so renderers that key off the number keep
/// working.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Horizon {
    Reached(u32),
    Unreachable,
}

impl Horizon {
    pub fn reached(self) -> Option<u32> {
        match self {
            Horizon::Reached(n) => Some(n),
            Horizon::Unreachable => None,
        }
    }

    pub fn as_wire(self) -> u32 {
        self.reached().unwrap_or(UNREACHABLE_SENTINEL)
    }
}

impl Serialize for Horizon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.as_wire())
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Compounding {
    Annual,
    Quarterly,
    #[default]
    Monthly,
    Daily,
}

impl Compounding {
    pub fn periods_per_year(self) -> f64 {
        match self {
            Compounding::Annual => 1.0,
            Compounding::Quarterly => 4.0,
            Compounding::Monthly => 12.0,
            Compounding::Daily => 365.0,
        }
    }
}

impl FromStr for Compounding {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "annual" | "annually" | "yearly" => Ok(Compounding::Annual),
            "quarterly" => Ok(Compounding::Quarterly),
            "monthly" => Ok(Compounding::Monthly),
            "" => Err(()),
            _ => Ok(Compounding::Daily),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PayoffStrategy {
    /// Smallest balance first.
    #[default]
    Snowball,
    /// Highest APR first.
    Avalanche,
}

impl FromStr for PayoffStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "snowball" => Ok(PayoffStrategy::Snowball),
            "" => Err(()),
            _ => Ok(PayoffStrategy::Avalanche),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ExtraPaymentSchedule {
    #[default]
    Monthly,
    Annual,
    OneTime,
    /// Unrecognised schedules apply no extra principal.
    Never,
}

impl ExtraPaymentSchedule {
    /// Extra principal applied in `month` (1-based).
    pub fn extra_for_month(self, month: u32, amount: f64) -> f64 {
        let applies = match self {
            ExtraPaymentSchedule::Monthly => true,
            ExtraPaymentSchedule::Annual => month % 12 == 0,
            ExtraPaymentSchedule::OneTime => month == 1,
            ExtraPaymentSchedule::Never => false,
        };
        if applies { amount } else { 0.0 }
    }
}

impl FromStr for ExtraPaymentSchedule {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "monthly" => Ok(ExtraPaymentSchedule::Monthly),
            "annual" | "annually" | "yearly" => Ok(ExtraPaymentSchedule::Annual),
            "onetime" | "one-time" | "once" => Ok(ExtraPaymentSchedule::OneTime),
            "" => Err(()),
            _ => Ok(ExtraPaymentSchedule::Never),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MinimumPaymentRule {
    /// Percent of the post-interest balance, never below the fixed floor.
    #[default]
    Percent,
    Fixed,
}

impl MinimumPaymentRule {
    pub fn minimum_payment(self, balance: f64, percent_rate: f64, fixed: f64) -> f64 {
        match self {
            MinimumPaymentRule::Percent => fixed.max(balance * percent_rate),
            MinimumPaymentRule::Fixed => fixed,
        }
    }
}

impl FromStr for MinimumPaymentRule {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "percent" | "percentage" => Ok(MinimumPaymentRule::Percent),
            "" => Err(()),
            _ => Ok(MinimumPaymentRule::Fixed),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PayFrequency {
    Weekly,
    Biweekly,
    #[default]
    Monthly,
}

const WEEKS_PER_MONTH: f64 = 52.0 / 12.0;
const BIWEEKS_PER_MONTH: f64 = 26.0 / 12.0;

impl PayFrequency {
    /// Converts a monthly amount to one pay period of this frequency.
    pub fn per_period_factor(self) -> f64 {
        match self {
            PayFrequency::Weekly => 1.0 / WEEKS_PER_MONTH,
            PayFrequency::Biweekly => 1.0 / BIWEEKS_PER_MONTH,
            PayFrequency::Monthly => 1.0,
        }
    }
}

impl FromStr for PayFrequency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "weekly" => Ok(PayFrequency::Weekly),
            "biweekly" | "bi-weekly" => Ok(PayFrequency::Biweekly),
            "monthly" => Ok(PayFrequency::Monthly),
            _ => Err(()),
        }
    }
}

fn de_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn de_debt_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = de_label(deserializer)?;
    Ok(if name.is_empty() {
        DEFAULT_DEBT_NAME.to_string()
    } else {
        name
    })
}

const DEFAULT_DEBT_NAME: &str = "Debt";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompoundInterestInput {
    #[serde(deserialize_with = "de_number")]
    pub principal: f64,
    #[serde(deserialize_with = "de_number")]
    pub contrib: f64,
    /// Annual rate, whole-number percent.
    #[serde(deserialize_with = "de_number")]
    pub rate: f64,
    #[serde(deserialize_with = "de_number")]
    pub years: f64,
    #[serde(deserialize_with = "de_choice")]
    pub compound: Compounding,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebtInput {
    #[serde(deserialize_with = "de_debt_name")]
    pub name: String,
    #[serde(deserialize_with = "de_number")]
    pub balance: f64,
    #[serde(deserialize_with = "de_number")]
    pub apr: f64,
    #[serde(deserialize_with = "de_number")]
    pub min: f64,
}

impl Default for DebtInput {
    fn default() -> Self {
        Self {
            name: DEFAULT_DEBT_NAME.to_string(),
            balance: 0.0,
            apr: 0.0,
            min: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebtPayoffInput {
    #[serde(deserialize_with = "de_choice")]
    pub strategy: PayoffStrategy,
    #[serde(deserialize_with = "de_number")]
    pub extra: f64,
    #[serde(deserialize_with = "de_list")]
    pub debts: Vec<DebtInput>,
}

/// A named savings bucket tracked next to the emergency fund.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SinkingFund {
    #[serde(deserialize_with = "de_label")]
    pub name: String,
    #[serde(deserialize_with = "de_number")]
    pub target: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmergencyFundInput {
    #[serde(deserialize_with = "de_number")]
    pub monthly_expenses: f64,
    #[serde(deserialize_with = "de_number")]
    pub months_buffer: f64,
    #[serde(deserialize_with = "de_number")]
    pub current_saved: f64,
    #[serde(deserialize_with = "de_number")]
    pub monthly_savings: f64,
    #[serde(deserialize_with = "de_number")]
    pub interest_rate: f64,
    #[serde(deserialize_with = "de_list")]
    pub categories: Vec<SinkingFund>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SavingsRateInput {
    #[serde(deserialize_with = "de_number")]
    pub net_income: f64,
    #[serde(deserialize_with = "de_number")]
    pub monthly_expenses: f64,
    #[serde(deserialize_with = "de_number")]
    pub current_investments: f64,
    #[serde(deserialize_with = "de_number")]
    pub annual_return: f64,
    #[serde(deserialize_with = "de_number")]
    pub withdrawal_rate: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoalTimelineInput {
    #[serde(deserialize_with = "de_number")]
    pub target_amount: f64,
    #[serde(deserialize_with = "de_number")]
    pub start_amount: f64,
    #[serde(deserialize_with = "de_number")]
    pub monthly_contribution: f64,
    #[serde(deserialize_with = "de_number")]
    pub annual_return: f64,
    #[serde(deserialize_with = "de_flag")]
    pub step_up_enabled: bool,
    #[serde(deserialize_with = "de_number")]
    pub step_up_amount: f64,
    /// Months between contribution step-ups.
    #[serde(deserialize_with = "de_number")]
    pub step_up_frequency: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RefinanceInput {
    #[serde(deserialize_with = "de_number")]
    pub current_balance: f64,
    #[serde(rename = "currentAPR", deserialize_with = "de_number")]
    pub current_apr: f64,
    #[serde(deserialize_with = "de_number")]
    pub current_term_months: f64,
    #[serde(rename = "newAPR", deserialize_with = "de_number")]
    pub new_apr: f64,
    #[serde(deserialize_with = "de_number")]
    pub new_term_months: f64,
    #[serde(deserialize_with = "de_number")]
    pub closing_costs: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetSplitInput {
    #[serde(deserialize_with = "de_number")]
    pub take_home_pay: f64,
    #[serde(deserialize_with = "de_number")]
    pub needs_percent: f64,
    #[serde(deserialize_with = "de_number")]
    pub wants_percent: f64,
    #[serde(deserialize_with = "de_number")]
    pub savings_percent: f64,
    #[serde(deserialize_with = "de_choice")]
    pub pay_frequency: PayFrequency,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtraPaymentInput {
    #[serde(deserialize_with = "de_number")]
    pub loan_balance: f64,
    #[serde(deserialize_with = "de_number")]
    pub apr: f64,
    #[serde(deserialize_with = "de_number")]
    pub remaining_months: f64,
    #[serde(deserialize_with = "de_number")]
    pub extra_payment: f64,
    #[serde(deserialize_with = "de_choice")]
    pub payment_type: ExtraPaymentSchedule,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditCardInput {
    #[serde(deserialize_with = "de_number")]
    pub balance: f64,
    #[serde(deserialize_with = "de_number")]
    pub apr: f64,
    #[serde(deserialize_with = "de_choice")]
    pub minimum_type: MinimumPaymentRule,
    #[serde(deserialize_with = "de_number")]
    pub minimum_percent: f64,
    #[serde(deserialize_with = "de_number")]
    pub minimum_fixed: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebtToIncomeInput {
    #[serde(deserialize_with = "de_number")]
    pub gross_income: f64,
    #[serde(deserialize_with = "de_number")]
    pub housing_payment: f64,
    #[serde(deserialize_with = "de_number")]
    pub car_payments: f64,
    #[serde(deserialize_with = "de_number")]
    pub credit_cards: f64,
    #[serde(deserialize_with = "de_number")]
    pub student_loans: f64,
    #[serde(deserialize_with = "de_number")]
    pub other_debts: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearBalancePoint {
    pub year: u32,
    pub balance: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestResult {
    pub final_balance: f64,
    pub total_contrib: f64,
    pub total_growth: f64,
    pub timeline: Vec<YearBalancePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtBalance {
    pub name: String,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtScheduleEntry {
    pub month: u32,
    pub debts: Vec<DebtBalance>,
    pub total_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalBalancePoint {
    pub month: u32,
    pub total_balance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoffResult {
    pub months: u32,
    pub total_interest: f64,
    /// `None` when there was nothing to pay off.
    pub debt_free_date: Option<NaiveDate>,
    pub schedule: Vec<DebtScheduleEntry>,
    pub timeline: Vec<TotalBalancePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyBalancePoint {
    pub month: u32,
    pub emergency_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyFundResult {
    pub target_amount: f64,
    pub still_needed: f64,
    pub months_to_goal: Horizon,
    pub total_sinking_funds: f64,
    pub timeline: Vec<EmergencyBalancePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPoint {
    pub year: u32,
    pub portfolio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsRateResult {
    pub savings_rate: f64,
    #[serde(rename = "yearsToFI")]
    pub years_to_fi: Horizon,
    pub target_portfolio: f64,
    pub monthly_savings: f64,
    pub timeline: Vec<PortfolioPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBalancePoint {
    pub month: u32,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTimelineResult {
    pub months_to_goal: u32,
    pub goal_reached: bool,
    pub goal_date: NaiveDate,
    pub total_contributions: f64,
    pub total_growth: f64,
    pub timeline: Vec<MonthBalancePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeSavingsPoint {
    pub month: u32,
    pub cumulative_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinanceResult {
    pub breakeven_months: Horizon,
    pub current_payment: f64,
    pub new_payment: f64,
    pub monthly_savings: f64,
    pub lifetime_interest_saved: f64,
    pub net_benefit: f64,
    pub timeline: Vec<CumulativeSavingsPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

impl CategoryAmount {
    pub(crate) fn new(category: &str, amount: f64) -> Self {
        Self {
            category: category.to_string(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSplitResult {
    pub needs_amount: f64,
    pub wants_amount: f64,
    pub savings_amount: f64,
    pub total_percent: f64,
    pub timeline: Vec<CategoryAmount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPaymentResult {
    pub months_saved: u32,
    pub interest_saved: f64,
    pub original_payment: f64,
    pub new_payoff_date: NaiveDate,
    pub total_savings: f64,
    pub timeline: Vec<MonthBalancePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardResult {
    pub months_to_payoff: u32,
    pub paid_off: bool,
    pub total_interest: f64,
    pub total_paid: f64,
    pub payoff_date: NaiveDate,
    pub timeline: Vec<MonthBalancePoint>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RiskLevel {
    NoIncome,
    Good,
    Acceptable,
    HighRisk,
    Critical,
}

impl RiskLevel {
    /// Band for a total debt-to-income percentage.
    pub fn from_ratio(total_dti: f64) -> Self {
        if total_dti <= 36.0 {
            RiskLevel::Good
        } else if total_dti <= 41.0 {
            RiskLevel::Acceptable
        } else if total_dti <= 50.0 {
            RiskLevel::HighRisk
        } else {
            RiskLevel::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::NoIncome => "No income entered",
            RiskLevel::Good => "Good - Low Risk",
            RiskLevel::Acceptable => "Acceptable - Moderate Risk",
            RiskLevel::HighRisk => "High Risk - Reduce Debt",
            RiskLevel::Critical => "Critical - Seek Help",
        }
    }
}

impl Serialize for RiskLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtToIncomeResult {
    #[serde(rename = "totalDTI")]
    pub total_dti: f64,
    #[serde(rename = "housingDTI")]
    pub housing_dti: f64,
    pub risk_level: RiskLevel,
    pub max_additional_debt: f64,
    pub timeline: Vec<CategoryAmount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn horizon_serializes_as_bare_number_with_sentinel() {
        assert_eq!(serde_json::to_value(Horizon::Reached(14)).unwrap(), json!(14));
        assert_eq!(serde_json::to_value(Horizon::Unreachable).unwrap(), json!(999));
        assert_eq!(Horizon::Unreachable.reached(), None);
    }

    #[test]
    fn choices_parse_legacy_spellings() {
        let input: ExtraPaymentInput =
            serde_json::from_value(json!({ "paymentType": "onetime" })).unwrap();
        assert_eq!(input.payment_type, ExtraPaymentSchedule::OneTime);
        let input: ExtraPaymentInput =
            serde_json::from_value(json!({ "paymentType": "One-Time" })).unwrap();
        assert_eq!(input.payment_type, ExtraPaymentSchedule::OneTime);
        let input: BudgetSplitInput =
            serde_json::from_value(json!({ "payFrequency": 26 })).unwrap();
        assert_eq!(input.pay_frequency, PayFrequency::Monthly);
    }

    #[test]
    fn missing_or_blank_choices_use_defaults() {
        for raw in [json!({}), json!({ "compound": "" }), json!({ "compound": null })] {
            let input: CompoundInterestInput = serde_json::from_value(raw).unwrap();
            assert_eq!(input.compound, Compounding::Monthly);
        }
        let input: DebtPayoffInput = serde_json::from_value(json!({ "strategy": "  " })).unwrap();
        assert_eq!(input.strategy, PayoffStrategy::Snowball);
        let input: CreditCardInput = serde_json::from_value(json!({ "minimumType": "" })).unwrap();
        assert_eq!(input.minimum_type, MinimumPaymentRule::Percent);
        let input: ExtraPaymentInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input.payment_type, ExtraPaymentSchedule::Monthly);
    }

    #[test]
    fn unrecognised_compounding_is_daily() {
        let input: CompoundInterestInput =
            serde_json::from_value(json!({ "compound": "continuous" })).unwrap();
        assert_eq!(input.compound, Compounding::Daily);
        assert_eq!("fortnightly".parse::<Compounding>(), Ok(Compounding::Daily));
    }

    #[test]
    fn unrecognised_strategy_is_avalanche() {
        let input: DebtPayoffInput =
            serde_json::from_value(json!({ "strategy": "highest-apr" })).unwrap();
        assert_eq!(input.strategy, PayoffStrategy::Avalanche);
    }

    #[test]
    fn unrecognised_minimum_rule_is_fixed() {
        let input: CreditCardInput =
            serde_json::from_value(json!({ "minimumType": "flat" })).unwrap();
        assert_eq!(input.minimum_type, MinimumPaymentRule::Fixed);
    }

    #[test]
    fn unrecognised_payment_schedule_applies_no_extra() {
        let input: ExtraPaymentInput =
            serde_json::from_value(json!({ "paymentType": "weekly" })).unwrap();
        assert_eq!(input.payment_type, ExtraPaymentSchedule::Never);
        assert_eq!(ExtraPaymentSchedule::Never.extra_for_month(1, 500.0), 0.0);
        assert_eq!(ExtraPaymentSchedule::Never.extra_for_month(12, 500.0), 0.0);
    }

    #[test]
    fn unrecognised_pay_frequency_is_monthly() {
        let input: BudgetSplitInput =
            serde_json::from_value(json!({ "payFrequency": "daily" })).unwrap();
        assert_eq!(input.pay_frequency, PayFrequency::Monthly);
    }

    #[test]
    fn inputs_coerce_text_and_missing_fields() {
        let input: RefinanceInput = serde_json::from_value(json!({
            "currentBalance": "200,000",
            "currentAPR": "6",
            "newAPR": null,
            "closingCosts": "n/a"
        }))
        .unwrap();
        assert_eq!(input.current_balance, 200_000.0);
        assert_eq!(input.current_apr, 6.0);
        assert_eq!(input.new_apr, 0.0);
        assert_eq!(input.current_term_months, 0.0);
        assert_eq!(input.closing_costs, 0.0);
    }

    #[test]
    fn debt_list_is_lenient() {
        let input: DebtPayoffInput = serde_json::from_value(json!({
            "strategy": "avalanche",
            "debts": [
                { "name": "", "balance": "1500", "apr": 19.9, "min": "35" },
                "not a debt",
                { "name": "Car" }
            ]
        }))
        .unwrap();
        assert_eq!(input.strategy, PayoffStrategy::Avalanche);
        assert_eq!(input.debts.len(), 3);
        assert_eq!(input.debts[0].name, "Debt");
        assert_eq!(input.debts[0].balance, 1500.0);
        assert_eq!(input.debts[1].balance, 0.0);
        assert_eq!(input.debts[2].name, "Car");

        let input: DebtPayoffInput =
            serde_json::from_value(json!({ "debts": "oops" })).unwrap();
        assert!(input.debts.is_empty());
    }

    #[test]
    fn step_up_flag_accepts_bool_or_text() {
        let on: GoalTimelineInput =
            serde_json::from_value(json!({ "stepUpEnabled": "true" })).unwrap();
        let on_bool: GoalTimelineInput =
            serde_json::from_value(json!({ "stepUpEnabled": true })).unwrap();
        let off: GoalTimelineInput =
            serde_json::from_value(json!({ "stepUpEnabled": "yes" })).unwrap();
        assert!(on.step_up_enabled);
        assert!(on_bool.step_up_enabled);
        assert!(!off.step_up_enabled);
    }

    #[test]
    fn minimum_rule_takes_floor_or_percent() {
        assert_eq!(MinimumPaymentRule::Percent.minimum_payment(1_000.0, 0.02, 25.0), 25.0);
        assert_eq!(MinimumPaymentRule::Percent.minimum_payment(5_000.0, 0.02, 25.0), 100.0);
        assert_eq!(MinimumPaymentRule::Fixed.minimum_payment(5_000.0, 0.02, 25.0), 25.0);
    }

    #[test]
    fn extra_schedule_applies_in_expected_months() {
        assert_eq!(ExtraPaymentSchedule::Monthly.extra_for_month(7, 50.0), 50.0);
        assert_eq!(ExtraPaymentSchedule::Annual.extra_for_month(7, 50.0), 0.0);
        assert_eq!(ExtraPaymentSchedule::Annual.extra_for_month(24, 50.0), 50.0);
        assert_eq!(ExtraPaymentSchedule::OneTime.extra_for_month(1, 50.0), 50.0);
        assert_eq!(ExtraPaymentSchedule::OneTime.extra_for_month(13, 50.0), 0.0);
    }
}
