mod allocation;
mod calculator;
pub mod calendar;
mod debt;
mod growth;
mod loans;
pub mod numeric;
mod types;

pub use allocation::{run_budget_split, run_debt_to_income};
pub use calculator::Calculator;
pub use debt::run_debt_payoff;
pub use growth::{run_compound_interest, run_emergency_fund, run_goal_timeline, run_savings_rate};
pub use loans::{run_credit_card_minimum, run_extra_payment, run_refinance_breakeven};
pub use types::{
    BudgetSplitInput, BudgetSplitResult, CategoryAmount, CompoundInterestInput,
    CompoundInterestResult, Compounding, CreditCardInput, CreditCardResult,
    CumulativeSavingsPoint, DebtBalance, DebtInput, DebtPayoffInput, DebtPayoffResult,
    DebtScheduleEntry, DebtToIncomeInput, DebtToIncomeResult, EmergencyBalancePoint,
    EmergencyFundInput, EmergencyFundResult, ExtraPaymentInput, ExtraPaymentResult,
    ExtraPaymentSchedule, GoalTimelineInput, GoalTimelineResult, Horizon, MinimumPaymentRule,
    MonthBalancePoint, PayFrequency, PayoffStrategy, PortfolioPoint, RefinanceInput,
    RefinanceResult, RiskLevel, SavingsRateInput, SavingsRateResult, SinkingFund,
    TotalBalancePoint, UNREACHABLE_SENTINEL, YearBalancePoint,
};
