use chrono::{Local, Months, NaiveDate};

/// The date `months` calendar months after `start`, clamped to the end of
/// shorter months (Jan 31 + 1 month is the last day of February).
pub fn months_after(start: NaiveDate, months: u32) -> NaiveDate {
    start
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Timeline sampling: every month up to `dense_until`, then every `stride`th.
pub fn on_cadence(month: u32, dense_until: u32, stride: u32) -> bool {
    month <= dense_until || month % stride == 0
}
