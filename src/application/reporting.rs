use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    format_amount, week_window, Amount, Clock, Currency, Ledger, Record, SystemClock,
    UnsupportedCurrencyError,
};

pub const CALORIES_LEFT: &str = "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более";
pub const STOP_EATING: &str = "Хватит есть!";
pub const CASH_LEFT: &str = "На сегодня осталось";
pub const NO_MONEY: &str = "Денег нет, держись";

/// Point-in-time view of a ledger, evaluated against the clock's today.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub today: NaiveDate,
    pub limit: Amount,
    pub today_total: Amount,
    pub remaining: Amount,
    /// Exclusive lower bound of the trailing week
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub week_total: Amount,
    pub record_count: usize,
}

impl LedgerSummary {
    pub fn of<C: Clock>(ledger: &Ledger<C>) -> Self {
        let today = ledger.today();
        let (week_start, week_end) = week_window(today);
        let today_total = ledger.today_total();
        Self {
            today,
            limit: ledger.limit(),
            today_total,
            remaining: ledger.limit() - today_total,
            week_start,
            week_end,
            week_total: ledger.week_total(),
            record_count: ledger.records().len(),
        }
    }
}

/// Daily calorie intake against a limit.
#[derive(Debug, Clone)]
pub struct CalorieReport<C = SystemClock> {
    ledger: Ledger<C>,
}

impl CalorieReport<SystemClock> {
    pub fn new(limit: Amount) -> Self {
        Self {
            ledger: Ledger::new(limit),
        }
    }
}

impl<C: Clock> CalorieReport<C> {
    pub fn with_clock(limit: Amount, clock: C) -> Self {
        Self {
            ledger: Ledger::with_clock(limit, clock),
        }
    }

    pub fn ledger(&self) -> &Ledger<C> {
        &self.ledger
    }

    pub fn add_record(&mut self, record: Record) {
        self.ledger.add_record(record);
    }

    pub fn remaining_message(&self) -> String {
        let remaining = self.ledger.check_limit();
        if remaining > 0.0 {
            format!("{} {} кКал", CALORIES_LEFT, remaining)
        } else {
            STOP_EATING.to_string()
        }
    }
}

/// Daily spending in rubles against a limit, reported in any supported currency.
#[derive(Debug, Clone)]
pub struct CashReport<C = SystemClock> {
    ledger: Ledger<C>,
}

impl CashReport<SystemClock> {
    pub fn new(limit: Amount) -> Self {
        Self {
            ledger: Ledger::new(limit),
        }
    }
}

impl<C: Clock> CashReport<C> {
    pub fn with_clock(limit: Amount, clock: C) -> Self {
        Self {
            ledger: Ledger::with_clock(limit, clock),
        }
    }

    pub fn ledger(&self) -> &Ledger<C> {
        &self.ledger
    }

    pub fn add_record(&mut self, record: Record) {
        self.ledger.add_record(record);
    }

    /// Today's remaining budget converted into `currency`.
    pub fn remaining_in(&self, currency: Currency) -> Amount {
        currency.convert(self.ledger.check_limit())
    }

    /// Render today's status in the currency named by `currency_code`.
    ///
    /// An exhausted budget is reported before the code is looked up, so it
    /// never fails, whatever the code.
    pub fn remaining_message(&self, currency_code: &str) -> Result<String, UnsupportedCurrencyError> {
        let remaining = self.ledger.check_limit();
        if remaining == 0.0 {
            return Ok(NO_MONEY.to_string());
        }

        let currency = currency_code.parse::<Currency>()?;
        let converted = currency.convert(remaining);

        if converted > 0.0 {
            Ok(format!(
                "{} {} {}",
                CASH_LEFT,
                format_amount(converted),
                currency.label()
            ))
        } else {
            Ok(format!(
                "{}: твой долг - {} {}",
                NO_MONEY,
                format_amount(converted.abs()),
                currency.label()
            ))
        }
    }
}
