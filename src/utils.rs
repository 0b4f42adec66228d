//! ID generation, date/currency formatting, tracing setup, and path helpers.

use std::{env, path::PathBuf, sync::Once};

use chrono::{Datelike, NaiveDate, Utc};
use uuid::Uuid;

const DEFAULT_DIR_NAME: &str = ".cashbook";
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("cashbook_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.cashbook`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("CASHBOOK_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Returns a fresh identifier: millisecond timestamp in base-36 followed by a
/// random component, so ids sort roughly by creation time and never collide
/// in practice.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let random = Uuid::new_v4().simple().to_string();
    format!("{}{}", base36(millis), &random[..12])
}

fn base36(mut value: u64) -> String {
    if value == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Day-level label, e.g. `14 Mar 2026`. Used as the daily report bucket key.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Month-level label, e.g. `March 2026`. Used as the monthly report bucket key.
pub fn format_month(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Year-level label, e.g. `2026`. Used as the yearly report bucket key.
pub fn format_year(date: NaiveDate) -> String {
    date.year().to_string()
}

/// Formats an integer rupiah amount with dot thousands separators, e.g.
/// `Rp 1.000.000`. Display-only; the core never computes with sub-units.
pub fn format_currency(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}
