use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Dates shown inside derived titles, `DD.MM.YYYY`.
pub fn display_date(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}
