use jiff::Zoned;

use crate::error::AppError;

/// IANA zone every timestamp is converted into.
pub const TIMEZONE: &str = "CET";

/// The zone label is literal text, not derived from the offset.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %I:%M:%S %p CET";

pub fn now_timestamp() -> Result<String, AppError> {
    let now = Zoned::now().in_tz(TIMEZONE)?;

    Ok(format_timestamp(&now))
}

pub fn format_timestamp(time: &Zoned) -> String {
    time.strftime(TIMESTAMP_FMT).to_string()
}
