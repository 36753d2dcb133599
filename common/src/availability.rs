//! 営業時間判定

use crate::error::{Error, Result};

/// 開店時刻（この時を含む）
pub const OPEN_HOUR: u32 = 10;
/// 閉店時刻（この時を含まない）
pub const CLOSE_HOUR: u32 = 22;

/// `hour` が営業時間内か
pub fn is_open(hour: u32) -> bool {
    (OPEN_HOUR..CLOSE_HOUR).contains(&hour)
}

/// 0-23 の範囲チェック
pub fn check_hour(hour: u32) -> Result<u32> {
    if hour > 23 {
        return Err(Error::InvalidHour(hour));
    }
    Ok(hour)
}

/// ローカル時計の現在時（0-23）
#[cfg(feature = "clock")]
pub fn current_hour() -> u32 {
    use chrono::Timelike;
    chrono::Local::now().hour()
}

/// 現在時刻で営業中か
#[cfg(feature = "clock")]
pub fn is_open_now() -> bool {
    is_open(current_hour())
}
