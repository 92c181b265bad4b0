//! Clock text formatting
//!
//! Both strings are written into fixed buffers supplied by the caller and
//! reused every tick; nothing here allocates.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Hour style reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    /// 12-hour clock, non-padded hour
    H12,
    /// 24-hour clock
    H24,
}

/// Fits `"00:00"`
pub const TIME_TEXT_LEN: usize = 5;
/// Fits `"Mar 04"`
pub const DATE_TEXT_LEN: usize = 6;

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format `time` as `HH:MM` into `buf`.
///
/// In 12-hour style the clock hour (1-12) is written zero-padded and a
/// leading `'0'` is then stripped in place, emulating a non-padded hour
/// format. 24-hour strings are left unmodified.
pub fn format_time(buf: &mut [u8; TIME_TEXT_LEN], time: NaiveTime, style: ClockStyle) -> &str {
    let hour = match style {
        ClockStyle::H12 => time.hour12().1,
        ClockStyle::H24 => time.hour(),
    };

    let mut len = {
        let shown = format_no_std::show(
            buf.as_mut_slice(),
            format_args!("{:02}:{:02}", hour, time.minute()),
        );
        match shown {
            Ok(s) => s.len(),
            Err(_) => return "--:--",
        }
    };

    if style == ClockStyle::H12 && buf[0] == b'0' {
        buf.copy_within(1..len, 0);
        len -= 1;
    }

    core::str::from_utf8(&buf[..len]).unwrap_or("--:--")
}

/// Format `date` as abbreviated month and zero-padded day, e.g. `"Mar 04"`.
pub fn format_date(buf: &mut [u8; DATE_TEXT_LEN], date: NaiveDate) -> &str {
    let month = MONTH_ABBR[date.month0() as usize];
    let shown = format_no_std::show(
        buf.as_mut_slice(),
        format_args!("{} {:02}", month, date.day()),
    );
    match shown {
        Ok(s) => s,
        Err(_) => "--- --",
    }
}
