//! moment.js-compatible format tokens (English only).

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Recognized tokens, longest first within each shared prefix.
const TOKENS: &[&str] = &[
    "YYYY", "YY", "Qo", "Q", "MMMM", "MMM", "MM", "Mo", "M", "DDDD", "DDDo", "DDD", "Do", "DD",
    "D", "dddd", "ddd", "dd", "d", "HH", "H", "hh", "h", "kk", "k", "mm", "m", "ss", "s", "SSS",
    "A", "a", "X", "x",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Renders `dt` according to a moment-style `pattern`.
///
/// Text inside `[...]` is copied literally; characters that are not part of a
/// token pass through unchanged, so an unknown pattern degrades to literal
/// output rather than an error.
pub fn format_date(dt: &NaiveDateTime, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        if ch == '[' {
            if let Some(end) = rest.find(']') {
                out.push_str(&rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }
        if let Some(token) = TOKENS.iter().find(|t| rest.starts_with(**t)) {
            render_token(dt, token, &mut out);
            rest = &rest[token.len()..];
            continue;
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

fn render_token(dt: &NaiveDateTime, token: &str, out: &mut String) {
    let month = dt.month() as usize;
    let weekday = dt.weekday().num_days_from_sunday() as usize;
    let quarter = (dt.month() - 1) / 3 + 1;
    let (is_pm, hour12) = dt.hour12();

    let rendered = match token {
        "YYYY" => format!("{:04}", dt.year()),
        "YY" => format!("{:02}", dt.year().rem_euclid(100)),
        "Q" => quarter.to_string(),
        "Qo" => ordinal(quarter),
        "MMMM" => MONTHS[month - 1].to_string(),
        "MMM" => MONTHS[month - 1][..3].to_string(),
        "MM" => format!("{month:02}"),
        "Mo" => ordinal(dt.month()),
        "M" => month.to_string(),
        "DDDD" => format!("{:03}", dt.ordinal()),
        "DDDo" => ordinal(dt.ordinal()),
        "DDD" => dt.ordinal().to_string(),
        "Do" => ordinal(dt.day()),
        "DD" => format!("{:02}", dt.day()),
        "D" => dt.day().to_string(),
        "dddd" => WEEKDAYS[weekday].to_string(),
        "ddd" => WEEKDAYS[weekday][..3].to_string(),
        "dd" => WEEKDAYS[weekday][..2].to_string(),
        "d" => weekday.to_string(),
        "HH" => format!("{:02}", dt.hour()),
        "H" => dt.hour().to_string(),
        "hh" => format!("{hour12:02}"),
        "h" => hour12.to_string(),
        "kk" => format!("{:02}", hour_from_one(dt)),
        "k" => hour_from_one(dt).to_string(),
        "mm" => format!("{:02}", dt.minute()),
        "m" => dt.minute().to_string(),
        "ss" => format!("{:02}", dt.second()),
        "s" => dt.second().to_string(),
        "SSS" => format!("{:03}", dt.nanosecond() / 1_000_000),
        "A" => (if is_pm { "PM" } else { "AM" }).to_string(),
        "a" => (if is_pm { "pm" } else { "am" }).to_string(),
        "X" => dt.and_utc().timestamp().to_string(),
        "x" => dt.and_utc().timestamp_millis().to_string(),
        other => other.to_string(),
    };
    out.push_str(&rendered);
}

// 1-24 clock: midnight is 24.
fn hour_from_one(dt: &NaiveDateTime) -> u32 {
    match dt.hour() {
        0 => 24,
        h => h,
    }
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st.
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
