//! Currency and date formatting helpers (fr-FR conventions).
//!
//! Entity timestamps are ISO-8601 strings (`2025-09-05` or
//! `2025-09-05T14:30:00`); a string that does not parse is returned
//! unchanged so a bad fixture never panics a page.

/// Format an XOF amount: thousands grouped by spaces, no decimals.
#[must_use]
pub fn format_currency(amount: u64) -> String {
    format!("{} F CFA", group_thousands(amount))
}

/// Screen-reader friendly variant of [`format_currency`].
#[must_use]
pub fn format_currency_aria(amount: u64) -> String {
    format!("{} francs CFA", group_thousands(amount))
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

const MONTHS_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

const MONTHS_LONG: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const WEEKDAYS: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

/// `5 sept. 2025`
#[must_use]
pub fn format_date_short(iso: &str) -> String {
    match parse_iso(iso) {
        Some((y, m, d, _, _)) => format!("{d} {} {y}", MONTHS_SHORT[m as usize - 1]),
        None => iso.to_string(),
    }
}

/// `vendredi 5 septembre 2025`
#[must_use]
pub fn format_date(iso: &str) -> String {
    match parse_iso(iso) {
        Some((y, m, d, _, _)) => format!(
            "{} {d} {} {y}",
            WEEKDAYS[weekday_index(y, m, d)],
            MONTHS_LONG[m as usize - 1]
        ),
        None => iso.to_string(),
    }
}

/// `5 sept. 2025 à 14:30`
#[must_use]
pub fn format_date_time(iso: &str) -> String {
    match parse_iso(iso) {
        Some((y, m, d, hh, mm)) => format!(
            "{d} {} {y} à {hh:02}:{mm:02}",
            MONTHS_SHORT[m as usize - 1]
        ),
        None => iso.to_string(),
    }
}

/// Uppercased initials for the avatar badge.
#[must_use]
pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .next()
        .into_iter()
        .chain(last_name.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Parse `YYYY-MM-DD` with an optional `THH:MM[:SS]` suffix.
fn parse_iso(iso: &str) -> Option<(i64, u32, u32, u32, u32)> {
    let (date, time) = match iso.split_once('T') {
        Some((d, t)) => (d, Some(t)),
        None => (iso, None),
    };
    let mut parts = date.splitn(3, '-');
    let y: i64 = parts.next()?.parse().ok()?;
    let m: u32 = parts.next()?.parse().ok()?;
    let d: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&m) || !(1..=31).contains(&d) {
        return None;
    }
    let (hh, mm) = match time {
        Some(t) => {
            let mut hm = t.splitn(3, ':');
            let hh: u32 = hm.next()?.parse().ok()?;
            let mm: u32 = hm.next()?.parse().ok()?;
            if hh > 23 || mm > 59 {
                return None;
            }
            (hh, mm)
        }
        None => (0, 0),
    };
    Some((y, m, d, hh, mm))
}

/// Day of week, 0 = lundi. Days-from-civil algorithm.
fn weekday_index(y: i64, m: u32, d: u32) -> usize {
    let y = if m <= 2 { y - 1 } else { y };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = i64::from((m + 9) % 12);
    let doy = (153 * mp + 2) / 5 + i64::from(d) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    let days = era * 146_097 + doe - 719_468;
    // 1970-01-01 was a Thursday (index 3 with lundi = 0).
    (days + 3).rem_euclid(7) as usize
}
