//! Display formatting for dashboard metrics.

const CURRENCY_SYMBOL: &str = "$";
const COMPACT_SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Rounds to one decimal place, halves away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats with at most one fractional digit, dropping a trailing `.0`.
fn trim_one_decimal(value: f64) -> String {
    let s = format!("{:.1}", round1(value));
    s.strip_suffix(".0").map_or(s.clone(), str::to_string)
}

/// Compact number notation (`1.2K`, `3.4M`) with at most one fractional digit.
pub fn format_compact(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let magnitude = value.abs();
    let mut tier = 0;
    while tier < COMPACT_SUFFIXES.len() - 1 && magnitude >= 1000f64.powi(tier as i32 + 1) {
        tier += 1;
    }

    let mut scaled = round1(magnitude / 1000f64.powi(tier as i32));
    // 999.95K rounds up to 1000K, which reads as 1M
    if scaled >= 1000.0 && tier < COMPACT_SUFFIXES.len() - 1 {
        tier += 1;
        scaled = round1(magnitude / 1000f64.powi(tier as i32));
    }

    let sign = if value < 0.0 && scaled > 0.0 { "-" } else { "" };
    format!("{sign}{}{}", trim_one_decimal(scaled), COMPACT_SUFFIXES[tier])
}

/// Currency in compact notation, e.g. `$1.2M`.
pub fn format_currency(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_compact(value))
}

/// Fraction as a percentage with one decimal, e.g. `0.734` -> `73.4%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Integer with comma thousands separators, e.g. `12,345`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
