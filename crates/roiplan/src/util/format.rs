use roiplan_core::model::{CappedValue, PAYBACK_NEVER, PROJECTION_YEARS};

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value without cents
pub fn format_currency(value: f64) -> String {
    let dollars = group_thousands(value.abs().round() as u64);
    if value < 0.0 && dollars != "0" {
        format!("-${dollars}")
    } else {
        format!("${dollars}")
    }
}

/// Format a currency value in compact form (e.g., $2.1M, $450K, $50)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}${:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs_value)
    }
}

/// Format a fraction as a percentage with one decimal
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Percentage with a marker when an empirical cap was applied
pub fn format_capped(value: &CappedValue) -> String {
    if value.capped {
        format!("{} (capped)", format_percentage(value.value))
    } else {
        format_percentage(value.value)
    }
}

/// Reported IRR, or "not applicable" when the solver found no credible root
pub fn format_irr(value: Option<&CappedValue>) -> String {
    value.map_or_else(|| "not applicable".to_string(), format_capped)
}

pub fn format_payback(months: u32) -> String {
    if months >= PAYBACK_NEVER {
        format!("beyond {PROJECTION_YEARS} years")
    } else if months == 1 {
        "1 month".to_string()
    } else {
        format!("{months} months")
    }
}
