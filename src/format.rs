//! Text shown on a card.

use crate::dataset::Record;
use serde::Serialize;

/// `$` followed by the amount with thousands separators and two decimals.
/// The sign goes after the dollar sign: `-1234.5` becomes `$-1,234.50`.
/// Non-finite amounts print bare: `$inf`, `$-inf`, `$nan`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$nan".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("${}inf", sign);
    }

    let fixed = format!("{:.2}", value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, &d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(d as char);
    }

    format!("${}{}.{}", sign, grouped, frac_part)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardText {
    pub title: String,
    pub product: String,
    pub country: String,
    pub discount: String,
    pub units: String,
    pub sales: String,
}

impl CardText {
    pub fn lines(&self) -> [&str; 6] {
        [
            &self.title,
            &self.product,
            &self.country,
            &self.discount,
            &self.units,
            &self.sales,
        ]
    }
}

pub fn card_lines(record: &Record) -> CardText {
    CardText {
        title: record.segment.clone(),
        product: format!("Product: {}", record.product),
        country: format!("Country: {}", record.country),
        discount: format!("Discount Band: {}", record.discount_band),
        units: format!("Units Sold: {}", record.units_sold),
        sales: format!("Sales: {}", format_currency(record.sales)),
    }
}
