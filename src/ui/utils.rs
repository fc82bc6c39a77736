/// Formats a price with "Trader Precision".
/// - Large (>=1000): no decimals, thousands separated ($37,500)
/// - Medium (1-1000): 2 decimals ($12.48)
/// - Small (<1): 4-6 decimals ($0.000231)
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "-".to_string();
    }
    let abs_price = price.abs();
    if abs_price >= 1000.0 {
        format!("${}", group_thousands(price.round() as i64))
    } else if abs_price >= 1.0 {
        format!("${:.2}", price)
    } else if abs_price >= 0.01 {
        format!("${:.4}", price)
    } else {
        format!("${:.6}", price)
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
