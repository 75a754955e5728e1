//! Price formatting
//!
//! Catalog prices are whole rupees. Display strings use the Indian digit
//! grouping (`₹1,00,000`): the last three digits form one group and the
//! remaining digits are grouped in pairs.

/// Rupee sign prefixed to every displayed price
pub const RUPEE: char = '₹';

/// Format a whole-rupee amount for display, e.g. `2499` → `₹2,499`
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 2 + 4);
    out.push(RUPEE);

    if digits.len() <= 3 {
        out.push_str(&digits);
        return out;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead == 1 {
            out.push(',');
        }
        out.extend(pair.iter().map(|b| *b as char));
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Format a discount label, e.g. `33` → `33% OFF`
pub fn discount_label(percent: u8) -> String {
    format!("{}% OFF", percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(299), "₹299");
        assert_eq!(format_inr(800), "₹800");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_inr(1000), "₹1,000");
        assert_eq!(format_inr(2499), "₹2,499");
        assert_eq!(format_inr(8500), "₹8,500");
        assert_eq!(format_inr(45000), "₹45,000");
    }

    #[test]
    fn test_format_lakhs() {
        assert_eq!(format_inr(100000), "₹1,00,000");
        assert_eq!(format_inr(1234567), "₹12,34,567");
        assert_eq!(format_inr(12345678), "₹1,23,45,678");
    }

    #[test]
    fn test_discount_label() {
        assert_eq!(discount_label(33), "33% OFF");
        assert_eq!(discount_label(44), "44% OFF");
    }
}
