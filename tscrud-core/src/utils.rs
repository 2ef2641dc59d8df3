//! Shared string utilities for deriving identifiers.

/// Upper-case the first character and keep the rest (e.g., "orderItem" -> "OrderItem")
pub fn to_pascal_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character and keep the rest (e.g., "OrderItem" -> "orderItem")
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Insert `separator` in front of every ASCII upper-case character.
///
/// The characters themselves are left untouched, so a leading capital
/// produces a leading separator: `"OrderItem"` with `'-'` gives `"-Order-Item"`.
pub fn prefix_uppercase(s: &str, separator: char) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            result.push(separator);
        }
        result.push(c);
    }
    result
}

/// Convert to kebab-case without a leading dash (e.g., "OrderItem" -> "order-item")
pub fn to_kebab_case(s: &str) -> String {
    let kebab = prefix_uppercase(s, '-').to_lowercase();
    match kebab.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => kebab,
    }
}

/// Convert to SCREAMING_SNAKE_CASE without a leading underscore (e.g., "orderItem" -> "ORDER_ITEM")
pub fn to_screaming_snake_case(s: &str) -> String {
    let snake = prefix_uppercase(s, '_').to_uppercase();
    match snake.strip_prefix('_') {
        Some(rest) => rest.to_string(),
        None => snake,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("order"), "Order");
        assert_eq!(to_pascal_case("orderItem"), "OrderItem");
        assert_eq!(to_pascal_case("Order"), "Order");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("Order"), "order");
        assert_eq!(to_camel_case("OrderItem"), "orderItem");
        assert_eq!(to_camel_case("orderItem"), "orderItem");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_prefix_uppercase() {
        assert_eq!(prefix_uppercase("orderItem", '-'), "order-Item");
        assert_eq!(prefix_uppercase("OrderItem", '_'), "_Order_Item");
        assert_eq!(prefix_uppercase("order", '-'), "order");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("order"), "order");
        assert_eq!(to_kebab_case("orderItem"), "order-item");
        assert_eq!(to_kebab_case("OrderItem"), "order-item");
        assert_eq!(to_kebab_case("HTTPLog"), "h-t-t-p-log");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn test_to_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("order"), "ORDER");
        assert_eq!(to_screaming_snake_case("orderItem"), "ORDER_ITEM");
        assert_eq!(to_screaming_snake_case("OrderItem"), "ORDER_ITEM");
        assert_eq!(to_screaming_snake_case("item2Box"), "ITEM2_BOX");
    }
}
