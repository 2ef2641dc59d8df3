//! Resource names and the identifiers derived from them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    utils::{prefix_uppercase, to_camel_case, to_kebab_case, to_pascal_case, to_screaming_snake_case},
};

/// A validated resource name as supplied on the command line.
///
/// Always a non-empty ASCII identifier: a letter followed by letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    /// Validate raw user input.
    ///
    /// Surrounding whitespace is ignored. Empty input is a missing name;
    /// separators such as `-` or `_` are rejected so that every naming
    /// convention sees camelCase input.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();

        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Err(Box::new(Error::MissingResourceName));
        };

        if !first.is_ascii_alphabetic() {
            return Err(Error::invalid_resource_name(
                name,
                "resource names must start with a letter",
            ));
        }

        if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric()) {
            return Err(Error::invalid_resource_name(
                name,
                format!("'{}' is not allowed in a resource name", bad),
            ));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rules for turning a resource name into the identifiers used by templates.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Resource name to class name (e.g., "orderItem" -> "OrderItem")
    pub to_class: fn(&str) -> String,
    /// Resource name to file name (e.g., "orderItem" -> "order-item")
    pub to_file: fn(&str) -> String,
    /// Resource name to variable name (e.g., "OrderItem" -> "orderItem")
    pub to_variable: fn(&str) -> String,
    /// Resource name to database table name (e.g., "orderItem" -> "ORDER_ITEM")
    pub to_table: fn(&str) -> String,
}

impl NamingConvention {
    /// Derive every identifier for `name`.
    pub fn derive(&self, name: &ResourceName) -> DerivedIdentifiers {
        let raw = name.as_str();
        DerivedIdentifiers {
            class_name: (self.to_class)(raw),
            file_name: (self.to_file)(raw),
            variable_name: (self.to_variable)(raw),
            table_name: (self.to_table)(raw),
        }
    }
}

/// Default convention: no leading separators, camelCase variables.
pub const CANONICAL_NAMING: NamingConvention = NamingConvention {
    to_class: to_pascal_case,
    to_file: to_kebab_case,
    to_variable: to_camel_case,
    to_table: to_screaming_snake_case,
};

fn legacy_file_name(s: &str) -> String {
    prefix_uppercase(s, '-').to_lowercase()
}

fn legacy_variable_name(s: &str) -> String {
    s.to_lowercase()
}

fn legacy_table_name(s: &str) -> String {
    prefix_uppercase(s, '_').to_uppercase()
}

/// Earlier convention kept for projects scaffolded with it.
///
/// A leading capital yields a leading separator (`"Order"` -> `"-order"`) and
/// variable names are fully lower-cased.
pub const LEGACY_NAMING: NamingConvention = NamingConvention {
    to_class: to_pascal_case,
    to_file: legacy_file_name,
    to_variable: legacy_variable_name,
    to_table: legacy_table_name,
};

/// Selectable naming convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    #[default]
    Canonical,
    Legacy,
}

impl NamingScheme {
    /// Returns the scheme identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingScheme::Canonical => "canonical",
            NamingScheme::Legacy => "legacy",
        }
    }

    /// The derivation rules for this scheme.
    pub fn convention(&self) -> &'static NamingConvention {
        match self {
            NamingScheme::Canonical => &CANONICAL_NAMING,
            NamingScheme::Legacy => &LEGACY_NAMING,
        }
    }
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NamingScheme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "canonical" => Ok(NamingScheme::Canonical),
            "legacy" => Ok(NamingScheme::Legacy),
            _ => Err(format!(
                "unknown naming scheme '{}', expected 'canonical' or 'legacy'",
                s
            )),
        }
    }
}

/// Identifiers computed once per run and shared by every template and merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentifiers {
    pub class_name: String,
    pub file_name: String,
    pub variable_name: String,
    pub table_name: String,
}

impl DerivedIdentifiers {
    /// Parse `raw` and derive its identifiers with the given scheme.
    pub fn from_raw(raw: &str, scheme: NamingScheme) -> Result<Self> {
        let name = ResourceName::parse(raw)?;
        Ok(scheme.convention().derive(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> ResourceName {
        ResourceName::parse(raw).unwrap()
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(name("  order ").as_str(), "order");
    }

    #[test]
    fn test_parse_rejects_empty() {
        for raw in ["", "   ", "\t\n"] {
            let err = ResourceName::parse(raw).unwrap_err();
            assert!(matches!(*err, Error::MissingResourceName));
            assert!(err.is_usage());
        }
    }

    #[test]
    fn test_parse_rejects_separators() {
        for raw in ["order-item", "order_item", "order item", "1order", "ordér"] {
            let err = ResourceName::parse(raw).unwrap_err();
            assert!(
                matches!(*err, Error::InvalidResourceName { .. }),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_canonical_single_word() {
        let ids = CANONICAL_NAMING.derive(&name("order"));
        assert_eq!(ids.class_name, "Order");
        assert_eq!(ids.file_name, "order");
        assert_eq!(ids.variable_name, "order");
        assert_eq!(ids.table_name, "ORDER");
    }

    #[test]
    fn test_canonical_camel_case() {
        let ids = CANONICAL_NAMING.derive(&name("orderItem"));
        assert_eq!(ids.class_name, "OrderItem");
        assert_eq!(ids.file_name, "order-item");
        assert_eq!(ids.variable_name, "orderItem");
        assert_eq!(ids.table_name, "ORDER_ITEM");
    }

    #[test]
    fn test_canonical_strips_leading_separator() {
        let ids = CANONICAL_NAMING.derive(&name("OrderItem"));
        assert_eq!(ids.class_name, "OrderItem");
        assert_eq!(ids.file_name, "order-item");
        assert_eq!(ids.variable_name, "orderItem");
        assert_eq!(ids.table_name, "ORDER_ITEM");
    }

    #[test]
    fn test_legacy_keeps_leading_separator() {
        let ids = LEGACY_NAMING.derive(&name("OrderItem"));
        assert_eq!(ids.class_name, "OrderItem");
        assert_eq!(ids.file_name, "-order-item");
        assert_eq!(ids.variable_name, "orderitem");
        assert_eq!(ids.table_name, "_ORDER_ITEM");
    }

    #[test]
    fn test_conventions_agree_on_lower_single_word() {
        let canonical = CANONICAL_NAMING.derive(&name("order"));
        let legacy = LEGACY_NAMING.derive(&name("order"));
        assert_eq!(canonical, legacy);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        for raw in ["order", "orderItem", "OrderItem", "HTTPLog", "item2"] {
            for scheme in [NamingScheme::Canonical, NamingScheme::Legacy] {
                let first = DerivedIdentifiers::from_raw(raw, scheme).unwrap();
                let second = DerivedIdentifiers::from_raw(raw, scheme).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_scheme_from_str() {
        assert_eq!(
            NamingScheme::from_str("canonical").unwrap(),
            NamingScheme::Canonical
        );
        assert_eq!(NamingScheme::from_str("Legacy").unwrap(), NamingScheme::Legacy);
        assert!(NamingScheme::from_str("snake").is_err());
    }

    #[test]
    fn test_scheme_display() {
        assert_eq!(NamingScheme::Canonical.to_string(), "canonical");
        assert_eq!(NamingScheme::Legacy.to_string(), "legacy");
    }
}
