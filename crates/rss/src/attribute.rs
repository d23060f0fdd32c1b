// ABOUTME: XML attribute name/value pair used across the RSS object graph.
// ABOUTME: Validates non-blank names and renders the canonical name="value" form.

use std::fmt;

use quick_xml::escape::escape;
use serde::Serialize;

use crate::error::{Result, RssError};

/// An XML attribute: a non-blank name paired with a (possibly empty) value.
///
/// A missing value is coerced to the empty string at construction, so a
/// stored attribute never carries a "null" value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Builds an attribute. Fails if the name is blank.
    pub fn new(name: impl Into<String>, value: Option<&str>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RssError::invalid("attributes MUST have a name"));
        }
        Ok(Attribute {
            name,
            value: value.unwrap_or_default().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, escape(self.value.as_str()))
    }
}

/// Case-sensitive attribute lookup by name.
pub fn find<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|a| a.name() == name)
}

/// Case-insensitive attribute lookup, used where the original reader is
/// lenient (the guid isPermaLink attribute).
pub fn find_ignore_case<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|a| a.name().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        assert!(Attribute::new("", Some("x")).is_err());
        assert!(Attribute::new("   ", Some("x")).is_err());
    }

    #[test]
    fn test_missing_value_coerced_to_empty() {
        let attr = Attribute::new("domain", None).unwrap();
        assert_eq!(attr.value(), "");
    }

    #[test]
    fn test_display_escapes_value() {
        let attr = Attribute::new("url", Some("http://x?a=1&b=2")).unwrap();
        assert_eq!(attr.to_string(), "url=\"http://x?a=1&amp;b=2\"");
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let attrs = vec![Attribute::new("isPermaLink", Some("true")).unwrap()];
        assert!(find(&attrs, "ispermalink").is_none());
        assert!(find_ignore_case(&attrs, "ispermalink").is_some());
    }
}
