// ABOUTME: Extension elements: anything in a feed outside the core RSS 2.0 vocabulary.
// ABOUTME: Carries the element name, attributes, raw content, and the cached namespace prefix.

use std::fmt;

use quick_xml::escape::escape;
use serde::Serialize;

use crate::attribute::Attribute;
use crate::error::{Result, RssError};

/// An element not in the core RSS vocabulary, typically namespace-qualified
/// (Atom, Dublin Core, media RSS, inline XHTML blocks).
///
/// `content` holds decoded text; nested markup captured by the reader lives
/// in it as literal tag characters and is re-escaped on emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extension {
    name: String,
    attributes: Vec<Attribute>,
    content: Option<String>,
    prefix: Option<String>,
}

impl Extension {
    pub fn new(
        name: &str,
        attributes: Vec<Attribute>,
        content: Option<String>,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(RssError::invalid("extension elements MUST have a name"));
        }
        // Derived once here so the unbound-prefix pass never re-splits names.
        let prefix = name.split_once(':').map(|(p, _)| p.to_string());
        Ok(Extension {
            name: name.to_string(),
            attributes,
            content,
            prefix,
        })
    }

    /// The element name as it appeared, possibly `prefix:local`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The part of the name after the namespace prefix, if any.
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map(|(_, local)| local)
            .unwrap_or(&self.name)
    }

    /// The cached namespace prefix, if the name is qualified.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Renders the element in decoded form, i.e. with its content embedded
    /// verbatim. Used when a nested extension is folded into its parent's
    /// content string.
    pub fn to_inline_markup(&self) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(&self.name);
        for attr in &self.attributes {
            out.push(' ');
            out.push_str(attr.name());
            out.push_str("=\"");
            out.push_str(attr.value());
            out.push('"');
        }
        match &self.content {
            Some(content) if !content.is_empty() => {
                out.push('>');
                out.push_str(content);
                out.push_str("</");
                out.push_str(&self.name);
                out.push('>');
            }
            _ => out.push_str(" />"),
        }
        out
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for attr in &self.attributes {
            write!(f, " {}", attr)?;
        }
        match &self.content {
            Some(content) if !content.is_empty() => {
                write!(f, ">{}</{}>", escape(content.as_str()), self.name)
            }
            _ => write!(f, " />"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_derived_and_cached() {
        let ext = Extension::new("atom:link", Vec::new(), None).unwrap();
        assert_eq!(ext.prefix(), Some("atom"));
        assert_eq!(ext.local_name(), "link");

        let ext = Extension::new("unprefixed", Vec::new(), None).unwrap();
        assert_eq!(ext.prefix(), None);
        assert_eq!(ext.local_name(), "unprefixed");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(Extension::new("  ", Vec::new(), None).is_err());
    }

    #[test]
    fn test_display_escapes_content() {
        let ext = Extension::new(
            "content:encoded",
            Vec::new(),
            Some("<p>hi</p>".to_string()),
        )
        .unwrap();
        assert_eq!(
            ext.to_string(),
            "<content:encoded>&lt;p&gt;hi&lt;/p&gt;</content:encoded>"
        );
    }

    #[test]
    fn test_empty_content_renders_self_closing() {
        let attrs = vec![Attribute::new("href", Some("http://x/feed")).unwrap()];
        let ext = Extension::new("atom:link", attrs, None).unwrap();
        assert_eq!(ext.to_string(), "<atom:link href=\"http://x/feed\" />");
    }
}
