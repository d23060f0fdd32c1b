// ABOUTME: The rss document root: one channel, the top-level attribute list, extensions.
// ABOUTME: Forces version="2.0" first and aggregates unbound-prefix failures in a second pass.

use serde::Serialize;

use crate::attribute::Attribute;
use crate::channel::Channel;
use crate::error::{Result, RssError};
use crate::extension::Extension;

/// A complete RSS 2.0 document.
///
/// The `version` attribute is always first in the attribute list and forced
/// to the literal `2.0`. After the subtree is assembled, a second pass
/// collects every namespace prefix referenced by extension elements
/// anywhere in the tree and reports all unbound prefixes together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rss {
    channel: Channel,
    attributes: Vec<Attribute>,
    extensions: Vec<Extension>,
}

impl Rss {
    pub fn new(
        channel: Channel,
        attributes: Vec<Attribute>,
        extensions: Vec<Extension>,
    ) -> Result<Self> {
        let mut ordered = Vec::with_capacity(attributes.len() + 1);
        ordered.push(Attribute::new("version", Some("2.0"))?);
        ordered.extend(attributes.into_iter().filter(|a| a.name() != "version"));

        let rss = Rss {
            channel,
            attributes: ordered,
            extensions,
        };
        rss.check_prefixes()?;
        Ok(rss)
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Top-level attributes in emission order, version first.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// Collects every prefix referenced by an extension element at the
    /// document, channel, or item level and verifies each against the
    /// declared `xmlns:*` attributes. All offending prefixes are reported
    /// in one aggregated error, not one at a time.
    fn check_prefixes(&self) -> Result<()> {
        let mut unbound: Vec<String> = Vec::new();
        let mut check = |ext: &Extension| {
            if let Some(prefix) = ext.prefix() {
                // The xml prefix is bound by definition.
                if prefix != "xml" && !self.declares_prefix(prefix) {
                    if !unbound.iter().any(|p| p == prefix) {
                        unbound.push(prefix.to_string());
                    }
                }
            }
        };

        for ext in &self.extensions {
            check(ext);
        }
        for ext in self.channel.extensions() {
            check(ext);
        }
        for item in self.channel.items() {
            for ext in item.extensions() {
                check(ext);
            }
        }

        if unbound.is_empty() {
            Ok(())
        } else {
            Err(RssError::UnboundPrefix(unbound))
        }
    }

    fn declares_prefix(&self, prefix: &str) -> bool {
        let declaration = format!("xmlns:{}", prefix);
        self.attributes.iter().any(|a| a.name() == declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::scalars::{Description, Link, Title};

    fn channel_with_extension(ext: Extension) -> Channel {
        Channel::builder()
            .title(Title::new("t").unwrap())
            .link(Link::new("http://x.net").unwrap())
            .description(Description::new("d"))
            .extension(ext)
            .build()
            .unwrap()
    }

    #[test]
    fn test_version_forced_first() {
        let channel = Channel::builder()
            .title(Title::new("t").unwrap())
            .link(Link::new("http://x.net").unwrap())
            .description(Description::new("d"))
            .build()
            .unwrap();
        let attrs = vec![
            Attribute::new("xmlns:atom", Some("http://www.w3.org/2005/Atom")).unwrap(),
            Attribute::new("version", Some("0.91")).unwrap(),
        ];
        let rss = Rss::new(channel, attrs, Vec::new()).unwrap();
        assert_eq!(rss.attributes()[0].name(), "version");
        assert_eq!(rss.attributes()[0].value(), "2.0");
        assert_eq!(rss.attributes().len(), 2);
    }

    #[test]
    fn test_unbound_prefix_rejected() {
        let ext = Extension::new("test:ext", Vec::new(), Some("x".to_string())).unwrap();
        let err = Rss::new(channel_with_extension(ext), Vec::new(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("test"));
    }

    #[test]
    fn test_declared_prefix_accepted() {
        let ext = Extension::new("test:ext", Vec::new(), Some("x".to_string())).unwrap();
        let attrs = vec![Attribute::new("xmlns:test", Some("http://test.example/ns")).unwrap()];
        assert!(Rss::new(channel_with_extension(ext), attrs, Vec::new()).is_ok());
    }

    #[test]
    fn test_unbound_prefixes_aggregated() {
        let channel = Channel::builder()
            .title(Title::new("t").unwrap())
            .link(Link::new("http://x.net").unwrap())
            .description(Description::new("d"))
            .extension(Extension::new("a:one", Vec::new(), None).unwrap())
            .item(
                Item::builder()
                    .title(Title::new("i").unwrap())
                    .extension(Extension::new("b:two", Vec::new(), None).unwrap())
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let err = Rss::new(channel, Vec::new(), Vec::new()).unwrap_err();
        match err {
            RssError::UnboundPrefix(prefixes) => {
                assert_eq!(prefixes, vec!["a".to_string(), "b".to_string()])
            }
            other => panic!("expected UnboundPrefix, got {:?}", other),
        }
    }

    #[test]
    fn test_xml_prefix_always_bound() {
        let ext = Extension::new("xml:base", Vec::new(), None).unwrap();
        assert!(Rss::new(channel_with_extension(ext), Vec::new(), Vec::new()).is_ok());
    }
}
