// ABOUTME: Leaf RSS elements that carry attributes: category, cloud, enclosure, guid, source.
// ABOUTME: Required attributes are checked in fixed order; the first missing one wins.

use std::fmt;

use quick_xml::escape::escape;
use serde::Serialize;

use crate::attribute::{self, Attribute};
use crate::error::{Result, RssError};

/// A category element: non-blank value plus an optional domain attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    value: String,
    domain: Option<String>,
}

impl Category {
    pub fn new(value: &str, domain: Option<&str>) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(RssError::invalid("category elements MUST contain text"));
        }
        Ok(Category {
            value: value.to_string(),
            domain: domain.map(str::to_string),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.domain {
            Some(domain) => write!(
                f,
                "<category domain=\"{}\">{}</category>",
                escape(domain.as_str()),
                escape(self.value.as_str())
            ),
            None => write!(f, "<category>{}</category>", escape(self.value.as_str())),
        }
    }
}

/// A cloud element: five required attributes, protocol restricted to
/// xml-rpc or soap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cloud {
    domain: String,
    port: String,
    path: String,
    register_procedure: String,
    protocol: String,
}

impl Cloud {
    /// Attribute presence is checked in the fixed order domain, port, path,
    /// registerProcedure, protocol.
    pub fn new(attributes: &[Attribute]) -> Result<Self> {
        let required = |name: &str| -> Result<String> {
            attribute::find(attributes, name)
                .map(|a| a.value().to_string())
                .ok_or_else(|| {
                    RssError::invalid(format!("cloud elements MUST have a {} attribute", name))
                })
        };
        let domain = required("domain")?;
        let port = required("port")?;
        let path = required("path")?;
        let register_procedure = required("registerProcedure")?;
        let protocol = required("protocol")?;
        if protocol != "xml-rpc" && protocol != "soap" {
            return Err(RssError::invalid(format!(
                "cloud protocol MUST be xml-rpc or soap, got '{}'",
                protocol
            )));
        }
        Ok(Cloud {
            domain,
            port,
            path,
            register_procedure,
            protocol,
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn register_procedure(&self) -> &str {
        &self.register_procedure
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// The five attributes in canonical order, ready for emission.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("domain", self.domain.as_str()),
            ("port", self.port.as_str()),
            ("path", self.path.as_str()),
            ("registerProcedure", self.register_procedure.as_str()),
            ("protocol", self.protocol.as_str()),
        ]
    }
}

impl fmt::Display for Cloud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<cloud")?;
        for (name, value) in self.attributes() {
            write!(f, " {}=\"{}\"", name, escape(value))?;
        }
        write!(f, " />")
    }
}

/// An enclosure element: url, length, and type attributes are required;
/// any further attributes pass through unvalidated and are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enclosure {
    attributes: Vec<Attribute>,
}

impl Enclosure {
    pub fn new(attributes: Vec<Attribute>) -> Result<Self> {
        for name in ["url", "length", "type"] {
            if attribute::find(&attributes, name).is_none() {
                return Err(RssError::invalid(format!(
                    "enclosure elements MUST have a {} attribute",
                    name
                )));
            }
        }
        Ok(Enclosure { attributes })
    }

    pub fn url(&self) -> &str {
        attribute::find(&self.attributes, "url")
            .map(Attribute::value)
            .unwrap_or_default()
    }

    pub fn length(&self) -> &str {
        attribute::find(&self.attributes, "length")
            .map(Attribute::value)
            .unwrap_or_default()
    }

    pub fn mime_type(&self) -> &str {
        attribute::find(&self.attributes, "type")
            .map(Attribute::value)
            .unwrap_or_default()
    }

    /// All attributes in their stored order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

impl fmt::Display for Enclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<enclosure")?;
        for attr in &self.attributes {
            write!(f, " {}", attr)?;
        }
        write!(f, " />")
    }
}

/// A guid element: string value plus the optional isPermaLink flag.
/// Absence of the attribute is preserved rather than defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guid {
    value: String,
    is_perma_link: Option<bool>,
}

impl Guid {
    pub fn new(value: &str, is_perma_link: Option<bool>) -> Self {
        Guid {
            value: value.to_string(),
            is_perma_link,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_perma_link(&self) -> Option<bool> {
        self.is_perma_link
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.is_perma_link {
            Some(flag) => write!(
                f,
                "<guid isPermaLink=\"{}\">{}</guid>",
                flag,
                escape(self.value.as_str())
            ),
            None => write!(f, "<guid>{}</guid>", escape(self.value.as_str())),
        }
    }
}

/// A source element: non-blank value plus a required url attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    value: String,
    url: String,
}

impl Source {
    pub fn new(value: &str, url: Option<&str>) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(RssError::invalid("source elements MUST contain text"));
        }
        let url = url.ok_or_else(|| {
            RssError::invalid("source elements MUST have a url attribute")
        })?;
        Ok(Source {
            value: value.to_string(),
            url: url.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<source url=\"{}\">{}</source>",
            escape(self.url.as_str()),
            escape(self.value.as_str())
        )
    }
}
