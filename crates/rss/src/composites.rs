// ABOUTME: Composite channel sub-elements: image, textInput, skipHours, skipDays.
// ABOUTME: Cross-field required/optional invariants are enforced by the constructors.

use serde::Serialize;

use crate::error::{Result, RssError};
use crate::scalars::{Day, Description, Height, Hour, Link, Name, Title, Url, Width};

/// A channel image: required url, title, and link, plus optional bounded
/// width/height and a description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    url: Url,
    title: Title,
    link: Link,
    width: Option<Width>,
    height: Option<Height>,
    description: Option<Description>,
}

impl Image {
    pub fn new(
        url: Url,
        title: Title,
        link: Link,
        width: Option<Width>,
        height: Option<Height>,
        description: Option<Description>,
    ) -> Self {
        Image {
            url,
            title,
            link,
            width,
            height,
            description,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn width(&self) -> Option<&Width> {
        self.width.as_ref()
    }

    pub fn height(&self) -> Option<&Height> {
        self.height.as_ref()
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }
}

/// A textInput element; all four children are required.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextInput {
    title: Title,
    description: Description,
    name: Name,
    link: Link,
}

impl TextInput {
    pub fn new(title: Title, description: Description, name: Name, link: Link) -> Self {
        TextInput {
            title,
            description,
            name,
            link,
        }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn link(&self) -> &Link {
        &self.link
    }
}

/// A non-empty ordered list of hours the aggregator may skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkipHours {
    hours: Vec<Hour>,
}

impl SkipHours {
    pub fn new(hours: Vec<Hour>) -> Result<Self> {
        if hours.is_empty() {
            return Err(RssError::invalid(
                "skipHours elements MUST contain at least one hour element",
            ));
        }
        Ok(SkipHours { hours })
    }

    pub fn hours(&self) -> &[Hour] {
        &self.hours
    }
}

/// A non-empty ordered list of weekday names the aggregator may skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkipDays {
    days: Vec<Day>,
}

impl SkipDays {
    pub fn new(days: Vec<Day>) -> Result<Self> {
        if days.is_empty() {
            return Err(RssError::invalid(
                "skipDays elements MUST contain at least one day element",
            ));
        }
        Ok(SkipDays { days })
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }
}
