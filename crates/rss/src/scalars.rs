// ABOUTME: Validated scalar element types for the core RSS 2.0 vocabulary.
// ABOUTME: Each wraps one string or number, checks its rule at construction, and renders its canonical tag.

use std::fmt;

use quick_xml::escape::escape;
use serde::Serialize;

use crate::error::{Result, RssError};
use crate::scheme;

/// The seven weekday names accepted by the day element, and nothing else.
pub static DAY_NAMES: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn require_text(value: &str, element: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(RssError::invalid(format!(
            "{} elements MUST contain text",
            element
        )));
    }
    Ok(value.to_string())
}

fn require_link(value: &str, element: &str) -> Result<String> {
    let value = require_text(value, element)?;
    let scheme = value.split(':').next().unwrap_or_default();
    if !scheme::is_registered(scheme) {
        return Err(RssError::invalid(format!(
            "{} value '{}' does not begin with a registered URI scheme",
            element, value
        )));
    }
    Ok(value)
}

fn parse_numeric(value: &str, element: &str) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        RssError::invalid(format!("{} value '{}' is not numeric", element, value))
    })
}

macro_rules! tag_display {
    ($type:ty, $tag:literal) => {
        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    write!(f, concat!("<", $tag, " />"))
                } else {
                    write!(
                        f,
                        concat!("<", $tag, ">{}</", $tag, ">"),
                        escape(self.0.as_str())
                    )
                }
            }
        }
    };
}

// ----------------------------------------------------------------------------
// Required-text elements (blank rejected)
// ----------------------------------------------------------------------------

/// A title element; non-blank text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title(String);

impl Title {
    pub fn new(value: &str) -> Result<Self> {
        Ok(Title(require_text(value, "title")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(Title, "title");

/// A link element; non-blank, and the scheme before the first `:` must be
/// an IANA-registered URI scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link(String);

impl Link {
    pub fn new(value: &str) -> Result<Self> {
        Ok(Link(require_link(value, "link")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(Link, "link");

/// A url element (image url); same scheme rule as link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Url(String);

impl Url {
    pub fn new(value: &str) -> Result<Self> {
        Ok(Url(require_link(value, "url")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(Url, "url");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language(String);

impl Language {
    pub fn new(value: &str) -> Result<Self> {
        Ok(Language(require_text(value, "language")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(Language, "language");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Copyright(String);

impl Copyright {
    pub fn new(value: &str) -> Result<Self> {
        Ok(Copyright(require_text(value, "copyright")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(Copyright, "copyright");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagingEditor(String);

impl ManagingEditor {
    pub fn new(value: &str) -> Result<Self> {
        Ok(ManagingEditor(require_text(value, "managingEditor")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(ManagingEditor, "managingEditor");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebMaster(String);

impl WebMaster {
    pub fn new(value: &str) -> Result<Self> {
        Ok(WebMaster(require_text(value, "webMaster")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(WebMaster, "webMaster");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ttl(String);

impl Ttl {
    pub fn new(value: &str) -> Result<Self> {
        Ok(Ttl(require_text(value, "ttl")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(Ttl, "ttl");

/// The name element of a textInput.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self> {
        Ok(Name(require_text(value, "name")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(Name, "name");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comments(String);

impl Comments {
    pub fn new(value: &str) -> Result<Self> {
        Ok(Comments(require_text(value, "comments")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(Comments, "comments");

// ----------------------------------------------------------------------------
// Lenient text elements
// ----------------------------------------------------------------------------

/// A description element. Blank input is coerced to the empty string and
/// never rejected; an empty description renders self-closing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Description(String);

impl Description {
    pub fn new(value: &str) -> Self {
        if value.trim().is_empty() {
            Description(String::new())
        } else {
            Description(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
tag_display!(Description, "description");

/// An item author (conventionally an email address); stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author(String);

impl Author {
    pub fn new(value: &str) -> Self {
        Author(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(Author, "author");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generator(String);

impl Generator {
    pub fn new(value: &str) -> Self {
        Generator(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(Generator, "generator");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Docs(String);

impl Docs {
    pub fn new(value: &str) -> Self {
        Docs(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(Docs, "docs");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rating(String);

impl Rating {
    pub fn new(value: &str) -> Self {
        Rating(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(Rating, "rating");

// ----------------------------------------------------------------------------
// Numeric and enumerated elements
// ----------------------------------------------------------------------------

/// An image width; numeric and at most 144.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Width(i64);

impl Width {
    pub fn new(value: &str) -> Result<Self> {
        let width = parse_numeric(value, "width")?;
        if width > 144 {
            return Err(RssError::invalid(format!(
                "width cannot be greater than 144, got {}",
                width
            )));
        }
        Ok(Width(width))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<width>{}</width>", self.0)
    }
}

/// An image height; numeric and at most 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Height(i64);

impl Height {
    pub fn new(value: &str) -> Result<Self> {
        let height = parse_numeric(value, "height")?;
        if height > 400 {
            return Err(RssError::invalid(format!(
                "height cannot be greater than 400, got {}",
                height
            )));
        }
        Ok(Height(height))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<height>{}</height>", self.0)
    }
}

/// A skipHours hour; numeric and in [0, 23].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hour(i64);

impl Hour {
    pub fn new(value: &str) -> Result<Self> {
        let hour = parse_numeric(value, "hour")?;
        if !(0..=23).contains(&hour) {
            return Err(RssError::invalid(format!(
                "hour MUST be between 0 and 23, got {}",
                hour
            )));
        }
        Ok(Hour(hour))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<hour>{}</hour>", self.0)
    }
}

/// A skipDays day; exactly one of the seven weekday names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day(String);

impl Day {
    pub fn new(value: &str) -> Result<Self> {
        let value = value.trim();
        if !DAY_NAMES.contains(&value) {
            return Err(RssError::invalid(format!(
                "day MUST be one of {}, got '{}'",
                DAY_NAMES.join(", "),
                value
            )));
        }
        Ok(Day(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
tag_display!(Day, "day");
