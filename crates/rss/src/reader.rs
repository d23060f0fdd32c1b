// ABOUTME: Streaming pull-parse driver: consumes quick-xml events and builds the validated graph.
// ABOUTME: Dispatches on element name per nesting level; unknown names fall through to Extension.

use std::collections::HashMap;

use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;

use crate::attribute::{self, Attribute};
use crate::channel::Channel;
use crate::composites::{Image, SkipDays, SkipHours, TextInput};
use crate::dates::RssDate;
use crate::error::{Result, RssError};
use crate::extension::Extension;
use crate::item::Item;
use crate::leaves::{Category, Cloud, Enclosure, Guid, Source};
use crate::rss::Rss;
use crate::scalars::{
    Author, Comments, Copyright, Day, Description, Docs, Generator, Height, Hour, Language, Link,
    ManagingEditor, Name, Rating, Title, Ttl, Url, WebMaster, Width,
};

const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Per-parse state captured from the document prolog: the XML declaration
/// and any leading processing instructions. Threaded explicitly from a read
/// to a subsequent write, never stored globally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub version: Option<String>,
    pub encoding: Option<String>,
    pub processing_instructions: Vec<String>,
}

/// The result of a successful parse: the validated document plus the
/// session state the writer needs for an equivalent re-emission.
#[derive(Debug, Clone)]
pub struct ParsedFeed {
    pub rss: Rss,
    pub session: Session,
}

/// Parses an RSS 2.0 document from a string.
///
/// The parse is single-pass and streaming; the first violated invariant
/// aborts it, and no partial document is ever returned.
pub fn read(input: &str) -> Result<ParsedFeed> {
    // Text is trimmed per accumulated value, not per event: trimming each
    // event would eat significant whitespace around nested markup captured
    // into description and extension content.
    let mut reader = Reader::from_str(input);

    let mut session = Session::default();
    let mut rss_attributes: Vec<Attribute> = Vec::new();
    let mut extensions: Vec<Extension> = Vec::new();
    let mut channel: Option<Channel> = None;

    loop {
        match reader.read_event().map_err(RssError::xml)? {
            Event::Decl(decl) => {
                session.version = decl
                    .version()
                    .ok()
                    .map(|v| String::from_utf8_lossy(&v).to_string());
                session.encoding = decl
                    .encoding()
                    .and_then(|e| e.ok())
                    .map(|e| String::from_utf8_lossy(&e).to_string());
            }
            Event::PI(pi) => session
                .processing_instructions
                .push(String::from_utf8_lossy(&pi).to_string()),
            Event::Start(e) => {
                if element_name(&e) == "rss" {
                    rss_attributes = collect_attributes(&e)?;
                    let bindings = Bindings::from_attributes(&rss_attributes);
                    channel = read_rss_children(&mut reader, &bindings, &mut extensions)?;
                } else {
                    // An unrecognized root becomes a document-level
                    // extension; the missing channel is reported below.
                    extensions.push(read_extension(&mut reader, &e, false, &Bindings::default())?);
                }
            }
            Event::Empty(e) => {
                if element_name(&e) == "rss" {
                    rss_attributes = collect_attributes(&e)?;
                } else {
                    extensions.push(read_extension(&mut reader, &e, true, &Bindings::default())?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let channel = channel
        .ok_or_else(|| RssError::invalid("rss documents MUST contain a channel element"))?;
    let rss = Rss::new(channel, rss_attributes, extensions)?;
    Ok(ParsedFeed { rss, session })
}

/// Parses an RSS 2.0 document from raw bytes (UTF-8).
pub fn read_bytes(input: &[u8]) -> Result<ParsedFeed> {
    let text = std::str::from_utf8(input)
        .map_err(|e| RssError::xml(format!("input is not valid utf-8: {}", e)))?;
    read(text)
}

// ----------------------------------------------------------------------------
// Namespace bindings for the XHTML-detection heuristic
// ----------------------------------------------------------------------------

/// Prefix bindings visible to an extension element: the declarations on the
/// rss root plus any declared on the element itself. Deliberately not a
/// full in-scope stack; this mirrors the documented heuristic.
#[derive(Debug, Clone, Default)]
struct Bindings {
    prefixed: HashMap<String, String>,
    default_ns: Option<String>,
}

impl Bindings {
    fn from_attributes(attributes: &[Attribute]) -> Self {
        let mut bindings = Bindings::default();
        bindings.absorb(attributes);
        bindings
    }

    fn with_element(&self, attributes: &[Attribute]) -> Self {
        let mut scoped = self.clone();
        scoped.absorb(attributes);
        scoped
    }

    fn absorb(&mut self, attributes: &[Attribute]) {
        for attr in attributes {
            if let Some(prefix) = attr.name().strip_prefix("xmlns:") {
                self.prefixed
                    .insert(prefix.to_string(), attr.value().to_string());
            } else if attr.name() == "xmlns" {
                self.default_ns = Some(attr.value().to_string());
            }
        }
    }

    /// True when the element name resolves to the XHTML namespace: either
    /// its prefix is bound to it, or the element is unprefixed and the
    /// default namespace in scope is XHTML.
    fn is_xhtml(&self, name: &str) -> bool {
        match name.split_once(':') {
            Some((prefix, _)) => {
                self.prefixed.get(prefix).map(String::as_str) == Some(XHTML_NAMESPACE)
            }
            None => self.default_ns.as_deref() == Some(XHTML_NAMESPACE),
        }
    }
}

// ----------------------------------------------------------------------------
// Container sub-loops
// ----------------------------------------------------------------------------

fn read_rss_children(
    reader: &mut Reader<&[u8]>,
    bindings: &Bindings,
    extensions: &mut Vec<Extension>,
) -> Result<Option<Channel>> {
    let mut channel = None;
    loop {
        match reader.read_event().map_err(RssError::xml)? {
            Event::Start(e) => {
                if element_name(&e) == "channel" {
                    channel = Some(read_channel(reader, bindings)?);
                } else {
                    extensions.push(read_extension(reader, &e, false, bindings)?);
                }
            }
            Event::Empty(e) => {
                if element_name(&e) == "channel" {
                    channel = Some(Channel::builder().build()?);
                } else {
                    extensions.push(read_extension(reader, &e, true, bindings)?);
                }
            }
            Event::End(e) if e.name().as_ref() == b"rss" => break,
            Event::Eof => return Err(premature_eof("rss")),
            _ => {}
        }
    }
    Ok(channel)
}

fn read_channel(reader: &mut Reader<&[u8]>, bindings: &Bindings) -> Result<Channel> {
    let mut builder = Channel::builder();
    loop {
        match reader.read_event().map_err(RssError::xml)? {
            Event::Start(e) => {
                let name = element_name(&e);
                builder = match name.as_str() {
                    "title" => builder.title(Title::new(&read_text(reader, "title")?)?),
                    "link" => builder.link(Link::new(&read_text(reader, "link")?)?),
                    "description" => builder
                        .description(Description::new(&read_markup_text(reader, "description")?)),
                    "language" => {
                        builder.language(Language::new(&read_text(reader, "language")?)?)
                    }
                    "copyright" => {
                        builder.copyright(Copyright::new(&read_text(reader, "copyright")?)?)
                    }
                    "managingEditor" => builder.managing_editor(ManagingEditor::new(
                        &read_text(reader, "managingEditor")?,
                    )?),
                    "webMaster" => {
                        builder.web_master(WebMaster::new(&read_text(reader, "webMaster")?)?)
                    }
                    "pubDate" => {
                        builder.pub_date(RssDate::parse(&read_text(reader, "pubDate")?)?)
                    }
                    "lastBuildDate" => builder
                        .last_build_date(RssDate::parse(&read_text(reader, "lastBuildDate")?)?),
                    "generator" => {
                        builder.generator(Generator::new(&read_text(reader, "generator")?))
                    }
                    "docs" => builder.docs(Docs::new(&read_text(reader, "docs")?)),
                    "rating" => builder.rating(Rating::new(&read_text(reader, "rating")?)),
                    "ttl" => builder.ttl(Ttl::new(&read_text(reader, "ttl")?)?),
                    "category" => {
                        let domain = get_attribute(&e, "domain")?;
                        let value = read_text(reader, "category")?;
                        builder.category(Category::new(&value, domain.as_deref())?)
                    }
                    "cloud" => {
                        let attrs = collect_attributes(&e)?;
                        skip_element(reader, "cloud")?;
                        builder.cloud(Cloud::new(&attrs)?)
                    }
                    "image" => builder.image(read_image(reader)?),
                    "textInput" => builder.text_input(read_text_input(reader)?),
                    "skipHours" => builder.skip_hours(read_skip_hours(reader)?),
                    "skipDays" => builder.skip_days(read_skip_days(reader)?),
                    "item" => builder.item(read_item(reader, bindings)?),
                    _ => builder.extension(read_extension(reader, &e, false, bindings)?),
                };
            }
            Event::Empty(e) => {
                let name = element_name(&e);
                builder = match name.as_str() {
                    "title" => builder.title(Title::new("")?),
                    "link" => builder.link(Link::new("")?),
                    "description" => builder.description(Description::new("")),
                    "language" => builder.language(Language::new("")?),
                    "copyright" => builder.copyright(Copyright::new("")?),
                    "managingEditor" => builder.managing_editor(ManagingEditor::new("")?),
                    "webMaster" => builder.web_master(WebMaster::new("")?),
                    "pubDate" | "lastBuildDate" => return Err(RssError::DateParse(String::new())),
                    "generator" => builder.generator(Generator::new("")),
                    "docs" => builder.docs(Docs::new("")),
                    "rating" => builder.rating(Rating::new("")),
                    "ttl" => builder.ttl(Ttl::new("")?),
                    "category" => builder.category(Category::new("", None)?),
                    "cloud" => builder.cloud(Cloud::new(&collect_attributes(&e)?)?),
                    "image" => {
                        return Err(RssError::invalid(
                            "image elements MUST contain a url element",
                        ))
                    }
                    "textInput" => {
                        return Err(RssError::invalid(
                            "textInput elements MUST contain a title element",
                        ))
                    }
                    "skipHours" => builder.skip_hours(SkipHours::new(Vec::new())?),
                    "skipDays" => builder.skip_days(SkipDays::new(Vec::new())?),
                    "item" => builder.item(Item::builder().build()?),
                    _ => builder.extension(read_extension(reader, &e, true, bindings)?),
                };
            }
            Event::End(e) if e.name().as_ref() == b"channel" => break,
            Event::Eof => return Err(premature_eof("channel")),
            _ => {}
        }
    }
    builder.build()
}

fn read_item(reader: &mut Reader<&[u8]>, bindings: &Bindings) -> Result<Item> {
    let mut builder = Item::builder();
    loop {
        match reader.read_event().map_err(RssError::xml)? {
            Event::Start(e) => {
                let name = element_name(&e);
                builder = match name.as_str() {
                    "title" => builder.title(Title::new(&read_text(reader, "title")?)?),
                    "description" => builder
                        .description(Description::new(&read_markup_text(reader, "description")?)),
                    "link" => builder.link(Link::new(&read_text(reader, "link")?)?),
                    "author" => builder.author(Author::new(&read_text(reader, "author")?)),
                    "comments" => {
                        builder.comments(Comments::new(&read_text(reader, "comments")?)?)
                    }
                    "pubDate" => {
                        builder.pub_date(RssDate::parse(&read_text(reader, "pubDate")?)?)
                    }
                    "category" => {
                        let domain = get_attribute(&e, "domain")?;
                        let value = read_text(reader, "category")?;
                        builder.category(Category::new(&value, domain.as_deref())?)
                    }
                    "enclosure" => {
                        let attrs = collect_attributes(&e)?;
                        skip_element(reader, "enclosure")?;
                        builder.enclosure(Enclosure::new(attrs)?)
                    }
                    "guid" => {
                        let attrs = collect_attributes(&e)?;
                        let value = read_text(reader, "guid")?;
                        builder.guid(build_guid(&value, &attrs))
                    }
                    "source" => {
                        let url = get_attribute(&e, "url")?;
                        let value = read_text(reader, "source")?;
                        builder.source(Source::new(&value, url.as_deref())?)
                    }
                    _ => builder.extension(read_extension(reader, &e, false, bindings)?),
                };
            }
            Event::Empty(e) => {
                let name = element_name(&e);
                builder = match name.as_str() {
                    "title" => builder.title(Title::new("")?),
                    "description" => builder.description(Description::new("")),
                    "link" => builder.link(Link::new("")?),
                    "author" => builder.author(Author::new("")),
                    "comments" => builder.comments(Comments::new("")?),
                    "pubDate" => return Err(RssError::DateParse(String::new())),
                    "category" => builder.category(Category::new("", None)?),
                    "enclosure" => builder.enclosure(Enclosure::new(collect_attributes(&e)?)?),
                    "guid" => builder.guid(build_guid("", &collect_attributes(&e)?)),
                    "source" => {
                        let url = get_attribute(&e, "url")?;
                        builder.source(Source::new("", url.as_deref())?)
                    }
                    _ => builder.extension(read_extension(reader, &e, true, bindings)?),
                };
            }
            Event::End(e) if e.name().as_ref() == b"item" => break,
            Event::Eof => return Err(premature_eof("item")),
            _ => {}
        }
    }
    builder.build()
}

/// The isPermaLink attribute lookup is case-insensitive; any value other
/// than "true" (ignoring case) reads as false.
fn build_guid(value: &str, attrs: &[Attribute]) -> Guid {
    let is_perma_link = attribute::find_ignore_case(attrs, "isPermaLink")
        .map(|a| a.value().eq_ignore_ascii_case("true"));
    Guid::new(value, is_perma_link)
}

fn read_image(reader: &mut Reader<&[u8]>) -> Result<Image> {
    let mut url = None;
    let mut title = None;
    let mut link = None;
    let mut width = None;
    let mut height = None;
    let mut description = None;
    loop {
        match reader.read_event().map_err(RssError::xml)? {
            Event::Start(e) => match element_name(&e).as_str() {
                "url" => url = Some(Url::new(&read_text(reader, "url")?)?),
                "title" => title = Some(Title::new(&read_text(reader, "title")?)?),
                "link" => link = Some(Link::new(&read_text(reader, "link")?)?),
                "width" => width = Some(Width::new(&read_text(reader, "width")?)?),
                "height" => height = Some(Height::new(&read_text(reader, "height")?)?),
                "description" => {
                    description = Some(Description::new(&read_text(reader, "description")?))
                }
                other => skip_element(reader, other)?,
            },
            Event::Empty(e) => {
                if element_name(&e) == "description" {
                    description = Some(Description::new(""));
                }
            }
            Event::End(e) if e.name().as_ref() == b"image" => break,
            Event::Eof => return Err(premature_eof("image")),
            _ => {}
        }
    }
    let url =
        url.ok_or_else(|| RssError::invalid("image elements MUST contain a url element"))?;
    let title =
        title.ok_or_else(|| RssError::invalid("image elements MUST contain a title element"))?;
    let link =
        link.ok_or_else(|| RssError::invalid("image elements MUST contain a link element"))?;
    Ok(Image::new(url, title, link, width, height, description))
}

fn read_text_input(reader: &mut Reader<&[u8]>) -> Result<TextInput> {
    let mut title = None;
    let mut description = None;
    let mut name = None;
    let mut link = None;
    loop {
        match reader.read_event().map_err(RssError::xml)? {
            Event::Start(e) => match element_name(&e).as_str() {
                "title" => title = Some(Title::new(&read_text(reader, "title")?)?),
                "description" => {
                    description = Some(Description::new(&read_text(reader, "description")?))
                }
                "name" => name = Some(Name::new(&read_text(reader, "name")?)?),
                "link" => link = Some(Link::new(&read_text(reader, "link")?)?),
                other => skip_element(reader, other)?,
            },
            Event::Empty(e) => {
                if element_name(&e) == "description" {
                    description = Some(Description::new(""));
                }
            }
            Event::End(e) if e.name().as_ref() == b"textInput" => break,
            Event::Eof => return Err(premature_eof("textInput")),
            _ => {}
        }
    }
    let title = title
        .ok_or_else(|| RssError::invalid("textInput elements MUST contain a title element"))?;
    let description = description.ok_or_else(|| {
        RssError::invalid("textInput elements MUST contain a description element")
    })?;
    let name = name
        .ok_or_else(|| RssError::invalid("textInput elements MUST contain a name element"))?;
    let link = link
        .ok_or_else(|| RssError::invalid("textInput elements MUST contain a link element"))?;
    Ok(TextInput::new(title, description, name, link))
}

fn read_skip_hours(reader: &mut Reader<&[u8]>) -> Result<SkipHours> {
    let mut hours = Vec::new();
    loop {
        match reader.read_event().map_err(RssError::xml)? {
            Event::Start(e) => {
                let name = element_name(&e);
                if name == "hour" {
                    hours.push(Hour::new(&read_text(reader, "hour")?)?);
                } else {
                    skip_element(reader, &name)?;
                }
            }
            Event::End(e) if e.name().as_ref() == b"skipHours" => break,
            Event::Eof => return Err(premature_eof("skipHours")),
            _ => {}
        }
    }
    SkipHours::new(hours)
}

fn read_skip_days(reader: &mut Reader<&[u8]>) -> Result<SkipDays> {
    let mut days = Vec::new();
    loop {
        match reader.read_event().map_err(RssError::xml)? {
            Event::Start(e) => {
                let name = element_name(&e);
                if name == "day" {
                    days.push(Day::new(&read_text(reader, "day")?)?);
                } else {
                    skip_element(reader, &name)?;
                }
            }
            Event::End(e) if e.name().as_ref() == b"skipDays" => break,
            Event::Eof => return Err(premature_eof("skipDays")),
            _ => {}
        }
    }
    SkipDays::new(days)
}

// ----------------------------------------------------------------------------
// Extension capture
// ----------------------------------------------------------------------------

fn read_extension(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
    is_empty: bool,
    bindings: &Bindings,
) -> Result<Extension> {
    let name = element_name(start);
    let attributes = collect_attributes(start)?;
    if is_empty {
        return Extension::new(&name, attributes, None);
    }
    let scoped = bindings.with_element(&attributes);
    let content = if scoped.is_xhtml(&name) {
        // XHTML subtree: raw markup preserved, character data re-escaped
        // on the way back out.
        read_markup_text(reader, &name)?
    } else {
        read_extension_content(reader, &name, &scoped)?
    };
    let content = if content.is_empty() {
        None
    } else {
        Some(content)
    };
    Extension::new(&name, attributes, content)
}

/// Non-XHTML extension content: nested elements are recursively captured as
/// sub-extensions and folded into the parent's content string as markup.
fn read_extension_content(
    reader: &mut Reader<&[u8]>,
    end_name: &str,
    bindings: &Bindings,
) -> Result<String> {
    let mut content = String::new();
    loop {
        match reader.read_event().map_err(RssError::xml)? {
            Event::Start(e) => {
                let child = read_extension(reader, &e, false, bindings)?;
                content.push_str(&child.to_inline_markup());
            }
            Event::Empty(e) => {
                let child = read_extension(reader, &e, true, bindings)?;
                content.push_str(&child.to_inline_markup());
            }
            Event::Text(t) => content.push_str(&t.xml_content().map_err(RssError::xml)?),
            Event::GeneralRef(r) => content.push_str(&resolve_reference(&r)?),
            Event::CData(c) => content.push_str(&String::from_utf8_lossy(&c)),
            Event::End(e) if element_name_end(e.name().as_ref()) == end_name => break,
            Event::Eof => return Err(premature_eof(end_name)),
            _ => {}
        }
    }
    Ok(content.trim().to_string())
}

// ----------------------------------------------------------------------------
// Token-level helpers
// ----------------------------------------------------------------------------

fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).to_string()
}

fn element_name_end(name: &[u8]) -> String {
    String::from_utf8_lossy(name).to_string()
}

fn collect_attributes(e: &BytesStart) -> Result<Vec<Attribute>> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(RssError::xml)?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value().map_err(RssError::xml)?;
        attributes.push(Attribute::new(name, Some(&value))?);
    }
    Ok(attributes)
}

/// Resolves a general entity reference event into character content.
/// The predefined XML entities and numeric character references are the
/// full set an RSS document without a DTD can legally use.
fn resolve_reference(r: &BytesRef) -> Result<String> {
    if let Some(ch) = r.resolve_char_ref().map_err(RssError::xml)? {
        return Ok(ch.to_string());
    }
    let name = r.decode().map_err(RssError::xml)?;
    let resolved = match name.as_ref() {
        "lt" => '<',
        "gt" => '>',
        "amp" => '&',
        "apos" => '\'',
        "quot" => '"',
        other => {
            return Err(RssError::xml(format!(
                "unresolvable entity reference &{};",
                other
            )))
        }
    };
    Ok(resolved.to_string())
}

fn get_attribute(e: &BytesStart, name: &str) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(RssError::xml)?;
        if attr.key.as_ref() == name.as_bytes() {
            let value = attr.unescape_value().map_err(RssError::xml)?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Reads plain character content up to the matching end tag. Nested
/// elements are not allowed here; description uses `read_markup_text`.
fn read_text(reader: &mut Reader<&[u8]>, element: &str) -> Result<String> {
    let mut text = String::new();
    loop {
        match reader.read_event().map_err(RssError::xml)? {
            Event::Text(t) => text.push_str(&t.xml_content().map_err(RssError::xml)?),
            Event::GeneralRef(r) => text.push_str(&resolve_reference(&r)?),
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
            Event::Start(e) | Event::Empty(e) => {
                return Err(RssError::invalid(format!(
                    "unexpected <{}> element inside <{}>",
                    element_name(&e),
                    element
                )));
            }
            Event::End(e) if element_name_end(e.name().as_ref()) == element => break,
            Event::Eof => return Err(premature_eof(element)),
            _ => {}
        }
    }
    Ok(text.trim().to_string())
}

/// The escaping sub-reader used for description content and XHTML capture:
/// nested markup is reassembled into the text value instead of being parsed
/// as structure, resynchronizing on open-element depth.
fn read_markup_text(reader: &mut Reader<&[u8]>, element: &str) -> Result<String> {
    let mut content = String::new();
    let mut depth = 0usize;
    loop {
        match reader.read_event().map_err(RssError::xml)? {
            Event::Start(e) => {
                push_markup_tag(&mut content, &e, false);
                depth += 1;
            }
            Event::Empty(e) => push_markup_tag(&mut content, &e, true),
            Event::Text(t) => content.push_str(&t.xml_content().map_err(RssError::xml)?),
            Event::GeneralRef(r) => content.push_str(&resolve_reference(&r)?),
            Event::CData(c) => content.push_str(&String::from_utf8_lossy(&c)),
            Event::End(e) => {
                let name = element_name_end(e.name().as_ref());
                if depth == 0 {
                    if name == element {
                        break;
                    }
                    return Err(RssError::xml(format!("mismatched end tag </{}>", name)));
                }
                content.push_str("</");
                content.push_str(&name);
                content.push('>');
                depth -= 1;
            }
            Event::Eof => return Err(premature_eof(element)),
            _ => {}
        }
    }
    Ok(content.trim().to_string())
}

fn push_markup_tag(content: &mut String, e: &BytesStart, self_closing: bool) {
    content.push('<');
    content.push_str(&element_name(e));
    for attr in e.attributes().flatten() {
        content.push(' ');
        content.push_str(&String::from_utf8_lossy(attr.key.as_ref()));
        content.push_str("=\"");
        match attr.unescape_value() {
            Ok(value) => content.push_str(&value),
            Err(_) => content.push_str(&String::from_utf8_lossy(&attr.value)),
        }
        content.push('"');
    }
    if self_closing {
        content.push_str(" />");
    } else {
        content.push('>');
    }
}

/// Consumes and discards everything up to the matching end tag.
fn skip_element(reader: &mut Reader<&[u8]>, element: &str) -> Result<()> {
    let mut depth = 0usize;
    loop {
        match reader.read_event().map_err(RssError::xml)? {
            Event::Start(_) => depth += 1,
            Event::End(e) => {
                if depth == 0 && element_name_end(e.name().as_ref()) == element {
                    return Ok(());
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => return Err(premature_eof(element)),
            _ => {}
        }
    }
}

fn premature_eof(element: &str) -> RssError {
    RssError::xml(format!("unexpected end of document inside <{}>", element))
}
