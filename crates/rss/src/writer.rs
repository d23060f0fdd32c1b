// ABOUTME: Streaming emission of a validated Rss graph back to XML.
// ABOUTME: Mirrors the reader's structure; empty-content elements go out self-closing.

use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::channel::Channel;
use crate::error::{Result, RssError};
use crate::extension::Extension;
use crate::item::Item;
use crate::leaves::Category;
use crate::reader::Session;
use crate::rss::Rss;

/// The identifying string stamped into the generator element on write.
pub fn generator_stamp() -> String {
    format!(
        "cascade-rss/{} (https://crates.io/crates/cascade-rss)",
        env!("CARGO_PKG_VERSION")
    )
}

/// Writer configuration.
///
/// `stamp_generator` preserves the library's deliberate re-stamping policy:
/// the emitted generator element carries this library's identifying string,
/// overriding any generator value on the source object. Defaults to true
/// for output compatibility; set to false to pass the source value through.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    pub stamp_generator: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            stamp_generator: true,
        }
    }
}

/// Serializes the document as a one-shot forward emission. The session
/// (captured by a prior read, or caller-built) supplies the XML declaration
/// and any leading processing instructions.
pub fn write(rss: &Rss, session: &Session, options: &WriteOptions) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    let version = session.version.as_deref().unwrap_or("1.0");
    let encoding = session.encoding.as_deref().unwrap_or("UTF-8");
    writer
        .write_event(Event::Decl(BytesDecl::new(version, Some(encoding), None)))
        .map_err(RssError::xml)?;
    for pi in &session.processing_instructions {
        writer
            .write_event(Event::PI(BytesPI::new(pi.as_str())))
            .map_err(RssError::xml)?;
    }

    let mut rss_start = BytesStart::new("rss");
    for attr in rss.attributes() {
        rss_start.push_attribute((attr.name(), attr.value()));
    }
    writer
        .write_event(Event::Start(rss_start))
        .map_err(RssError::xml)?;

    for ext in rss.extensions() {
        write_extension(&mut writer, ext)?;
    }
    write_channel(&mut writer, rss.channel(), options)?;

    writer
        .write_event(Event::End(BytesEnd::new("rss")))
        .map_err(RssError::xml)?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| RssError::xml(format!("emitted xml is not valid utf-8: {}", e)))
}

fn write_channel(
    writer: &mut Writer<Vec<u8>>,
    channel: &Channel,
    options: &WriteOptions,
) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("channel")))
        .map_err(RssError::xml)?;

    write_text_element(writer, "title", channel.title().as_str())?;
    write_text_element(writer, "link", channel.link().as_str())?;
    write_text_element(writer, "description", channel.description().as_str())?;

    if let Some(language) = channel.language() {
        write_text_element(writer, "language", language.as_str())?;
    }
    if let Some(copyright) = channel.copyright() {
        write_text_element(writer, "copyright", copyright.as_str())?;
    }
    if let Some(managing_editor) = channel.managing_editor() {
        write_text_element(writer, "managingEditor", managing_editor.as_str())?;
    }
    if let Some(web_master) = channel.web_master() {
        write_text_element(writer, "webMaster", web_master.as_str())?;
    }
    if let Some(pub_date) = channel.pub_date() {
        write_text_element(writer, "pubDate", &pub_date.canonical())?;
    }
    if let Some(last_build_date) = channel.last_build_date() {
        write_text_element(writer, "lastBuildDate", &last_build_date.canonical())?;
    }
    for category in channel.categories() {
        write_category(writer, category)?;
    }
    // The generator element is re-stamped with this library's identifying
    // string unless the caller opts out.
    if options.stamp_generator {
        write_text_element(writer, "generator", &generator_stamp())?;
    } else if let Some(generator) = channel.generator() {
        write_text_element(writer, "generator", generator.as_str())?;
    }
    if let Some(docs) = channel.docs() {
        write_text_element(writer, "docs", docs.as_str())?;
    }
    if let Some(cloud) = channel.cloud() {
        let mut start = BytesStart::new("cloud");
        for (name, value) in cloud.attributes() {
            start.push_attribute((name, value));
        }
        writer
            .write_event(Event::Empty(start))
            .map_err(RssError::xml)?;
    }
    if let Some(ttl) = channel.ttl() {
        write_text_element(writer, "ttl", ttl.as_str())?;
    }
    if let Some(image) = channel.image() {
        writer
            .write_event(Event::Start(BytesStart::new("image")))
            .map_err(RssError::xml)?;
        write_text_element(writer, "url", image.url().as_str())?;
        write_text_element(writer, "title", image.title().as_str())?;
        write_text_element(writer, "link", image.link().as_str())?;
        if let Some(width) = image.width() {
            write_text_element(writer, "width", &width.value().to_string())?;
        }
        if let Some(height) = image.height() {
            write_text_element(writer, "height", &height.value().to_string())?;
        }
        if let Some(description) = image.description() {
            write_text_element(writer, "description", description.as_str())?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("image")))
            .map_err(RssError::xml)?;
    }
    if let Some(rating) = channel.rating() {
        write_text_element(writer, "rating", rating.as_str())?;
    }
    if let Some(text_input) = channel.text_input() {
        writer
            .write_event(Event::Start(BytesStart::new("textInput")))
            .map_err(RssError::xml)?;
        write_text_element(writer, "title", text_input.title().as_str())?;
        write_text_element(writer, "description", text_input.description().as_str())?;
        write_text_element(writer, "name", text_input.name().as_str())?;
        write_text_element(writer, "link", text_input.link().as_str())?;
        writer
            .write_event(Event::End(BytesEnd::new("textInput")))
            .map_err(RssError::xml)?;
    }
    if let Some(skip_hours) = channel.skip_hours() {
        writer
            .write_event(Event::Start(BytesStart::new("skipHours")))
            .map_err(RssError::xml)?;
        for hour in skip_hours.hours() {
            write_text_element(writer, "hour", &hour.value().to_string())?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("skipHours")))
            .map_err(RssError::xml)?;
    }
    if let Some(skip_days) = channel.skip_days() {
        writer
            .write_event(Event::Start(BytesStart::new("skipDays")))
            .map_err(RssError::xml)?;
        for day in skip_days.days() {
            write_text_element(writer, "day", day.as_str())?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("skipDays")))
            .map_err(RssError::xml)?;
    }
    for ext in channel.extensions() {
        write_extension(writer, ext)?;
    }
    for item in channel.items() {
        write_item(writer, item)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("channel")))
        .map_err(RssError::xml)?;
    Ok(())
}

fn write_item(writer: &mut Writer<Vec<u8>>, item: &Item) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("item")))
        .map_err(RssError::xml)?;

    if let Some(title) = item.title() {
        write_text_element(writer, "title", title.as_str())?;
    }
    if let Some(description) = item.description() {
        write_text_element(writer, "description", description.as_str())?;
    }
    if let Some(link) = item.link() {
        write_text_element(writer, "link", link.as_str())?;
    }
    if let Some(author) = item.author() {
        write_text_element(writer, "author", author.as_str())?;
    }
    for category in item.categories() {
        write_category(writer, category)?;
    }
    if let Some(comments) = item.comments() {
        write_text_element(writer, "comments", comments.as_str())?;
    }
    if let Some(enclosure) = item.enclosure() {
        let mut start = BytesStart::new("enclosure");
        for attr in enclosure.attributes() {
            start.push_attribute((attr.name(), attr.value()));
        }
        writer
            .write_event(Event::Empty(start))
            .map_err(RssError::xml)?;
    }
    if let Some(guid) = item.guid() {
        let mut start = BytesStart::new("guid");
        if let Some(flag) = guid.is_perma_link() {
            start.push_attribute(("isPermaLink", if flag { "true" } else { "false" }));
        }
        if guid.value().is_empty() {
            writer
                .write_event(Event::Empty(start))
                .map_err(RssError::xml)?;
        } else {
            writer
                .write_event(Event::Start(start))
                .map_err(RssError::xml)?;
            writer
                .write_event(Event::Text(BytesText::new(guid.value())))
                .map_err(RssError::xml)?;
            writer
                .write_event(Event::End(BytesEnd::new("guid")))
                .map_err(RssError::xml)?;
        }
    }
    if let Some(pub_date) = item.pub_date() {
        write_text_element(writer, "pubDate", &pub_date.canonical())?;
    }
    if let Some(source) = item.source() {
        let mut start = BytesStart::new("source");
        start.push_attribute(("url", source.url()));
        writer
            .write_event(Event::Start(start))
            .map_err(RssError::xml)?;
        writer
            .write_event(Event::Text(BytesText::new(source.value())))
            .map_err(RssError::xml)?;
        writer
            .write_event(Event::End(BytesEnd::new("source")))
            .map_err(RssError::xml)?;
    }
    for ext in item.extensions() {
        write_extension(writer, ext)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("item")))
        .map_err(RssError::xml)?;
    Ok(())
}

fn write_category(writer: &mut Writer<Vec<u8>>, category: &Category) -> Result<()> {
    let mut start = BytesStart::new("category");
    if let Some(domain) = category.domain() {
        start.push_attribute(("domain", domain));
    }
    writer
        .write_event(Event::Start(start))
        .map_err(RssError::xml)?;
    writer
        .write_event(Event::Text(BytesText::new(category.value())))
        .map_err(RssError::xml)?;
    writer
        .write_event(Event::End(BytesEnd::new("category")))
        .map_err(RssError::xml)?;
    Ok(())
}

/// Extensions without content go out self-closing; with content, as a
/// start/characters/end triple. The declared prefix:local split is kept as
/// stored in the element name.
fn write_extension(writer: &mut Writer<Vec<u8>>, ext: &Extension) -> Result<()> {
    let mut start = BytesStart::new(ext.name());
    for attr in ext.attributes() {
        start.push_attribute((attr.name(), attr.value()));
    }
    match ext.content() {
        Some(content) if !content.is_empty() => {
            writer
                .write_event(Event::Start(start))
                .map_err(RssError::xml)?;
            writer
                .write_event(Event::Text(BytesText::new(content)))
                .map_err(RssError::xml)?;
            writer
                .write_event(Event::End(BytesEnd::new(ext.name())))
                .map_err(RssError::xml)?;
        }
        _ => {
            writer
                .write_event(Event::Empty(start))
                .map_err(RssError::xml)?;
        }
    }
    Ok(())
}

/// Blank content goes out as a self-closing tag; anything else as a
/// start/characters/end triple.
fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(RssError::xml)?;
        return Ok(());
    }
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(RssError::xml)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(RssError::xml)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(RssError::xml)?;
    Ok(())
}
