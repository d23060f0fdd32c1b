// ABOUTME: Integration tests for the streaming RSS reader.
// ABOUTME: Covers the required-field invariants, vocabulary dispatch, and extension capture.

use cascade_rss::{read, RssError};
use pretty_assertions::assert_eq;

/// The simplest valid feed must parse to a channel with exactly the three
/// required fields set and every optional field absent.
#[test]
fn test_simplest_feed() {
    let rss = r#"<rss version="2.0"><channel><title>simplest feed</title><link>http://www.outthere.net</link><description>something cool</description></channel></rss>"#;

    let parsed = read(rss).unwrap();
    let channel = parsed.rss.channel();

    assert_eq!(channel.title().as_str(), "simplest feed");
    assert_eq!(channel.link().as_str(), "http://www.outthere.net");
    assert_eq!(channel.description().as_str(), "something cool");

    assert!(channel.language().is_none());
    assert!(channel.copyright().is_none());
    assert!(channel.managing_editor().is_none());
    assert!(channel.web_master().is_none());
    assert!(channel.pub_date().is_none());
    assert!(channel.last_build_date().is_none());
    assert!(channel.generator().is_none());
    assert!(channel.docs().is_none());
    assert!(channel.cloud().is_none());
    assert!(channel.ttl().is_none());
    assert!(channel.image().is_none());
    assert!(channel.rating().is_none());
    assert!(channel.text_input().is_none());
    assert!(channel.skip_hours().is_none());
    assert!(channel.skip_days().is_none());
    assert!(channel.categories().is_empty());
    assert!(channel.items().is_empty());
    assert!(channel.extensions().is_empty());
}

/// Channel-level category lookup by value: "Funky" is found with its
/// domain, "Bunky" is not.
#[test]
fn test_category_lookup() {
    let rss = r#"<rss version="2.0">
    <channel>
        <title>t</title>
        <link>http://www.outthere.net</link>
        <description>d</description>
        <category domain="http://www.colorfulsoftware.com">Funky</category>
    </channel>
</rss>"#;

    let parsed = read(rss).unwrap();
    let channel = parsed.rss.channel();

    let funky = channel.category("Funky").expect("Funky should be found");
    assert_eq!(funky.domain(), Some("http://www.colorfulsoftware.com"));
    assert!(channel.category("Bunky").is_none());
}

/// A channel missing any of its three required fields fails with the
/// field-specific error.
#[test]
fn test_channel_required_fields() {
    let missing_title = r#"<rss version="2.0"><channel><link>http://x.net</link><description>d</description></channel></rss>"#;
    let err = read(missing_title).unwrap_err();
    assert!(err.to_string().contains("title"), "got: {}", err);

    let missing_link = r#"<rss version="2.0"><channel><title>t</title><description>d</description></channel></rss>"#;
    let err = read(missing_link).unwrap_err();
    assert!(err.to_string().contains("link"), "got: {}", err);

    let missing_description =
        r#"<rss version="2.0"><channel><title>t</title><link>http://x.net</link></channel></rss>"#;
    let err = read(missing_description).unwrap_err();
    assert!(err.to_string().contains("description"), "got: {}", err);
}

/// An item with neither title nor description aborts the parse.
#[test]
fn test_item_title_or_description() {
    let rss = r#"<rss version="2.0">
    <channel>
        <title>t</title>
        <link>http://x.net</link>
        <description>d</description>
        <item><link>http://x.net/1</link></item>
    </channel>
</rss>"#;

    let err = read(rss).unwrap_err();
    assert!(
        err.to_string().contains("title or description"),
        "got: {}",
        err
    );
}

/// An enclosure built from url and length only must fail naming the type
/// attribute.
#[test]
fn test_enclosure_missing_type() {
    let rss = r#"<rss version="2.0">
    <channel>
        <title>t</title>
        <link>http://x.net</link>
        <description>d</description>
        <item>
            <title>ep</title>
            <enclosure url="http://cdn/show.mp3" length="12345"/>
        </item>
    </channel>
</rss>"#;

    let err = read(rss).unwrap_err();
    assert!(
        err.to_string().contains("MUST have a type attribute"),
        "got: {}",
        err
    );
}

/// A prefixed extension with no matching xmlns declaration fails the
/// aggregated unbound-prefix validation; declaring it makes the same
/// document succeed.
#[test]
fn test_unbound_prefix_detection() {
    let unbound = r#"<rss version="2.0">
    <channel>
        <title>t</title>
        <link>http://x.net</link>
        <description>d</description>
        <test:ext>payload</test:ext>
    </channel>
</rss>"#;
    let err = read(unbound).unwrap_err();
    match err {
        RssError::UnboundPrefix(prefixes) => assert_eq!(prefixes, vec!["test".to_string()]),
        other => panic!("expected UnboundPrefix, got {:?}", other),
    }

    let bound = r#"<rss version="2.0" xmlns:test="http://test.example/ns">
    <channel>
        <title>t</title>
        <link>http://x.net</link>
        <description>d</description>
        <test:ext>payload</test:ext>
    </channel>
</rss>"#;
    let parsed = read(bound).unwrap();
    assert_eq!(parsed.rss.channel().extensions().len(), 1);
    assert_eq!(parsed.rss.channel().extensions()[0].name(), "test:ext");
}

/// Every optional channel field parses and lands on the right accessor.
#[test]
fn test_full_channel() {
    let rss = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
    <channel>
        <title>Full Feed</title>
        <link>http://example.com</link>
        <description>everything at once</description>
        <language>en-us</language>
        <copyright>Copyright 2024</copyright>
        <managingEditor>editor@example.com</managingEditor>
        <webMaster>webmaster@example.com</webMaster>
        <pubDate>Mon, 15 Jan 2024 10:00:00 +0000</pubDate>
        <lastBuildDate>Tue, 16 Jan 2024 11:00:00 +0000</lastBuildDate>
        <category>News</category>
        <generator>some other generator</generator>
        <docs>http://backend.userland.com/rss</docs>
        <cloud domain="rpc.sys.com" port="80" path="/RPC2" registerProcedure="pingMe" protocol="soap"/>
        <ttl>60</ttl>
        <image>
            <url>http://example.com/logo.png</url>
            <title>Full Feed</title>
            <link>http://example.com</link>
            <width>88</width>
            <height>31</height>
        </image>
        <rating>general</rating>
        <textInput>
            <title>Search</title>
            <description>Search the site</description>
            <name>q</name>
            <link>http://example.com/search</link>
        </textInput>
        <skipHours><hour>0</hour><hour>23</hour></skipHours>
        <skipDays><day>Saturday</day><day>Sunday</day></skipDays>
        <item>
            <title>First</title>
            <link>http://example.com/1</link>
            <description>first item</description>
            <author>author@example.com</author>
            <comments>http://example.com/1/comments</comments>
            <enclosure url="http://cdn/show.mp3" length="12216320" type="audio/mpeg"/>
            <guid isPermaLink="false">tag-1</guid>
            <pubDate>Mon, 15 Jan 2024 09:00:00 +0000</pubDate>
            <source url="http://www.scripting.com/">Scripting News</source>
            <category domain="http://dmoz.org">Tech</category>
        </item>
    </channel>
</rss>"#;

    let parsed = read(rss).unwrap();
    let channel = parsed.rss.channel();

    assert_eq!(channel.language().unwrap().as_str(), "en-us");
    assert_eq!(channel.copyright().unwrap().as_str(), "Copyright 2024");
    assert_eq!(
        channel.managing_editor().unwrap().as_str(),
        "editor@example.com"
    );
    assert_eq!(
        channel.web_master().unwrap().as_str(),
        "webmaster@example.com"
    );
    assert_eq!(
        channel.pub_date().unwrap().canonical(),
        "Mon, 15 Jan 2024 10:00:00 +0000"
    );
    assert_eq!(
        channel.last_build_date().unwrap().canonical(),
        "Tue, 16 Jan 2024 11:00:00 +0000"
    );
    assert_eq!(
        channel.generator().unwrap().as_str(),
        "some other generator"
    );
    assert_eq!(
        channel.docs().unwrap().as_str(),
        "http://backend.userland.com/rss"
    );
    let cloud = channel.cloud().unwrap();
    assert_eq!(cloud.domain(), "rpc.sys.com");
    assert_eq!(cloud.protocol(), "soap");
    assert_eq!(channel.ttl().unwrap().as_str(), "60");
    let image = channel.image().unwrap();
    assert_eq!(image.url().as_str(), "http://example.com/logo.png");
    assert_eq!(image.width().unwrap().value(), 88);
    assert_eq!(image.height().unwrap().value(), 31);
    assert_eq!(channel.rating().unwrap().as_str(), "general");
    assert_eq!(channel.text_input().unwrap().name().as_str(), "q");
    assert_eq!(channel.skip_hours().unwrap().hours().len(), 2);
    assert_eq!(channel.skip_days().unwrap().days().len(), 2);
    assert_eq!(channel.categories().len(), 1);

    let item = channel.item("First").unwrap();
    assert_eq!(item.link().unwrap().as_str(), "http://example.com/1");
    assert_eq!(item.author().unwrap().as_str(), "author@example.com");
    assert_eq!(
        item.comments().unwrap().as_str(),
        "http://example.com/1/comments"
    );
    assert_eq!(item.enclosure().unwrap().mime_type(), "audio/mpeg");
    let guid = item.guid().unwrap();
    assert_eq!(guid.value(), "tag-1");
    assert_eq!(guid.is_perma_link(), Some(false));
    let source = item.source().unwrap();
    assert_eq!(source.value(), "Scripting News");
    assert_eq!(source.url(), "http://www.scripting.com/");
    assert_eq!(item.category("Tech").unwrap().domain(), Some("http://dmoz.org"));
}

/// The isPermaLink attribute is looked up case-insensitively.
#[test]
fn test_guid_permalink_case_insensitive() {
    let rss = r#"<rss version="2.0">
    <channel>
        <title>t</title>
        <link>http://x.net</link>
        <description>d</description>
        <item><title>i</title><guid ISPERMALINK="TRUE">g-1</guid></item>
    </channel>
</rss>"#;

    let parsed = read(rss).unwrap();
    let guid = parsed.rss.channel().items()[0].guid().unwrap();
    assert_eq!(guid.is_perma_link(), Some(true));
}

/// Description content with nested markup is captured as text, not parsed
/// as structure: both entity-encoded and literal nested tags converge to
/// the same decoded value.
#[test]
fn test_description_markup_capture() {
    let encoded = r#"<rss version="2.0">
    <channel>
        <title>t</title>
        <link>http://x.net</link>
        <description>a &lt;b&gt;bold&lt;/b&gt; claim</description>
    </channel>
</rss>"#;
    let parsed = read(encoded).unwrap();
    assert_eq!(
        parsed.rss.channel().description().as_str(),
        "a <b>bold</b> claim"
    );

    let literal = r#"<rss version="2.0">
    <channel>
        <title>t</title>
        <link>http://x.net</link>
        <description>a <b>bold</b> claim</description>
    </channel>
</rss>"#;
    let parsed = read(literal).unwrap();
    assert_eq!(
        parsed.rss.channel().description().as_str(),
        "a <b>bold</b> claim"
    );
}

/// Entity and numeric character references inside element text resolve
/// into the accumulated value instead of being dropped.
#[test]
fn test_entity_references_resolved() {
    let rss = r#"<rss version="2.0">
    <channel>
        <title>Tom &amp; Jerry &#169;</title>
        <link>http://x.net</link>
        <description>fish &amp;&#32;chips</description>
    </channel>
</rss>"#;

    let parsed = read(rss).unwrap();
    assert_eq!(parsed.rss.channel().title().as_str(), "Tom & Jerry \u{a9}");
    assert_eq!(parsed.rss.channel().description().as_str(), "fish & chips");
}

/// An extension whose prefix resolves to the XHTML namespace captures its
/// full subtree as raw markup, tags and attributes preserved.
#[test]
fn test_xhtml_extension_capture() {
    let rss = r#"<rss version="2.0" xmlns:xhtml="http://www.w3.org/1999/xhtml">
    <channel>
        <title>t</title>
        <link>http://x.net</link>
        <description>d</description>
        <xhtml:div><p class="lead">Hello <em>there</em></p></xhtml:div>
    </channel>
</rss>"#;

    let parsed = read(rss).unwrap();
    let ext = &parsed.rss.channel().extensions()[0];
    assert_eq!(ext.name(), "xhtml:div");
    assert_eq!(ext.prefix(), Some("xhtml"));
    assert_eq!(
        ext.content().unwrap(),
        r#"<p class="lead">Hello <em>there</em></p>"#
    );
}

/// Non-XHTML extensions capture nested elements as markup folded into the
/// parent's content string.
#[test]
fn test_nested_extension_capture() {
    let rss = r#"<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
    <channel>
        <title>t</title>
        <link>http://x.net</link>
        <description>d</description>
        <item>
            <title>i</title>
            <media:group><media:title>clip</media:title></media:group>
        </item>
    </channel>
</rss>"#;

    let parsed = read(rss).unwrap();
    let ext = &parsed.rss.channel().items()[0].extensions()[0];
    assert_eq!(ext.name(), "media:group");
    assert_eq!(ext.content().unwrap(), "<media:title>clip</media:title>");
}

/// The XML declaration is captured into the session.
#[test]
fn test_session_capture() {
    let rss = r#"<?xml version="1.0" encoding="ISO-8859-1"?><rss version="2.0"><channel><title>t</title><link>http://x.net</link><description>d</description></channel></rss>"#;

    let parsed = read(rss).unwrap();
    assert_eq!(parsed.session.version.as_deref(), Some("1.0"));
    assert_eq!(parsed.session.encoding.as_deref(), Some("ISO-8859-1"));
}

/// Range and enumeration violations abort the parse.
#[test]
fn test_validation_aborts_parse() {
    let bad_height = r#"<rss version="2.0"><channel><title>t</title><link>http://x.net</link><description>d</description><image><url>http://x.net/i.png</url><title>t</title><link>http://x.net</link><height>401</height></image></channel></rss>"#;
    assert!(read(bad_height).is_err());

    let bad_day = r#"<rss version="2.0"><channel><title>t</title><link>http://x.net</link><description>d</description><skipDays><day>Someday</day></skipDays></channel></rss>"#;
    assert!(read(bad_day).is_err());

    let bad_protocol = r#"<rss version="2.0"><channel><title>t</title><link>http://x.net</link><description>d</description><cloud domain="d" port="80" path="/p" registerProcedure="r" protocol="ftp"/></channel></rss>"#;
    assert!(read(bad_protocol).is_err());
}

/// A malformed pubDate surfaces a date-parse error carrying the input.
#[test]
fn test_date_parse_error() {
    let rss = r#"<rss version="2.0"><channel><title>t</title><link>http://x.net</link><description>d</description><pubDate>yesterday-ish</pubDate></channel></rss>"#;
    let err = read(rss).unwrap_err();
    match err {
        RssError::DateParse(original) => assert_eq!(original, "yesterday-ish"),
        other => panic!("expected DateParse, got {:?}", other),
    }
}

/// A document without an rss root yields the missing-channel error.
#[test]
fn test_non_rss_root() {
    let err = read(r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>t</title></feed>"#)
        .unwrap_err();
    assert!(err.to_string().contains("channel"), "got: {}", err);
}
