// ABOUTME: Data-binding library for the RSS 2.0 feed format.
// ABOUTME: Streams XML into a validated immutable object graph and deterministically back out.

pub mod attribute;
pub mod channel;
pub mod composites;
pub mod dates;
pub mod error;
pub mod extension;
pub mod item;
pub mod leaves;
pub mod reader;
pub mod rss;
pub mod scalars;
pub mod scheme;
pub mod writer;

pub use attribute::Attribute;
pub use channel::{Channel, ChannelBuilder};
pub use composites::{Image, SkipDays, SkipHours, TextInput};
pub use dates::RssDate;
pub use error::{Result, RssError};
pub use extension::Extension;
pub use item::{Item, ItemBuilder};
pub use leaves::{Category, Cloud, Enclosure, Guid, Source};
pub use reader::{read, read_bytes, ParsedFeed, Session};
pub use rss::Rss;
pub use scalars::{
    Author, Comments, Copyright, Day, Description, Docs, Generator, Height, Hour, Language, Link,
    ManagingEditor, Name, Rating, Title, Ttl, Url, WebMaster, Width,
};
pub use writer::{generator_stamp, write, WriteOptions};
