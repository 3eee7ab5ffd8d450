//! Feed model and the XML decoder that fills it.
//!
//! Only a fixed subset of RSS 2.0 is read:
//!
//! ```text
//! <rss>                       (root name is not checked)
//!   <channel>
//!     <title/>                -> Channel::title
//!     <item>                  -> Channel::items, in document order
//!       <title/>              -> Item::title
//!       <guid/>               -> Item::link
//!       <description/>        -> Item::description
//!       <pubDate/>            -> Item::date
//! ```
//!
//! Names are matched exactly, so prefixed elements such as `<itunes:title>`
//! are skipped along with every other unlisted element and attribute. A
//! listed element that is missing leaves its field empty; one that repeats
//! keeps its last value. Field text is the element's own text, untrimmed,
//! without the text of any nested child elements. Several `<channel>`
//! elements are merged into one.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Channel {
    pub title: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Item {
    pub title: String,
    /// Taken from the item's `<guid>`, not `<link>`
    pub link: String,
    pub description: String,
    /// Raw `<pubDate>` text, not parsed
    pub date: String,
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Parse error: feed is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Input ended before the root element was closed, or had none
    #[error("Parse error: {0}")]
    Incomplete(&'static str),
}

// Depths of the mapped elements, counting the root as 1.
const CHANNEL_DEPTH: usize = 2;
const CHANNEL_CHILD_DEPTH: usize = 3;
const ITEM_CHILD_DEPTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    ChannelTitle,
    ItemTitle,
    ItemLink,
    ItemDescription,
    ItemDate,
}

impl Field {
    fn depth(self) -> usize {
        match self {
            Field::ChannelTitle => CHANNEL_CHILD_DEPTH,
            _ => ITEM_CHILD_DEPTH,
        }
    }
}

#[derive(Default)]
struct FeedBuilder {
    channel: Channel,
    depth: usize,
    in_channel: bool,
    item: Option<Item>,
    field: Option<Field>,
    text: String,
}

impl FeedBuilder {
    fn open(&mut self, name: &[u8]) {
        self.depth += 1;

        match (self.depth, name) {
            (CHANNEL_DEPTH, b"channel") => self.in_channel = true,
            (CHANNEL_CHILD_DEPTH, b"title") if self.in_channel => {
                self.start_field(Field::ChannelTitle)
            }
            (CHANNEL_CHILD_DEPTH, b"item") if self.in_channel => {
                self.item = Some(Item::default())
            }
            (ITEM_CHILD_DEPTH, _) if self.item.is_some() => match name {
                b"title" => self.start_field(Field::ItemTitle),
                b"guid" => self.start_field(Field::ItemLink),
                b"description" => self.start_field(Field::ItemDescription),
                b"pubDate" => self.start_field(Field::ItemDate),
                _ => {}
            },
            _ => {}
        }
    }

    fn close(&mut self) {
        if let Some(field) = self.field.filter(|f| f.depth() == self.depth) {
            self.finish_field(field);
        }

        match self.depth {
            CHANNEL_CHILD_DEPTH => {
                if let Some(item) = self.item.take() {
                    self.channel.items.push(item);
                }
            }
            CHANNEL_DEPTH => self.in_channel = false,
            _ => {}
        }

        self.depth = self.depth.saturating_sub(1);
    }

    /// Collects text sitting directly inside the open field element.
    fn text(&mut self, text: &str) {
        if self.field.is_some_and(|f| f.depth() == self.depth) {
            self.text.push_str(text);
        }
    }

    fn start_field(&mut self, field: Field) {
        self.field = Some(field);
        self.text.clear();
    }

    fn finish_field(&mut self, field: Field) {
        self.field = None;
        let value = std::mem::take(&mut self.text);

        if field == Field::ChannelTitle {
            self.channel.title = value;
            return;
        }
        if let Some(item) = self.item.as_mut() {
            match field {
                Field::ItemTitle => item.title = value,
                Field::ItemLink => item.link = value,
                Field::ItemDescription => item.description = value,
                Field::ItemDate => item.date = value,
                Field::ChannelTitle => {}
            }
        }
    }
}

/// Decodes a feed document into a [`Channel`].
///
/// Fails without a partial result if the bytes are not UTF-8 or not
/// well-formed XML. Anything after the root element is not read.
pub fn parse(data: &[u8]) -> Result<Channel, ParseError> {
    let xml = std::str::from_utf8(data)?;
    let mut reader = Reader::from_str(xml);

    let mut builder = FeedBuilder::default();
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                seen_root = true;
                builder.open(e.name().as_ref());
            }
            Event::Empty(e) => {
                seen_root = true;
                builder.open(e.name().as_ref());
                builder.close();
            }
            Event::End(_) => builder.close(),
            Event::Text(e) => builder.text(&e.unescape()?),
            Event::CData(e) => builder.text(std::str::from_utf8(&e)?),
            Event::Eof => break,
            _ => {}
        }

        if seen_root && builder.depth == 0 {
            break;
        }
    }

    if !seen_root {
        return Err(ParseError::Incomplete("document has no root element"));
    }
    if builder.depth != 0 {
        return Err(ParseError::Incomplete("unexpected end of document"));
    }

    let channel = builder.channel;
    debug!(
        "Parsed channel '{}' with {} items",
        channel.title,
        channel.items.len()
    );
    Ok(channel)
}
