use std::io::{self, Write};

use crate::feed::Channel;

/// Writes the channel summary: the title, then each item as a numbered
/// title line followed by its description, link and date.
pub fn present<W: Write>(channel: &Channel, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", channel.title)?;
    for (i, item) in channel.items.iter().enumerate() {
        writeln!(out, "    {:>2}. {}", i + 1, item.title)?;
        writeln!(out, "        {}", item.description)?;
        writeln!(out, "        {}", item.link)?;
        writeln!(out, "        {}", item.date)?;
    }
    Ok(())
}

/// Renders the summary into a string.
pub fn render(channel: &Channel) -> String {
    let mut buf = Vec::new();
    present(channel, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("summary is built from UTF-8 strings")
}
