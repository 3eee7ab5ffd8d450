//! RSS Summary - fetch an RSS feed and print its items
//!
//! The pipeline runs once, in order: resolve the URL, fetch the body, parse
//! the channel, print the summary. The first failing stage ends the run.

pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod fetcher;
pub mod presenter;
pub mod source;

use std::io::{BufRead, Write};

use tracing::info;

pub use error::{Error, Result};
pub use feed::{Channel, Item};

/// Runs the whole pipeline against explicit I/O handles.
///
/// `input` is read only when `url_arg` is `None`. Nothing reaches `output`
/// beyond the prompt unless every stage before the presenter succeeded.
pub fn run<R, W>(url_arg: Option<String>, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let url = source::resolve(url_arg, input, output)?;
    info!("Fetching {}", url);

    let data = fetcher::fetch(&url)?;
    let channel = feed::parse(&data)?;
    info!("Presenting {} items", channel.items.len());

    presenter::present(&channel, output).map_err(Error::Output)?;
    output.flush().map_err(Error::Output)?;
    Ok(())
}
