//! Streams command handler.

use anyhow::Result;
use indicatif::HumanBytes;
use tabconv_gui::types::StreamListing;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// List every stream found for `url`, marking the one selection picks.
pub async fn execute(ctx: &CliContext, url: &str) -> Result<()> {
    let listing = ctx
        .backend
        .list_streams(url)
        .await
        .map_err(CliError::from)?;
    print!("{}", render(&listing));
    Ok(())
}

fn render(listing: &StreamListing) -> String {
    let mut out = format!("{}\n", listing.video.title);
    if listing.video.streams.is_empty() {
        out.push_str("  (no downloadable streams)\n");
        return out;
    }

    for (index, stream) in listing.video.streams.iter().enumerate() {
        let marker = if listing.selected == Some(index) { '*' } else { ' ' };
        let size = stream
            .size
            .map_or_else(|| "?".to_string(), |bytes| HumanBytes(bytes).to_string());
        out.push_str(&format!(
            "{marker} {:<5} {:>5}p {:>10}\n",
            stream.format.as_str(),
            stream.resolution,
            size
        ));
    }

    if listing.selected.is_none() {
        out.push_str("No stream matches the configured format and resolution.\n");
    }
    out
}
