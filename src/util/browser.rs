use anyhow::Result;
use tracing::debug;

/// Open a recipe's source or video page in the user's default browser.
/// Catalog records are the only ones carrying such links.
pub fn open_url(url: &str) -> Result<()> {
    debug!(url = url, "Opening recipe link in browser");
    open::that(url)?;
    Ok(())
}
