use anyhow::{Result, bail};
use tracing::debug;

/// Open an issue, repository or avatar URL in the user's default browser.
pub fn open_url(url: &str) -> Result<()> {
    if !is_web_url(url) {
        bail!("Refusing to open non-web URL: {}", url);
    }
    debug!(url = url, "Opening URL in browser");
    open::that(url)?;
    Ok(())
}

pub fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
