//! Tab-name extraction and month-tab detection.
//!
//! Published documents expose their tab list only inside the pubhtml
//! markup (`<li id="sheet-button-…"><a …>NAME</a></li>`), so the tab
//! names are scraped with a regex. Month tabs carry `YY.MM` titles.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches the sheet-button entries of the pubhtml tab strip.
    static ref TAB_BUTTON_RE: Regex =
        Regex::new(r#"id="sheet-button-[^"]*"[^>]*>\s*<a[^>]*>([^<]+)</a>"#)
            .expect("invalid tab button regex");

    /// Month tab titles use the two-digit `YY.MM` form, e.g. "25.08".
    static ref MONTH_TAB_RE: Regex =
        Regex::new(r"^\d{2}\.\d{2}$").expect("invalid month tab regex");
}

/// Extracts tab names from a published document's HTML, in page order.
pub fn extract_tab_names(html: &str) -> Vec<String> {
    TAB_BUTTON_RE
        .captures_iter(html)
        .map(|c| c[1].trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Whether a tab title looks like a `YY.MM` month tab.
pub fn is_month_tab(title: &str) -> bool {
    MONTH_TAB_RE.is_match(title.trim())
}
