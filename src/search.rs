//! Title search over the gallery cards.

use crate::page::{Display, Page};

/// Counts produced by one filter pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub shown: usize,
    pub hidden: usize,
}

impl FilterSummary {
    pub fn total(&self) -> usize {
        self.shown + self.hidden
    }
}

/// Case-insensitive substring test. An empty query matches every title.
pub fn title_matches(title: &str, query: &str) -> bool {
    title.to_lowercase().contains(&query.to_lowercase())
}

/// Show cards whose title contains the search box text and hide the rest.
pub fn search_videos(page: &mut Page) -> FilterSummary {
    let query = page.search_input.value.clone();
    let mut summary = FilterSummary::default();

    for card in page.cards_mut() {
        if title_matches(&card.title, &query) {
            card.display = Display::Block;
            summary.shown += 1;
        } else {
            card.display = Display::None;
            summary.hidden += 1;
        }
    }

    tracing::debug!(
        query = %query,
        shown = summary.shown,
        hidden = summary.hidden,
        "cards filtered"
    );
    summary
}
