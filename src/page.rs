//! Retained page model that the gallery UI renders from.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Class marker on the body that enables the light theme.
pub const LIGHT_MARKER: &str = "light";

/// Root content element carrying presentational class markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    classes: BTreeSet<String>,
}

impl Body {
    /// Return true when the body carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Remove `class` if present, add it otherwise.
    pub fn toggle_class(&mut self, class: &str) {
        if !self.classes.remove(class) {
            self.classes.insert(class.to_string());
        }
    }
}

/// Single-line search box content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    /// Current query text, possibly empty.
    pub value: String,
}

/// Inline display style of a card.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Display {
    /// Rendered in the grid.
    #[default]
    Block,
    /// Skipped by the grid.
    None,
}

/// One video entry in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    /// Identifier unique within a page.
    pub id: String,
    /// Displayed title text.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Channel that published the video.
    pub uploader: String,
    /// View counter.
    pub views: u64,
    /// Human readable upload date, when known.
    pub uploaded_at: Option<String>,
    /// Backing media file, when known.
    pub filename: Option<PathBuf>,
    /// Visibility flag written by the search filter.
    pub display: Display,
}

impl VideoCard {
    pub fn is_visible(&self) -> bool {
        self.display == Display::Block
    }
}

/// Whole gallery document: body, search box and cards.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub body: Body,
    pub search_input: SearchInput,
    cards: Vec<VideoCard>,
}

impl Page {
    #[cfg(test)]
    pub fn new(cards: Vec<VideoCard>) -> Self {
        Self {
            cards,
            ..Self::default()
        }
    }

    /// Cards in render order.
    pub fn cards(&self) -> &[VideoCard] {
        &self.cards
    }

    /// Mutable access to the cards without allowing the set to change.
    pub fn cards_mut(&mut self) -> &mut [VideoCard] {
        &mut self.cards
    }

    /// Swap in a freshly rendered set of cards.
    pub fn replace_cards(&mut self, cards: Vec<VideoCard>) {
        self.cards = cards;
    }

    pub fn card(&self, id: &str) -> Option<&VideoCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Iterate over cards whose display flag is `Block`.
    pub fn visible_cards(&self) -> impl Iterator<Item = &VideoCard> {
        self.cards.iter().filter(|card| card.is_visible())
    }
}

#[cfg(test)]
pub(crate) fn card(id: &str, title: &str) -> VideoCard {
    VideoCard {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        uploader: "tester".to_string(),
        views: 0,
        uploaded_at: None,
        filename: None,
        display: Display::Block,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_class_adds_then_removes() {
        let mut body = Body::default();
        assert!(!body.has_class(LIGHT_MARKER));
        body.toggle_class(LIGHT_MARKER);
        assert!(body.has_class(LIGHT_MARKER));
        body.toggle_class(LIGHT_MARKER);
        assert!(!body.has_class(LIGHT_MARKER));
    }

    #[test]
    fn toggle_class_leaves_other_markers_alone() {
        let mut body = Body::default();
        body.toggle_class("compact");
        body.toggle_class(LIGHT_MARKER);
        body.toggle_class(LIGHT_MARKER);
        assert!(body.has_class("compact"));
    }

    #[test]
    fn visible_cards_skips_hidden() {
        let mut page = Page::new(vec![card("a", "One"), card("b", "Two")]);
        page.cards_mut()[0].display = Display::None;
        let ids: Vec<_> = page.visible_cards().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn replace_cards_swaps_whole_set() {
        let mut page = Page::new(vec![card("a", "One")]);
        page.replace_cards(vec![card("x", "Ten"), card("y", "Eleven")]);
        assert_eq!(page.cards().len(), 2);
        assert!(page.card("a").is_none());
        assert_eq!(page.card("y").map(|c| c.title.as_str()), Some("Eleven"));
    }
}
