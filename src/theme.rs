//! Theme management for the egui-based UI.

use egui::{Context, Visuals};

use crate::page::{Body, LIGHT_MARKER, Page};

/// Flip the light-theme marker on the page body.
pub fn toggle_theme(page: &mut Page) {
    page.body.toggle_class(LIGHT_MARKER);
    tracing::debug!(light = is_light(&page.body), "theme toggled");
}

/// Return true when the body carries the light-theme marker.
pub fn is_light(body: &Body) -> bool {
    body.has_class(LIGHT_MARKER)
}

/// Apply the body's theme marker to the egui context.
pub fn apply_theme(ctx: &Context, body: &Body) {
    let visuals = if is_light(body) {
        Visuals::light()
    } else {
        Visuals::dark()
    };
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_toggle_adds_marker_to_default_page() {
        let mut page = Page::default();
        toggle_theme(&mut page);
        assert!(is_light(&page.body));
    }

    #[test]
    fn double_toggle_restores_original_state() {
        let mut page = Page::default();
        toggle_theme(&mut page);
        toggle_theme(&mut page);
        assert!(!is_light(&page.body));

        toggle_theme(&mut page);
        let before = page.body.clone();
        toggle_theme(&mut page);
        toggle_theme(&mut page);
        assert_eq!(page.body, before);
    }

    #[test]
    fn toggle_does_not_touch_cards_or_query() {
        let mut page = Page::new(vec![crate::page::card("a", "Morning Yoga")]);
        page.search_input.value = "yoga".to_string();
        let cards = page.cards().to_vec();
        toggle_theme(&mut page);
        assert_eq!(page.cards(), cards.as_slice());
        assert_eq!(page.search_input.value, "yoga");
    }

    #[test]
    fn apply_theme_follows_marker() {
        let ctx = Context::default();
        let mut page = Page::default();
        apply_theme(&ctx, &page.body);
        assert!(ctx.style().visuals.dark_mode);
        toggle_theme(&mut page);
        apply_theme(&ctx, &page.body);
        assert!(!ctx.style().visuals.dark_mode);
    }
}
