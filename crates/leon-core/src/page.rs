// crates/leon-core/src/page.rs
// Rules behind the page glue (menu, anchors, hover label, card reveal)

/// Height of the fixed header that anchored sections scroll below
pub const HEADER_OFFSET_PX: i32 = 80;

/// Viewport width above which the WhatsApp float shows its text label on hover
pub const WIDE_VIEWPORT_MIN_PX: f64 = 992.0;

/// Intersection threshold for revealing service and tour cards
pub const CARD_REVEAL_THRESHOLD: f64 = 0.1;

pub const CARD_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Stylesheet injected once so revealed cards fade in
pub const CARD_REVEAL_CSS: &str = "
.service-card, .tour-card {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.service-card.animate, .tour-card.animate {
    opacity: 1;
    transform: translateY(0);
}
";

/// Icon markup for the mobile menu button
pub fn menu_icon(open: bool) -> &'static str {
    if open {
        r#"<i class="fas fa-times"></i>"#
    } else {
        r#"<i class="fas fa-bars"></i>"#
    }
}

/// Selector for an in-page anchor, or `None` for hrefs that go nowhere
pub fn anchor_target(href: &str) -> Option<&str> {
    match href {
        "" | "#" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

/// Scroll position that puts a section just under the fixed header
pub fn scroll_top_for(offset_top: i32) -> f64 {
    f64::from(offset_top - HEADER_OFFSET_PX)
}

/// Inline style for the WhatsApp float label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverLabel {
    pub opacity: &'static str,
    pub right: &'static str,
}

/// Label style for hover state, or `None` on narrow viewports where the
/// label is left to CSS.
pub fn hover_label(hovered: bool, viewport_width: f64) -> Option<HoverLabel> {
    if viewport_width <= WIDE_VIEWPORT_MIN_PX {
        return None;
    }
    Some(if hovered {
        HoverLabel { opacity: "1", right: "75px" }
    } else {
        HoverLabel { opacity: "0", right: "70px" }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_icon() {
        assert!(menu_icon(true).contains("fa-times"));
        assert!(menu_icon(false).contains("fa-bars"));
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#tours"), Some("#tours"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }

    #[test]
    fn test_scroll_top_for() {
        assert_eq!(scroll_top_for(500), 420.0);
        assert_eq!(scroll_top_for(40), -40.0);
    }

    #[test]
    fn test_hover_label_wide_viewport() {
        assert_eq!(
            hover_label(true, 1280.0),
            Some(HoverLabel { opacity: "1", right: "75px" })
        );
        assert_eq!(
            hover_label(false, 1280.0),
            Some(HoverLabel { opacity: "0", right: "70px" })
        );
    }

    #[test]
    fn test_hover_label_narrow_viewport() {
        assert_eq!(hover_label(true, 992.0), None);
        assert_eq!(hover_label(false, 375.0), None);
    }
}
