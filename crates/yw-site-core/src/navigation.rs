//! Mobile menu state and nav-link routing.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Flip the menu and return the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Inline style for one hamburger bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

const BAR_RESET: BarStyle = BarStyle { transform: "none", opacity: "1" };

/// Styles for the three bars: an X when open, three lines when closed.
pub fn hamburger_bars(open: bool) -> [BarStyle; 3] {
    if !open {
        return [BAR_RESET; 3];
    }
    [
        BarStyle { transform: "rotate(45deg) translate(5px, 5px)", opacity: "1" },
        BarStyle { transform: "none", opacity: "0" },
        BarStyle { transform: "rotate(-45deg) translate(7px, -6px)", opacity: "1" },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Full navigation to another page.
    Redirect(String),
    /// Smooth-scroll to the in-page element matched by this selector.
    ScrollTo(String),
    /// Leave the browser's default behaviour alone.
    Default,
}

/// Decide what a nav-link click does.
///
/// A page reference always redirects, even when the same href happens to
/// match an element on this page. `resolves` reports whether a selector
/// matches an element in the current document.
pub fn classify_link(href: &str, page_marker: &str, resolves: impl FnOnce(&str) -> bool) -> NavAction {
    let href = href.trim();
    if href.is_empty() {
        return NavAction::Default;
    }
    if !page_marker.is_empty() && href.contains(page_marker) {
        return NavAction::Redirect(href.to_string());
    }
    if href.starts_with('#') && href.len() > 1 && resolves(href) {
        return NavAction::ScrollTo(href.to_string());
    }
    NavAction::Default
}

/// Scroll position that puts `offset_top` just below a fixed header.
pub fn scroll_target(offset_top: f64, header_height: f64) -> f64 {
    (offset_top - header_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_close() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn bars_form_an_x_when_open() {
        let open = hamburger_bars(true);
        assert_eq!(open[0].transform, "rotate(45deg) translate(5px, 5px)");
        assert_eq!(open[1].opacity, "0");
        assert_eq!(open[2].transform, "rotate(-45deg) translate(7px, -6px)");

        for bar in hamburger_bars(false) {
            assert_eq!(bar, BarStyle { transform: "none", opacity: "1" });
        }
    }

    #[test]
    fn page_reference_wins_over_anchor() {
        assert_eq!(
            classify_link("about.html", ".html", |_| true),
            NavAction::Redirect("about.html".into())
        );
        assert_eq!(
            classify_link("index.html#team", ".html", |_| panic!("must not probe the page")),
            NavAction::Redirect("index.html#team".into())
        );
    }

    #[test]
    fn anchors_scroll_only_when_found() {
        assert_eq!(classify_link("#about", ".html", |s| s == "#about"), NavAction::ScrollTo("#about".into()));
        assert_eq!(classify_link("#missing", ".html", |_| false), NavAction::Default);
        assert_eq!(classify_link("#", ".html", |_| true), NavAction::Default);
        assert_eq!(classify_link("  ", ".html", |_| true), NavAction::Default);
    }

    #[test]
    fn header_offset_is_subtracted() {
        assert_eq!(scroll_target(900.0, 80.0), 820.0);
        assert_eq!(scroll_target(40.0, 80.0), 0.0);
    }
}
