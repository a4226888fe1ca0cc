//! Navigation: mobile menu toggle, hamburger animation and nav-link routing.

use crate::audio;
use crate::dom;
use crate::state::Site;
use tracing::{debug, warn};
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollToOptions};
use yw_site_core::navigation::{classify_link, hamburger_bars, scroll_target, NavAction};

/// Reflect the menu state on `#nav-menu` and the toggle's three bars.
fn render_menu(site: &Site, open: bool) {
    if let Some(menu) = &site.els.nav_menu {
        dom::toggle_class(menu, "active", open);
    }
    if let Some(toggle) = &site.els.nav_toggle {
        let bars = dom::query_all_within(toggle, "span");
        for (bar, style) in bars.iter().zip(hamburger_bars(open)) {
            dom::set_styles(bar, &[("transform", style.transform), ("opacity", style.opacity)]);
        }
    }
}

pub fn on_toggle(site: &Site, _toggle: &Element, _e: &MouseEvent) {
    let open = site.with_mut(|s| s.menu.toggle());
    render_menu(site, open);
}

pub fn on_link(site: &Site, link: &Element, e: &MouseEvent) {
    site.with_mut(|s| s.menu.close());
    render_menu(site, false);

    let href = link.get_attribute("href").unwrap_or_default();
    let behaviour = &site.config.behaviour;
    match classify_link(&href, &behaviour.page_marker, |selector| dom::query(selector).is_some()) {
        NavAction::Redirect(target) => {
            e.prevent_default();
            if let Err(err) = dom::window().location().set_href(&target) {
                warn!("navigation to {} failed: {}", target, dom::js_err(err));
            }
        }
        NavAction::ScrollTo(selector) => {
            let Some(section) = dom::query(&selector) else {
                return;
            };
            e.prevent_default();

            let header_height = site.els.header.as_ref().map(dom::offset_height).unwrap_or(0.0);
            let top = scroll_target(dom::offset_top(&section), header_height);
            debug!("scrolling to {} at {}px", selector, top);

            let opts = ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(ScrollBehavior::Smooth);
            dom::window().scroll_to_with_scroll_to_options(&opts);

            if behaviour.jump_on_nav {
                audio::play_jump_tone();
            }
        }
        NavAction::Default => {}
    }
}
