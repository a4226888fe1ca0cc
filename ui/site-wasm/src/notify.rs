//! Toast notifications rendered into the page body.

use crate::dom::{self, js_err};
use crate::state::Site;
use crate::timer::BrowserDelay;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};
use yw_site_core::notification::{self, ToastHost, ToastTimings};
use yw_site_core::{NotificationKind, SiteError};

/// Toasts live as `.notification` children of `<body>`.
pub struct DomToasts;

impl ToastHost for DomToasts {
    type Toast = Element;

    fn clear_all(&self) {
        for existing in dom::query_all(".notification") {
            existing.remove();
        }
    }

    fn mount(&self, message: &str, kind: NotificationKind) -> yw_site_core::Result<Element> {
        let body = dom::document()
            .body()
            .ok_or_else(|| SiteError::MissingElement("body".into()))?;

        let panel = dom::create_element("div")?;
        panel.set_class_name(&kind.class_name());
        panel.set_attribute("role", "status").map_err(js_err)?;

        let content = dom::create_element("div")?;
        content.set_class_name("notification__content");

        let text = dom::create_element("span")?;
        text.set_class_name("notification__message");
        dom::set_text(&text, message);

        let close = dom::create_element("button")?;
        close.set_class_name("notification__close");
        close.set_attribute("type", "button").map_err(js_err)?;
        close
            .set_attribute("aria-label", "Close notification")
            .map_err(js_err)?;
        dom::set_text(&close, "×");

        dom::set_styles(
            &panel,
            &[
                ("position", "fixed"),
                ("top", "100px"),
                ("right", "20px"),
                ("background", kind.background()),
                ("color", "white"),
                ("padding", "20px"),
                ("border-radius", "4px"),
                ("border", "3px solid #000"),
                ("box-shadow", "inset -3px -3px 0 rgba(0,0,0,0.3), 6px 6px 0 rgba(0,0,0,0.5)"),
                ("z-index", "10000"),
                ("max-width", "400px"),
                ("transform", "translateX(100%)"),
                ("transition", "transform 300ms ease"),
                ("font-size", "14px"),
                ("line-height", "1.5"),
                ("font-weight", "700"),
            ],
        );
        dom::set_styles(
            &content,
            &[
                ("display", "flex"),
                ("align-items", "center"),
                ("justify-content", "space-between"),
                ("gap", "12px"),
            ],
        );
        dom::set_styles(
            &close,
            &[
                ("background", "none"),
                ("border", "none"),
                ("color", "white"),
                ("font-size", "20px"),
                ("cursor", "pointer"),
                ("padding", "0"),
                ("line-height", "1"),
                ("font-weight", "bold"),
            ],
        );

        content.append_child(&text).map_err(js_err)?;
        content.append_child(&close).map_err(js_err)?;
        panel.append_child(&content).map_err(js_err)?;
        body.append_child(&panel).map_err(js_err)?;
        Ok(panel)
    }

    fn slide_in(&self, toast: &Element) {
        dom::set_style(toast, "transform", "translateX(0)");
    }

    fn slide_out(&self, toast: &Element) {
        dom::set_style(toast, "transform", "translateX(100%)");
    }

    fn is_attached(&self, toast: &Element) -> bool {
        toast.parent_node().is_some()
    }

    fn detach(&self, toast: &Element) {
        toast.remove();
    }
}

/// Show a toast, replacing any that is on screen.
pub fn show(site: &Site, message: &str, kind: NotificationKind) {
    let toast = match notification::present(&DomToasts, message, kind) {
        Ok(toast) => toast,
        Err(e) => {
            warn!("could not show notification: {}", e);
            return;
        }
    };
    let timings = ToastTimings::from(&site.config.timings);

    let entering = toast.clone();
    spawn_local(async move {
        notification::slide_in_later(&DomToasts, &BrowserDelay, &entering, timings).await;
    });
    spawn_local(async move {
        notification::auto_dismiss(&DomToasts, &BrowserDelay, &toast, timings).await;
    });
}

/// Click on a toast's close control.
pub fn on_close(site: &Site, close: &Element, _e: &MouseEvent) {
    let Some(panel) = dom::closest(close, ".notification") else {
        return;
    };
    let timings = ToastTimings::from(&site.config.timings);
    spawn_local(async move {
        notification::dismiss(&DomToasts, &BrowserDelay, &panel, timings).await;
    });
}
