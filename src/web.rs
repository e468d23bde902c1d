//! Browser adapters for the DOM-free core.

use std::sync::Arc;

use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlAnchorElement, Window};

use crate::component::{Element, Event, Host, Node};
use crate::router::{History, PopListener};

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// `window.history` / `window.location` backed [`History`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        window()
            .and_then(|w| w.location().pathname())
            .unwrap_or_else(|_| "/".to_string())
    }

    fn push(&self, path: &str) {
        let pushed = window()
            .and_then(|w| w.history())
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
        if let Err(e) = pushed {
            log::error!("pushState {path}: {e:?}");
        }
    }

    fn on_pop(&self, listener: PopListener) {
        let callback = Closure::<dyn Fn()>::new(move || listener());
        let added = window().and_then(|w| {
            w.add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref())
        });
        match added {
            // lives as long as the page
            Ok(()) => callback.forget(),
            Err(e) => log::error!("popstate listener: {e:?}"),
        }
    }
}

type DomListener = Closure<dyn Fn(web_sys::Event)>;

/// Mounts element trees under a real DOM element.
///
/// Event closures are owned by the host and released on the next
/// `replace_children` or when the host is dropped.
pub struct DomHost {
    root: web_sys::Element,
    listeners: Vec<DomListener>,
}

impl DomHost {
    pub fn new(root: web_sys::Element) -> Self {
        Self {
            root,
            listeners: Vec::new(),
        }
    }

    fn build(&mut self, document: &Document, node: &Node) -> Result<web_sys::Node, JsValue> {
        match node {
            Node::Text(text) => Ok(document.create_text_node(text).into()),
            Node::Element(el) => self.build_element(document, el).map(Into::into),
        }
    }

    fn build_element(
        &mut self,
        document: &Document,
        el: &Element,
    ) -> Result<web_sys::Element, JsValue> {
        let dom = document.create_element(el.tag())?;
        for (name, value) in el.attributes() {
            dom.set_attribute(name, value)?;
        }
        for (kind, handler) in el.listeners() {
            let handler = Arc::clone(handler);
            let closure = DomListener::new(move |ev: web_sys::Event| {
                let event = Event::new(ev.type_());
                handler(&event);
                if event.default_prevented() {
                    ev.prevent_default();
                }
            });
            dom.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            self.listeners.push(closure);
        }
        for child in el.children() {
            let child = self.build(document, child)?;
            dom.append_child(&child)?;
        }
        Ok(dom)
    }
}

impl Host for DomHost {
    type Error = JsValue;

    fn replace_children(&mut self, root: &Element) -> Result<(), Self::Error> {
        let document = document()?;
        let previous = std::mem::take(&mut self.listeners);
        let built = self.build_element(&document, root)?;
        self.root.set_inner_html("");
        self.root.append_child(&built)?;
        drop(previous);
        Ok(())
    }
}

pub fn scroll_to_top() {
    if let Ok(w) = window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn alert(message: &str) {
    if let Err(e) = window().and_then(|w| w.alert_with_message(message)) {
        log::error!("alert: {e:?}");
    }
}

pub fn set_root_attribute(name: &str, value: &str) {
    let set = document().and_then(|d| {
        d.document_element()
            .ok_or_else(|| JsValue::from_str("no document element"))?
            .set_attribute(name, value)
    });
    if let Err(e) = set {
        log::error!("setting {name} on <html>: {e:?}");
    }
}

/// Clicks a temporary `<a download>` so the browser saves `href`.
pub fn trigger_download(href: &str, file_name: &str) -> Result<(), JsValue> {
    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    let link = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    link.set_href(href);
    link.set_download(file_name);
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}
