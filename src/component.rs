//! Component base: the render contract, the mount lifecycle and an element
//! builder.
//!
//! Components describe their markup as an [`Element`] tree. Mounting renders
//! the tree and hands it to a [`Host`], which either keeps it in memory
//! ([`MemoryHost`], used for server rendering and tests) or turns it into live
//! DOM nodes (`web::DomHost`).
//!
//! Every component has to provide `render`; leaving it out is a compile error:
//!
//! ```compile_fail
//! use portfolio_site::component::{Component, Element};
//!
//! struct Blank;
//! impl Component for Blank {}
//! ```

use std::convert::Infallible;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type EventHandler = Arc<dyn Fn(&Event) + Send + Sync>;

const EVENT_PREFIX: &str = "on";
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

pub trait Component {
    fn render(&self) -> Element;
}

/// An event delivered to listeners registered through [`create_element`].
#[derive(Debug)]
pub struct Event {
    kind: String,
    default_prevented: AtomicBool,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            default_prevented: AtomicBool::new(false),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::Relaxed);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::Relaxed)
    }
}

pub enum AttrValue {
    Text(String),
    Handler(EventHandler),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Wraps a closure as an event attribute value, e.g. `("onClick", on(|_| ...))`.
pub fn on<F>(handler: F) -> AttrValue
where
    F: Fn(&Event) + Send + Sync + 'static,
{
    AttrValue::Handler(Arc::new(handler))
}

#[derive(Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Element(_) => None,
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(s) => escape_into(out, s),
            Self::Element(el) => el.write_html(out),
        }
    }
}

#[derive(Clone)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    listeners: Vec<(String, EventHandler)>,
    children: Vec<Node>,
}

/// Builds a single element.
///
/// Keys starting with `on` register a listener for the lower-cased remainder
/// (`onClick` listens for `click`); every other key becomes an attribute.
/// String children become text nodes.
pub fn create_element<K, A, C>(tag: &str, attributes: A, children: C) -> Element
where
    K: AsRef<str>,
    A: IntoIterator<Item = (K, AttrValue)>,
    C: IntoIterator<Item = Node>,
{
    let mut element = Element {
        tag: tag.to_string(),
        attributes: Vec::new(),
        listeners: Vec::new(),
        children: Vec::new(),
    };

    for (key, value) in attributes {
        let key = key.as_ref();
        match (key.strip_prefix(EVENT_PREFIX), value) {
            (Some(event), AttrValue::Handler(handler)) if !event.is_empty() => {
                element.listeners.push((event.to_lowercase(), handler));
            }
            (Some(event), AttrValue::Text(_)) if !event.is_empty() => {
                log::warn!("<{tag}> {key}: event attributes need a handler, ignoring");
            }
            (_, AttrValue::Handler(_)) => {
                log::warn!("<{tag}> {key}: handler on a non-event attribute, ignoring");
            }
            (_, AttrValue::Text(text)) => element.set_attribute(key, text),
        }
    }

    element.children.extend(children);
    element
}

impl Element {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set_attribute(&mut self, name: &str, value: String) {
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn listeners(&self) -> impl Iterator<Item = (&str, &EventHandler)> {
        self.listeners.iter().map(|(k, h)| (k.as_str(), h))
    }

    pub fn listener_count(&self, kind: &str) -> usize {
        self.listeners.iter().filter(|(k, _)| k == kind).count()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Calls this element's listeners for `event`. Events do not bubble.
    pub fn dispatch(&self, event: &Event) -> usize {
        let mut called = 0;
        for (_, handler) in self.listeners.iter().filter(|(k, _)| k == event.kind()) {
            handler(event);
            called += 1;
        }
        called
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(s) => out.push_str(s),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Depth-first search including `self`.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find_map(|el| el.find(predicate))
    }

    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_matching(predicate, &mut found);
        found
    }

    fn collect_matching<'a>(
        &'a self,
        predicate: &dyn Fn(&Element) -> bool,
        found: &mut Vec<&'a Element>,
    ) {
        if predicate(self) {
            found.push(self);
        }
        for el in self.children.iter().filter_map(Node::as_element) {
            el.collect_matching(predicate, found);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// Serializes the element; listeners are not part of the markup.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (k, v) in &self.attributes {
            let _ = write!(out, " {k}=\"");
            escape_into(out, v);
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

/// Where a mounted component's tree ends up.
pub trait Host {
    type Error;

    /// Replaces everything under the host with `root`.
    fn replace_children(&mut self, root: &Element) -> Result<(), Self::Error>;
}

#[derive(Default)]
pub struct MemoryHost {
    root: Option<Element>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    pub fn to_html(&self) -> String {
        self.root.as_ref().map(Element::to_html).unwrap_or_default()
    }
}

impl Host for MemoryHost {
    type Error = Infallible;

    fn replace_children(&mut self, root: &Element) -> Result<(), Self::Error> {
        self.root = Some(root.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Unmounted,
    Mounted,
}

pub struct Mount<C> {
    component: C,
    lifecycle: Lifecycle,
}

impl<C: Component> Mount<C> {
    pub fn new(component: C) -> Self {
        Self {
            component,
            lifecycle: Lifecycle::Unmounted,
        }
    }

    /// Renders the component and attaches the result to `host`.
    ///
    /// Rendering happens before the host is touched. Connecting again
    /// re-renders.
    pub fn connect<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<(), H::Error> {
        let root = self.component.render();
        host.replace_children(&root)?;
        self.lifecycle = Lifecycle::Mounted;
        Ok(())
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn component(&self) -> &C {
        &self.component
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_button_with_click_handler() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&clicks);
        let button = create_element(
            "button",
            [(
                "onClick",
                on(move |_| {
                    c.fetch_add(1, Ordering::SeqCst);
                }),
            )],
            ["Go".into()],
        );

        assert_eq!(button.tag(), "button");
        assert_eq!(button.children().len(), 1);
        assert_eq!(button.children()[0].as_text(), Some("Go"));
        assert_eq!(button.attribute("onClick"), None);
        assert_eq!(button.attribute("onclick"), None);
        assert_eq!(button.attributes().count(), 0);

        assert_eq!(button.dispatch(&Event::new("click")), 1);
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        button.dispatch(&Event::new("click"));
        assert_eq!(clicks.load(Ordering::SeqCst), 2);

        assert_eq!(button.dispatch(&Event::new("mouseover")), 0);
        assert_eq!(clicks.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_attributes_set_verbatim_and_overwrite() {
        let el = create_element(
            "a",
            [
                ("href", AttrValue::from("/about")),
                ("data-section", "about".into()),
                ("href", "/contact".into()),
            ],
            Vec::<Node>::new(),
        );
        assert_eq!(el.attribute("href"), Some("/contact"));
        assert_eq!(el.attribute("data-section"), Some("about"));
        assert_eq!(el.attributes().count(), 2);
    }

    #[test]
    fn test_mismatched_attribute_kinds_are_ignored() {
        let el = create_element(
            "div",
            [
                ("onClick", AttrValue::from("alert(1)")),
                ("title", on(|_| {})),
                ("on", "bare".into()),
            ],
            Vec::<Node>::new(),
        );
        assert_eq!(el.listener_count("click"), 0);
        assert_eq!(el.attribute("onClick"), None);
        assert_eq!(el.attribute("title"), None);
        // a bare "on" names no event, so it is an ordinary attribute
        assert_eq!(el.attribute("on"), Some("bare"));
    }

    #[test]
    fn test_children_appended_in_order() {
        let el = create_element(
            "p",
            Vec::<(&str, AttrValue)>::new(),
            [
                "Hi, I'm ".into(),
                create_element("span", [("class", "text-primary".into())], ["Mo".into()]).into(),
                "!".into(),
            ],
        );
        assert_eq!(el.children().len(), 3);
        assert_eq!(el.text_content(), "Hi, I'm Mo!");
        assert_eq!(
            el.to_html(),
            "<p>Hi, I&#39;m <span class=\"text-primary\">Mo</span>!</p>"
        );
    }

    #[test]
    fn test_html_escaping_and_void_elements() {
        let el = create_element(
            "div",
            [("title", AttrValue::from("a \"b\" <c>"))],
            [
                create_element("img", [("src", "/x.png".into())], Vec::<Node>::new()).into(),
                "1 < 2 & 3".into(),
            ],
        );
        assert_eq!(
            el.to_html(),
            "<div title=\"a &quot;b&quot; &lt;c&gt;\"><img src=\"/x.png\">1 &lt; 2 &amp; 3</div>"
        );
    }

    #[test]
    fn test_prevent_default_is_visible_to_dispatcher() {
        let link = create_element(
            "a",
            [("onClick", on(|ev| ev.prevent_default()))],
            Vec::<Node>::new(),
        );
        let ev = Event::new("click");
        link.dispatch(&ev);
        assert!(ev.default_prevented());
    }

    #[test]
    fn test_find_descendants() {
        let list = create_element(
            "ul",
            [("class", "list".into())],
            (0..3).map(|i| {
                Node::from(create_element(
                    "li",
                    [("class", "item".into())],
                    [format!("#{i}").into()],
                ))
            }),
        );
        assert_eq!(list.find_all(&|el| el.has_class("item")).len(), 3);
        assert_eq!(
            list.find(&|el| el.tag() == "li").map(Element::text_content),
            Some("#0".to_string())
        );
        assert!(list.find(&|el| el.tag() == "table").is_none());
    }

    struct Greeting {
        renders: Arc<AtomicUsize>,
    }

    impl Component for Greeting {
        fn render(&self) -> Element {
            self.renders.fetch_add(1, Ordering::SeqCst);
            create_element("h1", Vec::<(&str, AttrValue)>::new(), ["Hello".into()])
        }
    }

    #[test]
    fn test_mount_renders_into_host() {
        let renders = Arc::new(AtomicUsize::new(0));
        let mut mount = Mount::new(Greeting {
            renders: Arc::clone(&renders),
        });
        let mut host = MemoryHost::new();
        assert_eq!(mount.lifecycle(), Lifecycle::Unmounted);
        assert_eq!(renders.load(Ordering::SeqCst), 0);

        mount.connect(&mut host).unwrap();
        assert_eq!(mount.lifecycle(), Lifecycle::Mounted);
        assert_eq!(renders.load(Ordering::SeqCst), 1);
        assert_eq!(host.to_html(), "<h1>Hello</h1>");

        mount.connect(&mut host).unwrap();
        assert_eq!(renders.load(Ordering::SeqCst), 2);
    }

    struct Broken;

    impl Component for Broken {
        fn render(&self) -> Element {
            panic!("render failed");
        }
    }

    #[test]
    fn test_failed_render_leaves_host_untouched() {
        let mut mount = Mount::new(Broken);
        let mut host = MemoryHost::new();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _ = mount.connect(&mut host);
        }));
        assert!(result.is_err());
        assert!(host.root().is_none());
        assert_eq!(mount.lifecycle(), Lifecycle::Unmounted);
    }
}
