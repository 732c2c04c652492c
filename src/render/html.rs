//! Typed HTML tree. Every attribute an element can carry is a variant of
//! [`Attr`], and all text passes through [`escape`] on the way out.
use std::fmt::{self, Display, Formatter, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Html,
    Head,
    Body,
    Main,
    Title,
    Meta,
    Link,
    Script,
    Style,
    Div,
    H1,
    P,
    Em,
    Small,
    Header,
    Footer,
    Form,
    Input,
    Button,
    A,
    Hr,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Html => "html",
            Tag::Head => "head",
            Tag::Body => "body",
            Tag::Main => "main",
            Tag::Title => "title",
            Tag::Meta => "meta",
            Tag::Link => "link",
            Tag::Script => "script",
            Tag::Style => "style",
            Tag::Div => "div",
            Tag::H1 => "h1",
            Tag::P => "p",
            Tag::Em => "em",
            Tag::Small => "small",
            Tag::Header => "header",
            Tag::Footer => "footer",
            Tag::Form => "form",
            Tag::Input => "input",
            Tag::Button => "button",
            Tag::A => "a",
            Tag::Hr => "hr",
        }
    }

    fn is_void(self) -> bool {
        matches!(self, Tag::Meta | Tag::Link | Tag::Input | Tag::Hr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    Id(&'static str),
    Class(&'static str),
    Style(&'static str),
    Type(&'static str),
    Name(&'static str),
    Placeholder(&'static str),
    MaxLength(usize),
    Required,
    Method(&'static str),
    Href(&'static str),
    Rel(&'static str),
    Src(&'static str),
    Target(&'static str),
    Charset(&'static str),
    MetaName(&'static str),
    Content(&'static str),
    HxPost(&'static str),
    HxTarget(&'static str),
    HxSwap(&'static str),
    HxOnAfterRequest(&'static str),
}

impl Attr {
    fn key(&self) -> &'static str {
        match self {
            Attr::Id(_) => "id",
            Attr::Class(_) => "class",
            Attr::Style(_) => "style",
            Attr::Type(_) => "type",
            Attr::Name(_) | Attr::MetaName(_) => "name",
            Attr::Placeholder(_) => "placeholder",
            Attr::MaxLength(_) => "maxlength",
            Attr::Required => "required",
            Attr::Method(_) => "method",
            Attr::Href(_) => "href",
            Attr::Rel(_) => "rel",
            Attr::Src(_) => "src",
            Attr::Target(_) => "target",
            Attr::Charset(_) => "charset",
            Attr::Content(_) => "content",
            Attr::HxPost(_) => "hx-post",
            Attr::HxTarget(_) => "hx-target",
            Attr::HxSwap(_) => "hx-swap",
            Attr::HxOnAfterRequest(_) => "hx-on::after-request",
        }
    }

    fn value(&self) -> Option<String> {
        match self {
            Attr::Required => None,
            Attr::MaxLength(n) => Some(n.to_string()),
            Attr::Id(v)
            | Attr::Class(v)
            | Attr::Style(v)
            | Attr::Type(v)
            | Attr::Name(v)
            | Attr::Placeholder(v)
            | Attr::Method(v)
            | Attr::Href(v)
            | Attr::Rel(v)
            | Attr::Src(v)
            | Attr::Target(v)
            | Attr::Charset(v)
            | Attr::MetaName(v)
            | Attr::Content(v)
            | Attr::HxPost(v)
            | Attr::HxTarget(v)
            | Attr::HxSwap(v)
            | Attr::HxOnAfterRequest(v) => Some(v.to_string()),
        }
    }
}

impl Display for Attr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, " {}=\"{}\"", self.key(), escape(&value)),
            None => write!(f, " {}", self.key()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Trusted markup such as inline CSS. Never user input.
    Raw(&'static str),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => Display::fmt(element, f),
            Node::Text(text) => f.write_str(&escape(text)),
            Node::Raw(markup) => f.write_str(markup),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub attrs: Vec<Attr>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn class(self, class: &'static str) -> Self {
        self.attr(Attr::Class(class))
    }

    pub fn style(self, style: &'static str) -> Self {
        self.attr(Attr::Style(style))
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn raw(mut self, markup: &'static str) -> Self {
        self.children.push(Node::Raw(markup));
        self
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = self.tag.name();

        write!(f, "<{name}")?;
        for attr in &self.attrs {
            Display::fmt(attr, f)?;
        }
        f.write_char('>')?;

        if self.tag.is_void() {
            return Ok(());
        }

        for child in &self.children {
            Display::fmt(child, f)?;
        }
        write!(f, "</{name}>")
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(
            escape(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("it's"), "it&#x27;s");
    }

    #[test]
    fn test_nested_elements() {
        let markup = Element::new(Tag::Div)
            .attr(Attr::Id("outer"))
            .child(Element::new(Tag::P).child("a < b"))
            .to_string();

        assert_eq!(markup, r#"<div id="outer"><p>a &lt; b</p></div>"#);
    }

    #[test]
    fn test_void_and_boolean_attrs() {
        let markup = Element::new(Tag::Input)
            .attr(Attr::Name("name"))
            .attr(Attr::MaxLength(15))
            .attr(Attr::Required)
            .to_string();

        assert_eq!(markup, r#"<input name="name" maxlength="15" required>"#);
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let markup = Element::new(Tag::Style).raw("a > b { color: red; }").to_string();

        assert_eq!(markup, "<style>a > b { color: red; }</style>");
    }
}
