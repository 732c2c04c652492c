use crate::guestbook::{Entry, MAX_MESSAGE_CHAR, MAX_NAME_CHAR};

use super::{
    html::{Attr, Element, Tag},
    styles,
};

pub const TITLE: &str = "Guestbook+ | Share Your Thoughts";
pub const ENTRY_LIST_ID: &str = "message-list";
pub const SUBMIT_PATH: &str = "/submit-message";
pub const FAVICON_PATH: &str = "/assets/favicon.png";

const PLACEHOLDER_AVATAR: &str = "👤";
const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4/dist/htmx.min.js";
const PICO_HREF: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
const AUTHOR_HREF: &str = "https://www.linkedin.com/in/ayush-kakkar-11a24a252/";

/// Upper-cased first character of `name`, or a placeholder glyph when empty.
pub fn avatar(name: &str) -> String {
    name.chars()
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string())
}

pub fn render_entry(entry: &Entry) -> Element {
    let text = Element::new(Tag::Div)
        .style(styles::CARD_TEXT)
        .child(
            Element::new(Tag::Header)
                .style(styles::CARD_NAME)
                .child(entry.name.as_str()),
        )
        .child(
            Element::new(Tag::P)
                .style(styles::CARD_MESSAGE)
                .child(entry.message.as_str()),
        )
        .child(
            Element::new(Tag::Footer).style(styles::CARD_TIMESTAMP).child(
                Element::new(Tag::Small)
                    .child(Element::new(Tag::Em).child(format!("Posted: {}", entry.timestamp))),
            ),
        );

    Element::new(Tag::Div)
        .class("message-card card-box")
        .style(styles::CARD)
        .child(
            Element::new(Tag::Div)
                .style(styles::CARD_ROW)
                .child(
                    Element::new(Tag::Div)
                        .style(styles::AVATAR)
                        .child(avatar(&entry.name)),
                )
                .child(text),
        )
}

/// Swap target for submissions, in the order given.
pub fn render_entry_list(entries: &[Entry]) -> Element {
    Element::new(Tag::Div)
        .attr(Attr::Id(ENTRY_LIST_ID))
        .style(styles::ENTRY_LIST)
        .children(entries.iter().map(render_entry))
}

fn render_form() -> Element {
    let name = Element::new(Tag::Input)
        .attr(Attr::Type("text"))
        .attr(Attr::Name("name"))
        .attr(Attr::Placeholder("Your Name"))
        .attr(Attr::Required)
        .attr(Attr::MaxLength(MAX_NAME_CHAR))
        .style(styles::NAME_INPUT);

    let message = Element::new(Tag::Input)
        .attr(Attr::Type("text"))
        .attr(Attr::Name("message"))
        .attr(Attr::Placeholder("Your Message"))
        .attr(Attr::Required)
        .attr(Attr::MaxLength(MAX_MESSAGE_CHAR))
        .style(styles::MESSAGE_INPUT);

    let send = Element::new(Tag::Button)
        .attr(Attr::Type("submit"))
        .class("send-btn")
        .style(styles::SEND_BUTTON)
        .child("Send Message");

    let form = Element::new(Tag::Form)
        .attr(Attr::Method("post"))
        .attr(Attr::HxPost(SUBMIT_PATH))
        .attr(Attr::HxTarget("#message-list"))
        .attr(Attr::HxSwap("outerHTML"))
        .attr(Attr::HxOnAfterRequest("this.reset()"))
        .style(styles::FORM)
        .child(
            Element::new(Tag::Div)
                .style(styles::FORM_ROW)
                .child(name)
                .child(message)
                .child(send),
        );

    Element::new(Tag::Div)
        .class("form-box card-box")
        .style(styles::FORM_BOX)
        .child(form)
}

fn render_footer() -> Element {
    Element::new(Tag::Div).child(Element::new(Tag::Hr)).child(
        Element::new(Tag::Div)
            .style(styles::CREDIT)
            .child("Made with ❤️ by ")
            .child(
                Element::new(Tag::A)
                    .attr(Attr::Href(AUTHOR_HREF))
                    .attr(Attr::Target("_blank"))
                    .style(styles::CREDIT_LINK)
                    .child("Ayush Kakkar"),
            )
            .child(" | Guestbook+ 2024"),
    )
}

/// Header, form, entry list and footer.
pub fn render_page(entries: &[Entry]) -> Element {
    let logo = Element::new(Tag::Div)
        .style(styles::LOGO)
        .child("🌟 Guestbook+");

    let subtitle = Element::new(Tag::P)
        .style(styles::SUBTITLE)
        .child(Element::new(Tag::Em).child("Share your thoughts, feedback, or just say hi! ✨"));

    Element::new(Tag::Div)
        .style(styles::CONTENT)
        .child(logo)
        .child(subtitle)
        .child(render_form())
        .child(
            Element::new(Tag::Div)
                .style(styles::ENTRY_LIST_WRAPPER)
                .child(render_entry_list(entries)),
        )
        .child(render_footer())
}

pub fn render_document(entries: &[Entry]) -> String {
    let head = Element::new(Tag::Head)
        .child(Element::new(Tag::Title).child(TITLE))
        .child(Element::new(Tag::Meta).attr(Attr::Charset("utf-8")))
        .child(
            Element::new(Tag::Meta)
                .attr(Attr::MetaName("viewport"))
                .attr(Attr::Content("width=device-width, initial-scale=1")),
        )
        .child(Element::new(Tag::Script).attr(Attr::Src(HTMX_SRC)))
        .child(
            Element::new(Tag::Link)
                .attr(Attr::Rel("stylesheet"))
                .attr(Attr::Href(PICO_HREF)),
        )
        .child(
            Element::new(Tag::Link)
                .attr(Attr::Rel("icon"))
                .attr(Attr::Type("image/png"))
                .attr(Attr::Href(FAVICON_PATH)),
        )
        .child(Element::new(Tag::Style).raw(styles::STYLESHEET));

    let body = Element::new(Tag::Body).child(
        Element::new(Tag::Main)
            .class("container")
            .child(Element::new(Tag::H1).child(TITLE))
            .child(render_page(entries)),
    );

    let document = Element::new(Tag::Html).child(head).child(body);

    format!("<!doctype html>{document}")
}
