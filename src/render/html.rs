//! Print-ready HTML encoding of a [`Layout`].
//!
//! The page is self-contained: styles are inlined and there are no scripts,
//! so the host's print dialog (or a headless browser) can turn it into a PDF
//! as-is.

use super::{
    Template,
    layout::{
        Body, Contact, EMPTY_STATE_HINT, EMPTY_STATE_TITLE, Item, Layout, Rating, SectionContent,
    },
};
use crate::domain::MAX_SKILL_LEVEL;

const BASE_STYLE: &str = "\
@page { size: letter; margin: 0.5in; }
* { box-sizing: border-box; }
body { margin: 0; background: #fff; color: #111827; }
.resume { max-width: 8.5in; margin: 0 auto; padding: 2rem; }
header { text-align: center; padding-bottom: 1rem; margin-bottom: 1.5rem; }
header h1 { margin: 0 0 0.5rem; }
.contact, .links { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; font-size: 0.875rem; }
.contact-label { position: absolute; left: -10000px; }
section { margin-bottom: 1.5rem; }
.entry { margin-bottom: 1rem; }
.entry-head { display: flex; justify-content: space-between; align-items: baseline; }
.entry h3 { margin: 0; font-size: 1rem; }
.entry p { margin: 0; }
.dates { font-size: 0.875rem; color: #4b5563; white-space: nowrap; }
.description { font-size: 0.875rem; color: #374151; margin-top: 0.5rem; white-space: pre-line; }
.skills { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem 2rem; }
.skill { display: flex; justify-content: space-between; align-items: center; }
.empty { text-align: center; color: #6b7280; padding: 3rem 0; }
@media print { body { -webkit-print-color-adjust: exact; print-color-adjust: exact; } .resume { padding: 0; } }
";

const MODERN_STYLE: &str = "\
body { font-family: system-ui, -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif; }
header { border-bottom: 2px solid #155e75; }
header h1 { font-size: 1.875rem; }
.links { color: #155e75; margin-top: 0.5rem; }
h2 { color: #155e75; font-size: 1.25rem; border-bottom: 1px solid #d1d5db; padding-bottom: 0.25rem; }
.entry { border-left: 2px solid #155e75; padding-left: 1rem; }
.subtitle { color: #155e75; font-weight: 500; }
.dates { background: #f3f4f6; padding: 0.125rem 0.5rem; border-radius: 0.25rem; }
.star { color: #d1d5db; }
.star.filled { color: #155e75; }
";

const CLASSIC_STYLE: &str = "\
body { font-family: Georgia, 'Times New Roman', serif; }
header { border-bottom: 1px solid #9ca3af; }
header h1 { font-size: 2.25rem; }
.contact, .links { color: #374151; }
.links { font-size: 0.75rem; margin-top: 0.5rem; }
h2 { font-size: 1.125rem; text-transform: uppercase; letter-spacing: 0.05em; }
.subtitle { font-style: italic; color: #374151; }
.description { line-height: 1.6; }
.level { font-size: 0.875rem; color: #4b5563; font-weight: 500; }
";

/// Escapes text for use in HTML element content and attribute values.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn push_contacts(html: &mut String, class: &str, contacts: &[Contact]) {
    if contacts.is_empty() {
        return;
    }
    html.push_str(&format!("<div class=\"{class}\">"));
    for contact in contacts {
        html.push_str(&format!(
            "<span><span class=\"contact-label\">{}: </span>{}</span>",
            contact.kind.label(),
            escape_html(&contact.value)
        ));
    }
    html.push_str("</div>");
}

fn push_item(html: &mut String, item: &Item) {
    html.push_str("<div class=\"entry\"><div class=\"entry-head\"><div>");
    html.push_str(&format!("<h3>{}</h3>", escape_html(&item.title)));
    html.push_str(&format!(
        "<p class=\"subtitle\">{}</p>",
        escape_html(&item.subtitle)
    ));
    html.push_str("</div>");
    if let Some(dates) = &item.dates {
        html.push_str(&format!("<span class=\"dates\">{}</span>", escape_html(dates)));
    }
    html.push_str("</div>");
    if let Some(description) = &item.description {
        html.push_str(&format!(
            "<div class=\"description\">{}</div>",
            escape_html(description)
        ));
    }
    html.push_str("</div>");
}

fn push_rating(html: &mut String, rating: Rating) {
    match rating {
        Rating::Stars(filled) => {
            html.push_str(&format!(
                "<span class=\"stars\" aria-label=\"{filled} of {MAX_SKILL_LEVEL}\">"
            ));
            for unit in 1..=MAX_SKILL_LEVEL {
                if unit <= filled {
                    html.push_str("<span class=\"star filled\">★</span>");
                } else {
                    html.push_str("<span class=\"star\">☆</span>");
                }
            }
            html.push_str("</span>");
        }
        Rating::Label(label) => {
            html.push_str(&format!("<span class=\"level\">{label}</span>"));
        }
    }
}

/// Encodes `layout` as a standalone HTML page.
#[must_use]
pub fn page(layout: &Layout) -> String {
    let template_style = match layout.template {
        Template::Modern => MODERN_STYLE,
        Template::Classic => CLASSIC_STYLE,
    };
    let title = escape_html(&layout.header.name);

    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(&format!(
        "<style>\n{BASE_STYLE}{template_style}</style>\n</head>\n"
    ));
    html.push_str(&format!(
        "<body>\n<main class=\"resume {}\">\n<header>",
        layout.template
    ));
    html.push_str(&format!("<h1>{title}</h1>"));
    push_contacts(&mut html, "contact", &layout.header.contact);
    push_contacts(&mut html, "links", &layout.header.links);
    html.push_str("</header>\n");

    match &layout.body {
        Body::Empty => {
            html.push_str(&format!(
                "<div class=\"empty\"><p>{EMPTY_STATE_TITLE}</p><p>{EMPTY_STATE_HINT}</p></div>\n"
            ));
        }
        Body::Sections(sections) => {
            for section in sections {
                html.push_str(&format!("<section><h2>{}</h2>", section.heading));
                match &section.content {
                    SectionContent::Entries(items) => {
                        for item in items {
                            push_item(&mut html, item);
                        }
                    }
                    SectionContent::Skills(skills) => {
                        html.push_str("<div class=\"skills\">");
                        for skill in skills {
                            html.push_str(&format!(
                                "<div class=\"skill\"><span>{}</span>",
                                escape_html(&skill.name)
                            ));
                            push_rating(&mut html, skill.rating);
                            html.push_str("</div>");
                        }
                        html.push_str("</div>");
                    }
                }
                html.push_str("</section>\n");
            }
        }
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}
