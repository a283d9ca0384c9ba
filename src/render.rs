//! Server-side HTML rendering.
//!
//! The page is built as one document from the immutable content model and a
//! [`UiState`], section by section, mirroring the site layout: header with
//! navigation and language toggle, hero with search and quick facts, the
//! checklist cards, the resource directory, the FAQ, the footer, and the
//! consultation modal. All dynamic text goes through [`escape_html`].
//!
//! Client-only affordances (copy link to clipboard, print, disabling the
//! submit button while a submission is outstanding) ship as a small inline
//! script; a clipboard failure is swallowed with no feedback.

use chrono::{Datelike, Utc};

use crate::consult::Gender;
use crate::content::{FAQ, QUICK_FACTS, RESOURCES};
use crate::i18n::{Language, UiStrings};
use crate::state::UiState;

/// Escape text for safe interpolation into HTML (element text or
/// double-quoted attribute values).
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Percent-encode a string for use inside a query-string value.
///
/// Unreserved characters (RFC 3986) pass through; everything else is encoded
/// byte-wise, so multi-byte UTF-8 (Devanagari queries) round-trips.
pub fn encode_query_value(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char);
            }
            _ => result.push_str(&format!("%{:02X}", byte)),
        }
    }

    result
}

/// Self link carrying the given language plus the current query.
fn page_href(language: Language, query: &str, consult: bool, anchor: &str) -> String {
    let mut href = format!("/?lang={}", language.code());
    if !query.is_empty() {
        href.push_str(&format!("&q={}", encode_query_value(query)));
    }
    if consult {
        href.push_str("&consult=1");
    }
    if !anchor.is_empty() {
        href.push('#');
        href.push_str(anchor);
    }
    href
}

/// Render the complete page.
///
/// # Arguments
/// * `state` - View state (language, query, panels, modal, form values)
/// * `notice` - Optional acknowledgment line shown inside the modal (the
///   success or retry message after a form submission)
pub fn render_page(state: &UiState, notice: Option<&str>) -> String {
    let t = UiStrings::for_language(state.language());

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!doctype html>\n");
    html.push_str(&format!(
        "<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{} — {}</title>\n",
        state.language().code(),
        escape_html(t.brand),
        escape_html(t.tagline)
    ));
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n");

    html.push_str(&render_header(state, t));
    // After a successful submission the modal is closed, so the
    // acknowledgment surfaces as a banner instead.
    if let Some(text) = notice {
        if !state.consult_open() {
            html.push_str(&format!(
                "<div class=\"banner notice\">{}</div>\n",
                escape_html(text)
            ));
        }
    }
    html.push_str(&render_hero(state, t));
    html.push_str(&render_checklist(state, t));
    html.push_str(&render_resources(state, t));
    html.push_str(&render_faq(state, t));
    html.push_str(&render_footer(t));
    html.push_str(&render_consult_modal(state, t, notice));
    html.push_str(SCRIPT);
    html.push_str("</body>\n</html>\n");

    html
}

/// Header: brand, section anchors, language toggle.
fn render_header(state: &UiState, t: &UiStrings) -> String {
    let lang = state.language();
    let query = state.query();

    let lang_button = |target: Language, label: &str| {
        let class = if lang == target { "lang active" } else { "lang" };
        format!(
            "<a class=\"{}\" href=\"{}\">{}</a>",
            class,
            page_href(target, query, false, ""),
            label
        )
    };

    format!(
        "<header>\n<div class=\"bar\">\n\
<div class=\"brand\"><span class=\"brand-name\">{brand}</span> <span class=\"tagline\">{tagline}</span></div>\n\
<nav>\n\
<a href=\"#checklist\">{nav_checklist}</a>\n\
<a href=\"#resources\">{nav_resources}</a>\n\
<a href=\"#faq\">{nav_faq}</a>\n\
<a href=\"{consult_href}\">{nav_contact}</a>\n\
</nav>\n\
<div class=\"lang-toggle\">{en}{hi}</div>\n\
</div>\n</header>\n",
        brand = escape_html(t.brand),
        tagline = escape_html(t.tagline),
        nav_checklist = escape_html(t.nav_checklist),
        nav_resources = escape_html(t.nav_resources),
        nav_faq = escape_html(t.nav_faq),
        consult_href = page_href(lang, query, true, "consult"),
        nav_contact = escape_html(t.nav_contact),
        en = lang_button(Language::ENGLISH, "EN"),
        hi = lang_button(Language::HINDI, "हिं"),
    )
}

/// Hero: heading, search form, toolbar buttons, quick-facts card.
fn render_hero(state: &UiState, t: &UiStrings) -> String {
    let lang = state.language();

    let mut facts = String::new();
    for fact in &QUICK_FACTS {
        facts.push_str(&format!("<li>✔ {}</li>\n", escape_html(fact.get(lang))));
    }

    format!(
        "<section class=\"hero\" id=\"top\">\n\
<div class=\"hero-main\">\n\
<h1>{hero_title}</h1>\n\
<p>{hero_desc}</p>\n\
<form class=\"search\" method=\"get\" action=\"/#checklist\">\n\
<input type=\"hidden\" name=\"lang\" value=\"{lang_code}\">\n\
<input type=\"search\" name=\"q\" value=\"{query}\" placeholder=\"{placeholder}\">\n\
<button type=\"submit\">🔍</button>\n\
</form>\n\
<div class=\"toolbar\">\n\
<button type=\"button\" onclick=\"copyLink(this, '{copied}')\">{copy_link}</button>\n\
<button type=\"button\" onclick=\"window.print()\">{print}</button>\n\
<a class=\"cta\" href=\"{consult_href}\">{consult_open}</a>\n\
</div>\n\
</div>\n\
<aside class=\"facts\">\n\
<h2>{quick_facts_title}</h2>\n\
<ul>\n{facts}</ul>\n\
<a class=\"cta\" href=\"#checklist\">{start_checklist}</a>\n\
</aside>\n\
</section>\n",
        hero_title = escape_html(t.hero_title),
        hero_desc = escape_html(t.hero_desc),
        lang_code = lang.code(),
        query = escape_html(state.query()),
        placeholder = escape_html(t.search_placeholder),
        copied = escape_html(t.copied),
        copy_link = escape_html(t.copy_link),
        print = escape_html(t.print),
        consult_href = page_href(lang, state.query(), true, "consult"),
        consult_open = escape_html(t.consult_open),
        quick_facts_title = escape_html(t.quick_facts_title),
        facts = facts,
        start_checklist = escape_html(t.start_checklist),
    )
}

/// Checklist: one disclosure card per step that survives the filter.
///
/// The first three cards in display order start open; `<details>` keeps the
/// toggle independent per card with no server round-trip.
fn render_checklist(state: &UiState, t: &UiStrings) -> String {
    let lang = state.language();

    let mut cards = String::new();
    for (display_idx, step) in state.visible_steps().iter().enumerate() {
        let open_attr = if state.panel_open(display_idx) {
            " open"
        } else {
            ""
        };
        let mut points = String::new();
        for point in step.points.get(lang).iter() {
            points.push_str(&format!("<li>{}</li>\n", escape_html(point)));
        }
        cards.push_str(&format!(
            "<details class=\"step\"{open_attr}>\n\
<summary><span class=\"step-no\">{step_label} {number}</span> {title}</summary>\n\
<ul>\n{points}</ul>\n\
</details>\n",
            open_attr = open_attr,
            step_label = escape_html(t.step_label),
            number = display_idx + 1,
            title = escape_html(step.title.get(lang)),
            points = points,
        ));
    }

    format!(
        "<section id=\"checklist\">\n<h2>{}</h2>\n<div class=\"cards\">\n{}</div>\n</section>\n",
        escape_html(t.checklist_title),
        cards
    )
}

/// Resource directory: outbound link cards.
fn render_resources(state: &UiState, t: &UiStrings) -> String {
    let lang = state.language();

    let mut cards = String::new();
    for resource in &RESOURCES {
        cards.push_str(&format!(
            "<a class=\"resource\" href=\"{link}\" target=\"_blank\" rel=\"noreferrer\">\n\
<div class=\"resource-name\">{name}</div>\n\
<div class=\"resource-desc\">{desc}</div>\n\
<div class=\"resource-visit\">{visit}</div>\n\
</a>\n",
            link = escape_html(resource.link),
            name = escape_html(resource.name),
            desc = escape_html(resource.desc.get(lang)),
            visit = escape_html(t.visit),
        ));
    }

    format!(
        "<section id=\"resources\">\n<h2>{}</h2>\n<div class=\"cards\">\n{}</div>\n</section>\n",
        escape_html(t.resources_title),
        cards
    )
}

/// FAQ: question/answer list.
fn render_faq(state: &UiState, t: &UiStrings) -> String {
    let lang = state.language();

    let mut entries = String::new();
    for entry in &FAQ {
        entries.push_str(&format!(
            "<div class=\"faq-entry\">\n<div class=\"faq-q\">{}</div>\n<p>{}</p>\n</div>\n",
            escape_html(entry.question.get(lang)),
            escape_html(entry.answer.get(lang)),
        ));
    }

    format!(
        "<section id=\"faq\">\n<h2>{}</h2>\n<div class=\"faq\">\n{}</div>\n</section>\n",
        escape_html(t.faq_title),
        entries
    )
}

fn render_footer(t: &UiStrings) -> String {
    format!(
        "<footer>\n<div>© {year} Saathi • Built as a public-good MVP. No tracking. No ads.</div>\n\
<div class=\"footer-links\">\n\
<a href=\"#top\">{privacy}</a>\n\
<a href=\"#top\">{disclaimer}</a>\n\
<a href=\"#top\">{feedback}</a>\n\
</div>\n</footer>\n",
        year = Utc::now().year(),
        privacy = escape_html(t.footer_privacy),
        disclaimer = escape_html(t.footer_disclaimer),
        feedback = escape_html(t.footer_feedback),
    )
}

/// Consultation modal: only rendered when the state says it is open.
///
/// Field values come back from the state so a failed submission re-renders
/// with everything the user typed still in place. The form's submit handler
/// disables the button until the request round-trips.
fn render_consult_modal(state: &UiState, t: &UiStrings, notice: Option<&str>) -> String {
    if !state.consult_open() {
        return String::new();
    }

    let lang = state.language();
    let form = &state.form;

    let mut gender_options = String::new();
    for gender in [Gender::Male, Gender::Female, Gender::Other] {
        let label = match gender {
            Gender::Male => t.gender_male,
            Gender::Female => t.gender_female,
            Gender::Other => t.gender_other,
        };
        let selected = if form.gender == gender.as_str() {
            " selected"
        } else {
            ""
        };
        gender_options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            gender.as_str(),
            selected,
            escape_html(label)
        ));
    }

    let notice_html = match notice {
        Some(text) => format!("<p class=\"notice\">{}</p>\n", escape_html(text)),
        None => String::new(),
    };

    format!(
        "<div class=\"modal\" id=\"consult\">\n\
<div class=\"modal-box\">\n\
<div class=\"modal-head\">\n<h3>{title}</h3>\n\
<a class=\"modal-close\" href=\"{close_href}\" aria-label=\"Close\">✕</a>\n</div>\n\
<p class=\"subtitle\">{subtitle}</p>\n\
{notice}\
<form method=\"post\" action=\"/consult\" onsubmit=\"lockSubmit()\">\n\
<input type=\"hidden\" name=\"lang\" value=\"{lang_code}\">\n\
<input type=\"hidden\" name=\"q\" value=\"{query}\">\n\
<input type=\"text\" name=\"name\" value=\"{name}\" required placeholder=\"{name_label}\">\n\
<div class=\"row\">\n\
<input type=\"number\" name=\"age\" value=\"{age}\" required min=\"1\" placeholder=\"{age_label}\">\n\
<select name=\"gender\" required>\n\
<option value=\"\">{gender_label}</option>\n\
{gender_options}\
</select>\n\
</div>\n\
<input type=\"tel\" name=\"phone\" value=\"{phone}\" required placeholder=\"{phone_label}\">\n\
<input type=\"email\" name=\"email\" value=\"{email}\" required placeholder=\"{email_label}\">\n\
<div class=\"modal-actions\">\n\
<a class=\"button\" href=\"{close_href}\">{cancel}</a>\n\
<button type=\"submit\" id=\"consult-submit\">{submit}</button>\n\
</div>\n\
</form>\n\
</div>\n</div>\n",
        title = escape_html(t.consult_title),
        close_href = page_href(lang, state.query(), false, ""),
        subtitle = escape_html(t.consult_subtitle),
        notice = notice_html,
        lang_code = lang.code(),
        query = escape_html(state.query()),
        name = escape_html(&form.name),
        name_label = escape_html(t.consult_name),
        age = escape_html(&form.age),
        age_label = escape_html(t.consult_age),
        gender_label = escape_html(t.consult_gender),
        gender_options = gender_options,
        phone = escape_html(&form.phone),
        phone_label = escape_html(t.consult_phone),
        email = escape_html(&form.email),
        email_label = escape_html(t.consult_email),
        cancel = escape_html(t.consult_cancel),
        submit = escape_html(t.consult_submit),
    )
}

/// Page stylesheet, inlined so the binary serves a single document.
const STYLE: &str = "<style>\n\
:root { color-scheme: light; }\n\
* { box-sizing: border-box; }\n\
body { margin: 0; font-family: system-ui, sans-serif; color: #1f2937; background: linear-gradient(#fffbeb, #fff, #eef2ff); }\n\
header { position: sticky; top: 0; background: rgba(255,255,255,.8); border-bottom: 1px solid #e5e7eb; backdrop-filter: blur(4px); }\n\
.bar { max-width: 64rem; margin: 0 auto; padding: .75rem 1rem; display: flex; align-items: center; justify-content: space-between; gap: 1rem; }\n\
.brand-name { font-weight: 700; font-size: 1.25rem; }\n\
.tagline { color: #6b7280; font-size: .85rem; }\n\
nav a { margin-right: 1rem; color: inherit; text-decoration: none; }\n\
nav a:hover { text-decoration: underline; }\n\
.lang { padding: .25rem .75rem; border: 1px solid #d1d5db; border-radius: .5rem; text-decoration: none; color: inherit; margin-left: .25rem; }\n\
.lang.active { background: #111827; color: #fff; }\n\
section, footer { max-width: 64rem; margin: 0 auto; padding: 2rem 1rem; }\n\
.hero { display: flex; gap: 2rem; flex-wrap: wrap; }\n\
.hero-main { flex: 3 1 24rem; }\n\
.hero h1 { font-size: 2.25rem; margin: 0 0 .5rem; }\n\
.search { display: flex; gap: .5rem; margin: 1rem 0; }\n\
.search input[type=search] { flex: 1; padding: .6rem .9rem; border: 1px solid #d1d5db; border-radius: .75rem; }\n\
.toolbar { display: flex; gap: .5rem; flex-wrap: wrap; }\n\
button, .button, .cta { padding: .5rem 1rem; border-radius: .75rem; border: 1px solid #d1d5db; background: #fff; cursor: pointer; text-decoration: none; color: inherit; font-size: .9rem; }\n\
.cta { background: #4f46e5; border-color: #4f46e5; color: #fff; display: inline-block; }\n\
.facts { flex: 2 1 16rem; background: #fff; border: 1px solid #e5e7eb; border-radius: 1rem; padding: 1.25rem; }\n\
.facts h2 { font-size: .9rem; text-transform: uppercase; color: #6b7280; margin-top: 0; }\n\
.cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1rem; }\n\
.step, .resource, .faq-entry { background: #fff; border: 1px solid #e5e7eb; border-radius: 1rem; padding: 1.25rem; }\n\
.step summary { cursor: pointer; font-weight: 600; }\n\
.step-no { display: block; font-size: .7rem; text-transform: uppercase; letter-spacing: .05em; color: #6b7280; }\n\
.resource { display: block; text-decoration: none; color: inherit; }\n\
.resource-name { font-weight: 600; }\n\
.resource-desc { color: #4b5563; font-size: .9rem; margin-top: .25rem; }\n\
.resource-visit { margin-top: .75rem; text-decoration: underline; font-size: .9rem; }\n\
.faq { display: flex; flex-direction: column; gap: 1rem; }\n\
.faq-q { font-weight: 600; }\n\
footer { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 1rem; color: #6b7280; font-size: .9rem; border-top: 1px solid #e5e7eb; }\n\
.footer-links a { margin-left: 1rem; color: inherit; }\n\
.modal { position: fixed; inset: 0; background: rgba(0,0,0,.4); display: flex; align-items: center; justify-content: center; padding: 1rem; }\n\
.modal-box { background: #fff; border-radius: 1rem; max-width: 32rem; width: 100%; padding: 1.5rem; }\n\
.modal-head { display: flex; justify-content: space-between; align-items: center; }\n\
.modal-close { text-decoration: none; color: #6b7280; }\n\
.modal form { display: flex; flex-direction: column; gap: .75rem; }\n\
.modal input, .modal select { padding: .5rem .75rem; border: 1px solid #d1d5db; border-radius: .5rem; width: 100%; }\n\
.row { display: grid; grid-template-columns: 1fr 1fr; gap: .75rem; }\n\
.modal-actions { display: flex; justify-content: flex-end; gap: .75rem; }\n\
.subtitle { color: #4b5563; font-size: .9rem; }\n\
.notice { background: #eef2ff; border-radius: .5rem; padding: .5rem .75rem; }\n\
.banner { max-width: 64rem; margin: 1rem auto 0; }\n\
@media print { header, .toolbar, .search, .modal, footer { display: none; } .step { break-inside: avoid; } }\n\
</style>\n";

/// Client-side glue: clipboard copy (failure swallowed) and the
/// double-submit guard on the consultation form.
const SCRIPT: &str = "<script>\n\
function copyLink(btn, copiedLabel) {\n\
  if (!navigator.clipboard) { return; }\n\
  navigator.clipboard.writeText(window.location.href)\n\
    .then(function () { btn.textContent = copiedLabel; })\n\
    .catch(function () {});\n\
}\n\
function lockSubmit() {\n\
  var btn = document.getElementById('consult-submit');\n\
  if (btn) { btn.disabled = true; }\n\
}\n\
</script>\n";
