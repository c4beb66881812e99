//! Feed renderer
//!
//! Renders feed items to the HTML fragments that replace a page target.

use urlencoding::encode;

use crate::domain::entities::FeedItem;

/// Shown on the list target when there is nothing to show or the load failed
pub const LIST_EMPTY_MESSAGE: &str = "Inga nyheter just nu.";

/// Shown on the detail target when no `id` was given
pub const DETAIL_CHOOSE_MESSAGE: &str = "Välj en nyhet från startsidan.";

/// Shown on the detail target when the id is unknown or the load failed
pub const DETAIL_NOT_FOUND_MESSAGE: &str = "Vi hittar inte denna nyhet just nu.";

/// Detail page path used for generated links
const DETAIL_PAGE: &str = "news.html";

/// Escape the five HTML-sensitive characters
pub fn escape_html(value: &str) -> String {
    let mut buf = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&#39;"),
            _ => buf.push(ch),
        }
    }
    buf
}

/// Empty-state paragraph
pub fn render_empty(message: &str) -> String {
    format!("<p class=\"news-empty\">{}</p>", message)
}

/// Same-site link to the detail view of an item
pub fn detail_link(item: &FeedItem) -> String {
    format!("{}?id={}", DETAIL_PAGE, encode(&item.effective_id()))
}

fn render_meta(date: &str) -> String {
    let mut buf = String::from("<div class=\"news-meta\">");
    if !date.is_empty() {
        buf.push_str(&format!("<span>{}</span>", escape_html(date)));
    }
    buf.push_str("</div>");
    buf
}

/// Render the list view, truncated to `max_items` when given
pub fn render_list(items: &[FeedItem], max_items: Option<usize>) -> String {
    let shown = match max_items {
        Some(max) => &items[..max.min(items.len())],
        None => items,
    };

    if shown.is_empty() {
        return render_empty(LIST_EMPTY_MESSAGE);
    }

    shown.iter().map(render_card).collect()
}

fn render_card(item: &FeedItem) -> String {
    let link = if item.link.is_empty() {
        detail_link(item)
    } else {
        item.link.clone()
    };

    format!(
        "<article class=\"news-item\">{}<h3 class=\"news-title\">{}</h3><p class=\"news-summary\">{}</p><a class=\"news-link\" href=\"{}\">Läs mer</a></article>",
        render_meta(&item.date),
        escape_html(&item.title),
        escape_html(item.teaser()),
        escape_html(&link)
    )
}

/// Find the item a detail page asks for
pub fn find_item<'a>(items: &'a [FeedItem], id: &str) -> Option<&'a FeedItem> {
    items.iter().find(|item| item.effective_id() == id)
}

/// Render the detail view for the `id` query parameter
pub fn render_detail(items: &[FeedItem], id: Option<&str>) -> String {
    let Some(id) = id.filter(|id| !id.is_empty()) else {
        return render_empty(DETAIL_CHOOSE_MESSAGE);
    };

    let Some(item) = find_item(items, id) else {
        return render_empty(DETAIL_NOT_FOUND_MESSAGE);
    };

    let mut buf = render_meta(&item.date);
    buf.push_str(&format!(
        "<h1 class=\"news-detail-title\">{}</h1>",
        escape_html(&item.title)
    ));
    buf.push_str(&format!(
        "<p class=\"news-detail-body\">{}</p>",
        escape_html(item.full_text()).replace('\n', "<br>")
    ));

    if !item.link.is_empty() {
        buf.push_str(&format!(
            "<p><a class=\"news-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Läs original</a></p>",
            escape_html(&item.link)
        ));
    }

    buf
}
