//! Page shells
//!
//! Minimal HTML documents carrying the list and detail targets.

/// Element id of the list target
pub const LIST_TARGET_ID: &str = "news-list";

/// Element id of the detail target
pub const DETAIL_TARGET_ID: &str = "news-detail";

fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"sv\">\n<head>\n<meta charset=\"utf-8\">\n<title>Nyheter</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        body
    )
}

/// Start page with the list target filled by `fragment`
pub fn list_page(fragment: &str) -> String {
    document(&format!(
        "<section id=\"{}\">{}</section>",
        LIST_TARGET_ID, fragment
    ))
}

/// Detail page with the detail target filled by `fragment`
pub fn detail_page(fragment: &str) -> String {
    document(&format!(
        "<article id=\"{}\">{}</article>",
        DETAIL_TARGET_ID, fragment
    ))
}
