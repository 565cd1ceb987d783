use std::sync::LazyLock;

use scraper::{Html, Selector};

// Diagram labels live in <tspan> runs nested under the SVG's <g> groups;
// everything else on the page is navigation chrome we do not want.
static LABEL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("g > text > tspan").unwrap());

/// Pull every diagram label out of rendered page markup, in document order.
///
/// A page with no matching structure (failed load, unknown category) yields
/// an empty list rather than an error; the caller still writes a record.
pub fn labels(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&LABEL_SELECTOR)
        .map(|el| el.text().collect::<String>())
        .collect()
}
