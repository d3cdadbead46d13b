use super::Error;
use crate::static_selector;
use scraper::{ElementRef, Selector};

/// Text of the first element under `element` matching `selector`.
/// Fails when nothing matches, for blocks every page must carry.
pub fn text_from_selection(
    selector: &Selector,
    element: ElementRef<'_>,
    parent_label: &str,
    child_label: &str,
) -> Result<String, Error> {
    let child = element.select(selector).next().ok_or_else(|| {
        Error::HtmlParse(format!(
            "Every {parent_label} page should have a {child_label}."
        ))
    })?;
    Ok(get_inner_text(child))
}

/// Every text node below `element` joined without separators.
#[must_use]
pub fn get_inner_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// The `n`th (zero based) table cell, `td` or `th`, below `element`.
#[must_use]
pub fn nth_cell<'a>(element: ElementRef<'a>, n: usize) -> Option<ElementRef<'a>> {
    static_selector!(CELL_SELECTOR <- "td, th");
    element.select(&CELL_SELECTOR).nth(n)
}
