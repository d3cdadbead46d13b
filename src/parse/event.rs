use std::{collections::BTreeMap, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::remove_excess_whitespace;
use super::text_from_selection::{get_inner_text, text_from_selection};
use super::Error;
use crate::static_selector;

/// Rows that only some event types carry; they are always present in a record.
pub const OPTIONAL_FIELDS: [&str; 3] = ["qualifies_as", "advanced_registration", "more_information"];

/// A campus event. The keys beyond `title`, `organization` and `description`
/// come from the label column of the event's detail table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRecord {
    fields: BTreeMap<String, String>,
}

impl EventRecord {
    pub fn parse(source: &str) -> Result<Self, Error> {
        let document = scraper::Html::parse_document(source);
        Self::from_html_element(document.root_element())
    }

    pub fn from_html_element(element: scraper::ElementRef<'_>) -> Result<Self, Error> {
        static_selector!(HEADING_SELECTOR <- "p.text12");
        static_selector!(STRONG_SELECTOR <- "strong");
        static_selector!(ORGANIZATION_SELECTOR <- "span.text11");
        static_selector!(DESCRIPTION_SELECTOR <- "p.text11");
        static_selector!(TABLE_SELECTOR <- r#"table[width="98%"]"#);
        static_selector!(ROW_SELECTOR <- "tr");
        static_selector!(CELL_SELECTOR <- "td");

        let mut fields = BTreeMap::new();
        // the title is the bold text of the first heading paragraph only
        let heading = element
            .select(&HEADING_SELECTOR)
            .next()
            .ok_or_else(|| Error::html_parse_error("Every event page should have a heading."))?;
        let title = heading.select(&STRONG_SELECTOR).next().map(get_inner_text).ok_or_else(|| {
            Error::html_parse_error("The event heading should have a bold title.")
        })?;
        fields.insert("title".to_string(), title.trim().to_string());
        let organization =
            text_from_selection(&ORGANIZATION_SELECTOR, element, "event", "organization")?;
        fields.insert("organization".to_string(), organization.trim().to_string());
        let description =
            text_from_selection(&DESCRIPTION_SELECTOR, element, "event", "description")?;
        fields.insert("description".to_string(), description.trim().to_string());

        let table = element
            .select(&TABLE_SELECTOR)
            .next()
            .ok_or_else(|| Error::html_parse_error("Every event page should have a details table."))?;
        for row in table.select(&ROW_SELECTOR) {
            let cells: Vec<_> = row.select(&CELL_SELECTOR).collect();
            let [label, value] = cells.as_slice() else {
                return Err(Error::HtmlParse(format!(
                    "Event detail rows should have a label and a value, found {} cells.",
                    cells.len()
                )));
            };
            fields.insert(
                format_key(&get_inner_text(*label)),
                format_text(&get_inner_text(*value)),
            );
        }

        for key in OPTIONAL_FIELDS {
            fields.entry(key.to_string()).or_default();
        }

        Ok(Self { fields })
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        self.get("title").unwrap_or_default()
    }
    #[inline]
    #[must_use]
    pub fn organization(&self) -> &str {
        self.get("organization").unwrap_or_default()
    }
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        self.get("description").unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Turns a table label such as `Advanced Registration (Required)` into
/// `advanced_registration_required`.
#[must_use]
pub fn format_key(label: &str) -> String {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    static SPACES: OnceLock<Regex> = OnceLock::new();
    let non_word =
        NON_WORD.get_or_init(|| Regex::new(r"[^0-9A-Za-z_]").expect("regex should be valid"));
    let spaces = SPACES.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));

    let label = label.replace(['(', ')'], "");
    let formatted = non_word.replace_all(&label, " ").to_lowercase();
    spaces.replace_all(formatted.trim(), "_").into_owned()
}

/// Collapses whitespace and pulls parentheses tight against their contents.
#[must_use]
pub fn format_text(text: &str) -> String {
    remove_excess_whitespace(text)
        .trim()
        .replace("( ", "(")
        .replace(" )", ")")
}
