use serde::{Deserialize, Serialize};

use super::text_from_selection::get_inner_text;
use super::error::Result;
use super::Error;
use crate::static_selector;

/// The balance on a meal card account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealBalanceRecord {
    #[serde(rename = "type")]
    kind: String,
    balance: String,
}

impl MealBalanceRecord {
    pub fn parse(source: &str) -> Result<Self> {
        let document = scraper::Html::parse_document(source);
        Self::from_html_element(document.root_element())
    }

    /// Reads the balance table, the second `border=0 width=100%` table on the
    /// page; the first one is the page banner.
    pub fn from_html_element(element: scraper::ElementRef<'_>) -> Result<Self> {
        static_selector!(TABLE_SELECTOR <- r#"table[border="0"][width="100%"]"#);
        static_selector!(ROW_SELECTOR <- "tr");
        static_selector!(CELL_SELECTOR <- "td");

        let table = element.select(&TABLE_SELECTOR).nth(1).ok_or_else(|| {
            Error::html_parse_error("The balance page should have a second account table.")
        })?;

        let mut record = Self::default();
        // header row first; the account format only has one balance row, and the last one wins
        for row in table.select(&ROW_SELECTOR).skip(1) {
            let cells: Vec<_> = row.select(&CELL_SELECTOR).collect();
            let [kind, balance, _] = cells.as_slice() else {
                return Err(Error::HtmlParse(format!(
                    "Balance rows should have three cells, found {}.",
                    cells.len()
                )));
            };
            record.kind = get_inner_text(*kind).trim().to_string();
            record.balance = format_balance(&get_inner_text(*balance));
        }

        Ok(record)
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    #[must_use]
    pub fn balance(&self) -> &str {
        &self.balance
    }
}

fn format_balance(text: &str) -> String {
    text.replace('$', "").trim().to_string()
}
