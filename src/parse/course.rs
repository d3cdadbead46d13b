use serde::{Deserialize, Serialize};

use super::remove_excess_whitespace;
use super::text_from_selection::{get_inner_text, nth_cell, text_from_selection};
use super::Error;
use crate::static_selector;

/// One course calendar entry. Every field is always present; the two
/// optional sections fall back to an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    course_code: String,
    course_number: String,
    course_department: String,
    course_title: String,
    course_semesters: String,
    course_credit: String,
    course_description: String,
    course_restrictions: String,
    course_prereqs: String,
}

/// The pieces of a title line such as `CIS*1910 Programming I F,W (3-2) [0.50]`.
#[derive(Debug, PartialEq, Eq)]
struct CourseTitle {
    code: String,
    department: String,
    number: String,
    title: String,
    semesters: String,
    credit: String,
}

impl CourseTitle {
    fn from_text(text: &str) -> Result<Self, Error> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        // the trailing fields are counted from the end so titles of any length line up
        let [code_part, .., semesters, _, credit] = parts.as_slice() else {
            return Err(Error::HtmlParse(format!(
                "Course title `{}` should have a code, semesters, hours and credit.",
                text.trim()
            )));
        };
        let (department, number) = code_part.split_once('*').ok_or_else(|| {
            Error::HtmlParse(format!(
                "Course code `{code_part}` should look like DEPARTMENT*NUMBER."
            ))
        })?;
        let number = number.split('*').next().unwrap_or_default();
        let title = parts[1..parts.len() - 3].join(" ");

        Ok(Self {
            code: code_part.replace('*', ""),
            department: department.to_string(),
            number: number.to_string(),
            title,
            semesters: (*semesters).to_string(),
            credit: credit.replace(['[', ']'], ""),
        })
    }
}

impl CourseRecord {
    /// Parses a full course calendar page.
    pub fn parse(source: &str) -> Result<Self, Error> {
        let document = scraper::Html::parse_document(source);
        Self::from_html_element(document.root_element())
    }

    pub fn from_html_element(element: scraper::ElementRef<'_>) -> Result<Self, Error> {
        static_selector!(TITLE_SELECTOR <- ".title");
        static_selector!(DESCRIPTION_SELECTOR <- ".description");
        static_selector!(RESTRICTIONS_SELECTOR <- ".restrictions");
        static_selector!(PREREQS_SELECTOR <- ".prereqs");

        let raw_title = text_from_selection(&TITLE_SELECTOR, element, "course", "title")?;
        let title = CourseTitle::from_text(&raw_title)?;

        let raw_description =
            text_from_selection(&DESCRIPTION_SELECTOR, element, "course", "description")?;
        let course_description =
            remove_excess_whitespace(&raw_description.replace('\n', "")).into_owned();

        let course_restrictions = optional_section(&RESTRICTIONS_SELECTOR, element)
            .map(|text| text.replace('*', ""))
            .unwrap_or_default();
        let course_prereqs = optional_section(&PREREQS_SELECTOR, element)
            .map(|text| text.replace('*', "").trim().to_string())
            .unwrap_or_default();

        Ok(Self {
            course_code: title.code,
            course_number: title.number,
            course_department: title.department,
            course_title: title.title,
            course_semesters: title.semesters,
            course_credit: title.credit,
            course_description,
            course_restrictions,
            course_prereqs,
        })
    }

    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.course_code
    }
    #[inline]
    #[must_use]
    pub fn number(&self) -> &str {
        &self.course_number
    }
    #[inline]
    #[must_use]
    pub fn department(&self) -> &str {
        &self.course_department
    }
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.course_title
    }
    #[inline]
    #[must_use]
    pub fn semesters(&self) -> &str {
        &self.course_semesters
    }
    #[inline]
    #[must_use]
    pub fn credit(&self) -> &str {
        &self.course_credit
    }
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.course_description
    }
    #[inline]
    #[must_use]
    pub fn restrictions(&self) -> &str {
        &self.course_restrictions
    }
    #[inline]
    #[must_use]
    pub fn prereqs(&self) -> &str {
        &self.course_prereqs
    }
}

/// Text of the second cell of an optional labelled row; `None` when either
/// the row or its value cell is missing.
fn optional_section(
    selector: &scraper::Selector,
    element: scraper::ElementRef<'_>,
) -> Option<String> {
    let section = element.select(selector).next()?;
    nth_cell(section, 1).map(get_inner_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn load(name: &str) -> CourseRecord {
        let html = fs::read_to_string(format!("./src/parse/html_examples/course/{name}")).unwrap();
        CourseRecord::parse(&html).expect("The example html should be valid")
    }

    #[test]
    fn test_from_html_element() {
        let course = load("cis1910.html");
        assert_eq!(course.code(), "CIS1910");
        assert_eq!(course.department(), "CIS");
        assert_eq!(course.number(), "1910");
        assert_eq!(course.title(), "Programming I");
        assert_eq!(course.semesters(), "F,W");
        assert_eq!(course.credit(), "0.50");
        assert_eq!(
            course.description(),
            "This introductory course examines the basics of computer programming using a \
             procedural language. Topics include data types, control structures and functions."
        );
        assert_eq!(course.restrictions(), "CIS1500, CIS1200");
        assert_eq!(course.prereqs(), "4U Mathematics or MATH1080");
    }

    #[test]
    fn test_optional_sections_default_to_empty() {
        let course = load("no_restrictions.html");
        assert_eq!(course.code(), "HIST1010");
        assert_eq!(course.title(), "The Making of Modern Europe");
        assert_eq!(course.semesters(), "W");
        assert_eq!(course.credit(), "0.50");
        assert_eq!(course.restrictions(), "");
        // a prereqs row without its value cell still defaults
        assert_eq!(course.prereqs(), "");
    }

    #[test]
    fn test_always_nine_keys() {
        let course = load("no_restrictions.html");
        let value = serde_json::to_value(&course).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 9);
        for key in [
            "course_code",
            "course_number",
            "course_department",
            "course_title",
            "course_semesters",
            "course_credit",
            "course_description",
            "course_restrictions",
            "course_prereqs",
        ] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }

    #[test]
    fn test_title_counted_from_end() {
        let title =
            CourseTitle::from_text("  ENGG*3390  Signal   Processing and Systems S,F (3-2)  [0.75] ")
                .unwrap();
        assert_eq!(
            title,
            CourseTitle {
                code: "ENGG3390".into(),
                department: "ENGG".into(),
                number: "3390".into(),
                title: "Signal Processing and Systems".into(),
                semesters: "S,F".into(),
                credit: "0.75".into(),
            }
        );
    }

    #[test]
    fn test_title_errors() {
        assert!(matches!(
            CourseTitle::from_text("CIS1910 Programming F (3-2) [0.50]"),
            Err(Error::HtmlParse(_))
        ));
        assert!(matches!(
            CourseTitle::from_text("CIS*1910 [0.50]"),
            Err(Error::HtmlParse(_))
        ));
    }

    #[test]
    fn test_missing_description_is_an_error() {
        let html = r#"<table><tr><th class="title">CIS*1910 Programming I F,W (3-2) [0.50]</th></tr></table>"#;
        assert!(matches!(CourseRecord::parse(html), Err(Error::HtmlParse(_))));
    }
}
