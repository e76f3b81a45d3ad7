//! Daily content generator.
//!
//! Picks a handful of snippets from the fixed [`CATALOG`], renders a module
//! doc-comment header naming the date and the chosen snippets, and appends
//! the snippet bodies. Which snippets appear is decided by an injectable
//! [`TemplateSelector`], so tests can pin the output byte for byte.

mod catalog;
mod selector;
mod template;

pub use catalog::{CATALOG, Template};
pub use selector::{FixedSelector, RandomSelector, TemplateSelector};
pub use template::{TemplateError, render_template, vars};

use crate::config::Config;
use crate::error::{DailyCodeError, Result};
use chrono::NaiveDateTime;
use std::fmt::Write;

/// Header placed at the top of every generated file.
pub const HEADER_TEMPLATE: &str = "\
//! {file_name}
//!
//! This module was auto-generated on {date}.
//! It includes several example functions for demonstration purposes:
//!
{descriptions}
//!
//! Feel free to modify or expand upon this code.
";

/// A rendered daily file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub content: String,
    pub templates: Vec<&'static Template>,
}

/// Builds [`Document`]s from the catalog.
#[derive(Debug)]
pub struct Generator<S> {
    config: Config,
    selector: S,
}

impl<S: TemplateSelector> Generator<S> {
    pub fn new(config: Config, selector: S) -> Self {
        Self { config, selector }
    }

    /// Render the document for `date_stamp`.
    ///
    /// The stamp is not validated; it is embedded verbatim in both the file
    /// name and the header.
    pub fn generate(&mut self, date_stamp: &str) -> Result<Document> {
        let templates = self.choose()?;
        let file_name = self.config.file_name(date_stamp);

        let descriptions = templates
            .iter()
            .map(|t| format!("//! - {}", t.description))
            .collect::<Vec<_>>()
            .join("\n");
        let header = render_template(
            HEADER_TEMPLATE,
            &vars([
                ("file_name", doc_text(&file_name).as_str()),
                ("date", doc_text(date_stamp).as_str()),
                ("descriptions", descriptions.as_str()),
            ]),
        )?;

        let bodies = templates
            .iter()
            .map(|t| t.code.trim())
            .collect::<Vec<_>>()
            .join("\n\n");
        let content = format!("{}\n{}\n", header, bodies);

        Ok(Document {
            file_name,
            content,
            templates,
        })
    }

    fn choose(&mut self) -> Result<Vec<&'static Template>> {
        let count = self.config.snippets_per_file;
        let indices = self.selector.select(CATALOG.len(), count);

        if indices.len() != count {
            return Err(DailyCodeError::InvalidSelection(format!(
                "expected {} templates, selector returned {}",
                count,
                indices.len()
            )));
        }
        let mut templates: Vec<&'static Template> = Vec::with_capacity(count);
        for index in indices {
            let template = CATALOG.get(index).ok_or_else(|| {
                DailyCodeError::InvalidSelection(format!(
                    "index {} is outside the catalog of {}",
                    index,
                    CATALOG.len()
                ))
            })?;
            if templates.iter().any(|t| t.id == template.id) {
                return Err(DailyCodeError::InvalidSelection(format!(
                    "'{}' was selected twice",
                    template.id
                )));
            }
            templates.push(template);
        }

        log::debug!(
            "selected templates: {}",
            templates.iter().map(|t| t.id).collect::<Vec<_>>().join(", ")
        );
        Ok(templates)
    }
}

/// Keep multi-line text inside the `//!` header by prefixing each continuation line.
fn doc_text(text: &str) -> String {
    text.replace("\r\n", "\n").replace(['\n', '\r'], "\n//! ")
}

/// Generate file content for `date_stamp` with default settings and a
/// randomly seeded selector.
pub fn generate_code_content(date_stamp: &str) -> Result<String> {
    let mut generator = Generator::new(Config::default(), RandomSelector::from_entropy());
    Ok(generator.generate(date_stamp)?.content)
}

/// Format `now` with a strftime pattern, reporting bad patterns as config errors.
pub fn date_stamp(now: &NaiveDateTime, format: &str) -> Result<String> {
    let mut stamp = String::new();
    write!(stamp, "{}", now.format(format))
        .map_err(|_| DailyCodeError::Config(format!("invalid date_format '{}'", format)))?;
    Ok(stamp)
}
