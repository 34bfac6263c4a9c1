use chrono::NaiveDate;

use crate::{
    error::ScaffoldError,
    generator::utils::{title_dashed, title_spaced},
};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const DEFAULT_LAYOUT: &str = "post";

/// Front matter of a post, as written by the scaffolder and read back by the site generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostMetadata {
    pub layout: String,
    pub title: String,
    pub slug: String,
    pub created: NaiveDate,
}

impl PostMetadata {
    pub fn new<S: AsRef<str>>(words: &[S], created: NaiveDate) -> Result<Self, ScaffoldError> {
        if words.is_empty() {
            return Err(ScaffoldError::Validation);
        }

        Ok(Self {
            layout: DEFAULT_LAYOUT.to_string(),
            title: title_spaced(words),
            slug: title_dashed(words),
            created,
        })
    }

    pub fn date_dashed(&self) -> String {
        self.created.format(DATE_FORMAT).to_string()
    }

    pub fn file_name(&self) -> String {
        format!("{}-{}.md", self.date_dashed(), self.slug)
    }

    /// The document body: front matter followed by an empty body.
    pub fn render(&self) -> String {
        let mut doc = [
            "---".to_string(),
            format!("layout: {}", self.layout),
            format!("title: {}", self.title),
            format!("created: {}", self.date_dashed()),
            "---".to_string(),
        ]
        .join("\n");
        doc.push_str("\n\n\n");
        doc
    }
}

#[cfg(test)]
impl PostMetadata {
    /// Reads the front matter the same way the site generator does.
    /// The slug is not stored in the document, so it is derived from the title.
    pub fn parse(content: &str) -> Result<Self, ScaffoldError> {
        use std::sync::OnceLock;

        use regex::Regex;

        static FRONT_MATTER: OnceLock<Regex> = OnceLock::new();
        let pattern = FRONT_MATTER.get_or_init(|| {
            regex::RegexBuilder::new(
                r"^---\r?\nlayout: (?P<layout>.+)\r?\ntitle: (?P<title>.+)\r?\ncreated: (?P<created>\d{4}-\d{2}-\d{2})\r?\n---\r?\n",
            )
            .build()
            .expect("front matter pattern compiles")
        });

        let caps = pattern
            .captures(content)
            .ok_or_else(|| ScaffoldError::Parse("no front matter block".to_string()))?;

        let title = caps["title"].trim_end().to_string();
        let created = NaiveDate::parse_from_str(&caps["created"], DATE_FORMAT)
            .map_err(|e| ScaffoldError::Parse(format!("created: {e}")))?;

        Ok(Self {
            layout: caps["layout"].trim_end().to_string(),
            slug: title.replace(' ', "-"),
            title,
            created,
        })
    }
}
