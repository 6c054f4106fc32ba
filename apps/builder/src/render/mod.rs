// Résumé Renderers: pure functions from a Document to a layout model, plus
// the HTML layer that turns those models into pages.

pub mod classic;
pub mod html;
pub mod modern;
pub mod text;

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::models::Document;

pub use html::HtmlRenderer;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown template '{0}'")]
pub struct UnknownTemplate(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Classic,
    Modern,
}

impl Template {
    pub const ALL: [Template; 2] = [Template::Classic, Template::Modern];

    pub fn key(self) -> &'static str {
        match self {
            Template::Classic => "classic",
            Template::Modern => "modern",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Template::Classic => "Classic Harvard",
            Template::Modern => "Modern Professional",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Template::Classic => "Traditional, text-focused, ATS-friendly serif layout.",
            Template::Modern => "Two-column design with a sidebar for skills and photo.",
        }
    }

    /// Layout model of `doc` in this template.
    pub fn layout(self, doc: &Document) -> Layout {
        match self {
            Template::Classic => Layout::Classic(classic::render(doc)),
            Template::Modern => Layout::Modern(modern::render(doc)),
        }
    }
}

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|template| template.key() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

/// Either renderer's output, serialized as the bare model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Layout {
    Classic(classic::ClassicResume),
    Modern(modern::ModernResume),
}
