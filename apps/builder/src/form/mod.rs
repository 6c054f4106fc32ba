// Form Controller: turns discrete user edits into new document snapshots
// and tracks which form panel is expanded.

pub mod accordion;
pub mod fields;
pub mod ids;
pub mod ops;
pub mod view;

use thiserror::Error;

pub use accordion::{Accordion, Panel};
pub use fields::Section;
pub use ids::{IdSource, UuidIds};
pub use ops::{apply, Edit};
pub use view::editor_form;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Unknown section '{0}'")]
    UnknownSection(String),

    #[error("Unknown panel '{0}'")]
    UnknownPanel(String),

    #[error("Unknown field '{field}' for {section}")]
    UnknownField {
        section: &'static str,
        field: String,
    },
}
