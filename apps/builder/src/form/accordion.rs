//! Exclusive, collapsible form panels: at most one is expanded at a time.

use std::str::FromStr;

use crate::form::fields::Section;
use crate::form::EditError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Personal,
    Section(Section),
}

impl Panel {
    /// Panels in the order the editor shows them.
    pub const ORDER: [Panel; 7] = [
        Panel::Personal,
        Panel::Section(Section::Education),
        Panel::Section(Section::Projects),
        Panel::Section(Section::Certifications),
        Panel::Section(Section::Experience),
        Panel::Section(Section::Activities),
        Panel::Section(Section::Skills),
    ];

    pub fn key(self) -> &'static str {
        match self {
            Panel::Personal => "personal",
            Panel::Section(section) => section.key(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::Personal => "Personal Information",
            Panel::Section(section) => section.title(),
        }
    }
}

impl FromStr for Panel {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "personal" {
            return Ok(Panel::Personal);
        }
        s.parse::<Section>()
            .map(Panel::Section)
            .map_err(|_| EditError::UnknownPanel(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    active: Option<Panel>,
}

impl Default for Accordion {
    fn default() -> Self {
        Self {
            active: Some(Panel::Personal),
        }
    }
}

impl Accordion {
    pub fn active(&self) -> Option<Panel> {
        self.active
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.active == Some(panel)
    }

    /// Opens `panel` and closes whatever was open; toggling the open panel
    /// collapses everything.
    pub fn toggle(&mut self, panel: Panel) {
        self.active = if self.is_open(panel) { None } else { Some(panel) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_personal_open() {
        let accordion = Accordion::default();
        assert!(accordion.is_open(Panel::Personal));
    }

    #[test]
    fn test_toggle_switches_exclusively() {
        let mut accordion = Accordion::default();
        accordion.toggle(Panel::Section(Section::Skills));
        assert_eq!(accordion.active(), Some(Panel::Section(Section::Skills)));
        assert!(!accordion.is_open(Panel::Personal));
    }

    #[test]
    fn test_toggle_active_collapses_to_none() {
        let mut accordion = Accordion::default();
        accordion.toggle(Panel::Personal);
        assert_eq!(accordion.active(), None);
        accordion.toggle(Panel::Personal);
        assert_eq!(accordion.active(), Some(Panel::Personal));
    }

    #[test]
    fn test_panel_keys_parse() {
        for panel in Panel::ORDER {
            assert_eq!(panel.key().parse::<Panel>().unwrap(), panel);
        }
        assert_eq!(
            "nope".parse::<Panel>(),
            Err(EditError::UnknownPanel("nope".to_string()))
        );
    }
}
