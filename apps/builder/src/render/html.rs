//! HTML output for the browser: résumé fragments and the three pages
//! (template selection, editor, print). Templates are compiled into the
//! binary and rendered with HTML auto-escaping.

use minijinja::{context, Environment, Error};
use serde::Serialize;

use crate::form::{editor_form, Accordion};
use crate::models::{default_document, Document};
use crate::render::Template;

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("classic.html", include_str!("../../templates/classic.html")),
    ("modern.html", include_str!("../../templates/modern.html")),
    ("select.html", include_str!("../../templates/select.html")),
    ("editor.html", include_str!("../../templates/editor.html")),
    ("print.html", include_str!("../../templates/print.html")),
];

fn fragment(template: Template) -> &'static str {
    match template {
        Template::Classic => "classic.html",
        Template::Modern => "modern.html",
    }
}

#[derive(Serialize)]
struct TemplateView {
    key: &'static str,
    name: &'static str,
    blurb: &'static str,
}

impl From<Template> for TemplateView {
    fn from(template: Template) -> Self {
        TemplateView {
            key: template.key(),
            name: template.name(),
            blurb: template.blurb(),
        }
    }
}

#[derive(Clone)]
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    /// Compiles every page and fragment template. Fails only on a template
    /// syntax error.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// The résumé alone, as swapped into the editor's live preview.
    pub fn resume(&self, template: Template, doc: &Document) -> Result<String, Error> {
        self.env
            .get_template(fragment(template))?
            .render(context! { resume => template.layout(doc) })
    }

    /// Template gallery; each thumbnail is the built-in sample résumé.
    pub fn selection_page(&self) -> Result<String, Error> {
        let sample = default_document();
        let cards: Vec<_> = Template::ALL
            .into_iter()
            .map(|template| {
                context! {
                    key => template.key(),
                    name => template.name(),
                    blurb => template.blurb(),
                    fragment => fragment(template),
                    resume => template.layout(&sample),
                }
            })
            .collect();
        self.env
            .get_template("select.html")?
            .render(context! { cards })
    }

    pub fn editor_page(
        &self,
        template: Template,
        doc: &Document,
        accordion: &Accordion,
        saved: bool,
        flash_ms: u64,
    ) -> Result<String, Error> {
        self.env.get_template("editor.html")?.render(context! {
            template => TemplateView::from(template),
            form => editor_form(doc, accordion),
            fragment => fragment(template),
            resume => template.layout(doc),
            saved,
            flash_ms,
        })
    }

    /// Standalone page that opens the browser print dialog once loaded.
    pub fn print_page(&self, template: Template, doc: &Document) -> Result<String, Error> {
        self.env.get_template("print.html")?.render(context! {
            fragment => fragment(template),
            resume => template.layout(doc),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields::EducationField;
    use crate::form::ops::{add_education, update_education};
    use crate::form::{Panel, Section};
    use crate::models::EntryId;
    use crate::render::Layout;

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::new().expect("templates compile")
    }

    fn with_extra_education() -> (Document, EntryId) {
        let id = EntryId::from("edu-2");
        let doc = add_education(&default_document(), id.clone());
        let doc = update_education(&doc, &id, EducationField::School, "Northfield College");
        let doc = update_education(&doc, &id, EducationField::Degree, "MSc Finance");
        (doc, id)
    }

    #[test]
    fn test_education_entry_identical_in_both_templates() {
        let (doc, id) = with_extra_education();
        let html = renderer();

        let classic = html.resume(Template::Classic, &doc).unwrap();
        let modern = html.resume(Template::Modern, &doc).unwrap();
        let classic_again = html.resume(Template::Classic, &doc).unwrap();

        for page in [&classic, &modern] {
            assert!(page.contains(&format!("data-id=\"{id}\"")));
            assert!(page.contains("Northfield College"));
            assert!(page.contains("MSc Finance"));
        }
        assert_eq!(classic, classic_again);

        let Layout::Classic(c) = Template::Classic.layout(&doc) else {
            panic!("classic layout expected");
        };
        let Layout::Modern(m) = Template::Modern.layout(&doc) else {
            panic!("modern layout expected");
        };
        assert_eq!(c.education[1].id, m.education[1].id);
        assert_eq!(c.education[1].degree, m.education[1].degree);
    }

    #[test]
    fn test_fragment_escapes_user_text() {
        let mut doc = default_document();
        doc.personal_info.full_name = "<script>alert(1)</script>".to_string();
        let page = renderer().resume(Template::Classic, &doc).unwrap();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_sections_have_no_heading() {
        let doc = default_document();
        let classic = renderer().resume(Template::Classic, &doc).unwrap();
        assert!(classic.contains("<h2>Education</h2>"));
        assert!(!classic.contains("<h2>Certifications</h2>"));
        let modern = renderer().resume(Template::Modern, &doc).unwrap();
        assert!(modern.contains("Career Summary"));
        assert!(!modern.contains("<h2>Projects</h2>"));
    }

    #[test]
    fn test_modern_sidebar_lists_each_skill() {
        let mut doc = default_document();
        doc.skills[0].items = "Java,  Python ,React".to_string();
        let page = renderer().resume(Template::Modern, &doc).unwrap();
        assert!(page.contains("<li>Java</li><li>Python</li><li>React</li>"));
    }

    #[test]
    fn test_selection_page_offers_both_templates() {
        let page = renderer().selection_page().unwrap();
        assert!(page.contains("Classic Harvard"));
        assert!(page.contains("Modern Professional"));
        assert!(page.contains("action=\"/template/classic\""));
        assert!(page.contains("action=\"/template/modern\""));
        assert!(page.contains("Aaron Towers"));
    }

    #[test]
    fn test_editor_page_shows_open_panel_and_flash() {
        let html = renderer();
        let doc = default_document();
        let accordion = Accordion::default();

        let page = html
            .editor_page(Template::Modern, &doc, &accordion, false, 2000)
            .unwrap();
        assert!(page.contains("value=\"Aaron Towers\""));
        assert!(page.contains("id=\"resume-preview\""));
        assert!(!page.contains("Saved!"));

        let page = html
            .editor_page(Template::Modern, &doc, &accordion, true, 2000)
            .unwrap();
        assert!(page.contains("Saved!"));
    }

    #[test]
    fn test_editor_card_endpoints_encode_ids() {
        let doc = add_education(&default_document(), EntryId::from("x/remove"));
        let mut accordion = Accordion::default();
        accordion.toggle(Panel::Section(Section::Education));
        let page = renderer()
            .editor_page(Template::Classic, &doc, &accordion, false, 2000)
            .unwrap();
        // Auto-escaping writes `/` as `&#x2f;` inside attributes.
        assert!(page.contains("data-endpoint=\"&#x2f;sections&#x2f;education&#x2f;x%2Fremove\""));
        assert!(page.contains("action=\"&#x2f;sections&#x2f;education&#x2f;x%2Fremove/remove\""));
        assert!(!page.contains("x&#x2f;remove"));
        assert!(page.contains("Add Education"));
    }

    #[test]
    fn test_editor_queues_field_edits_in_order() {
        let page = renderer()
            .editor_page(Template::Classic, &default_document(), &Accordion::default(), false, 2000)
            .unwrap();
        assert!(page.contains("queue = queue"));
        assert!(page.contains("form.requestSubmit(submitter)"));
    }

    #[test]
    fn test_print_link_is_not_a_nested_button() {
        let page = renderer()
            .editor_page(Template::Classic, &default_document(), &Accordion::default(), false, 2000)
            .unwrap();
        assert!(page.contains("<a class=\"button\" href=\"/print\""));
        assert!(!page.contains("<a href=\"/print\" target=\"_blank\"><button"));
    }

    #[test]
    fn test_script_links_render_as_text() {
        let mut doc = default_document();
        doc.certifications = vec![crate::models::CertificationEntry {
            id: "c".into(),
            name: "Cert".to_string(),
            link: "javascript:alert(1)".to_string(),
            ..Default::default()
        }];
        let html = renderer();
        for template in Template::ALL {
            let page = html.resume(template, &doc).unwrap();
            assert!(!page.contains("href=\"javascript"), "{}", template.key());
            assert!(page.contains("javascript:alert(1)"), "{}", template.key());
        }
    }

    #[test]
    fn test_print_page_triggers_print() {
        let page = renderer()
            .print_page(Template::Classic, &default_document())
            .unwrap();
        assert!(page.contains("window.print()"));
        assert!(page.contains("Aaron Towers"));
    }
}
