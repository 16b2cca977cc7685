//! Required-field validation.
//!
//! A flat sequence of independent checks, one per required path, run before
//! anything is written. The first failure aborts the build with the dotted
//! path of the offending field, so a fresh fork of the site fails loudly
//! with something actionable rather than rendering blank sections.
//!
//! Whitespace-only strings count as empty. List items are checked too:
//! an empty `services` list and a service with a blank title both fail,
//! the latter with an indexed path like `services[1].title`.

use crate::content::{ContentError, Document};

fn require_str(value: &str, path: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::MissingField {
            path: path.to_string(),
        });
    }
    Ok(())
}

fn require_list<T>(list: &[T], path: &str) -> Result<(), ContentError> {
    if list.is_empty() {
        return Err(ContentError::EmptyList {
            path: path.to_string(),
        });
    }
    Ok(())
}

/// Check every required path. Pure; first failure wins.
pub fn validate(doc: &Document) -> Result<(), ContentError> {
    require_str(&doc.site.name, "site.name")?;
    require_str(&doc.site.title, "site.title")?;
    require_str(&doc.site.tagline, "site.tagline")?;
    require_str(&doc.site.description, "site.description")?;

    require_list(&doc.ui.navigation, "ui.navigation")?;
    for (i, link) in doc.ui.navigation.iter().enumerate() {
        require_str(&link.label, &format!("ui.navigation[{i}].label"))?;
        require_str(&link.href, &format!("ui.navigation[{i}].href"))?;
    }
    require_str(&doc.ui.sections.about_title, "ui.sections.about_title")?;
    require_str(&doc.ui.sections.services_title, "ui.sections.services_title")?;
    require_str(&doc.ui.sections.process_title, "ui.sections.process_title")?;
    require_str(&doc.ui.sections.contact_title, "ui.sections.contact_title")?;
    require_str(&doc.ui.labels.email, "ui.labels.email")?;
    require_str(&doc.ui.labels.linkedin, "ui.labels.linkedin")?;

    require_str(&doc.hero.headline, "hero.headline")?;
    require_str(&doc.hero.subheadline, "hero.subheadline")?;
    require_str(&doc.hero.primary_cta.label, "hero.primary_cta.label")?;
    require_str(&doc.hero.primary_cta.href, "hero.primary_cta.href")?;
    require_str(&doc.hero.secondary_cta.label, "hero.secondary_cta.label")?;
    require_str(&doc.hero.secondary_cta.href, "hero.secondary_cta.href")?;

    require_str(&doc.about.headline, "about.headline")?;
    require_str(&doc.about.bio, "about.bio")?;

    require_list(&doc.services, "services")?;
    for (i, service) in doc.services.iter().enumerate() {
        require_str(&service.title, &format!("services[{i}].title"))?;
        require_str(&service.description, &format!("services[{i}].description"))?;
    }

    require_str(&doc.process.headline, "process.headline")?;
    require_list(&doc.process.steps, "process.steps")?;
    for (i, step) in doc.process.steps.iter().enumerate() {
        require_str(&step.title, &format!("process.steps[{i}].title"))?;
        require_str(&step.description, &format!("process.steps[{i}].description"))?;
    }

    require_str(&doc.contact.headline, "contact.headline")?;
    require_str(&doc.contact.intro, "contact.intro")?;
    require_str(&doc.contact.email, "contact.email")?;
    require_str(&doc.contact.linkedin, "contact.linkedin")?;
    require_str(&doc.contact.linkedin_label, "contact.linkedin_label")?;
    require_str(&doc.contact.call_to_action, "contact.call_to_action")?;

    require_str(&doc.footer.copyright, "footer.copyright")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_document;

    fn expect_failure(doc: &Document, path: &str) {
        let err = validate(doc).unwrap_err();
        assert!(
            err.to_string().contains(path),
            "expected error naming '{path}', got: {err}"
        );
    }

    #[test]
    fn sample_document_passes() {
        validate(&sample_document()).unwrap();
    }

    #[test]
    fn empty_site_name_names_the_path() {
        let mut doc = sample_document();
        doc.site.name = String::new();
        expect_failure(&doc, "site.name");
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut doc = sample_document();
        doc.site.tagline = "   \n\t ".to_string();
        expect_failure(&doc, "site.tagline");
    }

    #[test]
    fn empty_navigation_list() {
        let mut doc = sample_document();
        doc.ui.navigation.clear();
        expect_failure(&doc, "ui.navigation");
    }

    #[test]
    fn nav_link_without_href_is_indexed() {
        let mut doc = sample_document();
        doc.ui.navigation[1].href = String::new();
        expect_failure(&doc, "ui.navigation[1].href");
    }

    #[test]
    fn empty_services_list() {
        let mut doc = sample_document();
        doc.services.clear();
        let err = validate(&doc).unwrap_err();
        assert!(matches!(
            &err,
            crate::content::ContentError::EmptyList { path } if path.as_str() == "services"
        ));
    }

    #[test]
    fn service_with_blank_title_is_indexed() {
        let mut doc = sample_document();
        doc.services[1].title = String::new();
        expect_failure(&doc, "services[1].title");
    }

    #[test]
    fn empty_process_steps_list() {
        let mut doc = sample_document();
        doc.process.steps.clear();
        expect_failure(&doc, "process.steps");
    }

    #[test]
    fn missing_cta_href() {
        let mut doc = sample_document();
        doc.hero.secondary_cta.href = String::new();
        expect_failure(&doc, "hero.secondary_cta.href");
    }

    #[test]
    fn missing_footer_copyright() {
        let mut doc = sample_document();
        doc.footer.copyright = String::new();
        expect_failure(&doc, "footer.copyright");
    }

    #[test]
    fn first_failure_wins() {
        let mut doc = sample_document();
        doc.site.name = String::new();
        doc.footer.copyright = String::new();
        // site.name is checked first, so that is the path reported
        expect_failure(&doc, "site.name");
    }

    #[test]
    fn default_document_fails_on_first_check() {
        expect_failure(&Document::default(), "site.name");
    }
}
