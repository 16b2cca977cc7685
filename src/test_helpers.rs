//! Shared test utilities for the microsite test suite.
//!
//! Provides a fully-valid in-memory document builder plus fixture path
//! helpers. Unit tests that need templates or assets point at the real
//! files under `fixtures/`; tests that only exercise content logic build
//! a [`sample_document`] and mutate the one field under test.

use std::path::{Path, PathBuf};

use crate::content::{
    About, CallToAction, Contact, Document, Footer, Hero, Labels, NavLink, Process,
    SectionTitles, Service, Site, Step, Ui,
};

/// Absolute path to a directory under `fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// A document that passes every validation check.
///
/// Tests blank out or clear exactly the field they are about, so a
/// validation failure always points at the intended path.
pub fn sample_document() -> Document {
    Document {
        site: Site {
            name: "Acme Studio".to_string(),
            title: "Acme Studio — Strategy for small teams".to_string(),
            tagline: "Practical strategy, delivered".to_string(),
            description: "Acme Studio helps small teams ship their strategy.".to_string(),
        },
        ui: Ui {
            navigation: vec![
                NavLink {
                    label: "Home".to_string(),
                    href: "index.html".to_string(),
                },
                NavLink {
                    label: "About".to_string(),
                    href: "about.html".to_string(),
                },
                NavLink {
                    label: "Contact".to_string(),
                    href: "contact.html".to_string(),
                },
            ],
            sections: SectionTitles {
                about_title: "About".to_string(),
                services_title: "Services".to_string(),
                process_title: "Process".to_string(),
                contact_title: "Contact".to_string(),
            },
            labels: Labels {
                email: "Email".to_string(),
                linkedin: "LinkedIn".to_string(),
            },
        },
        hero: Hero {
            headline: "Strategy that ships".to_string(),
            subheadline: "Hands-on help from intake to delivery.".to_string(),
            primary_cta: CallToAction {
                label: "Get in touch".to_string(),
                href: "contact.html".to_string(),
            },
            secondary_cta: CallToAction {
                label: "See services".to_string(),
                href: "services.html".to_string(),
            },
        },
        about: About {
            headline: "Two decades of making things ship".to_string(),
            bio: "First paragraph of the bio.\n\nSecond paragraph of the bio.".to_string(),
            bio_paragraphs: Vec::new(),
        },
        services: vec![
            Service {
                title: "Advisory".to_string(),
                description: "Ongoing counsel for leadership teams.".to_string(),
            },
            Service {
                title: "Workshops".to_string(),
                description: "Focused sessions that unblock a decision.".to_string(),
            },
        ],
        process: Process {
            headline: "A short, predictable engagement".to_string(),
            steps: vec![
                Step {
                    title: "Intake".to_string(),
                    description: "Understand the team and the goal.".to_string(),
                },
                Step {
                    title: "Delivery".to_string(),
                    description: "Ship the plan with the team.".to_string(),
                },
            ],
        },
        contact: Contact {
            headline: "Let's talk".to_string(),
            intro: "Tell us what you're trying to ship.".to_string(),
            email: "hello@acme.example".to_string(),
            linkedin: "https://www.linkedin.com/company/acme-example".to_string(),
            linkedin_label: "Acme Studio on LinkedIn".to_string(),
            call_to_action: "Expect a reply within two business days.".to_string(),
        },
        footer: Footer {
            copyright: "© 2026 Acme Studio".to_string(),
        },
    }
}

/// Serialize a (possibly mutated) sample document to a YAML file.
pub fn write_sample_content(path: &Path, mutate: impl FnOnce(&mut Document)) {
    let mut doc = sample_document();
    mutate(&mut doc);
    let yaml = serde_yaml::to_string(&doc).unwrap();
    std::fs::write(path, yaml).unwrap();
}
