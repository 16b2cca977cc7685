//! Content loading and the document model.
//!
//! The whole site is driven by one YAML file, `content/site.yaml` by
//! default. Its top-level keys are fixed:
//!
//! ```text
//! site:        # name, title, tagline, description
//! ui:          # navigation links, section titles, contact labels
//! hero:        # headline, subheadline, two calls to action
//! about:       # headline + free-text bio (split into paragraphs later)
//! services:    # list of { title, description }
//! process:     # headline + ordered steps
//! contact:     # headline, intro, email, linkedin, call to action
//! footer:      # copyright line
//! ```
//!
//! The file deserializes into [`Document`], a tree of typed structs. Every
//! leaf defaults to empty, so a missing key parses fine and then fails
//! validation with its exact dotted path instead of an opaque serde error.
//! Unknown keys are rejected to catch typos early.
//!
//! Run `microsite gen-content` to print a documented starter file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{path} must be a non-empty string")]
    MissingField { path: String },
    #[error("{path} must be a non-empty list")]
    EmptyList { path: String },
}

/// The parsed content file.
///
/// Immutable after load; the transform stage works on a clone. Serialized
/// as-is to `site.json` in the output directory for debugging deployments,
/// so field order here is the order readers of the dump will see.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Document {
    pub site: Site,
    pub ui: Ui,
    pub hero: Hero,
    pub about: About,
    pub services: Vec<Service>,
    pub process: Process,
    pub contact: Contact,
    pub footer: Footer,
}

/// Site-wide identity, reused across every page's `<head>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Site {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
}

/// Chrome shared by all pages: nav links, section titles, field labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Ui {
    pub navigation: Vec<NavLink>,
    pub sections: SectionTitles,
    pub labels: Labels,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Headings for the four content sections. Doubles as the per-page
/// `<title>` for the matching page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionTitles {
    pub about_title: String,
    pub services_title: String,
    pub process_title: String,
    pub contact_title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    pub email: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

/// About section. `bio` is free text; paragraphs are separated by blank
/// lines. `bio_paragraphs` is derived by the transform stage and is empty
/// straight after load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct About {
    pub headline: String,
    pub bio: String,
    #[serde(skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub bio_paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Process {
    pub headline: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Step {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Contact {
    pub headline: String,
    pub intro: String,
    pub email: String,
    pub linkedin: String,
    pub linkedin_label: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Footer {
    pub copyright: String,
}

/// Read and parse the content file.
pub fn load(path: &Path) -> Result<Document, ContentError> {
    let raw = fs::read_to_string(path)?;
    let doc: Document = serde_yaml::from_str(&raw)?;
    Ok(doc)
}

/// Starter `site.yaml` printed by `microsite gen-content`.
///
/// Every key here is required; the validator names any that are left empty.
pub fn stock_content_yaml() -> &'static str {
    r#"# microsite content file. Every key below is required and must be
# non-empty; `microsite check` reports the first missing one.

site:
  name: Studio Name
  title: Studio Name — what you do in one line
  tagline: A short tagline shown on the home page
  description: One-sentence description used in meta tags

ui:
  navigation:
    - label: Home
      href: index.html
    - label: About
      href: about.html
    - label: Services
      href: services.html
    - label: Process
      href: process.html
    - label: Contact
      href: contact.html
  sections:
    about_title: About
    services_title: Services
    process_title: Process
    contact_title: Contact
  labels:
    email: Email
    linkedin: LinkedIn

hero:
  headline: Headline visitors see first
  subheadline: A supporting sentence under the headline
  primary_cta:
    label: Get in touch
    href: contact.html
  secondary_cta:
    label: See services
    href: services.html

about:
  headline: Who is behind this
  bio: |
    First paragraph of the bio. Separate paragraphs with a blank line.

    Second paragraph. Internal whitespace is normalized when rendered.

services:
  - title: First service
    description: What it covers and who it is for.
  - title: Second service
    description: What it covers and who it is for.

process:
  headline: How an engagement runs
  steps:
    - title: Intake
      description: What happens first.
    - title: Delivery
      description: What happens next.

contact:
  headline: Work together
  intro: A sentence inviting people to reach out.
  email: hello@example.com
  linkedin: https://www.linkedin.com/in/example
  linkedin_label: Connect on LinkedIn
  call_to_action: Send a note and expect a reply within two days.

footer:
  copyright: © 2026 Studio Name. All rights reserved.
"#
}
