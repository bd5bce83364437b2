use std::{path::Path, str::FromStr};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{
    content::{Portfolio, is_web_link},
    nav::DEFAULT_SCROLL_THRESHOLD,
    notify::DEFAULT_NOTIFICATION_MS,
    theme::ThemeMode,
};

// site configuration
//
// behavioral knobs for the web app.  every key is optional so that an empty
// [config] table gives the stock behavior
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub default_mode: ThemeMode,
    pub scroll_threshold: f64,
    pub notification_ms: u32,
    pub log_level: String,
    // when unset, contact submissions only ever reach the local log
    pub contact_endpoint: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            default_mode: ThemeMode::Dark,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            log_level: "info".to_owned(),
            contact_endpoint: None,
        }
    }
}

impl SiteConfig {
    pub fn level(&self) -> Result<Level> {
        Level::from_str(&self.log_level)
            .map_err(|_| anyhow::Error::msg(format!("invalid log level {:?}", self.log_level)))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            bail!("scroll_threshold must be a non-negative number");
        }

        if self.notification_ms == 0 {
            bail!("notification_ms must be greater than zero");
        }

        self.level()?;

        if let Some(endpoint) = &self.contact_endpoint {
            if !is_web_link(endpoint) {
                bail!("contact_endpoint {endpoint:?} is not an http(s) url");
            }
        }

        Ok(())
    }
}

// the site file: a [config] table next to a [portfolio] table
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Site {
    #[serde(default)]
    pub config: SiteConfig,
    pub portfolio: Portfolio,
}

impl Site {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml_str(doc: &str) -> Result<Self> {
        let site: Site = toml::from_str(doc).context("failed to parse site file")?;

        site.config.validate().context("invalid [config] table")?;
        site.portfolio
            .validate()
            .context("invalid [portfolio] table")?;

        debug!("successfully parsed site file");
        Ok(site)
    }
}

#[instrument(level=Level::DEBUG)]
pub fn read_site(filename: &Path) -> Result<Site> {
    debug!("reading site file");

    let doc = std::fs::read_to_string(filename)
        .with_context(|| format!("failed to read {}", filename.display()))?;

    Site::from_toml_str(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
[portfolio.profile]
name = "Grace Hopper"
greeting = "Welcome"
role = "Engineer"
email = "grace@example.com"
phone = "+1 555 0100"
linkedin = "https://www.linkedin.com/in/grace"
github = "https://github.com/grace"
resume = "/resume.pdf"
resume_name = "Grace_Resume.pdf"

[portfolio.about]
heading = "About Me"
summary_title = "Summary"
paragraphs = ["One."]

[[portfolio.about.highlights]]
icon = "cloud"
title = "Cloud"
description = "Lots of it"

[portfolio.skills]
heading = "Skills"

[[portfolio.skills.categories]]
name = "Languages"
color = "#667eea"
skills = ["Rust", "COBOL"]

[portfolio.experience]
heading = "Experience"
roles = []

[portfolio.education]
heading = "Education"
degrees = []

[portfolio.projects]
heading = "Projects"
items = []

[portfolio.contact]
heading = "Get In Touch"
"##;

    fn with_config(config: &str) -> String {
        format!("[config]\n{config}\n{MINIMAL}")
    }

    #[test]
    fn defaults_without_config_table() {
        let site = Site::from_toml_str(MINIMAL).unwrap();

        assert_eq!(site.config, SiteConfig::default());
        assert_eq!(site.config.default_mode, ThemeMode::Dark);
        assert_eq!(site.config.scroll_threshold, 100.0);
        assert_eq!(site.config.notification_ms, 6000);
        assert!(site.config.contact_endpoint.is_none());
        assert_eq!(site.config.level().unwrap(), Level::INFO);

        assert_eq!(site.portfolio.profile.brand(), "GH");
        assert_eq!(site.portfolio.about.copy.heading, "About Me");
        assert_eq!(site.portfolio.about.copy.subtitle, "");
        assert_eq!(site.portfolio.skills.categories[0].skills.len(), 2);
    }

    #[test]
    fn config_overrides() {
        let doc = with_config(
            r#"
default_mode = "light"
scroll_threshold = 64.0
notification_ms = 3000
log_level = "debug"
contact_endpoint = "https://forms.example.com/submit"
"#,
        );
        let site = Site::from_toml_str(&doc).unwrap();

        assert_eq!(site.config.default_mode, ThemeMode::Light);
        assert_eq!(site.config.scroll_threshold, 64.0);
        assert_eq!(site.config.notification_ms, 3000);
        assert_eq!(site.config.level().unwrap(), Level::DEBUG);
        assert_eq!(
            site.config.contact_endpoint.as_deref(),
            Some("https://forms.example.com/submit")
        );
    }

    #[test]
    fn rejects_bad_config() {
        for bad in [
            "scroll_threshold = -1.0",
            "notification_ms = 0",
            r#"log_level = "chatty""#,
            r#"contact_endpoint = "ftp://example.com""#,
            r#"default_mode = "sepia""#,
        ] {
            assert!(Site::from_toml_str(&with_config(bad)).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn rejects_bad_portfolio() {
        let doc = MINIMAL.replace("#667eea", "blue");
        let err = Site::from_toml_str(&doc).unwrap_err();
        assert!(format!("{err:#}").contains("invalid color"));

        let doc = MINIMAL.replace(r#"skills = ["Rust", "COBOL"]"#, "skills = []");
        assert!(Site::from_toml_str(&doc).is_err());

        let doc = MINIMAL.replace(r#"name = "Grace Hopper""#, r#"name = " ""#);
        assert!(Site::from_toml_str(&doc).is_err());
    }

    #[test]
    fn shipped_site_file_loads() {
        let site = Site::from_toml_str(include_str!("../../webapp/content/site.toml")).unwrap();

        assert_eq!(site.config.default_mode, ThemeMode::Dark);
        assert_eq!(site.config.scroll_threshold, 100.0);
        assert_eq!(site.config.notification_ms, 6000);
        assert!(site.config.contact_endpoint.is_none());

        let portfolio = &site.portfolio;
        assert_eq!(portfolio.profile.brand(), "PS");
        assert_eq!(portfolio.about.highlights.len(), 6);
        assert_eq!(portfolio.skills.categories.len(), 8);
        assert_eq!(portfolio.experience.roles.len(), 3);
        assert_eq!(portfolio.education.degrees.len(), 2);
        assert_eq!(portfolio.projects.items.len(), 4);
    }

    #[test]
    fn read_site_reports_missing_file() {
        let err = read_site(Path::new("/nonexistent/site.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
