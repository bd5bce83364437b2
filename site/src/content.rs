use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

// everything the page says about its owner
//
// none of this has behavior beyond being rendered; it lives in the site file
// so the components stay free of copy
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub skills: Skills,
    pub experience: Experience,
    pub education: Education,
    pub projects: Projects,
    pub contact: SectionCopy,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    // navbar brand; derived from the name when omitted
    #[serde(default)]
    pub initials: Option<String>,
    pub greeting: String,
    pub role: String,
    #[serde(default)]
    pub summary: Vec<String>,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub resume: String,
    pub resume_name: String,
    #[serde(default)]
    pub credit: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SectionCopy {
    pub heading: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct About {
    #[serde(flatten)]
    pub copy: SectionCopy,
    pub summary_title: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Code,
    Brain,
    Cloud,
    Storage,
    Security,
    Speed,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Highlight {
    pub icon: Glyph,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Skills {
    #[serde(flatten)]
    pub copy: SectionCopy,
    pub categories: Vec<SkillCategory>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SkillCategory {
    pub name: String,
    pub color: String,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Experience {
    #[serde(flatten)]
    pub copy: SectionCopy,
    pub roles: Vec<Role>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Role {
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Education {
    #[serde(flatten)]
    pub copy: SectionCopy,
    pub degrees: Vec<Degree>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Degree {
    pub degree: String,
    pub university: String,
    pub location: String,
    pub duration: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Projects {
    #[serde(flatten)]
    pub copy: SectionCopy,
    pub items: Vec<Project>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ChannelKind {
    Email,
    Phone,
    LinkedIn,
    GitHub,
}

// one way of reaching the owner, as shown on the contact cards
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Channel {
    pub kind: ChannelKind,
    pub title: &'static str,
    pub value: String,
    pub link: String,
}

impl Channel {
    // web links open in a new tab, mailto/tel stay in place
    pub fn is_external(&self) -> bool {
        is_web_link(&self.link)
    }
}

pub fn is_web_link(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

impl Profile {
    pub fn brand(&self) -> String {
        if let Some(initials) = self.initials.as_ref().filter(|s| !s.trim().is_empty()) {
            return initials.clone();
        }

        let words: Vec<&str> = self.name.split_whitespace().collect();
        match (words.first(), words.last()) {
            (Some(first), Some(last)) if words.len() > 1 => [first, last]
                .iter()
                .filter_map(|w| w.chars().next())
                .flat_map(char::to_uppercase)
                .collect(),
            (Some(only), _) => only.chars().take(2).flat_map(char::to_uppercase).collect(),
            _ => String::new(),
        }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    // tel: links keep digits and a leading plus only
    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }

    pub fn channels(&self) -> Vec<Channel> {
        vec![
            Channel {
                kind: ChannelKind::Email,
                title: "Email",
                value: self.email.clone(),
                link: self.mailto(),
            },
            Channel {
                kind: ChannelKind::Phone,
                title: "Phone",
                value: self.phone.clone(),
                link: self.tel(),
            },
            Channel {
                kind: ChannelKind::LinkedIn,
                title: "LinkedIn",
                value: "Connect on LinkedIn".to_owned(),
                link: self.linkedin.clone(),
            },
            Channel {
                kind: ChannelKind::GitHub,
                title: "GitHub",
                value: "View GitHub Profile".to_owned(),
                link: self.github.clone(),
            },
        ]
    }
}

pub fn is_css_hex(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

impl Portfolio {
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            bail!("profile name must not be empty");
        }

        for link in [&self.profile.linkedin, &self.profile.github] {
            if !is_web_link(link) {
                bail!("profile link {link:?} is not an http(s) url");
            }
        }

        for category in &self.skills.categories {
            if category.skills.is_empty() {
                bail!("skill category {:?} has no skills", category.name);
            }
            if !is_css_hex(&category.color) {
                bail!(
                    "skill category {:?} has invalid color {:?}",
                    category.name,
                    category.color
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            name: "Grace Brewster Hopper".to_owned(),
            initials: None,
            greeting: "Welcome".to_owned(),
            role: "Engineer".to_owned(),
            summary: vec![],
            email: "grace@example.com".to_owned(),
            phone: "+1 555-010-2030".to_owned(),
            linkedin: "https://www.linkedin.com/in/grace".to_owned(),
            github: "https://github.com/grace".to_owned(),
            resume: "/resume.pdf".to_owned(),
            resume_name: "Grace_Resume.pdf".to_owned(),
            credit: String::new(),
        }
    }

    #[test]
    fn brand_prefers_explicit_initials() {
        let mut p = profile();
        assert_eq!(p.brand(), "GH");

        p.initials = Some("GBH".to_owned());
        assert_eq!(p.brand(), "GBH");

        p.initials = Some("  ".to_owned());
        assert_eq!(p.brand(), "GH");

        p.name = "ada".to_owned();
        assert_eq!(p.brand(), "AD");
    }

    #[test]
    fn channel_links() {
        let channels = profile().channels();
        assert_eq!(channels.len(), 4);

        assert_eq!(channels[0].link, "mailto:grace@example.com");
        assert_eq!(channels[1].link, "tel:+15550102030");
        assert_eq!(channels[1].value, "+1 555-010-2030");

        assert!(!channels[0].is_external());
        assert!(!channels[1].is_external());
        assert!(channels[2].is_external());
        assert!(channels[3].is_external());
    }

    #[test]
    fn hex_colors() {
        assert!(is_css_hex("#667eea"));
        assert!(is_css_hex("#FFF"));
        assert!(!is_css_hex("667eea"));
        assert!(!is_css_hex("#66"));
        assert!(!is_css_hex("#gggggg"));
    }
}
