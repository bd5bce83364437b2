use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    Home,
    Person,
    Code,
    Work,
    School,
    Folder,
    Mail,
}

// SectionDescriptor
//
// one named anchor on the page.  the navbar, the drawer and the scroll targets
// all read from the same table, so an id that renders is an id that scrolls
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

#[rustfmt::skip]
pub static SECTIONS: [SectionDescriptor; 7] = [
    SectionDescriptor { id: "home", label: "Home", icon: Icon::Home },
    SectionDescriptor { id: "about", label: "About", icon: Icon::Person },
    SectionDescriptor { id: "skills", label: "Skills", icon: Icon::Code },
    SectionDescriptor { id: "experience", label: "Experience", icon: Icon::Work },
    SectionDescriptor { id: "education", label: "Education", icon: Icon::School },
    SectionDescriptor { id: "projects", label: "Projects", icon: Icon::Folder },
    SectionDescriptor { id: "contact", label: "Contact", icon: Icon::Mail },
];

pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const SKILLS: &str = "skills";
pub const EXPERIENCE: &str = "experience";
pub const EDUCATION: &str = "education";
pub const PROJECTS: &str = "projects";
pub const CONTACT: &str = "contact";

pub fn lookup(id: &str) -> Option<&'static SectionDescriptor> {
    SECTIONS.iter().find(|section| section.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn registry_is_closed_and_unique() {
        let ids: HashSet<&str> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());

        for id in [HOME, ABOUT, SKILLS, EXPERIENCE, EDUCATION, PROJECTS, CONTACT] {
            assert!(ids.contains(id), "{id} missing from registry");
        }
    }

    #[test]
    fn registry_order_matches_page_order() {
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            ["home", "about", "skills", "experience", "education", "projects", "contact"]
        );
    }

    #[test]
    fn lookup_finds_known_ids_only() {
        assert_eq!(lookup("projects").map(|s| s.label), Some("Projects"));
        assert_eq!(lookup("contact").map(|s| s.icon), Some(Icon::Mail));
        assert!(lookup("blog").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("Home").is_none());
    }
}
