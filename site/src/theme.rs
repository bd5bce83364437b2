use std::{fmt, str::FromStr};

use anyhow::{Error, bail};

use serde::{Deserialize, Serialize};

// display mode
//
// this is the only piece of state that every section reads, so it lives at the
// application root and everything else is derived from it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Light => "light",
            Self::Dark => "dark",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => bail!("unknown theme mode {other:?}, expected light or dark"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub mode: ThemeMode,
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub divider: &'static str,
    pub footer: &'static str,

    // navbar once it stops being transparent
    pub bar: &'static str,
    // headings, buttons and the navbar brand
    pub accent_gradient: &'static str,
    pub accent_gradient_hover: &'static str,
    // hero banner and the contact form card
    pub hero_gradient: &'static str,
    pub card_gradient: &'static str,
    pub tint: &'static str,
    pub glow: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typography {
    pub font_family: &'static str,
    pub h1: &'static str,
    pub h2: &'static str,
    pub h3: &'static str,
    pub h5: &'static str,
    pub h6: &'static str,
    pub body: &'static str,
    pub small: &'static str,
    pub heading_weight: u16,
}

// ThemeDescriptor
//
// the full set of visual tokens for one mode.  this is plain data: the web app
// turns it into css custom properties once per mode change instead of having
// each component compute its own colors
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub palette: Palette,
    pub typography: Typography,
}

const TYPOGRAPHY: Typography = Typography {
    font_family: "'Inter', 'Roboto', 'Helvetica', 'Arial', sans-serif",
    h1: "3.5rem",
    h2: "2.75rem",
    h3: "2rem",
    h5: "1.5rem",
    h6: "1.25rem",
    body: "1rem",
    small: "0.875rem",
    heading_weight: 700,
};

const DARK: Palette = Palette {
    mode: ThemeMode::Dark,
    primary: "#90caf9",
    primary_dark: "#42a5f5",
    secondary: "#f48fb1",
    background: "#121212",
    paper: "#1e1e1e",
    text_primary: "#ffffff",
    text_secondary: "rgba(255, 255, 255, 0.7)",
    divider: "rgba(255, 255, 255, 0.12)",
    footer: "#0a0a0a",
    bar: "rgba(30, 30, 30, 0.95)",
    accent_gradient: "linear-gradient(135deg, #90caf9 0%, #f48fb1 100%)",
    accent_gradient_hover: "linear-gradient(135deg, #42a5f5 0%, #bf5f82 100%)",
    hero_gradient: "linear-gradient(135deg, #1e1e1e 0%, #2d2d2d 100%)",
    card_gradient: "linear-gradient(135deg, #1e1e1e 0%, #2d2d2d 100%)",
    tint: "rgba(144, 202, 249, 0.1)",
    glow: "0 4px 12px rgba(144, 202, 249, 0.3)",
};

const LIGHT: Palette = Palette {
    mode: ThemeMode::Light,
    primary: "#667eea",
    primary_dark: "#5568d3",
    secondary: "#764ba2",
    background: "#f5f7fa",
    paper: "#ffffff",
    text_primary: "rgba(0, 0, 0, 0.87)",
    text_secondary: "rgba(0, 0, 0, 0.6)",
    divider: "rgba(0, 0, 0, 0.12)",
    footer: "#1a1a1a",
    bar: "rgba(255, 255, 255, 0.95)",
    accent_gradient: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    accent_gradient_hover: "linear-gradient(135deg, #5568d3 0%, #6a3f7d 100%)",
    hero_gradient: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    card_gradient: "linear-gradient(135deg, #ffffff 0%, #f5f7fa 100%)",
    tint: "rgba(102, 126, 234, 0.1)",
    glow: "0 4px 12px rgba(102, 126, 234, 0.3)",
};

pub fn resolve(mode: ThemeMode) -> ThemeDescriptor {
    let palette = match mode {
        ThemeMode::Light => LIGHT,
        ThemeMode::Dark => DARK,
    };

    ThemeDescriptor {
        palette,
        typography: TYPOGRAPHY,
    }
}

impl ThemeDescriptor {
    pub fn mode(&self) -> ThemeMode {
        self.palette.mode
    }

    // render the descriptor as a :root block of custom properties
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        let t = &self.typography;

        format!(
            r#":root {{
  color-scheme: {mode};
  --primary: {primary};
  --primary-dark: {primary_dark};
  --secondary: {secondary};
  --background: {background};
  --paper: {paper};
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --divider: {divider};
  --footer: {footer};
  --bar: {bar};
  --accent-gradient: {accent};
  --accent-gradient-hover: {accent_hover};
  --hero-gradient: {hero};
  --card-gradient: {card};
  --tint: {tint};
  --glow: {glow};
  --font-family: {font};
  --font-h1: {h1};
  --font-h2: {h2};
  --font-h3: {h3};
  --font-h5: {h5};
  --font-h6: {h6};
  --font-body: {body};
  --font-small: {small};
  --heading-weight: {weight};
}}"#,
            mode = p.mode,
            primary = p.primary,
            primary_dark = p.primary_dark,
            secondary = p.secondary,
            background = p.background,
            paper = p.paper,
            text_primary = p.text_primary,
            text_secondary = p.text_secondary,
            divider = p.divider,
            footer = p.footer,
            bar = p.bar,
            accent = p.accent_gradient,
            accent_hover = p.accent_gradient_hover,
            hero = p.hero_gradient,
            card = p.card_gradient,
            tint = p.tint,
            glow = p.glow,
            font = t.font_family,
            h1 = t.h1,
            h2 = t.h2,
            h3 = t.h3,
            h5 = t.h5,
            h6 = t.h6,
            body = t.body,
            small = t.small,
            weight = t.heading_weight,
        )
    }
}

// Appearance
//
// the single owned cell behind the mode toggle.  mode and descriptor are only
// ever changed together, so there is no way to observe them out of sync
#[derive(Clone, Debug, PartialEq)]
pub struct Appearance {
    mode: ThemeMode,
    theme: ThemeDescriptor,
}

impl Appearance {
    pub fn new(mode: ThemeMode) -> Self {
        Appearance {
            mode,
            theme: resolve(mode),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn theme(&self) -> &ThemeDescriptor {
        &self.theme
    }

    pub fn flip(&mut self) -> ThemeMode {
        self.mode = self.mode.flip();
        self.theme = resolve(self.mode);
        self.mode
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_deterministic() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(resolve(mode), resolve(mode));
        }
        assert_ne!(resolve(ThemeMode::Light), resolve(ThemeMode::Dark));
    }

    #[test]
    fn flip_is_an_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.flip(), mode);
            assert_eq!(mode.flip().flip(), mode);
        }
    }

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert_eq!(Appearance::default().theme().palette.mode, ThemeMode::Dark);
    }

    #[test]
    fn appearance_keeps_descriptor_in_sync() {
        let mut appearance = Appearance::new(ThemeMode::Dark);
        assert_eq!(appearance.theme().mode(), ThemeMode::Dark);

        assert_eq!(appearance.flip(), ThemeMode::Light);
        assert_eq!(appearance.mode(), ThemeMode::Light);
        assert_eq!(appearance.theme().palette.mode, ThemeMode::Light);
        assert_eq!(appearance.theme(), &resolve(ThemeMode::Light));

        appearance.flip();
        assert_eq!(appearance, Appearance::new(ThemeMode::Dark));
    }

    #[test]
    fn css_variables_follow_the_palette() {
        let css = resolve(ThemeMode::Light).css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("color-scheme: light;"));
        assert!(css.contains("--primary: #667eea;"));

        let css = resolve(ThemeMode::Dark).css_variables();
        assert!(css.contains("color-scheme: dark;"));
        assert!(css.contains("--primary: #90caf9;"));
        assert!(css.contains("--heading-weight: 700;"));
    }

    #[test]
    fn mode_parses_lowercase() {
        #[derive(Deserialize)]
        struct Doc {
            mode: ThemeMode,
        }

        let doc: Doc = toml::from_str(r#"mode = "light""#).unwrap();
        assert_eq!(doc.mode, ThemeMode::Light);
        assert!(toml::from_str::<Doc>(r#"mode = "sepia""#).is_err());
    }

    #[test]
    fn mode_round_trips_through_its_name() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.to_string().parse::<ThemeMode>().unwrap(), mode);
        }
        assert!("Dark".parse::<ThemeMode>().is_err());
    }
}
