use site::{content::{ChannelKind, Glyph}, section::Icon, theme::ThemeMode};

pub fn section_icon(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "🏠",
        Icon::Person => "👤",
        Icon::Code => "💻",
        Icon::Work => "💼",
        Icon::School => "🎓",
        Icon::Folder => "📁",
        Icon::Mail => "✉️",
    }
}

pub fn highlight_icon(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Code => "</>",
        Glyph::Brain => "🧠",
        Glyph::Cloud => "☁️",
        Glyph::Storage => "🗄️",
        Glyph::Security => "🔒",
        Glyph::Speed => "⚡",
    }
}

pub fn channel_icon(kind: ChannelKind) -> &'static str {
    match kind {
        ChannelKind::Email => "✉️",
        ChannelKind::Phone => "📞",
        ChannelKind::LinkedIn => "in",
        ChannelKind::GitHub => "⌥",
    }
}

// the toggle shows where clicking takes you
pub fn mode_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "☀️",
        ThemeMode::Light => "🌙",
    }
}
