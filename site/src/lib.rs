// core of the portfolio site
//
// everything in here is independent of the browser: the web app owns one value
// of each of these types and forwards dom events into them, which keeps the
// behavior testable with a plain `cargo test`
pub mod config;
pub mod contact;
pub mod content;
pub mod nav;
pub mod notify;
pub mod particle;
pub mod reveal;
pub mod section;
pub mod theme;

pub use config::{Site, SiteConfig, read_site};
pub use theme::{Appearance, ThemeDescriptor, ThemeMode};
