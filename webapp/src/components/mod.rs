pub mod heading;
pub mod navigation;
pub mod notification;
pub mod reveal;
