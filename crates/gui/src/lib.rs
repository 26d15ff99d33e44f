pub mod common;
pub mod components;
pub mod dependencies;
pub mod modal;
pub mod page;
pub mod theme;
