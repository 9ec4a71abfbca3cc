//! UI-side collaborators: presentation settings, input form, folder opener

pub mod opener;
pub mod presentation;

pub use opener::{FolderOpener, NoopOpener, SystemOpener};
pub use presentation::{FormState, Texts, UiLanguage};
