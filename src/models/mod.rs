//! Domain models for termfolio.
//!
//! # Core Concepts
//!
//! ## Static Entities
//!
//! - [`Project`]: A portfolio project with a completion percentage, rendered
//!   into the `projects` directory of the content store.
//! - [`Palette`]: A fixed color triple for one theme. Exactly two exist
//!   ([`ThemeName::Dark`] and [`ThemeName::Light`]); neither is mutable.
//!
//! ## Session Entities
//!
//! - [`FeedbackEntry`]: A user-submitted (project, rating) pair recorded by
//!   the `rate` command. Never mutated or deleted; lives for the process
//!   lifetime only.
//!
//! The only state that survives a restart is the persisted [`ThemeName`]
//! (see [`crate::theme::ThemeStore`]).

mod feedback;
mod project;
mod theme;

pub use feedback::*;
pub use project::*;
pub use theme::*;
