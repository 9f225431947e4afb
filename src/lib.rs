//! termfolio: a portfolio that behaves like a terminal.
//!
//! The user types commands at a prompt and gets canned portfolio content
//! back: bio, education, projects with progress bars, skills, contact and
//! social links. A toggleable dark/light theme persists across runs, and the
//! `joke` command fetches one programming joke over HTTP and types it out
//! character by character.
//!
//! # Architecture
//!
//! Input flows one way: a raw line is tokenized, resolved against the closed
//! [`commands::Command`] vocabulary, and handled by a [`commands::Session`],
//! which reads the static [`content::ContentStore`] and writes markup lines
//! to a [`terminal::Terminal`] sink. The sink is the only rendering surface;
//! swapping the ANSI implementation for the in-memory one is what makes the
//! whole command set testable without a tty.

pub mod commands;
pub mod config;
pub mod content;
pub mod joke;
pub mod markup;
pub mod models;
pub mod terminal;
pub mod theme;
