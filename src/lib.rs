//! Nayi Raah — bilingual (English/Hindi) bereavement-help site for India.
//!
//! Serves a single page: a searchable step-by-step checklist, a resource
//! directory, an FAQ, and a consultation-request form that forwards to a
//! spreadsheet-backed endpoint. Content is a fixed bilingual table compiled
//! into the binary; the only outbound call is the fire-and-forget form POST.

pub mod config;
pub mod consult;
pub mod content;
pub mod filter;
pub mod i18n;
pub mod render;
pub mod server;
pub mod state;
