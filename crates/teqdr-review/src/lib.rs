//! ECG interpretation review screen for TEQDR
//!
//! A Dioxus desktop application: a list of ECG records, a reading pane with
//! the selected record's draft interpretation, a slide-over chat panel and a
//! modal for uploading a new ECG with patient context.

pub mod components;
pub mod config;
pub mod logging;
