//! Shared test helpers.

#![allow(dead_code)]

pub mod document_helpers;
pub mod source_fixtures;
