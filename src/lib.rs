//! GitHub Showcase - Cached GitHub profile panel
//!
//! This crate gathers one account's public GitHub data (profile, recent
//! repositories with their languages, public events and followers) into a
//! snapshot, caches it for an hour, and renders it as HTML.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
