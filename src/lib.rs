//! pubcheck - outdated dependency report for Dart/Flutter projects
//!
//! This library reads a `pubspec.lock`, asks pub.dev for the latest
//! published version of every package in the requested dependency
//! category, and writes the outdated ones to a plain-text report.

pub mod cli;
pub mod domain;
pub mod error;
pub mod lockfile;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod prompt;
pub mod registry;
pub mod version;
