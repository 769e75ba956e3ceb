//! Ticket Triage - Support Issue Triage Wizard
//!
//! This crate implements the core of a multi-step triage wizard: a scored
//! questionnaire, a priority classifier, a step-flow state machine, and a
//! markdown template renderer producing JIRA-ready ticket bodies.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
