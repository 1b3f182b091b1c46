//! Metro network query server.
//!
//! Loads a line timetable into an in-memory graph and answers: "which
//! stations are near here, how do I get there, and what will it cost?"

pub mod cache;
pub mod domain;
pub mod fare;
pub mod network;
pub mod planner;
pub mod web;
