//! Transit-to-trail route planner server.
//!
//! A web service that answers: "From here, with this much time, which
//! trail can I reach by transit, hike, and still get home?"

pub mod catalog;
pub mod config;
pub mod domain;
pub mod planner;
pub mod web;
