//! State management for the review dashboard.
//!
//! This module provides the view state, its reducer, and the small state
//! types owned by individual widgets.

mod dashboard;
mod link_input;
mod tabs;

pub use dashboard::{DashboardAction, DashboardEffect, DashboardState, user_message};
pub use link_input::{LinkEdit, LinkInput};
pub use tabs::{ComparisonView, ComparisonViewParseError, TabKey, TabSelection};
