//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin chrome and shared widgets while reading shared
//! state from Leptos context providers.

pub mod auth_gate;
pub mod course_card;
pub mod course_rankings;
pub mod error_screen;
pub mod growth_chart;
pub mod layout;
pub mod loading_spinner;
pub mod pagination;
pub mod revenue_chart;
pub mod sidebar;
pub mod stat_card;
