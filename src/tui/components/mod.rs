//! UI components for the review dashboard.
//!
//! Each component renders plain strings (with ANSI styling) from the data it
//! is given. Only the tab selector carries state, and that state lives in
//! [`crate::tui::state`].

mod button;
mod card;
mod charts;
mod comparison_table;
mod tabs;
mod text;
mod text_input;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use button::ButtonComponent;
pub use card::{CardComponent, CardViewContext};
pub use charts::{RATING_AXIS_MAX, rating_chart, sentiment_chart, sentiment_colour};
pub use comparison_table::comparison_table;
pub use tabs::{TabPane, TabsComponent};
pub use text_input::{TextInputComponent, TextInputViewContext};

pub(crate) use text::{fit_to_width, spread};
