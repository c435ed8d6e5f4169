//! Page state for the savings plans dashboard.
//!
//! Pure data and transitions only; nothing here touches the DOM or the network.

pub mod calculator;
pub mod chart_data;
pub mod color_source;
pub mod savings_page;

pub use chart_data::ChartData;
pub use color_source::{ColorSource, RandomColorSource};
pub use savings_page::{SavingsPageAction, SavingsPageState};
