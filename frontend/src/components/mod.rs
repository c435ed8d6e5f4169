pub mod dashboard_layout;
pub mod donut_chart;
pub mod join_confirmation_modal;
pub mod plan_card;
pub mod savings_calculator;

pub use dashboard_layout::DashboardLayout;
pub use donut_chart::DonutChart;
pub use join_confirmation_modal::JoinConfirmationModal;
pub use plan_card::PlanCard;
pub use savings_calculator::SavingsCalculator;
