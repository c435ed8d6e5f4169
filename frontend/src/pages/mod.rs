pub mod savings_plans;
