pub mod use_savings_plans;
