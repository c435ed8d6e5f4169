//! Read-only catalog of savings plans served to the dashboard.
//!
//! The catalog is loaded once at startup, either from a YAML file or from the
//! built-in defaults, and is never modified afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use shared::SavingsPlan;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("duplicate plan id {0}")]
    DuplicateId(i64),
    #[error("plan {id} must have a positive goal, got {goal}")]
    NonPositiveGoal { id: i64, goal: f64 },
    #[error("plan {id} has negative current savings {current}")]
    NegativeCurrent { id: i64, current: f64 },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    plans: Vec<SavingsPlan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanCatalog {
    plans: Vec<SavingsPlan>,
}

impl PlanCatalog {
    pub fn new(plans: Vec<SavingsPlan>) -> Result<Self, CatalogError> {
        validate(&plans)?;
        Ok(Self { plans })
    }

    /// Parse a catalog of the form `plans: [ {id, title, ...}, ... ]`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::new(file.plans)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&contents)?;
        info!("Loaded {} savings plans from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Catalog bundled with the server, used when no file is configured.
    pub fn builtin() -> Self {
        let plan = |id, title: &str, description: &str, goal, current, duration: &str| SavingsPlan {
            id,
            title: title.to_string(),
            description: description.to_string(),
            goal,
            current,
            duration: duration.to_string(),
        };

        Self {
            plans: vec![
                plan(
                    1,
                    "Emergency Fund",
                    "Build a cushion that covers three months of essential expenses.",
                    90000.0,
                    22500.0,
                    "6 months",
                ),
                plan(
                    2,
                    "School Fees",
                    "Put money aside every month so next term's fees are ready on time.",
                    45000.0,
                    30000.0,
                    "4 months",
                ),
                plan(
                    3,
                    "Holiday Trip",
                    "Save for a family holiday at the coast.",
                    60000.0,
                    9000.0,
                    "12 months",
                ),
                plan(
                    4,
                    "New Laptop",
                    "A steady plan for a work laptop without taking a loan.",
                    80000.0,
                    52000.0,
                    "8 months",
                ),
            ],
        }
    }

    pub fn plans(&self) -> &[SavingsPlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

fn validate(plans: &[SavingsPlan]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for plan in plans {
        if !seen.insert(plan.id) {
            return Err(CatalogError::DuplicateId(plan.id));
        }
        if plan.goal.is_nan() || plan.goal <= 0.0 {
            return Err(CatalogError::NonPositiveGoal { id: plan.id, goal: plan.goal });
        }
        if plan.current < 0.0 {
            return Err(CatalogError::NegativeCurrent { id: plan.id, current: plan.current });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_PLANS: &str = r#"
plans:
  - id: 10
    title: Rent Buffer
    description: One month of rent in reserve
    goal: 25000
    current: 5000
    duration: 5 months
  - id: 11
    title: Wedding
    description: Contribution towards the big day
    goal: 150000
    current: 0
    duration: 18 months
"#;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = PlanCatalog::builtin();
        assert!(!builtin.is_empty());
        assert!(validate(builtin.plans()).is_ok());
    }

    #[test]
    fn test_from_yaml_keeps_order() {
        let catalog = PlanCatalog::from_yaml_str(TWO_PLANS).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.plans()[0].id, 10);
        assert_eq!(catalog.plans()[0].title, "Rent Buffer");
        assert_eq!(catalog.plans()[1].duration, "18 months");
        assert_eq!(catalog.plans()[1].current, 0.0);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_PLANS.as_bytes()).unwrap();

        let catalog = PlanCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PlanCatalog::from_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = PlanCatalog::from_yaml_str("plans: [ { id: one } ]").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut plans = PlanCatalog::builtin().plans().to_vec();
        plans[1].id = plans[0].id;
        let err = PlanCatalog::new(plans).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn test_zero_goal_rejected() {
        let mut plans = PlanCatalog::builtin().plans().to_vec();
        plans[2].goal = 0.0;
        let err = PlanCatalog::new(plans).unwrap_err();
        assert!(matches!(err, CatalogError::NonPositiveGoal { id: 3, .. }));
    }

    #[test]
    fn test_negative_current_rejected() {
        let mut plans = PlanCatalog::builtin().plans().to_vec();
        plans[0].current = -1.0;
        let err = PlanCatalog::new(plans).unwrap_err();
        assert!(matches!(err, CatalogError::NegativeCurrent { id: 1, .. }));
    }

    #[test]
    fn test_current_above_goal_is_allowed() {
        let mut plans = PlanCatalog::builtin().plans().to_vec();
        plans[0].current = plans[0].goal * 1.2;
        assert!(PlanCatalog::new(plans).is_ok());
    }
}
