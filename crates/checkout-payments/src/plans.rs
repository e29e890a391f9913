//! Plan Catalog
//!
//! The fixed set of purchasable subscription plans. The catalog is the single
//! source of truth for valid plan identifiers and amounts, and the sole
//! validation gate in front of the provider call.

use serde::{Deserialize, Serialize};

/// Billing currency for all plans
pub const CURRENCY: &str = "AED";

/// Subscription plan identifiers (closed set)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Monthly,
    Semiannual,
    Annual,
}

impl PlanId {
    pub const ALL: [PlanId; 3] = [PlanId::Monthly, PlanId::Semiannual, PlanId::Annual];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Monthly => "monthly",
            PlanId::Semiannual => "semiannual",
            PlanId::Annual => "annual",
        }
    }

    /// Parse an identifier. Unknown identifiers are rejected, never defaulted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monthly" => Some(PlanId::Monthly),
            "semiannual" => Some(PlanId::Semiannual),
            "annual" => Some(PlanId::Annual),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A purchasable subscription plan
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: PlanId,
    /// Whole AED units
    pub amount: u64,
    pub currency: &'static str,
}

/// Static mapping from plan identifier to price, defined at process start
#[derive(Clone, Debug)]
pub struct PlanCatalog {
    plans: [Plan; 3],
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanCatalog {
    pub fn new() -> Self {
        Self {
            plans: [
                Plan {
                    id: PlanId::Monthly,
                    amount: 299,
                    currency: CURRENCY,
                },
                Plan {
                    id: PlanId::Semiannual,
                    amount: 699,
                    currency: CURRENCY,
                },
                Plan {
                    id: PlanId::Annual,
                    amount: 899,
                    currency: CURRENCY,
                },
            ],
        }
    }

    /// Look up a plan by its raw identifier string
    pub fn lookup(&self, plan_id: &str) -> Option<&Plan> {
        let id = PlanId::parse(plan_id)?;
        self.plans.iter().find(|p| p.id == id)
    }

    /// All plans, in display order
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Valid identifiers, comma-separated, for error messages
    pub fn ids(&self) -> String {
        PlanId::ALL
            .iter()
            .map(PlanId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_plans() {
        let catalog = PlanCatalog::new();
        assert_eq!(catalog.lookup("monthly").unwrap().amount, 299);
        assert_eq!(catalog.lookup("semiannual").unwrap().amount, 699);
        assert_eq!(catalog.lookup("annual").unwrap().amount, 899);
    }

    #[test]
    fn test_lookup_rejects_unknown_plans() {
        let catalog = PlanCatalog::new();
        assert!(catalog.lookup("gold").is_none());
        assert!(catalog.lookup("").is_none());
        // Identifiers are exact-match, not normalized
        assert!(catalog.lookup("Monthly").is_none());
    }

    #[test]
    fn test_all_plans_priced_in_aed() {
        let catalog = PlanCatalog::new();
        for plan in catalog.plans() {
            assert_eq!(plan.currency, "AED");
            assert!(plan.amount > 0);
        }
    }

    #[test]
    fn test_ids_enumerates_closed_set() {
        assert_eq!(PlanCatalog::new().ids(), "monthly, semiannual, annual");
    }
}
