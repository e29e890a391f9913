//! API Client

/// A selectable plan as shown on the plan page.
///
/// Kept in sync with the server's plan catalog; the server re-validates
/// every identifier before contacting the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanInfo {
    pub id: &'static str,
    pub label: &'static str,
    /// Whole AED units
    pub price: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const PLANS: [PlanInfo; 3] = [
    PlanInfo {
        id: "monthly",
        label: "Monthly",
        price: 299,
        description: "Perfect for getting started",
        features: &["Full access", "24/7 support", "Cancel anytime"],
        popular: false,
    },
    PlanInfo {
        id: "semiannual",
        label: "Semiannual",
        price: 699,
        description: "Best value for teams",
        features: &[
            "Full access",
            "Priority support",
            "Team collaboration",
            "Advanced analytics",
        ],
        popular: true,
    },
    PlanInfo {
        id: "annual",
        label: "Annual",
        price: 899,
        description: "Maximum savings",
        features: &[
            "Full access",
            "Priority support",
            "Team collaboration",
            "Advanced analytics",
            "Custom integrations",
        ],
        popular: false,
    },
];

/// Create a payment session for a plan. Returns the provider checkout URL.
///
/// Error text comes from the JSON body's `error` field; the HTTP status is
/// only used to branch, never shown.
pub async fn create_payment(plan_id: &str) -> Result<String, String> {
    let client = reqwest::Client::new();

    let body = serde_json::json!({ "planId": plan_id });

    let response = client
        .post("/create-payment")
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let ok = response.status().is_success();
    let data: serde_json::Value = response.json().await.unwrap_or_default();

    if !ok {
        return Err(data["error"]
            .as_str()
            .unwrap_or("Something went wrong")
            .to_string());
    }

    match data["checkout_url"].as_str() {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => Err("No checkout URL returned".into()),
    }
}
