//! Pages

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::{self, PLANS};
use crate::components::ErrorBanner;

/// Plan selection page.
///
/// Submission state machine per button: Idle -> Submitting -> either a full
/// browser navigation to the checkout URL or back to Idle with the error
/// shown. All buttons are disabled while one submission is in flight.
#[component]
pub fn PlanPage() -> impl IntoView {
    let (submitting, set_submitting) = signal(None::<&'static str>);
    let (error, set_error) = signal(String::new());

    let subscribe = move |plan_id: &'static str| {
        if submitting.get_untracked().is_some() {
            return;
        }
        set_submitting.set(Some(plan_id));
        set_error.set(String::new());

        spawn_local(async move {
            match api::create_payment(plan_id).await {
                Ok(url) => {
                    // Full-page navigation; control leaves the application.
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
                Err(message) => {
                    set_error.set(message);
                    set_submitting.set(None);
                }
            }
        });
    };

    view! {
        <div class="plan-page">
            <h1>"Choose Your Plan"</h1>
            <p class="subtitle">
                "Secure checkout powered by Ziina. Start your journey today with our flexible pricing options."
            </p>

            <ErrorBanner message=error />

            <div class="plan-grid">
                {PLANS
                    .iter()
                    .map(|plan| {
                        let id = plan.id;
                        let popular = plan.popular;
                        view! {
                            <div class="plan-card" class:popular=popular>
                                {popular.then(|| view! { <span class="badge">"Most Popular"</span> })}
                                <h2>{plan.label}</h2>
                                <p class="price">{plan.price} " AED"</p>
                                <p class="description">{plan.description}</p>
                                <ul class="features">
                                    {plan
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect_view()}
                                </ul>
                                <button
                                    disabled=move || submitting.get().is_some()
                                    on:click=move |_| subscribe(id)
                                >
                                    {move || {
                                        if submitting.get() == Some(id) {
                                            "Redirecting..."
                                        } else {
                                            "Subscribe"
                                        }
                                    }}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Landing page for the provider's success redirect
#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    view! {
        <div class="result-page success">
            <h1>"Payment Successful!"</h1>
            <p>"Thank you for your subscription. Your payment was processed successfully."</p>
            <p class="note">"Confirmation email sent"</p>
            <A href="/">"Back to Plans"</A>
        </div>
    }
}

/// Landing page for the provider's cancel/failure redirect
#[component]
pub fn PaymentFailedPage() -> impl IntoView {
    view! {
        <div class="result-page failed">
            <h1>"Payment Failed"</h1>
            <p>"Your payment could not be completed. No charges were made."</p>
            <A href="/">"Back to Plans"</A>
        </div>
    }
}
