//! Pricing Page
//!
//! Composition root: owns all UI state and wires the plan cards, coupon
//! input, order summary, and the mock payment gateway together.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use rust_decimal::Decimal;

use pricing_core::{
    format_price, AppliedCoupon, BillingPeriod, Catalog, CheckoutFlow, CouponPolicy, Plan,
    SelectionOutcome,
};
use pricing_payments::{MockPaymentGateway, PaymentGateway, PaymentRequest};

use crate::components::{CouponInput, PricingCard, Toast};

/// How long a toast stays up
const TOAST_MS: u32 = 3_000;

#[component]
pub fn PricingPage() -> impl IntoView {
    let catalog = StoredValue::new(Catalog::standard());

    let (flow, set_flow) = signal(CheckoutFlow::new());
    let (checkout_busy, set_checkout_busy) = signal(false);

    // Payment form fields: captured, never validated or sent anywhere
    let (card_name, set_card_name) = signal(String::new());
    let (card_number, set_card_number) = signal(String::new());
    let (card_expiry, set_card_expiry) = signal(String::new());
    let (card_cvc, set_card_cvc) = signal(String::new());

    let (toast, set_toast) = signal(None::<String>);
    let toast_seq = StoredValue::new(0u32);
    let show_toast = move |msg: String| {
        let seq = toast_seq.get_value() + 1;
        toast_seq.set_value(seq);
        set_toast.set(Some(msg));
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            // A newer toast owns the slot now
            if toast_seq.get_value() == seq {
                set_toast.set(None);
            }
        });
    };

    let select = move |plan: Plan| {
        let mut next = flow.get_untracked();
        match next.select(&plan) {
            SelectionOutcome::Selected => {
                set_flow.set(next);
                show_toast(format!("{} plan selected", plan.name));
            }
            SelectionOutcome::ContactRedirect(url) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(url);
                }
            }
        }
    };

    let apply_coupon = Callback::new(move |coupon: AppliedCoupon| {
        let percent = format_price(coupon.rate * Decimal::from(100));
        set_flow.update(|flow| flow.apply_coupon(coupon));
        show_toast(format!("Coupon applied! {percent}% discount"));
    });

    let coupon_error = Callback::new(move |msg: String| show_toast(msg));

    let checkout = move || {
        if checkout_busy.get_untracked() {
            return;
        }
        let order = match flow.get_untracked().order() {
            Ok(order) => order,
            Err(_) => {
                show_toast("Please select a plan first".into());
                return;
            }
        };
        set_checkout_busy.set(true);
        leptos::task::spawn_local(async move {
            let gateway = MockPaymentGateway::default();
            let result = gateway.initiate(PaymentRequest::from(order)).await;
            set_checkout_busy.set(false);
            match result {
                Ok(outcome) if outcome.success => show_toast("Redirecting to payment...".into()),
                Ok(_) => show_toast("Payment was not completed.".into()),
                Err(err) => show_toast(err.user_message().into()),
            }
        });
    };

    let summary = move || {
        flow.get().selection().cloned().map(|sel| {
            let current = flow.get();
            let original = current.selected_price();
            let discounted = current.discounted_selected_price();
            let has_coupon = current.coupon().is_some();

            let price_cell = match (original, discounted) {
                (Some(original), Some(discounted)) if has_coupon => view! {
                    <div class="summary-price">
                        <span class="strike">{format!("${}", format_price(original))}</span>
                        <span class="amount">{format!("${}", format_price(discounted))}</span>
                    </div>
                }
                .into_any(),
                (Some(original), _) => view! {
                    <div class="summary-price">
                        <span class="amount">{format!("${}", format_price(original))}</span>
                    </div>
                }
                .into_any(),
                _ => view! { <div class="summary-price">"Custom pricing"</div> }.into_any(),
            };

            view! {
                <section class="summary">
                    <h3>"Order Summary"</h3>
                    <div class="row">
                        <span>"Selected Plan"</span>
                        <span class="value">
                            {format!("{} ({})", sel.plan.name, sel.period.as_str())}
                        </span>
                    </div>
                    <div class="row">
                        <span>"Price"</span>
                        {price_cell}
                    </div>

                    <CouponInput
                        policy=CouponPolicy::default()
                        on_apply=apply_coupon
                        on_error=coupon_error
                    />

                    <div class="payment-details">
                        <h4>"Payment Details"</h4>
                        <input
                            type="text"
                            placeholder="Cardholder name"
                            prop:value=move || card_name.get()
                            on:input=move |ev| set_card_name.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Card number"
                            prop:value=move || card_number.get()
                            on:input=move |ev| set_card_number.set(event_target_value(&ev))
                        />
                        <div class="split">
                            <input
                                type="text"
                                placeholder="MM/YY"
                                prop:value=move || card_expiry.get()
                                on:input=move |ev| set_card_expiry.set(event_target_value(&ev))
                            />
                            <input
                                type="text"
                                placeholder="CVC"
                                prop:value=move || card_cvc.get()
                                on:input=move |ev| set_card_cvc.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <button
                        class="btn btn-primary pay"
                        on:click=move |_| checkout()
                        disabled=move || checkout_busy.get()
                    >
                        {move || if checkout_busy.get() { "Processing..." } else { "Proceed to Payment" }}
                    </button>
                </section>
            }
        })
    };

    view! {
        <div class="pricing">
            <Toast message=toast />

            <header class="intro">
                <h1>"Choose Your Plan"</h1>
                <p class="subtitle">
                    "Select the perfect plan for your needs. All plans include our core
                    features with different levels of access and priority support."
                </p>
                <button
                    class="toggle"
                    on:click=move |_| {
                        set_flow
                            .update(|flow| {
                                let next = flow.period().toggled();
                                flow.set_period(next);
                            });
                    }
                >
                    {move || match flow.get().period() {
                        BillingPeriod::Monthly => "Billing monthly. Switch to yearly",
                        BillingPeriod::Yearly => "Billing yearly. Switch to monthly",
                    }}
                </button>
            </header>

            <div class="plans">
                {move || {
                    let current = flow.get();
                    catalog
                        .with_value(|catalog| {
                            catalog
                                .plans()
                                .iter()
                                .map(|plan| {
                                    let discounted = current.card_discounted_price(plan);
                                    let chosen = plan.clone();
                                    view! {
                                        <PricingCard
                                            plan=plan.clone()
                                            period=current.period()
                                            discounted=discounted
                                            on_select=Callback::new(move |()| select(chosen.clone()))
                                        />
                                    }
                                })
                                .collect_view()
                        })
                }}
            </div>

            {summary}
        </div>
    }
}
