//! UI Components

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use rust_decimal::Decimal;

use pricing_core::{format_price, AppliedCoupon, BillingPeriod, CouponPolicy, Plan};

/// Simulated validation latency, standing in for a backend round trip
const COUPON_DELAY_MS: u32 = 1_000;

/// Card for a single plan. Pure rendering of its props: one selection
/// event out, no state of its own.
#[component]
pub fn PricingCard(
    plan: Plan,
    period: BillingPeriod,
    discounted: Option<Decimal>,
    on_select: Callback<()>,
) -> impl IntoView {
    let card_class = if plan.popular { "plan featured" } else { "plan" };
    let btn_class = if plan.popular { "btn btn-primary" } else { "btn" };
    let badge = plan
        .popular
        .then(|| view! { <span class="badge">"Most Popular"</span> });

    let price = match plan.effective_price(period) {
        Some(price) => {
            let original = format!("${}", format_price(price));
            match discounted {
                Some(discounted) if discounted != price => view! {
                    <div class="price">
                        <span class="strike">{original}</span>
                        {format!("${}", format_price(discounted))}
                        <span>{period.suffix()}</span>
                    </div>
                }
                .into_any(),
                _ => view! {
                    <div class="price">{original}<span>{period.suffix()}</span></div>
                }
                .into_any(),
            }
        }
        None => view! { <div class="price custom">"Custom pricing"</div> }.into_any(),
    };

    view! {
        <div class=card_class>
            {badge}
            <h2>{plan.name.clone()}</h2>
            {price}
            <ul>
                {plan
                    .features
                    .iter()
                    .map(|feature| view! { <li>{feature.clone()}</li> })
                    .collect_view()}
            </ul>
            <button class=btn_class on:click=move |_| on_select.run(())>
                {plan.cta.clone()}
            </button>
        </div>
    }
}

/// Coupon entry with simulated validation latency. Empty input is a
/// silent no-op; resubmission is disabled while validation is pending,
/// and the busy flag is released no matter how validation went.
#[component]
pub fn CouponInput(
    policy: CouponPolicy,
    on_apply: Callback<AppliedCoupon>,
    on_error: Callback<String>,
) -> impl IntoView {
    let (code, set_code) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = code.get_untracked();
        if raw.trim().is_empty() || busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        let policy = policy.clone();
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(COUPON_DELAY_MS).await;
            let result = policy.validate(&raw);
            set_busy.set(false);
            match result {
                Ok(coupon) => on_apply.run(coupon),
                Err(err) => on_error.run(err.to_string()),
            }
        });
    };

    view! {
        <form class="coupon" on:submit=submit>
            <input
                type="text"
                placeholder="Enter coupon code"
                prop:value=move || code.get()
                on:input=move |ev| set_code.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Applying..." } else { "Apply" }}
            </button>
        </form>
    }
}

/// Transient notification banner
#[component]
pub fn Toast(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|msg| view! { <div class="toast">{msg}</div> })}
    }
}
