use leptos::*;

use hbnb_core::pricing::{format_amount, PriceBreakdown};

#[must_use]
pub fn money(amount: f64) -> String {
    format!("${}", format_amount(amount))
}

#[component]
pub fn PriceDetails(#[prop(into)] price: Signal<PriceBreakdown>) -> impl IntoView {
    view! {
      <dl class="space-y-2 text-sm text-gray-700">
        <div class="flex justify-between">
          <dt>{ move || price.with(|p| format!("{} x {} nights", money(p.nightly_rate), p.nights)) }</dt>
          <dd>{ move || money(price.with(|p| p.subtotal)) }</dd>
        </div>
        <div class="flex justify-between">
          <dt>"Cleaning fee"</dt>
          <dd>{ move || money(price.with(|p| p.cleaning_fee)) }</dd>
        </div>
        <div class="flex justify-between">
          <dt>"Service fee"</dt>
          <dd>{ move || money(price.with(|p| p.service_fee)) }</dd>
        </div>
        <div class="flex justify-between border-t border-gray-200 pt-2 font-semibold text-gray-900">
          <dt>"Total"</dt>
          <dd>{ move || money(price.with(|p| p.total)) }</dd>
        </div>
      </dl>
    }
}
