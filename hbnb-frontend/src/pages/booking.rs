use leptos::*;
use leptos_router::*;

use hbnb_core::{cancellation::is_free_cancellation, usecases::Checkout};
use hbnb_entities::booking::NewBooking;
use hbnb_frontend_api::CachedPlaces;
use time::macros::format_description;

use crate::{components::PriceDetails, now, payments, Page, Session};

#[component]
pub fn BookingCheckout(session: Session, checkout: RwSignal<Option<Checkout>>) -> impl IntoView {
    move || match checkout.get() {
        None => view! {
          <div class="container mx-auto p-6 text-center">
            <p class="text-gray-500">"There is no reservation in progress."</p>
            <A href=Page::Home.path()>"Find a stay"</A>
          </div>
        }
        .into_view(),
        Some(current) => view! { <CheckoutSummary session checkout current /> }.into_view(),
    }
}

#[component]
fn CheckoutSummary(
    session: Session,
    checkout: RwSignal<Option<Checkout>>,
    current: Checkout,
) -> impl IntoView {
    let places = expect_context::<CachedPlaces>();
    let title = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    let place_id = current.place_id.clone();
    let fetch_title = create_action(move |()| {
        let places = places.clone();
        let place_id = place_id.clone();
        async move {
            if let Ok(Some(place)) = places.place(&place_id).await {
                title.set(place.title);
            }
        }
    });
    fetch_title.dispatch(());

    let client_secret = current.payment.client_secret.clone();
    request_animation_frame(move || {
        if let Err(err) = payments::mount(&client_secret) {
            log::warn!("Unable to show the payment form: {err}");
            error.set(Some(err.to_string()));
        }
    });

    let pay_action = create_action(move |checkout: &Checkout| {
        let current = checkout.clone();
        async move {
            let Some(api) = session.user_api.get_untracked() else {
                error.set(Some("Please log in to complete the booking.".to_string()));
                return false;
            };
            let payment_intent_id = match payments::confirm(&current.payment.client_secret).await
            {
                Ok(id) => id,
                Err(err) => {
                    log::warn!("Payment failed: {err}");
                    error.set(Some(err.to_string()));
                    return false;
                }
            };
            let new_booking = NewBooking {
                place_id: current.place_id.clone(),
                stay: current.reservation.stay,
                payment_intent_id,
            };
            match api.create_booking(&new_booking).await {
                Ok(booking) => {
                    log::info!("Created booking {}", booking.id);
                    true
                }
                Err(err) => {
                    log::warn!("Unable to create booking: {err}");
                    error.set(Some(session.error_message(&err)));
                    false
                }
            }
        }
    });

    Effect::new(move |_| {
        if pay_action.value().get() == Some(true) {
            checkout.set(None);
            navigate(Page::Trips.path(), NavigateOptions::default());
        }
    });

    let stay = current.reservation.stay;
    let deadline = current
        .free_cancellation_until
        .format(format_description!(
            "[month repr:long] [day], [year] at [hour]:[minute]"
        ))
        .unwrap_or_else(|_| current.free_cancellation_until.to_string());
    let free_cancellation = is_free_cancellation(current.free_cancellation_until, now());
    let price = current.reservation.price;

    view! {
      <section class="container mx-auto px-6 py-8 grid gap-8 lg:grid-cols-2">
        <div class="space-y-6">
          <h1 class="text-3xl font-light">"Confirm and pay"</h1>
          <div>
            <h2 class="font-medium">"Your trip"</h2>
            <p class="text-gray-700">{ move || title.get() }</p>
            <p class="text-gray-700">{ stay.to_string() } " · " { stay.nights() } " nights"</p>
          </div>
          <div>
            <h2 class="font-medium">"Cancellation"</h2>
            {if free_cancellation {
              view! { <p class="text-gray-700">"Free cancellation until " { deadline }"."</p> }.into_view()
            } else {
              view! { <p class="text-gray-700">"This reservation is non-refundable."</p> }.into_view()
            }}
            <A href=Page::CancellationPolicy.path()>"Learn more"</A>
          </div>
          <div>
            <h2 class="font-medium mb-2">"Payment"</h2>
            <div id="payment-element"></div>
          </div>
          {move || error.get().map(|err| view! { <p class="text-red-700">{ err }</p> })}
          <button
            class="w-full rounded bg-black px-4 py-2 text-white disabled:opacity-50"
            prop:disabled=move || pay_action.pending().get()
            on:click=move |_| pay_action.dispatch(current.clone())
          >
            { move || if pay_action.pending().get() { "Processing…" } else { "Confirm and pay" } }
          </button>
        </div>
        <div class="rounded-2xl border border-gray-200 p-6">
          <h2 class="font-medium mb-4">"Price details"</h2>
          <PriceDetails price=Signal::derive(move || price) />
        </div>
      </section>
    }
}
