use leptos::*;
use leptos_router::*;

use hbnb_core::{
    availability::{AvailabilityState, BookingGate, Reservation},
    cancellation::cancellation_deadline,
    pricing::PriceBreakdown,
    usecases::{BookingPolicy, Checkout},
};
use hbnb_entities::{
    place::Place,
    stay::{format_date, parse_date},
};
use hbnb_frontend_api::CachedPlaces;

use crate::{
    components::{money, PriceDetails},
    Page, Session,
};

/// Date selection, availability check and reservation of a place.
#[component]
pub fn BookingForm(
    place: Place,
    session: Session,
    checkout: RwSignal<Option<Checkout>>,
) -> impl IntoView {
    let places = expect_context::<CachedPlaces>();
    let policy = BookingPolicy::default();
    let gate = RwSignal::new(BookingGate::new());
    let error = RwSignal::new(None::<String>);
    let place = store_value(place);

    // -- actions -- //

    let check_action = create_action(move |()| {
        let api = places.api().clone();
        async move {
            error.set(None);
            let Some(Ok(stay)) = gate.try_update(BookingGate::begin_check) else {
                return;
            };
            let place_id = place.with_value(|p| p.id.clone());
            match api.check_availability(&place_id, &stay).await {
                Ok(available) => gate.update(|g| {
                    if !g.finish_check(&stay, available) {
                        log::debug!("Ignoring availability of {stay}");
                    }
                }),
                Err(err) => {
                    log::warn!("Availability check failed: {err}");
                    gate.update(BookingGate::check_failed);
                    error.set(Some(session.error_message(&err)));
                }
            }
        }
    });

    let reserve_action = create_action(move |reservation: &Reservation| {
        let reservation = *reservation;
        async move {
            let Some(api) = session.user_api.get_untracked() else {
                return;
            };
            let place_id = place.with_value(|p| p.id.clone());
            match api.create_payment_intent(&place_id, &reservation.stay).await {
                Ok(payment) => {
                    checkout.set(Some(Checkout {
                        place_id,
                        free_cancellation_until: cancellation_deadline(
                            reservation.stay.check_in(),
                            policy.check_in_time,
                        ),
                        reservation,
                        payment,
                    }));
                }
                Err(err) => {
                    log::warn!("Unable to prepare the payment: {err}");
                    error.set(Some(session.error_message(&err)));
                }
            }
        }
    });

    // -- effects -- //

    let navigate = use_navigate();
    Effect::new(move |_| {
        if checkout.with(Option::is_some) && reserve_action.version().get() > 0 {
            navigate(Page::Booking.path(), NavigateOptions::default());
        }
    });

    // -- callbacks -- //

    let on_reserve = move |_| {
        if session.user_api.with_untracked(Option::is_none) {
            error.set(Some("Please log in to reserve.".to_string()));
            return;
        }
        let price = place.with_value(|p| p.price);
        match gate.try_update(|g| g.reserve(price, &policy.fees)) {
            Some(Ok(reservation)) => reserve_action.dispatch(reservation),
            Some(Err(err)) => error.set(Some(err.to_string())),
            None => {}
        }
    };

    let select_check_in = move |ev| {
        let date = parse_date(&event_target_value(&ev)).ok();
        error.set(None);
        gate.update(|g| g.select_dates(date, g.check_out()));
    };

    let select_check_out = move |ev| {
        let date = parse_date(&event_target_value(&ev)).ok();
        error.set(None);
        gate.update(|g| g.select_dates(g.check_in(), date));
    };

    // -- memos -- //

    let state = create_memo(move |_| gate.with(BookingGate::state));
    let nights = create_memo(move |_| gate.with(BookingGate::nights));
    let price = Signal::derive(move || {
        PriceBreakdown::calculate(place.with_value(|p| p.price), nights.get(), &policy.fees)
    });
    let gate_error = Signal::derive(move || gate.with(|g| g.last_error().map(|e| e.to_string())));

    let status = move || match state.get() {
        AvailabilityState::Unknown => None,
        AvailabilityState::Checking => Some(("text-gray-500", "Checking availability…")),
        AvailabilityState::Available => Some(("text-green-700", "Available for your dates")),
        AvailabilityState::Unavailable => {
            Some(("text-red-700", "Not available for these dates"))
        }
    };

    view! {
      <div class="rounded-2xl border border-gray-200 p-6 shadow-sm space-y-4">
        <p class="text-xl">
          { place.with_value(|p| money(p.price)) }
          <span class="text-sm text-gray-500">" / night"</span>
        </p>
        <div class="grid grid-cols-2 gap-2">
          <label class="text-xs uppercase">"Check-in"
            <input
              type="date"
              class="block w-full border border-gray-300 rounded p-2"
              prop:value=move || gate.with(|g| g.check_in().map(format_date).unwrap_or_default())
              on:change=select_check_in
            />
          </label>
          <label class="text-xs uppercase">"Check-out"
            <input
              type="date"
              class="block w-full border border-gray-300 rounded p-2"
              prop:value=move || gate.with(|g| g.check_out().map(format_date).unwrap_or_default())
              on:change=select_check_out
            />
          </label>
        </div>
        <button
          class="w-full rounded border border-black px-4 py-2"
          prop:disabled=move || state.get() == AvailabilityState::Checking
          on:click=move |_| check_action.dispatch(())
        >
          "Check availability"
        </button>
        {move || status().map(|(class, text)| view! { <p class=class>{ text }</p> })}
        {move || gate_error.get().or_else(|| error.get()).map(|err| view! {
          <p class="text-red-700">{ err }</p>
        })}
        <button
          class="w-full rounded bg-black px-4 py-2 text-white disabled:opacity-50"
          prop:disabled=move || !gate.with(BookingGate::can_reserve) || reserve_action.pending().get()
          on:click=on_reserve
        >
          "Reserve"
        </button>
        <Show when=move || { nights.get() > 0 }>
          <PriceDetails price />
        </Show>
        <p class="text-xs text-gray-500">
          "Free cancellation up to 48 hours before check-in. "
          <A href=Page::CancellationPolicy.path()>"Cancellation policy"</A>
        </p>
      </div>
    }
}
