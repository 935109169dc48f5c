use std::collections::HashMap;

use leptos::*;
use leptos_router::*;

use hbnb_core::{
    bookings::{apply_booking_filter, remove_booking, BookingFilter, BookingPeriod, StayWithPlace},
    cancellation::CancelAction,
    review::review_eligibility,
};
use hbnb_entities::{
    booking::{Booking, BookingStatus},
    id::Id,
    place::Place,
};
use hbnb_frontend_api::{CachedPlaces, UserApi};
use time::macros::format_description;

use crate::{
    components::{money, ReviewForm},
    pages::property_path,
    today, Page, Session,
};

const PERIODS: [(BookingPeriod, &str); 3] = [
    (BookingPeriod::All, "All"),
    (BookingPeriod::Upcoming, "Upcoming"),
    (BookingPeriod::Past, "Past"),
];

const STATUSES: [BookingStatus; 4] = [
    BookingStatus::Pending,
    BookingStatus::Confirmed,
    BookingStatus::Cancelled,
    BookingStatus::Completed,
];

async fn load_stays(
    api: &UserApi,
    places: &CachedPlaces,
    filter: &BookingFilter,
) -> Result<Vec<StayWithPlace>, hbnb_frontend_api::Error> {
    let bookings = apply_booking_filter(api.my_bookings(filter).await?, filter, today());
    let mut known: HashMap<Id, Option<Place>> = HashMap::new();
    let mut stays = Vec::with_capacity(bookings.len());
    for booking in bookings {
        if !known.contains_key(&booking.place_id) {
            let place = places.place(&booking.place_id).await.unwrap_or_else(|err| {
                log::warn!("Unable to load place {}: {err}", booking.place_id);
                None
            });
            known.insert(booking.place_id.clone(), place);
        }
        let place = known.get(&booking.place_id).cloned().flatten();
        stays.push(StayWithPlace { booking, place });
    }
    Ok(stays)
}

#[component]
pub fn Trips(session: Session) -> impl IntoView {
    let places = expect_context::<CachedPlaces>();

    // -- signals -- //

    let filter = RwSignal::new(BookingFilter::default());
    let stays = RwSignal::new(None::<Vec<StayWithPlace>>);
    let error = RwSignal::new(None::<String>);
    let reviewing = RwSignal::new(None::<Id>);

    // -- actions -- //

    let fetch_stays = create_action(move |filter: &BookingFilter| {
        let filter = *filter;
        let places = places.clone();
        async move {
            let Some(api) = session.user_api.get_untracked() else {
                return;
            };
            match load_stays(&api, &places, &filter).await {
                Ok(s) => {
                    error.set(None);
                    stays.set(Some(s));
                }
                Err(err) => {
                    log::warn!("Unable to load bookings: {err}");
                    error.set(Some(session.error_message(&err)));
                }
            }
        }
    });

    let cancel = create_action(move |booking: &Booking| {
        let booking = booking.clone();
        async move {
            let Some(api) = session.user_api.get_untracked() else {
                return;
            };
            if !CancelAction::for_booking(&booking).is_enabled() {
                return;
            }
            match api.cancel_booking(&booking.id).await {
                Ok(_) => {
                    log::info!("Cancelled booking {}", booking.id);
                    stays.update(|s| {
                        if let Some(s) = s {
                            remove_booking(s, booking.id.as_str());
                        }
                    });
                }
                Err(err) => {
                    log::warn!("Unable to cancel booking {}: {err}", booking.id);
                    error.set(Some(session.error_message(&err)));
                }
            }
        }
    });

    // -- effects -- //

    Effect::new(move |_| {
        if session.user_api.with(Option::is_some) {
            fetch_stays.dispatch(filter.get());
        }
    });

    // -- memos -- //

    let bookings = create_memo(move |_| {
        stays.with(|s| {
            s.iter()
                .flatten()
                .map(|s| s.booking.clone())
                .collect::<Vec<_>>()
        })
    });

    let tabs = PERIODS
        .iter()
        .map(|(period, label)| {
            let period = *period;
            view! {
              <button
                class=move || if filter.with(|f| f.period == period) {
                  "border-b-2 border-black px-3 py-1"
                } else {
                  "px-3 py-1 text-gray-500"
                }
                on:click=move |_| filter.update(|f| f.period = period)
              >
                { *label }
              </button>
            }
        })
        .collect_view();

    let status_options = STATUSES
        .iter()
        .map(|s| view! { <option value=s.as_str().to_string()>{ s.to_string() }</option> })
        .collect_view();

    view! {
      <section class="container mx-auto px-6 py-8 space-y-6">
        <h1 class="text-3xl font-light">"Trips"</h1>
        <Show
          when=move || session.user_api.with(Option::is_some)
          fallback=|| view! {
            <p class="text-gray-500">
              <A href=Page::Login.path()>"Log in"</A>
              " to see your trips."
            </p>
          }
        >
          <div class="flex items-center gap-4">
            { tabs.clone() }
            <select
              class="ml-auto rounded border border-gray-300 px-2 py-1"
              on:change=move |ev| {
                let status = event_target_value(&ev).parse::<BookingStatus>().ok();
                filter.update(|f| f.status = status);
              }
            >
              <option value="">"Any status"</option>
              { status_options.clone() }
            </select>
          </div>
          {move || error.get().map(|err| view! { <p class="text-red-700">{ err }</p> })}
          {move || match stays.get() {
            None => view! { <p class="text-gray-500">"Loading…"</p> }.into_view(),
            Some(s) if s.is_empty() => view! { <p class="text-gray-500">"No trips yet."</p> }.into_view(),
            Some(s) => s
              .into_iter()
              .map(|stay| view! { <TripCard stay session cancel bookings=bookings.into() reviewing /> })
              .collect_view(),
          }}
        </Show>
      </section>
    }
}

#[component]
fn TripCard(
    stay: StayWithPlace,
    session: Session,
    cancel: Action<Booking, ()>,
    bookings: Signal<Vec<Booking>>,
    reviewing: RwSignal<Option<Id>>,
) -> impl IntoView {
    let StayWithPlace { booking, place } = stay;
    let title = place
        .as_ref()
        .map_or_else(|| "Unknown place".to_string(), |p| p.title.clone());
    let href = property_path(booking.place_id.as_str());
    let cancellable = CancelAction::for_booking(&booking).is_enabled();
    let deadline = booking.cancellation_deadline.map(|d| {
        d.format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
            .unwrap_or_else(|_| d.to_string())
    });
    let place_id = booking.place_id.clone();
    let can_review = {
        let place_id = place_id.clone();
        let is_past = booking.is_past(today());
        Signal::derive(move || {
            is_past && bookings.with(|b| review_eligibility(b, &place_id, today()).is_eligible())
        })
    };
    let review_open = {
        let booking_id = booking.id.clone();
        Signal::derive(move || reviewing.with(|r| r.as_ref() == Some(&booking_id)))
    };
    let booking_id = booking.id.clone();

    view! {
      <div class="rounded-2xl border border-gray-200 p-4 space-y-2">
        <div class="flex justify-between">
          <A href=href>{ title }</A>
          <span class="text-sm uppercase text-gray-500">{ booking.status.to_string() }</span>
        </div>
        <p class="text-gray-700">{ booking.stay.to_string() } " · " { money(booking.total_price) }</p>
        {deadline.filter(|_| cancellable).map(|d| view! {
          <p class="text-sm text-gray-500">"Free cancellation until " { d }</p>
        })}
        <div class="flex gap-4">
          <button
            class="rounded border border-black px-3 py-1 disabled:opacity-40"
            prop:disabled=move || !cancellable || cancel.pending().get()
            on:click={
              let booking = booking.clone();
              move |_| cancel.dispatch(booking.clone())
            }
          >
            "Cancel booking"
          </button>
          <Show when=move || can_review.get() && !review_open.get()>
            <button
              class="rounded border border-black px-3 py-1"
              on:click={
                let booking_id = booking_id.clone();
                move |_| reviewing.set(Some(booking_id.clone()))
              }
            >
              "Write a review"
            </button>
          </Show>
        </div>
        <Show when=move || review_open.get()>
          <ReviewForm
            place_id = place_id.clone()
            session
            on_submitted = move |_| reviewing.set(None)
          />
        </Show>
      </div>
    }
}
