use leptos::*;
use leptos_router::*;

use hbnb_core::{
    bookings::BookingFilter,
    favorites::Favorites,
    review::{review_eligibility, ReviewEligibility},
    usecases::Checkout,
};
use hbnb_entities::{
    id::Id,
    place::Place,
    review::{average_rating, Review},
};
use hbnb_frontend_api::CachedPlaces;

use crate::{
    components::{money, BookingForm, ReviewForm},
    pages::toggle_favorite,
    today, Page, Session,
};

#[derive(Debug, Clone, PartialEq)]
enum Loaded {
    Loading,
    Found(Place),
    NotFound,
    Failed(String),
}

#[component]
pub fn Property(
    session: Session,
    favorites: RwSignal<Favorites>,
    checkout: RwSignal<Option<Checkout>>,
) -> impl IntoView {
    let places = expect_context::<CachedPlaces>();

    // -- signals -- //

    let params = use_params_map();
    let place = RwSignal::new(Loaded::Loading);
    let reviews = RwSignal::new(Vec::<Review>::new());
    let eligibility = RwSignal::new(ReviewEligibility::NoStay);

    // -- actions -- //

    let fetch_place = create_action(move |id: &Id| {
        let id = id.clone();
        let places = places.clone();
        async move {
            place.set(Loaded::Loading);
            match places.place(&id).await {
                Ok(Some(p)) => place.set(Loaded::Found(p)),
                Ok(None) => place.set(Loaded::NotFound),
                Err(err) => {
                    log::warn!("Unable to fetch place {id}: {err}");
                    place.set(Loaded::Failed(err.to_string()));
                }
            }
            match places.api().place_reviews(&id).await {
                Ok(r) => reviews.set(r),
                Err(err) => log::warn!("Unable to fetch reviews of {id}: {err}"),
            }
        }
    });

    let fetch_eligibility = create_action(move |id: &Id| {
        let id = id.clone();
        async move {
            let Some(api) = session.user_api.get_untracked() else {
                eligibility.set(ReviewEligibility::NoStay);
                return;
            };
            match api.my_bookings(&BookingFilter::default()).await {
                Ok(bookings) => eligibility.set(review_eligibility(&bookings, &id, today())),
                Err(err) => {
                    log::warn!("Unable to fetch bookings: {err}");
                    session.error_message(&err);
                }
            }
        }
    });

    // -- effects -- //

    let place_id = create_memo(move |_| params.with(|p| p.get("id").cloned().map(Id::from)));

    Effect::new(move |_| {
        if let Some(id) = place_id.get() {
            fetch_place.dispatch(id);
        }
    });

    Effect::new(move |_| {
        let logged_in = session.user_api.with(Option::is_some);
        if let (true, Some(id)) = (logged_in, place_id.get()) {
            fetch_eligibility.dispatch(id);
        }
    });

    move || match place.get() {
        Loaded::Loading => view! { <p class="container mx-auto p-6 text-gray-500">"Loading…"</p> }.into_view(),
        Loaded::NotFound => view! {
          <div class="mx-auto text-center max-w-7xl px-4 mt-12">
            <h2 class="text-3xl font-bold text-gray-900">"Place not found"</h2>
            <A href=Page::Home.path()>"Back to all stays"</A>
          </div>
        }.into_view(),
        Loaded::Failed(err) => view! { <p class="container mx-auto p-6 text-red-700">{ err }</p> }.into_view(),
        Loaded::Found(p) => view! {
          <PlaceProfile
            place = p
            session
            favorites
            checkout
            reviews
            eligibility = eligibility.into()
          />
        }.into_view(),
    }
}

#[component]
fn PlaceProfile(
    place: Place,
    session: Session,
    favorites: RwSignal<Favorites>,
    checkout: RwSignal<Option<Checkout>>,
    reviews: RwSignal<Vec<Review>>,
    eligibility: Signal<ReviewEligibility>,
) -> impl IntoView {
    let favorite = {
        let id = place.id.clone();
        Signal::derive(move || favorites.with(|f| f.contains(id.as_str())))
    };
    let own_listing = {
        let place = place.clone();
        Signal::derive(move || session.user_id().is_some_and(|id| place.is_owned_by(&id)))
    };
    let rating = Signal::derive(move || {
        reviews.with(|r| match average_rating(r) {
            Some(avg) => format!("★ {avg:.1} · {} reviews", r.len()),
            None => "No reviews yet".to_string(),
        })
    });

    let toggle = {
        let place = place.clone();
        move |_| toggle_favorite(favorites, &place)
    };

    let images = place
        .images
        .iter()
        .skip(1)
        .map(|src| view! { <img src=src.clone() alt="" class="h-40 w-full object-cover rounded" /> })
        .collect_view();
    let amenities = place
        .amenities
        .iter()
        .map(|a| view! { <li class="rounded-full border border-gray-200 px-3 py-1 text-sm">{ a.clone() }</li> })
        .collect_view();

    let review_place_id = place.id.clone();
    let booking_place = place.clone();

    view! {
      <div class="container mx-auto px-6 py-8 space-y-8">
        <div class="flex items-start justify-between">
          <div>
            <h1 class="text-3xl font-light">{ place.title.clone() }</h1>
            <p class="text-gray-500">{ place.location_label() } " · " { rating }</p>
          </div>
          <button class="text-2xl" on:click=toggle>
            { move || if favorite.get() { "♥" } else { "♡" } }
          </button>
        </div>
        <img src=place.cover_image().to_string() alt=place.title.clone() class="h-96 w-full object-cover rounded-2xl" />
        <div class="grid grid-cols-4 gap-2">{ images }</div>
        <div class="grid gap-8 lg:grid-cols-3">
          <div class="lg:col-span-2 space-y-6">
            <p class="text-gray-700 whitespace-pre-line">{ place.description.clone() }</p>
            <p class="text-gray-900">{ money(place.price) } " / night"</p>
            <ul class="flex flex-wrap gap-2">{ amenities }</ul>
          </div>
          <Show
            when=move || !own_listing.get()
            fallback=|| view! {
              <p class="text-gray-500">
                "This is your listing. "
                <A href=Page::Host.path()>"Manage it"</A>
              </p>
            }
          >
            <BookingForm place=booking_place.clone() session checkout />
          </Show>
        </div>
        <section class="space-y-4">
          <h2 class="text-2xl font-light">"Reviews"</h2>
          <For
            each=move || reviews.get()
            key=|r| r.id.clone()
            children=|review| view! {
              <div class="border-t border-gray-200 pt-4">
                <p>{ "★".repeat(usize::from(review.rating.value())) }</p>
                <p class="text-gray-700">{ review.text }</p>
              </div>
            }
          />
          {move || match eligibility.get() {
            ReviewEligibility::Eligible => view! {
              <div>
                <h3 class="font-medium mb-2">"Write a review"</h3>
                <ReviewForm
                  place_id = review_place_id.clone()
                  session
                  on_submitted = move |review| reviews.update(|r| r.insert(0, review))
                />
              </div>
            }.into_view(),
            ReviewEligibility::StayNotFinished => view! {
              <p class="text-sm text-gray-500">"You can review this place after your stay."</p>
            }.into_view(),
            ReviewEligibility::NoStay => ().into_view(),
          }}
        </section>
      </div>
    }
}
