use leptos::*;

use hbnb_core::{
    favorites::Favorites,
    search::{filter_places, PlaceFilter},
};
use hbnb_entities::place::Place;
use hbnb_frontend_api::CachedPlaces;

use crate::{
    components::{PlaceCard, SearchFilters},
    pages::toggle_favorite,
};

#[component]
pub fn Home(favorites: RwSignal<Favorites>) -> impl IntoView {
    let places = expect_context::<CachedPlaces>();

    // -- signals -- //

    let all_places = RwSignal::new(None::<Vec<Place>>);
    let filter = RwSignal::new(PlaceFilter::default());
    let error = RwSignal::new(None::<String>);

    // -- actions -- //

    let fetch_places = create_action(move |force: &bool| {
        let places = places.clone();
        let force = *force;
        async move {
            match places.places(force).await {
                Ok(p) => {
                    error.set(None);
                    all_places.set(Some(p));
                }
                Err(err) => {
                    log::warn!("Unable to load places: {err}");
                    error.set(Some(err.to_string()));
                }
            }
        }
    });
    fetch_places.dispatch(false);

    // -- memos -- //

    let listed = create_memo(move |_| {
        all_places.with(|p| {
            p.as_deref()
                .map(|p| filter.with(|f| filter_places(p, f)))
        })
    });

    let amenities = Signal::derive(move || {
        let mut names: Vec<String> = all_places.with(|p| {
            p.iter()
                .flatten()
                .flat_map(|p| p.amenities.iter().map(|a| a.trim().to_string()))
                .filter(|a| !a.is_empty())
                .collect()
        });
        names.sort_by_key(|a| a.to_lowercase());
        names.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
        names
    });

    view! {
      <section class="container mx-auto px-6">
        <h1 class="text-4xl font-light mt-8">"Find your next stay"</h1>
        <SearchFilters filter amenities />
        {move || error.get().map(|err| view! {
          <div class="text-red-700">
            <p>{ err }</p>
            <button class="underline" on:click=move |_| fetch_places.dispatch(true)>"Try again"</button>
          </div>
        })}
        {move || match listed.get() {
          None => view! { <p class="text-gray-500">"Loading stays…"</p> }.into_view(),
          Some(places) if places.is_empty() => view! {
            <p class="text-gray-500">"No stays match your search."</p>
          }.into_view(),
          Some(places) => view! {
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
              <For
                each=move || places.clone()
                key=|p| p.id.clone()
                children=move |place| {
                  let id = place.id.clone();
                  let favorite = Signal::derive(move || favorites.with(|f| f.contains(id.as_str())));
                  view! {
                    <PlaceCard
                      place
                      favorite
                      on_toggle_favorite = move |p: Place| toggle_favorite(favorites, &p)
                    />
                  }
                }
              />
            </div>
          }.into_view(),
        }}
      </section>
    }
}
