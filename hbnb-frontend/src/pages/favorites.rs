use leptos::*;
use leptos_router::*;

use hbnb_core::{
    favorites::{favorite_places, Favorites},
    usecases,
};
use hbnb_entities::place::Place;
use hbnb_frontend_api::CachedPlaces;

use crate::{components::PlaceCard, storage::LocalFavorites, Page};

/// Adds or removes the place and keeps the signal in sync with the storage.
pub fn toggle_favorite(favorites: RwSignal<Favorites>, place: &Place) {
    match usecases::toggle_favorite(&LocalFavorites, &place.id) {
        Ok(is_favorite) => {
            log::debug!("Place {} is favorite: {is_favorite}", place.id);
            favorites.update(|f| {
                if f.contains(place.id.as_str()) != is_favorite {
                    f.toggle(place.id.clone());
                }
            });
        }
        Err(err) => {
            log::warn!("Unable to toggle favorite {}: {err}", place.id);
        }
    }
}

#[component]
pub fn FavoritePlaces(favorites: RwSignal<Favorites>) -> impl IntoView {
    let places = expect_context::<CachedPlaces>();
    let all_places = RwSignal::new(None::<Vec<Place>>);
    let error = RwSignal::new(None::<String>);

    let fetch_places = create_action(move |()| {
        let places = places.clone();
        async move {
            match places.places(false).await {
                Ok(p) => all_places.set(Some(p)),
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });
    fetch_places.dispatch(());

    let listed = create_memo(move |_| {
        all_places.with(|places| {
            places
                .as_deref()
                .map(|places| favorites.with(|f| favorite_places(places, f)))
        })
    });

    view! {
      <section class="container mx-auto px-6 py-8">
        <h1 class="text-3xl font-light mb-6">"Favorites"</h1>
        {move || error.get().map(|err| view! { <p class="text-red-700">{ err }</p> })}
        {move || match listed.get() {
          None => view! { <p class="text-gray-500">"Loading…"</p> }.into_view(),
          Some(places) if places.is_empty() => view! {
            <p class="text-gray-500">
              "No favorites yet. "
              <A href=Page::Home.path()>"Explore stays"</A>
            </p>
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
