use leptos::*;
use leptos_router::*;

use hbnb_entities::place::Place;

use crate::{components::money, pages::property_path};

#[component]
pub fn PlaceCard<F>(place: Place, favorite: Signal<bool>, on_toggle_favorite: F) -> impl IntoView
where
    F: Fn(Place) + 'static + Clone,
{
    let href = property_path(place.id.as_str());
    let location = place.location_label();
    let price = format!("{} / night", money(place.price));
    let cover = place.cover_image().to_string();
    let title = place.title.clone();

    view! {
      <div class="relative rounded-2xl overflow-hidden bg-white shadow">
        <A href=href>
          <img src=cover alt=title.clone() class="h-56 w-full object-cover" />
          <div class="p-4">
            <h3 class="font-medium text-gray-900">{ title }</h3>
            <p class="text-sm text-gray-500">{ location }</p>
            <p class="mt-1 text-sm text-gray-900">{ price }</p>
          </div>
        </A>
        <button
          class="absolute top-3 right-3 rounded-full bg-white px-2 py-1"
          title=move || if favorite.get() { "Remove from favorites" } else { "Add to favorites" }
          on:click=move |_| on_toggle_favorite(place.clone())
        >
          { move || if favorite.get() { "♥" } else { "♡" } }
        </button>
      </div>
    }
}
