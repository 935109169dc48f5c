use leptos::*;

use hbnb_core::search::{PlaceFilter, PRICE_PRESETS};

#[component]
pub fn SearchFilters(
    filter: RwSignal<PlaceFilter>,
    /// Amenities offered by any of the listed places.
    amenities: Signal<Vec<String>>,
) -> impl IntoView {
    let price_options = PRICE_PRESETS
        .iter()
        .enumerate()
        .map(|(i, range)| view! { <option value=i.to_string()>{ range.label() }</option> })
        .collect_view();

    let on_price_change = move |ev| {
        let price = event_target_value(&ev)
            .parse::<usize>()
            .ok()
            .and_then(|i| PRICE_PRESETS.get(i).copied())
            .unwrap_or_default();
        filter.update(|f| f.price = price);
    };

    let toggle_amenity = move |name: String| {
        filter.update(|f| {
            if let Some(pos) = f.amenities.iter().position(|a| a.eq_ignore_ascii_case(&name)) {
                f.amenities.remove(pos);
            } else {
                f.amenities.push(name);
            }
        });
    };

    view! {
      <div class="flex flex-wrap items-center gap-4 py-4">
        <input
          type="search"
          placeholder="Search stays"
          class="flex-1 rounded-full border border-gray-300 px-4 py-2"
          prop:value=move || filter.with(|f| f.text.clone())
          on:input=move |ev| {
            let text = event_target_value(&ev);
            filter.update(|f| f.text = text);
          }
        />
        <select class="rounded-full border border-gray-300 px-4 py-2" on:change=on_price_change>
          { price_options }
        </select>
        <div class="flex flex-wrap gap-2">
          <For
            each=move || amenities.get()
            key=Clone::clone
            children=move |name| {
              let label = name.clone();
              let selected = {
                let name = name.clone();
                move || filter.with(|f| f.amenities.iter().any(|a| a.eq_ignore_ascii_case(&name)))
              };
              view! {
                <button
                  class=move || if selected() {
                    "rounded-full border border-black bg-black px-3 py-1 text-sm text-white"
                  } else {
                    "rounded-full border border-gray-300 px-3 py-1 text-sm"
                  }
                  on:click=move |_| toggle_amenity(name.clone())
                >
                  { label }
                </button>
              }
            }
          />
        </div>
      </div>
    }
}
