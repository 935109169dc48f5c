use leptos::*;
use leptos_router::*;

use hbnb_core::{
    host::{owned_listings, tidy_new_place, tidy_place_update, LOCATION_PRESETS},
    util::validate::Validate,
};
use hbnb_entities::{
    booking::{Booking, BookingStatus},
    id::Id,
    place::{NewPlace, Place, PlaceUpdate},
};
use hbnb_frontend_api::CachedPlaces;

use crate::{components::money, pages::property_path, Page, Session};

const INPUT_CLASS: &str = "block w-full rounded border border-gray-300 px-3 py-1.5 mb-3";

#[derive(Debug, Clone, PartialEq)]
struct Listing {
    place: Place,
    bookings: Vec<Booking>,
}

#[derive(Debug, Clone)]
enum HostAction {
    Create(NewPlace),
    Update(Id, PlaceUpdate),
    Delete(Id),
    Confirm(Id),
    Decline(Id),
}

#[component]
pub fn Host(session: Session) -> impl IntoView {
    let places = expect_context::<CachedPlaces>();

    // -- signals -- //

    let listings = RwSignal::new(None::<Vec<Listing>>);
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<Id>);

    // -- actions -- //

    let fetch_listings = create_action({
        let places = places.clone();
        move |()| {
            let places = places.clone();
            async move {
                let (Some(api), Some(user_id)) =
                    (session.user_api.get_untracked(), session.user_id())
                else {
                    return;
                };
                let all = match places.places(true).await {
                    Ok(all) => all,
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        return;
                    }
                };
                let mut owned = vec![];
                for place in owned_listings(&all, &user_id) {
                    let bookings = match api.place_bookings(&place.id).await {
                        Ok(bookings) => bookings,
                        Err(err) => {
                            log::warn!("Unable to load bookings of {}: {err}", place.id);
                            error.set(Some(session.error_message(&err)));
                            vec![]
                        }
                    };
                    owned.push(Listing { place, bookings });
                }
                listings.set(Some(owned));
            }
        }
    });

    let host_action = create_action(move |action: &HostAction| {
        let action = action.clone();
        let places = places.clone();
        async move {
            let Some(api) = session.user_api.get_untracked() else {
                return;
            };
            let result = match action {
                HostAction::Create(new_place) => api.create_place(&new_place).await.map(|place| {
                    log::info!("Created listing {}", place.id);
                }),
                HostAction::Update(id, update) => api.update_place(&id, &update).await.map(|_| {
                    editing.set(None);
                }),
                HostAction::Delete(id) => api.delete_place(&id).await.map(|()| {
                    places.remove(&id);
                    editing.update(|e| {
                        if e.as_ref() == Some(&id) {
                            *e = None;
                        }
                    });
                }),
                HostAction::Confirm(id) => api.confirm_booking(&id).await.map(|_| ()),
                HostAction::Decline(id) => api.cancel_booking(&id).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    error.set(None);
                    places.invalidate();
                    fetch_listings.dispatch(());
                }
                Err(err) => {
                    log::warn!("Host action failed: {err}");
                    error.set(Some(session.error_message(&err)));
                }
            }
        }
    });

    // -- effects -- //

    Effect::new(move |_| {
        if session.user.with(Option::is_some) {
            fetch_listings.dispatch(());
        }
    });

    let on_create = move |new_place: NewPlace| {
        let new_place = tidy_new_place(new_place);
        match new_place.validate() {
            Ok(()) => {
                host_action.dispatch(HostAction::Create(new_place));
                true
            }
            Err(err) => {
                error.set(Some(err.to_string()));
                false
            }
        }
    };

    view! {
      <section class="container mx-auto px-6 py-8 space-y-8">
        <h1 class="text-3xl font-light">"Host"</h1>
        <Show
          when=move || session.user.with(Option::is_some)
          fallback=|| view! {
            <p class="text-gray-500"><A href=Page::Login.path()>"Log in"</A>" to host a place."</p>
          }
        >
          {move || error.get().map(|err| view! { <p class="text-red-700">{ err }</p> })}
          <NewListingForm on_create />
          <h2 class="text-2xl font-light">"Your listings"</h2>
          {move || match listings.get() {
            None => view! { <p class="text-gray-500">"Loading…"</p> }.into_view(),
            Some(l) if l.is_empty() => view! { <p class="text-gray-500">"You have no listings yet."</p> }.into_view(),
            Some(l) => l
              .into_iter()
              .map(|listing| view! { <ListingCard listing editing host_action error /> })
              .collect_view(),
          }}
        </Show>
      </section>
    }
}

fn parse_amenities(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[component]
fn NewListingForm<F>(on_create: F) -> impl IntoView
where
    F: Fn(NewPlace) -> bool + 'static + Copy,
{
    let draft = RwSignal::new(NewPlace {
        latitude: LOCATION_PRESETS[0].latitude,
        longitude: LOCATION_PRESETS[0].longitude,
        ..NewPlace::default()
    });
    let amenities = RwSignal::new(String::new());

    let location_options = LOCATION_PRESETS
        .iter()
        .enumerate()
        .map(|(i, p)| view! { <option value=i.to_string()>{ p.label }</option> })
        .collect_view();

    let submit = move |_| {
        let new_place = NewPlace {
            amenities: parse_amenities(&amenities.get_untracked()),
            ..draft.get_untracked()
        };
        if on_create(new_place) {
            draft.update(|d| {
                d.title.clear();
                d.description.clear();
                d.price = 0.0;
            });
            amenities.set(String::new());
        }
    };

    view! {
      <form class="max-w-xl" on:submit=|ev| ev.prevent_default()>
        <h2 class="text-2xl font-light mb-4">"Create a listing"</h2>
        <input class=INPUT_CLASS placeholder="Title"
          prop:value=move || draft.with(|d| d.title.clone())
          on:input=move |ev| { let v = event_target_value(&ev); draft.update(|d| d.title = v); }
        />
        <textarea class=INPUT_CLASS rows="4" placeholder="Description (at least 40 characters)"
          prop:value=move || draft.with(|d| d.description.clone())
          on:input=move |ev| { let v = event_target_value(&ev); draft.update(|d| d.description = v); }
        />
        <input class=INPUT_CLASS type="number" min="0" placeholder="Price per night"
          prop:value=move || draft.with(|d| if d.price > 0.0 { d.price.to_string() } else { String::new() })
          on:input=move |ev| {
            let price = event_target_value(&ev).parse().unwrap_or(0.0);
            draft.update(|d| d.price = price);
          }
        />
        <select class=INPUT_CLASS
          on:change=move |ev| {
            if let Some(p) = event_target_value(&ev).parse::<usize>().ok().and_then(|i| LOCATION_PRESETS.get(i)) {
              draft.update(|d| {
                d.latitude = p.latitude;
                d.longitude = p.longitude;
              });
            }
          }
        >
          { location_options }
        </select>
        <input class=INPUT_CLASS placeholder="Amenities, separated by commas"
          prop:value=move || amenities.get()
          on:input=move |ev| amenities.set(event_target_value(&ev))
        />
        <button class="rounded bg-black px-4 py-2 text-white" on:click=submit>"Publish"</button>
      </form>
    }
}

#[component]
fn ListingCard(
    listing: Listing,
    editing: RwSignal<Option<Id>>,
    host_action: Action<HostAction, ()>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let Listing { place, bookings } = listing;
    let id = place.id.clone();
    let is_editing = {
        let id = id.clone();
        Signal::derive(move || editing.with(|e| e.as_ref() == Some(&id)))
    };
    let update = RwSignal::new(PlaceUpdate::from(&place));

    let save = {
        let id = id.clone();
        move |_| {
            let update = tidy_place_update(update.get_untracked());
            match update.validate() {
                Ok(()) => host_action.dispatch(HostAction::Update(id.clone(), update)),
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    };

    let incoming = if bookings.is_empty() {
        view! { <p class="text-sm text-gray-500">"No bookings yet"</p> }.into_view()
    } else {
        bookings
            .into_iter()
            .map(|booking| {
                let pending = booking.status == BookingStatus::Pending;
                let declinable = booking.status.is_active();
                let confirm_id = booking.id.clone();
                let decline_id = booking.id.clone();
                view! {
                  <li class="flex items-center gap-4 text-sm">
                    <span>{ booking.stay.to_string() }</span>
                    <span class="uppercase text-gray-500">{ booking.status.to_string() }</span>
                    <span>{ money(booking.total_price) }</span>
                    <Show when=move || pending>
                      <button class="underline" on:click={
                        let id = confirm_id.clone();
                        move |_| host_action.dispatch(HostAction::Confirm(id.clone()))
                      }>"Confirm"</button>
                    </Show>
                    <Show when=move || declinable>
                      <button class="underline text-red-700" on:click={
                        let id = decline_id.clone();
                        move |_| host_action.dispatch(HostAction::Decline(id.clone()))
                      }>"Decline"</button>
                    </Show>
                  </li>
                }
            })
            .collect_view()
    };

    let delete_id = id.clone();
    let edit_id = id.clone();

    view! {
      <div class="rounded-2xl border border-gray-200 p-4 space-y-3">
        <div class="flex items-center justify-between">
          <A href=property_path(id.as_str())>{ place.title.clone() }</A>
          <span>{ money(place.price) } " / night"</span>
        </div>
        <div class="flex gap-4 text-sm">
          <button class="underline" on:click=move |_| {
            if is_editing.get_untracked() {
              editing.set(None);
            } else {
              editing.set(Some(edit_id.clone()));
            }
          }>
            { move || if is_editing.get() { "Close editor" } else { "Edit" } }
          </button>
          <button class="underline text-red-700" on:click=move |_| {
            host_action.dispatch(HostAction::Delete(delete_id.clone()));
          }>"Delete"</button>
        </div>
        <Show when=move || is_editing.get()>
          <form class="max-w-xl" on:submit=|ev| ev.prevent_default()>
            <input class=INPUT_CLASS
              prop:value=move || update.with(|u| u.title.clone())
              on:input=move |ev| { let v = event_target_value(&ev); update.update(|u| u.title = v); }
            />
            <textarea class=INPUT_CLASS rows="4"
              prop:value=move || update.with(|u| u.description.clone())
              on:input=move |ev| { let v = event_target_value(&ev); update.update(|u| u.description = v); }
            />
            <input class=INPUT_CLASS type="number" min="0"
              prop:value=move || update.with(|u| u.price.to_string())
              on:input=move |ev| {
                let price = event_target_value(&ev).parse().unwrap_or(0.0);
                update.update(|u| u.price = price);
              }
            />
            <button class="rounded bg-black px-4 py-2 text-white" on:click=save.clone()>"Save"</button>
          </form>
        </Show>
        <h3 class="font-medium">"Incoming bookings"</h3>
        <ul class="space-y-2">{ incoming }</ul>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_amenities() {
        assert_eq!(parse_amenities(" wifi, ,pool ,"), vec!["wifi", "pool"]);
        assert!(parse_amenities("").is_empty());
    }
}
