use leptos::*;
use leptos_router::*;

use hbnb_core::util::validate::Validate;
use hbnb_entities::user::{User, UserProfileUpdate};

use crate::{Page, Session};

const INPUT_CLASS: &str = "block w-full rounded border border-gray-300 px-3 py-1.5 mb-3";

fn optional(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn normalize(update: UserProfileUpdate) -> UserProfileUpdate {
    UserProfileUpdate {
        first_name: update.first_name.trim().to_string(),
        last_name: update.last_name.trim().to_string(),
        phone_number: update.phone_number.as_deref().and_then(optional),
        home_location: update.home_location.as_deref().and_then(optional),
    }
}

#[component]
pub fn Profile(session: Session) -> impl IntoView {
    let editing = RwSignal::new(false);
    let draft = RwSignal::new(UserProfileUpdate::default());
    let error = RwSignal::new(None::<String>);

    let save_action = create_action(move |update: &UserProfileUpdate| {
        let update = update.clone();
        async move {
            let (Some(api), Some(id)) = (session.user_api.get_untracked(), session.user_id())
            else {
                return;
            };
            match api.update_profile(&id, &update).await {
                Ok(user) => {
                    log::info!("Updated profile of {}", user.id);
                    session.user.set(Some(user));
                    error.set(None);
                    editing.set(false);
                }
                Err(err) => {
                    log::warn!("Unable to update profile: {err}");
                    error.set(Some(session.error_message(&err)));
                }
            }
        }
    });

    let start_editing = move |_| {
        if let Some(user) = session.user.get_untracked() {
            draft.set(UserProfileUpdate::from(&user));
            error.set(None);
            editing.set(true);
        }
    };

    let save = move |_| {
        let update = normalize(draft.get_untracked());
        match update.validate() {
            Ok(()) => save_action.dispatch(update),
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let text_input = move |placeholder: &'static str,
                           get: fn(&UserProfileUpdate) -> String,
                           set: fn(&mut UserProfileUpdate, String)| {
        view! {
          <input class=INPUT_CLASS placeholder=placeholder
            prop:value=move || draft.with(get)
            on:input=move |ev| {
              let v = event_target_value(&ev);
              draft.update(|d| set(d, v));
            }
          />
        }
    };

    view! {
      <section class="container mx-auto max-w-lg px-6 py-12">
        <h1 class="text-3xl font-light mb-6">"Profile"</h1>
        {move || error.get().map(|err| view! { <p class="mb-4 text-red-700">{ err }</p> })}
        {move || match (session.user.get(), editing.get()) {
          (None, _) => view! {
            <p class="text-gray-500"><A href=Page::Login.path()>"Log in"</A>" to see your profile."</p>
          }.into_view(),
          (Some(user), false) => view! {
            <UserInfo user />
            <button class="mt-6 rounded bg-black px-4 py-2 text-white" on:click=start_editing>
              "Edit profile"
            </button>
          }.into_view(),
          (Some(_), true) => view! {
            <form on:submit=|ev| ev.prevent_default()>
              { text_input("First name", |d| d.first_name.clone(), |d, v| d.first_name = v) }
              { text_input("Last name", |d| d.last_name.clone(), |d, v| d.last_name = v) }
              { text_input("Phone number", |d| d.phone_number.clone().unwrap_or_default(), |d, v| d.phone_number = Some(v)) }
              { text_input("Home location", |d| d.home_location.clone().unwrap_or_default(), |d, v| d.home_location = Some(v)) }
              <div class="flex gap-4">
                <button
                  class="rounded bg-black px-4 py-2 text-white"
                  prop:disabled=move || save_action.pending().get()
                  on:click=save
                >
                  "Save"
                </button>
                <button class="underline" on:click=move |_| editing.set(false)>"Cancel"</button>
              </div>
            </form>
          }.into_view(),
        }}
      </section>
    }
}

#[component]
fn UserInfo(user: User) -> impl IntoView {
    view! {
      <dl class="grid grid-cols-3 gap-y-2">
        <dt class="text-gray-500">"Name"</dt>
        <dd class="col-span-2">{ user.full_name() }</dd>
        <dt class="text-gray-500">"Email"</dt>
        <dd class="col-span-2">{ user.email }</dd>
        <dt class="text-gray-500">"Phone"</dt>
        <dd class="col-span-2">{ user.phone_number.unwrap_or_else(|| "-".to_string()) }</dd>
        <dt class="text-gray-500">"Home"</dt>
        <dd class="col-span-2">{ user.home_location.unwrap_or_else(|| "-".to_string()) }</dd>
      </dl>
    }
}
