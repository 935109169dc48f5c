use leptos::*;

use hbnb_core::review::{ReviewDraft, MAX_REVIEW_LEN};
use hbnb_entities::{
    id::Id,
    review::{NewReview, Rating, Review},
};

use crate::Session;

#[component]
pub fn ReviewForm<F>(place_id: Id, session: Session, on_submitted: F) -> impl IntoView
where
    F: Fn(Review) + 'static + Clone,
{
    let rating = RwSignal::new(0_u8);
    let text = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit_action = create_action(move |review: &NewReview| {
        let review = review.clone();
        let on_submitted = on_submitted.clone();
        async move {
            let Some(api) = session.user_api.get_untracked() else {
                error.set(Some("Please log in to write a review.".to_string()));
                return;
            };
            match api.create_review(&review).await {
                Ok(review) => {
                    log::info!("Created review {}", review.id);
                    rating.set(0);
                    text.set(String::new());
                    error.set(None);
                    on_submitted(review);
                }
                Err(err) => {
                    log::warn!("Unable to create review: {err}");
                    error.set(Some(session.error_message(&err)));
                }
            }
        }
    });

    let submit = move |_| {
        let draft = ReviewDraft {
            rating: rating.get_untracked(),
            text: text.get_untracked(),
        };
        match draft.validate(&place_id) {
            Ok(review) => submit_action.dispatch(review),
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let stars = (Rating::min().value()..=Rating::max().value())
        .map(|value| {
            view! {
              <button
                type="button"
                class="text-2xl"
                on:click=move |_| rating.set(value)
              >
                { move || if rating.get() >= value { "★" } else { "☆" } }
              </button>
            }
        })
        .collect_view();

    view! {
      <form class="space-y-3" on:submit=|ev| ev.prevent_default()>
        <div>{ stars }</div>
        <textarea
          class="w-full rounded border border-gray-300 p-2"
          rows="4"
          placeholder="How was your stay?"
          maxlength=MAX_REVIEW_LEN.to_string()
          prop:value=move || text.get()
          on:input=move |ev| text.set(event_target_value(&ev))
        />
        <p class="text-xs text-gray-500">
          { move || format!("{}/{MAX_REVIEW_LEN}", text.with(|t| t.trim().chars().count())) }
        </p>
        {move || error.get().map(|err| view! { <p class="text-red-700">{ err }</p> })}
        <button
          class="rounded bg-black px-4 py-2 text-white"
          prop:disabled=move || submit_action.pending().get()
          on:click=submit
        >
          "Submit review"
        </button>
      </form>
    }
}
