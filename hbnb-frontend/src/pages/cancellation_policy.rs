use leptos::*;
use leptos_router::*;
use time::{macros::format_description, Date, Month, PrimitiveDateTime};

use hbnb_core::cancellation::{cancellation_deadline, CANCELLATION_WINDOW, DEFAULT_CHECK_IN_TIME};

use crate::Page;

fn long_date(date: PrimitiveDateTime) -> String {
    date.format(format_description!(
        "[month repr:long] [day padding:none], [year] at [hour]:[minute]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

#[component]
pub fn CancellationPolicy() -> impl IntoView {
    let example = Date::from_calendar_date(2025, Month::December, 20)
        .map(|check_in| {
            (
                long_date(PrimitiveDateTime::new(check_in, DEFAULT_CHECK_IN_TIME)),
                long_date(cancellation_deadline(check_in, DEFAULT_CHECK_IN_TIME)),
            )
        })
        .ok();

    view! {
      <section class="container mx-auto max-w-2xl px-6 py-12 space-y-4">
        <h1 class="text-3xl font-light">"Cancellation policy"</h1>
        <p>
          "You can cancel a booking free of charge up to "
          { CANCELLATION_WINDOW.whole_hours() }
          " hours before check-in. Check-in starts at 15:00 on the day of arrival."
        </p>
        {example.map(|(check_in, deadline)| view! {
          <p>"Example: for a check-in on " { check_in } " you can cancel for free until " { deadline } "."</p>
        })}
        <p>
          "After that deadline the booking can no longer be cancelled here. "
          "Only pending and confirmed bookings can be cancelled."
        </p>
        <A href=Page::Trips.path()>"Back to your trips"</A>
      </section>
    }
}
