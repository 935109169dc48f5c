//! Plain text output of the command line client.

use hbnb_core::{
    bookings::StayWithPlace,
    cancellation::CancelAction,
    entities::*,
    pricing::{format_amount, PriceBreakdown},
    usecases::{IncomingBookings, PlaceDetails},
};
use time::{macros::format_description, PrimitiveDateTime};

pub fn money(amount: f64) -> String {
    format!("${}", format_amount(amount))
}

pub fn deadline(deadline: PrimitiveDateTime) -> String {
    deadline
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]"
        ))
        .unwrap_or_else(|_| deadline.to_string())
}

pub fn place_line(place: &Place, favorite: bool) -> String {
    format!(
        "{marker} {id}  {title}  {price} / night  ({location})",
        marker = if favorite { "♥" } else { " " },
        id = place.id,
        title = place.title,
        price = money(place.price),
        location = place.location_label(),
    )
}

pub fn stars(rating: Rating) -> String {
    let value = usize::from(rating.value());
    format!("{}{}", "★".repeat(value), "☆".repeat(5 - value))
}

pub fn place_details(details: &PlaceDetails, favorite: bool) -> String {
    let PlaceDetails { place, reviews } = details;
    let mut out = vec![
        format!("{}{}", place.title, if favorite { "  ♥" } else { "" }),
        format!("{} / night", money(place.price)),
        format!("Location: {}", place.location_label()),
        format!("Host: {}", place.owner_id),
        String::new(),
        place.description.clone(),
    ];
    if !place.amenities.is_empty() {
        out.push(String::new());
        out.push(format!("Amenities: {}", place.amenities.join(", ")));
    }
    out.push(String::new());
    match details.average_rating() {
        Some(avg) => out.push(format!("{avg:.1} ★ ({} reviews)", reviews.len())),
        None => out.push("No reviews yet".to_string()),
    }
    for review in reviews {
        out.push(format!("  {}  {}", stars(review.rating), review.text));
    }
    out.join("\n")
}

pub fn price_breakdown(price: &PriceBreakdown) -> String {
    [
        format!(
            "{} x {} nights  {}",
            money(price.nightly_rate),
            price.nights,
            money(price.subtotal)
        ),
        format!("Cleaning fee  {}", money(price.cleaning_fee)),
        format!("Service fee  {}", money(price.service_fee)),
        format!("Total  {}", money(price.total)),
    ]
    .join("\n")
}

fn booking_line(booking: &Booking) -> String {
    let mut line = format!(
        "{id}  {stay}  {status}  {total}",
        id = booking.id,
        stay = booking.stay,
        status = booking.status,
        total = money(booking.total_price),
    );
    if CancelAction::for_booking(booking).is_enabled() {
        match booking.cancellation_deadline {
            Some(d) => line.push_str(&format!("  (free cancellation until {})", deadline(d))),
            None => line.push_str("  (cancellable)"),
        }
    }
    line
}

pub fn stay_with_place(stay: &StayWithPlace) -> String {
    let title = stay
        .place
        .as_ref()
        .map_or("Unknown place", |p| p.title.as_str());
    format!("{}  {title}", booking_line(&stay.booking))
}

pub fn incoming_bookings(incoming: &IncomingBookings) -> String {
    let mut out = vec![format!("{}  {}", incoming.place.id, incoming.place.title)];
    if incoming.bookings.is_empty() {
        out.push("  no bookings".to_string());
    }
    out.extend(
        incoming
            .bookings
            .iter()
            .map(|b| format!("  {}  guest {}", booking_line(b), b.guest_id)),
    );
    out.join("\n")
}

pub fn user(user: &User) -> String {
    let mut out = vec![user.full_name(), user.email.clone()];
    if let Some(phone) = &user.phone_number {
        out.push(format!("Phone: {phone}"));
    }
    if let Some(home) = &user.home_location {
        out.push(format!("Home: {home}"));
    }
    out.join("\n")
}
