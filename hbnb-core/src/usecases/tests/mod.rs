use std::cell::RefCell;

use super::prelude::*;
use crate::{bookings::BookingFilter, favorites::Favorites, gateways};

mod account;
mod booking_flow;
mod reviews_and_favorites;

type GatewayResult<T> = gateways::Result<T>;

#[derive(Debug, Default)]
pub struct MockApi {
    pub token: RefCell<Option<String>>,
    pub users: RefCell<Vec<(User, String)>>,
    pub current_user: RefCell<Option<User>>,
    pub places: RefCell<Vec<Place>>,
    pub reviews: RefCell<Vec<Review>>,
    pub bookings: RefCell<Vec<Booking>>,
    pub unavailable: RefCell<Vec<StayDates>>,
    pub payment_intents: RefCell<Vec<(Id, StayDates)>>,
    pub favorites: RefCell<Favorites>,
    pub place_requests: RefCell<usize>,
    pub offline: RefCell<bool>,
}

impl MockApi {
    pub fn logged_in_as(user: User) -> Self {
        let api = Self::default();
        *api.current_user.borrow_mut() = Some(user);
        api
    }

    fn ensure_online(&self) -> GatewayResult<()> {
        if *self.offline.borrow() {
            return Err(anyhow::anyhow!("connection refused").into());
        }
        Ok(())
    }

    fn guest(&self) -> GatewayResult<User> {
        self.current_user
            .borrow()
            .clone()
            .ok_or(gateways::Error::Unauthorized)
    }
}

pub fn user(id: &str) -> User {
    User {
        id: id.into(),
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        email: format!("{id}@example.com"),
        phone_number: None,
        home_location: None,
    }
}

impl AuthGateway for MockApi {
    fn login(&self, credentials: &Credentials) -> GatewayResult<String> {
        self.ensure_online()?;
        let users = self.users.borrow();
        let (user, _) = users
            .iter()
            .find(|(u, pw)| u.email == credentials.email && *pw == credentials.password)
            .ok_or(gateways::Error::Unauthorized)?;
        let token = format!("token-{}", user.id);
        *self.token.borrow_mut() = Some(token.clone());
        *self.current_user.borrow_mut() = Some(user.clone());
        Ok(token)
    }

    fn register(&self, registration: &Registration) -> GatewayResult<User> {
        self.ensure_online()?;
        if self
            .users
            .borrow()
            .iter()
            .any(|(u, _)| u.email == registration.email)
        {
            return Err(gateways::Error::Rejected("Email already registered".into()));
        }
        let user = User {
            id: format!("u{}", self.users.borrow().len() + 1).into(),
            first_name: registration.first_name.clone(),
            last_name: registration.last_name.clone(),
            email: registration.email.clone(),
            phone_number: None,
            home_location: None,
        };
        self.users
            .borrow_mut()
            .push((user.clone(), registration.password.clone()));
        Ok(user)
    }
}

impl UserGateway for MockApi {
    fn current_user(&self) -> GatewayResult<User> {
        self.guest()
    }

    fn user(&self, id: &Id) -> GatewayResult<User> {
        self.guest().and_then(|u| {
            if &u.id == id {
                Ok(u)
            } else {
                Err(gateways::Error::NotFound)
            }
        })
    }

    fn update_profile(&self, id: &Id, update: &UserProfileUpdate) -> GatewayResult<User> {
        let mut current = self.current_user.borrow_mut();
        let user = current
            .as_mut()
            .filter(|u| &u.id == id)
            .ok_or(gateways::Error::Unauthorized)?;
        user.first_name = update.first_name.clone();
        user.last_name = update.last_name.clone();
        user.phone_number = update.phone_number.clone();
        user.home_location = update.home_location.clone();
        Ok(user.clone())
    }
}

impl PlaceGateway for MockApi {
    fn places(&self) -> GatewayResult<Vec<Place>> {
        self.ensure_online()?;
        *self.place_requests.borrow_mut() += 1;
        Ok(self.places.borrow().clone())
    }

    fn place(&self, id: &Id) -> GatewayResult<Place> {
        self.ensure_online()?;
        *self.place_requests.borrow_mut() += 1;
        self.places
            .borrow()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(gateways::Error::NotFound)
    }

    fn create_place(&self, new_place: &NewPlace) -> GatewayResult<Place> {
        let owner = self.guest()?;
        let place = Place {
            id: format!("p{}", self.places.borrow().len() + 1).into(),
            title: new_place.title.clone(),
            description: new_place.description.clone(),
            price: new_place.price,
            latitude: new_place.latitude,
            longitude: new_place.longitude,
            owner_id: owner.id,
            amenities: new_place.amenities.clone(),
            images: vec![],
        };
        self.places.borrow_mut().push(place.clone());
        Ok(place)
    }

    fn update_place(&self, id: &Id, update: &PlaceUpdate) -> GatewayResult<Place> {
        let mut places = self.places.borrow_mut();
        let place = places
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(gateways::Error::NotFound)?;
        place.title = update.title.clone();
        place.description = update.description.clone();
        place.price = update.price;
        Ok(place.clone())
    }

    fn delete_place(&self, id: &Id) -> GatewayResult<()> {
        let mut places = self.places.borrow_mut();
        let len = places.len();
        places.retain(|p| &p.id != id);
        if places.len() == len {
            return Err(gateways::Error::NotFound);
        }
        Ok(())
    }
}

impl ReviewGateway for MockApi {
    fn place_reviews(&self, place_id: &Id) -> GatewayResult<Vec<Review>> {
        self.ensure_online()?;
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| &r.place_id == place_id)
            .cloned()
            .collect())
    }

    fn create_review(&self, review: &NewReview) -> GatewayResult<Review> {
        let guest = self.guest()?;
        let review = Review {
            id: format!("r{}", self.reviews.borrow().len() + 1).into(),
            place_id: review.place_id.clone(),
            user_id: guest.id,
            rating: review.rating,
            text: review.text.clone(),
        };
        self.reviews.borrow_mut().push(review.clone());
        Ok(review)
    }
}

impl BookingGateway for MockApi {
    fn check_availability(&self, place_id: &Id, stay: &StayDates) -> GatewayResult<bool> {
        self.ensure_online()?;
        let taken = self.unavailable.borrow().iter().any(|s| s.overlaps(stay))
            || self.bookings.borrow().iter().any(|b| {
                &b.place_id == place_id && b.status.is_active() && b.stay.overlaps(stay)
            });
        Ok(!taken)
    }

    fn create_booking(&self, booking: &NewBooking) -> GatewayResult<Booking> {
        let guest = self.guest()?;
        let price = self
            .places
            .borrow()
            .iter()
            .find(|p| p.id == booking.place_id)
            .map(|p| p.price)
            .ok_or(gateways::Error::NotFound)?;
        let booking = Booking {
            id: format!("b{}", self.bookings.borrow().len() + 1).into(),
            place_id: booking.place_id.clone(),
            guest_id: guest.id,
            stay: booking.stay,
            status: BookingStatus::Pending,
            total_price: f64::from(booking.stay.nights()) * price,
            cancellation_deadline: None,
            can_cancel: true,
        };
        self.bookings.borrow_mut().push(booking.clone());
        Ok(booking)
    }

    fn my_bookings(&self, _: &BookingFilter) -> GatewayResult<Vec<Booking>> {
        let guest = self.guest()?;
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.guest_id == guest.id)
            .cloned()
            .collect())
    }

    fn booking(&self, id: &Id) -> GatewayResult<Booking> {
        self.bookings
            .borrow()
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or(gateways::Error::NotFound)
    }

    fn cancel_booking(&self, id: &Id) -> GatewayResult<Booking> {
        let mut bookings = self.bookings.borrow_mut();
        let booking = bookings
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or(gateways::Error::NotFound)?;
        booking.status = BookingStatus::Cancelled;
        booking.can_cancel = false;
        Ok(booking.clone())
    }

    fn confirm_booking(&self, id: &Id) -> GatewayResult<Booking> {
        let mut bookings = self.bookings.borrow_mut();
        let booking = bookings
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or(gateways::Error::NotFound)?;
        booking.status = BookingStatus::Confirmed;
        Ok(booking.clone())
    }

    fn place_bookings(&self, place_id: &Id) -> GatewayResult<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| &b.place_id == place_id)
            .cloned()
            .collect())
    }
}

impl PaymentGateway for MockApi {
    fn create_payment_intent(&self, place_id: &Id, stay: &StayDates) -> GatewayResult<PaymentIntent> {
        self.ensure_online()?;
        self.guest()?;
        let mut intents = self.payment_intents.borrow_mut();
        intents.push((place_id.clone(), *stay));
        Ok(PaymentIntent {
            client_secret: format!("pi_{}_secret", intents.len()),
            payment_intent_id: format!("pi_{}", intents.len()),
        })
    }
}

impl FavoritesStore for MockApi {
    fn load(&self) -> GatewayResult<Favorites> {
        Ok(self.favorites.borrow().clone())
    }

    fn save(&self, favorites: &Favorites) -> GatewayResult<()> {
        *self.favorites.borrow_mut() = favorites.clone();
        Ok(())
    }
}
