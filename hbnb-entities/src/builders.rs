pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{booking_builder::*, place_builder::*};

pub mod place_builder {

    use super::*;
    use crate::place::*;

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.place.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.place.description = desc.into();
            self
        }
        pub fn price(mut self, price: f64) -> Self {
            self.place.price = price;
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.place.latitude = lat;
            self.place.longitude = lng;
            self
        }
        pub fn owner(mut self, owner_id: &str) -> Self {
            self.place.owner_id = owner_id.into();
            self
        }
        pub fn amenities(mut self, amenities: Vec<impl Into<String>>) -> Self {
            self.place.amenities = amenities.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn images(mut self, images: Vec<impl Into<String>>) -> Self {
            self.place.images = images.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place {
                    id: "place".into(),
                    title: "".into(),
                    description: "".into(),
                    price: 100.0,
                    latitude: 0.0,
                    longitude: 0.0,
                    owner_id: "owner".into(),
                    amenities: vec![],
                    images: vec![],
                },
            }
        }
    }
}

pub mod booking_builder {

    use super::*;
    use crate::{booking::*, stay::*};
    use time::{macros::date, Date, PrimitiveDateTime};

    #[derive(Debug)]
    pub struct BookingBuild {
        booking: Booking,
    }

    impl BookingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.booking.id = id.into();
            self
        }
        pub fn place(mut self, place_id: &str) -> Self {
            self.booking.place_id = place_id.into();
            self
        }
        pub fn guest(mut self, guest_id: &str) -> Self {
            self.booking.guest_id = guest_id.into();
            self
        }
        pub fn stay(mut self, check_in: Date, check_out: Date) -> Self {
            self.booking.stay = StayDates::try_new(check_in, check_out).unwrap();
            self
        }
        pub fn status(mut self, status: BookingStatus) -> Self {
            self.booking.status = status;
            self
        }
        pub fn total_price(mut self, total: f64) -> Self {
            self.booking.total_price = total;
            self
        }
        pub fn can_cancel(mut self, can_cancel: bool) -> Self {
            self.booking.can_cancel = can_cancel;
            self
        }
        pub fn deadline(mut self, deadline: Option<PrimitiveDateTime>) -> Self {
            self.booking.cancellation_deadline = deadline;
            self
        }
        pub fn finish(self) -> Booking {
            self.booking
        }
    }

    impl Builder for Booking {
        type Build = BookingBuild;
        fn build() -> BookingBuild {
            BookingBuild {
                booking: Booking {
                    id: "booking".into(),
                    place_id: "place".into(),
                    guest_id: "guest".into(),
                    stay: StayDates::try_new(date!(2025 - 12 - 20), date!(2025 - 12 - 25))
                        .unwrap(),
                    status: BookingStatus::Pending,
                    total_price: 0.0,
                    cancellation_deadline: None,
                    can_cancel: false,
                },
            }
        }
    }
}
