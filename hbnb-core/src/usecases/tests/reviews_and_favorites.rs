use hbnb_entities::builders::*;
use time::macros::date;

use super::*;
use crate::{
    cache::PlaceCache,
    review::ReviewDraft,
    usecases::{get_place, get_place_details, load_favorite_places, submit_review, toggle_favorite},
};

fn draft() -> ReviewDraft {
    ReviewDraft {
        rating: 5,
        text: "Wonderful view and a very friendly host.".into(),
    }
}

#[test]
fn review_after_finished_stay() {
    let api = MockApi::logged_in_as(user("guest"));
    api.bookings.borrow_mut().push(
        Booking::build()
            .guest("guest")
            .place("chalet")
            .stay(date!(2025 - 12 - 20), date!(2025 - 12 - 25))
            .status(BookingStatus::Completed)
            .finish(),
    );
    let place_id = Id::from("chalet");

    assert!(matches!(
        submit_review(&api, &place_id, &draft(), date!(2025 - 12 - 22)),
        Err(Error::NotEligibleForReview)
    ));
    let review = submit_review(&api, &place_id, &draft(), date!(2025 - 12 - 26)).unwrap();
    assert_eq!(review.user_id.as_str(), "guest");
    assert!(matches!(
        submit_review(&api, &"elsewhere".into(), &draft(), date!(2025 - 12 - 26)),
        Err(Error::NotEligibleForReview)
    ));
}

#[test]
fn invalid_drafts_are_rejected_first() {
    let api = MockApi::default();
    let draft = ReviewDraft {
        rating: 5,
        text: "Meh".into(),
    };
    assert!(matches!(
        submit_review(&api, &"chalet".into(), &draft, date!(2025 - 12 - 26)),
        Err(Error::ReviewText)
    ));
    let draft = ReviewDraft {
        rating: 0,
        ..self::draft()
    };
    assert!(matches!(
        submit_review(&api, &"chalet".into(), &draft, date!(2025 - 12 - 26)),
        Err(Error::Rating)
    ));
}

#[test]
fn review_requires_login() {
    let api = MockApi::default();
    assert!(matches!(
        submit_review(&api, &"chalet".into(), &draft(), date!(2025 - 12 - 26)),
        Err(Error::Unauthorized)
    ));
}

#[test]
fn toggle_favorites() {
    let api = MockApi::default();
    api.places.borrow_mut().extend([
        Place::build().id("a").finish(),
        Place::build().id("b").finish(),
    ]);
    let mut cache = PlaceCache::new();
    assert!(load_favorite_places(&api, &api, &mut cache).unwrap().is_empty());
    assert_eq!(*api.place_requests.borrow(), 0);

    assert!(toggle_favorite(&api, &"b".into()).unwrap());
    let favorites = load_favorite_places(&api, &api, &mut cache).unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id.as_str(), "b");

    assert!(!toggle_favorite(&api, &"b".into()).unwrap());
    assert!(api.favorites.borrow().is_empty());
}

#[test]
fn cached_place_lookup() {
    let api = MockApi::default();
    api.places
        .borrow_mut()
        .push(Place::build().id("a").finish());
    let mut cache = PlaceCache::new();
    crate::usecases::load_places(&api, &mut cache, false).unwrap();
    crate::usecases::load_places(&api, &mut cache, false).unwrap();
    assert_eq!(*api.place_requests.borrow(), 1);

    assert!(get_place(&api, &mut cache, &"a".into()).unwrap().is_some());
    assert_eq!(*api.place_requests.borrow(), 1);
    assert!(get_place(&api, &mut cache, &"missing".into()).unwrap().is_none());
    assert_eq!(*api.place_requests.borrow(), 2);

    crate::usecases::load_places(&api, &mut cache, true).unwrap();
    assert_eq!(*api.place_requests.borrow(), 3);
}

#[test]
fn place_details_with_reviews() {
    let api = MockApi::default();
    api.places
        .borrow_mut()
        .push(Place::build().id("a").finish());
    api.reviews.borrow_mut().push(Review {
        id: "r1".into(),
        place_id: "a".into(),
        user_id: "u1".into(),
        rating: Rating::try_from(4).unwrap(),
        text: "Very nice stay".into(),
    });
    let mut cache = PlaceCache::new();
    let details = get_place_details(&api, &mut cache, &"a".into())
        .unwrap()
        .unwrap();
    assert_eq!(details.reviews.len(), 1);
    assert_eq!(details.average_rating(), Some(4.0));
}
