use anyhow::{anyhow, bail, Result};
use time::{Date, OffsetDateTime};

use hbnb_core::{
    availability::{AvailabilityState, BookingGate},
    bookings::{BookingFilter, BookingPeriod},
    cache::PlaceCache,
    cancellation::cancellation_deadline,
    entities::*,
    favorites::Favorites,
    host::{find_location_preset, LOCATION_PRESETS},
    review::ReviewDraft,
    search::{filter_places, PlaceFilter, PriceRange},
    usecases::{self, BookingPolicy},
};
use hbnb_gateways::{
    http::HttpApi,
    store::{JsonFileStore, Session},
};

use crate::{
    cli::{Command, FavoritesCommand, HostCommand, NewListingArgs, ProfileArgs, StayArgs},
    config::Config,
    render,
};

fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn today() -> Date {
    now().date()
}

/// Everything a command needs to talk to the backend.
pub struct Context {
    api: HttpApi,
    store: JsonFileStore,
    policy: BookingPolicy,
    cache: PlaceCache,
}

impl Context {
    pub fn try_new(cfg: &Config) -> Result<Self> {
        let api = HttpApi::try_new(&cfg.api.base_url, cfg.api.request_timeout)?;
        let store = JsonFileStore::try_new(&cfg.session.dir)?;
        log::debug!(
            "Using API {} and session store {}",
            cfg.api.base_url,
            store.path().display()
        );
        Ok(Self {
            api,
            store,
            policy: cfg.booking,
            cache: PlaceCache::new(),
        })
    }

    fn session(&self) -> Result<Session> {
        self.store
            .load_session()?
            .ok_or_else(|| anyhow!("You are not logged in. Run `hbnb login` first."))
    }

    /// API client that sends the token of the stored session.
    fn authorized(&self) -> Result<(HttpApi, Session)> {
        let session = self.session()?;
        let api = self.api.clone().with_token(&session.token);
        Ok((api, session))
    }

    fn remember(&self, token: String, api: &HttpApi) -> Result<User> {
        let user = usecases::load_profile(api)?;
        self.store.save_session(&Session {
            token,
            user: user.clone(),
        })?;
        Ok(user)
    }

    fn favorites(&self) -> Result<Favorites> {
        Ok(self.store.load_favorites()?)
    }

    fn place(&mut self, id: &Id) -> Result<Place> {
        usecases::get_place(&self.api, &mut self.cache, id)?
            .ok_or_else(|| anyhow!("Place {id} not found"))
    }

    /// Selects the dates and asks the backend whether they are free.
    fn checked_gate(&self, place_id: &Id, stay: StayArgs) -> Result<BookingGate> {
        let mut gate = BookingGate::new();
        gate.select_dates(Some(stay.check_in), Some(stay.check_out));
        match usecases::check_availability(&self.api, &mut gate, place_id)? {
            AvailabilityState::Available => Ok(gate),
            _ => Err(usecases::Error::Unavailable.into()),
        }
    }
}

pub fn run(ctx: &mut Context, command: Command) -> Result<()> {
    let res = dispatch(ctx, command);
    if let Err(err) = &res {
        if matches!(
            err.downcast_ref::<usecases::Error>(),
            Some(usecases::Error::TokenExpired)
        ) {
            log::info!("Dropping expired session");
            ctx.store.clear_session()?;
        }
    }
    res
}

fn dispatch(ctx: &mut Context, command: Command) -> Result<()> {
    match command {
        Command::Login { email, password } => {
            let token = usecases::login(&ctx.api, &Credentials { email, password })?;
            let api = ctx.api.clone().with_token(&token);
            let user = ctx.remember(token, &api)?;
            println!("Logged in as {}", user.full_name());
        }
        Command::Register {
            first_name,
            last_name,
            email,
            password,
        } => {
            let registration = Registration {
                first_name,
                last_name,
                email,
                password,
            };
            let token = usecases::register(&ctx.api, &registration)?;
            let api = ctx.api.clone().with_token(&token);
            let user = ctx.remember(token, &api)?;
            println!("Welcome, {}!", user.full_name());
        }
        Command::Logout => {
            ctx.store.clear_session()?;
            println!("Logged out");
        }
        Command::Whoami => {
            let (api, session) = ctx.authorized()?;
            let user = ctx.remember(session.token, &api)?;
            println!("{}", render::user(&user));
        }
        Command::Places {
            text,
            min_price,
            max_price,
            amenities,
        } => {
            let filter = PlaceFilter {
                text: text.unwrap_or_default(),
                price: PriceRange {
                    min: min_price,
                    max: max_price,
                },
                amenities,
            };
            let favorites = ctx.favorites()?;
            let places = usecases::load_places(&ctx.api, &mut ctx.cache, false)?;
            let places = filter_places(places, &filter);
            if places.is_empty() {
                println!("No places found");
            }
            for place in &places {
                println!("{}", render::place_line(place, favorites.contains(place.id.as_str())));
            }
        }
        Command::Place { id } => {
            let id = Id::from(id);
            let details = usecases::get_place_details(&ctx.api, &mut ctx.cache, &id)?
                .ok_or_else(|| anyhow!("Place {id} not found"))?;
            let favorite = ctx.favorites()?.contains(id.as_str());
            println!("{}", render::place_details(&details, favorite));
        }
        Command::Quote { place_id, stay } => {
            let place = ctx.place(&place_id.into())?;
            let mut gate = ctx.checked_gate(&place.id, stay)?;
            let reservation = gate.reserve(place.price, &ctx.policy.fees)?;
            let deadline =
                cancellation_deadline(reservation.stay.check_in(), ctx.policy.check_in_time);
            println!("{} is available: {}", place.title, reservation.stay);
            println!("{}", render::price_breakdown(&reservation.price));
            println!("Free cancellation until {}", render::deadline(deadline));
        }
        Command::Book { place_id, stay } => {
            let (api, _) = ctx.authorized()?;
            let place = ctx.place(&place_id.into())?;
            let mut gate = ctx.checked_gate(&place.id, stay)?;
            let checkout = usecases::start_checkout(&api, &mut gate, &place, &ctx.policy)?;
            println!("{} {}", place.title, checkout.reservation.stay);
            println!("{}", render::price_breakdown(&checkout.reservation.price));
            println!(
                "Free cancellation until {}",
                render::deadline(checkout.free_cancellation_until)
            );
            println!("Payment client secret: {}", checkout.payment.client_secret);
            println!(
                "After paying run: hbnb book-confirm {} --check-in {} --check-out {} --payment-intent {}",
                place.id,
                format_date(checkout.reservation.stay.check_in()),
                format_date(checkout.reservation.stay.check_out()),
                checkout.payment.payment_intent_id,
            );
        }
        Command::BookConfirm {
            place_id,
            stay,
            payment_intent,
        } => {
            let (api, _) = ctx.authorized()?;
            let stay = StayDates::try_new(stay.check_in, stay.check_out)?;
            let booking =
                usecases::complete_booking(&api, &place_id.into(), stay, &payment_intent)?;
            println!("Booked {} ({}), status {}", booking.id, booking.stay, booking.status);
        }
        Command::Bookings {
            upcoming,
            past,
            status,
        } => {
            let (api, _) = ctx.authorized()?;
            let period = match (upcoming, past) {
                (true, _) => BookingPeriod::Upcoming,
                (_, true) => BookingPeriod::Past,
                _ => BookingPeriod::All,
            };
            let filter = BookingFilter { period, status };
            let bookings = usecases::my_bookings(&api, &filter, today())?;
            let stays = usecases::bookings_with_places(&api, &mut ctx.cache, bookings);
            if stays.is_empty() {
                println!("No bookings");
            }
            for stay in &stays {
                println!("{}", render::stay_with_place(stay));
            }
        }
        Command::Cancel { booking_id } => {
            let (api, _) = ctx.authorized()?;
            let booking = usecases::cancel_booking(&api, &booking_id.into())?;
            println!("Booking {} is {}", booking.id, booking.status);
        }
        Command::Review {
            place_id,
            rating,
            text,
        } => {
            let (api, _) = ctx.authorized()?;
            let draft = ReviewDraft { rating, text };
            let review = usecases::submit_review(&api, &place_id.into(), &draft, today())?;
            println!("Thanks for your review {}", render::stars(review.rating));
        }
        Command::Favorites { command } => favorites(ctx, command)?,
        Command::Host { command } => host(ctx, command)?,
        Command::Profile(args) => profile(ctx, args)?,
    }
    Ok(())
}

fn favorites(ctx: &mut Context, command: Option<FavoritesCommand>) -> Result<()> {
    match command {
        Some(FavoritesCommand::Toggle { place_id }) => {
            let place_id = Id::from(place_id);
            if usecases::toggle_favorite(&ctx.store, &place_id)? {
                println!("Added {place_id} to favorites");
            } else {
                println!("Removed {place_id} from favorites");
            }
        }
        None => {
            let places = usecases::load_favorite_places(&ctx.api, &ctx.store, &mut ctx.cache)?;
            if places.is_empty() {
                println!("No favorites yet");
            }
            for place in &places {
                println!("{}", render::place_line(place, true));
            }
        }
    }
    Ok(())
}

fn new_place(args: NewListingArgs) -> Result<NewPlace> {
    let NewListingArgs {
        title,
        description,
        price,
        location,
        latitude,
        longitude,
        amenities,
    } = args;
    let (latitude, longitude) = match (location, latitude, longitude) {
        (Some(label), _, _) => {
            let preset = find_location_preset(&label).ok_or_else(|| {
                let known: Vec<_> = LOCATION_PRESETS.iter().map(|p| p.label).collect();
                anyhow!("Unknown location '{label}', choose one of: {}", known.join("; "))
            })?;
            (preset.latitude, preset.longitude)
        }
        (None, Some(lat), Some(lng)) => (lat, lng),
        _ => bail!("Either a location or latitude and longitude are required"),
    };
    Ok(NewPlace {
        title,
        description,
        price,
        latitude,
        longitude,
        amenities,
    })
}

fn host(ctx: &mut Context, command: HostCommand) -> Result<()> {
    let (api, session) = ctx.authorized()?;
    let user_id = &session.user.id;
    match command {
        HostCommand::Listings => {
            let listings = usecases::host_listings(&api, &mut ctx.cache, user_id, true)?;
            if listings.is_empty() {
                println!("You have no listings yet");
            }
            for place in &listings {
                println!("{}", render::place_line(place, false));
            }
        }
        HostCommand::Create(args) => {
            let place = usecases::create_listing(&api, &mut ctx.cache, new_place(args)?)?;
            println!("Published {} ({})", place.title, place.id);
        }
        HostCommand::Update {
            id,
            title,
            description,
            price,
        } => {
            let id = Id::from(id);
            let place = ctx.place(&id)?;
            let current = PlaceUpdate::from(&place);
            let update = PlaceUpdate {
                title: title.unwrap_or(current.title),
                description: description.unwrap_or(current.description),
                price: price.unwrap_or(current.price),
            };
            let place = usecases::update_listing(&api, &mut ctx.cache, user_id, &id, update)?;
            println!("Updated {} ({})", place.title, place.id);
        }
        HostCommand::Delete { id } => {
            let id = Id::from(id);
            usecases::delete_listing(&api, &mut ctx.cache, user_id, &id)?;
            println!("Deleted {id}");
        }
        HostCommand::Bookings => {
            let incoming = usecases::incoming_bookings(&api, &mut ctx.cache, user_id)?;
            if incoming.is_empty() {
                println!("You have no listings yet");
            }
            for listing in &incoming {
                println!("{}", render::incoming_bookings(listing));
            }
        }
        HostCommand::Confirm { booking_id } => {
            let booking = usecases::confirm_incoming_booking(&api, user_id, &booking_id.into())?;
            println!("Booking {} is {}", booking.id, booking.status);
        }
        HostCommand::Decline { booking_id } => {
            let booking = usecases::decline_incoming_booking(&api, user_id, &booking_id.into())?;
            println!("Booking {} is {}", booking.id, booking.status);
        }
    }
    Ok(())
}

fn profile(ctx: &mut Context, args: ProfileArgs) -> Result<()> {
    let (api, session) = ctx.authorized()?;
    let user = if args.is_empty() {
        usecases::load_profile(&api)?
    } else {
        let current = UserProfileUpdate::from(&session.user);
        let ProfileArgs {
            first_name,
            last_name,
            phone,
            home,
        } = args;
        let update = UserProfileUpdate {
            first_name: first_name.unwrap_or(current.first_name),
            last_name: last_name.unwrap_or(current.last_name),
            phone_number: phone.or(current.phone_number),
            home_location: home.or(current.home_location),
        };
        usecases::update_profile(&api, &session.user.id, update)?
    };
    ctx.store.save_session(&Session {
        token: session.token,
        user: user.clone(),
    })?;
    println!("{}", render::user(&user));
    Ok(())
}
