use leptos::*;
use leptos_router::*;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime};

use hbnb_core::{favorites::Favorites, gateways::FavoritesStore, usecases::Checkout};
use hbnb_entities::{id::Id, user::User};
use hbnb_frontend_api as api;

mod components;
mod pages;
mod payments;
mod storage;

use components::*;
use pages::*;

const DEFAULT_API_URL: &str = "http://localhost:5000";

fn api_url() -> String {
    option_env!("HBNB_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

/// Local wall clock time of the browser.
pub fn now() -> PrimitiveDateTime {
    #[allow(clippy::cast_possible_truncation)]
    let offset = -(js_sys::Date::new_0().get_timezone_offset() as i64);
    let local = OffsetDateTime::now_utc() + Duration::minutes(offset);
    PrimitiveDateTime::new(local.date(), local.time())
}

pub fn today() -> Date {
    now().date()
}

/// Login state shared by all pages.
#[derive(Clone, Copy)]
pub struct Session {
    pub user_api: RwSignal<Option<api::UserApi>>,
    pub user: RwSignal<Option<User>>,
    expired: RwSignal<bool>,
}

impl Session {
    pub fn logout(self) {
        self.user_api.set(None);
        self.user.set(None);
    }

    pub fn user_id(self) -> Option<Id> {
        self.user.with(|u| u.as_ref().map(|u| u.id.clone()))
    }

    /// Message for a failed request.
    ///
    /// An expired token ends the session and leads to the login page.
    pub fn error_message(self, err: &api::Error) -> String {
        if *err == api::Error::TokenExpired {
            log::info!("Session expired");
            self.logout();
            self.expired.set(true);
        }
        err.to_string()
    }
}

#[component]
fn RedirectExpiredSession(session: Session) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move |_| {
        if session.expired.get() {
            session.expired.set(false);
            navigate(Page::Login.path(), NavigateOptions::default());
        }
    });
}

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let stored = storage::load_session();
    let session = Session {
        user_api: RwSignal::new(None::<api::UserApi>),
        user: RwSignal::new(stored.as_ref().and_then(|(_, user)| user.clone())),
        expired: RwSignal::new(false),
    };
    let logged_in = Signal::derive(move || session.user_api.with(Option::is_some));
    let favorites = RwSignal::new(
        storage::LocalFavorites
            .load()
            .unwrap_or_else(|_| Favorites::new()),
    );
    let favorites_count = Signal::derive(move || favorites.with(Favorites::len));
    let checkout = RwSignal::new(None::<Checkout>);

    // -- services -- //

    let public_api = api::PublicApi::new(api_url());
    provide_context(api::CachedPlaces::new(public_api));

    // -- actions -- //

    let fetch_user_info = Action::new(move |()| async move {
        let Some(api) = session.user_api.get_untracked() else {
            log::error!("Unable to fetch user info: not logged in");
            return;
        };
        match api.current_user().await {
            Ok(user) => {
                session.user.set(Some(user));
            }
            Err(err) => {
                log::error!("Unable to fetch user info: {err}");
                session.error_message(&err);
            }
        }
    });

    // -- callbacks -- //

    let on_logout = move || {
        log::info!("Logging out");
        session.logout();
        checkout.set(None);
    };

    let on_login = move |user_api: api::UserApi| {
        log::info!("Successfully logged in");
        session.user_api.set(Some(user_api));
        fetch_user_info.dispatch(());
        let navigate = use_navigate();
        navigate(Page::Home.path(), NavigateOptions::default());
    };

    // -- init API -- //

    if let Some((token, _)) = stored {
        session.user_api.set(Some(api::UserApi::new(api_url(), token)));
        fetch_user_info.dispatch(());
    }

    log::debug!("User is logged in: {}", logged_in.get_untracked());

    // -- effects -- //

    Effect::new(move |_| {
        log::debug!("API authorization state changed");
        if let Some(api) = session.user_api.get() {
            log::debug!("API is now authorized: save token in LocalStorage");
            storage::save_token(api.token());
        } else {
            log::debug!("API is no longer authorized: clear LocalStorage");
            storage::clear_session();
        }
    });

    Effect::new(move |_| {
        if let Some(user) = session.user.get() {
            storage::save_user(&user);
        }
    });

    view! {
      <Router>
        <RedirectExpiredSession session />
        <NavBar user = session.user.into() favorites_count on_logout />
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <Home favorites /> }
            />
            <Route
              path=format!("{}/:id", Page::Property.path())
              view=move || view! { <Property session favorites checkout /> }
            />
            <Route
              path=Page::Booking.path()
              view=move || view! { <BookingCheckout session checkout /> }
            />
            <Route
              path=Page::Trips.path()
              view=move || view! { <Trips session /> }
            />
            <Route
              path=Page::Favorites.path()
              view=move || view! { <FavoritePlaces favorites /> }
            />
            <Route
              path=Page::Host.path()
              view=move || view! { <Host session /> }
            />
            <Route
              path=Page::Profile.path()
              view=move || view! { <Profile session /> }
            />
            <Route
              path=Page::Login.path()
              view=move || view! { <Login on_success = on_login /> }
            />
            <Route
              path=Page::Register.path()
              view=move || view! { <Register on_success = on_login /> }
            />
            <Route
              path=Page::CancellationPolicy.path()
              view=CancellationPolicy
            />
          </Routes>
        </main>
      </Router>
    }
}
