use leptos::*;
use leptos_router::*;

use hbnb_entities::user::{Credentials, Registration};
use hbnb_frontend_api::{CachedPlaces, UserApi};

use crate::{components::*, Page};

#[component]
pub fn Login<F>(on_success: F) -> impl IntoView
where
    F: Fn(UserApi) + 'static + Clone,
{
    let public_api = expect_context::<CachedPlaces>().api().clone();
    let error = RwSignal::new(None::<String>);

    let login_action = create_action(move |credentials: &Credentials| {
        let credentials = Credentials {
            email: credentials.email.trim().to_lowercase(),
            password: credentials.password.clone(),
        };
        log::info!("Logging in with {email}", email = credentials.email);
        let public_api = public_api.clone();
        let on_success = on_success.clone();
        async move {
            match public_api.login(&credentials).await {
                Ok(api) => {
                    error.set(None);
                    on_success(api);
                }
                Err(err) => {
                    let msg = if err.is_unauthorized() {
                        "Invalid email or password".to_string()
                    } else {
                        err.to_string()
                    };
                    log::error!("Unable to login with {}: {msg}", credentials.email);
                    error.set(Some(msg));
                }
            }
        }
    });

    let disabled = Signal::derive(move || login_action.pending().get());

    view! {
      <section class="container py-12 px-6 mx-auto max-w-lg">
        <AccountForm
          title = "Welcome back"
          fields = AccountField::LOGIN
          submit_label = "Log in"
          on_submit = move |account: Registration| login_action.dispatch(Credentials::from(&account))
          error = error.into()
          disabled
        />
        <p class="mt-6 text-center text-gray-600">
          "Don't have an account? "
          <A href=Page::Register.path()>"Register"</A>
        </p>
      </section>
    }
}
