use leptos::*;
use leptos_router::*;

use hbnb_core::util::validate::Validate;
use hbnb_entities::user::Registration;
use hbnb_frontend_api::{CachedPlaces, UserApi};

use crate::{components::*, Page};

#[component]
pub fn Register<F>(on_success: F) -> impl IntoView
where
    F: Fn(UserApi) + 'static + Clone,
{
    let public_api = expect_context::<CachedPlaces>().api().clone();
    let error = RwSignal::new(None::<String>);

    let register_action = create_action(move |registration: &Registration| {
        let registration = registration.clone();
        let public_api = public_api.clone();
        let on_success = on_success.clone();
        async move {
            match public_api.register(&registration).await {
                Ok((user, api)) => {
                    log::info!("Registered {}", user.email);
                    error.set(None);
                    on_success(api);
                }
                Err(err) => {
                    log::warn!("Unable to register: {err}");
                    error.set(Some(err.to_string()));
                }
            }
        }
    });

    let submit = move |r: Registration| {
        let r = Registration {
            first_name: r.first_name.trim().to_string(),
            last_name: r.last_name.trim().to_string(),
            email: r.email.trim().to_lowercase(),
            password: r.password,
        };
        match r.validate() {
            Ok(()) => register_action.dispatch(r),
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let disabled = Signal::derive(move || register_action.pending().get());

    view! {
      <section class="container py-12 px-6 mx-auto max-w-lg">
        <AccountForm
          title = "Create an account"
          fields = AccountField::REGISTER
          submit_label = "Register"
          on_submit = submit
          error = error.into()
          disabled
          hint = "At least 8 characters with upper and lower case letters, a digit and a special character."
        />
        <p class="mt-6 text-center text-gray-600">
          "Already have an account? "
          <A href=Page::Login.path()>"Log in"</A>
        </p>
      </section>
    }
}
