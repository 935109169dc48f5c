use leptos::{ev, *};

use hbnb_entities::user::Registration;

const INPUT_CLASS: &str =
    "block w-full px-3 py-1.5 text-gray-700 bg-white border border-gray-300 rounded mb-4 focus:border-black focus:outline-none";

/// An input of the login and registration forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    FirstName,
    LastName,
    Email,
    Password,
}

impl AccountField {
    pub const LOGIN: &'static [Self] = &[Self::Email, Self::Password];
    pub const REGISTER: &'static [Self] =
        &[Self::FirstName, Self::LastName, Self::Email, Self::Password];

    const fn input_type(self) -> &'static str {
        match self {
            Self::FirstName | Self::LastName => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email address",
            Self::Password => "Password",
        }
    }

    const fn autocomplete(self) -> &'static str {
        match self {
            Self::FirstName => "given-name",
            Self::LastName => "family-name",
            Self::Email => "email",
            Self::Password => "current-password",
        }
    }

    fn value(self, account: &Registration) -> &str {
        match self {
            Self::FirstName => &account.first_name,
            Self::LastName => &account.last_name,
            Self::Email => &account.email,
            Self::Password => &account.password,
        }
    }

    fn set(self, account: &mut Registration, value: String) {
        match self {
            Self::FirstName => account.first_name = value,
            Self::LastName => account.last_name = value,
            Self::Email => account.email = value,
            Self::Password => account.password = value,
        }
    }
}

/// Every field of the form has been filled in.
fn is_complete(fields: &[AccountField], account: &Registration) -> bool {
    fields
        .iter()
        .all(|field| !field.value(account).trim().is_empty())
}

/// Form over a subset of the account fields.
///
/// Fields that are not shown stay empty in the submitted value.
#[component]
pub fn AccountForm(
    title: &'static str,
    fields: &'static [AccountField],
    submit_label: &'static str,
    #[prop(into)] on_submit: Callback<Registration>,
    error: Signal<Option<String>>,
    disabled: Signal<bool>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    let account = RwSignal::new(Registration::default());
    let submit_disabled =
        Signal::derive(move || disabled.get() || !account.with(|a| is_complete(fields, a)));

    let inputs = fields
        .iter()
        .map(|&field| {
            let on_input = move |event: ev::Event| {
                let value = event_target_value(&event);
                account.update(|a| field.set(a, value));
            };
            view! {
              <input
                class=INPUT_CLASS
                type=field.input_type()
                placeholder=field.label()
                autocomplete=field.autocomplete()
                required
                prop:disabled=move || disabled.get()
                on:input=on_input
                // autofill only fires `change`
                on:change=on_input
              />
            }
        })
        .collect_view();

    view! {
      <form on:submit=move |ev| {
        ev.prevent_default();
        if !submit_disabled.get_untracked() {
          on_submit.call(account.get_untracked());
        }
      }>
        <h4 class="text-xl font-semibold mb-8 text-center">{ title }</h4>
        {move || error.get().map(|err| view! { <p class="mb-4 text-red-700">{ err }</p> })}
        { inputs }
        {hint.map(|hint| view! { <p class="mb-4 text-xs text-gray-500">{ hint }</p> })}
        <button
          type="submit"
          class="w-full rounded bg-black px-4 py-2 text-white disabled:opacity-50"
          prop:disabled=move || submit_disabled.get()
        >
          { submit_label }
        </button>
      </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_needs_email_and_password_only() {
        let mut account = Registration::default();
        AccountField::Email.set(&mut account, "jane@example.com".into());
        assert!(!is_complete(AccountField::LOGIN, &account));
        AccountField::Password.set(&mut account, "Secret#123".into());
        assert!(is_complete(AccountField::LOGIN, &account));
        assert!(!is_complete(AccountField::REGISTER, &account));
    }

    #[test]
    fn blank_fields_are_missing() {
        let mut account = Registration::default();
        for field in AccountField::REGISTER {
            field.set(&mut account, "x".into());
        }
        assert!(is_complete(AccountField::REGISTER, &account));
        AccountField::LastName.set(&mut account, "  ".into());
        assert!(!is_complete(AccountField::REGISTER, &account));
        assert_eq!(AccountField::FirstName.value(&account), "x");
    }
}
