use super::*;
use crate::usecases::{load_profile, login, register, update_profile};

fn registration() -> Registration {
    Registration {
        first_name: " Jane ".into(),
        last_name: "Doe".into(),
        email: "Jane@Example.com ".into(),
        password: "Secret#123".into(),
    }
}

#[test]
fn register_and_login() {
    let api = MockApi::default();
    let token = register(&api, &registration()).unwrap();
    assert_eq!(token, "token-u1");
    let (user, _) = api.users.borrow()[0].clone();
    assert_eq!(user.first_name, "Jane");
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(api.current_user.borrow().as_ref(), Some(&user));
}

#[test]
fn register_with_weak_password() {
    let api = MockApi::default();
    let reg = Registration {
        password: "secret".into(),
        ..registration()
    };
    assert!(matches!(register(&api, &reg), Err(Error::Password)));
    assert!(api.users.borrow().is_empty());
}

#[test]
fn register_twice_is_rejected_by_backend() {
    let api = MockApi::default();
    register(&api, &registration()).unwrap();
    let err = register(&api, &registration()).unwrap_err();
    assert_eq!(err.to_string(), "Email already registered");
}

#[test]
fn login_with_wrong_password() {
    let api = MockApi::default();
    register(&api, &registration()).unwrap();
    let credentials = Credentials {
        email: "jane@example.com".into(),
        password: "Wrong#123".into(),
    };
    assert!(matches!(login(&api, &credentials), Err(Error::Credentials)));
    let credentials = Credentials {
        email: "not-an-email".into(),
        password: "Secret#123".into(),
    };
    assert!(matches!(login(&api, &credentials), Err(Error::Email)));
}

#[test]
fn login_while_offline() {
    let api = MockApi::default();
    *api.offline.borrow_mut() = true;
    let credentials = Credentials {
        email: "jane@example.com".into(),
        password: "Secret#123".into(),
    };
    assert!(matches!(login(&api, &credentials), Err(Error::Gateway(_))));
}

#[test]
fn edit_profile() {
    let api = MockApi::logged_in_as(user("u1"));
    let profile = load_profile(&api).unwrap();
    let update = UserProfileUpdate {
        first_name: "Janet".into(),
        phone_number: Some("  ".into()),
        home_location: Some(" Bolzano ".into()),
        ..UserProfileUpdate::from(&profile)
    };
    let updated = update_profile(&api, &profile.id, update).unwrap();
    assert_eq!(updated.full_name(), "Janet Doe");
    assert_eq!(updated.phone_number, None);
    assert_eq!(updated.home_location.as_deref(), Some("Bolzano"));

    let update = UserProfileUpdate {
        last_name: "".into(),
        ..UserProfileUpdate::from(&updated)
    };
    assert!(matches!(update_profile(&api, &profile.id, update), Err(Error::Name)));
}
