use leptos::*;
use leptos_router::*;

use hbnb_entities::user::User;

use crate::Page;

/// Who gets to see a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Audience {
    Everyone,
    Guests,
    Members,
}

#[rustfmt::skip]
const LINKS: [(Page, &str, Audience); 7] = [
    (Page::Home,      "Stays",     Audience::Everyone),
    (Page::Favorites, "Favorites", Audience::Everyone),
    (Page::Trips,     "Trips",     Audience::Members),
    (Page::Host,      "Host",      Audience::Members),
    (Page::Profile,   "Profile",   Audience::Members),
    (Page::Login,     "Log in",    Audience::Guests),
    (Page::Register,  "Sign up",   Audience::Guests),
];

fn visible_links(logged_in: bool) -> impl Iterator<Item = (Page, &'static str)> {
    LINKS
        .into_iter()
        .filter(move |(_, _, audience)| match audience {
            Audience::Everyone => true,
            Audience::Guests => !logged_in,
            Audience::Members => logged_in,
        })
        .map(|(page, label, _)| (page, label))
}

#[component]
pub fn NavBar<F>(
    user: Signal<Option<User>>,
    favorites_count: Signal<usize>,
    on_logout: F,
) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    let logged_in = create_memo(move |_| user.with(Option::is_some));
    let greeting = move || {
        user.with(|u| {
            u.as_ref()
                .map(|u| format!("Hi, {}", u.first_name.trim()))
        })
    };

    let links = move || {
        visible_links(logged_in.get())
            .map(|(page, label)| {
                let badge = (page == Page::Favorites).then(|| {
                    move || {
                        let count = favorites_count.get();
                        (count > 0).then(|| view! {
                          <span class="ml-1 rounded-full bg-black px-2 text-xs text-white">{ count }</span>
                        })
                    }
                });
                view! {
                  <A href=page.path() class="hover:text-gray-600".to_string()>
                    { label }
                    { badge }
                  </A>
                }
            })
            .collect_view()
    };

    view! {
      <nav class="container mx-auto flex flex-wrap items-center gap-6 p-6">
        <A href=Page::Home.path() class="mr-auto text-xl font-bold".to_string()>"HBnB"</A>
        { links }
        {move || greeting().map(|greeting| view! {
          <span class="text-gray-500">{ greeting }</span>
          <button class="underline" on:click=move |_| on_logout()>"Log out"</button>
        })}
      </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(logged_in: bool) -> Vec<Page> {
        visible_links(logged_in).map(|(page, _)| page).collect()
    }

    #[test]
    fn guests_see_login_but_not_member_pages() {
        let pages = pages(false);
        assert!(pages.contains(&Page::Login));
        assert!(pages.contains(&Page::Favorites));
        assert!(!pages.contains(&Page::Trips));
        assert!(!pages.contains(&Page::Host));
    }

    #[test]
    fn members_see_trips_and_host() {
        let pages = pages(true);
        assert_eq!(
            pages,
            [Page::Home, Page::Favorites, Page::Trips, Page::Host, Page::Profile]
        );
    }
}
