mod account_form;
mod booking_form;
mod navbar;
mod place_card;
mod price_details;
mod review_form;
mod search_filters;

pub use self::{
    account_form::*, booking_form::*, navbar::*, place_card::*, price_details::*, review_form::*,
    search_filters::*,
};
