use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use hbnb_entities::{booking::BookingStatus, stay::parse_date};
use time::Date;

#[derive(Debug, Parser)]
#[command(name = "hbnb", version, about = "Book and host places on HBnB")]
pub struct Args {
    /// Configuration file (defaults to `hbnb.toml`)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Backend origin, e.g. `http://localhost:5000`
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and log in
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the session
    Logout,
    /// Show the logged in user
    Whoami,
    /// Search listings
    Places {
        /// Matches title or description
        #[arg(long)]
        text: Option<String>,
        #[arg(long, value_name = "PRICE")]
        min_price: Option<f64>,
        #[arg(long, value_name = "PRICE")]
        max_price: Option<f64>,
        /// Required amenity, may be repeated
        #[arg(long = "amenity", value_name = "NAME")]
        amenities: Vec<String>,
    },
    /// Show a place with its reviews
    Place { id: String },
    /// Check the availability and the price of a stay
    Quote {
        place_id: String,
        #[command(flatten)]
        stay: StayArgs,
    },
    /// Check the availability and prepare the payment
    Book {
        place_id: String,
        #[command(flatten)]
        stay: StayArgs,
    },
    /// Create the booking after the payment succeeded
    BookConfirm {
        place_id: String,
        #[command(flatten)]
        stay: StayArgs,
        #[arg(long, value_name = "ID")]
        payment_intent: String,
    },
    /// List my bookings
    Bookings {
        #[arg(long, conflicts_with = "past")]
        upcoming: bool,
        #[arg(long)]
        past: bool,
        #[arg(long, value_parser = parse_status)]
        status: Option<BookingStatus>,
    },
    /// Cancel one of my bookings
    Cancel { booking_id: String },
    /// Review a place after the stay
    Review {
        place_id: String,
        /// Stars from 1 to 5
        #[arg(long)]
        rating: u8,
        #[arg(long)]
        text: String,
    },
    /// List or toggle favorite places
    Favorites {
        #[command(subcommand)]
        command: Option<FavoritesCommand>,
    },
    /// Manage own listings and their bookings
    Host {
        #[command(subcommand)]
        command: HostCommand,
    },
    /// Show or edit the profile
    Profile(ProfileArgs),
}

#[derive(Debug, Clone, Copy, ClapArgs)]
pub struct StayArgs {
    /// Arrival (YYYY-MM-DD)
    #[arg(long, value_parser = parse_day)]
    pub check_in: Date,
    /// Departure (YYYY-MM-DD)
    #[arg(long, value_parser = parse_day)]
    pub check_out: Date,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// Add or remove a place
    Toggle { place_id: String },
}

#[derive(Debug, Subcommand)]
pub enum HostCommand {
    /// List own places
    Listings,
    /// Publish a new place
    Create(NewListingArgs),
    /// Edit title, description or price of a place
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
    },
    /// Delete a place
    Delete { id: String },
    /// Bookings of all own places
    Bookings,
    /// Confirm a pending booking
    Confirm { booking_id: String },
    /// Decline a booking
    Decline { booking_id: String },
}

#[derive(Debug, ClapArgs)]
pub struct NewListingArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    /// Price per night
    #[arg(long)]
    pub price: f64,
    /// One of the known locations, e.g. "Aspen, Colorado"
    #[arg(long, conflicts_with_all = ["latitude", "longitude"])]
    pub location: Option<String>,
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    pub latitude: Option<f64>,
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    pub longitude: Option<f64>,
    #[arg(long = "amenity", value_name = "NAME")]
    pub amenities: Vec<String>,
}

#[derive(Debug, ClapArgs)]
pub struct ProfileArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Home location
    #[arg(long)]
    pub home: Option<String>,
}

impl ProfileArgs {
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.home.is_none()
    }
}

fn parse_day(s: &str) -> Result<Date, String> {
    parse_date(s).map_err(|_| format!("'{s}' is not a date like 2025-12-24"))
}

fn parse_status(s: &str) -> Result<BookingStatus, String> {
    s.trim()
        .to_lowercase()
        .parse()
        .map_err(|_| format!("unknown booking status '{s}'"))
}
