use maud::{html, Markup};

use crate::{
    db::entities::{artist, venue},
    forms::SeekingAnswer,
    services::queries::{ArtistSummary, VenueSummary},
};

use super::layout::base_layout;

pub const STATE_CHOICES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";

/// Field values shown in the venue form; empty for a new venue.
#[derive(Debug, Clone, Default)]
pub struct VenueFormValues {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub seeking_talent: SeekingAnswer,
    pub seeking_description: String,
    pub image_link: String,
    pub website: String,
    pub facebook_link: String,
}

impl VenueFormValues {
    pub fn from_model(venue: venue::Model, genres: Vec<String>) -> Self {
        Self {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address.unwrap_or_default(),
            phone: venue.phone.unwrap_or_default(),
            genres,
            seeking_talent: SeekingAnswer::from(venue.seeking_talent),
            seeking_description: venue.seeking_description.unwrap_or_default(),
            image_link: venue.image_link.unwrap_or_default(),
            website: venue.website.unwrap_or_default(),
            facebook_link: venue.facebook_link.unwrap_or_default(),
        }
    }
}

/// Field values shown in the artist form; empty for a new artist.
#[derive(Debug, Clone, Default)]
pub struct ArtistFormValues {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub seeking_venue: SeekingAnswer,
    pub seeking_description: String,
    pub image_link: String,
    pub website: String,
    pub facebook_link: String,
}

impl ArtistFormValues {
    pub fn from_model(artist: artist::Model, genres: Vec<String>) -> Self {
        Self {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone.unwrap_or_default(),
            genres,
            seeking_venue: SeekingAnswer::from(artist.seeking_venue),
            seeking_description: artist.seeking_description.unwrap_or_default(),
            image_link: artist.image_link.unwrap_or_default(),
            website: artist.website.unwrap_or_default(),
            facebook_link: artist.facebook_link.unwrap_or_default(),
        }
    }
}

pub fn venue_form_page(heading: &str, action: &str, values: &VenueFormValues, genre_choices: &[String]) -> Markup {
    base_layout(
        heading,
        None,
        html! {
            div class="max-w-3xl mx-auto bg-white rounded-lg shadow-sm p-6" {
                h1 class="text-2xl font-bold text-gray-900 mb-6" { (heading) }
                form method="post" action=(action) class="space-y-4" {
                    (text_field("name", "Name", &values.name, true))
                    (text_field("city", "City", &values.city, true))
                    (state_select(&values.state))
                    (text_field("address", "Address", &values.address, false))
                    (text_field("phone", "Phone", &values.phone, false))
                    (genre_select(genre_choices, &values.genres))
                    (text_field("image_link", "Image link", &values.image_link, false))
                    (text_field("website", "Website", &values.website, false))
                    (text_field("facebook_link", "Facebook link", &values.facebook_link, false))
                    (seeking_select("seeking_talent", "Looking for talent?", values.seeking_talent))
                    (text_field("seeking_description", "Seeking description", &values.seeking_description, false))
                    (submit_button("Save venue"))
                }
            }
        },
    )
}

pub fn artist_form_page(heading: &str, action: &str, values: &ArtistFormValues, genre_choices: &[String]) -> Markup {
    base_layout(
        heading,
        None,
        html! {
            div class="max-w-3xl mx-auto bg-white rounded-lg shadow-sm p-6" {
                h1 class="text-2xl font-bold text-gray-900 mb-6" { (heading) }
                form method="post" action=(action) class="space-y-4" {
                    (text_field("name", "Name", &values.name, true))
                    (text_field("city", "City", &values.city, true))
                    (state_select(&values.state))
                    (text_field("phone", "Phone", &values.phone, false))
                    (genre_select(genre_choices, &values.genres))
                    (text_field("image_link", "Image link", &values.image_link, false))
                    (text_field("website", "Website", &values.website, false))
                    (text_field("facebook_link", "Facebook link", &values.facebook_link, false))
                    (seeking_select("seeking_venue", "Looking for venues?", values.seeking_venue))
                    (text_field("seeking_description", "Seeking description", &values.seeking_description, false))
                    (submit_button("Save artist"))
                }
            }
        },
    )
}

pub fn show_form_page(artists: &[ArtistSummary], venues: &[VenueSummary]) -> Markup {
    base_layout(
        "List a new show",
        None,
        html! {
            div class="max-w-3xl mx-auto bg-white rounded-lg shadow-sm p-6" {
                h1 class="text-2xl font-bold text-gray-900 mb-6" { "List a new show" }
                form method="post" action="/shows/create" class="space-y-4" {
                    div {
                        label for="artist_id" class="block text-sm font-medium text-gray-700 mb-2" { "Artist" }
                        select id="artist_id" name="artist_id" class=(INPUT_CLASS) required {
                            @for artist in artists {
                                option value=(artist.id) { (artist.name) " (#" (artist.id) ")" }
                            }
                        }
                    }
                    div {
                        label for="venue_id" class="block text-sm font-medium text-gray-700 mb-2" { "Venue" }
                        select id="venue_id" name="venue_id" class=(INPUT_CLASS) required {
                            @for venue in venues {
                                option value=(venue.id) { (venue.name) " (#" (venue.id) ")" }
                            }
                        }
                    }
                    div {
                        label for="start_time" class="block text-sm font-medium text-gray-700 mb-2" { "Start time (UTC)" }
                        input id="start_time" type="datetime-local" name="start_time" class=(INPUT_CLASS) required;
                    }
                    (submit_button("Create show"))
                }
            }
        },
    )
}

fn text_field(name: &str, label: &str, value: &str, required: bool) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            input id=(name) type="text" name=(name) value=(value) class=(INPUT_CLASS) required[required];
        }
    }
}

fn state_select(current: &str) -> Markup {
    html! {
        div {
            label for="state" class="block text-sm font-medium text-gray-700 mb-2" { "State" }
            select id="state" name="state" class=(INPUT_CLASS) required {
                @for state in STATE_CHOICES {
                    option value=(state) selected[state == current] { (state) }
                }
            }
        }
    }
}

fn genre_select(choices: &[String], selected: &[String]) -> Markup {
    html! {
        div {
            label for="genres" class="block text-sm font-medium text-gray-700 mb-2" { "Genres" }
            select id="genres" name="genres" multiple class=(INPUT_CLASS) size="8" {
                @for genre in choices {
                    option value=(genre) selected[selected.contains(genre)] { (genre) }
                }
            }
        }
    }
}

fn seeking_select(name: &str, label: &str, answer: SeekingAnswer) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            select id=(name) name=(name) class=(INPUT_CLASS) {
                @for choice in [SeekingAnswer::Yes, SeekingAnswer::No] {
                    option value=(choice.as_str()) selected[choice == answer] { (choice.as_str()) }
                }
            }
        }
    }
}

fn submit_button(label: &str) -> Markup {
    html! {
        button type="submit" class="w-full bg-primary hover:bg-green-600 text-white font-semibold py-2 px-4 rounded-md transition" {
            (label)
        }
    }
}
