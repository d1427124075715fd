use maud::{html, Markup};

use crate::services::queries::{ArtistDetail, ArtistSummary, SearchResults, ShowListing, VenueArea, VenueDetail};

use super::components::{
    artist_booking_card, delete_button, genre_tags, image_or_placeholder, search_box, seeking_banner,
    show_card, venue_booking_card,
};
use super::layout::base_layout;

pub fn home_page(notice: Option<&str>) -> Markup {
    base_layout(
        "Home",
        notice,
        html! {
            div class="text-center py-16" {
                h1 class="text-4xl font-bold text-gray-900" { "Fyyur" }
                p class="mt-4 text-lg text-gray-600" {
                    "Find venues to play at and artists to book."
                }
                div class="mt-8 flex justify-center gap-4" {
                    a href="/venues/create" class="bg-primary hover:bg-green-600 text-white font-semibold py-2 px-4 rounded-md" {
                        "Post a venue"
                    }
                    a href="/artists/create" class="bg-primary hover:bg-green-600 text-white font-semibold py-2 px-4 rounded-md" {
                        "Post an artist"
                    }
                    a href="/shows/create" class="bg-primary hover:bg-green-600 text-white font-semibold py-2 px-4 rounded-md" {
                        "Post a show"
                    }
                }
            }
        },
    )
}

pub fn venues_page(areas: &[VenueArea]) -> Markup {
    base_layout(
        "Venues",
        None,
        html! {
            (search_box("/venues/search", "Find a venue", ""))

            @if areas.is_empty() {
                (empty_state("No venues listed yet."))
            }

            @for area in areas {
                section class="mb-8" {
                    h2 class="text-xl font-bold text-gray-900 mb-3" { (area.city) ", " (area.state) }
                    ul class="space-y-2" {
                        @for venue in &area.venues {
                            li {
                                a href={(format!("/venues/{}", venue.id))}
                                    class="record-card flex justify-between bg-white rounded-lg shadow-sm p-3 transition" {
                                    span class="font-semibold text-gray-900" { (venue.name) }
                                    span class="text-sm text-gray-500" {
                                        (venue.num_upcoming_shows) " upcoming"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn artists_page(artists: &[ArtistSummary]) -> Markup {
    base_layout(
        "Artists",
        None,
        html! {
            (search_box("/artists/search", "Find an artist", ""))

            @if artists.is_empty() {
                (empty_state("No artists listed yet."))
            } @else {
                ul class="space-y-2" {
                    @for artist in artists {
                        li {
                            a href={(format!("/artists/{}", artist.id))}
                                class="record-card block bg-white rounded-lg shadow-sm p-3 font-semibold text-gray-900 transition" {
                                (artist.name)
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn shows_page(shows: &[ShowListing]) -> Markup {
    base_layout(
        "Shows",
        None,
        html! {
            @if shows.is_empty() {
                (empty_state("No shows booked yet."))
            } @else {
                div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6" {
                    @for show in shows {
                        (show_card(show))
                    }
                }
            }
        },
    )
}

/// Search results for venues (`base` = `/venues`) or artists (`/artists`).
pub fn search_results_page(base: &str, term: &str, results: &SearchResults) -> Markup {
    let placeholder = if base == "/venues" { "Find a venue" } else { "Find an artist" };

    base_layout(
        "Search",
        None,
        html! {
            (search_box(&format!("{}/search", base), placeholder, term))

            h2 class="text-lg text-gray-700 mb-4" {
                "Number of search results for \"" (term) "\": " (results.count)
            }

            ul class="space-y-2" {
                @for hit in &results.data {
                    li {
                        a href={(format!("{}/{}", base, hit.id))}
                            class="record-card flex justify-between bg-white rounded-lg shadow-sm p-3 transition" {
                            span class="font-semibold text-gray-900" { (hit.name) }
                            @if let Some(upcoming) = hit.num_upcoming_shows {
                                span class="text-sm text-gray-500" { (upcoming) " upcoming" }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_detail_page(venue: &VenueDetail, notice: Option<&str>) -> Markup {
    let edit_url = format!("/venues/{}/edit", venue.id);
    let delete_url = format!("/venues/{}/delete", venue.id);

    base_layout(
        &venue.name,
        notice,
        html! {
            div class="bg-white rounded-lg shadow-sm p-6 mb-8" {
                div class="flex flex-col md:flex-row gap-6" {
                    img src=(image_or_placeholder(venue.image_link.as_deref())) alt=(venue.name)
                        class="w-full md:w-64 h-64 rounded-lg object-cover";

                    div class="flex-1 space-y-3" {
                        p class="text-sm text-gray-500" { "ID: " (venue.id) }
                        h1 class="text-3xl font-bold text-gray-900" { (venue.name) }
                        (genre_tags(&venue.genres))

                        @if let Some(address) = &venue.address {
                            p class="text-gray-700" { (address) }
                        }
                        p class="text-gray-700" { (venue.city) ", " (venue.state) }
                        @if let Some(phone) = &venue.phone {
                            p class="text-gray-700" { (phone) }
                        }
                        (links(venue.website.as_deref(), venue.facebook_link.as_deref()))
                        (seeking_banner(venue.seeking_talent, "Seeking talent", venue.seeking_description.as_deref()))

                        div class="flex gap-3 pt-2" {
                            a href=(edit_url) class="px-4 py-2 bg-gray-200 hover:bg-gray-300 text-gray-800 font-semibold rounded-md" {
                                "Edit"
                            }
                            (delete_button(&delete_url, "Delete"))
                        }
                    }
                }
            }

            (schedule_section(
                "Upcoming shows",
                venue.shows.upcoming_count(),
                html! { @for booking in &venue.shows.upcoming { (artist_booking_card(booking)) } },
            ))
            (schedule_section(
                "Past shows",
                venue.shows.past_count(),
                html! { @for booking in &venue.shows.past { (artist_booking_card(booking)) } },
            ))
        },
    )
}

pub fn artist_detail_page(artist: &ArtistDetail, notice: Option<&str>) -> Markup {
    let edit_url = format!("/artists/{}/edit", artist.id);
    let delete_url = format!("/artists/{}/delete", artist.id);

    base_layout(
        &artist.name,
        notice,
        html! {
            div class="bg-white rounded-lg shadow-sm p-6 mb-8" {
                div class="flex flex-col md:flex-row gap-6" {
                    img src=(image_or_placeholder(artist.image_link.as_deref())) alt=(artist.name)
                        class="w-full md:w-64 h-64 rounded-lg object-cover";

                    div class="flex-1 space-y-3" {
                        p class="text-sm text-gray-500" { "ID: " (artist.id) }
                        h1 class="text-3xl font-bold text-gray-900" { (artist.name) }
                        (genre_tags(&artist.genres))

                        p class="text-gray-700" { (artist.city) ", " (artist.state) }
                        @if let Some(phone) = &artist.phone {
                            p class="text-gray-700" { (phone) }
                        }
                        (links(artist.website.as_deref(), artist.facebook_link.as_deref()))
                        (seeking_banner(artist.seeking_venue, "Seeking performance venues", artist.seeking_description.as_deref()))

                        div class="flex gap-3 pt-2" {
                            a href=(edit_url) class="px-4 py-2 bg-gray-200 hover:bg-gray-300 text-gray-800 font-semibold rounded-md" {
                                "Edit"
                            }
                            (delete_button(&delete_url, "Delete"))
                        }
                    }
                }
            }

            (schedule_section(
                "Upcoming shows",
                artist.shows.upcoming_count(),
                html! { @for booking in &artist.shows.upcoming { (venue_booking_card(booking)) } },
            ))
            (schedule_section(
                "Past shows",
                artist.shows.past_count(),
                html! { @for booking in &artist.shows.past { (venue_booking_card(booking)) } },
            ))
        },
    )
}

fn schedule_section(heading: &str, count: usize, cards: Markup) -> Markup {
    html! {
        section class="mb-8" {
            h2 class="text-xl font-bold text-gray-900 mb-3" { (count) " " (heading) }
            div class="grid grid-cols-1 md:grid-cols-2 gap-4" { (cards) }
        }
    }
}

fn links(website: Option<&str>, facebook_link: Option<&str>) -> Markup {
    html! {
        div class="flex gap-4 text-sm" {
            @if let Some(website) = website {
                a href=(website) class="text-primary hover:underline" target="_blank" rel="noopener" { "Website" }
            }
            @if let Some(facebook) = facebook_link {
                a href=(facebook) class="text-primary hover:underline" target="_blank" rel="noopener" { "Facebook" }
            }
        }
    }
}

fn empty_state(message: &str) -> Markup {
    html! {
        div class="text-center py-12" {
            p class="text-gray-600 text-lg" { (message) }
        }
    }
}
