use axum::http::StatusCode;
use chrono::NaiveDateTime;
use maud::{html, Markup, PreEscaped};

use crate::services::queries::{ArtistBooking, ShowListing, VenueBooking};

use super::layout::base_layout;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300/1a1a1a/ffffff?text=No+Image";

/// How much of a show's start time to spell out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Sunday April, 1, 2035 at 8:00PM`
    Full,
    /// `Sun 04, 01, 2035 8:00PM`
    Medium,
}

pub fn format_datetime(value: NaiveDateTime, style: DateStyle) -> String {
    let pattern = match style {
        DateStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateStyle::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}

pub fn notification(message: &str, notification_type: &str) -> Markup {
    let (bg_color, text_color, icon) = match notification_type {
        "success" => ("bg-green-50", "text-green-800", "✓"),
        "error" => ("bg-red-50", "text-red-800", "✗"),
        "info" => ("bg-blue-50", "text-blue-800", "ℹ"),
        _ => ("bg-gray-50", "text-gray-800", "•"),
    };

    html! {
        div class={(format!("p-4 rounded-md {} {}", bg_color, text_color))} {
            div class="flex items-center" {
                span class="font-bold mr-2" { (icon) }
                span { (message) }
            }
        }
    }
}

pub fn search_box(action: &str, placeholder: &str, term: &str) -> Markup {
    html! {
        form method="post" action=(action) class="bg-white rounded-lg shadow-sm p-4 mb-6 flex gap-3" {
            input
                type="search"
                name="search_term"
                value=(term)
                placeholder=(placeholder)
                aria-label=(placeholder)
                class="flex-grow px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
            button type="submit" class="bg-primary hover:bg-green-600 text-white font-semibold py-2 px-4 rounded-md" {
                "Search"
            }
        }
    }
}

pub fn genre_tags(genres: &[String]) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" {
            @for genre in genres {
                span class="px-2 py-1 bg-gray-100 text-gray-700 text-sm rounded" { (genre) }
            }
        }
    }
}

pub fn seeking_banner(seeking: bool, seeking_text: &str, description: Option<&str>) -> Markup {
    html! {
        @if seeking {
            div class="p-4 rounded-md bg-green-50 text-green-800" {
                p class="font-semibold" { "✓ " (seeking_text) }
                @if let Some(description) = description {
                    p class="mt-1 text-sm" { (description) }
                }
            }
        } @else {
            p class="text-gray-500 text-sm" { "✗ Not currently " (seeking_text.to_lowercase()) }
        }
    }
}

/// A show on a venue page: who plays, and when.
pub fn artist_booking_card(booking: &ArtistBooking) -> Markup {
    booking_card(
        &format!("/artists/{}", booking.artist_id),
        &booking.artist_name,
        booking.artist_image_link.as_deref(),
        booking.start_time,
    )
}

/// A show on an artist page: where it is, and when.
pub fn venue_booking_card(booking: &VenueBooking) -> Markup {
    booking_card(
        &format!("/venues/{}", booking.venue_id),
        &booking.venue_name,
        booking.venue_image_link.as_deref(),
        booking.start_time,
    )
}

fn booking_card(href: &str, name: &str, image_link: Option<&str>, start_time: NaiveDateTime) -> Markup {
    html! {
        a href=(href) class="record-card flex items-center gap-4 bg-white rounded-lg shadow-sm p-3 transition" {
            img src=(image_link.unwrap_or(PLACEHOLDER_IMAGE)) alt=(name)
                class="w-16 h-16 rounded object-cover" loading="lazy";
            div {
                p class="font-semibold text-gray-900" { (name) }
                p class="text-sm text-gray-600" { (format_datetime(start_time, DateStyle::Full)) }
            }
        }
    }
}

pub fn show_card(show: &ShowListing) -> Markup {
    html! {
        div class="record-card bg-white rounded-lg shadow-md overflow-hidden transition" {
            img src=(show.artist_image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
                alt=(show.artist_name)
                class="w-full aspect-square object-cover" loading="lazy";
            div class="p-4" {
                p class="text-xs text-gray-500" { (format_datetime(show.start_time, DateStyle::Medium)) }
                a href={(format!("/artists/{}", show.artist_id))} class="font-semibold text-gray-900 hover:underline" {
                    (show.artist_name)
                }
                p class="text-sm text-gray-600" {
                    "playing at "
                    a href={(format!("/venues/{}", show.venue_id))} class="hover:underline" { (show.venue_name) }
                }
            }
        }
    }
}

/// Button that calls a delete route and follows the `url` it answers with.
pub fn delete_button(delete_url: &str, label: &str) -> Markup {
    html! {
        button
            type="button"
            class="px-4 py-2 bg-red-500 hover:bg-red-600 text-white font-semibold rounded-md"
            data-delete-url=(delete_url)
            onclick="deleteRecord(this)" {
            (label)
        }
        script {
            (PreEscaped(r#"
            function deleteRecord(button) {
                fetch(button.dataset.deleteUrl)
                    .then(response => response.json())
                    .then(body => { if (body.deleted) { window.location.href = body.url; } })
                    .catch(() => { window.location.href = '/'; });
            }
            "#))
        }
    }
}

pub fn image_or_placeholder(image_link: Option<&str>) -> &str {
    image_link.unwrap_or(PLACEHOLDER_IMAGE)
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let heading = match status {
        StatusCode::NOT_FOUND => "Page not found",
        StatusCode::BAD_REQUEST => "Invalid submission",
        _ => "Something went wrong",
    };

    base_layout(
        heading,
        None,
        html! {
            div class="max-w-xl mx-auto text-center py-16" {
                p class="text-6xl font-bold text-gray-300" { (status.as_u16()) }
                h1 class="mt-4 text-2xl font-bold text-gray-900" { (heading) }
                p class="mt-2 text-gray-600" { (message) }
                a href="/" class="inline-block mt-6 text-primary hover:underline" { "Back to home" }
            }
        },
    )
}
