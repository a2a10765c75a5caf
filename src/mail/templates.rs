//! Renders a form record into the subject and HTML body of the
//! notification email. All guest-supplied text goes through askama's HTML
//! escaping on its way into the markup.

use askama::Template;
use chrono::NaiveDate;

use crate::forms::record::{FormKind, FormRecord};

/// A ready-to-dispatch email.
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

#[derive(Template)]
#[template(path = "email/booking.html")]
struct BookingEmail {
    name: String,
    email: String,
    phone: Option<String>,
    checkin: String,
    checkout: String,
    nights: Option<i64>,
    guests: String,
    room: String,
    message: Option<String>,
}

#[derive(Template)]
#[template(path = "email/review.html")]
struct ReviewEmail {
    name: String,
    email: String,
    stars: String,
    recommend: String,
    cleanliness: String,
    service: String,
    comments: Option<String>,
    problems: Option<String>,
    improvements: Option<String>,
}

/// Whole nights between two `YYYY-MM-DD` calendar dates, both taken at UTC
/// midnight. `None` when either date fails to parse; ordering is not
/// checked here — a negative span is a formatting input like any other.
pub fn nights_between(checkin: &str, checkout: &str) -> Option<i64> {
    let checkin = NaiveDate::parse_from_str(checkin.trim(), "%Y-%m-%d").ok()?;
    let checkout = NaiveDate::parse_from_str(checkout.trim(), "%Y-%m-%d").ok()?;
    Some(checkout.signed_duration_since(checkin).num_days())
}

/// Fixed-width star strip: the satisfaction value (clamped to 0–5) as
/// filled glyphs, the remainder empty.
pub fn star_rating(satisfaction: &str) -> String {
    let filled = satisfaction.trim().parse::<usize>().unwrap_or(0).min(5);
    format!("{}{}", "⭐".repeat(filled), "☆".repeat(5 - filled))
}

/// Map a record to its subject line and HTML body.
pub fn render(kind: FormKind, record: &FormRecord) -> Result<RenderedEmail, askama::Error> {
    match kind {
        FormKind::Booking => {
            let name = record.field("name");
            let checkin = record.field("checkin");
            let checkout = record.field("checkout");
            let subject = format!("NEW BOOKING REQUEST: {name} ({checkin} - {checkout})");

            let body = BookingEmail {
                name: name.to_string(),
                email: record.field("email").to_string(),
                phone: record.optional("phone").map(str::to_string),
                checkin: checkin.to_string(),
                checkout: checkout.to_string(),
                nights: nights_between(checkin, checkout),
                guests: record.field("guests").to_string(),
                room: record
                    .optional("room")
                    .unwrap_or("No Preference")
                    .to_string(),
                message: record.optional("message").map(str::to_string),
            };
            Ok(RenderedEmail {
                subject,
                html: body.render()?,
            })
        }
        FormKind::Review => {
            let name = record.field("name");
            let satisfaction = record.field("satisfaction");
            let subject = format!("NEW GUEST REVIEW: {satisfaction} Stars by {name}");

            let body = ReviewEmail {
                name: name.to_string(),
                email: record.field("email").to_string(),
                stars: star_rating(satisfaction),
                recommend: record.field("recommend").to_uppercase(),
                cleanliness: record.field("cleanliness").to_string(),
                service: record.field("service").to_string(),
                comments: record.optional("comments").map(str::to_string),
                problems: record.optional("problems").map(str::to_string),
                improvements: record.optional("improvements").map(str::to_string),
            };
            Ok(RenderedEmail {
                subject,
                html: body.render()?,
            })
        }
    }
}
