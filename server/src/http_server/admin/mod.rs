use chrono::{DateTime, Utc};
use maud::{html, Render};
use ::posts::date::format_posted_at;

pub(crate) mod posts;

/// `Jun 1, 2023` with the full timestamp in the hover title.
pub(crate) struct PostedDate(pub(crate) DateTime<Utc>);

impl Render for PostedDate {
    fn render(&self) -> maud::Markup {
        html! {
            span title=(self.0.to_rfc3339()) { (format_posted_at(self.0)) }
        }
    }
}
