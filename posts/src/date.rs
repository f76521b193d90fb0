use chrono::{DateTime, Utc};

pub trait PostedAt {
    fn posted_at(&self) -> DateTime<Utc>;
}

pub trait ByRecency {
    fn sort_by_recency(&mut self);
}

impl<T> ByRecency for Vec<T>
where
    T: PostedAt,
{
    fn sort_by_recency(&mut self) {
        self.sort_by_key(|item| std::cmp::Reverse(item.posted_at()));
    }
}

/// `Jun 1, 2023`-style rendering, always in English. Whatever offset the
/// parser yielded is used as-is; there is no timezone conversion here.
pub fn format_posted_at(posted_at: DateTime<Utc>) -> String {
    posted_at.format("%b %-d, %Y").to_string()
}
