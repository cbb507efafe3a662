use std::fmt;

use chrono::{DateTime, Utc};

/// Display pattern for [`Post::timestamp`], e.g. `05 March 2024 14:30:00`.
pub const TIMESTAMP_FORMAT: &str = "%d %B %Y %H:%M:%S";

/// Identifier of a post, assigned by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(i64);

impl PostId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse a caller-supplied identifier.
    ///
    /// Returns `None` for anything that is not a base-10 integer, so a
    /// malformed id behaves like an unknown one.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(Self)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for PostId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Post entity - a single blog post.
///
/// `id` and `created_at` are assigned by the persistence layer and cannot be
/// changed afterwards. Only `title` and `body` are writable, through
/// [`NewPost`] and [`PostChanges`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl Post {
    /// Rebuild a stored post. Meant for persistence adapters only.
    pub fn restore(
        id: PostId,
        title: String,
        body: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            body,
            created_at,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Creation time formatted for display, in UTC.
    pub fn timestamp(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Apply an allow-listed update. Returns `true` if anything changed.
    pub fn apply(&mut self, changes: PostChanges) -> bool {
        let mut changed = false;
        if let Some(title) = changes.title {
            changed |= self.title != title;
            self.title = title;
        }
        if let Some(body) = changes.body {
            changed |= self.body != body;
            self.body = body;
        }
        changed
    }
}

/// The externally settable fields of a post being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Partial update of a post. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl PostChanges {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post_at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Post {
        Post::restore(
            PostId::new(1),
            "Title".to_string(),
            "Body".to_string(),
            Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap(),
        )
    }

    #[test]
    fn test_timestamp_format() {
        let post = post_at(2024, 3, 5, 14, 30, 0);
        assert_eq!(post.timestamp(), "05 March 2024 14:30:00");
    }

    #[test]
    fn test_timestamp_zero_pads_fields() {
        let post = post_at(2023, 12, 1, 9, 5, 7);
        assert_eq!(post.timestamp(), "01 December 2023 09:05:07");
    }

    #[test]
    fn test_timestamp_is_deterministic() {
        let post = post_at(2024, 2, 29, 23, 59, 59);
        assert_eq!(post.timestamp(), post.timestamp());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(PostId::parse("42"), Some(PostId::new(42)));
        assert_eq!(PostId::parse(" 7 "), Some(PostId::new(7)));
        assert_eq!(PostId::parse("forty-two"), None);
        assert_eq!(PostId::parse(""), None);
        assert_eq!(PostId::parse("1.5"), None);
    }

    #[test]
    fn test_apply_only_touches_writable_fields() {
        let mut post = post_at(2024, 3, 5, 14, 30, 0);
        let created_at = post.created_at();

        let changed = post.apply(PostChanges::default().title("New title"));

        assert!(changed);
        assert_eq!(post.title(), "New title");
        assert_eq!(post.body(), "Body");
        assert_eq!(post.id(), PostId::new(1));
        assert_eq!(post.created_at(), created_at);
    }

    #[test]
    fn test_apply_without_changes() {
        let mut post = post_at(2024, 3, 5, 14, 30, 0);
        assert!(!post.apply(PostChanges::default()));
        assert!(!post.apply(PostChanges::default().body("Body")));
    }
}
