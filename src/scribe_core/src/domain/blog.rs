use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{BlogId, UserId};

/// A blog post. `writer_id` is a weak reference to the author's user record.
///
/// `Default` is the all-unset record: empty strings and the epoch timestamp
/// are what the diff update treats as "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub body: String,
    pub writer_id: UserId,
    pub status: String,
    pub last_modified_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBlog {
    pub title: String,
    pub body: String,
    pub writer_id: UserId,
    pub status: String,
    pub last_modified_date: DateTime<Utc>,
}

impl NewBlog {
    pub fn with_id(self, id: BlogId) -> Blog {
        Blog {
            id,
            title: self.title,
            body: self.body,
            writer_id: self.writer_id,
            status: self.status,
            last_modified_date: self.last_modified_date,
        }
    }
}

/// Inclusive modification-date window. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn is_open(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

/// Sparse blog query; every unset field is left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogFilter {
    pub status: Option<String>,
    pub writer_id: Option<UserId>,
    pub last_modified: DateRange,
}

impl BlogFilter {
    pub fn by_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    pub fn by_writer(writer_id: UserId) -> Self {
        Self {
            writer_id: Some(writer_id),
            ..Self::default()
        }
    }

    pub fn modified_within(range: DateRange) -> Self {
        Self {
            last_modified: range,
            ..Self::default()
        }
    }
}
