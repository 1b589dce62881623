mod blog;
mod comment;
mod user;

pub use blog::{BlogDocumentRepository, BlogMapping};
pub use comment::{CommentDocumentRepository, CommentMapping};
pub use user::{UserDocumentRepository, UserMapping};

use bson::{Bson, Document, oid::ObjectId};
use chrono::{DateTime, Utc};
use scribe_core::RepositoryError;

fn object_id(document: &Document) -> Result<ObjectId, RepositoryError> {
    document
        .get_object_id("_id")
        .map_err(|e| RepositoryError::Unexpected(format!("document without _id: {e}")))
}

/// Missing fields decode as empty, like the zero value they stand for.
fn string_field(document: &Document, field: &str) -> String {
    document.get_str(field).unwrap_or_default().to_owned()
}

fn bool_field(document: &Document, field: &str) -> bool {
    document.get_bool(field).unwrap_or_default()
}

fn date_field(document: &Document, field: &str) -> DateTime<Utc> {
    document
        .get_datetime(field)
        .map(|date| date.to_chrono())
        .unwrap_or_default()
}

fn to_bson_date(date: &DateTime<Utc>) -> Bson {
    Bson::DateTime(bson::DateTime::from_chrono(*date))
}
