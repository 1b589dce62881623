use bson::{Bson, Document, doc, oid::ObjectId};
use scribe_core::{Blog, BlogFilter, BlogId, NewBlog, RepositoryError, UserId};

use super::{date_field, object_id, string_field, to_bson_date};
use crate::{
    config::constants::collections,
    persistence::{
        document_repository::{DocumentMapping, DocumentRepository, FieldChanges},
        document_store::Query,
    },
};

pub type BlogDocumentRepository<C> = DocumentRepository<C, BlogMapping>;

pub struct BlogMapping;

impl DocumentMapping for BlogMapping {
    type Record = Blog;
    type Draft = NewBlog;
    type Filter = BlogFilter;
    type Id = BlogId;

    const COLLECTION: &'static str = collections::BLOGS;

    fn to_document(draft: &NewBlog) -> Document {
        doc! {
            "title": draft.title.as_str(),
            "body": draft.body.as_str(),
            "writer_id": draft.writer_id.as_str(),
            "status": draft.status.as_str(),
            "last_modified_date": to_bson_date(&draft.last_modified_date),
        }
    }

    fn with_id(draft: NewBlog, id: ObjectId) -> Blog {
        draft.with_id(BlogId::new(id.to_hex()))
    }

    fn from_document(document: &Document) -> Result<Blog, RepositoryError> {
        Ok(Blog {
            id: BlogId::new(object_id(document)?.to_hex()),
            title: string_field(document, "title"),
            body: string_field(document, "body"),
            writer_id: UserId::new(string_field(document, "writer_id")),
            status: string_field(document, "status"),
            last_modified_date: date_field(document, "last_modified_date"),
        })
    }

    fn record_id(record: &Blog) -> &BlogId {
        &record.id
    }

    fn to_query(filter: &BlogFilter) -> Query {
        let range = &filter.last_modified;
        Query::new()
            .equals_non_empty("status", filter.status.as_deref())
            .equals_non_empty("writer_id", filter.writer_id.as_ref().map(UserId::as_str))
            .range(
                "last_modified_date",
                range.start_date.as_ref().map(to_bson_date),
                range.end_date.as_ref().map(to_bson_date),
            )
    }

    fn diff(stored: &mut Blog, incoming: Blog, changes: &mut FieldChanges) {
        changes.apply("title", &mut stored.title, incoming.title);
        changes.apply("body", &mut stored.body, incoming.body);
        changes.apply_with(
            "writer_id",
            &mut stored.writer_id,
            incoming.writer_id,
            |id| Bson::String(id.to_string()),
        );
        changes.apply("status", &mut stored.status, incoming.status);
        changes.apply_with(
            "last_modified_date",
            &mut stored.last_modified_date,
            incoming.last_modified_date,
            to_bson_date,
        );
    }
}
