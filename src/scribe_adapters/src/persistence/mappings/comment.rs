use bson::{Bson, Document, doc, oid::ObjectId};
use scribe_core::{BlogId, Comment, CommentFilter, CommentId, NewComment, RepositoryError, UserId};

use super::{date_field, object_id, string_field, to_bson_date};
use crate::{
    config::constants::collections,
    persistence::{
        document_repository::{DocumentMapping, DocumentRepository, FieldChanges},
        document_store::Query,
    },
};

pub type CommentDocumentRepository<C> = DocumentRepository<C, CommentMapping>;

pub struct CommentMapping;

impl DocumentMapping for CommentMapping {
    type Record = Comment;
    type Draft = NewComment;
    type Filter = CommentFilter;
    type Id = CommentId;

    const COLLECTION: &'static str = collections::COMMENTS;

    fn to_document(draft: &NewComment) -> Document {
        doc! {
            "body": draft.body.as_str(),
            "writer_id": draft.writer_id.as_str(),
            "blog_id": draft.blog_id.as_str(),
            "commented_date": to_bson_date(&draft.commented_date),
        }
    }

    fn with_id(draft: NewComment, id: ObjectId) -> Comment {
        draft.with_id(CommentId::new(id.to_hex()))
    }

    fn from_document(document: &Document) -> Result<Comment, RepositoryError> {
        Ok(Comment {
            id: CommentId::new(object_id(document)?.to_hex()),
            body: string_field(document, "body"),
            writer_id: UserId::new(string_field(document, "writer_id")),
            blog_id: BlogId::new(string_field(document, "blog_id")),
            commented_date: date_field(document, "commented_date"),
        })
    }

    fn record_id(record: &Comment) -> &CommentId {
        &record.id
    }

    fn to_query(filter: &CommentFilter) -> Query {
        Query::new()
            .equals_non_empty("blog_id", filter.blog_id.as_ref().map(BlogId::as_str))
            .equals_non_empty("writer_id", filter.writer_id.as_ref().map(UserId::as_str))
    }

    /// A comment stays under the blog it was posted to.
    fn diff(stored: &mut Comment, incoming: Comment, changes: &mut FieldChanges) {
        changes.apply("body", &mut stored.body, incoming.body);
        changes.apply_with(
            "writer_id",
            &mut stored.writer_id,
            incoming.writer_id,
            |id| Bson::String(id.to_string()),
        );
        changes.apply_with(
            "commented_date",
            &mut stored.commented_date,
            incoming.commented_date,
            to_bson_date,
        );
    }
}
