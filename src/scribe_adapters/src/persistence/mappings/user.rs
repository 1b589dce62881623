use bson::{Document, doc, oid::ObjectId};
use scribe_core::{Email, NewUser, RepositoryError, User, UserFilter, UserId};
use secrecy::{ExposeSecret, Secret};

use super::{bool_field, object_id, string_field};
use crate::{
    config::constants::collections,
    persistence::{
        document_repository::{DocumentMapping, DocumentRepository, FieldChanges},
        document_store::Query,
    },
};

pub type UserDocumentRepository<C> = DocumentRepository<C, UserMapping>;

pub struct UserMapping;

impl DocumentMapping for UserMapping {
    type Record = User;
    type Draft = NewUser;
    type Filter = UserFilter;
    type Id = UserId;

    const COLLECTION: &'static str = collections::USERS;
    const UNIQUE_FIELDS: &'static [&'static str] = &["email", "telegram_username", "phone_number"];

    fn to_document(draft: &NewUser) -> Document {
        doc! {
            "email": draft.email.as_str(),
            "password": draft.password_hash.expose_secret().as_str(),
            "telegram_username": draft.telegram_username.as_str(),
            "first_name": draft.first_name.as_str(),
            "last_name": draft.last_name.as_str(),
            "phone_number": draft.phone_number.as_str(),
            "is_active": draft.is_active,
            "is_admin": draft.is_admin,
        }
    }

    fn with_id(draft: NewUser, id: ObjectId) -> User {
        draft.with_id(UserId::new(id.to_hex()))
    }

    fn from_document(document: &Document) -> Result<User, RepositoryError> {
        let email = Email::parse(string_field(document, "email"))
            .map_err(|e| RepositoryError::Unexpected(e.to_string()))?;

        Ok(User {
            id: UserId::new(object_id(document)?.to_hex()),
            email,
            password_hash: Secret::new(string_field(document, "password")),
            telegram_username: string_field(document, "telegram_username"),
            first_name: string_field(document, "first_name"),
            last_name: string_field(document, "last_name"),
            phone_number: string_field(document, "phone_number"),
            is_active: bool_field(document, "is_active"),
            is_admin: bool_field(document, "is_admin"),
        })
    }

    fn record_id(record: &User) -> &UserId {
        &record.id
    }

    fn to_query(filter: &UserFilter) -> Query {
        Query::new()
            .equals_non_empty("email", filter.email.as_ref().map(Email::as_str))
            .equals_non_empty("telegram_username", filter.telegram_username.as_deref())
            .equals_non_empty("phone_number", filter.phone_number.as_deref())
    }

    /// Email is the identity key and never changes here.
    fn diff(stored: &mut User, incoming: User, changes: &mut FieldChanges) {
        changes.apply(
            "telegram_username",
            &mut stored.telegram_username,
            incoming.telegram_username,
        );
        changes.apply("first_name", &mut stored.first_name, incoming.first_name);
        changes.apply("last_name", &mut stored.last_name, incoming.last_name);
        changes.apply(
            "phone_number",
            &mut stored.phone_number,
            incoming.phone_number,
        );

        let mut password_hash = stored.password_hash.expose_secret().clone();
        changes.apply(
            "password",
            &mut password_hash,
            incoming.password_hash.expose_secret().clone(),
        );
        stored.password_hash = Secret::new(password_hash);

        changes.apply_flag("is_active", &mut stored.is_active, incoming.is_active);
        changes.apply_flag("is_admin", &mut stored.is_admin, incoming.is_admin);
    }
}
