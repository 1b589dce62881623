use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{BlogId, CommentId, UserId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub body: String,
    pub writer_id: UserId,
    pub blog_id: BlogId,
    pub commented_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub body: String,
    pub writer_id: UserId,
    pub blog_id: BlogId,
    pub commented_date: DateTime<Utc>,
}

impl NewComment {
    pub fn with_id(self, id: CommentId) -> Comment {
        Comment {
            id,
            body: self.body,
            writer_id: self.writer_id,
            blog_id: self.blog_id,
            commented_date: self.commented_date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentFilter {
    pub writer_id: Option<UserId>,
    pub blog_id: Option<BlogId>,
}

impl CommentFilter {
    pub fn by_blog(blog_id: BlogId) -> Self {
        Self {
            blog_id: Some(blog_id),
            ..Self::default()
        }
    }

    pub fn by_writer(writer_id: UserId) -> Self {
        Self {
            writer_id: Some(writer_id),
            ..Self::default()
        }
    }
}
