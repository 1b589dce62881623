pub mod accounts;
pub mod blogs;
pub mod users;

pub use accounts::{forgot_password, login, refresh, reset_password};
pub use blogs::{
    create_blog, create_comment, delete_blog, get_blog, get_comment, list_blogs, list_comments,
    update_blog,
};
pub use users::{
    activate_user, create_user, deactivate_user, delete_user, demote_user, get_user, list_users,
    promote_user, update_user,
};
