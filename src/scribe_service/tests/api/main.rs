mod accounts;
mod blogs;
mod helpers;
mod users;
