mod book_create;
mod form;
mod login;
mod search;

pub use book_create::BookCreate;
pub use login::Login;
pub use search::Search;
