pub mod discover;
pub mod home;
pub mod how_it_works;
pub mod not_found;
