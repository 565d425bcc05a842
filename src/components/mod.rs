//! UI Components
//!
//! Reusable Leptos components.

mod app_shell;
mod comments;
mod delete_confirm_button;
mod header;
mod header_menu;
mod logout_modal;
mod movie_card;
mod movie_details;
mod movie_fields;
mod movie_grid;
mod movie_modals;
mod notice;
mod protected_route;
mod rating_modal;
mod sidebar;
mod stars;

pub use app_shell::AppShell;
pub use comments::Comments;
pub use delete_confirm_button::DeleteConfirmButton;
pub use header::Header;
pub use header_menu::HeaderMenu;
pub use logout_modal::LogoutModal;
pub use movie_card::{DeactivatedMovieCard, MovieCard};
pub use movie_details::MovieDetails;
pub use movie_fields::MovieFields;
pub use movie_grid::{load_catalog, MovieGrid};
pub use movie_modals::{CreateMovieModal, EditMovieModal};
pub use notice::NoticeOverlay;
pub use protected_route::ProtectedRoute;
pub use rating_modal::{EditRatingModal, RatingModal};
pub use sidebar::Sidebar;
pub use stars::{StarPicker, Stars};
