//! Boscov Client Core
//!
//! DOM-free logic of the movie rating client:
//! - models: backend wire entities
//! - token / guard: bearer token inspection and route access decisions
//! - session: typed session store over a key-value storage
//! - cascade: sequential movie removal workflow
//! - linking: genre associations for a new movie
//! - rating / forms: display aggregation and typed form state

pub mod cascade;
pub mod endpoints;
pub mod error;
pub mod forms;
pub mod guard;
pub mod linking;
pub mod models;
pub mod rating;
pub mod session;
pub mod token;

pub use cascade::{remove_movie, CascadeReport, DeleteStep, FailurePolicy, MovieRemovalApi};
pub use error::{ApiError, CascadeError, StorageError, TokenError};
pub use guard::{GuardOutcome, GuardState, RoutePolicy, SessionSnapshot};
pub use linking::{link_genres, partial_link_message, LinkReport};
pub use models::{AgeRating, AuthResponse, Genre, GenreLink, Movie, Rating, Role, User};
pub use session::{KeyValueStorage, Session, SessionStore};
