//! Backend Endpoints
//!
//! Relative paths of the REST API. Some routes take ids as custom headers
//! instead of path segments; the header names are listed here too.

pub const AUTHENTICATE: &str = "/autenticacao";
pub const USER: &str = "/usuario";
pub const USERS: &str = "/usuarios";
pub const MOVIE: &str = "/filme";
pub const MOVIES: &str = "/filmes";
pub const DEACTIVATED_MOVIES: &str = "/desativados/filmes";
pub const RATING: &str = "/avaliacao";
pub const GENRES: &str = "/generos";
pub const GENRE_LINK: &str = "/genero_filme";

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_USER_ID: &str = "idusuario";
pub const HEADER_MOVIE_ID: &str = "idfilme";
pub const HEADER_GENRE_ID: &str = "idgenero";

pub const JSON: &str = "application/json";

/// `Authorization` header value
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

// ========================
// Users
// ========================

pub fn user(id: u32) -> String {
    format!("{}/{}", USER, id)
}

/// Soft-delete toggle: deactivates an active user, reactivates an inactive one
pub fn user_delete(id: u32) -> String {
    format!("{}/{}/delete", USER, id)
}

// ========================
// Movies
// ========================

pub fn movie(id: u32) -> String {
    format!("{}/{}", MOVIE, id)
}

pub fn movie_delete(id: u32) -> String {
    format!("{}/{}/delete", MOVIE, id)
}

// ========================
// Ratings
// ========================

pub fn ratings_by_user(user_id: u32) -> String {
    format!("/avaliacoes/usuario/{}", user_id)
}

pub fn ratings_by_movie(movie_id: u32) -> String {
    format!("/avaliacoes/filme/{}", movie_id)
}

pub fn average_by_movie(movie_id: u32) -> String {
    format!("/avaliacoes/media/filme/{}", movie_id)
}

pub fn rating(id: u32) -> String {
    format!("{}/{}", RATING, id)
}

pub fn rating_delete(id: u32) -> String {
    format!("{}/{}/delete", RATING, id)
}

// ========================
// Genres
// ========================

/// Genres of a movie
pub fn genres_by_movie(movie_id: u32) -> String {
    format!("{}/generos/{}", GENRE_LINK, movie_id)
}

/// Association rows of a movie
pub fn genre_links_by_movie(movie_id: u32) -> String {
    format!("{}/all/{}", GENRE_LINK, movie_id)
}

pub fn genre_link_delete(id: u32) -> String {
    format!("{}/{}/delete", GENRE_LINK, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(user_delete(2), "/usuario/2/delete");
        assert_eq!(movie(5), "/filme/5");
        assert_eq!(movie_delete(5), "/filme/5/delete");
        assert_eq!(ratings_by_movie(5), "/avaliacoes/filme/5");
        assert_eq!(average_by_movie(5), "/avaliacoes/media/filme/5");
        assert_eq!(rating_delete(8), "/avaliacao/8/delete");
        assert_eq!(genres_by_movie(5), "/genero_filme/generos/5");
        assert_eq!(genre_links_by_movie(5), "/genero_filme/all/5");
        assert_eq!(genre_link_delete(1), "/genero_filme/1/delete");
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
