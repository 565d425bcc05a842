//! Wire Models
//!
//! Data structures matching the backend's JSON entities. Field names on the
//! wire are Portuguese; the Rust side uses descriptive English names.

use serde::{Deserialize, Serialize};

/// Account role, derived from the backend's `tipo_usuario` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    #[default]
    Regular,
}

impl Role {
    pub fn parse(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            _ => Role::Regular,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Regular => "comum",
        }
    }
}

/// Platform user (matches backend `usuario`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "data_nascimento", default)]
    pub birth_date: String,
    #[serde(rename = "apelido", default)]
    pub nickname: Option<String>,
    #[serde(rename = "tipo_usuario", default)]
    pub user_type: String,
    /// 1 = active, 0 = deactivated
    #[serde(default = "default_active")]
    pub status: i32,
}

fn default_active() -> i32 {
    1
}

impl User {
    pub fn role(&self) -> Role {
        Role::parse(&self.user_type)
    }

    pub fn is_active(&self) -> bool {
        self.status == 1
    }

    /// First letter of the name, used as avatar
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}

/// Age classification tiers accepted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeRating {
    #[default]
    General,
    Twelve,
    Fourteen,
    Sixteen,
    Eighteen,
}

impl AgeRating {
    pub const ALL: [AgeRating; 5] = [
        AgeRating::General,
        AgeRating::Twelve,
        AgeRating::Fourteen,
        AgeRating::Sixteen,
        AgeRating::Eighteen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeRating::General => "Livre",
            AgeRating::Twelve => "12+",
            AgeRating::Fourteen => "14+",
            AgeRating::Sixteen => "16+",
            AgeRating::Eighteen => "18+",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

/// Movie (matches backend `filme`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    #[serde(rename = "nome", default)]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "diretor", default)]
    pub director: String,
    #[serde(rename = "anoLancamento", default)]
    pub release_year: i32,
    #[serde(rename = "duracao", default)]
    pub duration_minutes: i32,
    #[serde(rename = "produtora", default)]
    pub studio: String,
    /// Kept as the raw tier string; see [`AgeRating::parse`]
    #[serde(rename = "classificacao", default)]
    pub age_rating: String,
    #[serde(rename = "poster", default)]
    pub poster_url: String,
    #[serde(rename = "generos", default)]
    pub genres: Vec<String>,
    /// Backend-provided aggregate, present on listing endpoints
    #[serde(rename = "avaliacao", default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub status: Option<i32>,
}

/// Author summary embedded in a rating
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingAuthor {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(rename = "nome", default)]
    pub name: String,
}

/// Star rating with optional comment (matches backend `avaliacao`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub id: u32,
    #[serde(rename = "idUsuario", default)]
    pub user_id: u32,
    #[serde(rename = "idFilme", default)]
    pub movie_id: u32,
    #[serde(rename = "nota", default)]
    pub score: f64,
    #[serde(rename = "comentario", default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub status: i32,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "usuario", default)]
    pub author: Option<RatingAuthor>,
}

impl Rating {
    /// Author id, falling back to the embedded user record
    pub fn author_id(&self) -> u32 {
        self.author
            .as_ref()
            .and_then(|a| a.id)
            .unwrap_or(self.user_id)
    }

    pub fn author_name(&self) -> &str {
        self.author.as_ref().map(|a| a.name.as_str()).unwrap_or("")
    }
}

/// Genre (matches backend `genero`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    #[serde(rename = "descricao", default)]
    pub description: String,
}

/// Movie-genre association row (matches backend `genero_filme`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenreLink {
    pub id: u32,
    #[serde(rename = "idGenero", default)]
    pub genre_id: u32,
    #[serde(rename = "idFilme", default)]
    pub movie_id: u32,
    #[serde(default)]
    pub status: Option<i32>,
}

/// Body returned by `POST /autenticacao`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "usuario")]
    pub user: User,
}

/// Body returned by `GET /avaliacoes/media/filme/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct AverageResponse {
    #[serde(rename = "mediaAvaliacao", default)]
    pub average: Option<f64>,
}

/// Error body some endpoints attach to non-2xx responses
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Format an ISO date (or datetime) as `dd/mm/yyyy`; unparseable input is returned unchanged
pub fn format_date_br(raw: &str) -> String {
    let day = raw.get(..10).unwrap_or(raw);
    match chrono::NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_user_type() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("comum"), Role::Regular);
        assert_eq!(Role::parse(""), Role::Regular);
    }

    #[test]
    fn test_movie_from_backend_json() {
        let json = r#"{
            "id": 7, "nome": "Alien", "diretor": "Ridley Scott",
            "anoLancamento": 1979, "duracao": 117, "produtora": "Fox",
            "classificacao": "16+", "poster": "http://img/alien.jpg",
            "avaliacao": 4.5
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.release_year, 1979);
        assert_eq!(movie.average_rating, Some(4.5));
        assert!(movie.genres.is_empty());
        assert_eq!(AgeRating::parse(&movie.age_rating), Some(AgeRating::Sixteen));
    }

    #[test]
    fn test_rating_author_fallback() {
        let json = r#"{"id": 1, "idUsuario": 9, "idFilme": 3, "nota": 4, "comentario": "great"}"#;
        let rating: Rating = serde_json::from_str(json).unwrap();
        assert_eq!(rating.score, 4.0);
        assert_eq!(rating.comment.as_deref(), Some("great"));
        assert_eq!(rating.author_id(), 9);
        assert_eq!(rating.author_name(), "");

        let json = r#"{"id": 2, "nota": 3, "usuario": {"id": 5, "nome": "Ana"}}"#;
        let rating: Rating = serde_json::from_str(json).unwrap();
        assert_eq!(rating.author_id(), 5);
        assert_eq!(rating.author_name(), "Ana");
    }

    #[test]
    fn test_user_defaults_and_initial() {
        let user: User = serde_json::from_str(r#"{"id": 1, "nome": "maria", "tipo_usuario": "admin"}"#).unwrap();
        assert_eq!(user.role(), Role::Admin);
        assert!(user.is_active());
        assert_eq!(user.initial(), "M");
        assert_eq!(User::default().initial(), "U");
    }

    #[test]
    fn test_format_date_br() {
        assert_eq!(format_date_br("1990-05-17T00:00:00.000Z"), "17/05/1990");
        assert_eq!(format_date_br("2001-12-01"), "01/12/2001");
        assert_eq!(format_date_br("ontem"), "ontem");
    }
}
