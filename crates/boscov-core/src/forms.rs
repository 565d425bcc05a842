//! Typed Form State
//!
//! One struct per form. Inputs are kept as the raw strings the user typed
//! and every edit goes through the form's `apply` reducer. `validate` only
//! checks presence and format; range and uniqueness rules live server-side.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{AgeRating, Movie, User};

/// Per-field validation messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, &'static str>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self { errors: BTreeMap::new() }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn insert(&mut self, field: F, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn get(&self, field: F) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Editing a field dismisses its message
    pub fn clear_field(&mut self, field: F) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

fn require<F: Ord + Copy>(errors: &mut FieldErrors<F>, field: F, value: &str, message: &'static str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Passwords need at least one digit and one special character
pub fn password_is_strong(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit()) && password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

// ========================
// Login
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginField {
    Email,
    Password,
}

/// Serialized as the `POST /autenticacao` body
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

impl LoginForm {
    pub fn apply(&mut self, field: LoginField, value: &str) {
        match field {
            LoginField::Email => self.email = value.to_string(),
            LoginField::Password => self.password = value.to_string(),
        }
    }

    pub fn validate(&self) -> FieldErrors<LoginField> {
        let mut errors = FieldErrors::default();
        require(&mut errors, LoginField::Email, &self.email, "Email é obrigatório");
        require(&mut errors, LoginField::Password, &self.password, "Senha é obrigatória");
        errors
    }
}

// ========================
// Registration
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegisterField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    BirthDate,
    Nickname,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub birth_date: String,
    pub nickname: String,
}

/// `POST /usuario` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub data_nascimento: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apelido: Option<String>,
}

impl RegisterForm {
    pub fn apply(&mut self, field: RegisterField, value: &str) {
        let slot = match field {
            RegisterField::Name => &mut self.name,
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
            RegisterField::BirthDate => &mut self.birth_date,
            RegisterField::Nickname => &mut self.nickname,
        };
        *slot = value.to_string();
    }

    pub fn validate(&self) -> FieldErrors<RegisterField> {
        let mut errors = FieldErrors::default();
        require(&mut errors, RegisterField::Name, &self.name, "Nome é obrigatório");
        require(&mut errors, RegisterField::Email, &self.email, "Email é obrigatório");
        require(&mut errors, RegisterField::Password, &self.password, "Senha é obrigatória");
        require(&mut errors, RegisterField::ConfirmPassword, &self.confirm_password, "Confirme sua senha");
        if !self.password.is_empty() && !self.confirm_password.is_empty() && self.password != self.confirm_password {
            errors.insert(RegisterField::ConfirmPassword, "As senhas não coincidem");
        }
        if !self.password.is_empty() && !password_is_strong(&self.password) {
            errors.insert(RegisterField::Password, "Senha deve ter número e caractere especial");
        }
        require(&mut errors, RegisterField::BirthDate, &self.birth_date, "Data de nascimento é obrigatória");
        errors
    }

    /// Empty nickname is left out of the body
    pub fn payload(&self) -> RegisterPayload {
        let nickname = self.nickname.trim();
        RegisterPayload {
            nome: self.name.clone(),
            email: self.email.clone(),
            senha: self.password.clone(),
            data_nascimento: self.birth_date.clone(),
            apelido: (!nickname.is_empty()).then(|| nickname.to_string()),
        }
    }
}

// ========================
// Profile
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfileField {
    Name,
    Nickname,
    Email,
    BirthDate,
}

/// Serialized as the `PUT /usuario/{id}` body
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProfileForm {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    pub data_nascimento: String,
    #[serde(rename = "apelido")]
    pub nickname: String,
}

impl ProfileForm {
    /// Pre-fill from the stored user; dates keep only `YYYY-MM-DD`
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            data_nascimento: user.birth_date.chars().take(10).collect(),
            nickname: user.nickname.clone().unwrap_or_default(),
        }
    }

    pub fn apply(&mut self, field: ProfileField, value: &str) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Nickname => &mut self.nickname,
            ProfileField::Email => &mut self.email,
            ProfileField::BirthDate => &mut self.data_nascimento,
        };
        *slot = value.to_string();
    }

    pub fn validate(&self) -> FieldErrors<ProfileField> {
        let mut errors = FieldErrors::default();
        require(&mut errors, ProfileField::Name, &self.name, "Nome é obrigatório");
        require(&mut errors, ProfileField::Email, &self.email, "Email é obrigatório");
        errors
    }
}

// ========================
// Movie (admin)
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MovieField {
    Title,
    Director,
    ReleaseYear,
    Duration,
    Studio,
    AgeRating,
    PosterUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieForm {
    pub title: String,
    pub director: String,
    pub release_year: String,
    pub duration: String,
    pub studio: String,
    pub age_rating: AgeRating,
    pub poster_url: String,
    /// Genres to associate after creation
    pub genre_ids: Vec<u32>,
}

impl Default for MovieForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            director: String::new(),
            release_year: String::new(),
            duration: String::new(),
            studio: String::new(),
            age_rating: AgeRating::General,
            poster_url: String::new(),
            genre_ids: Vec::new(),
        }
    }
}

/// Full movie body for `POST /filme`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoviePayload {
    pub nome: String,
    pub diretor: String,
    #[serde(rename = "anoLancamento")]
    pub ano_lancamento: i32,
    pub duracao: i32,
    pub produtora: String,
    pub classificacao: String,
    pub poster: String,
}

/// Changed fields only, for `PUT /filme/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MovieUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diretor: Option<String>,
    #[serde(rename = "anoLancamento", skip_serializing_if = "Option::is_none")]
    pub ano_lancamento: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duracao: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produtora: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classificacao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl MovieUpdate {
    pub fn is_empty(&self) -> bool {
        *self == MovieUpdate::default()
    }
}

pub const NO_CHANGES: &str = "Nenhuma alteração detectada.";

fn changed<T: PartialEq>(new: T, old: &T) -> Option<T> {
    (new != *old).then_some(new)
}

impl MovieForm {
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            director: movie.director.clone(),
            release_year: movie.release_year.to_string(),
            duration: movie.duration_minutes.to_string(),
            studio: movie.studio.clone(),
            age_rating: AgeRating::parse(&movie.age_rating).unwrap_or_default(),
            poster_url: movie.poster_url.clone(),
            genre_ids: Vec::new(),
        }
    }

    pub fn apply(&mut self, field: MovieField, value: &str) {
        match field {
            MovieField::Title => self.title = value.to_string(),
            MovieField::Director => self.director = value.to_string(),
            MovieField::ReleaseYear => self.release_year = value.to_string(),
            MovieField::Duration => self.duration = value.to_string(),
            MovieField::Studio => self.studio = value.to_string(),
            MovieField::AgeRating => {
                if let Some(rating) = AgeRating::parse(value) {
                    self.age_rating = rating;
                }
            }
            MovieField::PosterUrl => self.poster_url = value.to_string(),
        }
    }

    pub fn set_genre(&mut self, genre_id: u32, checked: bool) {
        if checked {
            if !self.genre_ids.contains(&genre_id) {
                self.genre_ids.push(genre_id);
            }
        } else {
            self.genre_ids.retain(|&id| id != genre_id);
        }
    }

    pub fn validate(&self) -> FieldErrors<MovieField> {
        let mut errors = FieldErrors::default();
        require(&mut errors, MovieField::Title, &self.title, "Nome é obrigatório");
        require(&mut errors, MovieField::Director, &self.director, "Diretor é obrigatório");
        require(&mut errors, MovieField::Studio, &self.studio, "Produtora é obrigatória");
        require(&mut errors, MovieField::PosterUrl, &self.poster_url, "Poster é obrigatório");
        if parse_positive(&self.release_year).is_none() {
            errors.insert(MovieField::ReleaseYear, "Ano de lançamento inválido");
        }
        if parse_positive(&self.duration).is_none() {
            errors.insert(MovieField::Duration, "Duração inválida");
        }
        errors
    }

    pub fn payload(&self) -> Result<MoviePayload, FieldErrors<MovieField>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(MoviePayload {
            nome: self.title.clone(),
            diretor: self.director.clone(),
            ano_lancamento: parse_positive(&self.release_year).unwrap_or_default(),
            duracao: parse_positive(&self.duration).unwrap_or_default(),
            produtora: self.studio.clone(),
            classificacao: self.age_rating.as_str().to_string(),
            poster: self.poster_url.clone(),
        })
    }

    /// Fields that differ from `original`; empty when nothing changed
    pub fn diff(&self, original: &Movie) -> Result<MovieUpdate, FieldErrors<MovieField>> {
        let full = self.payload()?;
        Ok(MovieUpdate {
            nome: changed(full.nome, &original.title),
            diretor: changed(full.diretor, &original.director),
            ano_lancamento: changed(full.ano_lancamento, &original.release_year),
            duracao: changed(full.duracao, &original.duration_minutes),
            produtora: changed(full.produtora, &original.studio),
            classificacao: changed(full.classificacao, &original.age_rating),
            poster: changed(full.poster, &original.poster_url),
        })
    }
}

fn parse_positive(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|n| *n > 0)
}

// ========================
// Rating
// ========================

pub const MAX_COMMENT_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RatingField {
    Score,
    Comment,
}

/// Serialized as the `POST /avaliacao` and `PUT /avaliacao/{id}` body
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RatingForm {
    #[serde(rename = "nota")]
    pub score: u8,
    #[serde(rename = "comentario")]
    pub comment: String,
}

impl RatingForm {
    /// Pre-fill from an existing rating when editing
    pub fn from_existing(score: f64, comment: Option<&str>) -> Self {
        Self {
            score: score.round().clamp(0.0, 5.0) as u8,
            comment: comment.unwrap_or_default().to_string(),
        }
    }

    pub fn apply(&mut self, field: RatingField, value: &str) {
        match field {
            RatingField::Score => {
                if let Ok(score) = value.trim().parse::<u8>() {
                    self.score = score.min(5);
                }
            }
            RatingField::Comment => {
                self.comment = value.chars().take(MAX_COMMENT_CHARS).collect();
            }
        }
    }

    /// Zero stars means nothing was picked yet
    pub fn can_submit(&self) -> bool {
        (1..=5).contains(&self.score)
    }

    pub fn validate(&self) -> FieldErrors<RatingField> {
        let mut errors = FieldErrors::default();
        if !self.can_submit() {
            errors.insert(RatingField::Score, "Escolha de 1 a 5 estrelas");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_required_fields() {
        let mut form = LoginForm::default();
        let errors = form.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(LoginField::Email), Some("Email é obrigatório"));

        form.apply(LoginField::Email, "a@b.com");
        form.apply(LoginField::Password, "x");
        assert!(form.validate().is_empty());
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({"email": "a@b.com", "senha": "x"})
        );
    }

    #[test]
    fn test_register_validation() {
        let mut form = RegisterForm::default();
        form.apply(RegisterField::Name, "Ana");
        form.apply(RegisterField::Email, "ana@x.com");
        form.apply(RegisterField::Password, "abcdef");
        form.apply(RegisterField::ConfirmPassword, "abcdeg");
        let errors = form.validate();
        assert_eq!(errors.get(RegisterField::Password), Some("Senha deve ter número e caractere especial"));
        assert_eq!(errors.get(RegisterField::ConfirmPassword), Some("As senhas não coincidem"));
        assert_eq!(errors.get(RegisterField::BirthDate), Some("Data de nascimento é obrigatória"));

        form.apply(RegisterField::Password, "abc1!");
        form.apply(RegisterField::ConfirmPassword, "abc1!");
        form.apply(RegisterField::BirthDate, "1990-01-02");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_register_payload_omits_empty_nickname() {
        let mut form = RegisterForm::default();
        form.apply(RegisterField::Name, "Ana");
        form.apply(RegisterField::BirthDate, "1990-01-02");
        form.apply(RegisterField::Nickname, "  ");
        let json = serde_json::to_value(form.payload()).unwrap();
        assert!(json.get("apelido").is_none());
        assert_eq!(json["data_nascimento"], "1990-01-02");

        form.apply(RegisterField::Nickname, "aninha");
        assert_eq!(form.payload().apelido.as_deref(), Some("aninha"));
    }

    #[test]
    fn test_password_strength() {
        assert!(password_is_strong("s3nha#"));
        assert!(!password_is_strong("senha#"));
        assert!(!password_is_strong("senha3"));
        assert!(password_is_strong("9\\"));
    }

    #[test]
    fn test_field_error_cleared_on_edit() {
        let mut errors = LoginForm::default().validate();
        errors.clear_field(LoginField::Email);
        assert!(errors.get(LoginField::Email).is_none());
        assert!(errors.get(LoginField::Password).is_some());
    }

    #[test]
    fn test_profile_prefill_truncates_date() {
        let user = User {
            id: 1,
            name: "Ana".into(),
            email: "ana@x.com".into(),
            birth_date: "1990-05-17T00:00:00.000Z".into(),
            nickname: None,
            ..Default::default()
        };
        let form = ProfileForm::from_user(&user);
        assert_eq!(form.data_nascimento, "1990-05-17");
        assert_eq!(form.nickname, "");
        assert!(form.validate().is_empty());
    }

    fn sample_movie() -> Movie {
        Movie {
            id: 3,
            title: "Alien".into(),
            director: "Ridley Scott".into(),
            release_year: 1979,
            duration_minutes: 117,
            studio: "Fox".into(),
            age_rating: "16+".into(),
            poster_url: "http://img/alien.jpg".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_movie_validation_and_payload() {
        let mut form = MovieForm::default();
        let errors = form.validate();
        assert!(errors.get(MovieField::ReleaseYear).is_some());
        assert!(errors.get(MovieField::Title).is_some());
        assert!(form.payload().is_err());

        form = MovieForm::from_movie(&sample_movie());
        form.apply(MovieField::AgeRating, "18+");
        form.apply(MovieField::AgeRating, "99+");
        let payload = form.payload().unwrap();
        assert_eq!(payload.classificacao, "18+");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["anoLancamento"], 1979);
        assert_eq!(json["duracao"], 117);
    }

    #[test]
    fn test_movie_diff_sends_changed_fields_only() {
        let movie = sample_movie();
        let mut form = MovieForm::from_movie(&movie);
        assert!(form.diff(&movie).unwrap().is_empty());

        form.apply(MovieField::Duration, "120");
        form.apply(MovieField::Title, "Alien (1979)");
        let update = form.diff(&movie).unwrap();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"nome": "Alien (1979)", "duracao": 120})
        );
    }

    #[test]
    fn test_genre_selection() {
        let mut form = MovieForm::default();
        form.set_genre(2, true);
        form.set_genre(5, true);
        form.set_genre(2, true);
        assert_eq!(form.genre_ids, vec![2, 5]);
        form.set_genre(2, false);
        assert_eq!(form.genre_ids, vec![5]);
    }

    #[test]
    fn test_rating_form() {
        let mut form = RatingForm::default();
        assert!(!form.can_submit());
        assert!(form.validate().get(RatingField::Score).is_some());

        form.apply(RatingField::Score, "4");
        form.apply(RatingField::Comment, "great");
        assert!(form.can_submit());
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({"nota": 4, "comentario": "great"})
        );

        form.apply(RatingField::Score, "9");
        assert_eq!(form.score, 5);
        form.apply(RatingField::Comment, &"x".repeat(600));
        assert_eq!(form.comment.chars().count(), MAX_COMMENT_CHARS);
    }

    #[test]
    fn test_rating_prefill() {
        let form = RatingForm::from_existing(4.0, Some("great"));
        assert_eq!(form, RatingForm { score: 4, comment: "great".into() });
        assert_eq!(RatingForm::from_existing(7.0, None).score, 5);
    }
}
