//! Token Inspector
//!
//! Reads the payload of a JWT-shaped bearer token WITHOUT verifying its
//! signature. The client only needs the expiry and role claims to decide
//! whether to keep showing protected pages; the backend still validates
//! every request. Any decoding failure must be treated as "no token".

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde_json::{Map, Value};

use crate::error::TokenError;
use crate::models::Role;

/// base64url with optional padding, like the browser's forgiving `atob`
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Keys the backend has used for the role claim, in lookup order
const ROLE_KEYS: &[&str] = &["role", "tipo_usuario", "tipo"];
/// Keys for the subject, in lookup order
const SUBJECT_KEYS: &[&str] = &["sub", "id"];

/// Claims the client cares about. Everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Claims {
    /// Expiry, seconds since the Unix epoch. NumericDate may be fractional.
    pub exp: Option<f64>,
    pub iat: Option<f64>,
    /// Subject / user id, when the backend includes one
    pub sub: Option<Value>,
    /// Role claim, under whichever name the backend uses
    pub role: Option<String>,
}

impl Claims {
    /// Pick the known claims out of a decoded payload object. Keys with an
    /// unexpected type are ignored rather than rejected.
    pub fn from_payload(payload: &Map<String, Value>) -> Self {
        let first = |keys: &[&str]| keys.iter().find_map(|key| payload.get(*key).filter(|v| !v.is_null()));
        Self {
            exp: payload.get("exp").and_then(Value::as_f64),
            iat: payload.get("iat").and_then(Value::as_f64),
            sub: first(SUBJECT_KEYS).cloned(),
            role: first(ROLE_KEYS).and_then(Value::as_str).map(str::to_string),
        }
    }

    /// Expired when `now >= exp`. A token without `exp` never expires client-side.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        matches!(self.exp, Some(exp) if now_secs as f64 >= exp)
    }

    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().map(Role::parse)
    }
}

/// Decode the middle segment of `header.payload.signature`
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::MissingPayload)?;

    let bytes = PAYLOAD_ENGINE
        .decode(payload)
        .map_err(|e| TokenError::Base64(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|_| TokenError::Utf8)?;

    let payload: Value = serde_json::from_str(&text).map_err(|e| TokenError::Json(e.to_string()))?;
    match payload {
        Value::Object(map) => Ok(Claims::from_payload(&map)),
        _ => Ok(Claims::default()),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    /// Build an unsigned token around a JSON payload
    pub(crate) fn make_token(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_exp_and_role() {
        let token = make_token(r#"{"id": 3, "tipo_usuario": "admin", "exp": 1700000000}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, Some(1_700_000_000.0));
        assert_eq!(claims.role(), Some(Role::Admin));
        assert!(claims.sub.is_some());
    }

    #[test]
    fn test_decode_padded_payload() {
        use base64::engine::general_purpose::URL_SAFE;
        let token = format!("h.{}.s", URL_SAFE.encode(r#"{"exp":1}"#));
        assert_eq!(decode_claims(&token).unwrap().exp, Some(1.0));
    }

    #[test]
    fn test_decode_non_ascii_payload() {
        let token = make_token(r#"{"nome": "João", "exp": 10}"#);
        assert_eq!(decode_claims(&token).unwrap().exp, Some(10.0));
    }

    #[test]
    fn test_malformed_tokens_fail() {
        assert_eq!(decode_claims(""), Err(TokenError::MissingPayload));
        assert_eq!(decode_claims("abc"), Err(TokenError::MissingPayload));
        assert_eq!(decode_claims("abc..def"), Err(TokenError::MissingPayload));
        assert!(matches!(decode_claims("a.!!!.b"), Err(TokenError::Base64(_))));
        let not_json = format!("a.{}.b", URL_SAFE_NO_PAD.encode("hello"));
        assert!(matches!(decode_claims(&not_json), Err(TokenError::Json(_))));
        let not_utf8 = format!("a.{}.b", URL_SAFE_NO_PAD.encode([0xff, 0xfe]));
        assert_eq!(decode_claims(&not_utf8), Err(TokenError::Utf8));
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = Claims { exp: Some(100.0), ..Default::default() };
        assert!(!claims.is_expired(99));
        assert!(claims.is_expired(100));
        assert!(claims.is_expired(101));
        assert!(!Claims::default().is_expired(i64::MAX));
    }

    #[test]
    fn test_decode_id_and_sub_together() {
        let token = make_token(r#"{"id": 3, "sub": "3", "tipo_usuario": "comum", "role": "admin", "exp": 4000000000}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, Some(Value::String("3".into())));
        assert_eq!(claims.role(), Some(Role::Admin));
        assert!(!claims.is_expired(1_700_000_000));
    }

    #[test]
    fn test_fractional_exp() {
        let token = make_token(r#"{"exp": 4000000000.5}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, Some(4_000_000_000.5));
        assert!(!claims.is_expired(4_000_000_000));
        assert!(claims.is_expired(4_000_000_001));
    }

    #[test]
    fn test_unexpected_claim_types_are_ignored() {
        let token = make_token(r#"{"exp": "soon", "tipo": 1, "id": null, "sub": 9}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, None);
        assert_eq!(claims.role, None);
        assert_eq!(claims.sub, Some(Value::from(9)));
    }

    #[test]
    fn test_non_object_payload_has_no_claims() {
        let token = make_token("[1, 2]");
        assert_eq!(decode_claims(&token).unwrap(), Claims::default());
    }
}
