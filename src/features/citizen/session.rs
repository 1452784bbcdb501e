//! Browser session carried in cookies
//!
//! `token` holds the bearer token issued at login/signup and `user` holds the
//! url-encoded JSON profile returned with it. Pages receive a `Session` value
//! instead of reading cookies themselves.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, HeaderValue},
};

use crate::features::auth::dtos::{AuthResponseDto, AuthUserDto};
use crate::shared::constants::{SESSION_TOKEN_COOKIE, SESSION_USER_COOKIE};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<AuthUserDto>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_auth(auth: &AuthResponseDto) -> Self {
        Self {
            token: Some(auth.token.clone()),
            user: Some(auth.user.clone()),
        }
    }

    /// A token cookie is all it takes; tokens are not verified here
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut session = Session::default();

        for (name, value) in cookie_pairs(headers) {
            match name {
                SESSION_TOKEN_COOKIE if !value.is_empty() => {
                    session.token = Some(value.to_string());
                }
                SESSION_USER_COOKIE if !value.is_empty() => {
                    session.user = urlencoding::decode(value)
                        .ok()
                        .and_then(|json| serde_json::from_str(&json).ok());
                }
                _ => {}
            }
        }

        session
    }

    /// `Set-Cookie` values that store this session in the browser
    pub fn set_cookie_headers(&self) -> Vec<HeaderValue> {
        let mut cookies = Vec::new();

        if let Some(token) = &self.token {
            cookies.push(cookie(SESSION_TOKEN_COOKIE, token, None));
        }
        if let Some(user) = &self.user {
            if let Ok(json) = serde_json::to_string(user) {
                cookies.push(cookie(SESSION_USER_COOKIE, &urlencoding::encode(&json), None));
            }
        }

        cookies.into_iter().flatten().collect()
    }

    /// `Set-Cookie` values that expire both session cookies
    pub fn clear_cookie_headers() -> Vec<HeaderValue> {
        [SESSION_TOKEN_COOKIE, SESSION_USER_COOKIE]
            .into_iter()
            .filter_map(|name| cookie(name, "", Some(0)))
            .collect()
    }
}

fn cookie(name: &str, value: &str, max_age: Option<i64>) -> Option<HeaderValue> {
    let mut cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", name, value);
    if let Some(max_age) = max_age {
        cookie.push_str(&format!("; Max-Age={}", max_age));
    }
    HeaderValue::from_str(&cookie).ok()
}

fn cookie_pairs(headers: &HeaderMap) -> impl Iterator<Item = (&str, &str)> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            Some((name.trim(), value.trim()))
        })
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Session::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user() -> AuthUserDto {
        AuthUserDto {
            id: Uuid::new_v4(),
            username: "river_saver".to_string(),
            email: "river@example.com".to_string(),
        }
    }

    fn headers_from(set_cookies: &[HeaderValue]) -> HeaderMap {
        let cookie_line = set_cookies
            .iter()
            .map(|c| {
                c.to_str()
                    .unwrap()
                    .split(';')
                    .next()
                    .unwrap()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("; ");
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(&cookie_line).unwrap());
        headers
    }

    #[test]
    fn test_no_cookies_is_anonymous() {
        let session = Session::from_headers(&HeaderMap::new());
        assert_eq!(session, Session::anonymous());
        assert!(!session.is_authenticated());
        assert_eq!(session.username(), None);
    }

    #[test]
    fn test_cookies_round_trip_through_headers() {
        let session = Session {
            token: Some("abc.def.ghi".to_string()),
            user: Some(user()),
        };

        let parsed = Session::from_headers(&headers_from(&session.set_cookie_headers()));

        assert_eq!(parsed, session);
        assert!(parsed.is_authenticated());
        assert_eq!(parsed.username(), Some("river_saver"));
    }

    #[test]
    fn test_token_alone_counts_as_authenticated() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; token=xyz; user=%7Bbroken"),
        );

        let session = Session::from_headers(&headers);

        assert!(session.is_authenticated());
        assert_eq!(session.user, None);
    }

    #[test]
    fn test_clear_cookies_expire_both() {
        let cleared = Session::clear_cookie_headers();
        assert_eq!(cleared.len(), 2);
        for value in cleared {
            assert!(value.to_str().unwrap().contains("Max-Age=0"));
        }
    }
}
