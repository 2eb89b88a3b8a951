//! One-shot messages shown on the next rendered page.
//!
//! A message that has to survive a redirect rides in the `fyyur_flash`
//! cookie as a small form-urlencoded string. The page that shows it clears
//! the cookie.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{
        header::{COOKIE, SET_COOKIE},
        request::Parts,
        HeaderMap, HeaderValue,
    },
    response::{IntoResponseParts, ResponseParts},
};
use log::warn;
use url::form_urlencoded;

pub const FLASH_COOKIE: &str = "fyyur_flash";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Flash {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Flash {
            level: Level::Error,
            message: message.into(),
        }
    }

    /// Bootstrap alert class
    pub fn css_class(&self) -> &'static str {
        match self.level {
            Level::Success => "alert-success",
            Level::Error => "alert-danger",
        }
    }

    fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("level", self.level.as_str())
            .append_pair("message", &self.message)
            .finish()
    }

    fn decode(value: &str) -> Option<Flash> {
        let mut level = None;
        let mut message = None;
        for (key, value) in form_urlencoded::parse(value.as_bytes()) {
            match key.as_ref() {
                "level" => {
                    level = match value.as_ref() {
                        "success" => Some(Level::Success),
                        "error" => Some(Level::Error),
                        _ => None,
                    }
                }
                "message" => message = Some(value.into_owned()),
                _ => {}
            }
        }
        Some(Flash {
            level: level?,
            message: message?,
        })
    }
}

fn flash_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(FLASH_COOKIE)?.strip_prefix('='))
}

/// Messages left by the previous response. Returning it from a handler
/// clears the cookie once the messages have been shown.
#[derive(Debug, Default)]
pub struct IncomingFlash {
    messages: Vec<Flash>,
    present: bool,
}

impl IncomingFlash {
    pub fn take(&mut self) -> Vec<Flash> {
        std::mem::take(&mut self.messages)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = flash_cookie(&parts.headers) else {
            return Ok(IncomingFlash::default());
        };
        let messages = match Flash::decode(value) {
            Some(flash) => vec![flash],
            None => {
                warn!("Ignoring malformed flash cookie");
                vec![]
            }
        };
        Ok(IncomingFlash {
            messages,
            present: true,
        })
    }
}

impl IntoResponseParts for IncomingFlash {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if self.present {
            let clear = format!("{FLASH_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax");
            if let Ok(value) = HeaderValue::from_str(&clear) {
                res.headers_mut().append(SET_COOKIE, value);
            }
        }
        Ok(res)
    }
}

/// Leaves a message for the next page, usually next to a redirect.
#[derive(Debug)]
pub struct SetFlash(pub Flash);

impl IntoResponseParts for SetFlash {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        let cookie = format!(
            "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            self.0.encode()
        );
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                res.headers_mut().append(SET_COOKIE, value);
            }
            Err(err) => warn!("Dropping flash message: {err}"),
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_survives_special_characters() {
        let flash = Flash::success("Venue Park Square Live Music & Coffee; was listed, \"yay\"");
        let encoded = flash.encode();
        assert!(!encoded.contains(';'));
        assert!(!encoded.contains(','));
        assert!(!encoded.contains(' '));
        assert_eq!(Flash::decode(&encoded), Some(flash));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert_eq!(Flash::decode("message=hi"), None);
        assert_eq!(Flash::decode("level=loud&message=hi"), None);
        assert_eq!(Flash::decode(""), None);
    }

    #[test]
    fn finds_the_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; fyyur_flash=level=error&message=nope; other=1"),
        );
        let value = flash_cookie(&headers).unwrap();
        assert_eq!(Flash::decode(value), Some(Flash::error("nope")));
    }

    #[test]
    fn similar_cookie_names_do_not_match() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("fyyur_flashy=1"));
        assert_eq!(flash_cookie(&headers), None);
    }

    #[test]
    fn css_classes() {
        assert_eq!(Flash::success("ok").css_class(), "alert-success");
        assert_eq!(Flash::error("no").css_class(), "alert-danger");
    }
}
