//! Client routes
//!
//! Views the controllers navigate between, addressed the way the web
//! client addresses them (`/?tag=`, `/profile`, `/update-prompt?id=`).

use std::fmt;
use url::Url;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Feed, optionally seeded by a `tag` query parameter
    Feed { tag: Option<String> },
    Profile,
    UpdatePrompt { id: Uuid },
}

/// Base the client paths are resolved against
const CLIENT_ORIGIN: &str = "http://localhost/";

impl Route {
    /// Parse a client path. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let url = Url::parse(CLIENT_ORIGIN).ok()?.join(path).ok()?;
        let param = |name: &str| {
            url.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
        };

        match url.path() {
            "/" => Some(Self::Feed {
                tag: param("tag").filter(|t| !t.is_empty()),
            }),
            "/profile" => Some(Self::Profile),
            "/update-prompt" => param("id")
                .and_then(|id| Uuid::parse_str(&id).ok())
                .map(|id| Self::UpdatePrompt { id }),
            _ => None,
        }
    }

    pub fn is_feed(&self) -> bool {
        matches!(self, Self::Feed { .. })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feed { tag: None } => write!(f, "/"),
            Self::Feed { tag: Some(tag) } => write!(f, "/?tag={}", urlencoding::encode(tag)),
            Self::Profile => write!(f, "/profile"),
            Self::UpdatePrompt { id } => write!(f, "/update-prompt?id={}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feed_tag() {
        assert_eq!(
            Route::parse("/?tag=greeting"),
            Some(Route::Feed {
                tag: Some("greeting".to_string())
            })
        );
        assert_eq!(
            Route::parse("/?page=2&tag=web%20dev"),
            Some(Route::Feed {
                tag: Some("web dev".to_string())
            })
        );
        assert_eq!(Route::parse("/?tag="), Some(Route::Feed { tag: None }));
        assert_eq!(Route::parse("/"), Some(Route::Feed { tag: None }));
    }

    #[test]
    fn test_update_prompt_carries_id() {
        let id = Uuid::new_v4();
        let route = Route::UpdatePrompt { id };
        assert_eq!(route.to_string(), format!("/update-prompt?id={}", id));
        assert_eq!(Route::parse(&route.to_string()), Some(route));
        assert_eq!(Route::parse("/update-prompt?id=nope"), None);
    }

    #[test]
    fn test_fragment_is_not_part_of_tag() {
        assert_eq!(
            Route::parse("/?tag=rust#top"),
            Some(Route::Feed {
                tag: Some("rust".to_string())
            })
        );
        assert_eq!(Route::parse("/profile#posts"), Some(Route::Profile));
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let route = Route::Feed {
            tag: Some("web dev".to_string()),
        };
        assert_eq!(Route::parse("/?tag=web+dev"), Some(route.clone()));
        assert_eq!(Route::parse(&route.to_string()), Some(route));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::parse("/settings"), None);
    }
}
