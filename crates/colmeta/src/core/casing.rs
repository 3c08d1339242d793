//! Identifier casing conventions used to build generated field names.
//!
//! Projectors never hardcode a convention. They take anything implementing
//! [`Casing`], which includes plain closures:
//!
//! ```
//! use colmeta::core::{Casing, CasingStyle};
//!
//! assert_eq!(CasingStyle::Title.normalize("user_id"), "UserID");
//! let shout = |s: &str| s.to_uppercase();
//! assert_eq!(shout.normalize("user_id"), "USER_ID");
//! ```

use std::fmt;
use std::str::FromStr;

use heck::{ToSnakeCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

use crate::error::MetaError;

/// Words rendered fully upper-case by [`CasingStyle::Title`].
const INITIALISMS: &[&str] = &[
    "acl", "api", "ascii", "cpu", "css", "dns", "eof", "guid", "html", "http", "https", "id",
    "ip", "json", "lhs", "qps", "ram", "rhs", "rpc", "sla", "smtp", "sql", "ssh", "tcp", "tls",
    "ttl", "udp", "ui", "uid", "uri", "url", "utf8", "uuid", "vm", "xml", "xss",
];

/// Normalizes a column name into a generated identifier.
pub trait Casing {
    fn normalize(&self, ident: &str) -> String;
}

impl<F> Casing for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, ident: &str) -> String {
        self(ident)
    }
}

/// Built-in casing conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CasingStyle {
    /// `user_id` → `UserID`; common initialisms are upper-cased whole.
    #[default]
    Title,
    /// `user_id` → `UserId`.
    UpperCamel,
    /// `UserId` → `user_id`.
    Snake,
    /// Identifier passed through unchanged.
    Verbatim,
}

impl CasingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CasingStyle::Title => "title",
            CasingStyle::UpperCamel => "upper_camel",
            CasingStyle::Snake => "snake",
            CasingStyle::Verbatim => "verbatim",
        }
    }
}

impl Casing for CasingStyle {
    fn normalize(&self, ident: &str) -> String {
        match self {
            CasingStyle::Title => title_case(ident),
            CasingStyle::UpperCamel => ident.to_upper_camel_case(),
            CasingStyle::Snake => ident.to_snake_case(),
            CasingStyle::Verbatim => ident.to_string(),
        }
    }
}

impl FromStr for CasingStyle {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(CasingStyle::Title),
            "upper_camel" | "upper-camel" => Ok(CasingStyle::UpperCamel),
            "snake" => Ok(CasingStyle::Snake),
            "verbatim" => Ok(CasingStyle::Verbatim),
            other => Err(MetaError::Config(format!(
                "unknown casing '{}', expected one of: title, upper_camel, snake, verbatim",
                other
            ))),
        }
    }
}

impl fmt::Display for CasingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title-case an underscore separated identifier.
///
/// Each word gets its first letter upper-cased and the rest kept as is,
/// except initialisms which are upper-cased entirely. Empty segments from
/// leading, trailing or doubled underscores are dropped.
pub fn title_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());

    for word in ident.split('_').filter(|w| !w.is_empty()) {
        let lower = word.to_lowercase();
        if INITIALISMS.contains(&lower.as_str()) {
            out.push_str(&word.to_uppercase());
            continue;
        }

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_initialisms() {
        assert_eq!(title_case("id"), "ID");
        assert_eq!(title_case("user_id"), "UserID");
        assert_eq!(title_case("api_url"), "APIURL");
        assert_eq!(title_case("Uuid"), "UUID");
    }

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("user_name"), "UserName");
        assert_eq!(title_case("created_at"), "CreatedAt");
        assert_eq!(title_case("address2"), "Address2");
        assert_eq!(title_case("userName"), "UserName");
        assert_eq!(title_case("idea"), "Idea");
    }

    #[test]
    fn test_title_case_odd_underscores() {
        assert_eq!(title_case("_private"), "Private");
        assert_eq!(title_case("a__b_"), "AB");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_styles() {
        assert_eq!(CasingStyle::Title.normalize("user_id"), "UserID");
        assert_eq!(CasingStyle::UpperCamel.normalize("user_id"), "UserId");
        assert_eq!(CasingStyle::Snake.normalize("UserId"), "user_id");
        assert_eq!(CasingStyle::Verbatim.normalize("User_id"), "User_id");
    }

    #[test]
    fn test_closure_is_casing() {
        let upper = |s: &str| s.to_uppercase();
        assert_eq!(upper.normalize("user_id"), "USER_ID");

        let boxed: Box<dyn Casing> = Box::new(CasingStyle::Snake);
        assert_eq!(boxed.normalize("CreatedAt"), "created_at");
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("title".parse::<CasingStyle>().unwrap(), CasingStyle::Title);
        assert_eq!(
            "Upper-Camel".parse::<CasingStyle>().unwrap(),
            CasingStyle::UpperCamel
        );
        let err = "kebab".parse::<CasingStyle>().unwrap_err();
        assert!(err.to_string().contains("unknown casing 'kebab'"));
    }

    #[test]
    fn test_style_yaml_names() {
        let style: CasingStyle = serde_yaml::from_str("upper_camel").unwrap();
        assert_eq!(style, CasingStyle::UpperCamel);
        assert_eq!(CasingStyle::Verbatim.to_string(), "verbatim");
    }
}
