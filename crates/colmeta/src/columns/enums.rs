//! Enum name and value parsing from native type strings.
//!
//! Introspectors report enum columns with a `db_type` such as
//! `enum.workday('monday','tuesday')` (named, Postgres) or
//! `enum('small','large')` (inline, MySQL). These helpers pull the pieces
//! back out for renderers that emit enum types. Malformed input yields
//! `None` or an empty list, never an error.

use crate::core::schema::ENUM_PREFIX;

/// Name of a named enum type, e.g. `workday` for
/// `enum.workday('monday','tuesday')`.
pub fn parse_enum_name(db_type: &str) -> Option<&str> {
    let rest = db_type.strip_prefix(ENUM_PREFIX)?.strip_prefix('.')?;
    let end = rest.find('(')?;
    let name = rest[..end].trim();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Values of an enum type in declaration order.
///
/// Values are single-quoted; a doubled quote inside a value stands for one
/// quote character.
pub fn parse_enum_values(db_type: &str) -> Vec<String> {
    if !db_type.starts_with(ENUM_PREFIX) || !db_type.ends_with(')') {
        return Vec::new();
    }
    let Some(open) = db_type.find('(') else {
        return Vec::new();
    };

    scan_quoted_list(&db_type[open + 1..db_type.len() - 1]).unwrap_or_default()
}

/// Whether every value can be turned into an identifier: an ASCII letter
/// followed by ASCII alphanumerics, underscores or spaces.
pub fn is_enum_normal<S: AsRef<str>>(values: &[S]) -> bool {
    values.iter().all(|v| {
        let mut chars = v.as_ref().chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ' ')
            }
            _ => false,
        }
    })
}

fn scan_quoted_list(list: &str) -> Option<Vec<String>> {
    let mut values = Vec::new();
    let mut chars = list.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if chars.next()? != '\'' {
            return None;
        }

        let mut value = String::new();
        loop {
            match chars.next()? {
                '\'' if chars.next_if_eq(&'\'').is_some() => value.push('\''),
                '\'' => break,
                c => value.push(c),
            }
        }
        values.push(value);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            None => return Some(values),
            Some(',') => continue,
            Some(_) => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enum_name() {
        assert_eq!(
            parse_enum_name("enum.workday('monday','tuesday')"),
            Some("workday")
        );
        assert_eq!(parse_enum_name("enum('a','b')"), None);
        assert_eq!(parse_enum_name("enum.('a')"), None);
        assert_eq!(parse_enum_name("enum.workday"), None);
        assert_eq!(parse_enum_name("integer"), None);
    }

    #[test]
    fn test_parse_enum_values() {
        assert_eq!(
            parse_enum_values("enum.workday('monday','tuesday')"),
            vec!["monday", "tuesday"]
        );
        assert_eq!(
            parse_enum_values("enum('small', 'extra large')"),
            vec!["small", "extra large"]
        );
        assert_eq!(parse_enum_values("enum('it''s','a,b')"), vec!["it's", "a,b"]);
    }

    #[test]
    fn test_parse_enum_values_malformed() {
        assert!(parse_enum_values("integer").is_empty());
        assert!(parse_enum_values("enum_status").is_empty());
        assert!(parse_enum_values("enum('open").is_empty());
        assert!(parse_enum_values("enum(a,b)").is_empty());
        assert!(parse_enum_values("enum('a' 'b')").is_empty());
        assert!(parse_enum_values("ENUM('a')").is_empty());
    }

    #[test]
    fn test_is_enum_normal() {
        assert!(is_enum_normal(&["monday", "tuesday"]));
        assert!(is_enum_normal(&["extra large", "x_1"]));
        assert!(!is_enum_normal(&["1st"]));
        assert!(!is_enum_normal(&["ok", "not-ok"]));
        assert!(!is_enum_normal(&[""]));
        assert!(is_enum_normal::<String>(&[]));
    }
}
