//! Query string and URL construction.
//!
//! TalentCards list endpoints understand three JSON:API style parameters:
//!
//! - `filter`: `{"field": value}` becomes `filter[field]=value`
//! - `sort`: `["a", "-b"]` becomes `sort=a,-b`
//! - `fields`: `{"users": ["id", "email"]}` becomes `fields[users]=id,email`
//!
//! Scalar values are written as text; `true` becomes `1`, while `false` and
//! `null` become the empty string.
//!
//! Fragments keep the insertion order of the parameter object and are joined
//! with `&`. The joined string is then percent-encoded as a whole, so the
//! separators themselves are escaped (`sort=a&sort=b` becomes
//! `sort%3Da%26sort%3Db`). The server decodes the query once before splitting
//! it; callers inspecting the URL need to do the same.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use talentcards_api::clients::build_query;
//!
//! let query = build_query(&json!({"sort": ["-email"]}));
//! assert_eq!(query, "sort%3D-email");
//! ```

use reqwest::Url;
use serde_json::Value;

use crate::clients::errors::HttpError;

/// Builds the percent-encoded query string for `parameters`.
///
/// Unknown keys, and values under known keys that are neither objects nor
/// arrays, are skipped. A parameter set that produces no fragments yields an
/// empty string.
#[must_use]
pub fn build_query(parameters: &Value) -> String {
    let Some(parameters) = parameters.as_object() else {
        return String::new();
    };

    let mut fragments = Vec::new();
    for (param, value) in parameters {
        let Some(entries) = collection_entries(value) else {
            continue;
        };

        match param.as_str() {
            "filter" => {
                for (item, item_value) in entries {
                    fragments.push(format!("{param}[{item}]={}", scalar_text(item_value)));
                }
            }
            "sort" => {
                let fields: Vec<String> = entries.iter().map(|(_, v)| scalar_text(v)).collect();
                fragments.push(format!("{param}={}", fields.join(",")));
            }
            "fields" => {
                for (item, item_value) in entries {
                    let Some(names) = collection_entries(item_value) else {
                        continue;
                    };
                    let names: Vec<String> = names.iter().map(|(_, v)| scalar_text(v)).collect();
                    fragments.push(format!("{param}[{item}]={}", names.join(",")));
                }
            }
            _ => {}
        }
    }

    urlencoding::encode(&fragments.join("&")).into_owned()
}

/// Joins `base_url`, `endpoint` and `query` into the absolute request URL.
///
/// `base_url + endpoint` must parse as an absolute URL with a host and may
/// only contain characters RFC 3986 allows in a URI; a space or a raw
/// non-ASCII character is rejected rather than escaped. The query string is
/// appended after a `?` only when it is non-empty and is not validated.
///
/// # Errors
///
/// Returns [`HttpError::InvalidEndpoint`] if `base_url + endpoint` is not a
/// well-formed absolute URL.
///
/// # Example
///
/// ```rust
/// use talentcards_api::clients::build_url;
///
/// let url = build_url("https://www.talentcards.io/api/v1/company", "/users", "").unwrap();
/// assert_eq!(url, "https://www.talentcards.io/api/v1/company/users");
///
/// assert!(build_url("INVALID", "/", "").is_err());
/// ```
pub fn build_url(base_url: &str, endpoint: &str, query: &str) -> Result<String, HttpError> {
    let target = format!("{base_url}{endpoint}");

    let valid = target.chars().all(is_uri_char)
        && Url::parse(&target).is_ok_and(|url| url.has_host());
    if !valid {
        return Err(HttpError::InvalidEndpoint { url: target });
    }

    if query.is_empty() {
        Ok(target)
    } else {
        Ok(format!("{target}?{query}"))
    }
}

/// Unreserved, reserved and `%` characters of RFC 3986.
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=%".contains(c)
}

/// Lists the entries of an object or array; arrays are keyed by index.
fn collection_entries(value: &Value) -> Option<Vec<(String, &Value)>> {
    match value {
        Value::Object(map) => Some(map.iter().map(|(k, v)| (k.clone(), v)).collect()),
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        ),
        _ => None,
    }
}

/// Booleans render as `1` and the empty string, matching the form the API
/// has always received.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null => String::new(),
        other => other.to_string(),
    }
}
