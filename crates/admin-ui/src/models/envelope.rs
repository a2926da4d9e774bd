//! HAL collection envelopes returned by the course and student services
//!
//! ```json
//! { "_embedded": { "courses": [ { "id": "HDSE", ..., "_links": { "self": { "href": ".../courses/HDSE" } } } ] },
//!   "_links": { ... }, "page": { ... } }
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::models::{ConsoleError, ConsoleResult};

/// A record type that is listed inside a HAL `_embedded` map
pub trait HalResource: DeserializeOwned {
    /// Key of the record list inside `_embedded`
    const RELATION: &'static str;

    /// Identifier slot, filled from `_links.self.href` when the service omits it
    fn identifier_mut(&mut self) -> &mut String;
}

#[derive(Deserialize, Debug, Default)]
struct Link {
    #[serde(default)]
    href: String,
}

#[derive(Deserialize, Debug, Default)]
struct EntryLinks {
    #[serde(rename = "self", default)]
    self_link: Option<Link>,
}

#[derive(Deserialize, Debug)]
#[serde(bound = "T: DeserializeOwned")]
struct HalEntry<T> {
    #[serde(flatten)]
    record: T,
    #[serde(rename = "_links", default)]
    links: Option<EntryLinks>,
}

#[derive(Deserialize, Debug)]
#[serde(bound = "T: DeserializeOwned")]
struct HalCollection<T> {
    #[serde(rename = "_embedded", default = "HashMap::new")]
    embedded: HashMap<String, Vec<HalEntry<T>>>,
}

/// Last non-empty path segment of a link, ignoring any query or template part
fn last_segment(href: &str) -> Option<&str> {
    let path = href.split(['?', '{', '#']).next().unwrap_or(href);
    path.rsplit('/').find(|segment| !segment.is_empty())
}

/// Decode a HAL collection body into its records.
///
/// A missing `_embedded` object or relation key is an empty collection.
pub fn decode_collection<T: HalResource>(body: &str) -> ConsoleResult<Vec<T>> {
    let collection: HalCollection<T> = serde_json::from_str(body)
        .map_err(|e| ConsoleError::decode(e.to_string(), "HAL+JSON"))?;

    let mut embedded = collection.embedded;
    let entries = embedded.remove(T::RELATION).unwrap_or_default();

    Ok(entries
        .into_iter()
        .map(|entry| {
            let mut record = entry.record;
            let identifier = record.identifier_mut();
            if identifier.is_empty() {
                if let Some(segment) = entry
                    .links
                    .as_ref()
                    .and_then(|l| l.self_link.as_ref())
                    .and_then(|l| last_segment(&l.href))
                {
                    *identifier = segment.to_string();
                }
            }
            record
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Student};

    #[test]
    fn test_decode_courses() {
        let body = r#"{
            "_embedded": {
                "courses": [
                    { "id": "HDSE", "name": "Higher Diploma in Software Engineering", "duration": "2 Years",
                      "_links": { "self": { "href": "http://localhost:8081/courses/HDSE" } } },
                    { "id": "CMJD", "name": "Comprehensive Master Java Developer", "duration": "6 Months" }
                ]
            },
            "_links": { "self": { "href": "http://localhost:8081/courses?page=0&size=20" } },
            "page": { "size": 20, "totalElements": 2, "totalPages": 1, "number": 0 }
        }"#;

        let courses: Vec<Course> = decode_collection(body).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].id, "HDSE");
        assert_eq!(courses[1].name, "Comprehensive Master Java Developer");
    }

    #[test]
    fn test_identifier_recovered_from_self_link() {
        let body = r#"{
            "_embedded": {
                "students": [
                    { "fullName": "Nimal Silva", "address": "Colombo", "contact": "071-0000000",
                      "email": "nimal@example.lk",
                      "_links": { "self": { "href": "http://localhost:8082/students/S042" },
                                  "student": { "href": "http://localhost:8082/students/S042{?projection}", "templated": true } } }
                ]
            }
        }"#;

        let students: Vec<Student> = decode_collection(body).unwrap();
        assert_eq!(students[0].registration_number, "S042");
    }

    #[test]
    fn test_missing_embedded_is_empty() {
        let courses: Vec<Course> = decode_collection(r#"{ "_links": {} }"#).unwrap();
        assert!(courses.is_empty());

        let courses: Vec<Course> = decode_collection(r#"{ "_embedded": { "other": [] } }"#).unwrap();
        assert!(courses.is_empty());
    }

    #[test]
    fn test_malformed_payload_is_decode_error() {
        let err = decode_collection::<Course>("[1, 2, 3]").unwrap_err();
        assert_eq!(err.error_code(), "DECODE_ERROR");

        let err = decode_collection::<Course>(r#"{ "_embedded": { "courses": [ { "id": "X" } ] } }"#)
            .unwrap_err();
        assert_eq!(err.error_code(), "DECODE_ERROR");
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("http://h/courses/HDSE"), Some("HDSE"));
        assert_eq!(last_segment("http://h/courses/HDSE/"), Some("HDSE"));
        assert_eq!(last_segment("http://h/students/S001{?projection}"), Some("S001"));
        assert_eq!(last_segment(""), None);
    }
}
