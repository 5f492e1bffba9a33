//! JSON Resume document model.
//!
//! Scalars missing from a document deserialize to empty strings and lists to
//! empty vectors, so themes can read any field without unwrapping. Top-level
//! sections stay `Option` to keep "omitted" distinct from "empty".

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Root document. `basics` is the only required section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub basics: Basics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<Vec<Work>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteer: Option<Vec<Volunteer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awards: Option<Vec<Award>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publications: Option<Vec<Publication>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<Interest>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
}

impl Resume {
    /// Parses a resume from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a resume from any reader, e.g. an opened `resume.json`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Basics {
    pub name: String,
    pub label: String,
    pub picture: String,
    /// Newer schema name for `picture`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    /// Newer schema name for `website`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub summary: String,
    pub location: Location,
    pub profiles: Vec<Profile>,
}

impl Basics {
    /// `picture`, or `image` when `picture` is empty.
    pub fn picture(&self) -> &str {
        first_non_empty(&self.picture, &self.image)
    }

    /// `website`, or `url` when `website` is empty.
    pub fn website(&self) -> &str {
        first_non_empty(&self.website, &self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub country_code: String,
    pub region: String,
}

/// Social network profile. Network names are not unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub network: String,
    pub username: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Work {
    pub company: String,
    /// Newer schema name for `company`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub position: String,
    pub website: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub start_date: String,
    pub end_date: String,
    pub summary: String,
    pub highlights: Vec<String>,
}

impl Work {
    pub fn company(&self) -> &str {
        first_non_empty(&self.company, &self.name)
    }

    pub fn website(&self) -> &str {
        first_non_empty(&self.website, &self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Volunteer {
    pub organization: String,
    pub position: String,
    pub website: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub start_date: String,
    pub end_date: String,
    pub summary: String,
    pub highlights: Vec<String>,
}

impl Volunteer {
    pub fn website(&self) -> &str {
        first_non_empty(&self.website, &self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub area: String,
    pub study_type: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Award {
    pub title: String,
    pub date: String,
    pub awarder: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Publication {
    pub name: String,
    pub publisher: String,
    pub release_date: String,
    pub website: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub summary: String,
}

impl Publication {
    pub fn website(&self) -> &str {
        first_non_empty(&self.website, &self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: String,
    pub keywords: Vec<String>,
}

/// Spoken language. There is no "native" flag; see `get_native_language`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    pub language: String,
    pub fluency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Interest {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reference {
    pub name: String,
    pub reference: String,
}

// Older and newer schema spellings may both be present; the older one wins
// unless it is empty.
fn first_non_empty<'a>(preferred: &'a str, fallback: &'a str) -> &'a str {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ThemeUtilsError;

    const FULL_RESUME: &str = r#"{
        "basics": {
            "name": "Richard Hendriks",
            "label": "Programmer",
            "picture": "",
            "email": "richard.hendriks@mail.com",
            "phone": "(912) 555-4321",
            "website": "http://richardhendricks.example.com",
            "summary": "Richard hails from Tulsa.",
            "location": {
                "address": "2712 Broadway St",
                "postalCode": "CA 94115",
                "city": "San Francisco",
                "countryCode": "US",
                "region": "California"
            },
            "profiles": [
                { "network": "Twitter", "username": "neutralthoughts", "url": "" },
                { "network": "SoundCloud", "username": "dandymusicnl", "url": "https://soundcloud.example.com/dandymusicnl" }
            ]
        },
        "work": [{
            "company": "Pied Piper",
            "position": "CEO/President",
            "website": "http://piedpiper.example.com",
            "startDate": "2013-12-01",
            "endDate": "2014-12-01",
            "summary": "Pied Piper is a multi-platform technology.",
            "highlights": ["Build an algorithm for artist to detect if their music was violating copy right infringement laws"]
        }],
        "education": [{
            "institution": "University of Oklahoma",
            "area": "Information Technology",
            "studyType": "Bachelor",
            "startDate": "2011-06-01",
            "endDate": "2014-01-01",
            "gpa": "4.0",
            "courses": ["DB1101 - Basic SQL", "CS2011 - Java Introduction"]
        }],
        "languages": [{ "language": "English", "fluency": "Native speaker" }]
    }"#;

    #[test]
    fn test_parse_full_resume() {
        let resume = Resume::from_json_str(FULL_RESUME).unwrap();
        assert_eq!(resume.basics.name, "Richard Hendriks");
        assert_eq!(resume.basics.location.postal_code, "CA 94115");
        assert_eq!(resume.basics.location.country_code, "US");
        assert_eq!(resume.basics.profiles.len(), 2);

        let work = resume.work.as_deref().unwrap();
        assert_eq!(work[0].start_date, "2013-12-01");
        assert_eq!(resume.education.as_ref().unwrap()[0].study_type, "Bachelor");
    }

    #[test]
    fn test_omitted_sections_are_none() {
        let resume = Resume::from_json_str(FULL_RESUME).unwrap();
        assert!(resume.volunteer.is_none());
        assert!(resume.awards.is_none());
        assert!(resume.references.is_none());
    }

    #[test]
    fn test_empty_section_is_some_empty() {
        let resume = Resume::from_json_str(r#"{"basics": {}, "skills": []}"#).unwrap();
        assert_eq!(resume.skills, Some(vec![]));
    }

    #[test]
    fn test_missing_scalars_default_to_empty() {
        let resume = Resume::from_json_str(r#"{"basics": {"name": "Gilfoyle"}}"#).unwrap();
        assert_eq!(resume.basics.email, "");
        assert_eq!(resume.basics.location, Location::default());
        assert!(resume.basics.profiles.is_empty());
    }

    #[test]
    fn test_missing_basics_is_error() {
        let err = Resume::from_json_str(r#"{"work": []}"#).unwrap_err();
        assert!(matches!(err, ThemeUtilsError::Json(_)));
    }

    #[test]
    fn test_newer_schema_names() {
        let json = r#"{
            "basics": { "image": "https://img.example.com/me.png", "url": "https://me.example.com" },
            "work": [{ "name": "Hooli", "url": "https://hooli.example.com" }],
            "volunteer": [{ "organization": "CoderDojo", "url": "https://coderdojo.example.com" }],
            "publications": [{ "name": "Middle-Out", "url": "https://papers.example.com/mo" }]
        }"#;
        let resume = Resume::from_json_str(json).unwrap();
        assert_eq!(resume.basics.picture(), "https://img.example.com/me.png");
        assert_eq!(resume.basics.website(), "https://me.example.com");
        let work = &resume.work.as_ref().unwrap()[0];
        assert_eq!(work.company(), "Hooli");
        assert_eq!(work.website(), "https://hooli.example.com");
        assert_eq!(
            resume.volunteer.as_ref().unwrap()[0].website(),
            "https://coderdojo.example.com"
        );
        assert_eq!(
            resume.publications.as_ref().unwrap()[0].website(),
            "https://papers.example.com/mo"
        );
    }

    #[test]
    fn test_both_schema_names_present() {
        let json = r#"{
            "basics": {
                "picture": "old.png", "image": "new.png",
                "website": "https://old.example.com", "url": "https://new.example.com"
            },
            "work": [{ "company": "Hooli", "name": "Hooli XYZ", "website": "", "url": "https://hooli.example.com" }]
        }"#;
        let resume = Resume::from_json_str(json).unwrap();
        assert_eq!(resume.basics.picture(), "old.png");
        assert_eq!(resume.basics.website(), "https://old.example.com");
        let work = &resume.work.as_ref().unwrap()[0];
        assert_eq!(work.company(), "Hooli");
        assert_eq!(work.website(), "https://hooli.example.com");
    }

    #[test]
    fn test_same_value_under_both_names() {
        let resume =
            Resume::from_json_str(r#"{"basics": {"picture": "a.png", "image": "a.png"}}"#).unwrap();
        assert_eq!(resume.basics.picture(), "a.png");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"basics": {"name": "Dinesh"}, "meta": {"theme": "flat"}, "projects": []}"#;
        assert!(Resume::from_json_str(json).is_ok());
    }

    #[test]
    fn test_from_reader() {
        let resume = Resume::from_reader(FULL_RESUME.as_bytes()).unwrap();
        assert_eq!(resume.basics.label, "Programmer");
    }

    #[test]
    fn test_serializes_camel_case_and_skips_absent_sections() {
        let resume = Resume::from_json_str(FULL_RESUME).unwrap();
        let value = serde_json::to_value(&resume).unwrap();
        assert_eq!(value["basics"]["location"]["countryCode"], "US");
        assert_eq!(value["work"][0]["startDate"], "2013-12-01");
        assert!(value.get("volunteer").is_none());
    }
}
