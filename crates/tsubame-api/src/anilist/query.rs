//! Fixed GraphQL documents, keyed by operation.
//!
//! The documents are immutable and sent verbatim; caller input travels only
//! through the separate variables object.

use std::borrow::Cow;

const MEDIA_BY_ID_QUERY: &str = r#"
query ($id: Int) {
    Media(id: $id, type: ANIME) {
        id
        title { romaji english native }
    }
}
"#;

const MEDIA_SEARCH_QUERY: &str = r#"
query ($search: String) {
    Page {
        media(search: $search, type: ANIME) {
            id
            title { romaji english native }
        }
    }
}
"#;

const MEDIA_DETAIL_QUERY: &str = r#"
query ($id: Int) {
    Media(id: $id, type: ANIME) {
        id
        title { romaji english native }
        genres
        episodes
        averageScore
        startDate { year month day }
        endDate { year month day }
        description
        status
        coverImage { large }
        characters {
            edges {
                node {
                    name { full }
                }
            }
        }
    }
}
"#;

const CHARACTER_BY_ID_QUERY: &str = r#"
query ($id: Int) {
    Character(id: $id) {
        id
        name { full }
        dateOfBirth { year month day }
        gender
        description
        image { large }
    }
}
"#;

const CHARACTER_SEARCH_QUERY: &str = r#"
query ($name: String) {
    Character(search: $name) {
        id
        name { full }
        dateOfBirth { year month day }
        gender
        description
        image { large }
    }
}
"#;

/// One entry per catalog lookup the client exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    MediaById,
    MediaSearch,
    MediaDetail,
    CharacterById,
    CharacterSearch,
}

impl Operation {
    /// Short name used in request logging.
    pub fn name(self) -> &'static str {
        match self {
            Operation::MediaById => "MediaById",
            Operation::MediaSearch => "MediaSearch",
            Operation::MediaDetail => "MediaDetail",
            Operation::CharacterById => "CharacterById",
            Operation::CharacterSearch => "CharacterSearch",
        }
    }
}

/// Table of GraphQL documents, constructed once and injected into the client.
#[derive(Debug, Clone)]
pub struct QueryTemplates {
    media_by_id: Cow<'static, str>,
    media_search: Cow<'static, str>,
    media_detail: Cow<'static, str>,
    character_by_id: Cow<'static, str>,
    character_search: Cow<'static, str>,
}

impl QueryTemplates {
    /// The document for the given operation.
    pub fn get(&self, op: Operation) -> &str {
        match op {
            Operation::MediaById => &self.media_by_id,
            Operation::MediaSearch => &self.media_search,
            Operation::MediaDetail => &self.media_detail,
            Operation::CharacterById => &self.character_by_id,
            Operation::CharacterSearch => &self.character_search,
        }
    }

    /// Replace the document for one operation, e.g. to request extra fields.
    pub fn with_document(mut self, op: Operation, document: impl Into<String>) -> Self {
        let slot = match op {
            Operation::MediaById => &mut self.media_by_id,
            Operation::MediaSearch => &mut self.media_search,
            Operation::MediaDetail => &mut self.media_detail,
            Operation::CharacterById => &mut self.character_by_id,
            Operation::CharacterSearch => &mut self.character_search,
        };
        *slot = Cow::Owned(document.into());
        self
    }
}

impl Default for QueryTemplates {
    fn default() -> Self {
        Self {
            media_by_id: Cow::Borrowed(MEDIA_BY_ID_QUERY),
            media_search: Cow::Borrowed(MEDIA_SEARCH_QUERY),
            media_detail: Cow::Borrowed(MEDIA_DETAIL_QUERY),
            character_by_id: Cow::Borrowed(CHARACTER_BY_ID_QUERY),
            character_search: Cow::Borrowed(CHARACTER_SEARCH_QUERY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_documents_use_expected_variables() {
        let templates = QueryTemplates::default();
        assert!(templates.get(Operation::MediaById).contains("$id"));
        assert!(templates.get(Operation::MediaSearch).contains("$search"));
        assert!(templates.get(Operation::MediaDetail).contains("$id"));
        assert!(templates.get(Operation::CharacterById).contains("$id"));
        assert!(templates.get(Operation::CharacterSearch).contains("$name"));
    }

    #[test]
    fn test_detail_document_requests_characters() {
        let templates = QueryTemplates::default();
        let doc = templates.get(Operation::MediaDetail);
        assert!(doc.contains("characters"));
        assert!(doc.contains("startDate"));
        assert!(doc.contains("coverImage"));
    }

    #[test]
    fn test_with_document_overrides_one_entry() {
        let templates = QueryTemplates::default()
            .with_document(Operation::MediaById, "query { Media(id: 1) { id } }");
        assert_eq!(
            templates.get(Operation::MediaById),
            "query { Media(id: 1) { id } }"
        );
        assert!(templates.get(Operation::MediaSearch).contains("$search"));
    }
}
