//! GraphQL search document and request envelope.
//!
//! The document shape is fixed. Only the provider type code and the search
//! text vary between calls.

use serde::Serialize;
use serde_json::{Map, Value};

const TYPE_CODE_SLOT: &str = "{type_code}";
const QUERY_SLOT: &str = "{query}";

const SEARCH_TEMPLATE: &str = r#"
{
    search(types: [{type_code}], query: {query}, pagination: {limit: 20}) {
        items {
            id
            ... on Station {
                name
                art {
                    url(size: WIDTH_90)
                }
                description
            }
            ... on StationFactory {
                name
                art {
                    url(size: WIDTH_90)
                }
                exampleArtists { name }
                description
            }
            ... on Track {
                name
                artist { name }
                album { name }
                url
            }
            ... on Podcast {
                name
                publisherName
                url
            }
            ... on Album {
                name
                artist { name }
                releaseDate
                tracks { name }
                trackCount
                url
            }
            ... on Artist {
                name
                sortableName
                url
            }
        }
    }
}
"#;

/// Body posted to the GraphQL endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlEnvelope {
    #[serde(rename = "operationName")]
    pub operation_name: Option<String>,
    pub variables: Map<String, Value>,
    pub query: String,
}

impl GraphQlEnvelope {
    /// Anonymous operation with no variable bindings.
    pub fn anonymous(query: String) -> Self {
        Self {
            operation_name: None,
            variables: Map::new(),
            query,
        }
    }
}

/// Encode free text as a GraphQL string literal.
///
/// GraphQL string escapes are a superset of what JSON emits, so quotes,
/// backslashes and control characters stay inside the argument.
pub fn string_literal(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

/// Fill the search template for one type code and search text.
pub fn search_document(type_code: &str, query: &str) -> String {
    SEARCH_TEMPLATE
        .replacen(TYPE_CODE_SLOT, type_code, 1)
        .replacen(QUERY_SLOT, &string_literal(query), 1)
}

/// Replace every line break with a single space and trim the ends.
pub fn flatten(document: &str) -> String {
    document
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}

/// Build the envelope sent on the wire for a search.
pub fn search_envelope(type_code: &str, query: &str) -> GraphQlEnvelope {
    GraphQlEnvelope::anonymous(flatten(&search_document(type_code, query)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_embeds_code_and_query() {
        let doc = search_document("PC", "space podcasts");
        assert!(doc.contains("search(types: [PC], query: \"space podcasts\", pagination: {limit: 20})"));
        assert!(!doc.contains(TYPE_CODE_SLOT));
        assert!(!doc.contains(QUERY_SLOT));
    }

    #[test]
    fn test_document_projects_every_item_type() {
        let doc = search_document("AR", "x");
        for fragment in [
            "... on Station",
            "... on StationFactory",
            "... on Track",
            "... on Podcast",
            "... on Album",
            "... on Artist",
        ] {
            assert!(doc.contains(fragment), "missing {fragment}");
        }
    }

    #[test]
    fn test_flattened_document_has_no_line_breaks() {
        let envelope = search_envelope("TR", "line one\nline two");
        assert!(!envelope.query.contains('\n'));
        assert!(!envelope.query.contains('\r'));
        assert_eq!(envelope.query, envelope.query.trim());
        assert!(envelope.query.starts_with('{'));
        assert!(envelope.query.ends_with('}'));
        assert!(envelope.query.contains(r#"query: "line one\nline two""#));
    }

    #[test]
    fn test_quotes_cannot_escape_the_argument() {
        let doc = search_document("AR", r#"foo", types: [ST]) { x } #"#);
        assert!(doc.contains(r#"query: "foo\", types: [ST]) { x } #""#));
        assert!(doc.contains("search(types: [AR], query: "));
    }

    #[test]
    fn test_envelope_serialization() {
        let envelope = search_envelope("SF", "jazz");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["operationName"], Value::Null);
        assert_eq!(json["variables"], serde_json::json!({}));
        assert_eq!(json["query"].as_str(), Some(envelope.query.as_str()));

        let raw = serde_json::to_string(&envelope).unwrap();
        assert!(raw.contains(r#""operationName":null"#));
        assert!(raw.contains(r#""variables":{}"#));
    }

    #[test]
    fn test_flatten_trims_and_keeps_inner_spacing() {
        assert_eq!(flatten("\n  a\n b  \n"), "a  b");
        assert_eq!(flatten("a\r\nb"), "a b");
    }
}
