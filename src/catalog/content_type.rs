use std::fmt;

/// Semantic content types the agent can ask the catalog for.
///
/// `Station` resolves to station factories (`SF`), the seedable templates,
/// rather than a listener's saved stations (`ST`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Artist,
    Station,
    Album,
    Track,
    Podcast,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Artist,
        ContentType::Station,
        ContentType::Album,
        ContentType::Track,
        ContentType::Podcast,
    ];

    /// Resolve a caller-supplied label, ignoring letter case.
    ///
    /// Surrounding whitespace is not stripped: `"artist "` does not resolve.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "ARTIST" => Some(ContentType::Artist),
            "STATION" => Some(ContentType::Station),
            "ALBUM" => Some(ContentType::Album),
            "TRACK" => Some(ContentType::Track),
            "PODCAST" => Some(ContentType::Podcast),
            _ => None,
        }
    }

    /// Provider type code used in the `types:` argument of the search query.
    pub fn code(self) -> &'static str {
        match self {
            ContentType::Artist => "AR",
            ContentType::Station => "SF",
            ContentType::Album => "AL",
            ContentType::Track => "TR",
            ContentType::Podcast => "PC",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentType::Artist => "ARTIST",
            ContentType::Station => "STATION",
            ContentType::Album => "ALBUM",
            ContentType::Track => "TRACK",
            ContentType::Podcast => "PODCAST",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
