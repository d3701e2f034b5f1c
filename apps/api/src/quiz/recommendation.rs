//! Static recommendation tables.
//!
//! Two disjoint vocabularies live here: quiz categories map to a
//! `RecommendationRecord`, academic streams map to scored career matches.
//! Both lookups are total; unknown keys resolve to a fallback entry.

use serde::Serialize;

use crate::quiz::models::{Category, RecommendationRecord};

const ENGINEERING: RecommendationRecord = RecommendationRecord {
    stream: "Engineering & Technology",
    description:
        "Your logical thinking and problem-solving skills align well with technical fields.",
    careers: &["Software Engineer", "Data Scientist", "Systems Analyst"],
};

const HUMANITIES: RecommendationRecord = RecommendationRecord {
    stream: "Humanities & Liberal Arts",
    description: "Your communication and language skills suggest success in humanities fields.",
    careers: &["Content Writer", "Journalist", "Teacher", "Lawyer"],
};

const SCIENCE: RecommendationRecord = RecommendationRecord {
    stream: "Science & Mathematics",
    description:
        "Your quantitative abilities indicate strong potential in science and mathematics.",
    careers: &["Research Scientist", "Statistician", "Financial Analyst"],
};

const DESIGN: RecommendationRecord = RecommendationRecord {
    stream: "Creative & Design",
    description: "Your spatial reasoning suggests talent in creative and design fields.",
    careers: &["Architect", "Graphic Designer", "UX Designer"],
};

/// Record returned for keys outside the four categories.
pub const FALLBACK_RECORD: RecommendationRecord = ENGINEERING;

/// Input to the category lookup. Arbitrary strings are a modelled case,
/// not a missed map lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationKey {
    Category(Category),
    Unrecognized(String),
}

impl RecommendationKey {
    pub fn from_raw(raw: &str) -> Self {
        match Category::parse(raw) {
            Some(category) => RecommendationKey::Category(category),
            None => RecommendationKey::Unrecognized(raw.to_string()),
        }
    }
}

impl From<Category> for RecommendationKey {
    fn from(category: Category) -> Self {
        RecommendationKey::Category(category)
    }
}

pub fn recommendation_for(category: Category) -> RecommendationRecord {
    match category {
        Category::Logical => ENGINEERING,
        Category::Verbal => HUMANITIES,
        Category::Numerical => SCIENCE,
        Category::Spatial => DESIGN,
    }
}

pub fn lookup_recommendation(key: &RecommendationKey) -> RecommendationRecord {
    match key {
        RecommendationKey::Category(category) => recommendation_for(*category),
        RecommendationKey::Unrecognized(raw) => {
            tracing::debug!("No recommendation for '{raw}', using fallback");
            FALLBACK_RECORD
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Stream → career matches
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerMatch {
    pub career: &'static str,
    #[serde(rename = "match")]
    pub match_percent: u8,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    SciencePcm,
    SciencePcb,
    Commerce,
}

impl Stream {
    pub const FALLBACK: Stream = Stream::SciencePcm;

    /// Unknown or missing identifiers resolve to `Stream::FALLBACK`.
    pub fn resolve(raw: Option<&str>) -> Stream {
        match raw.map(str::trim) {
            Some("science-pcm") => Stream::SciencePcm,
            Some("science-pcb") => Stream::SciencePcb,
            Some("commerce") => Stream::Commerce,
            _ => Stream::FALLBACK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stream::SciencePcm => "science-pcm",
            Stream::SciencePcb => "science-pcb",
            Stream::Commerce => "commerce",
        }
    }
}

const PCM_CAREERS: &[CareerMatch] = &[
    CareerMatch {
        career: "Software Engineer",
        match_percent: 92,
        reason: "Strong in mathematics and logical thinking",
    },
    CareerMatch {
        career: "Data Scientist",
        match_percent: 88,
        reason: "Excellent analytical and mathematical skills",
    },
    CareerMatch {
        career: "Mechanical Engineer",
        match_percent: 85,
        reason: "Good problem-solving and technical aptitude",
    },
];

const PCB_CAREERS: &[CareerMatch] = &[
    CareerMatch {
        career: "Doctor",
        match_percent: 95,
        reason: "Strong in biology and committed to helping others",
    },
    CareerMatch {
        career: "Research Scientist",
        match_percent: 90,
        reason: "Excellent research and analytical capabilities",
    },
    CareerMatch {
        career: "Pharmacist",
        match_percent: 82,
        reason: "Good knowledge of chemistry and biology",
    },
];

const COMMERCE_CAREERS: &[CareerMatch] = &[
    CareerMatch {
        career: "Chartered Accountant",
        match_percent: 88,
        reason: "Strong mathematical and analytical skills",
    },
    CareerMatch {
        career: "Investment Banker",
        match_percent: 85,
        reason: "Good with numbers and financial analysis",
    },
    CareerMatch {
        career: "Business Analyst",
        match_percent: 83,
        reason: "Excellent analytical and communication skills",
    },
];

pub fn careers_for_stream(stream: Stream) -> &'static [CareerMatch] {
    match stream {
        Stream::SciencePcm => PCM_CAREERS,
        Stream::SciencePcb => PCB_CAREERS,
        Stream::Commerce => COMMERCE_CAREERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_careers() {
        for category in Category::ALL {
            let record = lookup_recommendation(&category.into());
            assert!(!record.careers.is_empty(), "{category} has no careers");
            assert!(!record.stream.is_empty());
        }
    }

    #[test]
    fn test_unrecognized_key_uses_fallback() {
        let record = lookup_recommendation(&RecommendationKey::from_raw("science-pcm"));
        assert_eq!(record, FALLBACK_RECORD);
        assert_eq!(record.stream, "Engineering & Technology");
    }

    #[test]
    fn test_from_raw_recognizes_categories() {
        assert_eq!(
            RecommendationKey::from_raw("Verbal"),
            RecommendationKey::Category(Category::Verbal)
        );
        assert_eq!(
            lookup_recommendation(&RecommendationKey::from_raw("numerical")).stream,
            "Science & Mathematics"
        );
    }

    #[test]
    fn test_stream_resolution_falls_back_to_pcm() {
        assert_eq!(Stream::resolve(Some("commerce")), Stream::Commerce);
        assert_eq!(Stream::resolve(Some("science-pcb")), Stream::SciencePcb);
        assert_eq!(Stream::resolve(Some("logical")), Stream::SciencePcm);
        assert_eq!(Stream::resolve(None), Stream::SciencePcm);
    }

    #[test]
    fn test_career_match_serializes_match_field() {
        let value = serde_json::to_value(careers_for_stream(Stream::SciencePcb)[0]).unwrap();
        assert_eq!(value["career"], "Doctor");
        assert_eq!(value["match"], 95);
    }
}
