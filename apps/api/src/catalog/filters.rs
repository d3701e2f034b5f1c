use serde::Deserialize;

use crate::catalog::{CatalogEvent, College, Resource};

/// Returns the filter value unless it is empty or the `all` wildcard.
fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// Returns the trimmed filter value unless it is empty. `all` is matched literally.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollegeFilter {
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub course: Option<String>,
    pub search: Option<String>,
}

impl CollegeFilter {
    /// location: substring, type: equality, course: substring on any course,
    /// search: substring over name or location. All comparisons ignore case;
    /// only `type` treats `all` as a wildcard.
    pub fn matches(&self, college: &College) -> bool {
        if let Some(location) = present(&self.location) {
            if !contains_ignore_case(&college.location, location) {
                return false;
            }
        }
        if let Some(kind) = active(&self.kind) {
            if !college.kind.eq_ignore_ascii_case(kind) {
                return false;
            }
        }
        if let Some(course) = present(&self.course) {
            if !college
                .courses
                .iter()
                .any(|c| contains_ignore_case(c, course))
            {
                return false;
            }
        }
        if let Some(search) = present(&self.search) {
            if !contains_ignore_case(&college.name, search)
                && !contains_ignore_case(&college.location, search)
            {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, colleges: &'a [College]) -> Vec<&'a College> {
        colleges.iter().filter(|c| self.matches(c)).collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceFilter {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ResourceFilter {
    /// type and category match exactly; search is a case-insensitive
    /// substring over title or description.
    pub fn matches(&self, resource: &Resource) -> bool {
        if let Some(kind) = active(&self.kind) {
            if resource.kind != kind {
                return false;
            }
        }
        if let Some(category) = active(&self.category) {
            if resource.category != category {
                return false;
            }
        }
        if let Some(search) = present(&self.search) {
            if !contains_ignore_case(&resource.title, search)
                && !contains_ignore_case(&resource.description, search)
            {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, resources: &'a [Resource]) -> Vec<&'a Resource> {
        resources.iter().filter(|r| self.matches(r)).collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineFilter {
    pub category: Option<String>,
}

impl TimelineFilter {
    pub fn apply<'a>(&self, events: &'a [CatalogEvent]) -> Vec<&'a CatalogEvent> {
        match active(&self.category) {
            Some(category) => events.iter().filter(|e| e.category == category).collect(),
            None => events.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn some(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_no_college_filters_returns_all() {
        let catalog = catalog();
        assert_eq!(CollegeFilter::default().apply(&catalog.colleges).len(), 3);
    }

    #[test]
    fn test_college_type_filter_ignores_case() {
        let catalog = catalog();
        for raw in ["Private", "private", "PRIVATE"] {
            let filter = CollegeFilter {
                kind: some(raw),
                ..Default::default()
            };
            let hits = filter.apply(&catalog.colleges);
            assert_eq!(hits.len(), 1, "filter {raw}");
            assert!(hits.iter().all(|c| c.kind.eq_ignore_ascii_case("private")));
        }
    }

    #[test]
    fn test_college_type_all_is_wildcard() {
        let catalog = catalog();
        let filter = CollegeFilter {
            kind: some("All"),
            ..Default::default()
        };
        assert_eq!(filter.apply(&catalog.colleges).len(), 3);
    }

    #[test]
    fn test_college_course_substring() {
        let catalog = catalog();
        let filter = CollegeFilter {
            course: some("engineering"),
            ..Default::default()
        };
        let names: Vec<_> = filter.apply(&catalog.colleges).iter().map(|c| c.id).collect();
        assert_eq!(names, vec![1, 2]);
    }

    #[test]
    fn test_college_location_and_type_combine() {
        let catalog = catalog();
        let filter = CollegeFilter {
            location: some("delhi"),
            kind: some("Private"),
            ..Default::default()
        };
        assert!(filter.apply(&catalog.colleges).is_empty());
    }

    #[test]
    fn test_college_search_matches_name_or_location() {
        let catalog = catalog();
        for term in ["nmims", "MUMBAI"] {
            let filter = CollegeFilter {
                search: some(term),
                ..Default::default()
            };
            let ids: Vec<_> = filter.apply(&catalog.colleges).iter().map(|c| c.id).collect();
            assert_eq!(ids, vec![3], "search {term}");
        }
    }

    #[test]
    fn test_college_course_and_location_have_no_wildcard() {
        let catalog = catalog();
        let filter = CollegeFilter {
            course: some("all"),
            ..Default::default()
        };
        assert!(filter.apply(&catalog.colleges).is_empty());
        let filter = CollegeFilter {
            location: some("All"),
            ..Default::default()
        };
        assert!(filter.apply(&catalog.colleges).is_empty());
    }

    #[test]
    fn test_resource_type_is_exact() {
        let catalog = catalog();
        let filter = ResourceFilter {
            kind: some("ebook"),
            ..Default::default()
        };
        assert_eq!(filter.apply(&catalog.resources).len(), 2);

        let filter = ResourceFilter {
            kind: some("EBOOK"),
            ..Default::default()
        };
        assert!(filter.apply(&catalog.resources).is_empty());
    }

    #[test]
    fn test_resource_category_and_search() {
        let catalog = catalog();
        let filter = ResourceFilter {
            kind: None,
            category: some("Career Development"),
            search: some("RESUME"),
        };
        let hits = filter.apply(&catalog.resources);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 5);
    }

    #[test]
    fn test_timeline_category_filter() {
        let catalog = catalog();
        let filter = TimelineFilter {
            category: some("exam"),
        };
        assert_eq!(filter.apply(&catalog.timeline).len(), 3);
        assert_eq!(
            TimelineFilter {
                category: some("all")
            }
            .apply(&catalog.timeline)
            .len(),
            5
        );
    }
}
