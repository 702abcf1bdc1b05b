use serde::{Deserialize, Serialize};

use super::{Article, Clinic, Directory, Doctor};

/// Restricts which sections of the directory a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFilter {
    #[default]
    All,
    Doctors,
    Clinics,
    Articles,
}

impl SearchFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Some(Self::All),
            "doctors" => Some(Self::Doctors),
            "clinics" => Some(Self::Clinics),
            "articles" => Some(Self::Articles),
            _ => None,
        }
    }

    fn includes(self, section: SearchFilter) -> bool {
        self == SearchFilter::All || self == section
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SearchResults {
    pub doctors: Vec<Doctor>,
    pub clinics: Vec<Clinic>,
    pub articles: Vec<Article>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.doctors.len() + self.clinics.len() + self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Directory {
    /// Exact substring search. An empty term matches every entry.
    pub fn search(&self, term: &str, filter: SearchFilter) -> SearchResults {
        let doctors = if filter.includes(SearchFilter::Doctors) {
            self.doctors
                .iter()
                .filter(|doctor| doctor_matches(doctor, term))
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        let clinics = if filter.includes(SearchFilter::Clinics) {
            self.clinics
                .iter()
                .filter(|clinic| clinic.name.contains(term))
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        let articles = if filter.includes(SearchFilter::Articles) {
            self.articles
                .iter()
                .filter(|article| article.title.contains(term) || article.category.contains(term))
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        SearchResults {
            doctors,
            clinics,
            articles,
        }
    }
}

fn doctor_matches(doctor: &Doctor, term: &str) -> bool {
    doctor.name.contains(term)
        || doctor.specialization.contains(term)
        || doctor.symptoms.iter().any(|symptom| symptom.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_returns_everything() {
        let directory = Directory::standard();
        let results = directory.search("", SearchFilter::All);
        assert_eq!(results.doctors.len(), 4);
        assert_eq!(results.clinics.len(), 3);
        assert_eq!(results.articles.len(), 3);
        assert_eq!(results.total(), 10);
    }

    #[test]
    fn symptom_tags_find_doctors() {
        let directory = Directory::standard();
        let results = directory.search("تسوس", SearchFilter::All);
        let names: Vec<&str> = results.doctors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["د. محمد أحمد", "د. فاطمة علي"]);
        assert!(results.clinics.is_empty());
        assert_eq!(results.articles.len(), 1);
    }

    #[test]
    fn filter_limits_sections() {
        let directory = Directory::standard();
        let results = directory.search("تجميل", SearchFilter::Clinics);
        assert!(results.doctors.is_empty());
        assert_eq!(results.clinics.len(), 1);
        assert_eq!(results.clinics[0].name, "تجميل الأسنان");
    }

    #[test]
    fn articles_match_on_category() {
        let directory = Directory::standard();
        let results = directory.search("نصائح", SearchFilter::Articles);
        assert_eq!(results.articles.len(), 2);
    }

    #[test]
    fn unknown_term_returns_nothing() {
        let directory = Directory::standard();
        assert!(directory.search("orthodontics", SearchFilter::All).is_empty());
    }

    #[test]
    fn parses_filter_names() {
        assert_eq!(SearchFilter::parse("Doctors"), Some(SearchFilter::Doctors));
        assert_eq!(SearchFilter::parse(""), Some(SearchFilter::All));
        assert_eq!(SearchFilter::parse("patients"), None);
    }
}
