//! Static clinic directory: doctors, clinics and patient-education articles.

mod history;
mod search;

pub use history::SearchHistory;
pub use search::{SearchFilter, SearchResults};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub clinic: String,
    pub rating: f32,
    pub availability: String,
    pub symptoms: Vec<String>,
}

impl Doctor {
    pub fn card(&self) -> DoctorCard {
        DoctorCard {
            id: self.id.clone(),
            name: self.name.clone(),
            rating: self.rating,
        }
    }
}

/// Compact doctor reference shown under an assistant reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorCard {
    pub id: String,
    pub name: String,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinic {
    pub id: String,
    pub name: String,
    pub doctors: u32,
    pub patients: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: String,
    pub published_on: NaiveDate,
}

/// Read-only listing of the faculty clinic's doctors, clinics and articles.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    doctors: Vec<Doctor>,
    clinics: Vec<Clinic>,
    articles: Vec<Article>,
}

impl Directory {
    pub fn new(doctors: Vec<Doctor>, clinics: Vec<Clinic>, articles: Vec<Article>) -> Self {
        Self {
            doctors,
            clinics,
            articles,
        }
    }

    /// The directory shipped with the clinic front end.
    pub fn standard() -> Self {
        let doctors = vec![
            doctor(
                "1",
                "د. محمد أحمد",
                "تشخيص وأشعة",
                "التشخيص والأشعة",
                4.8,
                &["ألم", "تقويم", "تسوس"],
            ),
            doctor(
                "2",
                "د. فاطمة علي",
                "علاج تحفظي",
                "العلاج التحفظي",
                4.9,
                &["تسوس", "لثة", "ألم"],
            ),
            doctor(
                "3",
                "د. سارة حسن",
                "تجميل وتبييض",
                "تجميل الأسنان",
                4.7,
                &["تبييض"],
            ),
            doctor(
                "4",
                "د. علي محمود",
                "جراحة",
                "جراحة الفم والفكين",
                4.6,
                &["زراعة", "خلع"],
            ),
        ];

        let clinics = vec![
            clinic("1", "التشخيص والأشعة", 5, 1200),
            clinic("2", "العلاج التحفظي", 4, 980),
            clinic("3", "تجميل الأسنان", 3, 650),
        ];

        let articles = vec![
            article("1", "كيفية العناية بأسنانك", "نصائح طبية", (2025, 11, 20)),
            article(
                "2",
                "الفرق بين تقويم الأسنان والتبييض",
                "معلومات طبية",
                (2025, 11, 15),
            ),
            article("3", "أسباب تسوس الأسنان وعلاجه", "نصائح طبية", (2025, 11, 10)),
        ];

        Self::new(doctors, clinics, articles)
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn clinics(&self) -> &[Clinic] {
        &self.clinics
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == id)
    }

    /// Resolves doctor ids to cards in the given order, skipping unknown ids.
    pub fn cards<'a, I>(&self, ids: I) -> Vec<DoctorCard>
    where
        I: IntoIterator<Item = &'a String>,
    {
        ids.into_iter()
            .filter_map(|id| self.doctor(id))
            .map(Doctor::card)
            .collect()
    }
}

fn doctor(
    id: &str,
    name: &str,
    specialization: &str,
    clinic: &str,
    rating: f32,
    symptoms: &[&str],
) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialization: specialization.to_string(),
        clinic: clinic.to_string(),
        rating,
        availability: "متاح".to_string(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
    }
}

fn clinic(id: &str, name: &str, doctors: u32, patients: u32) -> Clinic {
    Clinic {
        id: id.to_string(),
        name: name.to_string(),
        doctors,
        patients,
    }
}

fn article(id: &str, title: &str, category: &str, (y, m, d): (i32, u32, u32)) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        published_on: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}
