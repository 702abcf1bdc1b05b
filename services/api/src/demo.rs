use crate::infra::InMemoryConversationStore;
use chrono::Local;
use clap::Args;
use dento_care::assistant::{AssistantCatalog, AssistantKind, Provenance, RoutedReply};
use dento_care::config::AssistantConfig;
use dento_care::conversation::{
    ConversationService, PatientMessage, Speaker, StartConversation, Turn,
};
use dento_care::directory::{SearchFilter, SearchResults};
use dento_care::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RouteArgs {
    /// Assistant to ask: symptom_checker, floating_triage or faq
    #[arg(long, default_value = "symptom_checker")]
    pub(crate) assistant: AssistantKind,
    /// Treat the message as carrying an uploaded photo
    #[arg(long)]
    pub(crate) image: bool,
    /// Patient message (words are joined with spaces)
    pub(crate) text: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Restrict results to all, doctors, clinics or articles
    #[arg(long, default_value = "all")]
    pub(crate) filter: String,
    /// Search term; omit to list the whole directory
    pub(crate) term: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Name used in the personalised greetings
    #[arg(long)]
    pub(crate) patient_name: Option<String>,
}

pub(crate) fn run_route(args: RouteArgs) -> Result<(), AppError> {
    let RouteArgs {
        assistant,
        image,
        text,
    } = args;

    let catalog = AssistantCatalog::standard()?;
    let text = text.join(" ");
    let routed = catalog.reply(assistant, &text, image);

    println!("Assistant: {assistant}");
    if image {
        println!("Input: {text:?} (with image)");
    } else {
        println!("Input: {text:?}");
    }
    render_routed_reply(&routed);

    Ok(())
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs { filter, term } = args;

    let filter = SearchFilter::parse(&filter)
        .ok_or_else(|| AppError::Request(format!("unknown search filter '{filter}'")))?;
    let term = term.unwrap_or_default();

    let catalog = AssistantCatalog::standard()?;
    let results = catalog.directory().search(&term, filter);
    render_search_results(&term, &results);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut config = AssistantConfig::default();
    if let Some(name) = args.patient_name {
        config.default_patient_name = name;
    }

    let catalog = Arc::new(AssistantCatalog::standard()?);
    let store = Arc::new(InMemoryConversationStore::default());
    let service = ConversationService::new(catalog, store.clone(), &config);

    println!("Dento patient assistant demo");

    for (assistant, script) in demo_scripts() {
        println!("\n== {assistant} ==");
        let conversation = service
            .start(StartConversation {
                assistant,
                patient_name: None,
            })?;

        for turn in &conversation.turns {
            render_turn(turn);
        }

        for message in script {
            let exchange = service.post_message(&conversation.id, message)?;
            render_turn(&exchange.user);
            render_turn(&exchange.assistant);
            println!("   ({})", describe_provenance(&exchange.provenance));
        }
    }

    println!("\nConversations recorded: {}", store.len());
    Ok(())
}

fn demo_scripts() -> Vec<(AssistantKind, Vec<PatientMessage>)> {
    vec![
        (
            AssistantKind::SymptomChecker,
            vec![
                PatientMessage::text("عندي ألم شديد في الضرس"),
                PatientMessage::text("أحتاج خلع ضرس وعندي نزيف في اللثة"),
                PatientMessage::image(),
            ],
        ),
        (
            AssistantKind::FloatingTriage,
            vec![
                PatientMessage::text("أريد تبييض أسناني"),
                PatientMessage::text("تنظيف"),
            ],
        ),
        (
            AssistantKind::Faq,
            vec![
                PatientMessage::text("كيف أحجز موعد؟"),
                PatientMessage::text("ما ساعات العمل؟"),
                PatientMessage::text("هل لديكم موقف سيارات؟"),
            ],
        ),
    ]
}

fn render_turn(turn: &Turn) {
    let speaker = match turn.speaker {
        Speaker::User => "Patient",
        Speaker::Assistant => "Assistant",
    };
    let sent_at = turn.sent_at.with_timezone(&Local).format("%H:%M");
    println!("[{sent_at}] {speaker}: {}", turn.content);

    if let Some(category) = &turn.suggested_category {
        println!("   العيادة المقترحة: {category}");
    }
    for doctor in &turn.suggested_doctors {
        println!("   - {} ({:.1})", doctor.name, doctor.rating);
    }
}

fn render_routed_reply(routed: &RoutedReply) {
    println!("Reply: {}", routed.reply.message);
    match &routed.reply.suggested_category {
        Some(category) => println!("Suggested category: {category}"),
        None => println!("Suggested category: none"),
    }
    if !routed.reply.suggested_doctors.is_empty() {
        println!("Suggested doctors");
        for doctor in &routed.reply.suggested_doctors {
            println!("- {} (rating {:.1})", doctor.name, doctor.rating);
        }
    }
    println!("Matched by: {}", describe_provenance(&routed.provenance));
}

fn render_search_results(term: &str, results: &SearchResults) {
    if term.is_empty() {
        println!("Directory listing ({} entries)", results.total());
    } else {
        println!("Results for {term:?}: {}", results.total());
    }

    if !results.doctors.is_empty() {
        println!("\nDoctors");
        for doctor in &results.doctors {
            println!(
                "- {} | {} | {} | rating {:.1}",
                doctor.name, doctor.specialization, doctor.clinic, doctor.rating
            );
        }
    }

    if !results.clinics.is_empty() {
        println!("\nClinics");
        for clinic in &results.clinics {
            println!(
                "- {}: {} doctors, {} patients",
                clinic.name, clinic.doctors, clinic.patients
            );
        }
    }

    if !results.articles.is_empty() {
        println!("\nArticles");
        for article in &results.articles {
            println!(
                "- {} [{}] {}",
                article.title, article.category, article.published_on
            );
        }
    }
}

fn describe_provenance(provenance: &Provenance) -> String {
    match provenance {
        Provenance::Rule { index, trigger } => format!("rule {index}, trigger '{trigger}'"),
        Provenance::Fallback => "fallback".to_string(),
        Provenance::ImageUpload => "image upload".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dento_care::conversation::ConversationId;

    #[test]
    fn describes_each_provenance() {
        assert_eq!(
            describe_provenance(&Provenance::Rule {
                index: 2,
                trigger: "تقويم".to_string()
            }),
            "rule 2, trigger 'تقويم'"
        );
        assert_eq!(describe_provenance(&Provenance::Fallback), "fallback");
        assert_eq!(describe_provenance(&Provenance::ImageUpload), "image upload");
    }

    #[test]
    fn demo_runs_every_script() {
        let args = DemoArgs {
            patient_name: Some("سارة".to_string()),
        };
        assert!(run_demo(args).is_ok());
    }

    #[test]
    fn search_rejects_unknown_filter() {
        let args = SearchArgs {
            filter: "patients".to_string(),
            term: None,
        };
        assert!(matches!(run_search(args), Err(AppError::Request(_))));
    }

    #[test]
    fn store_failures_are_not_reported_as_bad_requests() {
        let catalog = Arc::new(AssistantCatalog::standard().expect("catalog"));
        let store = Arc::new(InMemoryConversationStore::default());
        let service = ConversationService::new(catalog, store, &AssistantConfig::default());

        let err = service
            .post_message(
                &ConversationId("conv-missing".to_string()),
                PatientMessage::text("ألم"),
            )
            .map_err(AppError::from)
            .expect_err("conversation does not exist");

        assert!(matches!(err, AppError::Conversation(_)));
        assert_eq!(err.status(), axum::http::StatusCode::NOT_FOUND);
    }
}
