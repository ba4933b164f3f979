//! Guided Checkout
//!
//! Walks one user through the wizard against the in-memory store: a danger
//! warning, an assessment, a medication order that first fails and then goes
//! through, and the admin view of the store afterwards.
//!
//! Run with: RUST_LOG=debug cargo run --example guided_checkout

use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use symptom_wizard::catalog::Catalog;
use symptom_wizard::config::WizardConfig;
use symptom_wizard::ids::{AssessmentLogId, BodyPartId, MedicationId, OrderId, SessionId, SymptomId};
use symptom_wizard::persistence::{
    AssessmentRecord, CustomerInfo, InMemoryStore, OrderRecord, OrderStatus, PaymentMethod,
    PersistenceError, SessionMetadata, SessionUpdate, WizardStore,
};
use symptom_wizard::wizard::{Action, Answer, Assessment, Notice, PaymentDetails, Severity};
use symptom_wizard::{Wizard, WizardCheckpoint};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Store that rejects the first order it sees.
#[derive(Clone, Default)]
struct FirstOrderFails {
    inner: InMemoryStore,
    tripped: Arc<AtomicBool>,
}

impl WizardStore for FirstOrderFails {
    fn create_session(&self, metadata: &SessionMetadata) -> Result<SessionId, PersistenceError> {
        self.inner.create_session(metadata)
    }

    fn update_session(
        &self,
        id: &SessionId,
        update: &SessionUpdate,
    ) -> Result<(), PersistenceError> {
        self.inner.update_session(id, update)
    }

    fn save_assessment(
        &self,
        record: &AssessmentRecord,
    ) -> Result<AssessmentLogId, PersistenceError> {
        self.inner.save_assessment(record)
    }

    fn create_order(&self, order: &OrderRecord) -> Result<OrderId, PersistenceError> {
        if !self.tripped.swap(true, Ordering::SeqCst) {
            return Err(PersistenceError::Unavailable("payment gateway timeout".to_string()));
        }
        self.inner.create_order(order)
    }
}

fn report(notices: &[Notice]) {
    for notice in notices {
        match notice {
            Notice::Invalid(errors) => {
                for error in errors {
                    println!("  ! {}", error);
                }
            }
            Notice::OrderFailed(reason) => println!("  ! Order failed: {}", reason),
        }
    }
}

async fn step(wizard: &mut Wizard<FirstOrderFails>, action: Action) {
    println!("> {}", action.name());
    let notices = wizard.dispatch(action).await;
    report(&notices);
    let progress = wizard.progress();
    let back = if wizard.can_go_back() { "  (back available)" } else { "" };
    println!(
        "  [{}/{}] {}{}",
        progress.number, progress.total, progress.label, back
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = WizardConfig::from_json(r#"{ "client": { "user_agent": "demo", "platform": "cli" } }"#)?;
    let store = FirstOrderFails::default();
    let mut wizard = Wizard::new(Catalog::builtin(), config, store.clone());

    info!("Starting guided checkout");
    wizard.start().await;

    step(&mut wizard, Action::SubmitAge(0)).await;
    step(&mut wizard, Action::SubmitAge(29)).await;
    step(&mut wizard, Action::ChooseBodyPart(BodyPartId::new("chest"))).await;

    let offered: Vec<&str> = wizard.visible_symptoms().iter().map(|s| s.name.as_str()).collect();
    println!("  symptoms: {}", offered.join(", "));

    step(&mut wizard, Action::ToggleSymptom(SymptomId::new("cough"))).await;
    step(&mut wizard, Action::ToggleSymptom(SymptomId::new("chest-pain"))).await;
    step(&mut wizard, Action::CompleteSelection).await;
    println!(
        "  warning about: {:?}",
        wizard.state().danger_warning_symptoms()
    );

    // Change of mind: drop the chest pain instead of seeing a doctor.
    step(&mut wizard, Action::ContinueAfterWarning).await;
    step(&mut wizard, Action::Back).await;
    step(&mut wizard, Action::ToggleSymptom(SymptomId::new("chest-pain"))).await;
    step(&mut wizard, Action::CompleteSelection).await;
    step(
        &mut wizard,
        Action::SubmitAssessment(
            Assessment::new(SymptomId::new("cough"))
                .with_answer("duration_days", Answer::Scale(4))
                .with_answer("kind", Answer::Choices(vec!["dry".to_string()])),
        ),
    )
    .await;
    step(&mut wizard, Action::CompleteSelection).await;
    step(&mut wizard, Action::ConfirmSymptoms(Severity::Low)).await;

    for medication in wizard.recommended_medications() {
        println!(
            "  - {} ({})",
            medication.name,
            wizard.config().format_amount(medication.price_cents)
        );
    }
    step(
        &mut wizard,
        Action::RequestOrder(vec![MedicationId::new("cough-syrup")]),
    )
    .await;

    let checkpoint = wizard.checkpoint().to_json()?;
    let resumed = WizardCheckpoint::from_json(&checkpoint)?;
    println!("  checkpoint {} at step '{}'", resumed.id, resumed.state.step());

    let details = PaymentDetails {
        customer: CustomerInfo {
            name: "Farid Hassan".to_string(),
            email: "farid@example.my".to_string(),
            phone: "+60 19-876 5432".to_string(),
            address: "3 Lorong Maarof, Bangsar".to_string(),
        },
        payment_method: PaymentMethod::OnlineBanking,
    };
    step(&mut wizard, Action::SubmitPayment(details.clone())).await;
    step(&mut wizard, Action::SubmitPayment(details)).await;

    if let Some(order_id) = wizard.state().last_order_id() {
        store
            .inner
            .update_order_status(order_id, OrderStatus::Confirmed)?;
    }

    let stats = store.inner.order_statistics();
    println!(
        "Orders: {}, revenue {}",
        stats.total_orders,
        wizard.config().format_amount(stats.total_revenue_cents)
    );
    println!("Symptoms logged: {:?}", store.inner.symptom_statistics().symptom_count);
    println!("Path: {:?}", wizard.history().get_path());

    Ok(())
}
