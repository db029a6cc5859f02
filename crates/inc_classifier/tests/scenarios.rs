use inc_classifier::{clean, Classifier, RejectionReason};
use inc_core::ArticleRecord;

fn article(id: i64, title: &str, content: &str) -> ArticleRecord {
    ArticleRecord::new(id, title, "", content)
}

fn reason_of(title: &str, content: &str) -> Option<RejectionReason> {
    Classifier::new().classify(&article(1, title, content)).reason
}

#[test]
fn test_current_accident_is_accepted() {
    assert_eq!(
        reason_of(
            "Incidente in via Roma, due feriti",
            "Un'auto ha perso il controllo ed è finita contro un muro questa mattina",
        ),
        None
    );
}

#[test]
fn test_public_investment_is_off_topic() {
    assert_eq!(
        reason_of(
            "Investimenti pubblici per la città",
            "Il comune ha approvato un piano di investimenti da 2 milioni di euro",
        ),
        Some(RejectionReason::NegativePattern)
    );
}

#[test]
fn test_quiet_weekend_is_rejected_by_negation() {
    let decision = Classifier::new().classify(&article(
        1,
        "Nessun incidente questo weekend",
        "Giornata tranquilla sulle strade",
    ));
    assert_eq!(decision.reason, Some(RejectionReason::ExplicitNegation));
    assert_eq!(decision.gate, Some("explicit_negation"));
}

#[test]
fn test_railway_commemoration_is_off_topic() {
    assert_eq!(
        reason_of(
            "Ricordo del disastro ferroviario",
            "Cerimonia in memoria delle vittime",
        ),
        Some(RejectionReason::NegativePattern)
    );
}

#[test]
fn test_new_one_way_street_is_rejected_by_viability() {
    assert_eq!(
        reason_of("Nuovo senso unico in via Garibaldi", ""),
        Some(RejectionReason::Viability)
    );
}

#[test]
fn test_one_way_street_with_fresh_accident_is_accepted() {
    assert_eq!(
        reason_of(
            "Senso unico in via Garibaldi",
            "Questa mattina si è verificato un incidente con due feriti",
        ),
        None
    );
}

#[test]
fn test_negative_pattern_wins_over_positive_evidence() {
    // Vehicle and accident vocabulary present, but the topic is the highway code.
    assert_eq!(
        reason_of(
            "Nuovo codice della strada",
            "Più controlli dopo l'ennesimo incidente tra auto in via Roma",
        ),
        Some(RejectionReason::NegativePattern)
    );
}

#[test]
fn test_commemoration_of_someone_lost_in_an_accident_is_off_topic() {
    assert_eq!(
        reason_of(
            "Giovane scomparso in un incidente nella notte sulla SP231",
            "L'auto è uscita di strada",
        ),
        Some(RejectionReason::NegativePattern)
    );
    assert_eq!(
        reason_of(
            "Una borsa di studio per ricordarli",
            "Scomparsi in un incidente stradale nel 1993 sulla provinciale",
        ),
        Some(RejectionReason::NegativePattern)
    );
}

#[test]
fn test_specific_incident_overrides_generic_summary() {
    assert_eq!(
        reason_of(
            "Tra incendi e incidenti, settimana di lavoro per i soccorritori",
            "Questa mattina si è verificato un incidente in via Roma: un'auto si è ribaltata",
        ),
        None
    );
}

#[test]
fn test_missing_accident_indicator() {
    assert_eq!(
        reason_of("Auto parcheggiata in doppia fila in via Roma", ""),
        Some(RejectionReason::MissingAccident)
    );
}

fn corpus() -> Vec<ArticleRecord> {
    vec![
        article(1, "Incidente in via Roma, due feriti", "Un'auto ha perso il controllo questa mattina"),
        article(2, "Investimenti pubblici per la città", "Piano di investimenti da 2 milioni di euro"),
        article(3, "Nessun incidente questo weekend", "Giornata tranquilla sulle strade"),
        article(4, "Ricordo del disastro ferroviario", "Cerimonia in memoria delle vittime"),
        article(5, "Nuovo senso unico in via Garibaldi", ""),
        article(6, "Senso unico in via Garibaldi", "Questa mattina si è verificato un incidente con due feriti"),
        article(7, "Tamponamento sulla SP231", "Il conducente di una moto è rimasto ferito"),
        ArticleRecord::default(),
    ]
}

#[test]
fn test_clean_is_complete() {
    let records = corpus();
    let outcome = clean(records.clone());
    assert_eq!(outcome.kept.len() + outcome.removed.len(), records.len());
    let kept: Vec<_> = outcome.kept.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(kept, vec!["1", "6", "7"]);
}

#[test]
fn test_clean_is_idempotent() {
    let once = clean(corpus()).kept;
    let twice = clean(once.clone()).kept;
    assert_eq!(once, twice);
}

#[test]
fn test_kept_records_pass_every_gate() {
    let classifier = Classifier::new();
    for record in clean(corpus()).kept {
        assert!(classifier.classify(&record).accepted, "{}", record.title);
    }
}
