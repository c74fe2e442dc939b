use crate::infra::InMemoryIntelligenceRepository;
use clap::Args;
use pharma_intel::error::AppError;
use pharma_intel::workflows::intelligence::IntelligenceSummary;
use pharma_intel::workflows::scoring::{
    ContentArtifact, GeoOptimization, QuestionAnswer, ScoreBreakdown,
};
use pharma_intel::workflows::submissions::{IntelligenceService, ResearchSubmission};
use serde_json::json;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip scoring the sample content artifact.
    #[arg(long)]
    pub(crate) skip_score: bool,
    /// Print the stored submission record as JSON after the summary.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { skip_score, json } = args;

    println!("Pharma intelligence demo");
    let repository = Arc::new(InMemoryIntelligenceRepository::default());
    let service = IntelligenceService::new(repository);

    let record = service.submit(sample_submission())?;
    println!(
        "- Stored submission {} for {} ({})",
        record.id, record.context.product_name, record.context.indication
    );
    render_summary(&record.summary);

    println!("\nSEO strategy");
    println!("- Positioning: {}", record.strategy.competitive_positioning);
    println!("- Content pillars:");
    for pillar in &record.strategy.content_pillars {
        println!("    - {pillar}");
    }
    println!(
        "- Primary keywords: {}",
        record.strategy.keyword_strategy.primary.join(", ")
    );
    println!(
        "- Long-tail keywords: {}",
        record.strategy.keyword_strategy.longtail.join(", ")
    );
    for localization in &record.strategy.geo_strategy.content_localization {
        println!("    - {}: {}", localization.market, localization.focus);
    }

    if json {
        println!("\n{}", serde_json::to_string_pretty(&record)?);
    }

    if skip_score {
        return Ok(());
    }

    println!("\nContent scoring");
    let breakdown = service.score(&record.id, &sample_artifact())?;
    render_breakdown(&breakdown);

    Ok(())
}

fn render_summary(summary: &IntelligenceSummary) {
    println!(
        "- Stage {} | {} trials ({} active) | enrollment target {}",
        summary.development_stage.label(),
        summary.total_trials,
        summary.active_trials,
        summary.enrollment_target
    );
    println!(
        "- {} significant competitor classes ({} direct) -> {}",
        summary.competitor_count,
        summary.direct_competitor_count,
        summary.market_position.label()
    );
    println!(
        "- First-in-human {} | dose escalation {} | biomarker-driven {}",
        summary.first_in_human_trials,
        summary.dose_escalation_trials,
        summary.biomarker_driven_trials
    );
    println!("- Site countries: {}", summary.trial_site_countries.join(", "));
    if !summary.differentiators.is_empty() {
        println!("- Differentiators: {}", summary.differentiators.join("; "));
    }
    println!("Markets:");
    for market in &summary.markets {
        let proxy = if market.approximate {
            format!(" (via {} proxy)", market.resolved_country)
        } else {
            String::new()
        };
        println!(
            "  - {}{}: {} trials | {} recruiting | {} patients",
            market.market, proxy, market.trial_count, market.recruiting_sites, market.patient_access
        );
    }
}

fn render_breakdown(breakdown: &ScoreBreakdown) {
    println!(
        "- GEO score {}/{} ({}%)",
        breakdown.total_score, breakdown.max_score, breakdown.percentage
    );
    for (category, score) in &breakdown.categories {
        println!(
            "    - {:?}: {}/{} [{}]",
            category,
            score.score,
            score.max,
            score.factors.join(", ")
        );
    }
    if breakdown.recommendations.is_empty() {
        println!("- Recommendations: none");
    } else {
        println!("- Recommendations:");
        for recommendation in &breakdown.recommendations {
            println!("    - {recommendation}");
        }
    }
}

/// Registry, label, safety and competitor records for a fictional KRAS G12C
/// inhibitor in second-line lung cancer.
pub(crate) fn sample_submission() -> ResearchSubmission {
    let payload = json!({
        "context": {
            "product_name": "Xelora",
            "generic_name": "velitinib",
            "indication": "non-small cell lung cancer",
            "line_of_therapy": "second-line",
            "patient_population": ["KRAS G12C mutation"],
            "target_markets": ["USA", "EU", "Japan"],
            "key_biomarkers": ["KRAS G12C"],
            "primary_endpoints": ["objective response rate"]
        },
        "trials": [
            {
                "protocolSection": {
                    "identificationModule": {
                        "nctId": "NCT05100001",
                        "briefTitle": "First-in-Human Dose Escalation of Velitinib in KRAS G12C Solid Tumors"
                    },
                    "statusModule": {
                        "overallStatus": "ACTIVE_NOT_RECRUITING",
                        "startDateStruct": { "date": "2022-03" }
                    },
                    "designModule": {
                        "studyType": "INTERVENTIONAL",
                        "phases": ["PHASE1"],
                        "designInfo": { "allocation": "NON_RANDOMIZED" },
                        "enrollmentInfo": { "count": 48 }
                    },
                    "eligibilityModule": {
                        "eligibilityCriteria": "Documented KRAS G12C mutation. Prior PD-L1 therapy allowed.",
                        "minimumAge": "18 Years"
                    },
                    "contactsLocationsModule": {
                        "locations": [
                            { "facility": "MD Anderson", "city": "Houston", "country": "United States" },
                            { "facility": "Dana-Farber", "city": "Boston", "country": "United States" }
                        ]
                    }
                }
            },
            {
                "protocolSection": {
                    "identificationModule": {
                        "nctId": "NCT05100002",
                        "briefTitle": "Velitinib Versus Docetaxel in Previously Treated KRAS G12C NSCLC"
                    },
                    "statusModule": { "overallStatus": "RECRUITING" },
                    "designModule": {
                        "studyType": "INTERVENTIONAL",
                        "phases": ["PHASE2"],
                        "designInfo": { "allocation": "RANDOMIZED" },
                        "enrollmentInfo": { "count": 220 }
                    },
                    "outcomesModule": {
                        "primaryOutcomes": [{ "measure": "Objective response rate" }],
                        "secondaryOutcomes": [{ "measure": "Progression-free survival" }]
                    },
                    "contactsLocationsModule": {
                        "locations": [
                            { "facility": "Charite", "city": "Berlin", "country": "Germany" },
                            { "facility": "National Cancer Center", "city": "Tokyo", "country": "Japan" },
                            { "facility": "MD Anderson", "city": "Houston", "country": "United States" }
                        ]
                    }
                }
            },
            {
                "protocolSection": {
                    "identificationModule": {
                        "nctId": "NCT05100003",
                        "briefTitle": "Velitinib Food Effect Study in Healthy Volunteers"
                    },
                    "statusModule": { "overallStatus": "COMPLETED" },
                    "designModule": {
                        "phases": ["PHASE1"],
                        "enrollmentInfo": { "count": 24 }
                    },
                    "contactsLocationsModule": {
                        "locations": [{ "city": "Toronto", "country": "Canada" }]
                    }
                }
            }
        ],
        "labels": [
            {
                "indications_and_usage": "Indicated for adults with KRAS G12C-mutated non-small cell lung cancer, a carcinoma of the lung, and patients with hypertension should be monitored.",
                "clinical_pharmacology": "Once daily oral dosing produced sustained target inhibition.",
                "description": "A covalent inhibitor with a favorable safety profile.",
                "openfda": { "pharm_class_epc": ["Kinase Inhibitor [EPC]"] }
            }
        ],
        "adverse_events": {
            "results": [
                { "term": "DIARRHOEA", "count": 412 },
                { "term": "NAUSEA", "count": 300 },
                { "term": "FATIGUE", "count": 188 }
            ]
        },
        "competitors": [
            { "term": "Kinase Inhibitor [EPC]", "count": 64 },
            { "term": "Non-Small Cell Lung Cancer Antibody [EPC]", "count": 12 },
            { "term": "Rare Class [EPC]", "count": 3 }
        ]
    });

    serde_json::from_value(payload).unwrap_or_default()
}

/// Page content as the generation subsystem would produce it for the sample.
pub(crate) fn sample_artifact() -> ContentArtifact {
    ContentArtifact {
        title: "Velitinib for KRAS G12C lung cancer".to_string(),
        h1: Some("What is velitinib and how does it work?".to_string()),
        h2: vec![
            "Who can join the velitinib trial?".to_string(),
            "Reported results".to_string(),
        ],
        body: "Have you already received chemotherapy? Your care team can check if the Phase 2 study is open near you.".to_string(),
        faq: vec![QuestionAnswer {
            question: "Is velitinib approved?".to_string(),
            answer: "No. Velitinib is investigational.".to_string(),
        }],
        schema_markup: Some(json!({
            "@context": "https://schema.org",
            "@type": "Drug",
            "name": "velitinib"
        })),
        geo: GeoOptimization {
            ai_summary: Some(
                "Velitinib is an oral KRAS G12C inhibitor studied in NCT05100002.".to_string(),
            ),
            citations: vec![
                "Journal of Clinical Oncology, 2024".to_string(),
                "ClinicalTrials.gov NCT05100002".to_string(),
                "ASCO Annual Meeting abstract".to_string(),
            ],
            author_credentials: Some("Reviewed by a thoracic oncologist, MD".to_string()),
            statistics: vec![
                "38% objective response rate".to_string(),
                "6.3 months median progression-free survival".to_string(),
            ],
            voice_search_answers: vec![QuestionAnswer {
                question: "What is velitinib used for?".to_string(),
                answer: "It is being studied for KRAS G12C lung cancer.".to_string(),
            }],
            target_platforms: vec!["ChatGPT".to_string(), "Perplexity".to_string()],
            ..GeoOptimization::default()
        },
        platform_tags: vec!["oncology".to_string()],
    }
}
