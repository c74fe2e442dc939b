use super::domain::DevelopmentStage;

const EXTENSIVE_PROGRAM_TRIALS: usize = 5;
const GLOBAL_PROGRAM_MARKETS: usize = 3;

pub fn content_focus(stage: DevelopmentStage) -> &'static str {
    match stage {
        DevelopmentStage::Phase2 => "efficacy signals and patient selection",
        DevelopmentStage::Phase3 => "clinical benefits and differentiation",
        _ => "mechanism of action and safety",
    }
}

pub fn target_audience(stage: DevelopmentStage) -> Vec<String> {
    let audiences: &[&str] = if stage.is_early() {
        &["investigators", "investors"]
    } else {
        &["clinicians", "patients", "advocates"]
    };
    audiences.iter().map(|audience| audience.to_string()).collect()
}

pub fn key_messages(stage: DevelopmentStage, total_trials: usize, market_count: usize) -> Vec<String> {
    let mut messages: Vec<String> = if stage.is_early() {
        vec![
            "novel therapeutic approach".to_string(),
            "advancing to clinical development".to_string(),
        ]
    } else {
        vec![
            "demonstrating clinical benefit".to_string(),
            "enrolling patients now".to_string(),
        ]
    };

    if total_trials > EXTENSIVE_PROGRAM_TRIALS {
        messages.push("extensive clinical development program".to_string());
    }
    if market_count > GLOBAL_PROGRAM_MARKETS {
        messages.push("global development program".to_string());
    }

    messages
}
