use super::domain::{AdverseEventProfile, ReactionCount};
use super::records::RawAdverseEventAggregate;
use super::vocabulary::CLASS_PREDICTION_DISCLAIMER;

/// Pass the reaction tallies through untouched, marked as a class-based prediction.
pub fn extract_adverse_events(aggregate: &RawAdverseEventAggregate) -> AdverseEventProfile {
    AdverseEventProfile {
        top_events: aggregate
            .results
            .iter()
            .map(|entry| ReactionCount {
                term: entry.term.clone(),
                count: entry.count,
            })
            .collect(),
        class_based_prediction: true,
        disclaimer: CLASS_PREDICTION_DISCLAIMER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::signals::records::RawTermCount;

    #[test]
    fn counts_pass_through_in_order_with_disclaimer() {
        let aggregate = RawAdverseEventAggregate {
            results: vec![
                RawTermCount {
                    term: "FATIGUE".to_string(),
                    count: 812,
                },
                RawTermCount {
                    term: "NAUSEA".to_string(),
                    count: 640,
                },
            ],
        };

        let profile = extract_adverse_events(&aggregate);
        assert!(profile.class_based_prediction);
        assert_eq!(profile.disclaimer, CLASS_PREDICTION_DISCLAIMER);
        assert_eq!(profile.top_events.len(), 2);
        assert_eq!(profile.top_events[0].term, "FATIGUE");
        assert_eq!(profile.top_events[1].count, 640);
    }
}
