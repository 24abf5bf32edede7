//! EcoHome assessment engine: score, persona, missions and recommendations
//! derived deterministically from a household [`Profile`].

pub mod missions;
pub mod persona;
pub mod prompt;
pub mod recommendations;
pub mod scoring;

pub use missions::{find_mission, select_missions, Difficulty, Mission, MissionQueue, FALLBACK_MISSION_ID, MISSIONS};
pub use persona::{classify, Persona, PERSONA_RULES};
pub use prompt::advisory_prompt;
pub use recommendations::{investments, narrative_recommendations, quick_wins, MAX_ITEMS};
pub use scoring::{score, EfficiencyLabel, ScoreResult};

use eh_core::Profile;
use serde::Serialize;

/// Read-only result shown once the questionnaire is complete.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub score: ScoreResult,
    pub persona: Persona,
    pub missions: Vec<&'static Mission>,
    pub quick_wins: Vec<String>,
    pub investments: Vec<String>,
    pub recommendations: Vec<String>,
    pub advisory_prompt: String,
}

pub fn assess(profile: &Profile) -> Assessment {
    let assessment = Assessment {
        score: score(profile),
        persona: classify(profile),
        missions: select_missions(profile),
        quick_wins: quick_wins(profile),
        investments: investments(profile),
        recommendations: narrative_recommendations(profile),
        advisory_prompt: advisory_prompt(profile),
    };
    tracing::debug!(
        answered = profile.answered_count(),
        score = assessment.score.efficiency_score,
        persona = assessment.persona.name,
        missions = assessment.missions.len(),
        "assessment computed"
    );
    assessment
}
