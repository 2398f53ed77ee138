//! Human-readable match explanations from score bands

/// Build the explanation sentence from the skill, experience, and location
/// sub-scores. Deterministic: the same scores always yield the same text.
pub fn explain(skill_score: f32, experience_score: f32, location_score: f32) -> String {
    let fragments = [
        skill_fragment(skill_score),
        experience_fragment(experience_score),
        location_fragment(location_score),
    ];
    format!("{}.", fragments.join(". "))
}

fn skill_fragment(score: f32) -> &'static str {
    if score >= 0.8 {
        "Strong skill alignment"
    } else if score >= 0.6 {
        "Good skill match with some gaps"
    } else {
        "Limited skill overlap"
    }
}

fn experience_fragment(score: f32) -> &'static str {
    if score >= 0.8 {
        "Experience level well-suited"
    } else if score >= 0.6 {
        "Experience broadly adequate"
    } else {
        "Experience below the stated requirement"
    }
}

fn location_fragment(score: f32) -> &'static str {
    if score >= 0.8 {
        "Location works well"
    } else if score >= 0.4 {
        "Location may need some flexibility"
    } else {
        "Location is a poor fit"
    }
}
