//! Explanation Generator: short rationale shown next to each match.
//!
//! Output is asserted literally by callers, so the wording is fixed.

const LISTED_SKILLS: usize = 3;

pub const TIER_PREFIXES: [&str; 4] = [
    "Excellent match! ",
    "Good match. ",
    "Fair match. ",
    "Limited match. ",
];

fn tier_prefix(score: u32) -> &'static str {
    match score {
        s if s >= 80 => TIER_PREFIXES[0],
        s if s >= 60 => TIER_PREFIXES[1],
        s if s >= 40 => TIER_PREFIXES[2],
        _ => TIER_PREFIXES[3],
    }
}

/// "a, b, c" or "a, b, c and K more".
fn summarize(skills: &[String]) -> String {
    let listed = skills
        .iter()
        .take(LISTED_SKILLS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if skills.len() > LISTED_SKILLS {
        format!("{listed} and {} more", skills.len() - LISTED_SKILLS)
    } else {
        listed
    }
}

/// Builds the explanation for one match from its overall score and skill lists.
pub fn explain(overall_score: u32, matching: &[String], missing: &[String]) -> String {
    let mut explanation = String::from(tier_prefix(overall_score));

    if !matching.is_empty() {
        let noun = if matching.len() == 1 { "skill" } else { "skills" };
        explanation.push_str(&format!(
            "You have {} matching {noun}: {}. ",
            matching.len(),
            summarize(matching)
        ));
    }

    if !missing.is_empty() {
        explanation.push_str(&format!("Consider developing: {}.", summarize(missing)));
    }

    explanation.trim().to_string()
}
