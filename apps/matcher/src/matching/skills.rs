//! Skill Normalizer: the single equality primitive for skill matching.
//!
//! Matching is deliberately loose: case-insensitive equality, then substring
//! containment in either direction, then an alias table of common technology
//! spellings. Short tokens produce false positives ("c" inside "c++"); that is
//! accepted precision loss and historical scores depend on it.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::candidate::distinct_terms;

/// Canonical skill name → known variant spellings. Lowercase on both sides.
static SKILL_ALIASES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let aliases: &[(&'static str, &'static [&'static str])] = &[
            ("javascript", &["js", "node.js", "nodejs"]),
            ("typescript", &["ts"]),
            ("python", &["py"]),
            ("react", &["reactjs", "react.js"]),
            ("angular", &["angularjs"]),
            ("vue", &["vuejs", "vue.js"]),
            ("c++", &["cpp", "c plus plus"]),
            ("c#", &["csharp", "c sharp"]),
            ("postgresql", &["postgres", "psql"]),
            ("mongodb", &["mongo"]),
            ("amazon web services", &["aws"]),
            ("google cloud platform", &["gcp"]),
            ("microsoft azure", &["azure"]),
        ];
        aliases.iter().copied().collect()
    });

/// Returns true when `a` and `b` name the same skill.
pub fn skills_equivalent(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return true;
    }

    if a.contains(&b) || b.contains(&a) {
        return true;
    }

    is_alias_of(&a, &b) || is_alias_of(&b, &a)
}

fn is_alias_of(canonical: &str, variant: &str) -> bool {
    SKILL_ALIASES
        .get(canonical)
        .is_some_and(|variants| variants.contains(&variant))
}

/// True when any of `candidate_skills` is equivalent to `skill`.
pub fn has_equivalent(candidate_skills: &[&str], skill: &str) -> bool {
    candidate_skills
        .iter()
        .any(|candidate| skills_equivalent(candidate, skill))
}

/// Splits the job's skills into those the candidate covers and those it doesn't.
///
/// Both lists keep job order and job spelling; together they hold every
/// distinct job skill exactly once.
pub fn partition_skills(
    candidate_skills: &[String],
    job_skills: &[String],
) -> (Vec<String>, Vec<String>) {
    let candidate = distinct_terms(candidate_skills);

    distinct_terms(job_skills)
        .into_iter()
        .map(str::to_string)
        .partition(|job_skill| has_equivalent(&candidate, job_skill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_exact_match() {
        assert!(skills_equivalent("Rust", "rust"));
        assert!(skills_equivalent("DOCKER", "docker"));
    }

    #[test]
    fn test_substring_either_direction() {
        assert!(skills_equivalent("react", "React Native"));
        assert!(skills_equivalent("Kubernetes Operators", "kubernetes"));
    }

    #[test]
    fn test_short_token_substring_is_loose() {
        // "c" sits inside "c++"; kept as a known false positive.
        assert!(skills_equivalent("c", "c++"));
    }

    #[test]
    fn test_alias_table_both_directions() {
        assert!(skills_equivalent("python", "py"));
        assert!(skills_equivalent("py", "Python"));
        assert!(skills_equivalent("AWS", "Amazon Web Services"));
        assert!(skills_equivalent("postgres", "PostgreSQL"));
        assert!(skills_equivalent("psql", "postgresql"));
        assert!(skills_equivalent("c sharp", "C#"));
        assert!(skills_equivalent("Azure", "Microsoft Azure"));
    }

    #[test]
    fn test_variants_of_same_canonical_are_not_linked() {
        // Both are variants of postgresql, but neither is the canonical.
        assert!(!skills_equivalent("postgres", "psql"));
    }

    #[test]
    fn test_unrelated_skills_do_not_match() {
        assert!(!skills_equivalent("Rust", "Java"));
        assert!(!skills_equivalent("Docker", "AWS"));
    }

    #[test]
    fn test_partition_scenario() {
        let candidate = strings(&["React", "Node.js", "TypeScript"]);
        let job = strings(&["React", "Node.js", "TypeScript", "AWS", "Docker"]);

        let (matching, missing) = partition_skills(&candidate, &job);
        assert_eq!(matching, strings(&["React", "Node.js", "TypeScript"]));
        assert_eq!(missing, strings(&["AWS", "Docker"]));
    }

    #[test]
    fn test_partition_ignores_superfluous_candidate_skills() {
        let candidate = strings(&["Rust", "Haskell", "Erlang"]);
        let job = strings(&["Rust"]);

        let (matching, missing) = partition_skills(&candidate, &job);
        assert_eq!(matching, strings(&["Rust"]));
        assert!(missing.is_empty());
    }

    #[test]
    fn test_partition_collapses_duplicate_job_skills() {
        let job = strings(&["Docker", "docker", "AWS"]);
        let (matching, missing) = partition_skills(&[], &job);
        assert!(matching.is_empty());
        assert_eq!(missing, strings(&["Docker", "AWS"]));
    }

    proptest! {
        #[test]
        fn skills_equivalent_is_symmetric(a in "[a-zA-Z+#. ]{0,12}", b in "[a-zA-Z+#. ]{0,12}") {
            prop_assert_eq!(skills_equivalent(&a, &b), skills_equivalent(&b, &a));
        }

        #[test]
        fn skills_equivalent_is_reflexive(a in ".{0,20}") {
            prop_assert!(skills_equivalent(&a, &a));
        }

        #[test]
        fn partition_covers_every_job_skill(
            candidate in proptest::collection::vec("[a-z]{1,6}", 0..6),
            job in proptest::collection::vec("[a-z]{1,6}", 0..8),
        ) {
            let (matching, missing) = partition_skills(&candidate, &job);
            let distinct = distinct_terms(&job);
            prop_assert_eq!(matching.len() + missing.len(), distinct.len());
            for skill in distinct {
                let in_matching = matching.iter().any(|m| m == skill);
                let in_missing = missing.iter().any(|m| m == skill);
                prop_assert!(in_matching != in_missing);
            }
        }
    }
}
