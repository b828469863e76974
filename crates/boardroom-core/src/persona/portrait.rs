//! Round-robin portrait assignment over a fixed illustration registry.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::name::Gender;
use super::TRACING_TARGET;

/// A registry entry: one of the six shipped advisor illustrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portrait {
    /// Stable key identifying the asset.
    pub key: &'static str,
    /// Asset URL served by the frontend.
    pub url: &'static str,
    /// Gender tag of the illustration.
    pub gender: Gender,
}

/// The fixed illustration registry: three feminine, three masculine.
pub static PORTRAITS: [Portrait; 6] = [
    Portrait {
        key: "advisor-f1",
        url: "/assets/portraits/advisor-f1.svg",
        gender: Gender::Feminine,
    },
    Portrait {
        key: "advisor-f2",
        url: "/assets/portraits/advisor-f2.svg",
        gender: Gender::Feminine,
    },
    Portrait {
        key: "advisor-f3",
        url: "/assets/portraits/advisor-f3.svg",
        gender: Gender::Feminine,
    },
    Portrait {
        key: "advisor-m1",
        url: "/assets/portraits/advisor-m1.svg",
        gender: Gender::Masculine,
    },
    Portrait {
        key: "advisor-m2",
        url: "/assets/portraits/advisor-m2.svg",
        gender: Gender::Masculine,
    },
    Portrait {
        key: "advisor-m3",
        url: "/assets/portraits/advisor-m3.svg",
        gender: Gender::Masculine,
    },
];

/// Gender preference carried by a persona definition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GenderPreference {
    Feminine,
    Masculine,
    Either,
}

/// A resolved portrait for one advisor.
///
/// Field names serialize in camelCase for the JS frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortraitAssignment {
    pub portrait_key: String,
    pub url: String,
    pub alt: String,
    pub gender_tag: Gender,
}

/// Portrait assignment engine with per-session duplicate avoidance.
///
/// Portraits rotate round-robin through the unused subset of the preferred
/// pool; once a pool is exhausted the rotation wraps over the full pool and
/// repeats become possible again. State is explicit and instance-local:
/// create one engine per rendering context and call [`reset`] between
/// grids.
///
/// [`reset`]: PortraitEngine::reset
#[derive(Debug, Default)]
pub struct PortraitEngine {
    used_keys: HashSet<&'static str>,
    feminine_cursor: usize,
    masculine_cursor: usize,
    assigned: usize,
}

impl PortraitEngine {
    /// Creates a fresh engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a preference to the concrete gender the next assignment
    /// will draw from.
    ///
    /// `Either` alternates on the parity of assignments made so far (even
    /// count draws feminine), which keeps a grid roughly balanced. This is
    /// a pure peek: callers use it to pick a matching name gender before
    /// assigning the portrait itself.
    pub fn next_gender(&self, preference: GenderPreference) -> Gender {
        match preference {
            GenderPreference::Feminine => Gender::Feminine,
            GenderPreference::Masculine => Gender::Masculine,
            GenderPreference::Either => {
                if self.assigned % 2 == 0 {
                    Gender::Feminine
                } else {
                    Gender::Masculine
                }
            }
        }
    }

    /// Assigns a portrait for the given advisor.
    ///
    /// The advisor's name is embedded into the generated alt text.
    pub fn assign(
        &mut self,
        preference: GenderPreference,
        advisor_id: &str,
        first_name: &str,
        last_name: &str,
    ) -> PortraitAssignment {
        let gender = self.next_gender(preference);

        let pool: Vec<&'static Portrait> =
            PORTRAITS.iter().filter(|p| p.gender == gender).collect();
        let unused: Vec<&'static Portrait> = pool
            .iter()
            .copied()
            .filter(|p| !self.used_keys.contains(p.key))
            .collect();

        let cursor = match gender {
            Gender::Feminine => &mut self.feminine_cursor,
            Gender::Masculine => &mut self.masculine_cursor,
        };
        let portrait = if unused.is_empty() {
            // Pool exhausted: wrap over the full pool, repeats allowed.
            pool[*cursor % pool.len()]
        } else {
            unused[*cursor % unused.len()]
        };
        *cursor += 1;

        self.used_keys.insert(portrait.key);
        self.assigned += 1;

        tracing::debug!(
            target: TRACING_TARGET,
            advisor_id,
            key = portrait.key,
            gender = %portrait.gender,
            "portrait assigned"
        );

        PortraitAssignment {
            portrait_key: portrait.key.to_string(),
            url: portrait.url.to_string(),
            alt: format!("Illustrated portrait of {first_name} {last_name}"),
            gender_tag: portrait.gender,
        }
    }

    /// Clears used-portrait state and both round-robin cursors for reuse
    /// across a new grid.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn registry_is_balanced() {
        let feminine = PORTRAITS
            .iter()
            .filter(|p| p.gender == Gender::Feminine)
            .count();
        assert_eq!(feminine, 3);
        assert_eq!(PORTRAITS.len() - feminine, 3);

        let keys: HashSet<_> = PORTRAITS.iter().map(|p| p.key).collect();
        assert_eq!(keys.len(), PORTRAITS.len());
    }

    #[test]
    fn no_repeats_before_pool_exhaustion() {
        let mut engine = PortraitEngine::new();
        let mut keys = HashSet::new();

        for i in 0..3 {
            let assignment =
                engine.assign(GenderPreference::Feminine, &format!("advisor-{i}"), "Ana", "Test");
            assert_eq!(assignment.gender_tag, Gender::Feminine);
            assert!(keys.insert(assignment.portrait_key.clone()));
        }
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn exhausted_pool_wraps_over_full_pool() {
        let mut engine = PortraitEngine::new();
        for i in 0..3 {
            engine.assign(GenderPreference::Masculine, &format!("advisor-{i}"), "Max", "Test");
        }

        // Fourth draw from an exhausted pool still yields a masculine
        // portrait rather than panicking or crossing pools.
        let wrapped = engine.assign(GenderPreference::Masculine, "advisor-3", "Max", "Test");
        assert_eq!(wrapped.gender_tag, Gender::Masculine);
        assert!(wrapped.portrait_key.starts_with("advisor-m"));
    }

    #[test]
    fn either_preference_stays_balanced() {
        let mut engine = PortraitEngine::new();
        let mut feminine = 0;
        let mut masculine = 0;

        for i in 0..3 {
            let assignment =
                engine.assign(GenderPreference::Either, &format!("advisor-{i}"), "Sam", "Test");
            match assignment.gender_tag {
                Gender::Feminine => feminine += 1,
                Gender::Masculine => masculine += 1,
            }
        }

        // Parity alternation yields a 2:1 split at worst.
        assert_eq!(feminine + masculine, 3);
        assert!(feminine.max(masculine) <= 2);
    }

    #[test]
    fn next_gender_matches_assignment() {
        let mut engine = PortraitEngine::new();
        for i in 0..4 {
            let peeked = engine.next_gender(GenderPreference::Either);
            let assignment =
                engine.assign(GenderPreference::Either, &format!("advisor-{i}"), "Sam", "Test");
            assert_eq!(peeked, assignment.gender_tag);
        }
    }

    #[test]
    fn reset_restores_first_call_output() {
        let mut fresh = PortraitEngine::new();
        let expected = fresh.assign(GenderPreference::Feminine, "advisor-1", "Ana", "Test");

        let mut engine = PortraitEngine::new();
        for i in 0..5 {
            engine.assign(GenderPreference::Either, &format!("advisor-{i}"), "Sam", "Test");
        }
        engine.reset();

        let actual = engine.assign(GenderPreference::Feminine, "advisor-1", "Ana", "Test");
        assert_eq!(expected, actual);
    }

    #[test]
    fn alt_text_embeds_name() {
        let mut engine = PortraitEngine::new();
        let assignment = engine.assign(GenderPreference::Feminine, "advisor-1", "Amara", "Okafor");
        assert_eq!(assignment.alt, "Illustrated portrait of Amara Okafor");
    }
}
