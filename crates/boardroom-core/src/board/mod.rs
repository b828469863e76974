//! Static board catalog for the demo advisory domains.
//!
//! Boards are thematic groupings of personas used for content
//! categorization; no reasoning engine sits behind a persona. The catalog
//! is fixed demo data mirroring the four domains the frontend ships with.

mod roster;

pub use roster::{AdvisorProfile, RosterBuilder};

use crate::persona::GenderPreference;

/// A simulated advisor identity slot within a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaSpec {
    /// Stable persona identifier within its board.
    pub id: &'static str,
    /// Role title rendered on the advisor card.
    pub role: &'static str,
    /// One-line expertise summary.
    pub expertise: &'static str,
    /// Portrait pool preference for this slot.
    pub gender: GenderPreference,
}

/// A thematic grouping of personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Stable board identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Marketing tagline rendered under the board name.
    pub tagline: &'static str,
    /// Persona slots rendered in grid order.
    pub personas: &'static [PersonaSpec],
}

/// The four demo boards shipped with the product.
pub static BOARDS: [Board; 4] = [
    Board {
        id: "cliniboard",
        name: "Cliniboard",
        tagline: "Clinical research and regulatory guidance",
        personas: &[
            PersonaSpec {
                id: "advisor-1",
                role: "Clinical Trials Strategist",
                expertise: "Phase II/III trial design and endpoint selection",
                gender: GenderPreference::Feminine,
            },
            PersonaSpec {
                id: "advisor-2",
                role: "Regulatory Affairs Lead",
                expertise: "Submission pathways and agency interactions",
                gender: GenderPreference::Masculine,
            },
            PersonaSpec {
                id: "advisor-3",
                role: "Biostatistician",
                expertise: "Adaptive designs and interim analyses",
                gender: GenderPreference::Either,
            },
            PersonaSpec {
                id: "advisor-4",
                role: "Pharmacovigilance Expert",
                expertise: "Safety signal detection and risk management",
                gender: GenderPreference::Either,
            },
        ],
    },
    Board {
        id: "prodboard",
        name: "Prodboard",
        tagline: "Product strategy and go-to-market",
        personas: &[
            PersonaSpec {
                id: "advisor-1",
                role: "Product Strategist",
                expertise: "Roadmap prioritization and positioning",
                gender: GenderPreference::Either,
            },
            PersonaSpec {
                id: "advisor-2",
                role: "Growth Lead",
                expertise: "Activation funnels and retention loops",
                gender: GenderPreference::Feminine,
            },
            PersonaSpec {
                id: "advisor-3",
                role: "Pricing Analyst",
                expertise: "Packaging, tiers, and willingness-to-pay",
                gender: GenderPreference::Masculine,
            },
            PersonaSpec {
                id: "advisor-4",
                role: "UX Researcher",
                expertise: "Discovery interviews and usability studies",
                gender: GenderPreference::Either,
            },
        ],
    },
    Board {
        id: "eduboard",
        name: "Eduboard",
        tagline: "Learning design and education technology",
        personas: &[
            PersonaSpec {
                id: "advisor-1",
                role: "Curriculum Designer",
                expertise: "Competency mapping and assessment design",
                gender: GenderPreference::Feminine,
            },
            PersonaSpec {
                id: "advisor-2",
                role: "Learning Scientist",
                expertise: "Retrieval practice and spaced repetition",
                gender: GenderPreference::Masculine,
            },
            PersonaSpec {
                id: "advisor-3",
                role: "EdTech Architect",
                expertise: "LMS integrations and accessibility standards",
                gender: GenderPreference::Either,
            },
            PersonaSpec {
                id: "advisor-4",
                role: "Teacher Success Coach",
                expertise: "Classroom rollout and educator onboarding",
                gender: GenderPreference::Either,
            },
        ],
    },
    Board {
        id: "wellboard",
        name: "Wellboard",
        tagline: "Holistic wellness and behavior change",
        personas: &[
            PersonaSpec {
                id: "advisor-1",
                role: "Behavioral Health Coach",
                expertise: "Habit formation and motivational interviewing",
                gender: GenderPreference::Either,
            },
            PersonaSpec {
                id: "advisor-2",
                role: "Nutrition Specialist",
                expertise: "Evidence-based dietary planning",
                gender: GenderPreference::Feminine,
            },
            PersonaSpec {
                id: "advisor-3",
                role: "Sleep Researcher",
                expertise: "Circadian alignment and sleep hygiene",
                gender: GenderPreference::Masculine,
            },
            PersonaSpec {
                id: "advisor-4",
                role: "Mindfulness Instructor",
                expertise: "Stress reduction and focus practices",
                gender: GenderPreference::Either,
            },
        ],
    },
];

/// Looks up a board by its stable identifier.
pub fn find_board(id: &str) -> Option<&'static Board> {
    BOARDS.iter().find(|board| board.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = BOARDS.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), BOARDS.len());

        for board in &BOARDS {
            let persona_ids: HashSet<_> = board.personas.iter().map(|p| p.id).collect();
            assert_eq!(persona_ids.len(), board.personas.len());
        }
    }

    #[test]
    fn find_board_resolves_known_ids() {
        let board = find_board("cliniboard").expect("cliniboard exists");
        assert_eq!(board.name, "Cliniboard");
        assert!(find_board("missing").is_none());
    }
}
