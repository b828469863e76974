#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod board;
pub mod persona;

pub use crate::board::{AdvisorProfile, Board, PersonaSpec, RosterBuilder};
pub use crate::persona::{
    Gender, GenderPreference, GeneratedName, NameEngine, NameSeed, PortraitAssignment,
    PortraitEngine,
};
