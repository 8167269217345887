// src/reference/mod.rs

pub mod committee;
pub mod party;

pub use committee::CMTE_NM;
pub use party::{Party, UnknownParty, CAND_PARTY};
