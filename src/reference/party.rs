// src/reference/party.rs

use once_cell::sync::Lazy;
use std::{collections::HashMap, str::FromStr};
use thiserror::Error;

/// Party affiliation of a presidential candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Party {
    Democratic,
    Republican,
    Libertarian,
    Green,
    Independent,
}

impl Party {
    /// Label as written to the `cand_party` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Party::Democratic => "DEMOCRATIC",
            Party::Republican => "REPUBLICAN",
            Party::Libertarian => "LIBERTARIAN",
            Party::Green => "GREEN",
            Party::Independent => "INDEPENDENT",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown party label: {0:?}")]
pub struct UnknownParty(pub String);

impl FromStr for Party {
    type Err = UnknownParty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEMOCRATIC" => Ok(Party::Democratic),
            "REPUBLICAN" => Ok(Party::Republican),
            "LIBERTARIAN" => Ok(Party::Libertarian),
            "GREEN" => Ok(Party::Green),
            "INDEPENDENT" => Ok(Party::Independent),
            _ => Err(UnknownParty(s.to_string())),
        }
    }
}

impl AsRef<str> for Party {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// FEC candidate id → party, 2016 presidential field.
pub static CAND_PARTY: Lazy<HashMap<&'static str, Party>> = Lazy::new(|| {
    use Party::*;
    HashMap::from([
        ("P00003392", Democratic),
        ("P20002671", Libertarian),
        ("P20002721", Republican),
        ("P20003281", Republican),
        ("P20003984", Green),
        ("P40003576", Republican),
        ("P60003670", Republican),
        ("P60005915", Republican),
        ("P60006046", Republican),
        ("P60006111", Republican),
        ("P60006723", Republican),
        ("P60007168", Democratic),
        ("P60007242", Republican),
        ("P60007572", Republican),
        ("P60007671", Democratic),
        ("P60007697", Republican),
        ("P60008059", Republican),
        ("P60008398", Republican),
        ("P60008521", Republican),
        ("P60008885", Independent),
        ("P60009685", Democratic),
        ("P60022654", Independent),
        ("P80001571", Republican),
        ("P80003379", Republican),
        ("P80003478", Republican),
    ])
});
