//! crates/km_core/src/entities.rs
//! Poll-snapshot domain types. Validated on construction, immutable after;
//! every ordering is explicit (the descending-share convention lives here).

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::errors::CoreError;

/// One party's averaged polling result for a single evaluation run.
///
/// `share` is a percentage in `[0, 100]`; finiteness and range are enforced
/// by [`PartyResult::new`], so downstream arithmetic never meets NaN.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PartyResult {
    name: String,
    share: f64,
}

impl PartyResult {
    pub fn new(name: impl Into<String>, share: f64) -> Result<Self, CoreError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::EmptyPartyName);
        }
        if !share.is_finite() {
            return Err(CoreError::NonFiniteShare);
        }
        if !(0.0..=100.0).contains(&share) {
            return Err(CoreError::ShareOutOfRange(share));
        }
        Ok(Self { name, share })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn share(&self) -> f64 {
        self.share
    }
}

impl fmt::Display for PartyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.1}%", self.name, self.share)
    }
}

/// An averaged poll snapshot: parties ordered **descending by share**
/// (ties broken by name, ascending). The coalition enumerator relies on this
/// order to try the strongest parties first, so the only sanctioned
/// constructors sort or verify it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PollSnapshot {
    parties: Vec<PartyResult>,
}

impl PollSnapshot {
    /// Build a snapshot from unordered results; sorts into the canonical
    /// order and rejects duplicate party names.
    pub fn from_unordered(mut parties: Vec<PartyResult>) -> Result<Self, CoreError> {
        parties.sort_by(|a, b| {
            b.share
                .total_cmp(&a.share)
                .then_with(|| a.name.cmp(&b.name))
        });
        // Duplicates need not be share-adjacent, so check over sorted names.
        let mut names: Vec<&str> = parties.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        for pair in names.windows(2) {
            if pair[0] == pair[1] {
                return Err(CoreError::DuplicateParty(pair[0].to_string()));
            }
        }
        Ok(Self { parties })
    }

    /// Parties in canonical (descending-share) order.
    pub fn parties(&self) -> &[PartyResult] {
        &self.parties
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }
}

/// An ordered, non-empty subset of eligible parties considered as a
/// governing bloc. Member order is the enumeration order that produced the
/// coalition and is significant for display. `total_share` is the plain sum
/// of member shares, accumulated in member order; no rounding happens before
/// display formatting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Coalition {
    members: Vec<PartyResult>,
    total_share: f64,
}

impl Coalition {
    pub fn from_members(members: Vec<PartyResult>) -> Self {
        let total_share = members.iter().map(PartyResult::share).sum();
        Self {
            members,
            total_share,
        }
    }

    pub fn members(&self) -> &[PartyResult] {
        &self.members
    }

    pub fn total_share(&self) -> f64 {
        self.total_share
    }

    /// Member names in coalition order.
    pub fn names(&self) -> Vec<&str> {
        self.members.iter().map(PartyResult::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str, share: f64) -> PartyResult {
        PartyResult::new(name, share).expect("party")
    }

    #[test]
    fn party_domain_is_enforced() {
        assert_eq!(PartyResult::new("", 10.0), Err(CoreError::EmptyPartyName));
        assert_eq!(
            PartyResult::new("X", f64::NAN),
            Err(CoreError::NonFiniteShare)
        );
        assert_eq!(
            PartyResult::new("X", -0.1),
            Err(CoreError::ShareOutOfRange(-0.1))
        );
        assert_eq!(
            PartyResult::new("X", 100.1),
            Err(CoreError::ShareOutOfRange(100.1))
        );
        assert!(PartyResult::new("X", 0.0).is_ok());
        assert!(PartyResult::new("X", 100.0).is_ok());
    }

    #[test]
    fn snapshot_sorts_descending_then_by_name() {
        let snap = PollSnapshot::from_unordered(vec![
            p("SPD", 15.0),
            p("CDU/CSU", 30.0),
            p("GRÜNE", 15.0),
            p("AfD", 20.8),
        ])
        .expect("snapshot");
        let names: Vec<&str> = snap.parties().iter().map(PartyResult::name).collect();
        assert_eq!(names, vec!["CDU/CSU", "AfD", "GRÜNE", "SPD"]);
    }

    #[test]
    fn snapshot_rejects_duplicates() {
        let err = PollSnapshot::from_unordered(vec![p("SPD", 15.0), p("SPD", 14.0)]);
        assert_eq!(err, Err(CoreError::DuplicateParty("SPD".to_string())));
    }

    #[test]
    fn coalition_total_is_member_sum() {
        let c = Coalition::from_members(vec![p("CDU/CSU", 30.0), p("AfD", 20.8)]);
        assert_eq!(c.names(), vec!["CDU/CSU", "AfD"]);
        assert!((c.total_share() - 50.8).abs() < 1e-9);
    }
}
