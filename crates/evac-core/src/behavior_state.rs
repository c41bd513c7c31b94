//! The five-state evacuation behavior FSM shared by real agents and particles.

use std::fmt;

/// An agent's (or particle's) current behavior state.
///
/// Both `evac-behavior`'s simulation kernel and estimator kernel transition
/// agents through the same five states; only the transition probabilities
/// and whether group co-movement applies differ between the two.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorState {
    /// Evacuating: moving one hop per tick toward the nearest exit node.
    Evacuating,
    /// Moving toward the group's rendezvous node.
    Rendezvous,
    /// Waiting at the rendezvous node for the rest of the group.
    Wait,
    /// Exited the road network. Terminal state.
    Exited,
    /// Staying in place. Terminal state (used for agents who never evacuate,
    /// e.g. young children traveling with a size-3/4 group).
    Stay,
}

impl BehaviorState {
    /// `true` for the two terminal states that never transition again.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, BehaviorState::Exited | BehaviorState::Stay)
    }

    /// Single-letter tag matching the original's string-tagged behavior field
    /// (`"E"`, `"R"`, `"W"`, `"X"`, `"S"`), used in output lines.
    pub fn tag(self) -> &'static str {
        match self {
            BehaviorState::Evacuating => "E",
            BehaviorState::Rendezvous => "R",
            BehaviorState::Wait => "W",
            BehaviorState::Exited => "X",
            BehaviorState::Stay => "S",
        }
    }

    /// Parse a single-letter tag back into a `BehaviorState`.
    pub fn from_tag(tag: &str) -> Option<BehaviorState> {
        match tag {
            "E" => Some(BehaviorState::Evacuating),
            "R" => Some(BehaviorState::Rendezvous),
            "W" => Some(BehaviorState::Wait),
            "X" => Some(BehaviorState::Exited),
            "S" => Some(BehaviorState::Stay),
            _ => None,
        }
    }
}

impl fmt::Display for BehaviorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
