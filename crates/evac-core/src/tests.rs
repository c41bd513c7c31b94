//! Unit tests for evac-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, GroupId, NodeId, SensorId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(SensorId::INVALID.0, u32::MAX);
        assert_eq!(GroupId::INVALID.0, u32::MAX);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(SensorId::default(), SensorId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod behavior_state {
    use crate::BehaviorState;

    #[test]
    fn tags_roundtrip() {
        for state in [
            BehaviorState::Evacuating,
            BehaviorState::Rendezvous,
            BehaviorState::Wait,
            BehaviorState::Exited,
            BehaviorState::Stay,
        ] {
            let tag = state.tag();
            assert_eq!(BehaviorState::from_tag(tag), Some(state));
        }
    }

    #[test]
    fn terminal_states() {
        assert!(BehaviorState::Exited.is_terminal());
        assert!(BehaviorState::Stay.is_terminal());
        assert!(!BehaviorState::Evacuating.is_terminal());
        assert!(!BehaviorState::Rendezvous.is_terminal());
        assert!(!BehaviorState::Wait.is_terminal());
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(BehaviorState::Wait.to_string(), "W");
    }

    #[test]
    fn unknown_tag_is_none() {
        assert_eq!(BehaviorState::from_tag("Q"), None);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_advance() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn clock_display() {
        let mut clock = SimClock::new();
        clock.advance();
        assert_eq!(clock.to_string(), "T1");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.uniform01();
            let b: f64 = r2.uniform01();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r0 = SimRng::new(1);
        let mut r1 = SimRng::new(2);
        let a = r0.uniform01();
        let b = r1.uniform01();
        assert_ne!(a, b, "distinct seeds should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: f64 = rng.gen_range(0.0..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn uniform01_in_bounds() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            let v = rng.uniform01();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn choose_from_slice() {
        let mut rng = SimRng::new(3);
        let v = [1, 2, 3];
        let picked = rng.choose(&v);
        assert!(picked.is_some());
        assert!(v.contains(picked.unwrap()));
    }
}
