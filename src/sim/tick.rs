//! Per-frame simulation step
//!
//! Fixed order every frame: spawn check, integrate all bodies, resolve all
//! pairs. Integration always uses the logical step passed in, never the
//! measured frame time.

use super::state::SimState;

/// Inputs for a single step
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Wall-clock time since the previous frame, feeds the spawn timer
    pub elapsed_ms: f32,
    /// Quit requested by the platform
    pub quit: bool,
}

/// What happened during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub spawned: bool,
    pub contacts: usize,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) -> TickOutcome {
    tick_observed(state, input, dt, |_| {})
}

/// [`tick`] with a callback that sees the state between integration and
/// collision resolution
fn tick_observed<F>(
    state: &mut SimState,
    input: &TickInput,
    dt: f32,
    mut after_integrate: F,
) -> TickOutcome
where
    F: FnMut(&SimState),
{
    if input.quit {
        state.stop();
    }
    if !state.is_running() {
        return TickOutcome::default();
    }

    state.time_ticks += 1;

    let spawned = state.spawn_timer.advance(input.elapsed_ms);
    if spawned {
        state.spawn_body();
    }

    state.registry.integrate_all(dt, state.arena);
    after_integrate(state);

    let contacts = state.registry.resolve_collisions(&mut state.rng);
    state.total_contacts += contacts as u64;

    TickOutcome { spawned, contacts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SPAWN_INTERVAL_MS, STEP_DT};
    use crate::sim::arena::Arena;
    use crate::sim::body::Body;
    use crate::sim::state::{SimConfig, SimPhase};
    use glam::Vec2;
    use proptest::prelude::*;

    fn interval_input() -> TickInput {
        TickInput {
            elapsed_ms: SPAWN_INTERVAL_MS,
            ..Default::default()
        }
    }

    #[test]
    fn test_spawn_cadence() {
        let mut state = SimState::new(SimConfig::default());
        assert_eq!(state.bodies().len(), 1);

        for n in 1..=40 {
            let outcome = tick(&mut state, &interval_input(), STEP_DT);
            assert!(outcome.spawned);
            assert_eq!(state.bodies().len(), 1 + n);
        }
    }

    #[test]
    fn test_partial_intervals_accumulate() {
        let mut state = SimState::new(SimConfig::default());
        let input = TickInput {
            elapsed_ms: 25.0,
            ..Default::default()
        };

        for _ in 0..4 {
            assert!(!tick(&mut state, &input, STEP_DT).spawned);
        }
        assert_eq!(state.bodies().len(), 1);
        assert!(tick(&mut state, &input, STEP_DT).spawned);
        assert_eq!(state.bodies().len(), 2);
    }

    #[test]
    fn test_long_frame_spawns_once() {
        let mut state = SimState::new(SimConfig::default());
        let input = TickInput {
            elapsed_ms: SPAWN_INTERVAL_MS * 5.0,
            ..Default::default()
        };
        tick(&mut state, &input, STEP_DT);
        assert_eq!(state.bodies().len(), 2);
    }

    #[test]
    fn test_integration_ignores_elapsed_time() {
        let mut state = SimState::empty(SimConfig::default());
        state.registry.push(Body::from_parts(
            Vec2::new(400.0, 300.0),
            Vec2::new(1.0, 0.5),
            12.0,
            [0; 3],
        ));
        let input = TickInput {
            elapsed_ms: 40.0,
            ..Default::default()
        };
        tick(&mut state, &input, STEP_DT);
        assert_eq!(state.bodies()[0].pos(), Vec2::new(401.0, 300.5));
    }

    #[test]
    fn test_quit_stops_and_freezes() {
        let mut state = SimState::new(SimConfig::default());
        tick(&mut state, &TickInput::default(), STEP_DT);
        let frozen = state.bodies().to_vec();

        let quit = TickInput {
            quit: true,
            elapsed_ms: SPAWN_INTERVAL_MS,
        };
        assert_eq!(tick(&mut state, &quit, STEP_DT), TickOutcome::default());
        assert_eq!(state.phase, SimPhase::Stopped);

        // Stopped simulations ignore further steps
        tick(&mut state, &interval_input(), STEP_DT);
        assert_eq!(state.bodies(), frozen.as_slice());
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_determinism() {
        let config = SimConfig {
            seed: 99999,
            ..Default::default()
        };
        let mut s1 = SimState::new(config.clone());
        let mut s2 = SimState::new(config);

        for i in 0..600 {
            let input = TickInput {
                elapsed_ms: if i % 3 == 0 { 60.0 } else { 8.0 },
                ..Default::default()
            };
            tick(&mut s1, &input, STEP_DT);
            tick(&mut s2, &input, STEP_DT);
        }

        assert_eq!(s1.time_ticks, s2.time_ticks);
        assert_eq!(s1.total_contacts, s2.total_contacts);
        assert_eq!(s1.bodies(), s2.bodies());
    }

    #[test]
    fn test_bodies_accumulate_without_limit() {
        let mut state = SimState::new(SimConfig {
            seed: 5,
            ..Default::default()
        });
        for _ in 0..150 {
            tick(&mut state, &interval_input(), STEP_DT);
        }
        assert_eq!(state.bodies().len(), 151);
    }

    #[test]
    fn test_energy_conserved_in_closed_box() {
        let mut state = SimState::empty(SimConfig {
            seed: 17,
            ..Default::default()
        });
        for _ in 0..30 {
            state.spawn_body();
        }
        let before = state.registry.total_kinetic_energy();

        // No spawning: the timer never reaches its interval
        for _ in 0..500 {
            tick(&mut state, &TickInput::default(), STEP_DT);
        }
        let after = state.registry.total_kinetic_energy();
        assert!(
            (after - before).abs() / before < 1e-3,
            "energy drifted from {before} to {after}"
        );
    }

    fn assert_contained(state: &SimState) {
        for (i, body) in state.bodies().iter().enumerate() {
            assert!(
                state.arena.contains(body.pos(), body.radius()),
                "body {} at {:?} (r = {}) escaped after tick {}",
                i,
                body.pos(),
                body.radius(),
                state.time_ticks
            );
        }
    }

    #[test]
    fn test_dense_long_run_stays_contained() {
        // Small arena, a spawn every frame: crowded well before the end
        let mut state = SimState::new(SimConfig {
            seed: 2024,
            arena: Arena::new(320.0, 240.0),
            ..Default::default()
        });

        let mut observed = 0;
        for _ in 0..400 {
            tick_observed(&mut state, &interval_input(), STEP_DT, |s| {
                assert_contained(s);
                observed += 1;
            });
        }

        assert_eq!(observed, 400);
        assert_eq!(state.bodies().len(), 401);
        assert!(state.total_contacts > 0);
    }

    #[test]
    fn test_observer_not_called_when_stopped() {
        let mut state = SimState::new(SimConfig::default());
        state.stop();
        let mut called = false;
        tick_observed(&mut state, &interval_input(), STEP_DT, |_| called = true);
        assert!(!called);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_bodies_stay_in_arena(
            seed in any::<u64>(),
            frames in 1usize..200,
            elapsed_ms in 10.0f32..300.0,
        ) {
            let mut state = SimState::new(SimConfig { seed, ..Default::default() });
            let input = TickInput { elapsed_ms, ..Default::default() };
            let mut escaped = Vec::new();

            for _ in 0..frames {
                tick_observed(&mut state, &input, STEP_DT, |s| {
                    for body in s.bodies() {
                        if !s.arena.contains(body.pos(), body.radius()) {
                            escaped.push((s.time_ticks, body.pos()));
                        }
                    }
                });
            }

            prop_assert!(escaped.is_empty(), "escaped: {:?}", escaped);
            prop_assert_eq!(state.time_ticks, frames as u64);
        }
    }
}
