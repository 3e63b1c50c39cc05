//! Property tests driving the applier through random operation sequences.

use proptest::prelude::*;

use tinct_runtime::{
    FixedScheme, Generation, MemoryStore, MemorySurface, SystemScheme, ThemeApplier, ThemeMode,
};
use tinct_theme::ThemeRegistry;

#[derive(Debug, Clone)]
enum Op {
    SetTheme(&'static str),
    SetMode(ThemeMode),
    SchemeChanged(SystemScheme),
    Finish,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::sample::select(vec!["tinct", "ember", "meadow"]).prop_map(Op::SetTheme),
        prop::sample::select(vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System])
            .prop_map(Op::SetMode),
        prop::sample::select(vec![SystemScheme::Light, SystemScheme::Dark])
            .prop_map(Op::SchemeChanged),
        Just(Op::Finish),
    ]
}

proptest! {
    /// Whatever switch sequence runs, the surface always holds the complete
    /// token set, the published theme matches the active id, and only the
    /// newest generation token can finish a transition.
    #[test]
    fn applier_invariants_hold_over_any_sequence(ops in prop::collection::vec(arb_op(), 1..40)) {
        let mut applier = ThemeApplier::new(
            ThemeRegistry::with_builtins(),
            MemorySurface::new(),
            MemoryStore::new(),
        );
        let mut latest: Generation = applier.init(&FixedScheme(SystemScheme::Light)).unwrap();
        let mut stale: Vec<Generation> = Vec::new();

        for op in ops {
            match op {
                Op::SetTheme(id) => {
                    stale.push(latest);
                    latest = applier.set_theme(id).unwrap();
                }
                Op::SetMode(mode) => {
                    stale.push(latest);
                    latest = applier.set_mode(mode).unwrap();
                }
                Op::SchemeChanged(scheme) => {
                    if let Some(generation) = applier.system_scheme_changed(scheme).unwrap() {
                        stale.push(latest);
                        latest = generation;
                    }
                }
                Op::Finish => {
                    applier.finish_transition(latest);
                }
            }

            // The full token set is always present.
            prop_assert_eq!(applier.surface().properties().len(), 24);

            // The published read model tracks the active theme.
            let applied = applier.applied().unwrap();
            prop_assert_eq!(applied.id.as_str(), applier.theme_id());

            // Superseded tokens can never finish a transition.
            for old in &stale {
                prop_assert!(!applier.finish_transition(*old));
            }
        }
    }
}
