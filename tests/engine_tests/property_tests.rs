//! Property tests for Engine
//!
//! Random operation sequences are applied to both the engine and a naive
//! model that snapshots the whole map on BEGIN. The two must agree on every
//! read after every step.

use std::collections::HashMap;

use layerkv::engine::Engine;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Set(String, String),
    Unset(String),
    Begin,
    Rollback,
    Commit,
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(str::to_string)
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["1", "2", "NULL"]).prop_map(str::to_string)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (name_strategy(), value_strategy()).prop_map(|(n, v)| Op::Set(n, v)),
        2 => name_strategy().prop_map(Op::Unset),
        2 => Just(Op::Begin),
        1 => Just(Op::Rollback),
        1 => Just(Op::Commit),
    ]
}

/// Full-copy model: the current map plus one saved copy per open block
#[derive(Default)]
struct Model {
    current: HashMap<String, String>,
    saved: Vec<HashMap<String, String>>,
}

impl Model {
    fn apply(&mut self, op: &Op) -> bool {
        match op {
            Op::Set(n, v) => {
                self.current.insert(n.clone(), v.clone());
                true
            }
            Op::Unset(n) => {
                self.current.remove(n);
                true
            }
            Op::Begin => {
                self.saved.push(self.current.clone());
                true
            }
            Op::Rollback => match self.saved.pop() {
                Some(prev) => {
                    self.current = prev;
                    true
                }
                None => false,
            },
            Op::Commit => {
                let open = !self.saved.is_empty();
                self.saved.clear();
                open
            }
        }
    }
}

fn apply_engine(engine: &mut Engine, op: &Op) -> bool {
    match op {
        Op::Set(n, v) => {
            engine.set(n.as_str(), v.as_str());
            true
        }
        Op::Unset(n) => {
            engine.unset(n);
            true
        }
        Op::Begin => {
            engine.begin();
            true
        }
        Op::Rollback => engine.rollback().is_ok(),
        Op::Commit => engine.commit().is_ok(),
    }
}

proptest! {
    #[test]
    fn engine_matches_full_copy_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut engine = Engine::new();
        let mut model = Model::default();

        for op in &ops {
            let engine_ok = apply_engine(&mut engine, op);
            let model_ok = model.apply(op);
            prop_assert_eq!(engine_ok, model_ok, "op {:?}", op);
            prop_assert_eq!(engine.depth(), model.saved.len());

            for name in ["a", "b", "c", "d"] {
                prop_assert_eq!(engine.get(name), model.current.get(name).map(String::as_str));
            }
        }
    }

    #[test]
    fn num_equal_to_agrees_with_get(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut engine = Engine::new();
        for op in &ops {
            apply_engine(&mut engine, op);

            for value in ["1", "2", "NULL"] {
                let expected = ["a", "b", "c", "d"]
                    .iter()
                    .filter(|name| engine.get(name) == Some(value))
                    .count();
                prop_assert_eq!(engine.num_equal_to(value), expected);
            }
        }
    }

    #[test]
    fn rollback_restores_prior_state(
        prefix in prop::collection::vec(op_strategy(), 0..32),
        body in prop::collection::vec(op_strategy(), 0..32),
    ) {
        let mut engine = Engine::new();
        for op in &prefix {
            apply_engine(&mut engine, op);
        }
        let before = engine.snapshot();
        let depth = engine.depth();

        engine.begin();
        // Keep the body inside the block just opened
        for op in &body {
            match op {
                Op::Set(..) | Op::Unset(..) => {
                    apply_engine(&mut engine, op);
                }
                _ => {}
            }
        }
        engine.rollback().unwrap();

        prop_assert_eq!(engine.depth(), depth);
        prop_assert_eq!(engine.snapshot(), before);
    }
}
