use num_bigint::BigInt;

use crate::engine::boundary;
use crate::engine::commands::EngineCommand;
use crate::engine::element_info::{ElementCatalog, ElementIdentity};
use crate::engine::evaluator::{evaluate_full, evaluate_partial};
use crate::engine::gauge;
use crate::engine::seed_ops;
use crate::engine::session::{GameSession, Phase};
use crate::engine::share;
use crate::engine::status_text::build_status_text;
use crate::engine::view_model::{plan_controls, SessionViewModel};
use crate::game::{DailyPuzzle, EngineError, OperatorId, Reagent};

fn scenario_puzzle() -> DailyPuzzle {
    DailyPuzzle {
        seed: "test-seed".to_string(),
        elements: vec![3, 7, 25, 2, 80],
        reagents: vec![
            Reagent::new(OperatorId::Add, "🍎"),
            Reagent::new(OperatorId::Mul, "🔨"),
            Reagent::new(OperatorId::Sub, "🧲"),
            Reagent::new(OperatorId::Pow, "🎲"),
        ],
    }
}

fn place_scenario_sequence(session: &mut GameSession) {
    let reagents = session.daily().reagents.clone();
    for (i, value) in [3_u32, 7, 25, 2, 80].into_iter().enumerate() {
        assert!(session.place_element(value));
        if let Some(reagent) = reagents.get(i) {
            assert!(session.place_reagent(reagent.op, &reagent.glyph));
        }
    }
    assert!(session.sequence_complete());
}

struct TestCatalog;

impl ElementCatalog for TestCatalog {
    fn element_info(&self, atomic_number: u32) -> Option<ElementIdentity> {
        match atomic_number {
            3 => Some(ElementIdentity {
                symbol: "Li".to_string(),
                name: "Lithium".to_string(),
            }),
            80 => Some(ElementIdentity {
                symbol: "Hg".to_string(),
                name: "Mercury".to_string(),
            }),
            _ => None,
        }
    }
}

#[test]
fn single_element_evaluates_to_itself_with_no_steps() {
    let eval = evaluate_full(&[42], &[]).expect("one element, zero reagents");
    assert!(eval.steps.is_empty());
    assert_eq!(eval.final_value, BigInt::from(42));
}

#[test]
fn evaluate_full_rejects_length_mismatch() {
    let reagents = vec![Reagent::bare(OperatorId::Add)];
    assert_eq!(
        evaluate_full(&[1, 2, 3], &reagents),
        Err(EngineError::LengthMismatch {
            elements: 3,
            reagents: 1
        })
    );
    assert_eq!(
        evaluate_full(&[], &[]),
        Err(EngineError::LengthMismatch {
            elements: 0,
            reagents: 0
        })
    );
}

#[test]
fn evaluate_partial_is_prefix_tolerant() {
    assert!(evaluate_partial(&[], &[]).is_none());

    let reagents = vec![
        Reagent::bare(OperatorId::Add),
        Reagent::bare(OperatorId::Mul),
    ];
    // Surplus reagents are ignored.
    let eval = evaluate_partial(&[3, 7], &reagents).expect("non-empty elements");
    assert_eq!(eval.steps.len(), 1);
    assert_eq!(eval.final_value, BigInt::from(10));

    // Surplus elements are ignored too.
    let eval = evaluate_partial(&[3, 7, 25], &reagents[..1]).expect("non-empty elements");
    assert_eq!(eval.steps.len(), 1);
    assert_eq!(eval.final_value, BigInt::from(10));
}

#[test]
fn step_logs_use_the_assigned_glyph_with_placeholder_fallback() {
    let assigned = vec![Reagent::new(OperatorId::Add, "🥔")];
    let eval = evaluate_full(&[3, 7], &assigned).expect("complete sequence");
    assert_eq!(eval.steps[0].log, "3 🥔 7 = 10");

    let bare = vec![Reagent::bare(OperatorId::Add)];
    let eval = evaluate_full(&[3, 7], &bare).expect("complete sequence");
    assert_eq!(eval.steps[0].log, "3 ? 7 = 10");
}

#[test]
fn scenario_sequence_folds_to_exact_power() {
    let puzzle = scenario_puzzle();
    let eval = evaluate_full(&puzzle.elements, &puzzle.reagents).expect("complete sequence");
    assert_eq!(eval.steps.len(), 4);
    assert_eq!(eval.steps[0].result, BigInt::from(10));
    assert_eq!(eval.steps[1].result, BigInt::from(250));
    assert_eq!(eval.steps[2].result, BigInt::from(248));
    assert_eq!(eval.final_value, BigInt::from(248).pow(80_u32));
    assert_eq!(eval.steps[0].log, "3 🍎 7 = 10");
}

#[test]
fn placement_grammar_rejects_out_of_turn_placements() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());
    let reagent = session.daily().reagents[0].clone();

    // Reagent before any element is a no-op.
    assert!(!session.place_reagent(reagent.op, &reagent.glyph));
    assert!(session.sequence_reagents().is_empty());

    // After one element, a second element is illegal and a reagent legal.
    assert!(session.place_element(3));
    assert!(!session.place_element(7));
    assert_eq!(session.sequence_elements(), [3]);
    assert!(session.place_reagent(reagent.op, &reagent.glyph));
}

#[test]
fn placing_unknown_or_spent_ingredients_is_a_no_op() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());

    assert!(!session.place_element(99));
    assert!(session.place_element(3));
    let reagent = session.daily().reagents[0].clone();
    // Glyph must match along with the operator id.
    assert!(!session.place_reagent(reagent.op, "🧀"));
    assert!(session.place_reagent(reagent.op, &reagent.glyph));
    // Already placed: the pool no longer holds this pair.
    assert!(session.place_element(7));
    assert!(!session.place_reagent(reagent.op, &reagent.glyph));
}

#[test]
fn undo_is_the_exact_inverse_of_the_last_placement() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());

    let before_element = session.clone();
    assert!(session.place_element(3));
    assert!(session.undo());
    assert_eq!(session, before_element);

    assert!(session.place_element(3));
    let reagent = session.daily().reagents[0].clone();
    let before_reagent = session.clone();
    assert!(session.place_reagent(reagent.op, &reagent.glyph));
    assert!(session.undo());
    assert_eq!(session, before_reagent);
}

#[test]
fn undo_pops_trailing_reagent_before_elements_and_stops_at_empty() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());
    assert!(!session.undo());

    assert!(session.place_element(3));
    let reagent = session.daily().reagents[0].clone();
    assert!(session.place_reagent(reagent.op, &reagent.glyph));

    assert!(session.undo());
    assert!(session.sequence_reagents().is_empty());
    assert_eq!(session.sequence_elements(), [3]);

    assert!(session.undo());
    assert!(session.sequence_elements().is_empty());
    assert!(!session.undo());
}

#[test]
fn live_preview_tracks_each_placement() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());
    assert!(session.live_eval().is_none());

    session.place_element(3);
    let live = session.live_eval().expect("live preview after first element");
    assert_eq!(live.final_value, BigInt::from(3));
    assert!(live.steps.is_empty());

    let reagent = session.daily().reagents[0].clone();
    session.place_reagent(reagent.op, &reagent.glyph);
    session.place_element(7);
    let live = session.live_eval().expect("live preview after first pair");
    assert_eq!(live.final_value, BigInt::from(10));
    assert_eq!(live.steps.len(), 1);
}

#[test]
fn finalize_research_restages_the_original_ingredients() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());

    // Incomplete sequences cannot be sealed.
    assert!(!session.finalize_research());

    place_scenario_sequence(&mut session);
    assert!(session.finalize_research());
    assert_eq!(session.phase(), Phase::Presentation);
    assert!(session.research_eval().is_some());
    assert!(session.live_eval().is_none());
    assert!(session.sequence_elements().is_empty());
    assert!(session.sequence_reagents().is_empty());
    assert_eq!(session.selection_elements(), session.daily().elements.as_slice());
    assert_eq!(session.selection_reagents(), session.daily().reagents.as_slice());
}

#[test]
fn presentation_replay_of_identical_placements_matches_research() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());

    place_scenario_sequence(&mut session);
    assert!(session.finalize_research());

    // Presentation cannot be sealed before the sequence is rebuilt, and
    // research cannot be sealed twice.
    assert!(!session.finalize_presentation());
    place_scenario_sequence(&mut session);
    assert!(!session.finalize_research());
    assert!(session.finalize_presentation());

    assert_eq!(session.phase(), Phase::Done);
    let research = session.research_eval().expect("research eval stored");
    let presentation = session.presentation_eval().expect("presentation eval stored");
    assert_eq!(research.final_value, presentation.final_value);
    // The final phase keeps the placed sequence on display.
    assert!(session.sequence_complete());
    assert!(session.live_eval().is_none());
}

#[test]
fn retry_same_ingredients_rewinds_to_research_on_the_same_puzzle() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());
    place_scenario_sequence(&mut session);
    session.finalize_research();
    place_scenario_sequence(&mut session);
    session.finalize_presentation();

    let daily_before = session.daily().clone();
    session.retry_same_ingredients();
    assert_eq!(session.phase(), Phase::Research);
    assert_eq!(session.daily(), &daily_before);
    assert!(session.research_eval().is_none());
    assert!(session.presentation_eval().is_none());
    assert_eq!(session.selection_elements(), daily_before.elements.as_slice());
    assert!(session.sequence_elements().is_empty());
}

#[test]
fn retry_new_ingredients_swaps_in_a_fresh_puzzle() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());
    session.retry_new_ingredients();

    assert_eq!(session.phase(), Phase::Research);
    assert!(session.daily().seed.starts_with("retry-"));
    assert_eq!(session.daily().elements.len(), 5);
    assert_eq!(session.daily().reagents.len(), 4);
    assert_eq!(session.selection_elements(), session.daily().elements.as_slice());
}

#[test]
fn boundary_routes_commands_and_reports_changes() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());

    let result = boundary::execute_command(&mut session, EngineCommand::PlaceElement { value: 3 });
    assert!(result.changed);
    // Out-of-grammar command: no observable effect.
    let result = boundary::execute_command(&mut session, EngineCommand::PlaceElement { value: 7 });
    assert!(!result.changed);

    let reagent = session.daily().reagents[0].clone();
    let result = boundary::execute_command(
        &mut session,
        EngineCommand::PlaceReagent {
            op: reagent.op,
            glyph: reagent.glyph,
        },
    );
    assert!(result.changed);
    assert!(boundary::can_place_element(&session));
    assert!(!boundary::can_place_reagent(&session));

    let result = boundary::execute_command(&mut session, EngineCommand::Undo);
    assert!(result.changed);

    let result = boundary::execute_command(
        &mut session,
        EngineCommand::Reset {
            seed_override: Some("fixed-seed".to_string()),
        },
    );
    assert!(result.changed);
    assert_eq!(session.daily().seed, "fixed-seed");
}

#[test]
fn control_planning_follows_the_grammar_and_phase() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());

    let controls = plan_controls(&session);
    assert!(controls.place_element_enabled);
    assert!(!controls.place_reagent_enabled);
    assert!(!controls.undo_enabled);
    assert!(!controls.finalize_enabled);
    assert!(controls.retry_same_enabled);

    place_scenario_sequence(&mut session);
    let controls = plan_controls(&session);
    assert!(!controls.place_element_enabled);
    assert!(!controls.place_reagent_enabled);
    assert!(controls.undo_enabled);
    assert!(controls.finalize_enabled);

    session.finalize_research();
    place_scenario_sequence(&mut session);
    session.finalize_presentation();
    let controls = plan_controls(&session);
    assert!(!controls.place_element_enabled);
    assert!(!controls.undo_enabled);
    assert!(!controls.finalize_enabled);
    assert!(controls.retry_new_enabled);
}

#[test]
fn view_model_labels_elements_and_reveals_operators_when_done() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());

    let model = SessionViewModel::new(&session, Some(&TestCatalog));
    assert_eq!(model.phase, Phase::Research);
    assert_eq!(
        model.element_names,
        ["Lithium", "Z7", "Z25", "Z2", "Mercury"]
    );
    assert!(model.revealed_reagents.is_empty());
    assert!(model.live_value.is_none());

    place_scenario_sequence(&mut session);
    session.finalize_research();
    place_scenario_sequence(&mut session);
    session.finalize_presentation();

    let model = SessionViewModel::new(&session, Some(&TestCatalog));
    assert_eq!(model.revealed_reagents.len(), 4);
    assert_eq!(model.revealed_reagents[0].label, "Add");
    assert!(model.research_final.is_some());
    assert_eq!(model.research_final, model.presentation_final);
}

#[test]
fn view_model_snapshots_live_progress() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());
    session.place_element(3);
    let reagent = session.daily().reagents[0].clone();
    session.place_reagent(reagent.op, &reagent.glyph);
    session.place_element(7);

    let model = SessionViewModel::new(&session, None);
    assert_eq!(model.live_value.as_deref(), Some("10"));
    assert_eq!(model.live_gauge, Some("little"));
    assert_eq!(model.step_log, ["3 🍎 7 = 10"]);
    assert_eq!(model.sequence_elements, [3, 7]);
    assert_eq!(model.selection_elements, [25, 2, 80]);
}

#[test]
fn status_text_follows_phase_and_override() {
    let mut session = GameSession::from_puzzle(scenario_puzzle());

    assert_eq!(
        build_status_text(&session, Some("manual override")),
        "manual override"
    );
    assert_eq!(
        build_status_text(&session, None),
        "Research round: place an element to begin."
    );

    session.place_element(3);
    assert_eq!(
        build_status_text(&session, None),
        "Research round: brewing 3 so far."
    );

    session.undo();
    place_scenario_sequence(&mut session);
    assert_eq!(
        build_status_text(&session, None),
        "Sequence complete. Seal the crucible to finish the research round."
    );

    session.finalize_research();
    place_scenario_sequence(&mut session);
    session.finalize_presentation();
    let line = build_status_text(&session, None);
    assert!(line.starts_with("Crucible sealed!"));
    assert!(line.contains("number"));
}

#[test]
fn gauge_orders_and_labels_saturate() {
    assert_eq!(gauge::order_of_magnitude(&BigInt::from(0)), 0);
    assert_eq!(gauge::order_of_magnitude(&BigInt::from(9)), 0);
    assert_eq!(gauge::order_of_magnitude(&BigInt::from(10)), 1);
    assert_eq!(gauge::order_of_magnitude(&BigInt::from(-2500)), 3);

    assert_eq!(gauge::label_for(&BigInt::from(5)), "tiny");
    assert_eq!(gauge::label_for(&BigInt::from(1_000_000)), "huge");
    let colossal = BigInt::from(10).pow(40_u32);
    assert_eq!(gauge::label_for(&colossal), "transcendent");
}

#[test]
fn comma_formatting_groups_from_the_right() {
    assert_eq!(share::format_with_commas(&BigInt::from(0)), "0");
    assert_eq!(share::format_with_commas(&BigInt::from(999)), "999");
    assert_eq!(share::format_with_commas(&BigInt::from(1_000)), "1,000");
    assert_eq!(
        share::format_with_commas(&BigInt::from(1_234_567)),
        "1,234,567"
    );
    assert_eq!(
        share::format_with_commas(&BigInt::from(-1_234_567)),
        "-1,234,567"
    );
}

#[test]
fn glyph_descriptions_cover_the_pool_with_mystery_fallback() {
    assert_eq!(share::describe_glyph("🍎"), "apple");
    assert_eq!(share::describe_glyph("🎲"), "die");
    assert_eq!(share::describe_glyph("🛸"), "mystery");

    for reagent in DailyPuzzle::new_with_seed("coverage-check").reagents {
        assert_ne!(share::describe_glyph(&reagent.glyph), "mystery");
    }
}

#[test]
fn share_phrase_names_every_ingredient() {
    let puzzle = scenario_puzzle();
    let final_value = BigInt::from(248).pow(80_u32);
    let phrase = share::build_share_phrase(
        &puzzle.elements,
        &puzzle.reagents,
        &final_value,
        Some(&TestCatalog),
    );

    assert!(phrase.starts_with("I combined "));
    assert!(phrase.ends_with(" gold"));
    assert!(phrase.contains("lithium"));
    assert!(phrase.contains("mercury"));
    assert!(phrase.contains("z25"));
    assert!(phrase.contains("an apple"));
    assert!(phrase.contains(&share::format_with_commas(&final_value)));
}

#[test]
fn seed_ops_normalize_input_and_build_retry_seeds() {
    assert_eq!(seed_ops::parse_seed_input("  "), None);
    assert_eq!(
        seed_ops::parse_seed_input("  my-seed "),
        Some("my-seed".to_string())
    );
    assert_eq!(seed_ops::seed_from_text_or_daily("override"), "override");
    assert_eq!(seed_ops::seed_from_text_or_daily(""), seed_ops::daily_seed());

    let retry = seed_ops::retry_seed();
    assert!(retry.starts_with("retry-"));
    assert_ne!(retry, seed_ops::retry_seed());
}

#[test]
fn seed_ops_messages_are_stable() {
    assert_eq!(
        seed_ops::msg_started_seed("2025-06-01"),
        "Started a new crucible. Seed 2025-06-01."
    );
    assert!(seed_ops::msg_repeated_seed("x").contains("Seed x."));
    assert!(seed_ops::msg_new_ingredients("y").contains("fresh ingredients"));
}
