//! Play attempt tests.
//!
//! A failed play must leave mana, zones and the message log exactly as they
//! were, whichever check rejected it.

use std::sync::Arc;

use conduit_ccg::{
    CardCatalog, CardDefinition, CardId, CardKind, EffectError, Effect, EngineConfig, GameState,
    Lifetime, ManaCost, ManaElement, Phase, PlayError, RoundEngine, ZoneKind,
};

const CATALOG_JSON: &str = r#"[
    {
        "id": 1,
        "name": "Tjena",
        "kind": "conduit",
        "cost": [1, 0, 0, 0, 0, 0, 0],
        "lifetime": { "rounds": 3 },
        "on_play": { "message": "Tjena din jävel" }
    },
    {
        "id": 2,
        "name": "Hejsan",
        "kind": "artifact",
        "lifetime": "endless",
        "durability": 4,
        "on_round_start": { "gain_mana": { "element": "fire", "amount": 2 } }
    },
    {
        "id": 3,
        "name": "Overreach",
        "kind": "attack",
        "lifetime": { "rounds": 1 },
        "on_play": { "batch": [
            { "gain_mana": { "element": "water", "amount": 5 } },
            { "message": "reaching" },
            { "draw_cards": { "count": 3 } }
        ] }
    },
    {
        "id": 4,
        "name": "Costly",
        "kind": "buff",
        "cost": [2, 0, 0, 1, 0, 0, 0],
        "lifetime": { "rounds": 1 }
    }
]"#;

const TJENA: CardId = CardId::new(1);
const HEJSAN: CardId = CardId::new(2);
const OVERREACH: CardId = CardId::new(3);
const COSTLY: CardId = CardId::new(4);

fn game(config: EngineConfig, hand: &[CardId]) -> GameState {
    let catalog = Arc::new(CardCatalog::from_json(CATALOG_JSON).unwrap());
    let mut state = GameState::initialize(config.with_draw_rate(0), catalog, &[]).unwrap();
    for &card in hand {
        state.deal_to(ZoneKind::Hand, card).unwrap();
    }
    RoundEngine::start_round(&mut state).unwrap();
    state
}

/// Everything a failed play must leave untouched.
fn fingerprint(state: &GameState) -> (conduit_ccg::PlayerState, usize) {
    (state.player().clone(), state.messages().len())
}

#[test]
fn test_catalog_loaded_from_json() {
    let state = game(EngineConfig::default(), &[TJENA, HEJSAN]);
    let hand = state.hand_snapshot();
    assert_eq!(hand[0].name, "Tjena");
    assert_eq!(hand[0].cost.get(ManaElement::Void), 1);
    assert_eq!(hand[1].name, "Hejsan");
    assert!(hand[1].cost.is_free());
}

#[test]
fn test_on_play_message() {
    let mut state = game(EngineConfig::default(), &[TJENA]);
    state.grant_mana(ManaElement::Void, 1).unwrap();

    RoundEngine::attempt_play(&mut state, 0, 0).unwrap();
    assert_eq!(state.messages().len(), 1);
    assert_eq!(state.messages()[0], "Tjena din jävel");
    assert_eq!(state.board_snapshot()[0].remaining, Lifetime::Rounds(3));
}

#[test]
fn test_durability_carried_into_play() {
    let mut state = game(EngineConfig::default(), &[HEJSAN]);
    RoundEngine::attempt_play(&mut state, 0, 2).unwrap();

    let board = state.board_snapshot();
    assert_eq!(board[0].durability, Some(4));
    assert_eq!(board[0].row, Some(1));

    RoundEngine::start_round(&mut state).unwrap();
    assert_eq!(state.mana().get(ManaElement::Fire), 2);
}

#[test]
fn test_invalid_hand_index() {
    let mut state = game(EngineConfig::default(), &[HEJSAN]);
    let before = fingerprint(&state);

    let err = RoundEngine::attempt_play(&mut state, 5, 0).unwrap_err();
    assert!(matches!(err, PlayError::InvalidHandIndex(5)));
    assert_eq!(fingerprint(&state), before);
}

#[test]
fn test_insufficient_mana_reports_first_shortfall() {
    let mut state = game(EngineConfig::default(), &[COSTLY]);
    state.grant_mana(ManaElement::Void, 2).unwrap();
    let before = fingerprint(&state);

    let err = RoundEngine::attempt_play(&mut state, 0, 0).unwrap_err();
    assert!(matches!(
        err,
        PlayError::InsufficientMana { element: ManaElement::Fire, required: 1, available: 0 }
    ));
    assert_eq!(fingerprint(&state), before);
    assert_eq!(state.phase(), Phase::PlayerAction);
}

#[test]
fn test_exact_cost_is_deducted() {
    let mut state = game(EngineConfig::default(), &[COSTLY]);
    state.grant_mana(ManaElement::Void, 3).unwrap();
    state.grant_mana(ManaElement::Fire, 1).unwrap();
    state.grant_mana(ManaElement::Water, 1).unwrap();

    RoundEngine::attempt_play(&mut state, 0, 0).unwrap();
    assert_eq!(state.mana().get(ManaElement::Void), 1);
    assert_eq!(state.mana().get(ManaElement::Fire), 0);
    assert_eq!(state.mana().get(ManaElement::Water), 1);
}

/// A batch that fails on its last step rolls back mana and messages.
#[test]
fn test_failed_on_play_rolls_back() {
    let mut state = game(EngineConfig::default(), &[OVERREACH]);
    let before = fingerprint(&state);

    let err = RoundEngine::attempt_play(&mut state, 0, 0).unwrap_err();
    match err {
        PlayError::EffectFailed(EffectError::Batch { index, source }) => {
            assert_eq!(index, 2);
            assert_eq!(*source, EffectError::DrawPileEmpty);
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(fingerprint(&state), before);
    assert_eq!(state.mana().get(ManaElement::Water), 0);
    assert!(state.messages().is_empty());
    assert_eq!(state.hand_snapshot().len(), 1);
    assert!(state.board_snapshot().is_empty());
    assert_eq!(state.phase(), Phase::PlayerAction);
}

#[test]
fn test_successful_on_play_keeps_effects() {
    let mut state = game(EngineConfig::default(), &[OVERREACH]);
    for _ in 0..3 {
        state.deal_to(ZoneKind::Draw, HEJSAN).unwrap();
    }

    RoundEngine::attempt_play(&mut state, 0, 0).unwrap();
    assert_eq!(state.mana().get(ManaElement::Water), 5);
    assert_eq!(state.hand_snapshot().len(), 3);
    assert_eq!(state.zones().draw_remaining(), 0);
}

#[test]
fn test_on_play_mana_counts_toward_cost() {
    let mut catalog = CardCatalog::new();
    let battery = catalog
        .register(
            CardDefinition::new(CardId::new(1), "Battery", CardKind::Conduit)
                .with_cost(ManaCost::free().with(ManaElement::Lightning, 2))
                .on_play(Effect::gain_mana(ManaElement::Lightning, 3)),
        )
        .unwrap();
    let mut state = GameState::initialize(EngineConfig::default().with_draw_rate(0), Arc::new(catalog), &[]).unwrap();
    state.deal_to(ZoneKind::Hand, battery).unwrap();
    RoundEngine::start_round(&mut state).unwrap();
    state.grant_mana(ManaElement::Lightning, 2).unwrap();

    RoundEngine::attempt_play(&mut state, 0, 0).unwrap();
    assert_eq!(state.mana().get(ManaElement::Lightning), 3);
}

#[test]
fn test_conservation_across_plays() {
    let mut state = game(EngineConfig::default(), &[HEJSAN, OVERREACH, TJENA]);
    let total = state.zones().total_cards();

    RoundEngine::attempt_play(&mut state, 0, 0).unwrap();
    let _ = RoundEngine::attempt_play(&mut state, 1, 0);
    let _ = RoundEngine::attempt_play(&mut state, 2, 0);
    for _ in 0..4 {
        RoundEngine::start_round(&mut state).unwrap();
    }
    assert_eq!(state.zones().total_cards(), total);
}
