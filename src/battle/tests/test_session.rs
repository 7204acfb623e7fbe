#[cfg(test)]
mod tests {
    use crate::battle::engine::execute_turn;
    use crate::battle::state::{BattleOutcome, SessionState};
    use crate::battle::tests::common::{create_test_session, generous_rng, TestCreatureBuilder};
    use crate::errors::BattleError;
    use crate::prefabs;
    use crate::rng::ScriptedRng;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::StatusAilment;

    #[test]
    fn initiative_goes_to_the_higher_speed() {
        // Stormray (speed 91 base) against Terralith (speed 28 base).
        let slow = TestCreatureBuilder::new(prefabs::terralith(), 20)
            .with_moves(vec![prefabs::tackle()])
            .build("p1");
        let fast = TestCreatureBuilder::new(prefabs::stormray(), 20)
            .with_moves(vec![prefabs::thunder_shock()])
            .build("p2");

        let session = create_test_session(slow, fast);

        assert_eq!(session.active_id(), Some("p2"));
        assert_eq!(session.turn_number, 1);
        assert!(!session.is_finished());
    }

    #[test]
    fn speed_ties_resolve_to_the_first_listed_side() {
        let first = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::tackle()])
            .build("p1");
        let second = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::tackle()])
            .build("p2");

        let session = create_test_session(first, second);

        assert_eq!(session.active_id(), Some("p1"));
    }

    #[test]
    fn turns_alternate_and_count_up() {
        // Arrange: mirrored Aquatoads, so the speed tie hands p1 the start.
        let first = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::tackle()])
            .build("p1");
        let second = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::tackle()])
            .build("p2");
        let mut session = create_test_session(first, second);
        let mut rng = ScriptedRng::new(vec![50, 50], vec![0.5, 1.0, 0.5, 1.0]);

        // Act: one action per side.
        let opening = execute_turn(&mut session, "p1", 0, &mut rng).unwrap();
        assert_eq!(session.active_id(), Some("p2"));
        assert_eq!(session.turn_number, 2);
        let response = execute_turn(&mut session, "p2", 0, &mut rng).unwrap();

        // Assert: identical stat pairs, so both hits land floor(8.35).
        assert_eq!(opening.damage, 8);
        assert_eq!(response.damage, 8);
        assert_eq!(session.active_id(), Some("p1"));
        assert_eq!(session.turn_number, 3);
        assert_eq!(session.log.len(), 2);
        assert_eq!(session.log.to_string().lines().count(), 2);
        assert!(opening.summary.contains("Aquatoad used Tackle!"));
        assert!(opening.summary.contains("took 8 damage!"));
    }

    #[test]
    fn action_validation_rejects_in_a_fixed_order() {
        let first = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::tackle()])
            .build("p1");
        let second = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::tackle()])
            .build("p2");
        let mut session = create_test_session(first, second);
        let mut rng = generous_rng();

        // A stranger is rejected before anything else is looked at.
        assert_eq!(
            execute_turn(&mut session, "ghost", 0, &mut rng).unwrap_err(),
            BattleError::NotInBattle("ghost".to_string())
        );

        // A participant acting out of turn.
        assert_eq!(
            execute_turn(&mut session, "p2", 0, &mut rng).unwrap_err(),
            BattleError::NotYourTurn("p2".to_string())
        );

        // A move index past the end of the list.
        assert_eq!(
            execute_turn(&mut session, "p1", 5, &mut rng).unwrap_err(),
            BattleError::InvalidMoveIndex {
                index: 5,
                move_count: 1,
            }
        );

        // An exhausted move.
        session.participants[0].moves[0].uses_left = 0;
        assert_eq!(
            execute_turn(&mut session, "p1", 0, &mut rng).unwrap_err(),
            BattleError::MoveExhausted {
                move_name: "Tackle".to_string(),
            }
        );

        // None of the rejections advanced anything.
        assert_eq!(session.turn_number, 1);
        assert_eq!(session.log.len(), 0);
        assert_eq!(session.state, SessionState::InProgress { active: 0 });
    }

    #[test]
    fn reducing_the_defender_to_zero_finishes_the_session() {
        // Arrange: the defender hangs on at 1 HP.
        let first = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::tackle()])
            .build("p1");
        let second = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::tackle()])
            .with_hp(1)
            .build("p2");
        let mut session = create_test_session(first, second);
        let mut rng = generous_rng();

        // Act
        let record = execute_turn(&mut session, "p1", 0, &mut rng).unwrap();

        // Assert
        assert!(record.fainted);
        assert!(record.summary.contains("Aquatoad fainted!"));
        assert!(session.participants[1].is_fainted());
        assert!(session.is_finished());
        assert_eq!(
            session.outcome(),
            Some(&BattleOutcome::Winner {
                winner_id: "p1".to_string(),
            })
        );
        assert_eq!(session.active_id(), None);
        // The counter freezes at the turn the battle ended on.
        assert_eq!(session.turn_number, 1);
    }

    #[test]
    fn a_finished_session_refuses_further_actions() {
        let first = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::tackle()])
            .build("p1");
        let second = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::tackle()])
            .with_hp(1)
            .build("p2");
        let mut session = create_test_session(first, second);
        let mut rng = generous_rng();
        execute_turn(&mut session, "p1", 0, &mut rng).unwrap();

        for actor in ["p1", "p2"] {
            assert_eq!(
                execute_turn(&mut session, actor, 0, &mut rng).unwrap_err(),
                BattleError::BattleAlreadyFinished
            );
        }
    }

    #[rstest]
    #[case("partial heal", 25, 20, 45)]
    #[case("heal clamps at max", 45, 5, 50)]
    #[case("heal at full restores nothing", 50, 0, 50)]
    fn healing_restores_up_to_the_cap(
        #[case] desc: &str,
        #[case] start_hp: u16,
        #[case] expected_healed: u16,
        #[case] expected_hp: u16,
    ) {
        // Aquatoad at level 20 with uniform IVs tops out at 50 HP.
        let first = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::mend()])
            .with_hp(start_hp)
            .build("p1");
        let second = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::tackle()])
            .build("p2");
        let mut session = create_test_session(first, second);
        // Healing consumes no randomness at all.
        let mut rng = ScriptedRng::new(vec![], vec![]);

        let record = execute_turn(&mut session, "p1", 0, &mut rng).unwrap();

        assert_eq!(record.healed, expected_healed, "case: {}", desc);
        assert_eq!(session.participants[0].current_hp, expected_hp, "case: {}", desc);
        assert!(
            record
                .summary
                .contains(&format!("recovered {} HP!", expected_healed)),
            "case: {}",
            desc
        );
        assert!(rng.is_exhausted(), "case: {}", desc);
    }

    #[test]
    fn the_first_ailment_sticks_and_later_ones_fail() {
        // Arrange
        let first = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::toxin_spray()])
            .build("p1");
        let second = TestCreatureBuilder::new(prefabs::aquatoad(), 20)
            .with_moves(vec![prefabs::tackle()])
            .build("p2");
        let mut session = create_test_session(first, second);
        // Only p2's Tackle rolls anything.
        let mut rng = ScriptedRng::new(vec![50], vec![0.5, 1.0]);

        // Act: poison lands, p2 responds, the second poison fizzles.
        let poisoning = execute_turn(&mut session, "p1", 0, &mut rng).unwrap();
        execute_turn(&mut session, "p2", 0, &mut rng).unwrap();
        let fizzle = execute_turn(&mut session, "p1", 0, &mut rng).unwrap();

        // Assert
        assert_eq!(poisoning.status_applied, Some(StatusAilment::Poison));
        assert!(poisoning.summary.contains("Aquatoad was poisoned!"));
        assert_eq!(fizzle.status_applied, None);
        assert!(fizzle.summary.contains("But it failed!"));
        assert_eq!(session.participants[1].status, Some(StatusAilment::Poison));
        assert!(rng.is_exhausted());
    }
}
