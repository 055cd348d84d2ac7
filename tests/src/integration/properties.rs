//! # Reducer Properties
//!
//! Laws the contract reducer must satisfy for every slice, checked over
//! seeded random slices and action sequences.

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    use crate::fixtures::{random_action, random_payload, random_state};
    use sc_01_contract_state::{reduce, Action, ContractState, Phase, ResultPayload};

    const CASES: usize = 500;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5C_01)
    }

    #[test]
    fn prop_logout_always_empties() {
        let mut rng = rng();
        for _ in 0..CASES {
            let state = random_state(&mut rng);
            assert_eq!(reduce(Some(state), &Action::Logout), ContractState::empty());
        }
    }

    #[test]
    fn prop_clean_keeps_only_role() {
        let mut rng = rng();
        for _ in 0..CASES {
            let state = random_state(&mut rng);
            let role = state.role.clone();
            let next = reduce(Some(state), &Action::TransactionClean);
            assert_eq!(
                next,
                ContractState {
                    role,
                    in_progress: Some(false),
                    ..ContractState::default()
                }
            );
        }
    }

    #[test]
    fn prop_clean_is_idempotent() {
        let mut rng = rng();
        for _ in 0..CASES {
            let once = reduce(Some(random_state(&mut rng)), &Action::TransactionClean);
            let twice = reduce(Some(once.clone()), &Action::TransactionClean);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn prop_error_records_detail_and_role() {
        let mut rng = rng();
        for i in 0..CASES {
            let state = random_state(&mut rng);
            let role = state.role.clone();
            let detail = format!("failure {i}");
            let next = reduce(Some(state), &Action::error(detail.clone()));
            assert_eq!(
                next,
                ContractState {
                    role,
                    in_progress: Some(false),
                    error: Some(detail),
                    ..ContractState::default()
                }
            );
        }
    }

    #[test]
    fn prop_started_and_done_only_touch_the_flag() {
        let mut rng = rng();
        for _ in 0..CASES {
            let state = random_state(&mut rng);

            let started = reduce(Some(state.clone()), &Action::TransactionStarted);
            assert_eq!(started.in_progress, Some(true));
            assert_eq!(
                ContractState { in_progress: state.in_progress, ..started },
                state
            );

            let done = reduce(Some(state.clone()), &Action::TransactionDone);
            assert_eq!(done.in_progress, Some(false));
            assert_eq!(ContractState { in_progress: state.in_progress, ..done }, state);
        }
    }

    #[test]
    fn prop_result_merges_payload_and_discriminant() {
        let mut rng = rng();
        for _ in 0..CASES {
            let state = random_state(&mut rng);
            let payload = random_payload(&mut rng);

            let mut expected = state.clone();
            expected.in_progress = Some(false);
            let extra: serde_json::Map<_, _> = payload.clone().into();
            expected.fields.extend(extra);
            expected.fields.insert("type".to_string(), json!("TRANSACTION_RESULT"));

            assert_eq!(reduce(Some(state), &Action::result(payload)), expected);
        }
    }

    #[test]
    fn prop_result_foo_example() {
        let mut rng = rng();
        for _ in 0..CASES {
            let state = random_state(&mut rng);
            let payload = ResultPayload::from_value(json!({"foo": 1})).unwrap();
            let next = reduce(Some(state.clone()), &Action::result(payload));

            let expected = ContractState {
                in_progress: Some(false),
                ..state
            }
            .with_field("foo", json!(1))
            .with_field("type", json!("TRANSACTION_RESULT"));
            assert_eq!(next, expected);
        }
    }

    #[test]
    fn prop_unknown_is_identity() {
        let mut rng = rng();
        for _ in 0..CASES {
            let state = random_state(&mut rng);
            assert_eq!(reduce(Some(state.clone()), &Action::Unknown), state);
        }
    }

    #[test]
    fn prop_role_only_changes_on_logout() {
        let mut rng = rng();
        for _ in 0..CASES {
            let mut state = random_state(&mut rng);
            for _ in 0..20 {
                let action = random_action(&mut rng);
                let role = state.role.clone();
                state = reduce(Some(state), &action);
                if action == Action::Logout {
                    assert!(state.is_empty());
                } else {
                    // Random payloads never carry a role key.
                    assert_eq!(state.role, role);
                }
            }
        }
    }

    #[test]
    fn prop_in_progress_only_after_start() {
        let mut rng = rng();
        for _ in 0..CASES {
            let mut state = ContractState::empty();
            for _ in 0..20 {
                let action = random_action(&mut rng);
                let before = state.clone();
                state = reduce(Some(state), &action);
                if state.phase() == Phase::InProgress {
                    assert!(
                        action == Action::TransactionStarted
                            || (action == Action::Unknown && before.is_in_progress()),
                        "in progress after {action:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn scenario_admin_lifecycle() {
        let s0 = ContractState::empty().with_role("admin");
        let s1 = reduce(Some(s0), &Action::TransactionStarted);
        assert_eq!(s1.to_json(), json!({"role": "admin", "inProgress": true}));

        let payload = ResultPayload::from_value(json!({"batchId": 7})).unwrap();
        let s2 = reduce(Some(s1), &Action::result(payload));
        assert_eq!(
            s2.to_json(),
            json!({
                "role": "admin",
                "inProgress": false,
                "batchId": 7,
                "type": "TRANSACTION_RESULT"
            })
        );

        let s3 = reduce(Some(s2), &Action::TransactionClean);
        assert_eq!(s3.to_json(), json!({"role": "admin", "inProgress": false}));
    }
}
