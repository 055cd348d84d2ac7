//! # Integration Test Flows
//!
//! The contract store is driven the way the UI wires it: the submission
//! collaborator dispatches lifecycle actions, the role lookup dispatches a
//! result carrying the role, and the views read snapshots from change events.
//!
//! ## Flows Tested:
//!
//! 1. **Role lookup → Profile**: role arrives through a result and shows on the profile
//! 2. **Lookup gating**: the batch form refuses to submit while a transaction is in flight
//! 3. **Failure → Clean**: an error is recorded, then cleared by the next cycle
//! 4. **Logout**: the slice and the profile role are wiped

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tokio::time::timeout;
    use tokio_stream::StreamExt;

    use sc_01_contract_state::{
        Action, ActionKind, BroadcastPublisher, ContractState, ContractStateApi, ContractStore,
        Phase, ResultMerge, ResultPayload, Role, StateChanged, StoreConfig,
    };
    use sc_02_client_views::{BatchLookupForm, IdField, ProfileView, Submission, UserProfile};
    use sc_telemetry::{log_tx_event, CONTRACT_STATE};
    use serde_json::json;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn store() -> ContractStore<BroadcastPublisher> {
        ContractStore::from_config(&StoreConfig::default())
    }

    fn user() -> UserProfile {
        UserProfile {
            display_name: "Cold Storage 12".to_string(),
        }
    }

    fn role_result(role: &str) -> Action {
        Action::result(ResultPayload::from_value(json!({ "role": role })).unwrap())
    }

    async fn next_event(sub: &mut sc_01_contract_state::StateSubscription) -> StateChanged {
        let event = timeout(Duration::from_secs(1), sub.recv())
            .await
            .expect("timed out waiting for state change")
            .expect("publisher closed");
        log_tx_event!(
            debug,
            CONTRACT_STATE,
            "received state change",
            event.action,
            sequence = event.sequence
        );
        event
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[tokio::test]
    async fn test_role_lookup_reaches_profile() -> anyhow::Result<()> {
        let store = store();
        let mut sub = store.publisher().subscribe();

        store.dispatch(Action::TransactionStarted)?;
        store.dispatch(role_result("manufacturer"))?;
        store.dispatch(Action::TransactionClean)?;

        let started = next_event(&mut sub).await;
        assert_eq!(started.phase, Phase::InProgress);

        let resolved = next_event(&mut sub).await;
        assert_eq!(resolved.action, ActionKind::TransactionResult);
        let profile = ProfileView::project(&user(), Some("0x42"), &resolved.state);
        assert_eq!(profile.role, Some(Role::new("manufacturer")));

        let cleaned = next_event(&mut sub).await;
        assert_eq!(
            cleaned.state.to_json(),
            json!({"role": "manufacturer", "inProgress": false})
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_batch_lookup_waits_for_transaction() -> anyhow::Result<()> {
        let store = store();
        let mut form = BatchLookupForm::new();
        form.apply_scan(3, 14);

        let busy = store.dispatch(Action::TransactionStarted)?;
        assert_eq!(form.submit(&busy), Submission::Blocked);

        let done = store.dispatch(Action::TransactionDone)?;
        match form.submit(&done) {
            Submission::Ready(batch) => {
                assert_eq!(batch.campaign_id.get(), 3);
                assert_eq!(batch.batch_id.get(), 14);
            }
            other => panic!("expected ready submission, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_transaction_then_fresh_cycle() -> anyhow::Result<()> {
        let store = ContractStore::with_state(
            ContractState::empty().with_role("retailer"),
            sc_01_contract_state::Reducer::default(),
            BroadcastPublisher::new(),
        );
        let mut sub = store.publisher().subscribe();

        store.dispatch(Action::TransactionStarted)?;
        store.dispatch_json(
            r#"{"type":"TRANSACTION_ERROR","error":"User denied transaction signature"}"#,
        )?;

        next_event(&mut sub).await;
        let failed = next_event(&mut sub).await;
        assert!(failed.is_failure());
        assert_eq!(failed.previous_phase, Phase::InProgress);
        assert_eq!(failed.state.error(), Some("User denied transaction signature"));

        // A new cycle that skips CLEAN keeps the stale error.
        let restarted = store.dispatch(Action::TransactionStarted)?;
        assert_eq!(restarted.error(), Some("User denied transaction signature"));

        let cleaned = store.dispatch(Action::TransactionClean)?;
        assert_eq!(cleaned.error(), None);
        assert_eq!(cleaned.role(), Some(&Role::new("retailer")));
        Ok(())
    }

    #[tokio::test]
    async fn test_logout_wipes_role() -> anyhow::Result<()> {
        let store = store();
        store.dispatch(role_result("admin"))?;

        let mut events = Box::pin(store.publisher().subscribe().into_stream());
        let state = store.dispatch(Action::Logout)?;
        assert!(state.is_empty());

        let event = timeout(Duration::from_secs(1), events.next())
            .await?
            .expect("stream ended");
        assert!(event.is_logout());
        assert_eq!(event.phase, Phase::Idle);
        assert!(!ProfileView::project(&user(), None, &event.state).has_role());
        Ok(())
    }

    #[tokio::test]
    async fn test_result_shape_follows_merge_policy() -> anyhow::Result<()> {
        let payload = ResultPayload::from_value(json!({"batchId": 7}))?;

        let legacy = store();
        let state = legacy.dispatch(Action::result(payload.clone()))?;
        assert_eq!(state.field("type"), Some(&json!("TRANSACTION_RESULT")));

        let strict = ContractStore::from_config(
            &StoreConfig::default().with_result_merge(ResultMerge::StripDiscriminant),
        );
        let state = strict.dispatch(Action::result(payload))?;
        assert_eq!(state.field("type"), None);
        assert_eq!(state.field("batchId"), Some(&json!(7)));
        Ok(())
    }

    #[tokio::test]
    async fn test_form_errors_surface_after_submit() {
        let store = store();
        let idle = store.state().unwrap();

        let mut form = BatchLookupForm::new();
        form.set_field(IdField::Campaign, "5");
        assert!(form.field_errors().is_empty());

        assert!(matches!(form.submit(&idle), Submission::Rejected(_)));
        let messages: Vec<String> = form.field_errors().iter().map(ToString::to_string).collect();
        assert_eq!(messages, vec!["BatchId cannot be 0"]);
    }
}
