//! Behavior pipeline tests: onion ordering, short-circuiting, stock
//! behaviors.

use courier::behaviors::{TransactionBehavior, UnitOfWork, ValidationBehavior, ValidationError};
use courier::testing::TraceBehavior;
use courier::{BoxError, Mediator, RegistryBuilder, SendError};
use std::sync::{Arc, Mutex};

mod common;
use common::{
    CreateCustomer, FailingBehavior, MarkingHandler, RejectedError, RejectingHandler,
    ShortCircuitBehavior,
};

fn trace_log() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

#[tokio::test]
async fn behaviors_nest_first_registered_outermost() {
    let log = trace_log();
    let registry = RegistryBuilder::new()
        .register(MarkingHandler {
            log: log.clone(),
            response: 7,
        })
        .register_behavior::<CreateCustomer, _>(TraceBehavior::new("b1", log.clone()))
        .register_behavior::<CreateCustomer, _>(TraceBehavior::new("b2", log.clone()))
        .register_behavior::<CreateCustomer, _>(TraceBehavior::new("b3", log.clone()))
        .build();
    let mediator = Mediator::new(registry);

    let id = mediator
        .send(CreateCustomer {
            name: "Yash".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(id, 7);

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "b1:before", "b2:before", "b3:before", "handler", "b3:after", "b2:after", "b1:after",
        ],
        "behaviors should wrap the handler onion-style"
    );
}

#[tokio::test]
async fn short_circuit_skips_inner_behaviors_and_handler() {
    let log = trace_log();
    let registry = RegistryBuilder::new()
        .register(MarkingHandler {
            log: log.clone(),
            response: 7,
        })
        .register_behavior::<CreateCustomer, _>(TraceBehavior::new("b1", log.clone()))
        .register_behavior::<CreateCustomer, _>(ShortCircuitBehavior {
            log: log.clone(),
            response: 99,
        })
        .register_behavior::<CreateCustomer, _>(TraceBehavior::new("b3", log.clone()))
        .build();
    let mediator = Mediator::new(registry);

    let id = mediator
        .send(CreateCustomer {
            name: "Yash".to_string(),
        })
        .await
        .unwrap();

    // The short-circuiting behavior's own result is what the caller sees.
    assert_eq!(id, 99);
    assert_eq!(
        *log.lock().unwrap(),
        vec!["b1:before", "short-circuit", "b1:after"],
        "inner behavior and handler should never run"
    );
}

#[tokio::test]
async fn behavior_error_propagates_and_handler_never_runs() {
    let log = trace_log();
    let registry = RegistryBuilder::new()
        .register(MarkingHandler {
            log: log.clone(),
            response: 7,
        })
        .register_behavior::<CreateCustomer, _>(FailingBehavior)
        .build();
    let mediator = Mediator::new(registry);

    let err = mediator
        .send(CreateCustomer {
            name: "Yash".to_string(),
        })
        .await
        .unwrap_err();

    let cause = err
        .handler_error()
        .expect("expected a pipeline error")
        .downcast_ref::<RejectedError>()
        .expect("behavior error should reach the caller unchanged");
    assert_eq!(cause.0, "behavior said no");
    assert!(log.lock().unwrap().is_empty(), "handler should not run");
}

#[tokio::test]
async fn validation_rejects_without_running_the_handler() {
    let log = trace_log();
    let registry = RegistryBuilder::new()
        .register(MarkingHandler {
            log: log.clone(),
            response: 7,
        })
        .register_behavior::<CreateCustomer, _>(ValidationBehavior)
        .build();
    let mediator = Mediator::new(registry);

    let err = mediator
        .send(CreateCustomer {
            name: "   ".to_string(),
        })
        .await
        .unwrap_err();

    let cause = err
        .handler_error()
        .expect("expected a validation error")
        .downcast_ref::<ValidationError>()
        .expect("cause should be the validation error");
    assert_eq!(cause.reason(), "customer name must not be empty");
    assert!(log.lock().unwrap().is_empty());

    // A valid request passes straight through.
    let id = mediator
        .send(CreateCustomer {
            name: "Yash".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(id, 7);
}

struct FakeUnitOfWork {
    journal: Arc<Mutex<Vec<&'static str>>>,
}

impl UnitOfWork for FakeUnitOfWork {
    async fn begin(&self) -> Result<(), BoxError> {
        self.journal.lock().unwrap().push("begin");
        Ok(())
    }

    async fn commit(&self) -> Result<(), BoxError> {
        self.journal.lock().unwrap().push("commit");
        Ok(())
    }

    async fn rollback(&self) -> Result<(), BoxError> {
        self.journal.lock().unwrap().push("rollback");
        Ok(())
    }
}

#[tokio::test]
async fn transaction_commits_on_success_and_rolls_back_on_error() {
    let journal = Arc::new(Mutex::new(Vec::new()));

    let registry = RegistryBuilder::new()
        .register(MarkingHandler {
            log: trace_log(),
            response: 7,
        })
        .register_behavior::<CreateCustomer, _>(TransactionBehavior::new(FakeUnitOfWork {
            journal: journal.clone(),
        }))
        .build();
    Mediator::new(registry)
        .send(CreateCustomer {
            name: "Yash".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(*journal.lock().unwrap(), vec!["begin", "commit"]);

    journal.lock().unwrap().clear();
    let registry = RegistryBuilder::new()
        .register(RejectingHandler)
        .register_behavior::<CreateCustomer, _>(TransactionBehavior::new(FakeUnitOfWork {
            journal: journal.clone(),
        }))
        .build();
    let err = Mediator::new(registry)
        .send(CreateCustomer {
            name: "Yash".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(*journal.lock().unwrap(), vec!["begin", "rollback"]);
    // The handler's error survives the rollback.
    assert!(matches!(err, SendError::Handler(_)));
}

#[cfg(feature = "timeout")]
mod timeout {
    use super::common::GetCustomer;
    use courier::behaviors::{TimeoutBehavior, TimeoutElapsed};
    use courier::{Mediator, RegistryBuilder};
    use std::time::Duration;

    #[tokio::test]
    async fn deadline_overrun_fails_the_dispatch() {
        let registry = RegistryBuilder::new()
            .register(|_request: GetCustomer| async move {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, courier::BoxError>("too late".to_string())
            })
            .register_behavior::<GetCustomer, _>(TimeoutBehavior::new(Duration::from_millis(10)))
            .build();

        let err = Mediator::new(registry)
            .send(GetCustomer { id: 1 })
            .await
            .unwrap_err();
        assert!(
            err.handler_error()
                .and_then(|cause| cause.downcast_ref::<TimeoutElapsed>())
                .is_some()
        );
    }
}
