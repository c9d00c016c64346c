use courier::behaviors::{Validate, ValidationError};
use courier::{BoxError, ChainLink, Next, Notification, PipelineBehavior, Request, RequestHandler, Subscriber};
use std::sync::{Arc, Mutex};

// ============================================================================
// Requests and Notifications
// ============================================================================

#[derive(Debug, Clone)]
pub struct CreateCustomer {
    pub name: String,
}

impl Request for CreateCustomer {
    type Response = u64;
}

impl Validate for CreateCustomer {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("customer name must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct GetCustomer {
    pub id: u64,
}

impl Request for GetCustomer {
    type Response = String;
}

#[derive(Debug, Clone)]
pub struct CustomerCreated {
    pub id: u64,
}

impl Notification for CustomerCreated {}

// ============================================================================
// Handlers
// ============================================================================

/// Appends the customer name to a shared list and returns its position as
/// the new id.
pub struct CreateCustomerHandler {
    pub created: Arc<Mutex<Vec<String>>>,
}

impl RequestHandler<CreateCustomer> for CreateCustomerHandler {
    async fn handle(&self, request: CreateCustomer) -> Result<u64, BoxError> {
        let mut created = self.created.lock().unwrap();
        created.push(request.name);
        Ok(created.len() as u64)
    }
}

pub struct GetCustomerHandler;

impl RequestHandler<GetCustomer> for GetCustomerHandler {
    async fn handle(&self, request: GetCustomer) -> Result<String, BoxError> {
        Ok(format!("customer-{}", request.id))
    }
}

// Domain error for downcast assertions
#[derive(Debug, thiserror::Error)]
#[error("customer rejected: {0}")]
pub struct RejectedError(pub &'static str);

pub struct RejectingHandler;

impl RequestHandler<CreateCustomer> for RejectingHandler {
    async fn handle(&self, _request: CreateCustomer) -> Result<u64, BoxError> {
        Err(Box::new(RejectedError("closed for business")))
    }
}

/// Records that the handler ran, then answers with a fixed id.
pub struct MarkingHandler {
    pub log: Arc<Mutex<Vec<String>>>,
    pub response: u64,
}

impl RequestHandler<CreateCustomer> for MarkingHandler {
    async fn handle(&self, _request: CreateCustomer) -> Result<u64, BoxError> {
        self.log.lock().unwrap().push("handler".to_string());
        Ok(self.response)
    }
}

// ============================================================================
// Behaviors
// ============================================================================

/// Answers without running the continuation; everything downstream is
/// skipped.
pub struct ShortCircuitBehavior {
    pub log: Arc<Mutex<Vec<String>>>,
    pub response: u64,
}

impl PipelineBehavior<CreateCustomer> for ShortCircuitBehavior {
    async fn handle(
        &self,
        _request: CreateCustomer,
        _next: Next<CreateCustomer>,
    ) -> Result<u64, BoxError> {
        self.log.lock().unwrap().push("short-circuit".to_string());
        Ok(self.response)
    }
}

pub struct FailingBehavior;

impl PipelineBehavior<CreateCustomer> for FailingBehavior {
    async fn handle(
        &self,
        _request: CreateCustomer,
        _next: Next<CreateCustomer>,
    ) -> Result<u64, BoxError> {
        Err(Box::new(RejectedError("behavior said no")))
    }
}

// ============================================================================
// Subscribers
// ============================================================================

/// Pushes its label to a shared log on every notification, for asserting
/// invocation order.
pub struct LabelSubscriber {
    pub label: &'static str,
    pub log: Arc<Mutex<Vec<&'static str>>>,
}

impl Subscriber<CustomerCreated> for LabelSubscriber {
    async fn notify(&self, _notification: &CustomerCreated) -> Result<(), BoxError> {
        self.log.lock().unwrap().push(self.label);
        Ok(())
    }
}

// ============================================================================
// Chain context and links
// ============================================================================

#[derive(Debug, Default)]
pub struct OrderContext {
    pub amount: i64,
    pub fraud_checked: bool,
    pub paid: bool,
    pub steps: Vec<&'static str>,
}

pub struct ValidateOrder;

impl ChainLink<OrderContext> for ValidateOrder {
    async fn handle(&self, context: &mut OrderContext) -> Result<(), BoxError> {
        if context.amount <= 0 {
            return Err(Box::new(RejectedError("invalid order amount")));
        }
        context.steps.push("validate");
        Ok(())
    }
}

pub struct CheckFraud;

impl ChainLink<OrderContext> for CheckFraud {
    async fn handle(&self, context: &mut OrderContext) -> Result<(), BoxError> {
        context.fraud_checked = true;
        context.steps.push("fraud");
        Ok(())
    }
}

pub struct TakePayment;

impl ChainLink<OrderContext> for TakePayment {
    async fn handle(&self, context: &mut OrderContext) -> Result<(), BoxError> {
        context.paid = true;
        context.steps.push("payment");
        Ok(())
    }
}
