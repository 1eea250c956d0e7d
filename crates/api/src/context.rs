use sparestock_core::OperatorId;

/// Authenticated operator for a request, derived from the session token by
/// the auth middleware and present on all protected routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorContext {
    operator_id: OperatorId,
    username: String,
}

impl OperatorContext {
    pub fn new(operator_id: OperatorId, username: String) -> Self {
        Self {
            operator_id,
            username,
        }
    }

    pub fn operator_id(&self) -> OperatorId {
        self.operator_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
