use super::prelude::*;
use crate::authorization::authorize_operation;

/// Checks the policy of an operation that needs no resource owner.
pub fn authorize(operation: Operation, caller: Option<&User>) -> Result<()> {
    authorize_operation(operation, caller, None)?;
    Ok(())
}

/// Returns the caller if it may perform the operation.
pub fn authenticated(operation: Operation, caller: Option<&User>) -> Result<&User> {
    authorize_operation(operation, caller, None)?;
    caller.ok_or(Error::Unauthorized)
}

pub fn authorize_owner(operation: Operation, caller: Option<&User>, owner: Id) -> Result<()> {
    authorize_operation(operation, caller, Some(owner))?;
    Ok(())
}
