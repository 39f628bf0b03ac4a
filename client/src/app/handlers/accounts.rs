//! # Account Handlers

use serde_json::Value;
use shared::{Account, AccountValidation, ValidateAccountRequest};

use crate::core::error::Result;
use crate::operation::{Dispatcher, OperationHandle};
use crate::services::api::catalog::accounts as ops;
use crate::utils::validation::{validate_account_number, validate_required};

pub(crate) fn get_accounts(dispatcher: &Dispatcher) -> OperationHandle<Vec<Account>> {
    dispatcher.fetch(ops::GET_ACCOUNTS)
}

pub(crate) fn get_balance(dispatcher: &Dispatcher) -> OperationHandle<Value> {
    dispatcher.fetch(ops::GET_BALANCE)
}

/// Name enquiry for a transfer destination.
pub(crate) fn validate_account(
    dispatcher: &Dispatcher,
    request: ValidateAccountRequest,
) -> Result<OperationHandle<AccountValidation>> {
    validate_account_number(&request.account_number).into_result()?;
    validate_required("Bank", &request.bank_code).into_result()?;
    Ok(dispatcher.call(ops::VALIDATE_ACCOUNT, Some(request)))
}

/// Forget the last name enquiry result.
pub(crate) fn clear_validation(dispatcher: &Dispatcher) {
    dispatcher.store().update(|s| s.clear_operation(ops::VALIDATE_ACCOUNT.op));
}
