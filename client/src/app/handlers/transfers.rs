//! # Transfer and Statement Handlers

use serde_json::Value;
use shared::{mask, StatementRequest, TransactionReceipt, TransferRequest};

use crate::core::error::{AppError, Result};
use crate::operation::{Dispatcher, OperationHandle};
use crate::services::api::catalog::{statements, transfers as ops};
use crate::utils::validation::{validate_account_number, validate_amount, validate_passcode, validate_required};

pub(crate) fn transfer(dispatcher: &Dispatcher, request: TransferRequest) -> Result<OperationHandle<TransactionReceipt>> {
    validate_account_number(&request.account_number).into_result()?;
    validate_required("Bank", &request.bank_code).into_result()?;
    validate_amount(request.amount).into_result()?;
    validate_passcode(&request.passcode).into_result()?;

    tracing::info!(
        account = %mask(&request.account_number),
        amount = request.amount,
        "Submitting transfer"
    );
    Ok(dispatcher.call(ops::TRANSFER, Some(request)))
}

pub(crate) fn get_transfers(dispatcher: &Dispatcher) -> OperationHandle<Vec<TransactionReceipt>> {
    dispatcher.fetch(ops::GET_TRANSFERS)
}

pub(crate) fn get_statement(dispatcher: &Dispatcher, request: StatementRequest) -> Result<OperationHandle<Value>> {
    if request.start_date > request.end_date {
        return Err(AppError::Validation("Start date must be on or before end date".to_string()));
    }
    Ok(dispatcher.call(statements::GET_STATEMENT, Some(request)))
}
