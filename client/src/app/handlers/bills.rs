//! # Bill Payment Handlers

use serde_json::Value;
use shared::{CustomerValidation, PayBillRequest, TransactionReceipt, ValidateCustomerRequest};

use crate::core::error::Result;
use crate::operation::{Dispatcher, OperationHandle};
use crate::services::api::catalog::bills as ops;
use crate::utils::validation::{validate_amount, validate_passcode, validate_required};

pub(crate) fn get_billers(dispatcher: &Dispatcher) -> OperationHandle<Vec<Value>> {
    dispatcher.fetch(ops::GET_BILLERS)
}

pub(crate) fn validate_customer(
    dispatcher: &Dispatcher,
    request: ValidateCustomerRequest,
) -> Result<OperationHandle<CustomerValidation>> {
    validate_required("Biller", &request.biller_id).into_result()?;
    validate_required("Customer ID", &request.customer_id).into_result()?;
    Ok(dispatcher.call(ops::VALIDATE_CUSTOMER, Some(request)))
}

pub(crate) fn pay_bill(dispatcher: &Dispatcher, request: PayBillRequest) -> Result<OperationHandle<TransactionReceipt>> {
    validate_required("Biller", &request.biller_id).into_result()?;
    validate_required("Customer ID", &request.customer_id).into_result()?;
    validate_amount(request.amount).into_result()?;
    validate_passcode(&request.passcode).into_result()?;

    tracing::info!(biller_id = %request.biller_id, amount = request.amount, "Paying bill");
    Ok(dispatcher.call(ops::PAY_BILL, Some(request)))
}

pub(crate) fn clear_validation(dispatcher: &Dispatcher) {
    dispatcher.store().update(|s| s.clear_operation(ops::VALIDATE_CUSTOMER.op));
}
