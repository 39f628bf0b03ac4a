//! # Authentication Handlers

use serde_json::Value;
use shared::{AuthData, ChangePasscodeRequest, LoginRequest, PasscodeRequest, RegisterRequest, UpdateProfileRequest, UserProfile};

use crate::core::error::Result;
use crate::operation::{Dispatcher, OperationHandle};
use crate::services::api::catalog::auth as ops;
use crate::utils::validation::{
    validate_email, validate_identifier, validate_passcode, validate_password, validate_phone, validate_required,
};

/// Login with email or phone number and password.
pub(crate) fn login(dispatcher: &Dispatcher, request: LoginRequest) -> Result<OperationHandle<AuthData>> {
    validate_identifier(&request.email_or_phone).into_result()?;
    validate_required("Password", &request.password).into_result()?;

    tracing::info!("Attempting login");
    Ok(dispatcher.call(ops::LOGIN, Some(request)))
}

pub(crate) fn register(dispatcher: &Dispatcher, request: RegisterRequest) -> Result<OperationHandle<AuthData>> {
    validate_required("First name", &request.first_name).into_result()?;
    validate_required("Last name", &request.last_name).into_result()?;
    validate_email(&request.email).into_result()?;
    validate_phone(&request.phone_number).into_result()?;
    validate_password(&request.password).into_result()?;

    tracing::info!("Attempting registration");
    Ok(dispatcher.call(ops::REGISTER, Some(request)))
}

pub(crate) fn get_profile(dispatcher: &Dispatcher) -> OperationHandle<UserProfile> {
    dispatcher.fetch(ops::GET_PROFILE)
}

pub(crate) fn update_profile(
    dispatcher: &Dispatcher,
    request: UpdateProfileRequest,
) -> Result<OperationHandle<UserProfile>> {
    if let Some(phone) = &request.phone_number {
        validate_phone(phone).into_result()?;
    }
    Ok(dispatcher.call(ops::UPDATE_PROFILE, Some(request)))
}

pub(crate) fn set_passcode(dispatcher: &Dispatcher, request: PasscodeRequest) -> Result<OperationHandle<Value>> {
    validate_passcode(&request.passcode).into_result()?;
    Ok(dispatcher.call(ops::SET_PASSCODE, Some(request)))
}

/// A successful change invalidates the session token.
pub(crate) fn change_passcode(
    dispatcher: &Dispatcher,
    request: ChangePasscodeRequest,
) -> Result<OperationHandle<Value>> {
    validate_passcode(&request.current_passcode).into_result()?;
    validate_passcode(&request.new_passcode).into_result()?;
    Ok(dispatcher.call(ops::CHANGE_PASSCODE, Some(request)))
}

pub(crate) fn verify_passcode(dispatcher: &Dispatcher, request: PasscodeRequest) -> Result<OperationHandle<Value>> {
    validate_passcode(&request.passcode).into_result()?;
    Ok(dispatcher.call(ops::VERIFY_PASSCODE, Some(request)))
}
