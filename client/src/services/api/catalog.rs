//! # Endpoint Catalog
//!
//! Every backend operation the app runs, grouped by domain. Paths are relative to
//! the configured base URL.

use crate::core::http::HttpMethod::{Delete, Get, Post, Put};
use crate::operation::Endpoint;
use crate::store::Domain;

pub mod auth {
    use super::*;

    pub const LOGIN: Endpoint = Endpoint::new(Domain::Auth, "login", Post, "/auth/login").public();
    pub const REGISTER: Endpoint = Endpoint::new(Domain::Auth, "register", Post, "/auth/register").public();
    pub const GET_PROFILE: Endpoint = Endpoint::new(Domain::Auth, "get_profile", Get, "/auth/profile");
    pub const UPDATE_PROFILE: Endpoint = Endpoint::new(Domain::Auth, "update_profile", Put, "/auth/profile");
    pub const SET_PASSCODE: Endpoint = Endpoint::new(Domain::Auth, "set_passcode", Post, "/auth/passcode");
    pub const CHANGE_PASSCODE: Endpoint = Endpoint::new(Domain::Auth, "change_passcode", Put, "/auth/passcode");
    pub const VERIFY_PASSCODE: Endpoint =
        Endpoint::new(Domain::Auth, "verify_passcode", Post, "/auth/passcode/verify");
}

pub mod accounts {
    use super::*;

    pub const GET_ACCOUNTS: Endpoint = Endpoint::new(Domain::Accounts, "get_accounts", Get, "/accounts");
    pub const GET_BALANCE: Endpoint = Endpoint::new(Domain::Accounts, "get_balance", Get, "/accounts/balance");
    pub const VALIDATE_ACCOUNT: Endpoint =
        Endpoint::new(Domain::Accounts, "validate_account", Post, "/accounts/validate");
}

pub mod bills {
    use super::*;

    pub const GET_BILLERS: Endpoint = Endpoint::new(Domain::Bills, "get_billers", Get, "/bills/billers");
    pub const VALIDATE_CUSTOMER: Endpoint =
        Endpoint::new(Domain::Bills, "validate_customer", Post, "/bills/validate");
    pub const PAY_BILL: Endpoint = Endpoint::new(Domain::Bills, "pay_bill", Post, "/bills/pay");
}

pub mod cards {
    use super::*;

    pub const GET_CARDS: Endpoint = Endpoint::new(Domain::Cards, "get_cards", Get, "/cards");
    pub const REQUEST_CARD: Endpoint = Endpoint::new(Domain::Cards, "request_card", Post, "/cards/request");
    pub const FREEZE_CARD: Endpoint = Endpoint::new(Domain::Cards, "freeze_card", Put, "/cards/freeze");
}

pub mod virtual_cards {
    use super::*;

    pub const GET_VIRTUAL_CARDS: Endpoint =
        Endpoint::new(Domain::VirtualCards, "get_virtual_cards", Get, "/virtual-cards");
    pub const CREATE_VIRTUAL_CARD: Endpoint =
        Endpoint::new(Domain::VirtualCards, "create_virtual_card", Post, "/virtual-cards");
    pub const FUND_VIRTUAL_CARD: Endpoint =
        Endpoint::new(Domain::VirtualCards, "fund_virtual_card", Post, "/virtual-cards/fund");
}

pub mod gold {
    use super::*;

    pub const GET_GOLD_PRICE: Endpoint = Endpoint::new(Domain::Gold, "get_gold_price", Get, "/gold/price");
    pub const BUY_GOLD: Endpoint = Endpoint::new(Domain::Gold, "buy_gold", Post, "/gold/buy");
    pub const SELL_GOLD: Endpoint = Endpoint::new(Domain::Gold, "sell_gold", Post, "/gold/sell");
}

pub mod kyc {
    use super::*;

    pub const GET_KYC_STATUS: Endpoint = Endpoint::new(Domain::Kyc, "get_kyc_status", Get, "/kyc/status");
    pub const SUBMIT_BVN: Endpoint = Endpoint::new(Domain::Kyc, "submit_bvn", Post, "/kyc/bvn");
    pub const SUBMIT_DOCUMENT: Endpoint = Endpoint::new(Domain::Kyc, "submit_document", Post, "/kyc/document");
}

pub mod loans {
    use super::*;

    pub const GET_LOANS: Endpoint = Endpoint::new(Domain::Loans, "get_loans", Get, "/loans");
    pub const CHECK_ELIGIBILITY: Endpoint =
        Endpoint::new(Domain::Loans, "check_eligibility", Post, "/loans/eligibility");
    pub const APPLY_LOAN: Endpoint = Endpoint::new(Domain::Loans, "apply_loan", Post, "/loans/apply");
    pub const REPAY_LOAN: Endpoint = Endpoint::new(Domain::Loans, "repay_loan", Post, "/loans/repay");
}

pub mod transfers {
    use super::*;

    pub const TRANSFER: Endpoint = Endpoint::new(Domain::Transfers, "transfer", Post, "/transfers");
    pub const GET_TRANSFERS: Endpoint = Endpoint::new(Domain::Transfers, "get_transfers", Get, "/transfers");
}

pub mod statements {
    use super::*;

    pub const GET_STATEMENT: Endpoint = Endpoint::new(Domain::Statements, "get_statement", Post, "/statements");
}

pub mod beneficiaries {
    use super::*;

    pub const GET_BENEFICIARIES: Endpoint =
        Endpoint::new(Domain::Beneficiaries, "get_beneficiaries", Get, "/beneficiaries");
    pub const ADD_BENEFICIARY: Endpoint =
        Endpoint::new(Domain::Beneficiaries, "add_beneficiary", Post, "/beneficiaries");
    pub const REMOVE_BENEFICIARY: Endpoint =
        Endpoint::new(Domain::Beneficiaries, "remove_beneficiary", Delete, "/beneficiaries");
}

/// Every endpoint in the catalog.
pub fn all() -> Vec<Endpoint> {
    vec![
        auth::LOGIN,
        auth::REGISTER,
        auth::GET_PROFILE,
        auth::UPDATE_PROFILE,
        auth::SET_PASSCODE,
        auth::CHANGE_PASSCODE,
        auth::VERIFY_PASSCODE,
        accounts::GET_ACCOUNTS,
        accounts::GET_BALANCE,
        accounts::VALIDATE_ACCOUNT,
        bills::GET_BILLERS,
        bills::VALIDATE_CUSTOMER,
        bills::PAY_BILL,
        cards::GET_CARDS,
        cards::REQUEST_CARD,
        cards::FREEZE_CARD,
        virtual_cards::GET_VIRTUAL_CARDS,
        virtual_cards::CREATE_VIRTUAL_CARD,
        virtual_cards::FUND_VIRTUAL_CARD,
        gold::GET_GOLD_PRICE,
        gold::BUY_GOLD,
        gold::SELL_GOLD,
        kyc::GET_KYC_STATUS,
        kyc::SUBMIT_BVN,
        kyc::SUBMIT_DOCUMENT,
        loans::GET_LOANS,
        loans::CHECK_ELIGIBILITY,
        loans::APPLY_LOAN,
        loans::REPAY_LOAN,
        transfers::TRANSFER,
        transfers::GET_TRANSFERS,
        statements::GET_STATEMENT,
        beneficiaries::GET_BENEFICIARIES,
        beneficiaries::ADD_BENEFICIARY,
        beneficiaries::REMOVE_BENEFICIARY,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_operation_names_are_unique() {
        let endpoints = all();
        let ops: HashSet<_> = endpoints.iter().map(|e| e.op).collect();
        assert_eq!(ops.len(), endpoints.len());
    }

    #[test]
    fn test_every_domain_has_endpoints() {
        let endpoints = all();
        for domain in Domain::all() {
            assert!(endpoints.iter().any(|e| e.op.domain == *domain), "no endpoints for {}", domain);
        }
    }

    #[test]
    fn test_only_login_and_register_are_public() {
        let public: Vec<_> = all().into_iter().filter(|e| !e.authenticated).map(|e| e.op.name).collect();
        assert_eq!(public, vec!["login", "register"]);
    }

    #[test]
    fn test_paths_are_rooted() {
        assert!(all().iter().all(|e| e.path.starts_with('/')));
    }
}
