//! The account-existence gate on card and loan creation, and the absence of
//! cascading when an account is deleted out from under its dependents.

mod common;

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use bank_services::discovery::StaticRegistry;
use bank_services::error::AppError;
use bank_services::models::card::CreateCardRequest;
use bank_services::models::loan::CreateLoanRequest;
use bank_services::repository::CardRepository;

use common::{
    MemoryAccounts, MemoryCards, MemoryLoans, ScriptedTransport, account_service, card_service,
    full_registry, loan_service, seed_account,
};

fn card_request(account_id: Uuid) -> CreateCardRequest {
    CreateCardRequest {
        card_number: "4000 1234 5678 9010".to_string(),
        card_type: "DEBIT".to_string(),
        account_id,
    }
}

#[tokio::test]
async fn card_create_rejected_when_account_missing() {
    let repo = Arc::new(MemoryCards::default());
    // The account service answers 404 for every probe
    let transport = Arc::new(ScriptedTransport::new().route("/accounts", 404, ""));
    let service = card_service(repo.clone(), full_registry(), transport);

    let account_id = Uuid::new_v4();
    let err = service.create(card_request(account_id)).await.unwrap_err();
    assert!(matches!(err, AppError::AccountNotFound));
    assert!(repo.find_all().await.unwrap().is_empty());

    // Retrying changes nothing
    let err = service.create(card_request(account_id)).await.unwrap_err();
    assert!(matches!(err, AppError::AccountNotFound));
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn card_create_rejected_when_account_service_unreachable() {
    let repo = Arc::new(MemoryCards::default());
    // Nothing scripted: every request fails like a dead peer
    let transport = Arc::new(ScriptedTransport::new());
    let service = card_service(repo.clone(), full_registry(), transport);

    let err = service
        .create(card_request(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::PeerUnavailable(_)));
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn card_create_rejected_when_no_instances_registered() {
    let repo = Arc::new(MemoryCards::default());
    // The probe would succeed, but resolution comes up empty first
    let transport = Arc::new(ScriptedTransport::new().route("/accounts", 200, "{}"));
    let service = card_service(repo.clone(), StaticRegistry::new(), transport);

    let err = service
        .create(card_request(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::PeerUnavailable(_)));
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn card_create_persists_when_account_exists() {
    let repo = Arc::new(MemoryCards::default());
    let account_id = Uuid::new_v4();
    let probe_body = json!({"id": account_id}).to_string();
    let transport = Arc::new(ScriptedTransport::new().route("/accounts", 200, probe_body));
    let service = card_service(repo, full_registry(), transport);

    let card = service.create(card_request(account_id)).await.unwrap();

    let fetched = service.get(card.id).await.unwrap();
    assert_eq!(fetched.card_number, "4000 1234 5678 9010");
    assert_eq!(fetched.account_id, account_id);

    let by_account = service.by_account(account_id).await.unwrap();
    assert_eq!(by_account.len(), 1);
}

#[tokio::test]
async fn card_create_rejects_blank_card_number() {
    let repo = Arc::new(MemoryCards::default());
    let transport = Arc::new(ScriptedTransport::new().route("/accounts", 200, "{}"));
    let service = card_service(repo.clone(), full_registry(), transport);

    let err = service
        .create(CreateCardRequest {
            card_number: "".to_string(),
            card_type: "DEBIT".to_string(),
            account_id: Uuid::new_v4(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidRequest(_)));
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn loan_create_follows_the_same_gate() {
    let repo = Arc::new(MemoryLoans::default());
    let account_id = Uuid::new_v4();

    // Missing account blocks the write
    let missing = Arc::new(ScriptedTransport::new().route("/accounts", 404, ""));
    let service = loan_service(repo.clone(), full_registry(), missing);
    let err = service
        .create(CreateLoanRequest {
            account_id,
            amount_cents: 250_000,
            loan_type: "PERSONAL".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AccountNotFound));

    // Existing account lets it through
    let exists = Arc::new(ScriptedTransport::new().route("/accounts", 200, "{}"));
    let service = loan_service(repo.clone(), full_registry(), exists);
    let loan = service
        .create(CreateLoanRequest {
            account_id,
            amount_cents: 250_000,
            loan_type: "PERSONAL".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(service.get(loan.id).await.unwrap().amount_cents, 250_000);

    // Amount validation runs before the probe
    let err = service
        .create(CreateLoanRequest {
            account_id,
            amount_cents: 0,
            loan_type: "PERSONAL".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidRequest(_)));
}

#[tokio::test]
async fn deleting_an_account_leaves_dependent_cards_in_place() {
    let accounts_repo = Arc::new(MemoryAccounts::default());
    let cards_repo = Arc::new(MemoryCards::default());
    let account = seed_account(&accounts_repo, "Ada Lovelace", "ada@example.com", 0).await;

    let probe = Arc::new(ScriptedTransport::new().route("/accounts", 200, "{}"));
    let cards = card_service(cards_repo.clone(), full_registry(), probe);
    let card = cards.create(card_request(account.id)).await.unwrap();

    // The account service deletes without consulting its dependents
    let accounts = account_service(
        accounts_repo,
        full_registry(),
        Arc::new(ScriptedTransport::new()),
    );
    accounts.delete(account.id).await.unwrap();

    // The card survives its owner
    assert_eq!(cards.get(card.id).await.unwrap().account_id, account.id);
    assert_eq!(cards.by_account(account.id).await.unwrap().len(), 1);
}
