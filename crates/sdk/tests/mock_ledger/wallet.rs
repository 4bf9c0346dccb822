use std::sync::Arc;

use reflink_sdk::{
    ops::{SolReferralParams, TokenReferralParams},
    Client, ClientOptions, Error,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signer::SignerError};

use crate::setup::{init_tracing, Disconnected, MockLedger};

fn assert_authority_missing<T>(res: reflink_sdk::Result<T>) {
    match res {
        Err(Error::AuthorityMissing(_)) => {}
        Err(err) => panic!("unexpected error: {err}"),
        Ok(_) => panic!("should fail"),
    }
}

#[tokio::test]
async fn missing_wallet_makes_no_request() {
    init_tracing();
    let ledger = MockLedger::default();
    let client = Client::new_with_transport(
        ledger.clone(),
        Arc::new(Disconnected),
        ClientOptions::default(),
    );
    let merchant = Pubkey::new_unique();

    assert_authority_missing(client.payer());
    assert_authority_missing(client.submit_register_affiliate().await);
    assert_authority_missing(client.submit_register_merchant(500).await);
    assert_authority_missing(client.submit_update_merchant_commission(&merchant, 500).await);
    assert_authority_missing(client.submit_toggle_merchant_status(&merchant).await);
    assert_authority_missing(
        client
            .submit_referral_sol(
                &SolReferralParams::builder()
                    .merchant(merchant)
                    .affiliate(Pubkey::new_unique())
                    .merchant_wallet(Pubkey::new_unique())
                    .affiliate_wallet(Pubkey::new_unique())
                    .amount(1_000)
                    .build(),
            )
            .await,
    );
    assert_authority_missing(
        client
            .submit_referral_token(
                &TokenReferralParams::builder()
                    .merchant(merchant)
                    .affiliate(Pubkey::new_unique())
                    .token_mint(Pubkey::new_unique())
                    .merchant_token_account(Pubkey::new_unique())
                    .affiliate_token_account(Pubkey::new_unique())
                    .amount(1_000)
                    .build(),
            )
            .await,
    );

    assert_eq!(ledger.calls(), 0);
}

#[tokio::test]
async fn commission_is_checked_before_wallet() {
    init_tracing();
    let ledger = MockLedger::default();
    let client = Client::new_with_transport(
        ledger.clone(),
        Arc::new(Disconnected),
        ClientOptions::default(),
    );
    assert!(matches!(
        client.submit_register_merchant(10_001).await,
        Err(Error::InvalidCommission(10_001))
    ));
    assert_eq!(ledger.calls(), 0);
}

#[tokio::test]
async fn malformed_transaction_is_not_a_missing_wallet() {
    init_tracing();
    let ledger = MockLedger::default();
    let (client, _payer) = ledger.funded_client();
    let tx = client
        .transaction()
        .accounts(vec![AccountMeta::new(Pubkey::new_unique(), true)])
        .args(vec![0; 8]);

    assert!(matches!(
        client.send(tx).await,
        Err(Error::SolanaUtils(reflink_sdk::solana_utils::Error::Signer(
            SignerError::NotEnoughSigners
        )))
    ));
    assert_eq!(ledger.submissions(), 0);
}
