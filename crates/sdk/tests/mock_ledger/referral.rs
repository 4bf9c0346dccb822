use std::collections::HashSet;

use reflink_sdk::{
    ops::{SolReferralParams, TokenReferralParams},
    utils::{lamports_to_sol, sol_to_lamports},
    Error,
};
use solana_sdk::{pubkey::Pubkey, signer::Signer};

use crate::setup::{init_tracing, MockLedger};

fn sol_params(merchant: Pubkey, affiliate: Pubkey, amount: u64) -> SolReferralParams {
    SolReferralParams::builder()
        .merchant(merchant)
        .affiliate(affiliate)
        .merchant_wallet(Pubkey::new_unique())
        .affiliate_wallet(Pubkey::new_unique())
        .amount(amount)
        .build()
}

#[tokio::test]
async fn sol_referral_then_list_by_affiliate() -> eyre::Result<()> {
    init_tracing();
    let ledger = MockLedger::default();
    let (merchant_client, _) = ledger.funded_client();
    let (affiliate_client, _) = ledger.funded_client();
    let (payer_client, payer) = ledger.funded_client();

    let (_, merchant) = merchant_client.submit_register_merchant(500).await?;
    let (_, affiliate) = affiliate_client.submit_register_affiliate().await?;

    let params = sol_params(merchant, affiliate, 1_000_000_000);
    let (_, referral) = payer_client.submit_referral_sol(&params).await?;

    let referrals = payer_client.referrals_by_affiliate(&affiliate).await?;
    assert_eq!(referrals.len(), 1);
    let (address, record) = &referrals[0];
    assert_eq!(*address, referral);
    assert_eq!(record.amount, 1_000_000_000);
    assert_eq!(record.merchant, merchant);
    assert_eq!(record.affiliate, affiliate);
    assert!(record.is_native());

    assert_eq!(ledger.lamports(&params.affiliate_wallet), 50_000_000);
    assert_eq!(ledger.lamports(&params.merchant_wallet), 950_000_000);
    assert!(ledger.lamports(&payer.pubkey()) <= crate::setup::INITIAL_BALANCE - 1_000_000_000);

    let affiliate_record = payer_client.affiliate(&affiliate).await?;
    assert_eq!(affiliate_record.total_referrals, 1);
    assert_eq!(affiliate_record.total_earnings, 50_000_000);
    assert_eq!(payer_client.merchant(&merchant).await?.total_referrals, 1);
    Ok(())
}

#[tokio::test]
async fn list_by_affiliate_and_merchant() -> eyre::Result<()> {
    init_tracing();
    let ledger = MockLedger::default();
    let (client, _) = ledger.funded_client();

    let (_, merchant_a) = client.submit_register_merchant(1_000).await?;
    let (_, merchant_b) = client.submit_register_merchant(0).await?;
    let (_, affiliate_a) = client.submit_register_affiliate().await?;
    let (_, affiliate_b) = client.submit_register_affiliate().await?;

    let mut by_affiliate_a = HashSet::new();
    let mut by_merchant_b = HashSet::new();
    for (idx, (merchant, affiliate)) in [
        (merchant_a, affiliate_a),
        (merchant_b, affiliate_a),
        (merchant_a, affiliate_b),
        (merchant_b, affiliate_b),
        (merchant_b, affiliate_a),
    ]
    .into_iter()
    .enumerate()
    {
        let amount = 1_000 * (idx as u64 + 1);
        let (_, referral) = client
            .submit_referral_sol(&sol_params(merchant, affiliate, amount))
            .await?;
        if affiliate == affiliate_a {
            by_affiliate_a.insert(referral);
        }
        if merchant == merchant_b {
            by_merchant_b.insert(referral);
        }
    }

    let listed = client
        .referrals_by_affiliate(&affiliate_a)
        .await?
        .into_iter()
        .map(|(address, record)| {
            assert_eq!(record.affiliate, affiliate_a);
            address
        })
        .collect::<HashSet<_>>();
    assert_eq!(listed, by_affiliate_a);

    let listed = client
        .referrals_by_merchant(&merchant_b)
        .await?
        .into_iter()
        .map(|(address, _)| address)
        .collect::<HashSet<_>>();
    assert_eq!(listed, by_merchant_b);

    // No match is not an error.
    assert!(client.referrals_by_affiliate(&Pubkey::new_unique()).await?.is_empty());
    assert!(client.referrals_by_merchant(&affiliate_a).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn token_referral() -> eyre::Result<()> {
    init_tracing();
    let ledger = MockLedger::default();
    let (client, _) = ledger.funded_client();

    let (_, merchant) = client.submit_register_merchant(2_500).await?;
    let (_, affiliate) = client.submit_register_affiliate().await?;

    let mint = Pubkey::new_unique();
    let params = TokenReferralParams::builder()
        .merchant(merchant)
        .affiliate(affiliate)
        .token_mint(mint)
        .merchant_token_account(Pubkey::new_unique())
        .affiliate_token_account(Pubkey::new_unique())
        .amount(4_000_000)
        .build();
    let (_, referral) = client.submit_referral_token(&params).await?;

    let record = client.referral(&referral).await?;
    assert_eq!(record.token_mint, Some(mint));
    assert_eq!(record.amount, 4_000_000);
    assert_eq!(ledger.token_balance(&params.affiliate_token_account), 1_000_000);
    assert_eq!(ledger.token_balance(&params.merchant_token_account), 3_000_000);

    let listed = client.referrals_by_merchant(&merchant).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].0, referral);
    Ok(())
}

#[tokio::test]
async fn rejection_is_surfaced_without_retry() -> eyre::Result<()> {
    init_tracing();
    let ledger = MockLedger::default();
    let (client, _) = ledger.funded_client();

    let (_, merchant) = client.submit_register_merchant(500).await?;
    let (_, affiliate) = client.submit_register_affiliate().await?;
    let submissions = ledger.submissions();

    ledger.reject_next("blockhash not found");
    let err = client
        .submit_referral_sol(&sol_params(merchant, affiliate, 1_000))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::SubmissionRejected(reflink_sdk::solana_utils::Error::Client(_))
    ));
    assert!(err.to_string().contains("blockhash not found"));
    assert_eq!(ledger.submissions(), submissions + 1);
    assert!(client.referrals_by_affiliate(&affiliate).await?.is_empty());

    // Inactive merchants are rejected by the program.
    client.submit_toggle_merchant_status(&merchant).await?;
    let err = client
        .submit_referral_sol(&sol_params(merchant, affiliate, 1_000))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("merchant inactive"));
    Ok(())
}

#[tokio::test]
async fn pay_in_sol_units() -> eyre::Result<()> {
    init_tracing();
    let ledger = MockLedger::default();
    let (client, _) = ledger.funded_client();

    let (_, merchant) = client.submit_register_merchant(10_000).await?;
    let (_, affiliate) = client.submit_register_affiliate().await?;

    let amount = sol_to_lamports(0.25)?;
    let params = sol_params(merchant, affiliate, amount);
    client.submit_referral_sol(&params).await?;
    assert_eq!(lamports_to_sol(ledger.lamports(&params.affiliate_wallet)), 0.25);
    assert_eq!(ledger.lamports(&params.merchant_wallet), 0);

    assert!(matches!(sol_to_lamports(-0.25), Err(Error::InvalidAmount(_))));
    Ok(())
}
