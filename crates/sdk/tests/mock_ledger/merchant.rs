use proptest::prelude::*;
use reflink_sdk::{ops::MerchantOps, Error};
use solana_sdk::pubkey::Pubkey;

use crate::setup::{init_tracing, MockLedger};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn out_of_bounds_commission_never_reaches_the_ledger(commission_bps in 10_001u16..=u16::MAX) {
        let ledger = MockLedger::default();
        let (client, _) = ledger.funded_client();
        let rt = runtime();

        let err = rt.block_on(client.submit_register_merchant(commission_bps)).unwrap_err();
        prop_assert!(matches!(err, Error::InvalidCommission(bps) if bps == commission_bps));
        prop_assert!(err.is_validation());

        let merchant = Pubkey::new_unique();
        let err = rt
            .block_on(client.submit_update_merchant_commission(&merchant, commission_bps))
            .unwrap_err();
        prop_assert!(matches!(err, Error::InvalidCommission(_)));

        prop_assert_eq!(ledger.calls(), 0);
    }

    #[test]
    fn valid_commission_is_submitted(commission_bps in 0u16..=10_000) {
        let ledger = MockLedger::default();
        let (client, _) = ledger.funded_client();
        let rt = runtime();

        let (_, merchant) = rt.block_on(client.submit_register_merchant(commission_bps)).unwrap();
        prop_assert_eq!(ledger.submissions(), 1);
        let record = rt.block_on(client.merchant(&merchant)).unwrap();
        prop_assert_eq!(record.commission_bps, commission_bps);
        prop_assert!(record.is_active);

        let new_commission_bps = 10_000 - commission_bps;
        rt.block_on(client.submit_update_merchant_commission(&merchant, new_commission_bps))
            .unwrap();
        prop_assert_eq!(ledger.submissions(), 2);
        let record = rt.block_on(client.merchant(&merchant)).unwrap();
        prop_assert_eq!(record.commission_bps, new_commission_bps);
    }
}

#[tokio::test]
async fn toggle_merchant_status() -> eyre::Result<()> {
    init_tracing();
    let ledger = MockLedger::default();
    let (client, _) = ledger.funded_client();

    let (_, merchant) = client.submit_register_merchant(500).await?;
    client.submit_toggle_merchant_status(&merchant).await?;
    let record = client.merchant(&merchant).await?;
    assert!(!record.is_active);
    assert_eq!(record.commission_bps, 500);

    client.submit_toggle_merchant_status(&merchant).await?;
    assert!(client.merchant(&merchant).await?.is_active);
    Ok(())
}

#[tokio::test]
async fn only_authority_can_update() -> eyre::Result<()> {
    init_tracing();
    let ledger = MockLedger::default();
    let (owner, _) = ledger.funded_client();
    let (other, _) = ledger.funded_client();

    let (_, merchant) = owner.submit_register_merchant(500).await?;

    let err = other
        .submit_update_merchant_commission(&merchant, 9_000)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SubmissionRejected(_)));
    assert!(err.to_string().contains("unauthorized"));

    let err = other
        .submit_toggle_merchant_status(&merchant)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SubmissionRejected(_)));

    let record = owner.merchant(&merchant).await?;
    assert_eq!(record.commission_bps, 500);
    assert!(record.is_active);
    Ok(())
}

#[tokio::test]
async fn builder_then_send() -> eyre::Result<()> {
    init_tracing();
    let ledger = MockLedger::default();
    let (client, _) = ledger.funded_client();

    let tx = client.register_merchant(1_000)?;
    let expected = *tx.get_output();
    let (_, merchant) = client.send_with_output(tx).await?;
    assert_eq!(merchant, expected);

    let tx = client.toggle_merchant_status(&merchant)?;
    client.send(tx).await?;
    assert!(!client.merchant(&merchant).await?.is_active);
    Ok(())
}
