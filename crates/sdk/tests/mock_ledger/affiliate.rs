use reflink_sdk::{
    programs::reflink::accounts::{Affiliate, Merchant},
    Error,
};
use solana_sdk::{pubkey::Pubkey, signature::Signature, signer::Signer};

use crate::setup::{init_tracing, MockLedger};

#[tokio::test]
async fn register_affiliate() -> eyre::Result<()> {
    init_tracing();
    let ledger = MockLedger::default();
    let (client, wallet) = ledger.funded_client();

    let (signature, affiliate) = client.submit_register_affiliate().await?;
    assert_ne!(signature, Signature::default());
    assert_eq!(ledger.submissions(), 1);

    let record = client.affiliate(&affiliate).await?;
    assert_eq!(
        record,
        Affiliate {
            authority: wallet.pubkey(),
            total_referrals: 0,
            total_earnings: 0,
        }
    );

    // The record address is not the lookup address.
    assert_ne!(affiliate, client.find_affiliate_address(&wallet.pubkey())?);
    Ok(())
}

#[tokio::test]
async fn affiliate_not_found() -> eyre::Result<()> {
    init_tracing();
    let ledger = MockLedger::default();
    let (client, _) = ledger.funded_client();

    let missing = Pubkey::new_unique();
    assert!(matches!(
        client.affiliate(&missing).await,
        Err(Error::AccountNotFound(address)) if address == missing
    ));

    // Wrong kind.
    let (_, merchant) = client.submit_register_merchant(100).await?;
    assert!(matches!(
        client.affiliate(&merchant).await,
        Err(Error::AccountNotFound(_))
    ));
    assert!(client.merchant(&merchant).await.is_ok());
    assert!(client.account::<Affiliate>(&merchant).await?.is_none());

    // Owned by another program.
    let foreign = Pubkey::new_unique();
    ledger.insert_record(
        &Pubkey::new_unique(),
        foreign,
        &Merchant {
            authority: Pubkey::new_unique(),
            commission_bps: 100,
            is_active: true,
            total_referrals: 0,
        },
    );
    assert!(matches!(
        client.merchant(&foreign).await,
        Err(Error::AccountNotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn custom_program_id() -> eyre::Result<()> {
    init_tracing();
    let program_id = Pubkey::new_unique();
    let ledger = MockLedger::new(program_id);
    let (client, wallet) = ledger.funded_client();
    assert_eq!(*client.program_id(), program_id);

    let (_, affiliate) = client.submit_register_affiliate().await?;
    assert_eq!(client.affiliate(&affiliate).await?.authority, wallet.pubkey());

    let expected =
        Pubkey::find_program_address(&[b"affiliate", wallet.pubkey().as_ref()], &program_id).0;
    assert_eq!(client.find_affiliate_address(&wallet.pubkey())?, expected);
    Ok(())
}
