use std::path::PathBuf;

use reflink_sdk::solana_utils::{
    signer::{local_signer, LocalSignerRef},
    solana_sdk::signature::read_keypair_file,
};
use url::Url;

/// Parse url or path.
fn parse_url_or_path(source: &str) -> eyre::Result<Url> {
    let url = match Url::parse(source) {
        Ok(url) => url,
        Err(_) => {
            let path = shellexpand::tilde(source);
            let path: PathBuf = path.parse()?;
            let path = std::path::absolute(path)?;
            Url::from_file_path(&path)
                .map_err(|_| eyre::eyre!("invalid wallet path: {}", path.display()))?
        }
    };

    Ok(url)
}

/// Load signer from url.
///
/// Only the `file` scheme is supported.
pub fn signer_from_source(source: &str) -> eyre::Result<LocalSignerRef> {
    let url = parse_url_or_path(source)?;

    match url.scheme() {
        "file" => {
            let keypair = read_keypair_file(url.path()).map_err(|err| eyre::eyre!("{err}"))?;
            Ok(local_signer(keypair))
        }
        scheme => Err(eyre::eyre!("unsupported scheme: {scheme}")),
    }
}
