//! Signing flow driving the key backend and the confirmation UI.

use solana_pubkey::Pubkey;
use solsign_offchain_message::OffchainMessage;
use tracing::{debug, info};

use crate::{
    config::TransactionConfig,
    errors::SigningError,
    layout::{address_n_to_str, encode_pubkey, transaction_pages, Page, SignerInfo},
    patterns::{recognize, TokenAccountHint},
    transaction::Transaction,
};

/// Key derivation and ed25519 signing.
pub trait SigningBackend {
    type PrivateKey;

    fn derive(&self, path: &[u32]) -> Result<(Pubkey, Self::PrivateKey), SigningError>;

    fn sign(&self, key: &Self::PrivateKey, message: &[u8]) -> Result<Vec<u8>, SigningError>;
}

/// User confirmation of a single page.
pub trait Confirm {
    /// Returns `false` when the user rejects the page.
    fn confirm(&mut self, page: &Page) -> bool;
}

/// Parses, confirms and signs a serialized transaction message.
///
/// The buffer is parsed before any key is derived or any page is shown. Pages
/// are shown in order and the first rejection aborts with
/// [`SigningError::Cancelled`].
pub fn sign_transaction<B: SigningBackend, C: Confirm>(
    bytes: &[u8],
    path: &[u32],
    hints: &[TokenAccountHint],
    backend: &B,
    ui: &mut C,
    config: &TransactionConfig,
) -> Result<Vec<u8>, SigningError> {
    let transaction = Transaction::parse_with_config(bytes, config)?;

    let (pubkey, key) = backend.derive(path)?;
    if !transaction.is_signer(&pubkey) {
        debug!(signer = %pubkey, "Derived key does not sign the transaction");
        return Err(SigningError::SignerNotInTransaction);
    }

    let pattern = if transaction.blind_signing() {
        None
    } else {
        recognize(transaction.get_visible_instructions(), &pubkey, hints)
    };
    let signer = SignerInfo {
        path,
        pubkey: &pubkey,
    };
    let pages = transaction_pages(&transaction, pattern.as_ref(), signer);
    confirm_pages(ui, &pages)?;

    let signature = backend.sign(&key, bytes)?;
    info!(
        path = %address_n_to_str(path),
        blind_signing = transaction.blind_signing(),
        "Signed transaction"
    );
    Ok(signature)
}

/// Parses, confirms and signs an off-chain message.
pub fn sign_offchain_message<B: SigningBackend, C: Confirm>(
    bytes: &[u8],
    path: &[u32],
    backend: &B,
    ui: &mut C,
) -> Result<Vec<u8>, SigningError> {
    let message = OffchainMessage::parse(bytes)?;
    let (pubkey, key) = backend.derive(path)?;

    let page = Page::new("Sign message")
        .item("Signer", encode_pubkey(&pubkey))
        .item("Format", message.format.to_string())
        .item("Message", message.message);
    confirm_pages(ui, &[page])?;

    let signature = backend.sign(&key, bytes)?;
    info!(path = %address_n_to_str(path), "Signed off-chain message");
    Ok(signature)
}

fn confirm_pages<C: Confirm>(ui: &mut C, pages: &[Page]) -> Result<(), SigningError> {
    for page in pages {
        if !ui.confirm(page) {
            debug!(title = %page.title, "Rejected by the user");
            return Err(SigningError::Cancelled);
        }
    }
    Ok(())
}
