use sha2::{Digest, Sha256};
use solana_pubkey::Pubkey;
use solsign_instruction_decoder::{
    programs::ASSOCIATED_TOKEN_ACCOUNT_PROGRAM_ID,
    views::{AssociatedTokenAccountCreate, TokenTransferChecked},
    StructuredInstruction,
};
use tracing::debug;

use super::{same_account, TokenTransfer};

const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Host supplied owner of a token account.
///
/// Trusted only after the token account is re-derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccountHint {
    pub base_address: Pubkey,
    pub token_program: Pubkey,
    pub token_mint: Pubkey,
    pub token_account: Pubkey,
}

impl TokenAccountHint {
    pub fn verify(&self) -> bool {
        is_associated_token_account(
            &self.token_account,
            &self.base_address,
            &self.token_program,
            &self.token_mint,
        )
    }
}

/// `sha256(seeds.. || program_id || "ProgramDerivedAddress")`.
///
/// Does not check that the result is off the ed25519 curve.
pub fn create_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Pubkey {
    let mut hasher = Sha256::default();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update(program_id.as_ref());
    hasher.update(PDA_MARKER);
    Pubkey::new_from_array(hasher.finalize().into())
}

/// Whether `token_account` is the associated token account of `wallet` for
/// `token_mint`, trying every bump seed from 255 down to 0.
pub fn is_associated_token_account(
    token_account: &Pubkey,
    wallet: &Pubkey,
    token_program: &Pubkey,
    token_mint: &Pubkey,
) -> bool {
    (0..=u8::MAX).rev().any(|bump| {
        let seeds: [&[u8]; 4] = [
            wallet.as_ref(),
            token_program.as_ref(),
            token_mint.as_ref(),
            &[bump],
        ];
        create_program_address(&seeds, &ASSOCIATED_TOKEN_ACCOUNT_PROGRAM_ID) == *token_account
    })
}

/// An optional associated token account creation followed by transfers of
/// one mint to one destination, all signed by the same owner.
pub(super) fn token_transfer(
    instructions: &[StructuredInstruction],
    signer: &Pubkey,
    hints: &[TokenAccountHint],
) -> Option<TokenTransfer> {
    let (create, transfers) = match instructions.split_first() {
        Some((first, rest)) => match first.as_associated_token_account_create() {
            Some(create) => (Some(create), rest),
            None => (None, instructions),
        },
        None => return None,
    };
    if transfers.is_empty() {
        return None;
    }
    let transfers = transfers
        .iter()
        .map(StructuredInstruction::as_token_transfer_checked)
        .collect::<Option<Vec<_>>>()?;
    let first = transfers.first()?;

    for transfer in &transfers[1..] {
        if transfer.token_program != first.token_program
            || !same_account(&transfer.token_mint, &first.token_mint)
            || !same_account(&transfer.destination_account, &first.destination_account)
            || !same_account(&transfer.owner, &first.owner)
        {
            debug!("Token transfers disagree on program, mint, destination or owner");
            return None;
        }
    }
    if !first.owner.is(signer) {
        debug!("Token transfer owner is not the signer");
        return None;
    }

    let mut amount = 0u64;
    for transfer in &transfers {
        amount = amount.checked_add(transfer.amount)?;
    }

    let base_owner = match &create {
        Some(create) => created_account_owner(create, first)?,
        None => hinted_owner(first, hints),
    };

    Some(TokenTransfer {
        token_program: first.token_program,
        token_mint: first.token_mint,
        token_account: first.destination_account,
        base_owner,
        amount,
        decimals: first.decimals,
        creates_token_account: create.is_some(),
    })
}

/// Checks a creation against the transfers. The outer `None` rejects the
/// pattern, the inner one means the owner is not known.
fn created_account_owner(
    create: &AssociatedTokenAccountCreate,
    transfer: &TokenTransferChecked,
) -> Option<Option<Pubkey>> {
    let destination = &transfer.destination_account;
    if !create.token_program.is(&transfer.token_program)
        || !same_account(&create.token_mint, &transfer.token_mint)
        || !same_account(&create.associated_token_account, destination)
    {
        debug!("Token account creation does not match the transfers");
        return None;
    }
    let (Some(wallet), Some(mint), Some(token_account)) = (
        create.wallet_address.pubkey(),
        transfer.token_mint.pubkey(),
        transfer.destination_account.pubkey(),
    ) else {
        return Some(None);
    };
    if !is_associated_token_account(token_account, wallet, &transfer.token_program, mint) {
        debug!(%token_account, %wallet, "Created token account is not derived from the wallet");
        return None;
    }
    Some(Some(*wallet))
}

/// Owner of the destination from the first matching hint that verifies.
fn hinted_owner(transfer: &TokenTransferChecked, hints: &[TokenAccountHint]) -> Option<Pubkey> {
    let mint = transfer.token_mint.pubkey()?;
    let token_account = transfer.destination_account.pubkey()?;
    hints
        .iter()
        .filter(|hint| {
            hint.token_account == *token_account
                && hint.token_mint == *mint
                && hint.token_program == transfer.token_program
        })
        .find(|hint| {
            let verified = hint.verify();
            if !verified {
                debug!(base_address = %hint.base_address, "Ignoring unverified token account hint");
            }
            verified
        })
        .map(|hint| hint.base_address)
}
