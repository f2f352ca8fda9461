//! Typed views of the instructions that transaction patterns inspect.
//!
//! Each view exists only for its own [`InstructionKind`] and copies out the
//! fields and accounts by role.

use solana_pubkey::Pubkey;
use solsign_account_checks::Account;

use crate::{
    core::StructuredInstruction,
    kind::{
        AssociatedTokenAccountInstruction, ComputeBudgetInstruction, InstructionKind,
        StakeInstruction, SystemInstruction, TokenInstruction,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemTransfer {
    pub funding_account: Account,
    pub recipient_account: Account,
    pub lamports: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemCreateAccount {
    pub funding_account: Account,
    pub new_account: Account,
    pub lamports: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemCreateAccountWithSeed {
    pub funding_account: Account,
    pub created_account: Account,
    pub base_account: Option<Account>,
    pub base: Pubkey,
    pub seed: String,
    pub lamports: u64,
    pub space: u64,
    pub owner: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeInitialize {
    pub uninitialized_stake_account: Account,
    pub staker: Pubkey,
    pub withdrawer: Pubkey,
    pub unix_timestamp: i64,
    pub epoch: u64,
    pub custodian: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeDelegate {
    pub initialized_stake_account: Account,
    pub vote_account: Account,
    pub stake_authority: Account,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeDeactivate {
    pub delegated_stake_account: Account,
    pub stake_authority: Account,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeWithdraw {
    pub stake_account: Account,
    pub recipient_account: Account,
    pub withdrawal_authority: Account,
    pub lamports: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTransferChecked {
    pub token_program: Pubkey,
    pub source_account: Account,
    pub token_mint: Account,
    pub destination_account: Account,
    pub owner: Account,
    pub amount: u64,
    pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociatedTokenAccountCreate {
    pub funding_account: Account,
    pub associated_token_account: Account,
    pub wallet_address: Account,
    pub token_mint: Account,
    pub token_program: Account,
    pub idempotent: bool,
}

impl StructuredInstruction {
    fn required_account(&self, name: &str) -> Option<Account> {
        self.account(name).copied()
    }

    pub fn as_system_transfer(&self) -> Option<SystemTransfer> {
        match self.kind {
            InstructionKind::System(SystemInstruction::Transfer) => Some(SystemTransfer {
                funding_account: self.required_account("funding_account")?,
                recipient_account: self.required_account("recipient_account")?,
                lamports: self.u64_field("lamports")?,
            }),
            _ => None,
        }
    }

    pub fn as_system_create_account(&self) -> Option<SystemCreateAccount> {
        match self.kind {
            InstructionKind::System(SystemInstruction::CreateAccount) => {
                Some(SystemCreateAccount {
                    funding_account: self.required_account("funding_account")?,
                    new_account: self.required_account("new_account")?,
                    lamports: self.u64_field("lamports")?,
                })
            }
            _ => None,
        }
    }

    pub fn as_system_create_account_with_seed(&self) -> Option<SystemCreateAccountWithSeed> {
        match self.kind {
            InstructionKind::System(SystemInstruction::CreateAccountWithSeed) => {
                Some(SystemCreateAccountWithSeed {
                    funding_account: self.required_account("funding_account")?,
                    created_account: self.required_account("created_account")?,
                    base_account: self.required_account("base_account"),
                    base: *self.pubkey_field("base")?,
                    seed: self.field("seed")?.as_str()?.to_string(),
                    lamports: self.u64_field("lamports")?,
                    space: self.u64_field("space")?,
                    owner: *self.pubkey_field("owner")?,
                })
            }
            _ => None,
        }
    }

    pub fn as_stake_initialize(&self) -> Option<StakeInitialize> {
        match self.kind {
            InstructionKind::Stake(StakeInstruction::Initialize) => Some(StakeInitialize {
                uninitialized_stake_account: self.required_account("uninitialized_stake_account")?,
                staker: *self.pubkey_field("staker")?,
                withdrawer: *self.pubkey_field("withdrawer")?,
                unix_timestamp: self.field("unix_timestamp")?.as_i64()?,
                epoch: self.u64_field("epoch")?,
                custodian: *self.pubkey_field("custodian")?,
            }),
            _ => None,
        }
    }

    pub fn as_stake_delegate(&self) -> Option<StakeDelegate> {
        match self.kind {
            InstructionKind::Stake(StakeInstruction::DelegateStake) => Some(StakeDelegate {
                initialized_stake_account: self.required_account("initialized_stake_account")?,
                vote_account: self.required_account("vote_account")?,
                stake_authority: self.required_account("stake_authority")?,
            }),
            _ => None,
        }
    }

    pub fn as_stake_deactivate(&self) -> Option<StakeDeactivate> {
        match self.kind {
            InstructionKind::Stake(StakeInstruction::Deactivate) => Some(StakeDeactivate {
                delegated_stake_account: self.required_account("delegated_stake_account")?,
                stake_authority: self.required_account("stake_authority")?,
            }),
            _ => None,
        }
    }

    pub fn as_stake_withdraw(&self) -> Option<StakeWithdraw> {
        match self.kind {
            InstructionKind::Stake(StakeInstruction::Withdraw) => Some(StakeWithdraw {
                stake_account: self.required_account("stake_account")?,
                recipient_account: self.required_account("recipient_account")?,
                withdrawal_authority: self.required_account("withdrawal_authority")?,
                lamports: self.u64_field("lamports")?,
            }),
            _ => None,
        }
    }

    pub fn as_token_transfer_checked(&self) -> Option<TokenTransferChecked> {
        match self.kind {
            InstructionKind::Token(TokenInstruction::TransferChecked) => {
                Some(TokenTransferChecked {
                    token_program: self.program_id,
                    source_account: self.required_account("source_account")?,
                    token_mint: self.required_account("token_mint")?,
                    destination_account: self.required_account("destination_account")?,
                    owner: self.required_account("owner")?,
                    amount: self.u64_field("amount")?,
                    decimals: u8::try_from(self.u64_field("decimals")?).ok()?,
                })
            }
            _ => None,
        }
    }

    pub fn as_associated_token_account_create(&self) -> Option<AssociatedTokenAccountCreate> {
        let idempotent = match self.kind {
            InstructionKind::AssociatedTokenAccount(AssociatedTokenAccountInstruction::Create) => {
                false
            }
            InstructionKind::AssociatedTokenAccount(
                AssociatedTokenAccountInstruction::CreateIdempotent,
            ) => true,
            _ => return None,
        };
        Some(AssociatedTokenAccountCreate {
            funding_account: self.required_account("funding_account")?,
            associated_token_account: self.required_account("associated_token_account")?,
            wallet_address: self.required_account("wallet_address")?,
            token_mint: self.required_account("token_mint")?,
            token_program: self.required_account("spl_token")?,
            idempotent,
        })
    }

    /// Units requested by `SetComputeUnitLimit`.
    pub fn compute_unit_limit(&self) -> Option<u64> {
        match self.kind {
            InstructionKind::ComputeBudget(ComputeBudgetInstruction::SetComputeUnitLimit) => {
                self.u64_field("units")
            }
            _ => None,
        }
    }

    /// Micro-lamports per compute unit set by `SetComputeUnitPrice`.
    pub fn compute_unit_price(&self) -> Option<u64> {
        match self.kind {
            InstructionKind::ComputeBudget(ComputeBudgetInstruction::SetComputeUnitPrice) => {
                self.u64_field("lamports")
            }
            _ => None,
        }
    }
}
