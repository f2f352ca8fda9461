//! Closed classification of every instruction in the registry.
//!
//! Checks such as "is this a stake withdraw" are a `match` on
//! [`InstructionKind`], never a comparison of program id strings.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    System(SystemInstruction),
    Stake(StakeInstruction),
    ComputeBudget(ComputeBudgetInstruction),
    /// Shared by the Token and Token-2022 programs.
    Token(TokenInstruction),
    AssociatedTokenAccount(AssociatedTokenAccountInstruction),
    /// Memo and Memo-legacy.
    Memo,
    /// Unknown program, or unknown instruction of a known program.
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemInstruction {
    CreateAccount,
    Assign,
    Transfer,
    CreateAccountWithSeed,
    AdvanceNonceAccount,
    WithdrawNonceAccount,
    InitializeNonceAccount,
    AuthorizeNonceAccount,
    Allocate,
    AllocateWithSeed,
    AssignWithSeed,
    TransferWithSeed,
    UpgradeNonceAccount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StakeInstruction {
    Initialize,
    Authorize,
    DelegateStake,
    Split,
    Withdraw,
    Deactivate,
    SetLockup,
    Merge,
    AuthorizeWithSeed,
    InitializeChecked,
    AuthorizeChecked,
    AuthorizeCheckedWithSeed,
    SetLockupChecked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComputeBudgetInstruction {
    RequestHeapFrame,
    SetComputeUnitLimit,
    SetComputeUnitPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenInstruction {
    InitializeAccount,
    InitializeMultisig,
    Transfer,
    Approve,
    Revoke,
    SetAuthority,
    MintTo,
    Burn,
    CloseAccount,
    FreezeAccount,
    ThawAccount,
    TransferChecked,
    ApproveChecked,
    MintToChecked,
    BurnChecked,
    InitializeAccount2,
    SyncNative,
    InitializeAccount3,
    InitializeImmutableOwner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociatedTokenAccountInstruction {
    Create,
    CreateIdempotent,
    RecoverNested,
}

/// Which authority a stake `Authorize*` instruction changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StakeAuthorize {
    Staker,
    Withdrawer,
}

impl StakeAuthorize {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StakeAuthorize::Staker),
            1 => Some(StakeAuthorize::Withdrawer),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StakeAuthorize::Staker => "Stake",
            StakeAuthorize::Withdrawer => "Withdraw",
        }
    }
}

/// Authority changed by a token `SetAuthority` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorityType {
    MintTokens,
    FreezeAccount,
    AccountOwner,
    CloseAccount,
}

impl AuthorityType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(AuthorityType::MintTokens),
            1 => Some(AuthorityType::FreezeAccount),
            2 => Some(AuthorityType::AccountOwner),
            3 => Some(AuthorityType::CloseAccount),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AuthorityType::MintTokens => "Mint tokens",
            AuthorityType::FreezeAccount => "Freeze account",
            AuthorityType::AccountOwner => "Account owner",
            AuthorityType::CloseAccount => "Close account",
        }
    }
}
