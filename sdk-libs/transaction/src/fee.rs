use solsign_instruction_decoder::{
    kind::{AssociatedTokenAccountInstruction, InstructionKind},
    StructuredInstruction,
};

use crate::config::NetworkConstants;

const MICRO_LAMPORTS_PER_LAMPORT: u128 = 1_000_000;

/// Fee breakdown in lamports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fee {
    /// Signature fee.
    pub base: u64,
    /// Compute unit price times limit.
    pub priority: u64,
    /// Balances moved into newly created accounts.
    pub rent: u64,
    pub total: u64,
}

impl Fee {
    pub fn calculate(
        instructions: &[StructuredInstruction],
        required_signers: usize,
        network: &NetworkConstants,
    ) -> Self {
        let base = network
            .lamports_per_signature
            .saturating_mul(required_signers as u64);
        let priority = priority_fee(instructions, network);
        let rent = instructions
            .iter()
            .map(|instruction| rent(instruction, network))
            .fold(0u64, u64::saturating_add);

        Self {
            base,
            priority,
            rent,
            total: base.saturating_add(priority).saturating_add(rent),
        }
    }

    /// Signature and priority fee, without rent.
    pub fn network_fee(&self) -> u64 {
        self.base.saturating_add(self.priority)
    }
}

/// `ceil(price * limit / 10^6)` from the first price and limit instructions.
fn priority_fee(instructions: &[StructuredInstruction], network: &NetworkConstants) -> u64 {
    let Some(price) = instructions.iter().find_map(|i| i.compute_unit_price()) else {
        return 0;
    };
    let limit = instructions
        .iter()
        .find_map(|i| i.compute_unit_limit())
        .unwrap_or(network.default_compute_unit_limit);

    let micro_lamports = price as u128 * limit as u128;
    let lamports = micro_lamports.div_ceil(MICRO_LAMPORTS_PER_LAMPORT);
    u64::try_from(lamports).unwrap_or(u64::MAX)
}

fn rent(instruction: &StructuredInstruction, network: &NetworkConstants) -> u64 {
    if let Some(create) = instruction.as_system_create_account() {
        return create.lamports;
    }
    if let Some(create) = instruction.as_system_create_account_with_seed() {
        return create.lamports;
    }
    match instruction.kind {
        InstructionKind::AssociatedTokenAccount(
            AssociatedTokenAccountInstruction::Create
            | AssociatedTokenAccountInstruction::CreateIdempotent,
        ) => network.token_account_rent,
        _ => 0,
    }
}
