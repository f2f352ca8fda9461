use solana_pubkey::Pubkey;
use solsign_instruction_decoder::StructuredInstruction;
use tracing::debug;

use super::NativeTransfer;

/// A single System transfer funded by the signer.
pub(super) fn native_transfer(
    instructions: &[StructuredInstruction],
    signer: &Pubkey,
) -> Option<NativeTransfer> {
    let [instruction] = instructions else {
        return None;
    };
    let transfer = instruction.as_system_transfer()?;
    if !transfer.funding_account.is(signer) {
        debug!("Transfer is not funded by the signer");
        return None;
    }
    Some(NativeTransfer {
        recipient: transfer.recipient_account,
        lamports: transfer.lamports,
    })
}
