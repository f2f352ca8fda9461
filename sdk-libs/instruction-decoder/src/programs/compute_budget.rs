//! Compute Budget Program instructions, 1-byte discriminator.

use crate::{
    kind::{ComputeBudgetInstruction, InstructionKind},
    schema::*,
};

pub const INSTRUCTIONS: &[InstructionSchema] = &[
    schema!(
        Some(1),
        InstructionKind::ComputeBudget(ComputeBudgetInstruction::RequestHeapFrame),
        "Request Heap Frame",
        [number("bytes", "Bytes", FieldType::U32)],
        [],
    ),
    schema!(
        Some(2),
        InstructionKind::ComputeBudget(ComputeBudgetInstruction::SetComputeUnitLimit),
        "Set Compute Unit Limit",
        [number("units", "Units", FieldType::U32)],
        [],
    ),
    schema!(
        Some(3),
        InstructionKind::ComputeBudget(ComputeBudgetInstruction::SetComputeUnitPrice),
        "Set Compute Unit Price",
        // micro-lamports per compute unit
        [number("lamports", "Micro-lamports", FieldType::U64)],
        [],
    ),
];
