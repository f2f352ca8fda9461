/// Largest serialized transaction the chain accepts.
pub const PACKET_DATA_SIZE: usize = 1232;

/// Fee and rent model constants of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConstants {
    pub lamports_per_signature: u64,
    /// Compute unit limit assumed when no `SetComputeUnitLimit` is present.
    pub default_compute_unit_limit: u64,
    /// Rent-exempt balance of a token account.
    pub token_account_rent: u64,
}

impl Default for NetworkConstants {
    fn default() -> Self {
        Self {
            lamports_per_signature: 5000,
            default_compute_unit_limit: 200_000,
            token_account_rent: 2_039_280,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionConfig {
    pub network: NetworkConstants,
    pub max_transaction_size: usize,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            network: NetworkConstants::default(),
            max_transaction_size: PACKET_DATA_SIZE,
        }
    }
}

impl TransactionConfig {
    pub fn new(network: NetworkConstants) -> Self {
        Self {
            network,
            ..Default::default()
        }
    }

    pub fn with_max_transaction_size(mut self, max_transaction_size: usize) -> Self {
        self.max_transaction_size = max_transaction_size;
        self
    }

    pub fn with_lamports_per_signature(mut self, lamports: u64) -> Self {
        self.network.lamports_per_signature = lamports;
        self
    }

    pub fn with_default_compute_unit_limit(mut self, units: u64) -> Self {
        self.network.default_compute_unit_limit = units;
        self
    }

    pub fn with_token_account_rent(mut self, lamports: u64) -> Self {
        self.network.token_account_rent = lamports;
        self
    }
}
