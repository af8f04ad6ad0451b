use soroban_sdk::contracttype;

/// Debt record returned by the venue's `flash_swap`: exactly what must be
/// repaid before the invocation tree commits. Exactly one side is non-zero
/// for a given swap.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapDebt {
    pub base_owed: i128,
    pub quote_owed: i128,
}

impl SwapDebt {
    /// The owed amount on the swap's input side.
    pub fn owed(&self) -> i128 {
        self.base_owed + self.quote_owed
    }
}
