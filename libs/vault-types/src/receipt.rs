use soroban_sdk::{contracttype, Address};

/// Non-fungible ownership receipt: a proportional claim on one pool's held
/// balances, redeemable at burn time. Confers no claim on capital currently
/// deployed in the external position.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareReceipt {
    /// Owning pool id
    pub pool_id: u32,
    /// Asset-type tag: the pool's base token at mint time
    pub asset: Address,
    pub owner: Address,
    /// Share count
    pub shares: i128,
}

impl ShareReceipt {
    /// Fold `other` into `self`. Both receipts must reference the same pool,
    /// asset tag, and owner.
    pub fn combine(&mut self, other: &ShareReceipt) {
        if self.pool_id != other.pool_id {
            panic!("Receipt pool mismatch");
        }
        if self.asset != other.asset {
            panic!("Receipt asset mismatch");
        }
        if self.owner != other.owner {
            panic!("Not receipt owner");
        }
        self.shares += other.shares;
    }

    /// Carve `shares` out of `self` into a new receipt. The remainder must
    /// stay non-zero; a full carve-out is just the original receipt.
    pub fn split(&mut self, shares: i128) -> ShareReceipt {
        if shares <= 0 {
            panic!("Amount must be non-zero");
        }
        if shares >= self.shares {
            panic!("Insufficient shares");
        }
        self.shares -= shares;
        ShareReceipt {
            pool_id: self.pool_id,
            asset: self.asset.clone(),
            owner: self.owner.clone(),
            shares,
        }
    }
}
