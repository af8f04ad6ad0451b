use soroban_sdk::{contracttype, Address, String};

/// A pool's ledger entry and configuration. One vault instance holds many
/// pools, keyed by pool id.
///
/// Ledger invariant: `base_balance >= 0`, `quote_balance >= 0`,
/// `share_supply >= 0`, and for any deposit/withdraw sequence
/// `share_supply == 0` implies both balances are zero. Capital deployed into
/// the external venue position is intentionally not reflected in the
/// balances until it returns.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolInfo {
    /// Display name, reserved in the name registry at creation
    pub name: String,
    /// The single identity allowed to run position lifecycle calls
    pub admin: Address,
    /// Deposit asset
    pub base_token: Address,
    /// Paired asset received from venue swaps
    pub quote_token: Address,
    /// External liquidity venue pool contract
    pub venue: Address,
    /// Base asset held by the ledger
    pub base_balance: i128,
    /// Paired asset held by the ledger
    pub quote_balance: i128,
    /// Outstanding shares across all receipts
    pub share_supply: i128,
    /// The pool's one external position
    pub position: PositionStatus,
}

impl PoolInfo {
    pub fn new(
        name: String,
        admin: Address,
        base_token: Address,
        quote_token: Address,
        venue: Address,
    ) -> Self {
        Self {
            name,
            admin,
            base_token,
            quote_token,
            venue,
            base_balance: 0,
            quote_balance: 0,
            share_supply: 0,
            position: PositionStatus::NonExistent,
        }
    }

    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            base_balance: self.base_balance,
            quote_balance: self.quote_balance,
            share_supply: self.share_supply,
        }
    }
}

/// Ledger state snapshot carried by every mutating event, so an observer can
/// reconstruct pool state without re-deriving it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolSnapshot {
    pub base_balance: i128,
    pub quote_balance: i128,
    pub share_supply: i128,
}

/// Lifecycle of the pool's external position.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PositionStatus {
    /// No position has been opened yet (or the last one was destroyed)
    NonExistent,
    /// Deployed on the venue; may hold zero liquidity after removals
    Open(PositionInfo),
    /// Closed on the venue; a new position may be opened
    Closed,
}

/// Reference to an open venue position.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionInfo {
    /// Venue-assigned position identifier
    pub id: u64,
    pub tick_lower: i32,
    pub tick_upper: i32,
}
