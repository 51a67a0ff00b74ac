//! Fee schedule and precision constants. Fixed by the protocol, not
//! configuration.

/// Fee scale every signing payload carries verbatim.
pub const FEE_SCALE: u16 = 100;

/// Minimal units per whole chain coin.
pub const UNITY: u64 = 100_000_000;

/// Default payment fee, in minimal units.
pub const PAYMENT_FEE: u64 = 10_000_000;
/// Default leasing fee, in minimal units.
pub const LEASE_FEE: u64 = 10_000_000;
/// Default lease cancellation fee, in minimal units.
pub const CANCEL_LEASE_FEE: u64 = 10_000_000;
/// Default contract registration fee, in minimal units.
pub const REGISTER_CONTRACT_FEE: u64 = 10_000_000_000;
/// Default contract execution fee, in minimal units.
pub const EXECUTE_CONTRACT_FEE: u64 = 30_000_000;
/// Default database put fee, in minimal units.
pub const DB_PUT_FEE: u64 = 100_000_000;
