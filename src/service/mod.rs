//! Query side: summary projection and the verification use case.

pub mod verification;
pub mod wallet;

pub use verification::{WalletVerification, WalletVerificationUseCase};
pub use wallet::{WalletRiskSummary, WalletService};
