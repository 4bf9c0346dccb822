/// Amount conversions.
pub mod amount;

pub use self::amount::{decimal_to_amount, lamports_to_sol, sol_to_lamports, Lamport};
