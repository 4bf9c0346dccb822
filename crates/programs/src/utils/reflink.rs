use crate::reflink::accounts::Referral;

impl Referral {
    /// Returns whether the payment was made in native SOL.
    pub fn is_native(&self) -> bool {
        self.token_mint.is_none()
    }
}
