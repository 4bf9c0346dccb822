/// Value with the context slot.
pub mod with_slot;

pub use self::with_slot::WithSlot;
