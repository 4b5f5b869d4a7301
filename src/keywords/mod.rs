// Keyword engine — word-frequency keywords and the banned-word content gate.
//
// Both halves are pure functions of their inputs. The banned list is passed
// in on every call; nothing here holds shared state or does I/O.

pub mod banned;
pub mod frequency;
pub mod traits;
