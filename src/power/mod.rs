//! Boot-to-sleep power cycle sequencing.
//!
//! [`controller`] owns the fixed step order, [`hardware`] defines the seam
//! the platform adapters implement, [`wake`] classifies the wake cause and
//! [`state`] holds the small value types shared between them.

pub mod controller;
pub mod hardware;
pub mod state;
pub mod wake;
