// Gateway module for timers - follows the Train Station Pattern
// All external access must go through this gateway

mod oneshot;

pub use oneshot::OneShot;
