use bevy_ecs::system::Res;

use super::resources::SimFault;

// Bevy run condition functions (for use with `.run_if()`).

/// True until a breed pass records a fault. Gates everything that would mark
/// the tick as completed.
pub fn tick_healthy(fault: Res<SimFault>) -> bool {
    !fault.is_set()
}
