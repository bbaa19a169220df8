use crate::host::ActiveEffects;

// ============================================================
// POTION EFFECTS — Haste and Mining Fatigue on dig speed
// ============================================================

/// Multiplier applied to break speed for the player's active effects.
pub fn potion_multiplier(effects: &ActiveEffects) -> f64 {
    let mut speed = 1.0;
    if let Some(amplifier) = effects.haste {
        speed *= 1.0 + (amplifier as f64 + 1.0) * 0.2;
    }
    if let Some(amplifier) = effects.mining_fatigue {
        speed *= fatigue_multiplier(amplifier);
    }
    speed
}

fn fatigue_multiplier(amplifier: u8) -> f64 {
    match amplifier {
        0 => 0.3,
        1 => 0.09,
        // not 0.027, the game really uses 0.0027 here
        2 => 0.0027,
        _ => 0.00081,
    }
}
