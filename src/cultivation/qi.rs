use crate::character::player::Player;
use crate::core::constants::{MAX_OFFLINE_SECONDS, OFFLINE_QI_MULTIPLIER};
use crate::core::error::EngineError;
use crate::realms::RealmCatalog;

/// Accrues passive qi for time spent cultivating.
///
/// Gain is the current realm's `qi_rate` times the elapsed seconds; the
/// caller decides the tick cadence. Returns the qi gained.
pub fn accrue_qi(
    player: &mut Player,
    realms: &RealmCatalog,
    elapsed_seconds: f64,
) -> Result<f64, EngineError> {
    let realm = realms
        .get(&player.realm_id)
        .ok_or_else(|| EngineError::UnknownRealm(player.realm_id.clone()))?;

    if elapsed_seconds <= 0.0 {
        return Ok(0.0);
    }

    let gained = realm.qi_rate * elapsed_seconds;
    player.cultivation_progress += gained;
    Ok(gained)
}

/// Report of qi accrued while the player was away.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OfflineQiReport {
    pub elapsed_seconds: f64,
    /// Seconds actually credited after the offline cap.
    pub credited_seconds: f64,
    pub qi_gained: f64,
}

/// Accrues qi for offline time at a reduced rate.
///
/// Offline cultivation earns `OFFLINE_QI_MULTIPLIER` of the online rate and
/// is capped at `MAX_OFFLINE_SECONDS` of credit.
pub fn accrue_offline_qi(
    player: &mut Player,
    realms: &RealmCatalog,
    elapsed_seconds: f64,
) -> Result<OfflineQiReport, EngineError> {
    let realm = realms
        .get(&player.realm_id)
        .ok_or_else(|| EngineError::UnknownRealm(player.realm_id.clone()))?;

    if elapsed_seconds <= 0.0 {
        return Ok(OfflineQiReport::default());
    }

    let credited_seconds = elapsed_seconds.min(MAX_OFFLINE_SECONDS);
    let qi_gained = realm.qi_rate * credited_seconds * OFFLINE_QI_MULTIPLIER;
    player.cultivation_progress += qi_gained;

    Ok(OfflineQiReport {
        elapsed_seconds,
        credited_seconds,
        qi_gained,
    })
}
