use crate::model::vehicle::{VehicleDto, VehicleStatus};

/// Fleet counters shown on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FleetStats {
    pub total: usize,
    pub online: usize,
    pub blocked: usize,
    pub pending_commands: usize,
}

impl FleetStats {
    pub fn from_vehicles(vehicles: &[VehicleDto]) -> Self {
        Self {
            total: vehicles.len(),
            online: vehicles
                .iter()
                .filter(|v| v.status == VehicleStatus::Online)
                .count(),
            blocked: vehicles.iter().filter(|v| v.blocked).count(),
            pending_commands: vehicles.iter().filter(|v| v.block_command_pending).count(),
        }
    }
}

/// Vehicles ordered by most recent contact, never-seen devices last.
pub fn recent_activity(vehicles: &[VehicleDto], count: usize) -> Vec<VehicleDto> {
    let mut recent = vehicles.to_vec();
    recent.sort_by(|a, b| b.last_seen.cmp(&a.last_seen));
    recent.truncate(count);

    recent
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn vehicle(id: i32, status: VehicleStatus, blocked: bool, pending: bool) -> VehicleDto {
        VehicleDto {
            id,
            imei: format!("86469606000000{}", id),
            cpf: None,
            plate: None,
            ignition: None,
            blocked,
            block_command_pending: pending,
            block_warning_sent: false,
            tracker_model: None,
            tracker_password: None,
            status,
            last_seen: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn counts_fleet() {
        let vehicles = vec![
            vehicle(1, VehicleStatus::Online, false, false),
            vehicle(2, VehicleStatus::Online, true, true),
            vehicle(3, VehicleStatus::Offline, false, true),
        ];

        let stats = FleetStats::from_vehicles(&vehicles);

        assert_eq!(
            stats,
            FleetStats {
                total: 3,
                online: 2,
                blocked: 1,
                pending_commands: 2,
            }
        );
    }

    /// Expect the most recently seen vehicles first and unseen vehicles last
    #[test]
    fn orders_recent_activity() {
        let now = Utc::now().naive_utc();
        let mut old = vehicle(1, VehicleStatus::Offline, false, false);
        old.last_seen = Some(now - Duration::hours(2));
        let never = vehicle(2, VehicleStatus::Offline, false, false);
        let mut fresh = vehicle(3, VehicleStatus::Online, false, false);
        fresh.last_seen = Some(now);

        let recent = recent_activity(&[old, never, fresh], 2);

        let ids: Vec<i32> = recent.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
