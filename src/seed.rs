use chrono::Utc;

use crate::entities::account::{Account, Role};
use crate::entities::bus::{Bus, BusStatus, GeoPoint, Stop};

pub const SUPER_ADMIN_EMAIL: &str = "superadmin@bustrack.com";

/// Built-in roster: the fixed super-admin plus one ordinary rider account.
/// Ids match the accounts the mobile app shipped with, so an existing
/// `bustrack_users` blob lines up with a fresh install.
pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "1".to_string(),
            name: "Super Admin".to_string(),
            email: SUPER_ADMIN_EMAIL.to_string(),
            password: "admin123".to_string(),
            role: Role::SuperAdmin,
            phone: None,
            created_at: Utc::now(),
        },
        Account {
            id: "4".to_string(),
            name: "Regular User".to_string(),
            email: "user@bustrack.com".to_string(),
            password: "user123".to_string(),
            role: Role::User,
            phone: None,
            created_at: Utc::now(),
        },
    ]
}

/// Static demo bus from the rider dashboard. There is no live telemetry;
/// locations and ETAs are mock data.
pub fn sample_buses() -> Vec<Bus> {
    vec![Bus {
        id: "bus-lss5".to_string(),
        number: "LSS5".to_string(),
        status: BusStatus::Active,
        current_location: GeoPoint {
            lat: 11.2760,
            lng: 77.5932,
        },
        stops: vec![
            Stop {
                id: "stop-1".to_string(),
                name: "Station".to_string(),
                location: GeoPoint {
                    lat: 11.2795,
                    lng: 77.5880,
                },
                estimated_arrival: Some("5 mins".to_string()),
                distance: Some(1.2),
            },
            Stop {
                id: "stop-2".to_string(),
                name: "Market".to_string(),
                location: GeoPoint {
                    lat: 11.2691,
                    lng: 77.6012,
                },
                estimated_arrival: Some("15 mins".to_string()),
                distance: Some(5.8),
            },
        ],
    }]
}
