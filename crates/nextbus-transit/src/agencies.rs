//! The fixed set of Bay Area transit operators the kiosk supports.

use serde::Serialize;

/// A transit operator, identified by its 511 short code.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Agency {
    pub id: &'static str,
    pub name: &'static str,
}

const AGENCIES: [Agency; 12] = [
    Agency { id: "AC", name: "AC Transit" },
    Agency { id: "SF", name: "SF Muni" },
    Agency { id: "BA", name: "BART" },
    Agency { id: "CT", name: "Caltrain" },
    Agency { id: "GG", name: "Golden Gate Transit" },
    Agency { id: "SM", name: "SamTrans" },
    Agency { id: "VTA", name: "VTA" },
    Agency { id: "CC", name: "County Connection" },
    Agency { id: "EM", name: "Emery Go-Round" },
    Agency { id: "PE", name: "Petaluma Transit" },
    Agency { id: "SR", name: "Santa Rosa CityBus" },
    Agency { id: "WC", name: "WestCAT" },
];

/// Static, ordered list of supported agencies.
pub fn agencies() -> &'static [Agency] {
    &AGENCIES
}
