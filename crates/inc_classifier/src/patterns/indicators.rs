//! Positive evidence. A road accident article needs one match from each set.

/// Vehicles, road types and driver roles.
pub const VEHICLE_INDICATORS: &[&str] = &[
    r"\b(?:auto|automobile|veicolo|macchina|vettura|motociclo|moto|bicicletta|bici|tir|camion|furgone|scooter)",
    r"\b(?:strada|via|piazza|strada provinciale|strada statale|sp\s*\d+|ss\s*\d+|ex\s*\d+)",
    r"\b(?:guid[ao]|conducent[ie]|autista|pilota)",
];

/// Incident nouns, loss-of-control verbs and injury or death in an accident.
pub const ACCIDENT_INDICATORS: &[&str] = &[
    r"\b(?:incidente|sinistro|scontro|tamponamento|schianto|ribaltamento|collisione)",
    r"\b(?:travolto|investito|sbalzato|sbandato|perduto\s+il\s+controllo|uscito\s+di\s+strada)",
    r"\b(?:feriti?|mort[io]|decedut[io])\s+(?:nell'|nell[ao]\s+|in\s+seguito\s+a\s+un\s+)?(?:incidente|sinistro|scontro)",
];
