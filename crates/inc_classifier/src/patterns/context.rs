//! Trigger and override groups of the contextual gates.
//!
//! Each gate owns its override list; they overlap on purpose but are tuned
//! independently.

/// The article says outright that nothing happened.
pub const EXPLICIT_NEGATION: &[&str] = &[
    r"\bnessun\s+incidente",
    r"\bnessun\s+sinistro",
    r"\btranquill[ao]\s+(?:sulle\s+strade|dal\s+punto\s+di\s+vista)",
    r"\b(?:giornata|giorno)\s+tranquill[ao]",
    r"\bpoche\s+code",
    r"\b(?:pasquetta\s+tranquilla|tranquilla.*?strade)",
];

/// Accidents mentioned only in a summary of many episodes.
pub const GENERIC_MENTION: &[&str] = &[
    r"\b(?:tra|fra)\s+(?:incendi?|incidenti?|salvataggi?)\s+(?:e|ed)\s+(?:incidenti?|incendi?)",
    r"\b(?:numerosi|molti|diversi)\s+(?:gli\s+)?(?:episodi?|incidenti?)\s+(?:che\s+si\s+sono\s+verificati|avvenuti)",
    r"\b(?:incidenti?\s+in\s+generale|attivita\s+di\s+soccorso)",
    r"\b(?:tra\s+incendi?|incidenti?\s+e\s+salvataggi?)",
    r"\b(?:numerosi\s+gli\s+episodi|episodi\s+che\s+si\s+sono\s+verificati)",
];

pub const GENERIC_MENTION_OVERRIDE: &[&str] = &[
    r"\b(?:si\s+e\s+verificat[io]|e\s+avvenut[io]|si\s+e\s+registrat[io])\s+(?:un'?\s*)?incidente",
    r"\b(?:incidente|sinistro)\s+(?:che\s+si\s+e\s+verificat[io]|avvenut[io]|registrat[io])",
    r"\b(?:questa\s+mattina|questa\s+sera|oggi|ieri|poco\s+fa)\s+.*?\s+(?:incidente|sinistro)",
];

/// "L'ultimo incidente risale a ..."
pub const PAST_REFERENCE: &[&str] = &[
    r"\b(?:ultim[ao]|precedent[ie]|passat[ao])\s+incidente\s+(?:risale|e\s+risalito|avvenut[io])\s+(?:a|al|alla)",
];

pub const PAST_REFERENCE_OVERRIDE: &[&str] = &[
    r"\b(?:si\s+e\s+verificat[io]|e\s+avvenut[io]|si\s+e\s+registrat[io])\s+(?:un'?\s*)?incidente",
    r"\b(?:incidente|sinistro)\s+(?:che\s+si\s+e\s+verificat[io]|avvenut[io]|registrat[io])\s+(?:questa|oggi|ieri)",
    r"\b(?:questa\s+mattina|questa\s+sera|oggi|poco\s+fa)\s+.*?\s+(?:incidente|sinistro)",
];

/// Someone who died or disappeared "in un incidente nel 1993".
pub const DATED_DEATH: &[&str] = &[
    r"\b(?:scompars[aio]|mort[aio]|decedut[aio])\s+(?:in\s+un\s+)?(?:incidente|sinistro)\s+(?:stradale\s+)?nel\s*(?:19|20)\d{2}",
];

pub const DATED_DEATH_OVERRIDE: &[&str] = &[
    r"\b(?:si\s+e\s+verificat[io]|e\s+avvenut[io]|si\s+e\s+registrat[io])\s+(?:un'?\s*)?incidente",
    r"\b(?:incidente|sinistro)\s+(?:che\s+si\s+e\s+verificat[io]|avvenut[io]|registrat[io])\s+(?:questa|oggi|ieri|poco\s+fa)",
    r"\b(?:questa\s+mattina|questa\s+sera|oggi|poco\s+fa|ieri)\s+.*?\s+(?:incidente|sinistro)",
    r"\b(?:incidente|sinistro)\s+(?:questa\s+mattina|questa\s+sera|oggi|poco\s+fa|ieri)",
];

/// One-way streets and traffic ordinances.
pub const VIABILITY: &[&str] = &[
    r"\b(?:senso\s+unico|sensi\s+unici|ordinanza.*?viabilita|modifica.*?sensi\s+di\s+marcia)",
    r"\b(?:sperimentazione|parte\s+(?:oggi|ufficialmente))\s+(?:il|la)\s+(?:senso\s+unico)",
];

pub const VIABILITY_OVERRIDE: &[&str] = &[
    r"\b(?:si\s+e\s+verificat[io]|e\s+avvenut[io]|si\s+e\s+registrat[io])\s+(?:un'?\s*)?incidente",
    r"\b(?:incidente|sinistro)\s+(?:che\s+si\s+e\s+verificat[io]|avvenut[io]|registrat[io])",
    r"\b(?:questa\s+mattina|questa\s+sera|oggi|poco\s+fa|ieri)\s+.*?\s+(?:incidente|sinistro)",
    r"\b(?:feriti?|mort[io]|decedut[io])\s+(?:in\s+seguito\s+a\s+|nell'|nell[ao]\s+)(?:un\s+)?(?:incidente|sinistro)",
    r"\b(?:scontro|tamponamento|schianto|ribaltamento|collisione)\s+(?:tra|fra|sulla|sulle)",
];
