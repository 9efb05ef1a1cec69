//! Static word lists backing the title and name generators.
//!
//! The lists intentionally contain duplicates; picks are uniform over the
//! entries, so a duplicated word is simply twice as likely.

/// Fictional company names used in generated titles.
pub(crate) const COMPANY_NAMES: [&str; 50] = [
    "Zoonder",
    "Voolith",
    "Gabcube",
    "Rooxo",
    "Einti",
    "Zava",
    "Fivespan",
    "Dablist",
    "Twitterbridge",
    "Jaxworks",
    "Zooxo",
    "Aimbo",
    "Shuffletag",
    "Brightbean",
    "Yombu",
    "Leenti",
    "Trunyx",
    "Zoonoodle",
    "Aimbo",
    "Zoomdog",
    "Dynazzy",
    "Meedoo",
    "Fadeo",
    "Blogtag",
    "Vipe",
    "Mydo",
    "Bluejam",
    "Jaloo",
    "Oba",
    "Skilith",
    "Skiptube",
    "Devbug",
    "Centimia",
    "Twitternation",
    "Edgeclub",
    "Photospace",
    "Rhyzio",
    "Kazio",
    "Avamba",
    "Avamba",
    "Avavee",
    "Linkbridge",
    "Camido",
    "Jayo",
    "Kazu",
    "Realpoint",
    "Jabbersphere",
    "Zoomlounge",
    "Shuffletag",
    "Omba",
];

/// Corporate buzzwords used as title prefixes.
pub(crate) const BUZZ_WORDS: [&str; 65] = [
    "actuating",
    "synergy",
    "Streamlined",
    "success",
    "alliance",
    "Proactive",
    "leverage",
    "analyzing",
    "static",
    "Proactive",
    "bifurcated",
    "Front-line",
    "3rd generation",
    "optimizing",
    "synergy",
    "throughput",
    "core",
    "Cloned",
    "Quality-focused",
    "database",
    "Innovative",
    "approach",
    "Devolved",
    "full-range",
    "disintermediate",
    "support",
    "interface",
    "Business-focused",
    "protocol",
    "local",
    "high-level",
    "cohesive",
    "analyzer",
    "User-centric",
    "protocol",
    "concept",
    "Enterprise-wide",
    "leading edge",
    "cohesive",
    "systemic",
    "5th generation",
    "web-enabled",
    "multi-tasking",
    "open system",
    "hybrid",
    "approach",
    "leverage",
    "foreground",
    "Front-line",
    "Inverse",
    "approach",
    "Enterprise-wide",
    "multi-state",
    "flexibility",
    "Optimized",
    "Cloned",
    "object-oriented",
    "Fully-configurable",
    "Face to face",
    "uniform",
    "national",
    "object-oriented",
    "Automated",
    "solution",
    "secured line",
];

/// Product-style nonsense words used as title bodies.
pub(crate) const TITLE_WORDS: [&str; 66] = [
    "tresom",
    "bytecard",
    "stim",
    "it",
    "fintone",
    "biodex",
    "andalax",
    "fixflex",
    "cardify",
    "sonair",
    "tres-zap",
    "cardguard",
    "konklab",
    "regrant",
    "wrapsafe",
    "treeflex",
    "bitchip",
    "solarbreeze",
    "duobam",
    "voltsillam",
    "voltsillam",
    "sub-ex",
    "temp",
    "zoolab",
    "quo lux",
    "sonair",
    "ventosanzap",
    "treeflex",
    "fix san",
    "hatity",
    "holdlamis",
    "sub-ex",
    "flowdesk",
    "zaam-dox",
    "stronghold",
    "hatity",
    "solarbreeze",
    "redhold",
    "toughjoyfax",
    "lotstring",
    "gembucket",
    "it",
    "fix san",
    "cardguard",
    "hatity",
    "y-find",
    "alphazap",
    "ronstring",
    "alphazap",
    "opela",
    "zoolab",
    "mat lam tam",
    "veribet",
    "solarbreeze",
    "opela",
    "ventosanzap",
    "zoolab",
    "cardguard",
    "opela",
    "y-solowarm",
    "aerified",
    "regrant",
    "fintone",
    "otcom",
    "wrapsafe",
    "zathin",
];

/// Curated first names handed out at most once per session.
pub(crate) const CURATED_FIRST_NAMES: [&str; 2] = ["justin", "walker"];
