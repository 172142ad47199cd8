//! Static classification tables.
//!
//! Compiled in and never mutated; every lookup is a linear scan or a
//! `match` over a handful of entries.

/// Providers that are applicant-tracking systems rather than job boards.
pub const ATS_NAMES: &[&str] = &[
    "workday",
    "greenhouse",
    "lever",
    "personio",
    "smartrecruiters",
    "teamtailor",
    "workable",
    "jazzhr",
    "ashby",
    "recruitee",
    "bamboohr",
    "icims",
    "jobvite",
    "breezyhr",
    "comeet",
    "pinpoint",
    "join",
];

/// Staffing and recruiting intermediaries, matched on the host or any subdomain.
pub const TALENT_AGENCY_DOMAINS: &[&str] = &[
    "adecco.com",
    "randstad.com",
    "manpowergroup.com",
    "hays.com",
    "tietalent.com",
    "aerotek.com",
    "pagepersonnel.com",
    "michaelpage.com",
    "robertwalters.com",
    "kornferry.com",
    "reedglobal.com",
    "alfredtalke.com",
];

/// Job and career words (EN, DE, FR, PL) skipped when picking a company label from a host.
pub const GENERIC_JOB_LABELS: &[&str] = &[
    // en
    "job",
    "jobs",
    "career",
    "careers",
    // de
    "karriere",
    "stellen",
    "stellenangebote",
    "arbeit",
    // fr
    "emploi",
    "carriere",
    "carrieres",
    // pl
    "praca",
    "kariera",
    "oferty",
    "ofertapracy",
    "ofertypracy",
    "oferta",
];

/// Two-label public suffixes treated as a single suffix.
pub const MULTI_LEVEL_SUFFIXES: &[&str] = &[
    "co.uk", "com.au", "com.br", "co.nz", "com.sg", "com.tr", "com.mx", "co.jp", "co.kr",
    "com.cn", "com.hk", "com.tw", "com.pl",
];

/// Path words that never make a meaningful posting id on their own.
pub const GENERIC_PATH_WORDS: &[&str] = &[
    "jobs",
    "job",
    "position",
    "career",
    "careers",
    "vacancies",
    "vacancy",
    "listing",
    "listings",
    "apply",
];

/// Last path segments the no-match fallback refuses to use as an id.
pub const FALLBACK_STOP_WORDS: &[&str] = &[
    "job",
    "jobs",
    "position",
    "positions",
    "career",
    "careers",
];

/// Query keys that may carry the channel a posting was found on, in priority order.
///
/// Greenhouse's `gh_src` is deliberately absent: it names a tracking token,
/// not a board.
pub const REFERRAL_KEYS: &[&str] = &["source", "src", "utm_source", "ref", "referrer"];

/// Canonical board name for a referral alias.
pub fn canonical_source(alias: &str) -> Option<&'static str> {
    let canonical = match alias {
        "li" | "lnkd" | "linkedin" => "linkedin",
        "angellist" | "angel" | "angelco" | "wellfound" => "wellfound",
        "cvlibrary" | "cv-library" => "cv-library",
        "stackoverflowjobs" | "stack-overflow" | "stackoverflow" => "stackoverflow",
        "wwr" | "weworkremotely" => "weworkremotely",
        "arbeitnow" => "arbeitnow",
        "stepstone" => "stepstone",
        "indeed" => "indeed",
        "xing" => "xing",
        "ziprecruiter" => "ziprecruiter",
        "glassdoor" => "glassdoor",
        "monster" => "monster",
        "totaljobs" => "totaljobs",
        "nofluffjobs" => "nofluffjobs",
        "pracuj" => "pracuj",
        _ => return None,
    };
    Some(canonical)
}

/// Whether `provider` names an applicant-tracking system.
pub fn is_ats(provider: &str) -> bool {
    ATS_NAMES.contains(&provider)
}

/// Whether `label` is a generic job/career host label (ASCII case-insensitive).
pub fn is_generic_job_label(label: &str) -> bool {
    GENERIC_JOB_LABELS
        .iter()
        .any(|g| g.eq_ignore_ascii_case(label))
}

/// Whether `segment` is a generic job/career path word (ASCII case-insensitive).
pub fn is_generic_path_word(segment: &str) -> bool {
    GENERIC_PATH_WORDS
        .iter()
        .any(|g| g.eq_ignore_ascii_case(segment))
}

/// Whether `segment` is one of the fallback stop words (ASCII case-insensitive).
pub fn is_fallback_stop_word(segment: &str) -> bool {
    FALLBACK_STOP_WORDS
        .iter()
        .any(|g| g.eq_ignore_ascii_case(segment))
}

/// Whether the two labels form a known multi-level public suffix.
pub fn is_multi_level_suffix(second_level: &str, top_level: &str) -> bool {
    MULTI_LEVEL_SUFFIXES.iter().any(|suffix| {
        suffix
            .split_once('.')
            .is_some_and(|(a, b)| a == second_level && b == top_level)
    })
}
